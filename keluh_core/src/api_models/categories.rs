use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::ids::CategoryId;


/// Treats an explicit JSON `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}


/// A complaint category, as owned by the backend.
///
/// Field names on the wire are PascalCase (`ID`, `Name`, ...), matching the backend.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug)]
pub struct Category {
    #[serde(rename = "ID")]
    pub id: CategoryId,

    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Description", default, deserialize_with = "null_as_default")]
    pub description: String,

    #[serde(
        rename = "CreatedAt",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(
        rename = "UpdatedAt",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Category {
    /// Builds a category without any server-assigned timestamps.
    pub fn new<N, D>(id: CategoryId, name: N, description: D) -> Self
    where
        N: Into<String>,
        D: Into<String>,
    {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            created_at: None,
            updated_at: None,
        }
    }
}



/// Body of `GET /categories`.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug, Default)]
pub struct CategoriesResponse {
    // The backend serializes an empty list as `null`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<Category>,
}


/// Body of successful `POST /categories` and `PUT /categories/{id}` responses.
///
/// The client never relies on this (it always reloads the list after a write),
/// but the shape is shared with the mock backend used in tests.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct CategoryResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    pub data: Category,
}



/// Body of `POST /categories`.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct CategoryCreationRequest {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Description")]
    pub description: String,
}


/// Body of `PUT /categories/{id}`: the full category with the edited values.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct CategoryUpdateRequest {
    #[serde(rename = "ID")]
    pub id: CategoryId,

    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Description")]
    pub description: String,
}
