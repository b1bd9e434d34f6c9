use thiserror::Error;

use crate::api_models::Category;


#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DraftValidationError {
    #[error("category name is required")]
    MissingName,

    #[error("category description is required")]
    MissingDescription,
}


/// Candidate values for a category that is about to be created or edited.
///
/// Drafts live only on the client. Whoever owns the draft keeps it until
/// the write succeeds, so a failed submission can simply be retried.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct CategoryDraft {
    pub name: String,

    pub description: String,
}

impl CategoryDraft {
    pub fn new<N, D>(name: N, description: D) -> Self
    where
        N: Into<String>,
        D: Into<String>,
    {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Prefills a draft with the current values of an existing category.
    pub fn from_category(category: &Category) -> Self {
        Self {
            name: category.name.clone(),
            description: category.description.clone(),
        }
    }

    /// Both fields are required; a value consisting only of whitespace counts as missing.
    pub fn validate(&self) -> Result<(), DraftValidationError> {
        if self.name.trim().is_empty() {
            return Err(DraftValidationError::MissingName);
        }

        if self.description.trim().is_empty() {
            return Err(DraftValidationError::MissingDescription);
        }

        Ok(())
    }
}
