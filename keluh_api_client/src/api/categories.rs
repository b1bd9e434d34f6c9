use keluh_core::{
    api_models::{CategoriesResponse, Category, CategoryCreationRequest, CategoryUpdateRequest},
    draft::CategoryDraft,
    ids::CategoryId,
};
use tracing::debug;

use crate::{
    clients::HttpClient,
    errors::ClientResult,
    macros::reject_unsuccessful_response,
    request::RequestBuilder,
    AuthenticatedClient,
};


const CATEGORIES_ENDPOINT: &str = "/categories";

fn category_endpoint(category_id: CategoryId) -> String {
    format!("{}/{}", CATEGORIES_ENDPOINT, category_id)
}



async fn get_categories<C>(client: &C) -> ClientResult<Vec<Category>>
where
    C: HttpClient,
{
    let response = RequestBuilder::get(client)
        .endpoint_url(CATEGORIES_ENDPOINT)
        .send()
        .await?;

    let response = reject_unsuccessful_response!(response);

    let response_data = response.json::<CategoriesResponse>().await?;

    debug!(
        category_count = response_data.data.len(),
        "Fetched categories."
    );

    Ok(response_data.data)
}


async fn create_category<C>(client: &C, draft: &CategoryDraft) -> ClientResult<()>
where
    C: HttpClient,
{
    let response = RequestBuilder::post(client)
        .endpoint_url(CATEGORIES_ENDPOINT)
        .json(&CategoryCreationRequest {
            name: draft.name.clone(),
            description: draft.description.clone(),
        })
        .send()
        .await?;

    // The created category in the body is ignored; callers reload the whole list.
    reject_unsuccessful_response!(response);

    Ok(())
}


async fn update_category<C>(
    client: &C,
    category_id: CategoryId,
    draft: &CategoryDraft,
) -> ClientResult<()>
where
    C: HttpClient,
{
    let response = RequestBuilder::put(client)
        .endpoint_url(category_endpoint(category_id))
        .json(&CategoryUpdateRequest {
            id: category_id,
            name: draft.name.clone(),
            description: draft.description.clone(),
        })
        .send()
        .await?;

    reject_unsuccessful_response!(response);

    Ok(())
}


async fn delete_category<C>(client: &C, category_id: CategoryId) -> ClientResult<()>
where
    C: HttpClient,
{
    let response = RequestBuilder::delete(client)
        .endpoint_url(category_endpoint(category_id))
        .send()
        .await?;

    reject_unsuccessful_response!(response);

    Ok(())
}



/// The `/categories` resource. Every endpoint requires authentication.
pub struct CategoriesApi<'c> {
    client: &'c AuthenticatedClient,
}

impl<'c> CategoriesApi<'c> {
    pub(crate) fn new(client: &'c AuthenticatedClient) -> Self {
        Self { client }
    }

    /// `GET /categories`
    pub async fn get_categories(&self) -> ClientResult<Vec<Category>> {
        get_categories(self.client).await
    }

    /// `POST /categories`
    ///
    /// The draft is sent as-is; validating it is up to the caller.
    pub async fn create_category(&self, draft: &CategoryDraft) -> ClientResult<()> {
        create_category(self.client, draft).await
    }

    /// `PUT /categories/{id}`
    pub async fn update_category(
        &self,
        category_id: CategoryId,
        draft: &CategoryDraft,
    ) -> ClientResult<()> {
        update_category(self.client, category_id, draft).await
    }

    /// `DELETE /categories/{id}`
    pub async fn delete_category(&self, category_id: CategoryId) -> ClientResult<()> {
        delete_category(self.client, category_id).await
    }
}
