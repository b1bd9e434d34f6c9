use serde::Serialize;

use super::{build_request_url, unpack_body, NoUrl, PreparedBody, PreparedUrl};
use crate::{clients::HttpClient, ClientError, ClientResult, ServerResponse};



pub(crate) struct PostRequestBuilder<'c, HC, U>
where
    HC: HttpClient,
{
    client: &'c HC,

    url: U,

    body: PreparedBody,
}


impl<'c, HC> PostRequestBuilder<'c, HC, NoUrl>
where
    HC: HttpClient,
{
    pub(crate) fn new(client: &'c HC) -> Self {
        PostRequestBuilder {
            client,
            url: NoUrl,
            body: None,
        }
    }

    pub(crate) fn endpoint_url<E>(
        self,
        relative_endpoint_url: E,
    ) -> PostRequestBuilder<'c, HC, PreparedUrl>
    where
        E: AsRef<str>,
    {
        PostRequestBuilder {
            client: self.client,
            url: build_request_url(
                self.client.server(),
                relative_endpoint_url.as_ref(),
            ),
            body: self.body,
        }
    }
}

impl<'c, HC, U> PostRequestBuilder<'c, HC, U>
where
    HC: HttpClient,
{
    pub(crate) fn json<V>(self, data: &V) -> Self
    where
        V: Serialize,
    {
        let serialized_data = serde_json::to_vec(data);

        PostRequestBuilder {
            client: self.client,
            url: self.url,
            body: Some(serialized_data),
        }
    }
}

impl<'c, HC> PostRequestBuilder<'c, HC, PreparedUrl>
where
    HC: HttpClient,
{
    pub(crate) async fn send(self) -> ClientResult<ServerResponse> {
        let request_url = self
            .url
            .map_err(|error| ClientError::UrlPreparationError { error })?;

        let body = unpack_body(self.body)?;


        self.client.post(request_url, body).await
    }
}
