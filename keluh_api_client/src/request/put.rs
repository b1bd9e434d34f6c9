use serde::Serialize;

use super::{build_request_url, unpack_body, NoUrl, PreparedBody, PreparedUrl};
use crate::{clients::HttpClient, ClientError, ClientResult, ServerResponse};



pub(crate) struct PutRequestBuilder<'c, HC, U>
where
    HC: HttpClient,
{
    client: &'c HC,

    url: U,

    body: PreparedBody,
}


impl<'c, HC> PutRequestBuilder<'c, HC, NoUrl>
where
    HC: HttpClient,
{
    pub(crate) fn new(client: &'c HC) -> Self {
        PutRequestBuilder {
            client,
            url: NoUrl,
            body: None,
        }
    }

    pub(crate) fn endpoint_url<E>(
        self,
        relative_endpoint_url: E,
    ) -> PutRequestBuilder<'c, HC, PreparedUrl>
    where
        E: AsRef<str>,
    {
        PutRequestBuilder {
            client: self.client,
            url: build_request_url(
                self.client.server(),
                relative_endpoint_url.as_ref(),
            ),
            body: self.body,
        }
    }
}

impl<'c, HC, U> PutRequestBuilder<'c, HC, U>
where
    HC: HttpClient,
{
    pub(crate) fn json<V>(self, data: &V) -> Self
    where
        V: Serialize,
    {
        let serialized_data = serde_json::to_vec(data);

        PutRequestBuilder {
            client: self.client,
            url: self.url,
            body: Some(serialized_data),
        }
    }
}

impl<'c, HC> PutRequestBuilder<'c, HC, PreparedUrl>
where
    HC: HttpClient,
{
    pub(crate) async fn send(self) -> ClientResult<ServerResponse> {
        let request_url = self
            .url
            .map_err(|error| ClientError::UrlPreparationError { error })?;

        let body = unpack_body(self.body)?;


        self.client.put(request_url, body).await
    }
}
