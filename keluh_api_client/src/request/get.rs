use super::{build_request_url, NoUrl, PreparedUrl};
use crate::{clients::HttpClient, ClientError, ClientResult, ServerResponse};

pub(crate) struct GetRequestBuilder<'c, HC, U>
where
    HC: HttpClient,
{
    client: &'c HC,
    url: U,
}

impl<'c, HC> GetRequestBuilder<'c, HC, NoUrl>
where
    HC: HttpClient,
{
    pub(crate) fn new(client: &'c HC) -> Self {
        GetRequestBuilder { client, url: NoUrl }
    }

    pub(crate) fn endpoint_url<E>(self, relative_endpoint_url: E) -> GetRequestBuilder<'c, HC, PreparedUrl>
    where
        E: AsRef<str>,
    {
        GetRequestBuilder {
            client: self.client,
            url: build_request_url(
                self.client.server(),
                relative_endpoint_url.as_ref(),
            ),
        }
    }
}

impl<'c, HC> GetRequestBuilder<'c, HC, PreparedUrl>
where
    HC: HttpClient,
{
    pub(crate) async fn send(self) -> ClientResult<ServerResponse> {
        let request_url = self
            .url
            .map_err(|error| ClientError::UrlPreparationError { error })?;

        self.client.get(request_url).await
    }
}
