use super::{build_request_url, NoUrl, PreparedUrl};
use crate::{
    clients::HttpClient,
    errors::{ClientError, ClientResult},
    response::ServerResponse,
};

pub(crate) struct DeleteRequestBuilder<'c, HC, U>
where
    HC: HttpClient,
{
    client: &'c HC,
    url: U,
}

impl<'c, HC> DeleteRequestBuilder<'c, HC, NoUrl>
where
    HC: HttpClient,
{
    pub(crate) fn new(client: &'c HC) -> Self {
        DeleteRequestBuilder { client, url: NoUrl }
    }

    pub(crate) fn endpoint_url<E>(
        self,
        relative_endpoint_url: E,
    ) -> DeleteRequestBuilder<'c, HC, PreparedUrl>
    where
        E: AsRef<str>,
    {
        DeleteRequestBuilder {
            client: self.client,
            url: build_request_url(
                self.client.server(),
                relative_endpoint_url.as_ref(),
            ),
        }
    }
}

impl<'c, HC> DeleteRequestBuilder<'c, HC, PreparedUrl>
where
    HC: HttpClient,
{
    pub(crate) async fn send(self) -> ClientResult<ServerResponse> {
        let request_url = self
            .url
            .map_err(|error| ClientError::UrlPreparationError { error })?;

        self.client.delete(request_url).await
    }
}
