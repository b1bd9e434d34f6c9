use std::{sync::Arc, time::Duration};

use reqwest::{header, Body};
use tracing::debug;
use url::Url;

use crate::{
    api::categories::CategoriesApi,
    authentication::CredentialProvider,
    errors::{ClientError, ClientInitializationError, ClientResult},
    response::ServerResponse,
    ApiServer,
};

pub(crate) trait HttpClient {
    fn server(&self) -> &ApiServer;

    async fn get(&self, url: Url) -> ClientResult<ServerResponse>;

    async fn post<B>(&self, url: Url, json_body: Option<B>) -> ClientResult<ServerResponse>
    where
        B: Into<Body>;

    async fn put<B>(&self, url: Url, json_body: Option<B>) -> ClientResult<ServerResponse>
    where
        B: Into<Body>;

    async fn delete(&self, url: Url) -> ClientResult<ServerResponse>;
}



fn build_client_user_agent() -> String {
    format!(
        "keluh_api_client / v{}",
        env!("CARGO_PKG_VERSION")
    )
}


pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct ClientOptions {
    /// Upper bound on a whole request, from connecting until the body has been read.
    pub request_timeout: Duration,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}


pub struct Client {
    server: Arc<ApiServer>,
    http_client: reqwest::Client,
}

impl Client {
    pub fn new(server: Arc<ApiServer>, options: ClientOptions) -> Result<Self, ClientInitializationError> {
        let http_client = reqwest::Client::builder()
            .zstd(true)
            .user_agent(build_client_user_agent())
            .timeout(options.request_timeout)
            .build()
            .map_err(|error| ClientInitializationError::UnableToInitializeReqwestClient { error })?;

        Ok(Self {
            server,
            http_client,
        })
    }

    pub fn server(&self) -> &ApiServer {
        &self.server
    }

    pub fn with_credentials(&self, credentials: Arc<dyn CredentialProvider>) -> AuthenticatedClient {
        AuthenticatedClient::new(
            self.server.clone(),
            credentials,
            self.http_client.clone(),
        )
    }
}



/// A client that attaches the current bearer token to every request it sends.
#[derive(Clone)]
pub struct AuthenticatedClient {
    server: Arc<ApiServer>,
    credentials: Arc<dyn CredentialProvider>,
    http_client: reqwest::Client,
}

impl AuthenticatedClient {
    pub(crate) fn new(
        server: Arc<ApiServer>,
        credentials: Arc<dyn CredentialProvider>,
        http_client: reqwest::Client,
    ) -> Self {
        Self {
            server,
            credentials,
            http_client,
        }
    }

    pub fn categories(&self) -> CategoriesApi<'_> {
        CategoriesApi::new(self)
    }

    fn access_token(&self) -> ClientResult<String> {
        self.credentials
            .access_token()
            .ok_or(ClientError::MissingCredentials)
    }

    async fn execute(&self, request_builder: reqwest::RequestBuilder) -> ClientResult<ServerResponse> {
        request_builder
            .bearer_auth(self.access_token()?)
            .send()
            .await
            .map(ServerResponse::from_reqwest_response)
            .map_err(|error| ClientError::RequestExecutionError { error })
    }

    fn with_json_body<B>(request_builder: reqwest::RequestBuilder, json_body: Option<B>) -> reqwest::RequestBuilder
    where
        B: Into<Body>,
    {
        match json_body {
            Some(json_body) => request_builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(json_body),
            None => request_builder,
        }
    }
}


impl HttpClient for AuthenticatedClient {
    fn server(&self) -> &ApiServer {
        &self.server
    }

    async fn get(&self, url: Url) -> ClientResult<ServerResponse> {
        debug!(url = %url, "Sending GET request.");

        self.execute(self.http_client.get(url)).await
    }

    async fn post<B>(&self, url: Url, json_body: Option<B>) -> ClientResult<ServerResponse>
    where
        B: Into<Body>,
    {
        debug!(url = %url, "Sending POST request.");

        let request_builder = Self::with_json_body(self.http_client.post(url), json_body);

        self.execute(request_builder).await
    }

    async fn put<B>(&self, url: Url, json_body: Option<B>) -> ClientResult<ServerResponse>
    where
        B: Into<Body>,
    {
        debug!(url = %url, "Sending PUT request.");

        let request_builder = Self::with_json_body(self.http_client.put(url), json_body);

        self.execute(request_builder).await
    }

    async fn delete(&self, url: Url) -> ClientResult<ServerResponse> {
        debug!(url = %url, "Sending DELETE request.");

        self.execute(self.http_client.delete(url)).await
    }
}
