use std::{
    collections::HashMap,
    net::{SocketAddr, TcpListener},
    sync::{Arc, Mutex, MutexGuard},
    time::Duration,
};

use actix_web::{
    dev::ServerHandle,
    http::{header, StatusCode},
    web,
    App,
    HttpRequest,
    HttpResponse,
    HttpServer,
};
use chrono::Utc;
use keluh_api_client::{
    AccessToken,
    ApiServer,
    ApiServerOptions,
    AuthenticatedClient,
    Client,
    ClientOptions,
    CredentialProvider,
};
use keluh_core::{
    api_models::{
        CategoriesResponse,
        Category,
        CategoryCreationRequest,
        CategoryResponse,
        CategoryUpdateRequest,
        ResponseWithMessage,
    },
    ids::CategoryId,
};
use keluh_store::{CategoryStore, ConfirmDeletion, RecordingNotifier};
use tracing_actix_web::TracingLogger;


/// The only bearer token the mock backend accepts.
pub const TEST_ACCESS_TOKEN: &str = "keluh-test-access-token";


#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum MockOperation {
    List,
    Create,
    Update,
    Delete,
}


/// A request as seen by the mock backend.
#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub operation: MockOperation,
    pub path: String,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: Option<serde_json::Value>,
}


#[derive(Default)]
struct MockBackendInner {
    categories: Vec<Category>,

    last_assigned_id: u64,

    recorded_requests: Vec<RecordedRequest>,

    /// One-shot failures: the next request of the operation gets this status code.
    pending_failures: HashMap<MockOperation, u16>,

    response_delays: HashMap<MockOperation, Duration>,
}

impl MockBackendInner {
    fn insert(&mut self, name: String, description: String) -> Category {
        self.last_assigned_id += 1;

        let now = Utc::now();
        let category = Category {
            id: CategoryId::new(self.last_assigned_id),
            name,
            description,
            created_at: Some(now),
            updated_at: Some(now),
        };

        self.categories.push(category.clone());
        category
    }
}


#[derive(Default)]
struct MockBackendState {
    inner: Mutex<MockBackendInner>,
}

impl MockBackendState {
    fn lock(&self) -> MutexGuard<'_, MockBackendInner> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}



/// An in-process HTTP server imitating the backend's `/api/v1/categories` resource.
///
/// Categories live in memory, ids are assigned sequentially starting at 1,
/// and every request is recorded. Requests without `Authorization: Bearer`
/// [`TEST_ACCESS_TOKEN`] are answered with `401 Unauthorized`.
pub struct MockBackend {
    state: web::Data<MockBackendState>,
    address: SocketAddr,
    server_handle: ServerHandle,
}

impl MockBackend {
    pub fn address(&self) -> SocketAddr {
        self.address
    }

    pub fn api_server(&self) -> ApiServer {
        ApiServer::new(self.address, ApiServerOptions { use_https: false })
    }

    pub fn client_with_credentials(
        &self,
        credentials: Arc<dyn CredentialProvider>,
    ) -> AuthenticatedClient {
        Client::new(Arc::new(self.api_server()), ClientOptions::default())
            .expect("failed to set up API client")
            .with_credentials(credentials)
    }

    pub fn authenticated_client(&self) -> AuthenticatedClient {
        self.client_with_credentials(Arc::new(AccessToken::new(TEST_ACCESS_TOKEN)))
    }

    /// Builds a store against this backend, returning the notifier it reports to.
    pub fn store(
        &self,
        confirmation: Arc<dyn ConfirmDeletion>,
    ) -> (CategoryStore, Arc<RecordingNotifier>) {
        let notifier = Arc::new(RecordingNotifier::new());

        let store = CategoryStore::new(
            self.authenticated_client(),
            confirmation,
            notifier.clone(),
        );

        (store, notifier)
    }


    pub fn insert_category<N, D>(&self, name: N, description: D) -> Category
    where
        N: Into<String>,
        D: Into<String>,
    {
        self.state.lock().insert(name.into(), description.into())
    }

    /// The backend's current categories, bypassing the API.
    pub fn categories(&self) -> Vec<Category> {
        self.state.lock().categories.clone()
    }

    pub fn recorded_requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().recorded_requests.clone()
    }

    pub fn request_count(&self, operation: MockOperation) -> usize {
        self.state
            .lock()
            .recorded_requests
            .iter()
            .filter(|request| request.operation == operation)
            .count()
    }

    /// Makes the next request of `operation` fail with `status_code`.
    pub fn fail_next(&self, operation: MockOperation, status_code: keluh_api_client::StatusCode) {
        self.state
            .lock()
            .pending_failures
            .insert(operation, status_code.as_u16());
    }

    /// Delays every response to `operation` by `delay`.
    pub fn delay_responses(&self, operation: MockOperation, delay: Duration) {
        self.state
            .lock()
            .response_delays
            .insert(operation, delay);
    }
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        // The stop command is sent immediately; there is no need to await completion.
        drop(self.server_handle.stop(false));
    }
}



/// Starts a mock backend on a random local port.
pub async fn prepare_mock_backend() -> MockBackend {
    let state = web::Data::new(MockBackendState::default());
    let app_state = state.clone();

    let http_server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(app_state.clone())
            .service(
                web::scope("/api/v1")
                    .route("/categories", web::get().to(list_categories))
                    .route("/categories", web::post().to(create_category))
                    .route("/categories/{id}", web::put().to(update_category))
                    .route("/categories/{id}", web::delete().to(delete_category)),
            )
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .expect("failed to bind mock backend");

    let address = http_server
        .addrs()
        .first()
        .copied()
        .expect("mock backend is not bound to any address");

    let server = http_server.run();
    let server_handle = server.handle();
    tokio::spawn(server);

    MockBackend {
        state,
        address,
        server_handle,
    }
}


/// An API root on a local port nothing is listening on, so every request fails to connect.
pub fn unreachable_api_server() -> ApiServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("failed to reserve a local port");
    let address = listener
        .local_addr()
        .expect("failed to read reserved local address");
    drop(listener);

    ApiServer::new(address, ApiServerOptions { use_https: false })
}



fn header_value(request: &HttpRequest, header_name: header::HeaderName) -> Option<String> {
    request
        .headers()
        .get(header_name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

fn message_response(status_code: StatusCode, message: &str) -> HttpResponse {
    HttpResponse::build(status_code).json(ResponseWithMessage::new(message))
}


/// Records the request, applies the configured delay and decides whether it is
/// rejected before reaching the operation itself.
async fn intercept(
    state: &MockBackendState,
    request: &HttpRequest,
    body: &web::Bytes,
    operation: MockOperation,
) -> Option<HttpResponse> {
    let authorization = header_value(request, header::AUTHORIZATION);

    let (delay, pending_failure) = {
        let mut inner = state.lock();

        inner.recorded_requests.push(RecordedRequest {
            operation,
            path: request.path().to_string(),
            authorization: authorization.clone(),
            content_type: header_value(request, header::CONTENT_TYPE),
            body: serde_json::from_slice(body).ok(),
        });

        (
            inner.response_delays.get(&operation).copied(),
            inner.pending_failures.remove(&operation),
        )
    };

    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }

    let expected_authorization = format!("Bearer {}", TEST_ACCESS_TOKEN);
    if authorization.as_deref() != Some(expected_authorization.as_str()) {
        return Some(message_response(
            StatusCode::UNAUTHORIZED,
            "invalid or expired jwt",
        ));
    }

    pending_failure.map(|status_code| {
        message_response(
            StatusCode::from_u16(status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            "injected failure",
        )
    })
}


async fn list_categories(
    state: web::Data<MockBackendState>,
    request: HttpRequest,
    body: web::Bytes,
) -> HttpResponse {
    if let Some(response) = intercept(&state, &request, &body, MockOperation::List).await {
        return response;
    }

    let categories = state.lock().categories.clone();

    HttpResponse::Ok().json(CategoriesResponse { data: categories })
}


async fn create_category(
    state: web::Data<MockBackendState>,
    request: HttpRequest,
    body: web::Bytes,
) -> HttpResponse {
    if let Some(response) = intercept(&state, &request, &body, MockOperation::Create).await {
        return response;
    }

    let Ok(creation_request) = serde_json::from_slice::<CategoryCreationRequest>(&body) else {
        return message_response(StatusCode::BAD_REQUEST, "invalid request body");
    };

    let category = state
        .lock()
        .insert(creation_request.name, creation_request.description);

    HttpResponse::Created().json(CategoryResponse {
        message: Some("success".to_string()),
        data: category,
    })
}


async fn update_category(
    state: web::Data<MockBackendState>,
    request: HttpRequest,
    path: web::Path<u64>,
    body: web::Bytes,
) -> HttpResponse {
    if let Some(response) = intercept(&state, &request, &body, MockOperation::Update).await {
        return response;
    }

    let Ok(update_request) = serde_json::from_slice::<CategoryUpdateRequest>(&body) else {
        return message_response(StatusCode::BAD_REQUEST, "invalid request body");
    };

    let category_id = CategoryId::new(path.into_inner());

    let mut inner = state.lock();
    let Some(category) = inner
        .categories
        .iter_mut()
        .find(|category| category.id == category_id)
    else {
        return message_response(StatusCode::NOT_FOUND, "category not found");
    };

    category.name = update_request.name;
    category.description = update_request.description;
    category.updated_at = Some(Utc::now());

    HttpResponse::Ok().json(CategoryResponse {
        message: Some("success".to_string()),
        data: category.clone(),
    })
}


async fn delete_category(
    state: web::Data<MockBackendState>,
    request: HttpRequest,
    path: web::Path<u64>,
    body: web::Bytes,
) -> HttpResponse {
    if let Some(response) = intercept(&state, &request, &body, MockOperation::Delete).await {
        return response;
    }

    let category_id = CategoryId::new(path.into_inner());

    let mut inner = state.lock();
    let category_count_before = inner.categories.len();
    inner
        .categories
        .retain(|category| category.id != category_id);

    if inner.categories.len() == category_count_before {
        return message_response(StatusCode::NOT_FOUND, "category not found");
    }

    message_response(StatusCode::OK, "success")
}
