pub use std::{sync::Arc, time::Duration};

pub use keluh_api_client::{
    AccessToken,
    ApiServer,
    AuthenticatedClient,
    Client,
    ClientError,
    ClientOptions,
    SessionCredentials,
    StatusCode,
};
pub use keluh_core::{
    api_models::Category,
    draft::{CategoryDraft, DraftValidationError},
    ids::CategoryId,
};
pub use keluh_store::*;

pub use super::sample_categories::*;
pub use super::server::{
    prepare_mock_backend,
    unreachable_api_server,
    MockBackend,
    MockOperation,
    RecordedRequest,
    TEST_ACCESS_TOKEN,
};
