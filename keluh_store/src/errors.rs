use keluh_api_client::{ClientError, StatusCode};
use keluh_core::{draft::DraftValidationError, ids::CategoryId};
use thiserror::Error;


#[derive(Debug, Error)]
pub enum CategoryStoreError {
    /// The draft was rejected locally; nothing was sent.
    #[error(transparent)]
    Validation {
        #[from]
        error: DraftValidationError,
    },

    /// The server could not be reached (timeout, DNS, refused or reset connection).
    #[error("{}", describe_network_error(.error))]
    Network {
        #[source]
        error: ClientError,
    },

    /// The server answered with a non-success status code.
    #[error(
        "server rejected the request ({}){}",
        .status_code,
        keluh_api_client::format_optional_message(.message)
    )]
    RemoteRejection {
        status_code: StatusCode,
        message: Option<String>,
    },

    /// Another create, update or delete is still being submitted.
    #[error("another category change is still being submitted")]
    MutationInProgress,

    #[error("category {} is not in the loaded category list", .category_id)]
    UnknownCategory { category_id: CategoryId },

    /// Any other client-side failure (missing credentials, malformed response, ...).
    #[error("{}", .error)]
    Client {
        #[source]
        error: ClientError,
    },

    /// The change was saved on the server, but reloading the list afterwards failed,
    /// so the mirror still shows the state from before the change.
    #[error("change saved, but reloading the category list failed: {}", .error)]
    ReconciliationFailed {
        #[source]
        error: Box<CategoryStoreError>,
    },
}

fn describe_network_error(error: &ClientError) -> &'static str {
    if error.is_timeout() {
        "the server did not respond in time"
    } else {
        "unable to reach the server"
    }
}

impl CategoryStoreError {
    /// Whether the requested change reached the server, despite the error.
    pub fn change_was_applied(&self) -> bool {
        matches!(self, Self::ReconciliationFailed { .. })
    }

    pub(crate) fn reconciliation_failed(error: CategoryStoreError) -> Self {
        Self::ReconciliationFailed {
            error: Box::new(error),
        }
    }
}

impl From<ClientError> for CategoryStoreError {
    fn from(error: ClientError) -> Self {
        match error {
            ClientError::RemoteRejection {
                status_code,
                message,
            } => Self::RemoteRejection {
                status_code,
                message,
            },
            error if error.is_network_error() => Self::Network { error },
            error => Self::Client { error },
        }
    }
}
