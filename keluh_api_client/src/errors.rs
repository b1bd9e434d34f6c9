use reqwest::StatusCode;
use thiserror::Error;



#[derive(Debug, Error)]
pub enum ClientError {
    #[error("failed to prepare a URL")]
    UrlPreparationError {
        #[from]
        #[source]
        error: url::ParseError,
    },

    #[error("failed to serialize body data as JSON")]
    RequestBodySerializationError {
        #[source]
        error: serde_json::Error,
    },

    #[error("no access token is available for this session")]
    MissingCredentials,

    /// The request never got a response: timeouts, DNS failures, refused or reset connections.
    #[error("failed while executing HTTP request")]
    RequestExecutionError {
        #[source]
        error: reqwest::Error,
    },

    #[error(
        "failed to extract JSON body from response \
        (either invalid JSON syntax or mismatching content schema)"
    )]
    ResponseJsonBodyError {
        #[source]
        error: serde_json::Error,
    },

    /// The server answered with a non-success status code.
    #[error(
        "server rejected the request with {}{}",
        .status_code,
        format_optional_message(.message)
    )]
    RemoteRejection {
        status_code: StatusCode,
        message: Option<String>,
    },
}

impl ClientError {
    #[inline]
    pub(crate) const fn remote_rejection(status_code: StatusCode, message: Option<String>) -> Self {
        Self::RemoteRejection {
            status_code,
            message,
        }
    }

    /// Whether the failure happened on the way to (or back from) the server,
    /// as opposed to the server answering with an error.
    pub fn is_network_error(&self) -> bool {
        matches!(self, Self::RequestExecutionError { .. })
    }

    pub fn is_timeout(&self) -> bool {
        match self {
            Self::RequestExecutionError { error } => error.is_timeout(),
            _ => false,
        }
    }

    pub fn rejection_status(&self) -> Option<StatusCode> {
        match self {
            Self::RemoteRejection { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }
}


/// Formats an optional server message as a `": message"` suffix (or nothing).
pub fn format_optional_message(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|text| format!(": {}", text))
        .unwrap_or_default()
}


pub type ClientResult<V, E = ClientError> = Result<V, E>;


#[derive(Debug, Error)]
pub enum ClientInitializationError {
    #[error("unable to initialize reqwest HTTP client")]
    UnableToInitializeReqwestClient {
        #[from]
        #[source]
        error: reqwest::Error,
    },
}
