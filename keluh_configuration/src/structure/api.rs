use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::{traits::TryResolve, ApiConfigurationError};


pub const DEFAULT_API_BASE_URL: &str = "https://capstone-dev.mdrizki.my.id/api/v1";

const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;


#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub(crate) struct UnresolvedApiConfiguration {
    base_url: String,

    request_timeout_seconds: u64,
}

impl Default for UnresolvedApiConfiguration {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_seconds: DEFAULT_REQUEST_TIMEOUT_SECONDS,
        }
    }
}


/// Backend API-related configuration.
#[derive(Debug, Clone)]
pub struct ApiConfiguration {
    /// Versioned API root, e.g. `https://capstone-dev.mdrizki.my.id/api/v1`.
    pub base_url: Url,

    /// Upper bound on a single request, after which it fails as a network error.
    pub request_timeout: Duration,
}

impl TryResolve for UnresolvedApiConfiguration {
    type Resolved = ApiConfiguration;
    type Error = ApiConfigurationError;

    fn try_resolve(self) -> Result<Self::Resolved, Self::Error> {
        let base_url = Url::parse(&self.base_url).map_err(|error| {
            ApiConfigurationError::InvalidBaseUrl {
                base_url: self.base_url.clone(),
                error,
            }
        })?;

        if base_url.scheme() != "http" && base_url.scheme() != "https" {
            return Err(ApiConfigurationError::UnsupportedBaseUrlScheme {
                scheme: base_url.scheme().to_string(),
            });
        }

        if self.request_timeout_seconds == 0 {
            return Err(ApiConfigurationError::ZeroRequestTimeout);
        }

        Ok(ApiConfiguration {
            base_url,
            request_timeout: Duration::from_secs(self.request_timeout_seconds),
        })
    }
}
