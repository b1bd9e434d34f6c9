use keluh_core::api_models::ResponseWithMessage;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::errors::{ClientError, ClientResult};

pub struct ServerResponse {
    http_response: reqwest::Response,
}

impl ServerResponse {
    pub(crate) fn from_reqwest_response(response: reqwest::Response) -> Self {
        Self {
            http_response: response,
        }
    }

    pub(crate) fn status(&self) -> StatusCode {
        self.http_response.status()
    }

    pub(crate) async fn json<V>(self) -> ClientResult<V>
    where
        V: DeserializeOwned,
    {
        let body_data = self
            .http_response
            .bytes()
            .await
            .map_err(|error| ClientError::RequestExecutionError { error })?;

        serde_json::from_slice(&body_data)
            .map_err(|error| ClientError::ResponseJsonBodyError { error })
    }

    /// Converts an unsuccessful response into a [`ClientError::RemoteRejection`].
    ///
    /// The backend's `message` is attached when the body carries one;
    /// an unreadable or non-JSON body only loses the message, never the status.
    pub(crate) async fn into_rejection(self) -> ClientError {
        let status_code = self.status();

        let message = match self.http_response.bytes().await {
            Ok(body_data) => serde_json::from_slice::<ResponseWithMessage>(&body_data)
                .ok()
                .and_then(|response| response.message),
            Err(_) => None,
        };

        ClientError::remote_rejection(status_code, message)
    }
}
