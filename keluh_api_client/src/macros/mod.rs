/// Returns early with a [`ClientError::RemoteRejection`][crate::ClientError::RemoteRejection]
/// unless the response has a success (2xx) status.
macro_rules! reject_unsuccessful_response {
    ($response:expr) => {{
        let __response = $response;

        if !__response.status().is_success() {
            let __rejection = __response.into_rejection().await;

            ::tracing::debug!(
                error = %__rejection,
                "Server rejected the request."
            );

            return Err(__rejection.into());
        }

        __response
    }};
}

pub(crate) use reject_unsuccessful_response;
