use std::sync::Arc;

use arc_swap::ArcSwapOption;


/// Source of the bearer token attached to every outgoing request.
///
/// The token is asked for on each request, so implementations are free
/// to swap it out (e.g. after the user logs in again) while clients are alive.
pub trait CredentialProvider: Send + Sync {
    /// Returns the current access token, or `None` if there is no active session.
    fn access_token(&self) -> Option<String>;
}


/// A fixed access token.
#[derive(Clone)]
pub struct AccessToken {
    access_token: String,
}

impl AccessToken {
    pub fn new<S>(access_token: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            access_token: access_token.into(),
        }
    }
}

impl CredentialProvider for AccessToken {
    fn access_token(&self) -> Option<String> {
        Some(self.access_token.clone())
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessToken")
            .field("access_token", &"<redacted>")
            .finish()
    }
}


/// The credential store of a dashboard session.
///
/// Starts out empty (or with a token), can be replaced on re-login and
/// cleared on logout. Requests issued while it is empty fail before
/// reaching the network.
#[derive(Default)]
pub struct SessionCredentials {
    access_token: ArcSwapOption<String>,
}

impl SessionCredentials {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_access_token<S>(access_token: S) -> Self
    where
        S: Into<String>,
    {
        let access_token: String = access_token.into();

        Self {
            access_token: ArcSwapOption::from_pointee(access_token),
        }
    }

    pub fn set_access_token<S>(&self, access_token: S)
    where
        S: Into<String>,
    {
        self.access_token.store(Some(Arc::new(access_token.into())));
    }

    pub fn clear(&self) {
        self.access_token.store(None);
    }
}

impl CredentialProvider for SessionCredentials {
    fn access_token(&self) -> Option<String> {
        self.access_token
            .load()
            .as_ref()
            .map(|access_token| access_token.as_ref().clone())
    }
}
