use serde::Deserialize;

use crate::traits::Resolve;


pub(crate) type UnresolvedSessionConfiguration = SessionConfiguration;

/// Dashboard session-related configuration.
#[derive(Deserialize, Clone, Default)]
#[serde(default)]
pub struct SessionConfiguration {
    /// Bearer token to authenticate with. Command-line and environment overrides take precedence.
    pub access_token: Option<String>,
}

impl std::fmt::Debug for SessionConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionConfiguration")
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

impl Resolve for UnresolvedSessionConfiguration {
    type Resolved = SessionConfiguration;

    fn resolve(self) -> Self::Resolved {
        self
    }
}
