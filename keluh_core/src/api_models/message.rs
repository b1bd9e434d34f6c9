use serde::{Deserialize, Serialize};


/// The envelope the backend wraps its error (and most success) responses in.
///
/// Only the `message` field is of interest when a request is rejected;
/// everything else in the body is ignored.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug, Default)]
pub struct ResponseWithMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ResponseWithMessage {
    pub fn new<M>(message: M) -> Self
    where
        M: Into<String>,
    {
        Self {
            message: Some(message.into()),
        }
    }
}
