//! A client for the Keluh Provinsi backend, implementing **only the categories resource**.
//!
//! Start by describing the backend with an [`ApiServer`], build a [`Client`] for it
//! and attach a [`CredentialProvider`] with [`Client::with_credentials`].
//! The resulting [`AuthenticatedClient`] exposes the category endpoints
//! through [`AuthenticatedClient::categories`].

pub mod api;
pub mod authentication;
mod clients;
mod errors;
pub(crate) mod macros;
pub(crate) mod request;
mod response;
pub mod server;

pub use authentication::{AccessToken, CredentialProvider, SessionCredentials};
pub use clients::*;
pub use errors::*;
pub use reqwest::StatusCode;
pub(crate) use response::ServerResponse;
pub use server::{ApiServer, ApiServerOptions, ServerHost};
