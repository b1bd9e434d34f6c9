//! The category store: an in-memory mirror of the backend's categories,
//! kept in sync through explicit create / update / delete calls and
//! exposed to the presentation layer as plain snapshots and filtered views.
//!
//! The store does not talk to the user directly. Deletion confirmations go through
//! a [`ConfirmDeletion`] implementation and user-visible messages through a [`Notifier`].

mod collaborators;
mod errors;
mod form;
mod store;

pub use collaborators::*;
pub use errors::*;
pub use form::*;
pub use store::*;
