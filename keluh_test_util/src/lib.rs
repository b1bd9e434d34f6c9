//! Test facilities: an in-process mock of the Keluh backend's `/categories` resource,
//! plus helpers for building clients and stores against it.

pub mod prelude;
pub mod sample_categories;
mod server;

pub use server::*;
