//! This crate contains all configuration-relevant code, including
//! the full configuration structure as well as methods needed to load
//! and validate it.
//!
//! Your starting point should probably be [`Configuration::load_from_path`]
//! or [`Configuration::load_from_default_path_or_defaults`].
//!
//! # Internals
//! The entire configuration structure is based on the concept of
//! unvalidated ("unresolved") and validated configuration structures.
//!
//! Loading a configuration file first deserializes it into the
//! `UnresolvedConfiguration` structure, then resolves it, which recursively
//! turns it (and its tables) into validated ("resolved") versions.
//! The output is the [`Configuration`]. Any additional validation,
//! e.g. parsing the API base URL or the tracing filters, happens while resolving.
//!
//! Every table and field has a default, so an empty file (or no file at all)
//! is a valid configuration pointing at the production backend.

#![allow(rustdoc::private_intra_doc_links)]

mod error;
mod structure;
mod traits;
mod utilities;

pub use error::*;
pub use structure::*;
pub use utilities::get_default_configuration_file_path;
