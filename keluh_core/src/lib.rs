//! Shared models for the Keluh category client: wire-level API models,
//! identifiers, the local draft type and the local filtering rules.

pub mod api_models;
pub mod draft;
pub mod filter;
pub mod ids;
