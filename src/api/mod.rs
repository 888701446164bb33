//! Client for the remote travel API.
//!
//! The API owns every record; this crate only reads request-scoped copies
//! and forwards full-record writes.

pub mod client;
pub mod discovery;

pub use client::ApiClient;
pub use discovery::resolve_base_url;
