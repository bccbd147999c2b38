//! HTTP adapter for the current identity.

mod handlers;

pub use handlers::{identity_routes, MeResponse};
