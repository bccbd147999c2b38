//! HTTP adapters - REST API implementations.
//!
//! Each feature has its own module with DTOs, axum handlers and routes;
//! `router` assembles them behind the auth middleware.

pub mod analytics;
pub mod assessment;
pub mod course;
pub mod error;
pub mod identity;
pub mod middleware;
pub mod recommendation;
pub mod router;

pub use error::{domain_error_response, ErrorResponse};
pub use router::{api_router, build_router, HttpHandlers};
