//! HTTP adapter for learner performance analytics.

mod dto;
mod handlers;
mod routes;

pub use dto::PerformanceResponse;
pub use handlers::AnalyticsHandlers;
pub use routes::analytics_routes;
