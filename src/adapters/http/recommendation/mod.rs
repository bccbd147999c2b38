//! HTTP adapter for profile and course recommendations.

mod dto;
mod handlers;
mod routes;

pub use dto::ProfileResponse;
pub use handlers::RecommendationHandlers;
pub use routes::recommendation_routes;
