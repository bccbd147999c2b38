//! HTTP adapter for behavioral and technical submissions.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    BehavioralResponseRequest, BehavioralResponseResponse, TechnicalAttemptRequest,
    TechnicalAttemptResponse,
};
pub use handlers::AssessmentHandlers;
pub use routes::assessment_routes;
