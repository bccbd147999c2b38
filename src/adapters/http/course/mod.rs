//! HTTP adapter for the course catalog.

mod dto;
mod handlers;
mod routes;

pub use dto::{CourseResponse, ModuleResponse, QuestionResponse, QuizResponse};
pub use handlers::CourseHandlers;
pub use routes::course_routes;
