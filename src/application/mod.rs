//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers record submissions; query handlers read profiles,
//! recommendations, courses and analytics.

pub mod handlers;

pub use handlers::{
    GetCourseHandler, GetCourseQuery, GetPerformanceHandler, GetPerformanceQuery,
    ListCoursesHandler, ProfileManager, RecommendCoursesHandler, RecommendCoursesQuery,
    RecordBehavioralResponseCommand, RecordBehavioralResponseHandler,
    RecordTechnicalAttemptCommand, RecordTechnicalAttemptHandler,
};
