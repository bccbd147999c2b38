//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod analytics;
pub mod assessment;
pub mod catalog;
pub mod profile;
pub mod recommendation;

pub use analytics::{GetPerformanceHandler, GetPerformanceQuery};
pub use assessment::{
    RecordBehavioralResponseCommand, RecordBehavioralResponseHandler,
    RecordTechnicalAttemptCommand, RecordTechnicalAttemptHandler,
};
pub use catalog::{GetCourseHandler, GetCourseQuery, ListCoursesHandler};
pub use profile::ProfileManager;
pub use recommendation::{RecommendCoursesHandler, RecommendCoursesQuery};
