//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `ResponseStore` - Behavioral responses and technical attempts
//! - `ProfileRepository` - One cognitive profile per learner
//! - `CourseCatalog` - Courses with modules, quiz and questions
//!
//! ## Identity Ports
//!
//! - `SessionValidator` - Bearer token validation
//!
//! ## Hooks
//!
//! - `SubmissionObserver` - Runs after every recorded submission

mod course_catalog;
mod profile_repository;
mod response_store;
mod session_validator;
mod submission_observer;

pub use course_catalog::CourseCatalog;
pub use profile_repository::ProfileRepository;
pub use response_store::ResponseStore;
pub use session_validator::SessionValidator;
pub use submission_observer::SubmissionObserver;
