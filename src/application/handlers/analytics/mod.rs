//! Analytics query handlers.

mod get_performance;

pub use get_performance::{GetPerformanceHandler, GetPerformanceQuery};
