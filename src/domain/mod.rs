//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, errors, identity)
//! - `assessment` - Behavioral responses and technical attempts
//! - `profile` - Cognitive profile scoring and classification
//! - `catalog` - Courses and the recommendation policy
//! - `analytics` - Performance trends

pub mod analytics;
pub mod assessment;
pub mod catalog;
pub mod foundation;
pub mod profile;
