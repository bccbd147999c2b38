//! Assessment module - learner submissions.
//!
//! Behavioral responses and technical attempts are the raw signals the
//! scoring engine consumes. Both are append-only: recorded once, never
//! updated or deleted.

mod behavioral;
mod technical;

pub use behavioral::{BehavioralResponse, NewBehavioralResponse, MAX_CONVENTIONAL_WEIGHT};
pub use technical::{NewTechnicalAttempt, TechnicalAttempt};
