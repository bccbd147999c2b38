//! Assessment application handlers.
//!
//! Command handlers that record learner submissions.

mod record_behavioral;
mod record_technical;

pub use record_behavioral::{RecordBehavioralResponseCommand, RecordBehavioralResponseHandler};
pub use record_technical::{RecordTechnicalAttemptCommand, RecordTechnicalAttemptHandler};
