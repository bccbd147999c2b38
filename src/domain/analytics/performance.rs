//! Performance report built from a learner's submission history.

use serde::{Deserialize, Serialize};

use crate::domain::assessment::{BehavioralResponse, TechnicalAttempt};
use crate::domain::profile::CognitiveProfile;

/// Number of most recent points kept in each trend.
pub const TREND_WINDOW: usize = 10;

/// Running accuracy after a given attempt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccuracyPoint {
    /// 1-based position in submission order.
    pub attempt: u32,
    /// Percentage of correct attempts so far, rounded to 2 decimals.
    pub accuracy: f64,
}

/// Response time of a given attempt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResponseTimePoint {
    pub attempt: u32,
    pub time: f64,
}

/// Progress summary for one learner.
///
/// The profile is reported as stored; building a report never triggers
/// a scoring run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceReport {
    pub profile: Option<CognitiveProfile>,
    pub accuracy_trend: Vec<AccuracyPoint>,
    pub response_time_trend: Vec<ResponseTimePoint>,
    pub total_attempts: usize,
    pub total_behavioral_responses: usize,
}

impl PerformanceReport {
    /// Builds the report. `attempts` must be in submission order.
    pub fn build(
        profile: Option<CognitiveProfile>,
        attempts: &[TechnicalAttempt],
        behavioral: &[BehavioralResponse],
    ) -> Self {
        Self {
            profile,
            accuracy_trend: last_window(accuracy_trend(attempts)),
            response_time_trend: last_window(response_time_trend(attempts)),
            total_attempts: attempts.len(),
            total_behavioral_responses: behavioral.len(),
        }
    }
}

/// Running accuracy over every attempt, in order.
pub fn accuracy_trend(attempts: &[TechnicalAttempt]) -> Vec<AccuracyPoint> {
    let mut correct = 0u32;
    attempts
        .iter()
        .zip(1u32..)
        .map(|(attempt, position)| {
            if attempt.is_correct {
                correct += 1;
            }
            let accuracy = f64::from(correct) / f64::from(position) * 100.0;
            AccuracyPoint {
                attempt: position,
                accuracy: round_to_hundredths(accuracy),
            }
        })
        .collect()
}

pub fn response_time_trend(attempts: &[TechnicalAttempt]) -> Vec<ResponseTimePoint> {
    attempts
        .iter()
        .zip(1u32..)
        .map(|(attempt, position)| ResponseTimePoint {
            attempt: position,
            time: attempt.response_time,
        })
        .collect()
}

fn last_window<T>(mut points: Vec<T>) -> Vec<T> {
    if points.len() > TREND_WINDOW {
        points.drain(..points.len() - TREND_WINDOW);
    }
    points
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
