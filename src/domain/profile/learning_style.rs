//! Learning style heuristic.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Scores strictly above this value count as "high" for the heuristic.
pub const STYLE_SIGNAL_THRESHOLD: f64 = 70.0;

/// Preferred content modality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LearningStyle {
    Practical,
    Theoretical,
    Visual,
}

impl LearningStyle {
    /// First match wins: fast answers mean Practical, strong behavioral
    /// answers mean Theoretical, anything else is Visual.
    pub fn derive(speed_score: f64, behavioral_score: f64) -> Self {
        if speed_score > STYLE_SIGNAL_THRESHOLD {
            Self::Practical
        } else if behavioral_score > STYLE_SIGNAL_THRESHOLD {
            Self::Theoretical
        } else {
            Self::Visual
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Practical => "Practical",
            Self::Theoretical => "Theoretical",
            Self::Visual => "Visual",
        }
    }
}

impl Default for LearningStyle {
    fn default() -> Self {
        Self::Visual
    }
}

impl fmt::Display for LearningStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for LearningStyle {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Practical" => Ok(Self::Practical),
            "Theoretical" => Ok(Self::Theoretical),
            "Visual" => Ok(Self::Visual),
            other => Err(ValidationError::invalid_format(
                "learning_style",
                format!("unknown style '{}'", other),
            )),
        }
    }
}
