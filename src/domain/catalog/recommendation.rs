//! Recommendation policy - which difficulty to recommend and how many.

use super::{Course, Difficulty};
use crate::domain::profile::CognitiveLevel;

/// Maximum number of courses taken from the target difficulty.
pub const MAX_MATCHED_COURSES: usize = 5;

/// Below this many matches the list is topped up from other difficulties.
pub const MIN_MATCHED_COURSES: usize = 3;

/// Maximum number of courses added from other difficulties.
pub const FILL_COURSES: usize = 3;

/// Query shape used by the catalog port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CourseFilter {
    pub difficulty: Option<Difficulty>,
    pub exclude_difficulty: Option<Difficulty>,
    pub limit: Option<usize>,
}

impl CourseFilter {
    /// Every course, in catalog order.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn matching(difficulty: Difficulty, limit: usize) -> Self {
        Self {
            difficulty: Some(difficulty),
            exclude_difficulty: None,
            limit: Some(limit),
        }
    }

    pub fn excluding(difficulty: Difficulty, limit: usize) -> Self {
        Self {
            difficulty: None,
            exclude_difficulty: Some(difficulty),
            limit: Some(limit),
        }
    }

    /// True if the course passes both difficulty conditions (limit aside).
    pub fn accepts(&self, course: &Course) -> bool {
        self.difficulty.map_or(true, |d| course.difficulty == d)
            && self.exclude_difficulty.map_or(true, |d| course.difficulty != d)
    }
}

/// Stateless recommendation rules.
pub struct RecommendationPolicy;

impl RecommendationPolicy {
    /// Fixed tier to difficulty table.
    pub fn target_difficulty(level: CognitiveLevel) -> Difficulty {
        match level {
            CognitiveLevel::StrongAnalyticalLearner | CognitiveLevel::AdvancedLearner => {
                Difficulty::Advanced
            }
            CognitiveLevel::ModeratePerformer => Difficulty::Intermediate,
            CognitiveLevel::DevelopingLearner | CognitiveLevel::BasicLearner => {
                Difficulty::Beginner
            }
        }
    }

    /// Resolves a persisted tier label; unknown or missing labels map to Beginner.
    pub fn target_difficulty_for_label(label: Option<&str>) -> Difficulty {
        label
            .and_then(|l| l.parse::<CognitiveLevel>().ok())
            .map(Self::target_difficulty)
            .unwrap_or(Difficulty::Beginner)
    }

    pub fn matched_filter(target: Difficulty) -> CourseFilter {
        CourseFilter::matching(target, MAX_MATCHED_COURSES)
    }

    pub fn fill_filter(target: Difficulty) -> CourseFilter {
        CourseFilter::excluding(target, FILL_COURSES)
    }

    pub fn needs_fill(matched: usize) -> bool {
        matched < MIN_MATCHED_COURSES
    }

    /// Appends the fill courses to the matched ones, as-is.
    ///
    /// The fill set excludes the target difficulty, so no course appears twice.
    /// The result may hold fewer than three courses on a small catalog.
    pub fn combine(mut matched: Vec<Course>, fill: Vec<Course>) -> Vec<Course> {
        matched.extend(fill);
        matched
    }
}
