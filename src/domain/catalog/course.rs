//! Course catalog types.
//!
//! Ownership is one-directional: a course owns its modules and at most one
//! quiz, and a quiz owns its questions. Children refer to their parent by id.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{CourseId, ModuleId, QuestionId, QuizId, ValidationError};

/// Course difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Beginner" => Ok(Self::Beginner),
            "Intermediate" => Ok(Self::Intermediate),
            "Advanced" => Ok(Self::Advanced),
            other => Err(ValidationError::invalid_format(
                "difficulty",
                format!("unknown difficulty '{}'", other),
            )),
        }
    }
}

/// A course module with content in three modalities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    pub id: ModuleId,
    pub course_id: CourseId,
    pub title: String,
    pub content_theoretical: Option<String>,
    pub content_practical: Option<String>,
    pub content_visual: Option<String>,
    pub video_url: Option<String>,
    pub order: i32,
}

/// A quiz question. Options are stored as one comma-separated string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub quiz_id: QuizId,
    pub text: String,
    pub options: String,
    pub correct_answer: String,
    pub explanation: Option<String>,
}

impl Question {
    /// Splits the stored options on commas, trimming whitespace.
    pub fn option_list(&self) -> Vec<&str> {
        self.options
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .collect()
    }
}

/// The single quiz attached to a course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quiz {
    pub id: QuizId,
    pub course_id: CourseId,
    pub title: String,
    pub questions: Vec<Question>,
}

/// A catalog course.
///
/// `modules` are ordered by `Module::order`. `quiz` is only populated by
/// detail lookups; list queries leave it `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub instructor: String,
    pub image_url: Option<String>,
    pub modules: Vec<Module>,
    pub quiz: Option<Quiz>,
}

/// Module content for a course that is being created.
#[derive(Debug, Clone, PartialEq)]
pub struct NewModule {
    pub title: String,
    pub content_theoretical: Option<String>,
    pub content_practical: Option<String>,
    pub content_visual: Option<String>,
    pub video_url: Option<String>,
    pub order: i32,
}

impl NewModule {
    pub fn new(title: impl Into<String>, order: i32) -> Self {
        Self {
            title: title.into(),
            content_theoretical: None,
            content_practical: None,
            content_visual: None,
            video_url: None,
            order,
        }
    }
}

/// Question content for a quiz that is being created.
#[derive(Debug, Clone, PartialEq)]
pub struct NewQuestion {
    pub text: String,
    pub options: String,
    pub correct_answer: String,
    pub explanation: Option<String>,
}

/// Quiz content for a course that is being created.
#[derive(Debug, Clone, PartialEq)]
pub struct NewQuiz {
    pub title: String,
    pub questions: Vec<NewQuestion>,
}

/// A course with its owned children, before ids are assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCourse {
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub instructor: String,
    pub image_url: Option<String>,
    pub modules: Vec<NewModule>,
    pub quiz: Option<NewQuiz>,
}

impl NewCourse {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        difficulty: Difficulty,
        instructor: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }

        Ok(Self {
            title,
            description: description.into(),
            difficulty,
            instructor: instructor.into(),
            image_url: None,
            modules: Vec::new(),
            quiz: None,
        })
    }

    pub fn with_module(mut self, module: NewModule) -> Self {
        self.modules.push(module);
        self
    }

    pub fn with_quiz(mut self, quiz: NewQuiz) -> Self {
        self.quiz = Some(quiz);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_round_trips_through_str() {
        for d in [Difficulty::Beginner, Difficulty::Intermediate, Difficulty::Advanced] {
            assert_eq!(d.as_str().parse::<Difficulty>().unwrap(), d);
        }
        assert!("Expert".parse::<Difficulty>().is_err());
    }

    #[test]
    fn question_option_list_splits_and_trims() {
        let question = Question {
            id: QuestionId::new(1),
            quiz_id: QuizId::new(1),
            text: "Which algorithm uses a heuristic?".to_string(),
            options: "BFS, DFS,A*, Dijkstra".to_string(),
            correct_answer: "A*".to_string(),
            explanation: None,
        };
        assert_eq!(question.option_list(), vec!["BFS", "DFS", "A*", "Dijkstra"]);
    }

    #[test]
    fn new_course_requires_title() {
        assert!(NewCourse::new(" ", "desc", Difficulty::Beginner, "Expert Lead").is_err());
    }

    #[test]
    fn new_course_builder_collects_children() {
        let course = NewCourse::new("Intro to AI", "desc", Difficulty::Beginner, "Dr. Turing")
            .unwrap()
            .with_module(NewModule::new("History", 1))
            .with_module(NewModule::new("Search", 2))
            .with_quiz(NewQuiz {
                title: "AI Quiz".to_string(),
                questions: vec![],
            });
        assert_eq!(course.modules.len(), 2);
        assert!(course.quiz.is_some());
    }
}
