//! Catalog module - courses and the rules for recommending them.

mod course;
mod recommendation;

pub use course::{
    Course, Difficulty, Module, NewCourse, NewModule, NewQuestion, NewQuiz, Question, Quiz,
};
pub use recommendation::{
    CourseFilter, RecommendationPolicy, FILL_COURSES, MAX_MATCHED_COURSES, MIN_MATCHED_COURSES,
};
