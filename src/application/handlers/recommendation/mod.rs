//! Recommendation application handlers.

mod recommend_courses;

pub use recommend_courses::{RecommendCoursesHandler, RecommendCoursesQuery};
