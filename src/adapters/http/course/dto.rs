//! DTOs for course endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{Course, Module, Question, Quiz};

/// A course with its modules and, on the detail endpoint, its quiz.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub difficulty: String,
    pub instructor: String,
    pub image_url: Option<String>,
    pub modules: Vec<ModuleResponse>,
    pub quiz: Option<QuizResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleResponse {
    pub id: i64,
    pub course_id: i64,
    pub title: String,
    pub content_theoretical: Option<String>,
    pub content_practical: Option<String>,
    pub content_visual: Option<String>,
    pub video_url: Option<String>,
    pub order: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizResponse {
    pub id: i64,
    pub course_id: i64,
    pub title: String,
    pub questions: Vec<QuestionResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionResponse {
    pub id: i64,
    pub quiz_id: i64,
    pub text: String,
    /// Comma-separated, as stored.
    pub options: String,
    pub option_list: Vec<String>,
    pub correct_answer: String,
    pub explanation: Option<String>,
}

impl From<&Module> for ModuleResponse {
    fn from(module: &Module) -> Self {
        Self {
            id: module.id.value(),
            course_id: module.course_id.value(),
            title: module.title.clone(),
            content_theoretical: module.content_theoretical.clone(),
            content_practical: module.content_practical.clone(),
            content_visual: module.content_visual.clone(),
            video_url: module.video_url.clone(),
            order: module.order,
        }
    }
}

impl From<&Question> for QuestionResponse {
    fn from(question: &Question) -> Self {
        Self {
            id: question.id.value(),
            quiz_id: question.quiz_id.value(),
            text: question.text.clone(),
            options: question.options.clone(),
            option_list: question.option_list().into_iter().map(String::from).collect(),
            correct_answer: question.correct_answer.clone(),
            explanation: question.explanation.clone(),
        }
    }
}

impl From<&Quiz> for QuizResponse {
    fn from(quiz: &Quiz) -> Self {
        Self {
            id: quiz.id.value(),
            course_id: quiz.course_id.value(),
            title: quiz.title.clone(),
            questions: quiz.questions.iter().map(QuestionResponse::from).collect(),
        }
    }
}

impl From<&Course> for CourseResponse {
    fn from(course: &Course) -> Self {
        Self {
            id: course.id.value(),
            title: course.title.clone(),
            description: course.description.clone(),
            difficulty: course.difficulty.to_string(),
            instructor: course.instructor.clone(),
            image_url: course.image_url.clone(),
            modules: course.modules.iter().map(ModuleResponse::from).collect(),
            quiz: course.quiz.as_ref().map(QuizResponse::from),
        }
    }
}
