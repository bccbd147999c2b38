//! In-memory CourseCatalog.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::catalog::{Course, CourseFilter, Module, NewCourse, Question, Quiz};
use crate::domain::foundation::{
    CourseId, DomainError, ErrorCode, ModuleId, QuestionId, QuizId,
};
use crate::ports::CourseCatalog;

#[derive(Debug, Default)]
struct CatalogState {
    courses: BTreeMap<CourseId, Course>,
    next_course: i64,
    next_module: i64,
    next_quiz: i64,
    next_question: i64,
}

fn next(counter: &mut i64) -> i64 {
    *counter += 1;
    *counter
}

/// In-memory catalog ordered by course id.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCourseCatalog {
    state: Arc<RwLock<CatalogState>>,
}

impl InMemoryCourseCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn course_count(&self) -> usize {
        self.state.read().await.courses.len()
    }
}

#[async_trait]
impl CourseCatalog for InMemoryCourseCatalog {
    async fn list_courses(&self, filter: CourseFilter) -> Result<Vec<Course>, DomainError> {
        let state = self.state.read().await;
        let limit = filter.limit.unwrap_or(usize::MAX);
        Ok(state
            .courses
            .values()
            .filter(|c| filter.accepts(c))
            .take(limit)
            .map(|c| Course {
                quiz: None,
                ..c.clone()
            })
            .collect())
    }

    async fn find_by_id(&self, id: CourseId) -> Result<Option<Course>, DomainError> {
        Ok(self.state.read().await.courses.get(&id).cloned())
    }

    async fn create_course(&self, course: NewCourse) -> Result<Course, DomainError> {
        let mut guard = self.state.write().await;
        let state = &mut *guard;
        let course_id = CourseId::new(next(&mut state.next_course));

        let mut modules: Vec<Module> = course
            .modules
            .into_iter()
            .map(|m| Module {
                id: ModuleId::new(next(&mut state.next_module)),
                course_id,
                title: m.title,
                content_theoretical: m.content_theoretical,
                content_practical: m.content_practical,
                content_visual: m.content_visual,
                video_url: m.video_url,
                order: m.order,
            })
            .collect();
        modules.sort_by_key(|m| m.order);

        let quiz = course.quiz.map(|q| {
            let quiz_id = QuizId::new(next(&mut state.next_quiz));
            let questions = q
                .questions
                .into_iter()
                .map(|question| Question {
                    id: QuestionId::new(next(&mut state.next_question)),
                    quiz_id,
                    text: question.text,
                    options: question.options,
                    correct_answer: question.correct_answer,
                    explanation: question.explanation,
                })
                .collect();
            Quiz {
                id: quiz_id,
                course_id,
                title: q.title,
                questions,
            }
        });

        let stored = Course {
            id: course_id,
            title: course.title,
            description: course.description,
            difficulty: course.difficulty,
            instructor: course.instructor,
            image_url: course.image_url,
            modules,
            quiz,
        };
        state.courses.insert(course_id, stored.clone());
        Ok(stored)
    }

    async fn delete_course(&self, id: CourseId) -> Result<(), DomainError> {
        self.state
            .write()
            .await
            .courses
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| {
                DomainError::new(ErrorCode::CourseNotFound, format!("Course not found: {}", id))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{Difficulty, NewModule, NewQuestion, NewQuiz};

    fn new_course(title: &str, difficulty: Difficulty) -> NewCourse {
        NewCourse::new(title, "desc", difficulty, "Expert Lead").unwrap()
    }

    #[tokio::test]
    async fn list_filters_and_limits_in_id_order() {
        let catalog = InMemoryCourseCatalog::new();
        for (title, d) in [
            ("B1", Difficulty::Beginner),
            ("A1", Difficulty::Advanced),
            ("B2", Difficulty::Beginner),
            ("B3", Difficulty::Beginner),
        ] {
            catalog.create_course(new_course(title, d)).await.unwrap();
        }

        let beginner = catalog
            .list_courses(CourseFilter::matching(Difficulty::Beginner, 2))
            .await
            .unwrap();
        let titles: Vec<&str> = beginner.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["B1", "B2"]);

        let others = catalog
            .list_courses(CourseFilter::excluding(Difficulty::Beginner, 3))
            .await
            .unwrap();
        assert_eq!(others.len(), 1);
        assert_eq!(others[0].title, "A1");
    }

    #[tokio::test]
    async fn detail_includes_quiz_but_listing_does_not() {
        let catalog = InMemoryCourseCatalog::new();
        let created = catalog
            .create_course(
                new_course("Intro to AI", Difficulty::Beginner)
                    .with_module(NewModule::new("Second", 2))
                    .with_module(NewModule::new("First", 1))
                    .with_quiz(NewQuiz {
                        title: "AI Quiz".to_string(),
                        questions: vec![NewQuestion {
                            text: "Pick one".to_string(),
                            options: "A,B".to_string(),
                            correct_answer: "A".to_string(),
                            explanation: None,
                        }],
                    }),
            )
            .await
            .unwrap();

        assert_eq!(created.modules[0].title, "First");

        let detail = catalog.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(detail.quiz.as_ref().unwrap().questions.len(), 1);

        let listed = catalog.list_courses(CourseFilter::all()).await.unwrap();
        assert!(listed[0].quiz.is_none());
        assert_eq!(listed[0].modules.len(), 2);
    }

    #[tokio::test]
    async fn delete_removes_course_and_reports_missing() {
        let catalog = InMemoryCourseCatalog::new();
        let created = catalog
            .create_course(new_course("Gone", Difficulty::Advanced))
            .await
            .unwrap();

        catalog.delete_course(created.id).await.unwrap();
        assert!(catalog.find_by_id(created.id).await.unwrap().is_none());

        let err = catalog.delete_course(created.id).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::CourseNotFound);
    }
}
