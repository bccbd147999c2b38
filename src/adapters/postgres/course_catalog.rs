//! PostgreSQL implementation of CourseCatalog.
//!
//! Children are loaded with list-by-parent queries. Deleting a course removes
//! its questions, quiz and modules explicitly in one transaction.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Postgres, Transaction};
use std::collections::HashMap;

use super::column;
use crate::domain::catalog::{
    Course, CourseFilter, Difficulty, Module, NewCourse, NewModule, NewQuestion, Question, Quiz,
};
use crate::domain::foundation::{
    CourseId, DomainError, ErrorCode, ModuleId, QuestionId, QuizId,
};
use crate::ports::CourseCatalog;

/// PostgreSQL implementation of CourseCatalog.
#[derive(Clone)]
pub struct PostgresCourseCatalog {
    pool: PgPool,
}

impl PostgresCourseCatalog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn modules_for(&self, course_ids: &[i64]) -> Result<HashMap<i64, Vec<Module>>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, course_id, title, content_theoretical, content_practical,
                   content_visual, video_url, "order"
            FROM modules
            WHERE course_id = ANY($1)
            ORDER BY course_id, "order", id
            "#,
        )
        .bind(course_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch modules", e))?;

        let mut by_course: HashMap<i64, Vec<Module>> = HashMap::new();
        for row in &rows {
            let module = row_to_module(row)?;
            by_course
                .entry(module.course_id.value())
                .or_default()
                .push(module);
        }
        Ok(by_course)
    }

    async fn quiz_for(&self, course_id: CourseId) -> Result<Option<Quiz>, DomainError> {
        let row = sqlx::query("SELECT id, course_id, title FROM quizzes WHERE course_id = $1")
            .bind(course_id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch quiz", e))?;

        let Some(row) = row else {
            return Ok(None);
        };
        let quiz_id = QuizId::new(column(&row, "id")?);

        let question_rows = sqlx::query(
            r#"
            SELECT id, quiz_id, text, options, correct_answer, explanation
            FROM questions
            WHERE quiz_id = $1
            ORDER BY id
            "#,
        )
        .bind(quiz_id.value())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch questions", e))?;

        Ok(Some(Quiz {
            id: quiz_id,
            course_id: CourseId::new(column(&row, "course_id")?),
            title: column(&row, "title")?,
            questions: question_rows
                .iter()
                .map(row_to_question)
                .collect::<Result<_, _>>()?,
        }))
    }
}

#[async_trait]
impl CourseCatalog for PostgresCourseCatalog {
    async fn list_courses(&self, filter: CourseFilter) -> Result<Vec<Course>, DomainError> {
        let limit = filter.limit.map(|l| i64::try_from(l).unwrap_or(i64::MAX));

        let rows = sqlx::query(
            r#"
            SELECT id, title, description, difficulty, instructor, image_url
            FROM courses
            WHERE ($1::text IS NULL OR difficulty = $1)
              AND ($2::text IS NULL OR difficulty <> $2)
            ORDER BY id
            LIMIT $3
            "#,
        )
        .bind(filter.difficulty.map(|d| d.as_str()))
        .bind(filter.exclude_difficulty.map(|d| d.as_str()))
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch courses", e))?;

        let mut courses: Vec<Course> = rows.iter().map(row_to_course).collect::<Result<_, _>>()?;
        let ids: Vec<i64> = courses.iter().map(|c| c.id.value()).collect();
        let mut modules = self.modules_for(&ids).await?;
        for course in &mut courses {
            course.modules = modules.remove(&course.id.value()).unwrap_or_default();
        }

        Ok(courses)
    }

    async fn find_by_id(&self, id: CourseId) -> Result<Option<Course>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, title, description, difficulty, instructor, image_url
            FROM courses
            WHERE id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch course", e))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mut course = row_to_course(&row)?;
        course.modules = self
            .modules_for(&[id.value()])
            .await?
            .remove(&id.value())
            .unwrap_or_default();
        course.quiz = self.quiz_for(id).await?;

        Ok(Some(course))
    }

    async fn create_course(&self, course: NewCourse) -> Result<Course, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database("Failed to begin transaction", e))?;

        let (course_id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO courses (title, description, difficulty, instructor, image_url)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(&course.title)
        .bind(&course.description)
        .bind(course.difficulty.as_str())
        .bind(&course.instructor)
        .bind(course.image_url.as_deref())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| DomainError::database("Failed to insert course", e))?;
        let course_id = CourseId::new(course_id);

        let mut modules = Vec::with_capacity(course.modules.len());
        for module in course.modules {
            modules.push(insert_module(&mut tx, course_id, module).await?);
        }
        modules.sort_by_key(|m| m.order);

        let quiz = match course.quiz {
            Some(new_quiz) => {
                let (quiz_id,): (i64,) = sqlx::query_as(
                    "INSERT INTO quizzes (course_id, title) VALUES ($1, $2) RETURNING id",
                )
                .bind(course_id.value())
                .bind(&new_quiz.title)
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| DomainError::database("Failed to insert quiz", e))?;
                let quiz_id = QuizId::new(quiz_id);

                let mut questions = Vec::with_capacity(new_quiz.questions.len());
                for question in new_quiz.questions {
                    questions.push(insert_question(&mut tx, quiz_id, question).await?);
                }

                Some(Quiz {
                    id: quiz_id,
                    course_id,
                    title: new_quiz.title,
                    questions,
                })
            }
            None => None,
        };

        tx.commit()
            .await
            .map_err(|e| DomainError::database("Failed to commit transaction", e))?;

        Ok(Course {
            id: course_id,
            title: course.title,
            description: course.description,
            difficulty: course.difficulty,
            instructor: course.instructor,
            image_url: course.image_url,
            modules,
            quiz,
        })
    }

    async fn delete_course(&self, id: CourseId) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database("Failed to begin transaction", e))?;

        sqlx::query(
            "DELETE FROM questions WHERE quiz_id IN (SELECT id FROM quizzes WHERE course_id = $1)",
        )
        .bind(id.value())
        .execute(&mut *tx)
        .await
        .map_err(|e| DomainError::database("Failed to delete questions", e))?;

        sqlx::query("DELETE FROM quizzes WHERE course_id = $1")
            .bind(id.value())
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::database("Failed to delete quiz", e))?;

        sqlx::query("DELETE FROM modules WHERE course_id = $1")
            .bind(id.value())
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::database("Failed to delete modules", e))?;

        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id.value())
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::database("Failed to delete course", e))?;

        if result.rows_affected() == 0 {
            // Dropping the transaction rolls it back.
            return Err(DomainError::new(
                ErrorCode::CourseNotFound,
                format!("Course not found: {}", id),
            ));
        }

        tx.commit()
            .await
            .map_err(|e| DomainError::database("Failed to commit transaction", e))?;

        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

async fn insert_module(
    tx: &mut Transaction<'_, Postgres>,
    course_id: CourseId,
    module: NewModule,
) -> Result<Module, DomainError> {
    let (id,): (i64,) = sqlx::query_as(
        r#"
        INSERT INTO modules (
            course_id, title, content_theoretical, content_practical,
            content_visual, video_url, "order"
        ) VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id
        "#,
    )
    .bind(course_id.value())
    .bind(&module.title)
    .bind(module.content_theoretical.as_deref())
    .bind(module.content_practical.as_deref())
    .bind(module.content_visual.as_deref())
    .bind(module.video_url.as_deref())
    .bind(module.order)
    .fetch_one(&mut **tx)
    .await
    .map_err(|e| DomainError::database("Failed to insert module", e))?;

    Ok(Module {
        id: ModuleId::new(id),
        course_id,
        title: module.title,
        content_theoretical: module.content_theoretical,
        content_practical: module.content_practical,
        content_visual: module.content_visual,
        video_url: module.video_url,
        order: module.order,
    })
}

async fn insert_question(
    tx: &mut Transaction<'_, Postgres>,
    quiz_id: QuizId,
    question: NewQuestion,
) -> Result<Question, DomainError> {
    let (id,): (i64,) = sqlx::query_as(
        r#"
        INSERT INTO questions (quiz_id, text, options, correct_answer, explanation)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id
        "#,
    )
    .bind(quiz_id.value())
    .bind(&question.text)
    .bind(&question.options)
    .bind(&question.correct_answer)
    .bind(question.explanation.as_deref())
    .fetch_one(&mut **tx)
    .await
    .map_err(|e| DomainError::database("Failed to insert question", e))?;

    Ok(Question {
        id: QuestionId::new(id),
        quiz_id,
        text: question.text,
        options: question.options,
        correct_answer: question.correct_answer,
        explanation: question.explanation,
    })
}

fn row_to_course(row: &PgRow) -> Result<Course, DomainError> {
    let difficulty: String = column(row, "difficulty")?;
    let difficulty = difficulty
        .parse::<Difficulty>()
        .map_err(|e| DomainError::database("Invalid difficulty", e))?;

    Ok(Course {
        id: CourseId::new(column(row, "id")?),
        title: column(row, "title")?,
        description: column(row, "description")?,
        difficulty,
        instructor: column(row, "instructor")?,
        image_url: column(row, "image_url")?,
        modules: Vec::new(),
        quiz: None,
    })
}

fn row_to_module(row: &PgRow) -> Result<Module, DomainError> {
    Ok(Module {
        id: ModuleId::new(column(row, "id")?),
        course_id: CourseId::new(column(row, "course_id")?),
        title: column(row, "title")?,
        content_theoretical: column(row, "content_theoretical")?,
        content_practical: column(row, "content_practical")?,
        content_visual: column(row, "content_visual")?,
        video_url: column(row, "video_url")?,
        order: column(row, "order")?,
    })
}

fn row_to_question(row: &PgRow) -> Result<Question, DomainError> {
    Ok(Question {
        id: QuestionId::new(column(row, "id")?),
        quiz_id: QuizId::new(column(row, "quiz_id")?),
        text: column(row, "text")?,
        options: column(row, "options")?,
        correct_answer: column(row, "correct_answer")?,
        explanation: column(row, "explanation")?,
    })
}
