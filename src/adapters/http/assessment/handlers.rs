//! HTTP handlers for assessment submissions.
//!
//! Both endpoints answer only after the learner's profile has been
//! refreshed for the new submission.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{domain_error_response, json_rejection_response};
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::assessment::{
    RecordBehavioralResponseCommand, RecordBehavioralResponseHandler,
    RecordTechnicalAttemptCommand, RecordTechnicalAttemptHandler,
};

use super::dto::{
    BehavioralResponseRequest, BehavioralResponseResponse, TechnicalAttemptRequest,
    TechnicalAttemptResponse,
};

#[derive(Clone)]
pub struct AssessmentHandlers {
    behavioral_handler: Arc<RecordBehavioralResponseHandler>,
    technical_handler: Arc<RecordTechnicalAttemptHandler>,
}

impl AssessmentHandlers {
    pub fn new(
        behavioral_handler: Arc<RecordBehavioralResponseHandler>,
        technical_handler: Arc<RecordTechnicalAttemptHandler>,
    ) -> Self {
        Self {
            behavioral_handler,
            technical_handler,
        }
    }
}

/// POST /tests/behavioral - Record a behavioral response
pub async fn submit_behavioral(
    State(handlers): State<AssessmentHandlers>,
    RequireAuth(user): RequireAuth,
    body: Result<Json<BehavioralResponseRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match body {
        Ok(body) => body,
        Err(rejection) => return json_rejection_response(rejection),
    };

    let cmd = RecordBehavioralResponseCommand {
        user_id: user.id,
        question_id: req.question_id,
        selected_option: req.selected_option,
        score_weight: req.score_weight,
    };

    match handlers.behavioral_handler.handle(cmd).await {
        Ok(stored) => {
            (StatusCode::OK, Json(BehavioralResponseResponse::from(stored))).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// POST /tests/technical - Record a technical attempt
pub async fn submit_technical(
    State(handlers): State<AssessmentHandlers>,
    RequireAuth(user): RequireAuth,
    body: Result<Json<TechnicalAttemptRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match body {
        Ok(body) => body,
        Err(rejection) => return json_rejection_response(rejection),
    };

    let cmd = RecordTechnicalAttemptCommand {
        user_id: user.id,
        question_id: req.question_id,
        selected_answer: req.selected_answer,
        correct_answer: req.correct_answer,
        response_time: req.response_time,
        is_correct: req.is_correct,
        attempt_number: req.attempt_number,
    };

    match handlers.technical_handler.handle(cmd).await {
        Ok(stored) => {
            (StatusCode::OK, Json(TechnicalAttemptResponse::from(stored))).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}
