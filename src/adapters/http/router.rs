//! Application router: feature routes, auth middleware and tower-http layers.

use std::sync::Arc;

use axum::{
    http::{HeaderValue, StatusCode},
    middleware,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::application::handlers::{
    GetCourseHandler, GetPerformanceHandler, ListCoursesHandler, ProfileManager,
    RecommendCoursesHandler, RecordBehavioralResponseHandler, RecordTechnicalAttemptHandler,
};
use crate::config::{CorsPolicy, ServerConfig};
use crate::ports::{CourseCatalog, ProfileRepository, ResponseStore, SubmissionObserver};

use super::analytics::{analytics_routes, AnalyticsHandlers};
use super::assessment::{assessment_routes, AssessmentHandlers};
use super::course::{course_routes, CourseHandlers};
use super::identity::identity_routes;
use super::middleware::{auth_middleware, AuthState};
use super::recommendation::{recommendation_routes, RecommendationHandlers};

/// Handler state for every feature router.
#[derive(Clone)]
pub struct HttpHandlers {
    pub assessment: AssessmentHandlers,
    pub recommendation: RecommendationHandlers,
    pub course: CourseHandlers,
    pub analytics: AnalyticsHandlers,
}

impl HttpHandlers {
    /// Builds all application handlers over the given stores.
    ///
    /// One `ProfileManager` is shared by the submission handlers and the
    /// read side, so refreshes for a learner are serialised process-wide.
    pub fn wire(
        responses: Arc<dyn ResponseStore>,
        profiles: Arc<dyn ProfileRepository>,
        catalog: Arc<dyn CourseCatalog>,
    ) -> Self {
        let profile_manager = Arc::new(ProfileManager::new(responses.clone(), profiles.clone()));
        let observer: Arc<dyn SubmissionObserver> = profile_manager.clone();

        Self {
            assessment: AssessmentHandlers::new(
                Arc::new(RecordBehavioralResponseHandler::new(
                    responses.clone(),
                    observer.clone(),
                )),
                Arc::new(RecordTechnicalAttemptHandler::new(
                    responses.clone(),
                    observer,
                )),
            ),
            recommendation: RecommendationHandlers::new(
                profile_manager.clone(),
                Arc::new(RecommendCoursesHandler::new(profile_manager, catalog.clone())),
            ),
            course: CourseHandlers::new(
                Arc::new(ListCoursesHandler::new(catalog.clone())),
                Arc::new(GetCourseHandler::new(catalog)),
            ),
            analytics: AnalyticsHandlers::new(Arc::new(GetPerformanceHandler::new(
                responses, profiles,
            ))),
        }
    }
}

async fn root() -> Json<Value> {
    Json(json!({ "message": "Welcome to the Cognitive Learning Pattern Analyzer API" }))
}

async fn health() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}

/// Routes without tower-http layers.
///
/// Learner routes sit behind `auth_middleware`; the catalog, root and health
/// endpoints are public and ignore any Authorization header.
pub fn api_router(handlers: HttpHandlers, validator: AuthState) -> Router {
    let learner = Router::new()
        .nest("/tests", assessment_routes(handlers.assessment))
        .nest(
            "/recommendations",
            recommendation_routes(handlers.recommendation),
        )
        .nest("/analytics", analytics_routes(handlers.analytics))
        .nest("/auth", identity_routes())
        .layer(middleware::from_fn_with_state(validator, auth_middleware));

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .nest("/courses", course_routes(handlers.course))
        .merge(learner)
}

/// Full application: API routes plus tracing, CORS and request timeout.
pub fn build_router(handlers: HttpHandlers, validator: AuthState, server: &ServerConfig) -> Router {
    api_router(handlers, validator)
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(&server.cors_policy()))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(policy: &CorsPolicy) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    let origins = match policy {
        CorsPolicy::AnyOrigin => return layer.allow_origin(Any),
        CorsPolicy::Origins(origins) => origins,
    };

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(allowed))
}
