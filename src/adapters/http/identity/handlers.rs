//! GET /auth/me - echoes the authenticated learner.

use axum::{routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::adapters::http::middleware::RequireAuth;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeResponse {
    pub id: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
}

async fn me(RequireAuth(user): RequireAuth) -> Json<MeResponse> {
    Json(MeResponse {
        id: user.id.to_string(),
        email: user.email,
        display_name: user.display_name,
    })
}

/// Routes nested under `/auth`.
pub fn identity_routes() -> Router {
    Router::new().route("/me", get(me))
}
