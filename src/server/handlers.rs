use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

use crate::alphabet::{Alphabet, AlphabetError};

use super::state::AppState;

// ─── Error response ──────────────────────────────────────────────

#[derive(Serialize)]
struct ApiErrorBody {
    error: String,
    code: u16,
}

#[derive(Debug)]
pub(super) struct ApiError(StatusCode, String);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiErrorBody {
            error: self.1,
            code: self.0.as_u16(),
        };
        (self.0, Json(body)).into_response()
    }
}

impl From<AlphabetError> for ApiError {
    fn from(e: AlphabetError) -> Self {
        match e {
            AlphabetError::NotFound(_) => ApiError(StatusCode::NOT_FOUND, e.to_string()),
            AlphabetError::Provider { .. } => ApiError(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        }
    }
}

// ─── GET /api/alphabet ───────────────────────────────────────────

#[derive(Deserialize)]
pub struct AlphabetQuery {
    pub language: Option<String>,
}

pub(super) async fn alphabet(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AlphabetQuery>,
) -> Result<Json<Alphabet>, ApiError> {
    let start = Instant::now();
    let language = params
        .language
        .as_deref()
        .unwrap_or(state.default_language.as_str());

    let result = state.resolver.resolve(language);

    info!(
        language,
        found = result.is_ok(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "GET /api/alphabet"
    );

    Ok(Json(result?))
}

// ─── GET /api/languages ──────────────────────────────────────────

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct LanguageEntry {
    pub name: String,
    pub locale: String,
}

pub(super) async fn languages(State(state): State<Arc<AppState>>) -> Json<Vec<LanguageEntry>> {
    Json(
        state
            .resolver
            .catalog()
            .languages()
            .map(|(name, locale)| LanguageEntry {
                name: name.to_string(),
                locale: locale.to_string(),
            })
            .collect(),
    )
}
