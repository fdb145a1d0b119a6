//! HTTP surface: the liveness route and the import endpoint.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use serde_json::{json, Value};

use gridport_sheets::SheetsClient;

use crate::import::{run_import, ImportRequest};

/// Shared server state: one immutable client for the spreadsheet service.
#[derive(Clone)]
pub struct AppState {
    pub sheets: Arc<SheetsClient>,
}

/// Envelope returned by the import endpoint.
///
/// The transport status is always 200; the semantic status travels inside
/// the body. Existing callers key off the body, so this stays as-is.
#[derive(Debug, Serialize)]
pub struct ImportResponse {
    pub status: u16,
    pub message: String,
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/sheets/import-data", post(import_data))
        .with_state(state)
}

async fn root() -> Json<Value> {
    Json(json!(["Hello World"]))
}

async fn import_data(
    State(state): State<AppState>,
    Json(request): Json<ImportRequest>,
) -> Json<ImportResponse> {
    match run_import(&state.sheets, &request).await {
        Ok(()) => Json(ImportResponse {
            status: 200,
            message: "Your sheet was uploaded successfully!".to_string(),
        }),
        Err(err) => {
            tracing::warn!(error = %err, "import failed");
            Json(ImportResponse {
                status: 400,
                message: err.to_string(),
            })
        }
    }
}
