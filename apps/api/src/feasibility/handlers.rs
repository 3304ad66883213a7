//! Axum route handlers for the Feasibility API.

use axum::{extract::State, Json};
use serde_json::Value;

use crate::errors::AppError;
use crate::feasibility::models::{ProjectAttributes, ResponseEnvelope};
use crate::feasibility::prefill::prefill;
use crate::state::AppState;

/// POST /api/feasibility/prefill
///
/// Validates the required project attributes, asks the model for NSW cost and
/// contribution assumptions, and echoes the request body next to the result.
/// Missing fields short-circuit with 400 before any provider call.
pub async fn handle_prefill(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<ResponseEnvelope>, AppError> {
    let project = ProjectAttributes::from_body(&body)?;

    let ai_result = prefill(&project, state.completion.as_ref()).await?;

    Ok(Json(ResponseEnvelope {
        project: body,
        ai_result,
    }))
}
