use crate::{ApiError, ApiResult, AppState, GenerateRequest, GenerateResponse, JsonBody};

use axum::{Json, extract::State};

/// POST /generate
///
/// Forward a raw prompt and return the model text
pub async fn generate(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<GenerateRequest>,
) -> ApiResult<Json<GenerateResponse>> {
    let prompt = request
        .prompt
        .filter(|prompt| !prompt.trim().is_empty())
        .ok_or_else(|| ApiError::validation("No prompt provided"))?;

    let text = state
        .generator
        .generate(&prompt)
        .await
        .map_err(|e| ApiError::upstream(&e, "Failed to generate text"))?;

    Ok(Json(GenerateResponse { text }))
}
