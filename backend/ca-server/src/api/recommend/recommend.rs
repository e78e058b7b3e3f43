//! Career suggestion handler
//!
//! Asks the model for `*Title*: Description` lines and parses them. When no
//! line parses, one generic suggestion per skill is returned with a note.

use crate::{ApiError, ApiResult, AppState, JsonBody, RecommendRequest, RecommendResponse};

use ca_core::{
    FALLBACK_SUGGESTIONS_NOTE, fallback_suggestions, parse_career_lines, recommend_prompt,
};

use axum::{Json, extract::State};

/// POST /recommend
pub async fn recommend(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<RecommendRequest>,
) -> ApiResult<Json<RecommendResponse>> {
    if request.skills.is_empty() {
        return Err(ApiError::validation("No skills provided"));
    }

    let prompt = recommend_prompt(&request.skills);
    let text = state
        .generator
        .generate(&prompt)
        .await
        .map_err(|e| ApiError::upstream(&e, "Failed to generate career recommendations"))?;

    let careers = parse_career_lines(&text);
    if careers.is_empty() {
        log::warn!(
            "No career lines parsed from {} chars of model output, using fallback",
            text.len()
        );
        return Ok(Json(RecommendResponse {
            careers: fallback_suggestions(&request.skills),
            note: Some(FALLBACK_SUGGESTIONS_NOTE.to_string()),
        }));
    }

    log::debug!("Parsed {} career suggestions", careers.len());
    Ok(Json(RecommendResponse {
        careers,
        note: None,
    }))
}
