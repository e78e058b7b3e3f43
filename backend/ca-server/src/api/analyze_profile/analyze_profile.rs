use crate::{
    AnalyzeProfileRequest, AnalyzeProfileResponse, ApiError, ApiResult, AppState, JsonBody,
};

use ca_core::{analyze_profile_prompt, fallback_recommendation, parse_recommendations};

use axum::{Json, extract::State};

/// POST /analyze-profile
///
/// Ranked career recommendations for a full profile. Unusable model output
/// yields a single generic recommendation instead of an error.
pub async fn analyze_profile(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<AnalyzeProfileRequest>,
) -> ApiResult<Json<AnalyzeProfileResponse>> {
    let profile = request
        .profile_data
        .ok_or_else(|| ApiError::validation("No profile data provided"))?;

    let prompt = analyze_profile_prompt(&profile);
    let text = state.generator.generate(&prompt).await.map_err(|e| {
        ApiError::upstream(&e, "Failed to analyze profile and generate recommendations")
    })?;

    let careers = match parse_recommendations(&text) {
        Ok(careers) => careers,
        Err(e) => {
            log::warn!("Using fallback recommendation: {}", e);
            vec![fallback_recommendation(&profile)]
        }
    };

    Ok(Json(AnalyzeProfileResponse { careers }))
}
