//! Action plan handler
//!
//! Outcomes besides success:
//! - quota exhausted after retries: 200 with the canned plan
//! - still rate limited after retries: 429 with `limitExceeded`
//! - model text that is not a JSON object: 500 "Failed to generate JSON"

use crate::{ActionPlanRequest, ApiError, ApiResult, AppState, JsonBody};

use ca_core::{ActionPlan, action_plan_prompt, fallback_action_plan, parse_action_plan};

use std::panic::Location;

use axum::{Json, extract::State};
use error_location::ErrorLocation;

pub const RATE_LIMIT_MESSAGE: &str =
    "API rate limit reached. Using simplified career plan instead.";

/// POST /action-plan
pub async fn action_plan(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<ActionPlanRequest>,
) -> ApiResult<Json<ActionPlan>> {
    if request.careers.is_empty() {
        return Err(ApiError::validation("Please provide at least one career"));
    }

    let skills = request.effective_skills();
    let prompt = action_plan_prompt(&request.careers, &skills);

    let text = match state.generator.generate(&prompt).await {
        Ok(text) => text,
        Err(e) if e.mentions_quota() => {
            log::warn!("Quota exhausted, returning fallback action plan: {}", e);
            return Ok(Json(fallback_action_plan(&request.careers, &skills)));
        }
        Err(e) if e.is_rate_limited() => {
            log::warn!("Rate limited after retries: {}", e);
            return Err(ApiError::RateLimited {
                message: RATE_LIMIT_MESSAGE.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Err(e) => return Err(ApiError::upstream(&e, "Failed to generate action plan")),
    };

    let plan =
        parse_action_plan(&text).map_err(|e| ApiError::upstream(&e, "Failed to generate JSON"))?;

    log::info!(
        "Generated action plan for '{}' with {} roadmap steps",
        request.careers[0],
        plan.roadmap_json.len()
    );
    Ok(Json(plan))
}
