pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    action_plan::{
        action_plan::{RATE_LIMIT_MESSAGE, action_plan},
        action_plan_request::ActionPlanRequest,
    },
    analyze_profile::{
        analyze_profile::analyze_profile, analyze_profile_request::AnalyzeProfileRequest,
        analyze_profile_response::AnalyzeProfileResponse,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::json_body::JsonBody,
    generate::{
        generate::generate, generate_request::GenerateRequest,
        generate_response::GenerateResponse,
    },
    recommend::{
        recommend::recommend, recommend_request::RecommendRequest,
        recommend_response::RecommendResponse,
    },
};
pub use app_state::AppState;
pub use error::{Result as ServerErrorResult, ServerError};

pub use crate::routes::build_router;
