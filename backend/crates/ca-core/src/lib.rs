pub mod error;
pub mod fallback;
pub mod models;
pub mod parse;
pub mod prompts;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use fallback::{
    FALLBACK_ACTION_PLAN_NOTE, FALLBACK_SUGGESTIONS_NOTE, fallback_action_plan,
    fallback_recommendation, fallback_suggestions,
};
pub use models::action_plan::{
    ActionPlan, Course, CourseDetail, DEFAULT_FREELANCING, ReverseJobMapping, RoadmapStep,
    SituationSpecific,
};
pub use models::career_recommendation::CareerRecommendation;
pub use models::career_suggestion::CareerSuggestion;
pub use models::profile::Profile;
pub use models::stage::Stage;
pub use parse::{
    extract_json_span, extract_object_span, parse_action_plan, parse_career_lines,
    parse_recommendations, strip_code_fences,
};
pub use prompts::{action_plan_prompt, analyze_profile_prompt, recommend_prompt};
