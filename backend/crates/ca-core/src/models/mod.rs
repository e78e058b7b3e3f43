pub mod action_plan;
pub mod career_recommendation;
pub mod career_suggestion;
pub mod lenient;
pub mod profile;
pub mod stage;
