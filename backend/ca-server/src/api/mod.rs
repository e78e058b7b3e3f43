pub mod action_plan;
pub mod analyze_profile;
pub mod error;
pub mod extractors;
pub mod generate;
pub mod recommend;
