mod action_plan;
mod career_recommendation;
mod profile;
mod stage;
