pub mod action_plan;
pub mod action_plan_request;
