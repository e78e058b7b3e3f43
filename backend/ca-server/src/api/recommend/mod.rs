pub mod recommend;
pub mod recommend_request;
pub mod recommend_response;
