pub mod analyze_profile;
pub mod analyze_profile_request;
pub mod analyze_profile_response;
