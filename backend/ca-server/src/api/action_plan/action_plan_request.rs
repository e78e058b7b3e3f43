use ca_core::Profile;
use ca_core::models::lenient;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionPlanRequest {
    /// Career titles; the first one drives the roadmap
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub careers: Vec<String>,

    #[serde(default, deserialize_with = "lenient::string_list")]
    pub skills: Vec<String>,

    /// Used for skills when `skills` is empty
    #[serde(default)]
    pub profile_data: Option<Profile>,
}

impl ActionPlanRequest {
    /// Explicit skills, else the profile's skills for its stage
    pub fn effective_skills(&self) -> Vec<String> {
        if !self.skills.is_empty() {
            return self.skills.clone();
        }
        self.profile_data
            .as_ref()
            .map(|profile| profile.skills().to_vec())
            .unwrap_or_default()
    }
}
