use crate::Stage;
use crate::models::lenient;

use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// User profile as collected by the onboarding forms.
///
/// Only the fields the backend reasons about are typed. Everything else the
/// client sends is kept in `extra`. Decoding never fails: fields of an
/// unexpected type are read as best they can be and the payload itself is
/// kept in `raw` for prompts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "Value")]
pub struct Profile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Raw stage label; see [`Profile::stage`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub favorite_subjects: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub current_skills: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub core_skills: Vec<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,

    /// The profile exactly as the client sent it
    #[serde(skip)]
    pub raw: Option<Value>,
}

#[derive(Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ProfileFields {
    #[serde(deserialize_with = "lenient::optional_text")]
    full_name: Option<String>,
    #[serde(deserialize_with = "lenient::optional_text")]
    email: Option<String>,
    #[serde(deserialize_with = "lenient::optional_text")]
    stage: Option<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    favorite_subjects: Vec<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    current_skills: Vec<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    core_skills: Vec<String>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl From<Value> for Profile {
    fn from(value: Value) -> Self {
        let fields = match &value {
            Value::Object(_) => serde_json::from_value(value.clone()).unwrap_or_else(|e| {
                warn!("Profile fields could not be read: {}", e);
                ProfileFields::default()
            }),
            other => {
                warn!("Profile is not a JSON object: {}", other);
                ProfileFields::default()
            }
        };

        Self {
            full_name: fields.full_name,
            email: fields.email,
            stage: fields.stage,
            favorite_subjects: fields.favorite_subjects,
            current_skills: fields.current_skills,
            core_skills: fields.core_skills,
            extra: fields.extra,
            raw: Some(value),
        }
    }
}

impl Profile {
    /// Parsed stage, or None when missing or unrecognised
    pub fn stage(&self) -> Option<Stage> {
        self.stage.as_deref().and_then(|s| s.parse().ok())
    }

    /// The skill list that represents this user for their stage.
    ///
    /// School students are described by their favourite subjects, college
    /// students by their current skills, everyone else by core skills.
    pub fn skills(&self) -> &[String] {
        match self.stage() {
            Some(Stage::School) => &self.favorite_subjects,
            Some(Stage::College) => &self.current_skills,
            _ => &self.core_skills,
        }
    }

    /// Compact JSON used when embedding the profile in a prompt.
    ///
    /// A decoded profile is embedded as received, including empty lists and
    /// comma-separated strings. Profiles built in code are serialized.
    pub fn to_prompt_json(&self) -> String {
        match &self.raw {
            Some(raw) => raw.to_string(),
            None => serde_json::to_string(self).unwrap_or_else(|_| String::from("{}")),
        }
    }
}
