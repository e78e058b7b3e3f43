//! Career action plan returned by `/action-plan`.
//!
//! Field names are snake_case on the wire because the plan is rendered by the
//! roadmap visualizer, which reads the keys the model was asked to produce.

use crate::models::lenient;
use crate::{CoreError, Result as CoreErrorResult};

use log::warn;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Placeholder used when the model does not describe freelancing
pub const DEFAULT_FREELANCING: &str = "Information not available";

/// One node of the roadmap graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapStep {
    #[serde(deserialize_with = "lenient::step_id")]
    pub id: u32,
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: String,
    /// Ids of steps that must be completed first
    #[serde(default, deserialize_with = "lenient::step_ids")]
    pub dependencies: Vec<u32>,
}

impl RoadmapStep {
    pub fn new(id: u32, title: &str, description: impl Into<String>, dependencies: &[u32]) -> Self {
        Self {
            id,
            title: title.to_string(),
            description: description.into(),
            dependencies: dependencies.to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseDetail {
    #[serde(alias = "title")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

/// A course is either just a name or a name with provider and level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Course {
    Named(String),
    Detailed(CourseDetail),
}

/// What the chosen careers require: skills, courses and tools
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReverseJobMapping {
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "course_list")]
    pub courses: Vec<Course>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub tools: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SituationSpecific {
    #[serde(default = "default_freelancing", deserialize_with = "lenient::text")]
    pub freelancing: String,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub top_recruiters: Vec<String>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub government_initiatives: Vec<String>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub emerging_trends: Vec<String>,
}

impl Default for SituationSpecific {
    fn default() -> Self {
        Self {
            freelancing: default_freelancing(),
            top_recruiters: Vec::new(),
            government_initiatives: Vec::new(),
            emerging_trends: Vec::new(),
        }
    }
}

fn default_freelancing() -> String {
    String::from(DEFAULT_FREELANCING)
}

/// Courses as an array, a comma-separated string, a single object, or null.
/// Objects that are not a valid [`CourseDetail`] keep only their name.
fn course_list<'de, D>(deserializer: D) -> Result<Vec<Course>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => Vec::new(),
        Value::String(s) => lenient::split_list(&s)
            .into_iter()
            .map(Course::Named)
            .collect(),
        Value::Array(items) => items.into_iter().filter_map(to_course).collect(),
        single => to_course(single).into_iter().collect(),
    })
}

fn to_course(value: Value) -> Option<Course> {
    match serde_json::from_value::<CourseDetail>(value.clone()) {
        Ok(detail) if value.is_object() => Some(Course::Detailed(detail)),
        _ => lenient::value_to_text(&value).map(Course::Named),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionPlan {
    #[serde(default)]
    pub roadmap_json: Vec<RoadmapStep>,
    #[serde(default)]
    pub reverse_job_mapping: ReverseJobMapping,
    #[serde(default)]
    pub situation_specific: SituationSpecific,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub additional_skills_needed: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ActionPlan {
    /// Build a plan from a parsed model response.
    ///
    /// The top level must be an object. Each section is decoded on its own
    /// and a section that is missing or malformed is replaced by its default.
    /// Roadmap steps are decoded one at a time, so a bad step is dropped
    /// without losing its siblings. Fields inside the mapping and situation
    /// sections never fail individually.
    pub fn from_value(value: Value) -> CoreErrorResult<Self> {
        let Value::Object(mut map) = value else {
            return Err(CoreError::unexpected_shape(
                "action plan must be a JSON object",
            ));
        };

        Ok(Self {
            roadmap_json: take_roadmap(&mut map),
            reverse_job_mapping: take_section(&mut map, "reverse_job_mapping"),
            situation_specific: take_section(&mut map, "situation_specific"),
            additional_skills_needed: take_string_list(&mut map, "additional_skills_needed"),
            note: map
                .remove("note")
                .and_then(|v| v.as_str().map(String::from)),
        })
    }
}

fn take_roadmap(map: &mut Map<String, Value>) -> Vec<RoadmapStep> {
    match map.remove("roadmap_json") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => lenient::decode_each(items, "roadmap step"),
        Some(step @ Value::Object(_)) => lenient::decode_each(vec![step], "roadmap step"),
        Some(other) => {
            warn!("Discarding malformed action plan section 'roadmap_json': {}", other);
            Vec::new()
        }
    }
}

fn take_section<T: DeserializeOwned + Default>(map: &mut Map<String, Value>, key: &str) -> T {
    match map.remove(key) {
        None | Some(Value::Null) => T::default(),
        Some(value @ Value::Object(_)) => serde_json::from_value(value).unwrap_or_else(|e| {
            warn!("Discarding malformed action plan section '{}': {}", key, e);
            T::default()
        }),
        Some(other) => {
            warn!("Discarding malformed action plan section '{}': {}", key, other);
            T::default()
        }
    }
}

fn take_string_list(map: &mut Map<String, Value>, key: &str) -> Vec<String> {
    map.remove(key)
        .map(lenient::to_string_list)
        .unwrap_or_default()
}
