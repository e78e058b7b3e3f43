use serde::{Deserialize, Serialize};

/// A career path suggested from a plain skill list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerSuggestion {
    pub title: String,
    pub description: String,
}
