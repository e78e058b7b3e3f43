use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    /// Prompt forwarded to the model verbatim
    #[serde(default)]
    pub prompt: Option<String>,
}
