use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub text: String,
}
