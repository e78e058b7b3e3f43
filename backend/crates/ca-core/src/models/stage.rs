use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Where the user is in their education or career
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    /// High school student (15-18)
    School,
    /// College student (18-22)
    College,
    /// Early career professional (22-25)
    Professional,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::School => "School",
            Self::College => "College",
            Self::Professional => "Professional",
        }
    }
}

impl FromStr for Stage {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "school" => Ok(Self::School),
            "college" => Ok(Self::College),
            "professional" => Ok(Self::Professional),
            _ => Err(CoreError::InvalidStage {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
