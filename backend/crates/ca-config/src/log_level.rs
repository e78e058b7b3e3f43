use crate::DEFAULT_LOG_LEVEL;

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use log::LevelFilter;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

/// Server log verbosity, from `logging.level` or `CA_LOG_LEVEL`.
///
/// Names are case-insensitive and may carry surrounding whitespace. An
/// unknown name, or a value that is not a string at all, means `info`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogLevel(pub LevelFilter);

impl LogLevel {
    pub fn parse_lenient(name: &str) -> Self {
        name.trim().parse().map(LogLevel).unwrap_or_default()
    }

    pub fn filter(self) -> LevelFilter {
        self.0
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel(DEFAULT_LOG_LEVEL)
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LogLevel {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(LogLevel::parse_lenient(s))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawLevel {
    Name(String),
    Other(IgnoredAny),
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawLevel::deserialize(deserializer)? {
            RawLevel::Name(name) => LogLevel::parse_lenient(&name),
            RawLevel::Other(_) => LogLevel::default(),
        })
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        level.0
    }
}
