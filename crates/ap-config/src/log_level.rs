use crate::DEFAULT_LOG_LEVEL;

use std::convert::Infallible;
use std::ops::Deref;
use std::str::FromStr;

use log::LevelFilter;
use serde::{Deserialize, Deserializer};

/// `LevelFilter` that always parses: unknown names, and values of the
/// wrong type, fall back to the default level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogLevel(pub LevelFilter);

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel(DEFAULT_LOG_LEVEL)
    }
}

impl FromStr for LogLevel {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        let level = if name.eq_ignore_ascii_case("warning") {
            LevelFilter::Warn
        } else if name.eq_ignore_ascii_case("none") {
            LevelFilter::Off
        } else {
            LevelFilter::from_str(name).unwrap_or(DEFAULT_LOG_LEVEL)
        };
        Ok(LogLevel(level))
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match String::deserialize(deserializer) {
            Ok(name) => name.parse().unwrap_or_default(),
            Err(_) => LogLevel::default(),
        })
    }
}

impl Deref for LogLevel {
    type Target = LevelFilter;

    fn deref(&self) -> &LevelFilter {
        &self.0
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        level.0
    }
}
