use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Display languages supported by the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    English,
    Kannada,
}

/// Returned when a locale name is not one of the supported codes.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown language '{0}', expected 'english' or 'kannada'")]
pub struct UnknownLocale(pub String);

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::English, Locale::Kannada];

    /// Stable lowercase code, used on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::English => "english",
            Self::Kannada => "kannada",
        }
    }

    /// Name of the language written in its own script.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Kannada => "ಕನ್ನಡ",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "english" | "en" => Some(Self::English),
            "kannada" | "kn" => Some(Self::Kannada),
            _ => None,
        }
    }
}

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownLocale(s.to_string()))
    }
}

impl fmt::Display for Locale {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
