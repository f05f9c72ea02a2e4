//! Common types used across the assistant

use serde::{Deserialize, Serialize};

/// Reply languages
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    #[serde(alias = "fa")]
    Persian,
    #[serde(alias = "en")]
    English,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::Persian => "fa",
            Language::English => "en",
        }
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fa" | "persian" | "farsi" => Ok(Language::Persian),
            "en" | "english" => Ok(Language::English),
            other => Err(format!("Unsupported language: {}", other)),
        }
    }
}
