//! Core selector types: target platform and AI backend model.
//!
//! Both are closed enumerations chosen by the user. They serialize as their
//! lowercase names so they can travel through config files, CLI flags, and
//! the HTTP proxy unchanged.

use crate::error::UnknownVariant;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Target social network whose caption conventions drive prompt selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Twitter,
    Instagram,
    Pinterest,
    Youtube,
    Threads,
    Snapchat,
}

impl Platform {
    /// Every platform, in display order.
    pub const ALL: [Platform; 6] = [
        Platform::Twitter,
        Platform::Instagram,
        Platform::Pinterest,
        Platform::Youtube,
        Platform::Threads,
        Platform::Snapchat,
    ];

    /// Lowercase identifier used on the wire and in config.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Twitter => "twitter",
            Platform::Instagram => "instagram",
            Platform::Pinterest => "pinterest",
            Platform::Youtube => "youtube",
            Platform::Threads => "threads",
            Platform::Snapchat => "snapchat",
        }
    }

    /// Heading shown above a generated description.
    pub fn title(&self) -> &'static str {
        match self {
            Platform::Twitter => "Twitter Description",
            Platform::Instagram => "Instagram Caption",
            Platform::Pinterest => "Pinterest Description",
            Platform::Youtube => "YouTube Description",
            Platform::Threads => "Threads Post",
            Platform::Snapchat => "Snapchat Caption",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Platform::ALL
            .into_iter()
            .find(|p| p.as_str() == lower)
            .ok_or_else(|| UnknownVariant {
                kind: "platform",
                value: s.to_string(),
            })
    }
}

/// AI backend used to generate descriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Model {
    /// Google Gemini generateContent API
    #[default]
    Gemini,
    /// Groq OpenAI-compatible chat completions API
    Groq,
}

impl Model {
    pub const ALL: [Model; 2] = [Model::Gemini, Model::Groq];

    pub fn as_str(&self) -> &'static str {
        match self {
            Model::Gemini => "gemini",
            Model::Groq => "groq",
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Model {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gemini" => Ok(Model::Gemini),
            "groq" => Ok(Model::Groq),
            _ => Err(UnknownVariant {
                kind: "model",
                value: s.to_string(),
            }),
        }
    }
}
