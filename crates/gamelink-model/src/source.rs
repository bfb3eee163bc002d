//! The two catalogs records are scraped from.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// A catalog that produces raw game records.
///
/// Metacritic is always the left side of a link and Steam the right side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// Review aggregator listing critic and user scores.
    Metacritic,
    /// Storefront listing prices, tags and user review summaries.
    Steam,
}

impl Source {
    pub const ALL: [Source; 2] = [Source::Metacritic, Source::Steam];

    /// Stable lowercase identifier used in file names and CLI arguments.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Metacritic => "metacritic",
            Self::Steam => "steam",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Metacritic => "Metacritic",
            Self::Steam => "Steam",
        }
    }

    /// Prefix applied to this source's columns in the unified table.
    pub fn column_prefix(&self) -> &'static str {
        match self {
            Self::Metacritic => "mc_",
            Self::Steam => "steam_",
        }
    }

    /// Raw fields forming the natural key used to drop duplicate records.
    pub fn dedupe_key_fields(&self) -> &'static [&'static str] {
        match self {
            Self::Metacritic => &["title", "url"],
            Self::Steam => &["app_id"],
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Source {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "metacritic" | "mc" => Ok(Self::Metacritic),
            "steam" => Ok(Self::Steam),
            _ => Err(ModelError::UnknownSource(s.to_string())),
        }
    }
}
