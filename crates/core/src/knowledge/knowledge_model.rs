//! Knowledge item domain models.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ValidationError;

/// Where a knowledge item came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KnowledgeItemType {
    File,
    Url,
    Note,
}

impl KnowledgeItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            KnowledgeItemType::File => "file",
            KnowledgeItemType::Url => "url",
            KnowledgeItemType::Note => "note",
        }
    }
}

impl fmt::Display for KnowledgeItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KnowledgeItemType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "file" => Ok(KnowledgeItemType::File),
            "url" => Ok(KnowledgeItemType::Url),
            "note" => Ok(KnowledgeItemType::Note),
            other => Err(ValidationError::InvalidInput(format!(
                "Unknown knowledge item type '{}'",
                other
            ))),
        }
    }
}

/// Current UTC time as `YYYY-MM-DDTHH:MM:SS.sssZ`.
///
/// Matches the `created_at` column default so rows sort as text.
pub fn created_at_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Domain model representing a stored knowledge item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeItem {
    pub id: String,
    #[serde(rename = "type")]
    pub item_type: KnowledgeItemType,
    /// File path, URL, or free-form origin of a note.
    pub source: String,
    pub content: Option<String>,
    /// Raw embedding vector bytes, filled in once indexing exists.
    pub embedding: Option<Vec<u8>>,
    pub created_at: String,
}

/// Input model for creating a new knowledge item
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewKnowledgeItem {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub item_type: KnowledgeItemType,
    pub source: String,
    pub content: Option<String>,
    #[serde(default)]
    pub embedding: Option<Vec<u8>>,
}
