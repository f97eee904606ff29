//! Credential domain models.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed pair of AI provider keys the chat flow relies on.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderKeys {
    pub openai: Option<String>,
    pub gemini: Option<String>,
}

impl ProviderKeys {
    /// True when at least one provider has a non-empty key.
    pub fn any_configured(&self) -> bool {
        [&self.openai, &self.gemini]
            .iter()
            .any(|key| key.as_deref().is_some_and(|k| !k.is_empty()))
    }
}

impl fmt::Debug for ProviderKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mask = |key: &Option<String>| key.as_ref().map(|_| "<redacted>");
        f.debug_struct("ProviderKeys")
            .field("openai", &mask(&self.openai))
            .field("gemini", &mask(&self.gemini))
            .finish()
    }
}
