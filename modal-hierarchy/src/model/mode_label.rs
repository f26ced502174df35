use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// name of a travel mode such as "walking", "bus" or "subway". the set of modes is
/// open, any non-empty text without parentheses is accepted verbatim (case and script
/// are preserved).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ModeLabel(String);

impl ModeLabel {
    pub const DEFAULT_WALKING: &'static str = "walking";

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// the designated non-transit mode used by the simplifier when none is configured.
    pub fn walking() -> ModeLabel {
        ModeLabel(String::from(Self::DEFAULT_WALKING))
    }
}

impl TryFrom<String> for ModeLabel {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            Err(String::from("mode label cannot be empty"))
        } else if trimmed.contains(['(', ')']) {
            Err(format!("mode label '{trimmed}' cannot contain parentheses"))
        } else if trimmed.len() == value.len() {
            Ok(Self(value))
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }
}

impl TryFrom<&str> for ModeLabel {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        ModeLabel::try_from(value.to_string())
    }
}

impl From<ModeLabel> for String {
    fn from(value: ModeLabel) -> Self {
        value.0
    }
}

impl Display for ModeLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
