//! Severity level entity type

use serde::{Deserialize, Serialize};

/// A reference value classifying interactions (e.g. Serious/Moderate/Minor)
///
/// Treated as a closed, rarely-mutated set. `color` is a display hint
/// (`#rrggbb`) carried through to consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeverityLevel {
    /// Unique identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Display color hint
    #[serde(default)]
    pub color: String,

    /// Free-form description
    #[serde(default)]
    pub description: String,
}

/// Input for creating a severity level; the store assigns the id
#[derive(Debug, Clone, Default)]
pub struct SeverityLevelDraft {
    pub name: String,
    pub color: String,
    pub description: String,
}

/// Typed partial update for a severity level
#[derive(Debug, Clone, Default)]
pub struct SeverityLevelPatch {
    pub name: Option<String>,
    pub color: Option<String>,
    pub description: Option<String>,
}

impl SeverityLevelPatch {
    /// True if the patch carries no fields
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.color.is_none() && self.description.is_none()
    }

    /// Apply the carried fields to a severity level record
    pub fn apply(&self, level: &mut SeverityLevel) {
        if let Some(ref name) = self.name {
            level.name = name.clone();
        }
        if let Some(ref color) = self.color {
            level.color = color.clone();
        }
        if let Some(ref description) = self.description {
            level.description = description.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_level_roundtrip() {
        let level = SeverityLevel {
            id: "SEV001".to_string(),
            name: "Serious".to_string(),
            color: "#e53e3e".to_string(),
            description: "Potentially life-threatening".to_string(),
        };
        let json = serde_json::to_string(&level).unwrap();
        let parsed: SeverityLevel = serde_json::from_str(&json).unwrap();
        assert_eq!(level, parsed);
    }
}
