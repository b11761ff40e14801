//! Category entity type

use serde::{Deserialize, Serialize};

/// A grouping label for drugs (e.g. "Antibiotics")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Free-form description
    #[serde(default)]
    pub description: String,
}

/// Input for creating a category; the store assigns the id
#[derive(Debug, Clone, Default)]
pub struct CategoryDraft {
    pub name: String,
    pub description: String,
}

/// Typed partial update for a category
#[derive(Debug, Clone, Default)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl CategoryPatch {
    /// True if the patch carries no fields
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }

    /// Apply the carried fields to a category record
    pub fn apply(&self, category: &mut Category) {
        if let Some(ref name) = self.name {
            category.name = name.clone();
        }
        if let Some(ref description) = self.description {
            category.description = description.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_roundtrip() {
        let category = Category {
            id: "CAT001".to_string(),
            name: "Antibiotics".to_string(),
            description: "Anti-bacterial medications".to_string(),
        };
        let json = serde_json::to_string(&category).unwrap();
        let parsed: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(category, parsed);
    }

    #[test]
    fn test_category_description_defaults() {
        let category: Category = serde_json::from_str(r#"{"id":"CAT-X","name":"Other"}"#).unwrap();
        assert_eq!(category.description, "");
    }
}
