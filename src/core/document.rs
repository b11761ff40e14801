//! The catalog document - the single serializable blob holding all four
//! collections
//!
//! The document is the wire format for export/import and must stay stable for
//! round-trip compatibility: a JSON object with exactly the top-level keys
//! `drugs`, `interactions`, `categories`, and `severityLevels`, each a flat
//! array of records.

use serde::{Deserialize, Serialize};

use crate::entities::{Category, Drug, Interaction, SeverityLevel};

/// The four collections of the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Drugs,
    Interactions,
    Categories,
    SeverityLevels,
}

impl Collection {
    /// All collections, in document order
    pub const ALL: [Collection; 4] = [
        Collection::Drugs,
        Collection::Interactions,
        Collection::Categories,
        Collection::SeverityLevels,
    ];

    /// The top-level JSON key for this collection
    pub fn key(&self) -> &'static str {
        match self {
            Collection::Drugs => "drugs",
            Collection::Interactions => "interactions",
            Collection::Categories => "categories",
            Collection::SeverityLevels => "severityLevels",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Full snapshot of the catalog at a point in time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub drugs: Vec<Drug>,
    pub interactions: Vec<Interaction>,
    pub categories: Vec<Category>,
    pub severity_levels: Vec<SeverityLevel>,
}

impl Document {
    /// The first-time document: no drugs or interactions, the fixed seed
    /// categories and severity levels
    pub fn seed() -> Self {
        Self {
            drugs: Vec::new(),
            interactions: Vec::new(),
            categories: vec![
                Category {
                    id: "CAT001".to_string(),
                    name: "Antibiotics".to_string(),
                    description: "Anti-bacterial medications".to_string(),
                },
                Category {
                    id: "CAT002".to_string(),
                    name: "Analgesics".to_string(),
                    description: "Pain relief medications".to_string(),
                },
                Category {
                    id: "CAT003".to_string(),
                    name: "Antidepressants".to_string(),
                    description: "Mood disorder medications".to_string(),
                },
                Category {
                    id: "CAT004".to_string(),
                    name: "Antihypertensives".to_string(),
                    description: "Blood pressure medications".to_string(),
                },
                Category {
                    id: "CAT005".to_string(),
                    name: "Anticoagulants".to_string(),
                    description: "Blood thinners".to_string(),
                },
            ],
            severity_levels: vec![
                SeverityLevel {
                    id: "SEV001".to_string(),
                    name: "Serious".to_string(),
                    color: "#e53e3e".to_string(),
                    description: "Potentially life-threatening".to_string(),
                },
                SeverityLevel {
                    id: "SEV002".to_string(),
                    name: "Moderate".to_string(),
                    color: "#d69e2e".to_string(),
                    description: "Requires monitoring".to_string(),
                },
                SeverityLevel {
                    id: "SEV003".to_string(),
                    name: "Minor".to_string(),
                    color: "#38a169".to_string(),
                    description: "Minimal clinical significance".to_string(),
                },
            ],
        }
    }

    /// Record count of one collection
    pub fn len(&self, collection: Collection) -> usize {
        match collection {
            Collection::Drugs => self.drugs.len(),
            Collection::Interactions => self.interactions.len(),
            Collection::Categories => self.categories.len(),
            Collection::SeverityLevels => self.severity_levels.len(),
        }
    }
}
