//! Drug entity type

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Drug lifecycle status
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum DrugStatus {
    #[default]
    Active,
    Inactive,
}

impl std::fmt::Display for DrugStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DrugStatus::Active => write!(f, "active"),
            DrugStatus::Inactive => write!(f, "inactive"),
        }
    }
}

impl std::str::FromStr for DrugStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(DrugStatus::Active),
            "inactive" => Ok(DrugStatus::Inactive),
            _ => Err(format!("Unknown status: {}", s)),
        }
    }
}

/// A catalog entry for a medication
///
/// `category` holds a [`Category`](crate::entities::Category) id; an empty
/// string means uncategorized. The reference is soft: if the category is
/// deleted, the drug stays and the field is cleared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Drug {
    /// Unique identifier
    pub id: String,

    /// Brand or common name
    pub name: String,

    /// Generic (nonproprietary) name
    #[serde(default)]
    pub generic_name: String,

    /// Category id, empty if uncategorized
    #[serde(default)]
    pub category: String,

    /// Free-form description
    #[serde(default)]
    pub description: String,

    /// Warnings and contraindications
    #[serde(default)]
    pub warnings: String,

    /// Lifecycle status
    #[serde(default)]
    pub status: DrugStatus,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last-update timestamp, absent until the first update
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Input for creating a drug; the store assigns id, status, and timestamps
#[derive(Debug, Clone, Default)]
pub struct DrugDraft {
    pub name: String,
    pub generic_name: String,
    pub category: String,
    pub description: String,
    pub warnings: String,
}

/// Typed partial update for a drug
///
/// Only the fields carried as `Some` are applied; everything else is left
/// untouched.
#[derive(Debug, Clone, Default)]
pub struct DrugPatch {
    pub name: Option<String>,
    pub generic_name: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub warnings: Option<String>,
    pub status: Option<DrugStatus>,
}

impl DrugPatch {
    /// True if the patch carries no fields
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.generic_name.is_none()
            && self.category.is_none()
            && self.description.is_none()
            && self.warnings.is_none()
            && self.status.is_none()
    }

    /// Apply the carried fields to a drug record
    pub fn apply(&self, drug: &mut Drug) {
        if let Some(ref name) = self.name {
            drug.name = name.clone();
        }
        if let Some(ref generic_name) = self.generic_name {
            drug.generic_name = generic_name.clone();
        }
        if let Some(ref category) = self.category {
            drug.category = category.clone();
        }
        if let Some(ref description) = self.description {
            drug.description = description.clone();
        }
        if let Some(ref warnings) = self.warnings {
            drug.warnings = warnings.clone();
        }
        if let Some(status) = self.status {
            drug.status = status;
        }
    }
}
