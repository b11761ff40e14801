//! Interaction entity type

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A recorded clinical relationship between exactly two drugs
///
/// The pair is symmetric: (A, B) and (B, A) denote the same relationship.
/// At most one record should exist per unordered pair, but the store does not
/// enforce this on write; duplicates are tolerated and lookups return the
/// first match in storage order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interaction {
    /// Unique identifier
    pub id: String,

    /// First endpoint (drug id)
    pub drug_a_id: String,

    /// Second endpoint (drug id)
    pub drug_b_id: String,

    /// Severity level id
    pub severity: String,

    /// Clinical description of the interaction
    pub description: String,

    /// Pharmacological mechanism, if known
    #[serde(default)]
    pub mechanism: String,

    /// Clinical recommendations
    #[serde(default)]
    pub recommendations: String,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last-update timestamp, absent until the first update
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Interaction {
    /// True if the given drug id is either endpoint
    pub fn involves(&self, drug_id: &str) -> bool {
        self.drug_a_id == drug_id || self.drug_b_id == drug_id
    }

    /// Unordered pair match: true for (a, b) in either orientation
    pub fn is_between(&self, drug_a_id: &str, drug_b_id: &str) -> bool {
        (self.drug_a_id == drug_a_id && self.drug_b_id == drug_b_id)
            || (self.drug_a_id == drug_b_id && self.drug_b_id == drug_a_id)
    }
}

/// Input for creating an interaction; the store assigns id and timestamps
#[derive(Debug, Clone, Default)]
pub struct InteractionDraft {
    pub drug_a_id: String,
    pub drug_b_id: String,
    pub severity: String,
    pub description: String,
    pub mechanism: String,
    pub recommendations: String,
}

/// Typed partial update for an interaction
#[derive(Debug, Clone, Default)]
pub struct InteractionPatch {
    pub drug_a_id: Option<String>,
    pub drug_b_id: Option<String>,
    pub severity: Option<String>,
    pub description: Option<String>,
    pub mechanism: Option<String>,
    pub recommendations: Option<String>,
}

impl InteractionPatch {
    /// True if the patch carries no fields
    pub fn is_empty(&self) -> bool {
        self.drug_a_id.is_none()
            && self.drug_b_id.is_none()
            && self.severity.is_none()
            && self.description.is_none()
            && self.mechanism.is_none()
            && self.recommendations.is_none()
    }

    /// Apply the carried fields to an interaction record
    pub fn apply(&self, interaction: &mut Interaction) {
        if let Some(ref drug_a_id) = self.drug_a_id {
            interaction.drug_a_id = drug_a_id.clone();
        }
        if let Some(ref drug_b_id) = self.drug_b_id {
            interaction.drug_b_id = drug_b_id.clone();
        }
        if let Some(ref severity) = self.severity {
            interaction.severity = severity.clone();
        }
        if let Some(ref description) = self.description {
            interaction.description = description.clone();
        }
        if let Some(ref mechanism) = self.mechanism {
            interaction.mechanism = mechanism.clone();
        }
        if let Some(ref recommendations) = self.recommendations {
            interaction.recommendations = recommendations.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_interaction() -> Interaction {
        Interaction {
            id: "INT-TEST".to_string(),
            drug_a_id: "DRG-A".to_string(),
            drug_b_id: "DRG-B".to_string(),
            severity: "SEV001".to_string(),
            description: "Increased risk of bleeding".to_string(),
            mechanism: String::new(),
            recommendations: String::new(),
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    #[test]
    fn test_interaction_wire_names_are_camel_case() {
        let json = serde_json::to_string(&sample_interaction()).unwrap();
        assert!(json.contains("\"drugAId\""));
        assert!(json.contains("\"drugBId\""));
        assert!(json.contains("\"createdAt\""));
    }

    #[test]
    fn test_is_between_is_symmetric() {
        let interaction = sample_interaction();
        assert!(interaction.is_between("DRG-A", "DRG-B"));
        assert!(interaction.is_between("DRG-B", "DRG-A"));
        assert!(!interaction.is_between("DRG-A", "DRG-C"));
    }

    #[test]
    fn test_involves_either_endpoint() {
        let interaction = sample_interaction();
        assert!(interaction.involves("DRG-A"));
        assert!(interaction.involves("DRG-B"));
        assert!(!interaction.involves("DRG-C"));
    }

    #[test]
    fn test_patch_applies_only_carried_fields() {
        let mut interaction = sample_interaction();
        let patch = InteractionPatch {
            severity: Some("SEV002".to_string()),
            recommendations: Some("Monitor INR closely".to_string()),
            ..Default::default()
        };
        patch.apply(&mut interaction);
        assert_eq!(interaction.severity, "SEV002");
        assert_eq!(interaction.recommendations, "Monitor INR closely");
        assert_eq!(interaction.description, "Increased risk of bleeding");
    }
}
