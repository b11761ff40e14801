//! Interaction query engine
//!
//! Read-only lookups derived from a [`Document`] snapshot. Everything here is
//! a linear filter over the stored records - no inference, no transitive
//! reasoning, no index. That is O(#records) per call, fine at catalog scale
//! (tens to low thousands of records).

use crate::core::document::Document;
use crate::entities::{Category, Drug, Interaction, SeverityLevel};

/// Fallback color when a severity id does not resolve
const UNKNOWN_SEVERITY_COLOR: &str = "#718096";

impl Document {
    /// Look up a drug by id
    pub fn drug_by_id(&self, id: &str) -> Option<&Drug> {
        self.drugs.iter().find(|d| d.id == id)
    }

    /// Case-insensitive exact match against name or generic name
    ///
    /// Uses full Unicode lowercasing, same as [`Document::search_drugs`], so
    /// accented names resolve regardless of input case.
    pub fn drug_by_name(&self, name: &str) -> Option<&Drug> {
        let needle = name.to_lowercase();
        self.drugs.iter().find(|d| {
            d.name.to_lowercase() == needle || d.generic_name.to_lowercase() == needle
        })
    }

    /// Case-insensitive substring search over name and generic name, in
    /// storage order
    ///
    /// An empty query returns nothing; callers conventionally gate on a
    /// minimum query length of 2 before calling.
    pub fn search_drugs(&self, query: &str) -> Vec<&Drug> {
        if query.is_empty() {
            return Vec::new();
        }
        let term = query.to_lowercase();
        self.drugs
            .iter()
            .filter(|d| {
                d.name.to_lowercase().contains(&term)
                    || d.generic_name.to_lowercase().contains(&term)
            })
            .collect()
    }

    /// Look up an interaction by id
    pub fn interaction_by_id(&self, id: &str) -> Option<&Interaction> {
        self.interactions.iter().find(|i| i.id == id)
    }

    /// Unordered pair lookup: the stored interaction between two drugs, in
    /// either orientation
    ///
    /// If duplicate records exist for the pair, this returns the first match
    /// in storage order.
    pub fn interaction_between(&self, drug_a_id: &str, drug_b_id: &str) -> Option<&Interaction> {
        self.interactions
            .iter()
            .find(|i| i.is_between(drug_a_id, drug_b_id))
    }

    /// Every stored interaction whose both endpoints are in the given set
    ///
    /// This is a filter over storage, not a pairwise cross-product: pairs
    /// without a stored interaction are silently absent from the result.
    pub fn interactions_among(&self, drug_ids: &[&str]) -> Vec<&Interaction> {
        self.interactions
            .iter()
            .filter(|i| {
                drug_ids.contains(&i.drug_a_id.as_str())
                    && drug_ids.contains(&i.drug_b_id.as_str())
            })
            .collect()
    }

    /// Every stored interaction touching the given drug
    pub fn interactions_for_drug(&self, drug_id: &str) -> Vec<&Interaction> {
        self.interactions
            .iter()
            .filter(|i| i.involves(drug_id))
            .collect()
    }

    /// Look up a category by id
    pub fn category_by_id(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Look up a severity level by id
    pub fn severity_by_id(&self, id: &str) -> Option<&SeverityLevel> {
        self.severity_levels.iter().find(|s| s.id == id)
    }

    /// Display name for a category id, "Uncategorized" when it does not
    /// resolve
    pub fn category_name(&self, id: &str) -> &str {
        self.category_by_id(id)
            .map(|c| c.name.as_str())
            .unwrap_or("Uncategorized")
    }

    /// Display name for a severity id, "Unknown" when it does not resolve
    pub fn severity_name(&self, id: &str) -> &str {
        self.severity_by_id(id)
            .map(|s| s.name.as_str())
            .unwrap_or("Unknown")
    }

    /// Display color for a severity id, a neutral gray when it does not
    /// resolve
    pub fn severity_color(&self, id: &str) -> &str {
        self.severity_by_id(id)
            .map(|s| s.color.as_str())
            .unwrap_or(UNKNOWN_SEVERITY_COLOR)
    }
}
