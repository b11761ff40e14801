//! Entity store - the single source of truth for the four collections
//!
//! The store is an explicit object over an injected [`StorageBackend`]; there
//! is no global state. Every mutating operation is one full
//! load-modify-serialize-save cycle, persisted synchronously before the call
//! returns. The model is single-threaded and single-user: nothing arbitrates
//! concurrent writers.
//!
//! Contract notes:
//! - `update_*` returns `Ok(false)` when the id is not found (nonfatal).
//! - `delete_*` is idempotent; deleting a nonexistent id is a successful no-op.
//! - Deleting a drug cascades to every interaction touching it.
//! - Deleting a category orphans referencing drugs (category cleared), never
//!   deletes them.
//! - Deleting a severity level is blocked while any interaction references it.

use chrono::Utc;
use thiserror::Error;

use crate::core::codec::{self, CodecError};
use crate::core::document::Document;
use crate::core::identity::IdPrefix;
use crate::core::storage::{StorageBackend, StorageError};
use crate::entities::{
    Category, CategoryDraft, CategoryPatch, Drug, DrugDraft, DrugPatch, DrugStatus, Interaction,
    InteractionDraft, InteractionPatch, SeverityLevel, SeverityLevelDraft, SeverityLevelPatch,
};

/// Errors from store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error("severity level '{id}' is referenced by {count} interaction(s)")]
    SeverityInUse { id: String, count: usize },
}

/// The entity store over an injected persistence backend
#[derive(Debug)]
pub struct Store<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> Store<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Consume the store, returning the backend
    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Full current document; seeds the fixed default on first read
    pub fn snapshot(&self) -> Result<Document, StoreError> {
        match self.backend.load()? {
            Some(text) => Ok(codec::from_json(&text)?),
            None => {
                let document = Document::seed();
                self.persist(&document)?;
                Ok(document)
            }
        }
    }

    fn persist(&self, document: &Document) -> Result<(), StoreError> {
        let text = codec::to_json(document)?;
        self.backend.save(&text)?;
        Ok(())
    }

    // Drugs

    /// Create a drug: assigns id and creation timestamp, status starts active
    pub fn add_drug(&self, draft: DrugDraft) -> Result<Drug, StoreError> {
        let mut document = self.snapshot()?;
        let drug = Drug {
            id: IdPrefix::Drug.generate(),
            name: draft.name,
            generic_name: draft.generic_name,
            category: draft.category,
            description: draft.description,
            warnings: draft.warnings,
            status: DrugStatus::Active,
            created_at: Utc::now(),
            updated_at: None,
        };
        document.drugs.push(drug.clone());
        self.persist(&document)?;
        Ok(drug)
    }

    /// Patch a drug; `Ok(false)` if the id is not found
    pub fn update_drug(&self, id: &str, patch: DrugPatch) -> Result<bool, StoreError> {
        let mut document = self.snapshot()?;
        let Some(drug) = document.drugs.iter_mut().find(|d| d.id == id) else {
            return Ok(false);
        };
        patch.apply(drug);
        drug.updated_at = Some(Utc::now());
        self.persist(&document)?;
        Ok(true)
    }

    /// Delete a drug and cascade-delete every interaction touching it
    ///
    /// Returns the number of interactions removed by the cascade. Deleting a
    /// nonexistent id is a successful no-op.
    pub fn delete_drug(&self, id: &str) -> Result<usize, StoreError> {
        let mut document = self.snapshot()?;
        document.drugs.retain(|d| d.id != id);
        let before = document.interactions.len();
        document.interactions.retain(|i| !i.involves(id));
        let cascaded = before - document.interactions.len();
        self.persist(&document)?;
        Ok(cascaded)
    }

    // Interactions

    /// Create an interaction: assigns id and creation timestamp
    ///
    /// Duplicate unordered pairs are tolerated here; refusing them is the
    /// caller's choice.
    pub fn add_interaction(&self, draft: InteractionDraft) -> Result<Interaction, StoreError> {
        let mut document = self.snapshot()?;
        let interaction = Interaction {
            id: IdPrefix::Interaction.generate(),
            drug_a_id: draft.drug_a_id,
            drug_b_id: draft.drug_b_id,
            severity: draft.severity,
            description: draft.description,
            mechanism: draft.mechanism,
            recommendations: draft.recommendations,
            created_at: Utc::now(),
            updated_at: None,
        };
        document.interactions.push(interaction.clone());
        self.persist(&document)?;
        Ok(interaction)
    }

    /// Patch an interaction; `Ok(false)` if the id is not found
    pub fn update_interaction(
        &self,
        id: &str,
        patch: InteractionPatch,
    ) -> Result<bool, StoreError> {
        let mut document = self.snapshot()?;
        let Some(interaction) = document.interactions.iter_mut().find(|i| i.id == id) else {
            return Ok(false);
        };
        patch.apply(interaction);
        interaction.updated_at = Some(Utc::now());
        self.persist(&document)?;
        Ok(true)
    }

    /// Delete an interaction (no cascade); idempotent
    pub fn delete_interaction(&self, id: &str) -> Result<(), StoreError> {
        let mut document = self.snapshot()?;
        document.interactions.retain(|i| i.id != id);
        self.persist(&document)
    }

    // Categories

    /// Create a category: assigns the id
    pub fn add_category(&self, draft: CategoryDraft) -> Result<Category, StoreError> {
        let mut document = self.snapshot()?;
        let category = Category {
            id: IdPrefix::Category.generate(),
            name: draft.name,
            description: draft.description,
        };
        document.categories.push(category.clone());
        self.persist(&document)?;
        Ok(category)
    }

    /// Patch a category; `Ok(false)` if the id is not found
    pub fn update_category(&self, id: &str, patch: CategoryPatch) -> Result<bool, StoreError> {
        let mut document = self.snapshot()?;
        let Some(category) = document.categories.iter_mut().find(|c| c.id == id) else {
            return Ok(false);
        };
        patch.apply(category);
        self.persist(&document)?;
        Ok(true)
    }

    /// Delete a category, clearing the category field of every drug that
    /// referenced it
    ///
    /// Returns the number of drugs orphaned to "Uncategorized". Intentionally
    /// never deletes drugs.
    pub fn delete_category(&self, id: &str) -> Result<usize, StoreError> {
        let mut document = self.snapshot()?;
        document.categories.retain(|c| c.id != id);
        let mut orphaned = 0;
        for drug in document.drugs.iter_mut().filter(|d| d.category == id) {
            drug.category.clear();
            orphaned += 1;
        }
        self.persist(&document)?;
        Ok(orphaned)
    }

    /// Atomically overwrite the category collection, leaving the others
    /// untouched
    pub fn replace_categories(&self, categories: Vec<Category>) -> Result<(), StoreError> {
        let mut document = self.snapshot()?;
        document.categories = categories;
        self.persist(&document)
    }

    // Severity levels

    /// Create a severity level: assigns the id
    pub fn add_severity_level(
        &self,
        draft: SeverityLevelDraft,
    ) -> Result<SeverityLevel, StoreError> {
        let mut document = self.snapshot()?;
        let level = SeverityLevel {
            id: IdPrefix::Severity.generate(),
            name: draft.name,
            color: draft.color,
            description: draft.description,
        };
        document.severity_levels.push(level.clone());
        self.persist(&document)?;
        Ok(level)
    }

    /// Patch a severity level; `Ok(false)` if the id is not found
    pub fn update_severity_level(
        &self,
        id: &str,
        patch: SeverityLevelPatch,
    ) -> Result<bool, StoreError> {
        let mut document = self.snapshot()?;
        let Some(level) = document.severity_levels.iter_mut().find(|s| s.id == id) else {
            return Ok(false);
        };
        patch.apply(level);
        self.persist(&document)?;
        Ok(true)
    }

    /// Delete a severity level; blocked while any interaction references it
    pub fn delete_severity_level(&self, id: &str) -> Result<(), StoreError> {
        let mut document = self.snapshot()?;
        let count = document
            .interactions
            .iter()
            .filter(|i| i.severity == id)
            .count();
        if count > 0 {
            return Err(StoreError::SeverityInUse {
                id: id.to_string(),
                count,
            });
        }
        document.severity_levels.retain(|s| s.id != id);
        self.persist(&document)
    }

    /// Atomically overwrite the severity level collection, leaving the others
    /// untouched
    pub fn replace_severity_levels(&self, levels: Vec<SeverityLevel>) -> Result<(), StoreError> {
        let mut document = self.snapshot()?;
        document.severity_levels = levels;
        self.persist(&document)
    }

    // Bulk operations

    /// Serialize the full document for export
    pub fn export_json(&self) -> Result<String, StoreError> {
        Ok(codec::to_json(&self.snapshot()?)?)
    }

    /// Wholesale-replace the document from an exported JSON text
    ///
    /// No merge. On parse or shape failure the existing document is left
    /// completely untouched.
    pub fn import_json(&self, text: &str) -> Result<Document, StoreError> {
        let document = codec::from_json(text)?;
        self.persist(&document)?;
        Ok(document)
    }

    /// Discard everything and re-run first-time initialization
    pub fn reset(&self) -> Result<Document, StoreError> {
        self.backend.clear()?;
        self.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::MemoryBackend;

    fn store() -> Store<MemoryBackend> {
        Store::new(MemoryBackend::new())
    }

    fn drug_draft(name: &str) -> DrugDraft {
        DrugDraft {
            name: name.to_string(),
            ..Default::default()
        }
    }

    fn interaction_draft(a: &str, b: &str) -> InteractionDraft {
        InteractionDraft {
            drug_a_id: a.to_string(),
            drug_b_id: b.to_string(),
            severity: "SEV001".to_string(),
            description: "Increased risk of bleeding".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_first_snapshot_seeds_defaults() {
        let store = store();
        let doc = store.snapshot().unwrap();
        assert!(doc.drugs.is_empty());
        assert_eq!(doc.categories.len(), 5);
        assert_eq!(doc.severity_levels.len(), 3);
        // the seed was persisted, not just returned
        assert!(store.into_backend().load().unwrap().is_some());
    }

    #[test]
    fn test_add_drug_assigns_id_and_defaults() {
        let store = store();
        let drug = store.add_drug(drug_draft("Aspirin")).unwrap();
        assert!(drug.id.starts_with("DRG-"));
        assert_eq!(drug.status, DrugStatus::Active);
        assert!(drug.updated_at.is_none());

        let doc = store.snapshot().unwrap();
        assert_eq!(doc.drug_by_id(&drug.id).unwrap().name, "Aspirin");
    }

    #[test]
    fn test_update_drug_merges_and_stamps() {
        let store = store();
        let drug = store.add_drug(drug_draft("Aspirin")).unwrap();
        let patch = DrugPatch {
            warnings: Some("Bleeding risk".to_string()),
            ..Default::default()
        };
        assert!(store.update_drug(&drug.id, patch).unwrap());

        let doc = store.snapshot().unwrap();
        let updated = doc.drug_by_id(&drug.id).unwrap();
        assert_eq!(updated.warnings, "Bleeding risk");
        assert_eq!(updated.name, "Aspirin");
        assert!(updated.updated_at.is_some());
    }

    #[test]
    fn test_update_missing_drug_returns_false_and_leaves_store() {
        let store = store();
        store.add_drug(drug_draft("Aspirin")).unwrap();
        let before = store.snapshot().unwrap();
        assert!(!store
            .update_drug("DRG-MISSING", DrugPatch::default())
            .unwrap());
        assert_eq!(store.snapshot().unwrap(), before);
    }

    #[test]
    fn test_delete_drug_cascades_interactions() {
        let store = store();
        let a = store.add_drug(drug_draft("Aspirin")).unwrap();
        let b = store.add_drug(drug_draft("Warfarin")).unwrap();
        let c = store.add_drug(drug_draft("Ibuprofen")).unwrap();
        store.add_interaction(interaction_draft(&a.id, &b.id)).unwrap();
        store.add_interaction(interaction_draft(&b.id, &c.id)).unwrap();

        let cascaded = store.delete_drug(&b.id).unwrap();
        assert_eq!(cascaded, 2);

        let doc = store.snapshot().unwrap();
        assert!(doc.drug_by_id(&b.id).is_none());
        assert!(doc.drug_by_id(&a.id).is_some());
        assert!(doc.drug_by_id(&c.id).is_some());
        assert!(doc.interactions.is_empty());
    }

    #[test]
    fn test_delete_drug_leaves_unrelated_interactions() {
        let store = store();
        let a = store.add_drug(drug_draft("Aspirin")).unwrap();
        let b = store.add_drug(drug_draft("Warfarin")).unwrap();
        let c = store.add_drug(drug_draft("Ibuprofen")).unwrap();
        store.add_interaction(interaction_draft(&a.id, &b.id)).unwrap();

        let cascaded = store.delete_drug(&c.id).unwrap();
        assert_eq!(cascaded, 0);
        assert_eq!(store.snapshot().unwrap().interactions.len(), 1);
    }

    #[test]
    fn test_delete_nonexistent_drug_is_noop_success() {
        let store = store();
        store.add_drug(drug_draft("Aspirin")).unwrap();
        assert_eq!(store.delete_drug("DRG-MISSING").unwrap(), 0);
        assert_eq!(store.snapshot().unwrap().drugs.len(), 1);
    }

    #[test]
    fn test_interaction_crud() {
        let store = store();
        let a = store.add_drug(drug_draft("Aspirin")).unwrap();
        let b = store.add_drug(drug_draft("Warfarin")).unwrap();
        let interaction = store
            .add_interaction(interaction_draft(&a.id, &b.id))
            .unwrap();
        assert!(interaction.id.starts_with("INT-"));

        let patch = InteractionPatch {
            severity: Some("SEV002".to_string()),
            ..Default::default()
        };
        assert!(store.update_interaction(&interaction.id, patch).unwrap());
        assert!(!store
            .update_interaction("INT-MISSING", InteractionPatch::default())
            .unwrap());

        let doc = store.snapshot().unwrap();
        assert_eq!(
            doc.interaction_by_id(&interaction.id).unwrap().severity,
            "SEV002"
        );

        store.delete_interaction(&interaction.id).unwrap();
        store.delete_interaction(&interaction.id).unwrap(); // idempotent
        assert!(store.snapshot().unwrap().interactions.is_empty());
    }

    #[test]
    fn test_delete_category_orphans_drugs() {
        let store = store();
        let category = store
            .add_category(CategoryDraft {
                name: "Statins".to_string(),
                description: String::new(),
            })
            .unwrap();
        let drug = store
            .add_drug(DrugDraft {
                name: "Atorvastatin".to_string(),
                category: category.id.clone(),
                ..Default::default()
            })
            .unwrap();

        let orphaned = store.delete_category(&category.id).unwrap();
        assert_eq!(orphaned, 1);

        let doc = store.snapshot().unwrap();
        let survivor = doc.drug_by_id(&drug.id).unwrap();
        assert_eq!(survivor.category, "");
        assert_eq!(doc.category_name(&survivor.category), "Uncategorized");
    }

    #[test]
    fn test_replace_categories_leaves_other_collections() {
        let store = store();
        store.add_drug(drug_draft("Aspirin")).unwrap();
        store.replace_categories(Vec::new()).unwrap();

        let doc = store.snapshot().unwrap();
        assert!(doc.categories.is_empty());
        assert_eq!(doc.drugs.len(), 1);
        assert_eq!(doc.severity_levels.len(), 3);
    }

    #[test]
    fn test_severity_delete_blocked_while_referenced() {
        let store = store();
        let a = store.add_drug(drug_draft("Aspirin")).unwrap();
        let b = store.add_drug(drug_draft("Warfarin")).unwrap();
        store.add_interaction(interaction_draft(&a.id, &b.id)).unwrap();

        let err = store.delete_severity_level("SEV001").unwrap_err();
        assert!(matches!(
            err,
            StoreError::SeverityInUse { ref id, count: 1 } if id == "SEV001"
        ));
        assert_eq!(store.snapshot().unwrap().severity_levels.len(), 3);

        // unreferenced level deletes fine
        store.delete_severity_level("SEV003").unwrap();
        assert_eq!(store.snapshot().unwrap().severity_levels.len(), 2);
    }

    #[test]
    fn test_severity_level_add_update_replace() {
        let store = store();
        let level = store
            .add_severity_level(SeverityLevelDraft {
                name: "Contraindicated".to_string(),
                color: "#000000".to_string(),
                description: String::new(),
            })
            .unwrap();
        assert!(level.id.starts_with("SEV-"));

        let patch = SeverityLevelPatch {
            color: Some("#111111".to_string()),
            ..Default::default()
        };
        assert!(store.update_severity_level(&level.id, patch).unwrap());
        assert_eq!(
            store.snapshot().unwrap().severity_by_id(&level.id).unwrap().color,
            "#111111"
        );

        let seed = Document::seed();
        store.replace_severity_levels(seed.severity_levels).unwrap();
        assert_eq!(store.snapshot().unwrap().severity_levels.len(), 3);
    }

    #[test]
    fn test_export_import_roundtrip_is_identity() {
        let store = store();
        let a = store.add_drug(drug_draft("Aspirin")).unwrap();
        let b = store.add_drug(drug_draft("Warfarin")).unwrap();
        store.add_interaction(interaction_draft(&a.id, &b.id)).unwrap();

        let before = store.snapshot().unwrap();
        let exported = store.export_json().unwrap();
        store.import_json(&exported).unwrap();
        assert_eq!(store.snapshot().unwrap(), before);
    }

    #[test]
    fn test_failed_import_leaves_store_untouched() {
        let store = store();
        store.add_drug(drug_draft("Aspirin")).unwrap();
        let before = store.snapshot().unwrap();

        assert!(store.import_json("{\"drugs\": []}").is_err());
        assert!(store.import_json("garbage").is_err());
        assert_eq!(store.snapshot().unwrap(), before);
    }

    #[test]
    fn test_reset_restores_seed() {
        let store = store();
        store.add_drug(drug_draft("Aspirin")).unwrap();
        let doc = store.reset().unwrap();
        assert_eq!(doc, Document::seed());
        assert_eq!(store.snapshot().unwrap(), Document::seed());
    }
}
