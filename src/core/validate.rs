//! Pre-write validation
//!
//! Pure functions with no side effects, called before every create/update.
//! Failures carry the human-readable reason that is surfaced to the user
//! directly; the write is aborted and the store is never partially mutated.

use thiserror::Error;

use crate::entities::{CategoryDraft, DrugDraft, InteractionDraft, SeverityLevelDraft};

/// Minimum trimmed length for a drug name
pub const MIN_DRUG_NAME_LEN: usize = 2;

/// Minimum trimmed length for an interaction description
pub const MIN_INTERACTION_DESCRIPTION_LEN: usize = 10;

/// Caller-correctable input problems
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Drug name is required and must be at least 2 characters")]
    DrugNameTooShort,

    #[error("Both drugs must be selected")]
    MissingInteractionDrug,

    #[error("Cannot create interaction between the same drug")]
    SelfInteraction,

    #[error("Severity level is required")]
    MissingSeverity,

    #[error("Description is required and must be at least 10 characters")]
    DescriptionTooShort,

    #[error("Category name is required")]
    MissingCategoryName,

    #[error("Severity level name is required")]
    MissingSeverityName,
}

/// Validate a drug before create/update
pub fn validate_drug(draft: &DrugDraft) -> Result<(), ValidationError> {
    if draft.name.trim().len() < MIN_DRUG_NAME_LEN {
        return Err(ValidationError::DrugNameTooShort);
    }
    Ok(())
}

/// Validate an interaction before create/update
pub fn validate_interaction(draft: &InteractionDraft) -> Result<(), ValidationError> {
    if draft.drug_a_id.is_empty() || draft.drug_b_id.is_empty() {
        return Err(ValidationError::MissingInteractionDrug);
    }
    if draft.drug_a_id == draft.drug_b_id {
        return Err(ValidationError::SelfInteraction);
    }
    if draft.severity.is_empty() {
        return Err(ValidationError::MissingSeverity);
    }
    if draft.description.trim().len() < MIN_INTERACTION_DESCRIPTION_LEN {
        return Err(ValidationError::DescriptionTooShort);
    }
    Ok(())
}

/// Validate a category before create/update
pub fn validate_category(draft: &CategoryDraft) -> Result<(), ValidationError> {
    if draft.name.trim().is_empty() {
        return Err(ValidationError::MissingCategoryName);
    }
    Ok(())
}

/// Validate a severity level before create/update
pub fn validate_severity_level(draft: &SeverityLevelDraft) -> Result<(), ValidationError> {
    if draft.name.trim().is_empty() {
        return Err(ValidationError::MissingSeverityName);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interaction_draft() -> InteractionDraft {
        InteractionDraft {
            drug_a_id: "DRG-A".to_string(),
            drug_b_id: "DRG-B".to_string(),
            severity: "SEV001".to_string(),
            description: "a sufficiently long description".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_drug_name_length() {
        let mut draft = DrugDraft {
            name: "Aspirin".to_string(),
            ..Default::default()
        };
        assert!(validate_drug(&draft).is_ok());

        draft.name = " a ".to_string(); // trims to one char
        assert_eq!(validate_drug(&draft), Err(ValidationError::DrugNameTooShort));

        draft.name = String::new();
        assert_eq!(validate_drug(&draft), Err(ValidationError::DrugNameTooShort));
    }

    #[test]
    fn test_valid_interaction_passes() {
        assert!(validate_interaction(&interaction_draft()).is_ok());
    }

    #[test]
    fn test_self_interaction_rejected() {
        let mut draft = interaction_draft();
        draft.drug_b_id = draft.drug_a_id.clone();
        assert_eq!(
            validate_interaction(&draft),
            Err(ValidationError::SelfInteraction)
        );
    }

    #[test]
    fn test_interaction_requires_both_drugs() {
        let mut draft = interaction_draft();
        draft.drug_b_id = String::new();
        assert_eq!(
            validate_interaction(&draft),
            Err(ValidationError::MissingInteractionDrug)
        );
    }

    #[test]
    fn test_interaction_requires_severity_and_description() {
        let mut draft = interaction_draft();
        draft.severity = String::new();
        assert_eq!(
            validate_interaction(&draft),
            Err(ValidationError::MissingSeverity)
        );

        let mut draft = interaction_draft();
        draft.description = "too short".to_string();
        assert_eq!(
            validate_interaction(&draft),
            Err(ValidationError::DescriptionTooShort)
        );
    }

    #[test]
    fn test_category_and_severity_names_required() {
        assert_eq!(
            validate_category(&CategoryDraft::default()),
            Err(ValidationError::MissingCategoryName)
        );
        assert_eq!(
            validate_severity_level(&SeverityLevelDraft::default()),
            Err(ValidationError::MissingSeverityName)
        );
    }

    #[test]
    fn test_user_facing_wording() {
        insta::assert_snapshot!(
            ValidationError::SelfInteraction.to_string(),
            @"Cannot create interaction between the same drug"
        );
        insta::assert_snapshot!(
            ValidationError::DescriptionTooShort.to_string(),
            @"Description is required and must be at least 10 characters"
        );
    }
}
