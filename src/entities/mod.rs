//! Entity type definitions
//!
//! The catalog holds four kinds of records:
//!
//! - [`Drug`] - a medication, optionally linked to a category
//! - [`Interaction`] - a clinical relationship between exactly two drugs
//! - [`Category`] - a grouping label for drugs (e.g. "Antibiotics")
//! - [`SeverityLevel`] - a closed reference value classifying interactions
//!
//! Each kind comes with a `*Draft` (create input; the store assigns id and
//! timestamps) and a `*Patch` (typed partial update, applied field by field).

pub mod category;
pub mod drug;
pub mod interaction;
pub mod severity;

pub use category::{Category, CategoryDraft, CategoryPatch};
pub use drug::{Drug, DrugDraft, DrugPatch, DrugStatus};
pub use interaction::{Interaction, InteractionDraft, InteractionPatch};
pub use severity::{SeverityLevel, SeverityLevelDraft, SeverityLevelPatch};
