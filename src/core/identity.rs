//! Identifier generation using type-prefixed ULIDs
//!
//! New records get ids like `DRG-01J8ZQ4N5M6P7R8S9T0UVWXYZA`: a collection
//! prefix plus a ULID (timestamp + random component). Stored ids stay plain
//! strings, so imported documents that use a different id scheme (`CAT001`,
//! `SEV002`, ...) round-trip untouched. Uniqueness is probabilistic, which is
//! acceptable at catalog scale.

use std::fmt;
use ulid::Ulid;

/// Collection prefixes for generated ids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdPrefix {
    /// Drug
    Drug,
    /// Interaction between two drugs
    Interaction,
    /// Drug category
    Category,
    /// Interaction severity level
    Severity,
}

impl IdPrefix {
    /// Get the string representation of the prefix
    pub fn as_str(&self) -> &'static str {
        match self {
            IdPrefix::Drug => "DRG",
            IdPrefix::Interaction => "INT",
            IdPrefix::Category => "CAT",
            IdPrefix::Severity => "SEV",
        }
    }

    /// Generate a fresh prefixed id
    pub fn generate(&self) -> String {
        format!("{}-{}", self.as_str(), Ulid::new())
    }
}

impl fmt::Display for IdPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_id_carries_prefix() {
        let id = IdPrefix::Drug.generate();
        assert!(id.starts_with("DRG-"));
        assert_eq!(id.len(), 30); // DRG- (4) + ULID (26)
    }

    #[test]
    fn test_generated_ids_differ() {
        let a = IdPrefix::Interaction.generate();
        let b = IdPrefix::Interaction.generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_all_prefixes_distinct() {
        let prefixes = [
            IdPrefix::Drug,
            IdPrefix::Interaction,
            IdPrefix::Category,
            IdPrefix::Severity,
        ];
        for (i, a) in prefixes.iter().enumerate() {
            for b in &prefixes[i + 1..] {
                assert_ne!(a.as_str(), b.as_str());
            }
        }
    }
}
