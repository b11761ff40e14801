//! rxcat: local drug interaction catalog
//!
//! A single-user catalog of drugs, categories, severity levels, and pairwise
//! drug interactions, kept in a single JSON document and queried from the
//! command line.

pub mod cli;
pub mod core;
pub mod entities;
