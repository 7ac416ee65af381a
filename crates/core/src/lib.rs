//! Domain logic for the storefront catalog: shared types, errors, slug
//! derivation, and the category taxonomy policy.
//!
//! This crate is pure (no I/O) so the filtering and naming rules can be
//! unit-tested without a database.

pub mod error;
pub mod slug;
pub mod taxonomy;
pub mod types;
