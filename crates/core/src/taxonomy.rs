//! Category taxonomy: a forest of categories linked by parent pointers.
//!
//! The schema models the tree as a flat nullable `parent_id` column.
//! This module makes the traversal policy explicit: product filtering
//! expands a category to itself plus its DIRECT children, and no
//! further. Grandchildren are never included. Deeper nesting is not
//! supported by this design, so the expansion is a documented policy
//! function rather than a recursive walk.

use crate::types::DbId;

/// A category's position in the forest: its id and optional parent.
///
/// This is the minimal projection the taxonomy logic needs; the full
/// category row lives in the db crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryLink {
    pub id: DbId,
    pub parent_id: Option<DbId>,
}

/// Expand a category to the id set used for product filtering.
///
/// Returns the root id followed by the ids of every link whose
/// `parent_id` is the root. One level only: links parented to a child
/// of the root are ignored.
pub fn one_level_ids(root: DbId, links: &[CategoryLink]) -> Vec<DbId> {
    let mut ids = Vec::with_capacity(links.len() + 1);
    ids.push(root);
    ids.extend(
        links
            .iter()
            .filter(|link| link.parent_id == Some(root))
            .map(|link| link.id),
    );
    ids
}
