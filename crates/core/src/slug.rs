//! Slug derivation for catalog entities.
//!
//! Slugs are the URL-safe lookup keys used in read paths in place of
//! numeric ids. Derivation is deterministic and lossy: the same display
//! name always yields the same slug, and distinct names may collide.
//! Product slugs carry no uniqueness constraint; category slugs are
//! unique at the schema level only.

/// Derive a slug from a display name.
///
/// Rules: ASCII-lowercase the input, map every run of characters that
/// are not ASCII alphanumerics to a single `-`, and strip leading and
/// trailing separators.
///
/// # Examples
///
/// ```
/// use storefront_core::slug::slugify;
///
/// assert_eq!(slugify("Red Mug"), "red-mug");
/// assert_eq!(slugify("  Déjà  Vu!  "), "d-j-vu");
/// assert_eq!(slugify("USB-C Cable (2m)"), "usb-c-cable-2m");
/// ```
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_separator = false;

    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }

    slug
}
