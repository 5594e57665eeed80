//! Slug derivation and validation.
//!
//! A slug is the URL path segment that identifies a post: lowercase ASCII
//! letters, digits and single hyphens, with no leading or trailing hyphen.
//! Non-ASCII letters are transliterated (`"Café"` becomes `"cafe"`).

/// Derive a slug from a display title.
///
/// Runs of whitespace and punctuation collapse to a single hyphen and the
/// result is trimmed of hyphens. A blank or punctuation-only title yields an
/// empty string, which the store refuses to persist.
pub fn derive(title: &str) -> String {
    ::slug::slugify(title)
}

/// Check that `slug` is non-empty lowercase kebab-case.
pub fn is_valid(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && !slug.contains("--")
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}
