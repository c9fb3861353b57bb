//! Slug helpers.
//!
//! A slug is the URL-safe identifier used for projects and users:
//! lowercase ASCII letters and digits separated by single hyphens.

/// Turn free text into a slug.
///
/// Runs of characters that are not ASCII alphanumerics collapse into a
/// single hyphen; leading and trailing hyphens are dropped.
///
/// ```rust
/// use standup_core::slugify;
///
/// assert_eq!(slugify("Test Project"), "test-project");
/// assert_eq!(slugify("  Ops / On-Call!  "), "ops-on-call");
/// ```
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;

    for ch in text.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

/// Check whether `slug` is already in canonical slug form.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && !slug.contains("--")
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}
