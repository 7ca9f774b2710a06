//! Image URL resolution for catalog, blog, and event records.

/// Served when a record has neither a resolvable stored file nor a literal
/// image URL of its own.
pub const DEFAULT_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1559827260-dc66d52bef19?w=1200&q=80";

/// Pick the image URL for a record.
///
/// Resolution order: the URL resolved from the stored-file reference, then
/// the record's own literal URL, then [`DEFAULT_IMAGE_URL`]. `stored` is
/// `None` both when the record has no stored-file reference and when the
/// object store could not resolve one, so a missing or expired blob
/// degrades to the literal URL instead of an error.
pub fn resolve_image_url(stored: Option<String>, literal: Option<&str>) -> String {
    if let Some(url) = stored {
        if !url.is_empty() {
            return url;
        }
    }
    match literal {
        Some(url) if !url.trim().is_empty() => url.to_string(),
        _ => DEFAULT_IMAGE_URL.to_string(),
    }
}
