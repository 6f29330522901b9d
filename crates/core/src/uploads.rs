//! Rules for entity image uploads: the type allow-list, the size ceiling,
//! and generated storage names.

use rand::Rng;

use crate::error::CoreError;

/// File extensions (and matching MIME subtypes) accepted for entity images.
pub const ALLOWED_IMAGE_TYPES: [&str; 5] = ["jpeg", "jpg", "png", "gif", "webp"];

/// Maximum accepted upload size in bytes (5 MiB).
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// Check an upload's name, MIME type, and size against the image rules.
///
/// Both the file extension and the declared content type must appear in the
/// allow-list; either one alone is not enough.
pub fn validate_image_upload(
    file_name: &str,
    content_type: &str,
    size: usize,
) -> Result<(), CoreError> {
    let ext_ok = file_extension(file_name)
        .map(|ext| ALLOWED_IMAGE_TYPES.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false);
    let mime_ok = content_type
        .strip_prefix("image/")
        .map(|subtype| ALLOWED_IMAGE_TYPES.contains(&subtype))
        .unwrap_or(false);

    if !ext_ok || !mime_ok {
        return Err(CoreError::Validation(
            "Only image files are allowed (jpeg, jpg, png, gif, webp)".to_string(),
        ));
    }
    if size > MAX_IMAGE_BYTES {
        return Err(CoreError::Validation(format!(
            "Image exceeds the {} MiB upload limit",
            MAX_IMAGE_BYTES / (1024 * 1024)
        )));
    }
    Ok(())
}

/// The extension of a file name, without the dot.
pub fn file_extension(file_name: &str) -> Option<&str> {
    let (stem, ext) = file_name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        None
    } else {
        Some(ext)
    }
}

/// Build a unique on-disk name for an uploaded file.
///
/// The original stem is slugified (whitespace to dashes, everything outside
/// `[a-z0-9-]` dropped) and suffixed with the current timestamp and a random
/// component so repeated uploads of the same file never collide.
pub fn storage_file_name(original: &str) -> String {
    let (stem, ext) = original
        .rsplit_once('.')
        .unwrap_or((original, ""));

    let slug: String = stem
        .chars()
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect::<String>()
        .to_lowercase();
    let slug = if slug.is_empty() { "image".to_string() } else { slug };

    let millis = chrono::Utc::now().timestamp_millis();
    let nonce: u32 = rand::rng().random_range(0..1_000_000_000);

    if ext.is_empty() {
        format!("{slug}-{millis}-{nonce}")
    } else {
        format!("{slug}-{millis}-{nonce}.{}", ext.to_lowercase())
    }
}

/// Whether an image reference points at a file this system manages.
///
/// Placeholder (`default`) references and external URLs are never deleted
/// when a row is replaced or removed.
pub fn is_managed_reference(image_url: &str) -> bool {
    !image_url.is_empty() && !image_url.contains("default") && !image_url.starts_with("http")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_allowed_types() {
        assert!(validate_image_upload("logo.png", "image/png", 1024).is_ok());
        assert!(validate_image_upload("PHOTO.JPG", "image/jpeg", 1024).is_ok());
        assert!(validate_image_upload("anim.webp", "image/webp", 1024).is_ok());
    }

    #[test]
    fn rejects_disallowed_extension_or_mime() {
        assert!(validate_image_upload("notes.pdf", "application/pdf", 10).is_err());
        // Extension alone is not enough.
        assert!(validate_image_upload("fake.png", "text/html", 10).is_err());
        // MIME alone is not enough.
        assert!(validate_image_upload("image.svg", "image/png", 10).is_err());
        assert!(validate_image_upload("noextension", "image/png", 10).is_err());
    }

    #[test]
    fn rejects_oversized_upload() {
        let result = validate_image_upload("big.png", "image/png", MAX_IMAGE_BYTES + 1);
        assert!(result.is_err());
        // At the ceiling is still fine.
        assert!(validate_image_upload("ok.png", "image/png", MAX_IMAGE_BYTES).is_ok());
    }

    #[test]
    fn storage_name_is_slugified_and_keeps_extension() {
        let name = storage_file_name("Club Fair 2025 (final).PNG");
        assert!(name.starts_with("club-fair-2025-final-"), "got {name}");
        assert!(name.ends_with(".png"), "got {name}");
    }

    #[test]
    fn storage_names_are_unique() {
        let a = storage_file_name("poster.png");
        let b = storage_file_name("poster.png");
        assert_ne!(a, b);
    }

    #[test]
    fn managed_reference_detection() {
        assert!(is_managed_reference("/images/events/fair-123.png"));
        assert!(!is_managed_reference("/images/defaults/event.png"));
        assert!(!is_managed_reference("https://cdn.example.com/logo.png"));
        assert!(!is_managed_reference(""));
    }
}
