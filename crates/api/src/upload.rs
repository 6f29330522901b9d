//! Multipart form reading and stored-image management for the admin CRUD
//! workflows.
//!
//! Admin add/edit forms for the image-bearing entities are multipart: text
//! fields plus an optional `image` file. The file is validated against the
//! image allow-list and size ceiling, written under the section directory
//! chosen by the admin sub-route, and its public path is fed back into the
//! entity's image field.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::Path;

use axum::extract::multipart::{Multipart, MultipartError};
use clubsite_core::uploads;

/// Upload body limit: the 5 MiB image ceiling plus form-field headroom.
pub const UPLOAD_BODY_LIMIT: usize = uploads::MAX_IMAGE_BYTES + 256 * 1024;

/// Which admin sub-route an upload belongs to; decides the destination
/// directory and the placeholder used when no file is supplied.
#[derive(Debug, Clone, Copy)]
pub enum ImageSection {
    Events,
    Team,
    Partners,
}

impl ImageSection {
    pub fn dir(self) -> &'static str {
        match self {
            ImageSection::Events => "events",
            ImageSection::Team => "team",
            ImageSection::Partners => "partners",
        }
    }

    /// Placeholder asset reference assigned when no upload is supplied.
    pub fn placeholder(self) -> &'static str {
        match self {
            ImageSection::Events => "/images/defaults/event.png",
            ImageSection::Team => "/images/defaults/team.png",
            ImageSection::Partners => "/images/defaults/partner.png",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    /// The file failed the allow-list or size check; carries the
    /// user-facing message.
    #[error("{0}")]
    Rejected(String),

    #[error("malformed multipart request: {0}")]
    Multipart(#[from] MultipartError),

    #[error("failed to store upload: {0}")]
    Io(#[from] std::io::Error),
}

/// Text fields and the optional stored image read from an admin form.
#[derive(Debug, Default)]
pub struct AdminForm {
    fields: HashMap<String, String>,
    /// Public path of a freshly stored upload, when one was supplied.
    pub image_url: Option<String>,
}

impl AdminForm {
    /// A trimmed, non-empty field value.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
    }

    /// A required field; `Err` carries the inline validation message.
    pub fn require(&self, name: &str) -> Result<&str, String> {
        self.field(name)
            .ok_or_else(|| "Please fill in all required fields".to_string())
    }

    /// The raw submitted values, for re-rendering a form after a
    /// validation failure.
    pub fn values(&self) -> &HashMap<String, String> {
        &self.fields
    }

    #[cfg(test)]
    pub fn from_fields(fields: HashMap<String, String>) -> Self {
        Self {
            fields,
            image_url: None,
        }
    }
}

/// Read an admin multipart form: collect text fields and store the optional
/// `image` file under the section's directory.
pub async fn read_admin_form(
    multipart: &mut Multipart,
    section: ImageSection,
    upload_root: &Path,
) -> Result<AdminForm, UploadError> {
    let mut form = AdminForm::default();

    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };

        if name == "image" {
            let file_name = field.file_name().map(str::to_owned).unwrap_or_default();
            if file_name.is_empty() {
                // File input left empty; drain and move on.
                let _ = field.bytes().await?;
                continue;
            }
            let content_type = field.content_type().map(str::to_owned).unwrap_or_default();
            let data = field.bytes().await?;

            uploads::validate_image_upload(&file_name, &content_type, data.len())
                .map_err(|err| UploadError::Rejected(err.to_string()))?;

            let stored_name = uploads::storage_file_name(&file_name);
            let dir = upload_root.join(section.dir());
            tokio::fs::create_dir_all(&dir).await?;
            tokio::fs::write(dir.join(&stored_name), &data).await?;

            tracing::debug!(file = %stored_name, section = section.dir(), "Stored uploaded image");
            form.image_url = Some(format!("/images/{}/{}", section.dir(), stored_name));
        } else {
            let value = field.text().await?;
            form.fields.insert(name, value);
        }
    }

    Ok(form)
}

/// Remove a previously referenced image file after a successful edit or
/// delete. Placeholder and external references are skipped, and a failure
/// here never fails the surrounding request.
pub async fn delete_stored_image(upload_root: &Path, image_url: Option<&str>) {
    let Some(url) = image_url else { return };
    if !uploads::is_managed_reference(url) {
        return;
    }

    // Managed references always look like /images/<section>/<file>.
    let relative = url.trim_start_matches("/images/");
    if relative.contains("..") || relative == url {
        return;
    }

    let path = upload_root.join(relative);
    match tokio::fs::remove_file(&path).await {
        Ok(()) => tracing::debug!(path = %path.display(), "Deleted stale image"),
        Err(err) if err.kind() == ErrorKind::NotFound => {}
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "Failed to delete stale image");
        }
    }
}

/// Create the section and defaults directories under the upload root so the
/// first upload and the static file service have somewhere to point.
pub async fn ensure_upload_dirs(upload_root: &Path) -> std::io::Result<()> {
    for dir in ["events", "team", "partners", "defaults"] {
        tokio::fs::create_dir_all(upload_root.join(dir)).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn delete_skips_placeholder_and_external_references() {
        let tmp = tempfile::tempdir().unwrap();
        // No files exist; the point is that these return without touching
        // the filesystem or panicking.
        delete_stored_image(tmp.path(), Some("/images/defaults/event.png")).await;
        delete_stored_image(tmp.path(), Some("https://cdn.example.com/x.png")).await;
        delete_stored_image(tmp.path(), None).await;
    }

    #[tokio::test]
    async fn delete_removes_a_managed_file() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("events");
        tokio::fs::create_dir_all(&dir).await.unwrap();
        let file = dir.join("poster-1-2.png");
        tokio::fs::write(&file, b"img").await.unwrap();

        delete_stored_image(tmp.path(), Some("/images/events/poster-1-2.png")).await;
        assert!(!file.exists());
    }

    #[tokio::test]
    async fn delete_of_missing_file_is_silent() {
        let tmp = tempfile::tempdir().unwrap();
        delete_stored_image(tmp.path(), Some("/images/events/never-existed.png")).await;
    }

    #[test]
    fn required_fields_are_trimmed_and_checked() {
        let mut fields = HashMap::new();
        fields.insert("title".to_string(), "  Hack Night  ".to_string());
        fields.insert("location".to_string(), "   ".to_string());
        let form = AdminForm::from_fields(fields);

        assert_eq!(form.require("title").unwrap(), "Hack Night");
        assert!(form.require("location").is_err());
        assert!(form.require("missing").is_err());
    }
}
