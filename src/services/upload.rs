use crate::error::{AppError, AppResult};
use std::path::Path;
use tokio::fs;
use uuid::Uuid;

#[derive(Clone)]
pub struct UploadConfig {
    pub media_root: String,
}

const MAX_FILE_SIZE: usize = 5 * 1024 * 1024; // 5 MB
const ALLOWED_CONTENT_TYPES: &[&str] = &["image/jpeg", "image/png", "image/gif", "image/webp"];

/// Image asset categories, each with a fixed storage directory and a
/// fallback token used when the owning entity's name sanitizes to nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetCategory {
    SchoolLogo,
    SchoolCover,
    ScholarshipThumbnail,
}

impl AssetCategory {
    pub fn directory(&self) -> &'static str {
        match self {
            AssetCategory::SchoolLogo => "uploads/schools/logos",
            AssetCategory::SchoolCover => "uploads/schools/cover",
            AssetCategory::ScholarshipThumbnail => "uploads/scholarship/thumbnails",
        }
    }

    pub fn fallback_name(&self) -> &'static str {
        match self {
            AssetCategory::SchoolLogo | AssetCategory::SchoolCover => "unnamed-school",
            AssetCategory::ScholarshipThumbnail => "untitled",
        }
    }
}

/// Strip the entity name down to `[A-Za-z0-9_-]`, substituting the
/// category fallback when nothing survives.
fn sanitize_name(name: &str, category: AssetCategory) -> String {
    let sanitized: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .collect();
    if sanitized.is_empty() {
        category.fallback_name().to_string()
    } else {
        sanitized
    }
}

/// Extension is taken after the last period of the original filename,
/// case preserved. A filename without a period yields no extension.
fn file_extension(original_filename: &str) -> Option<&str> {
    match original_filename.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => Some(ext),
        _ => None,
    }
}

/// Derive the storage-relative path for an uploaded asset:
/// `<category-dir>/<sanitized-name>-<uuid>.<ext>`. The random suffix makes
/// the path collision-resistant without a directory-listing check.
pub fn resolve_upload_path(
    entity_name: &str,
    original_filename: &str,
    category: AssetCategory,
) -> String {
    let name = sanitize_name(entity_name, category);
    let suffix = Uuid::new_v4();
    match file_extension(original_filename) {
        Some(ext) => format!("{}/{}-{}.{}", category.directory(), name, suffix, ext),
        None => format!("{}/{}-{}", category.directory(), name, suffix),
    }
}

/// Validate file magic bytes match the declared content type.
fn validate_magic_bytes(data: &[u8], content_type: &str) -> bool {
    match content_type {
        "image/jpeg" => data.len() >= 3 && data[..3] == [0xFF, 0xD8, 0xFF],
        "image/png" => data.len() >= 4 && data[..4] == [0x89, 0x50, 0x4E, 0x47],
        "image/gif" => data.len() >= 4 && data[..4] == [0x47, 0x49, 0x46, 0x38],
        "image/webp" => {
            data.len() >= 12
                && data[..4] == [0x52, 0x49, 0x46, 0x46]
                && data[8..12] == [0x57, 0x45, 0x42, 0x50]
        }
        _ => false,
    }
}

pub struct UploadService;

impl UploadService {
    /// Save an uploaded asset to disk under the media root.
    /// Returns the public URL path (e.g., `/uploads/schools/logos/acme-<uuid>.png`).
    pub async fn save_file(
        config: &UploadConfig,
        data: &[u8],
        content_type: &str,
        entity_name: &str,
        original_filename: &str,
        category: AssetCategory,
    ) -> AppResult<String> {
        if data.len() > MAX_FILE_SIZE {
            return Err(AppError::PayloadTooLarge);
        }

        if !ALLOWED_CONTENT_TYPES.contains(&content_type) {
            return Err(AppError::Validation(format!(
                "Unsupported file type: {}. Allowed: jpeg, png, gif, webp",
                content_type
            )));
        }

        if !validate_magic_bytes(data, content_type) {
            return Err(AppError::Validation(
                "File content does not match declared content type".to_string(),
            ));
        }

        let relative = resolve_upload_path(entity_name, original_filename, category);
        let file_path = Path::new(&config.media_root).join(&relative);

        if let Some(dir) = file_path.parent() {
            fs::create_dir_all(dir).await.map_err(|e| {
                AppError::Validation(format!("Failed to create upload directory: {}", e))
            })?;
        }

        fs::write(&file_path, data)
            .await
            .map_err(|e| AppError::Validation(format!("Failed to write file: {}", e)))?;

        Ok(format!("/{}", relative))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logo_path_uses_schools_logos_directory() {
        let path = resolve_upload_path("Acme University", "photo.png", AssetCategory::SchoolLogo);
        assert!(path.starts_with("uploads/schools/logos/AcmeUniversity-"));
        assert!(path.ends_with(".png"));
    }

    #[test]
    fn cover_path_uses_cover_directory() {
        let path = resolve_upload_path("Acme", "cover.jpg", AssetCategory::SchoolCover);
        assert!(path.starts_with("uploads/schools/cover/Acme-"));
    }

    #[test]
    fn thumbnail_path_uses_scholarship_directory() {
        let path =
            resolve_upload_path("Merit Grant", "t.webp", AssetCategory::ScholarshipThumbnail);
        assert!(path.starts_with("uploads/scholarship/thumbnails/MeritGrant-"));
    }

    #[test]
    fn empty_name_falls_back_per_category() {
        let logo = resolve_upload_path("", "photo.PNG", AssetCategory::SchoolLogo);
        assert!(logo.starts_with("uploads/schools/logos/unnamed-school-"));
        // Extension case preserved as given.
        assert!(logo.ends_with(".PNG"));

        let thumb = resolve_upload_path("!!!", "x.jpg", AssetCategory::ScholarshipThumbnail);
        assert!(thumb.starts_with("uploads/scholarship/thumbnails/untitled-"));
    }

    #[test]
    fn non_alphanumeric_name_falls_back() {
        let path = resolve_upload_path("日本語", "a.png", AssetCategory::SchoolCover);
        assert!(path.starts_with("uploads/schools/cover/unnamed-school-"));
    }

    #[test]
    fn underscores_and_hyphens_survive_sanitization() {
        let path = resolve_upload_path("my_school-01", "a.png", AssetCategory::SchoolLogo);
        assert!(path.starts_with("uploads/schools/logos/my_school-01-"));
    }

    #[test]
    fn same_name_different_calls_produce_distinct_paths() {
        let a = resolve_upload_path("Acme", "one.png", AssetCategory::SchoolLogo);
        let b = resolve_upload_path("Acme", "two.png", AssetCategory::SchoolLogo);
        assert_ne!(a, b);
        assert!(a.starts_with("uploads/schools/logos/Acme-"));
        assert!(b.starts_with("uploads/schools/logos/Acme-"));
    }

    #[test]
    fn filename_without_extension_gets_none() {
        let path = resolve_upload_path("Acme", "logofile", AssetCategory::SchoolLogo);
        assert!(!path.contains('.'));
    }

    #[test]
    fn jpeg_magic_bytes_valid() {
        let data = [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];
        assert!(validate_magic_bytes(&data, "image/jpeg"));
    }

    #[test]
    fn png_magic_bytes_valid() {
        let data = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A];
        assert!(validate_magic_bytes(&data, "image/png"));
    }

    #[test]
    fn webp_magic_bytes_valid() {
        let data = [
            0x52, 0x49, 0x46, 0x46, // RIFF
            0x00, 0x00, 0x00, 0x00, // size
            0x57, 0x45, 0x42, 0x50, // WEBP
        ];
        assert!(validate_magic_bytes(&data, "image/webp"));
    }

    #[test]
    fn wrong_magic_bytes_rejected() {
        let png_data = [0x89, 0x50, 0x4E, 0x47];
        assert!(!validate_magic_bytes(&png_data, "image/jpeg"));
    }

    #[test]
    fn empty_data_rejected() {
        assert!(!validate_magic_bytes(&[], "image/jpeg"));
        assert!(!validate_magic_bytes(&[], "image/png"));
    }

    #[test]
    fn unknown_content_type_rejected() {
        let data = [0xFF, 0xD8, 0xFF];
        assert!(!validate_magic_bytes(&data, "application/pdf"));
    }
}
