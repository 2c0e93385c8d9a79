use serde::Serialize;
use utoipa::ToSchema;

pub const PREVIEW_WIDTH: u32 = 50;
pub const PREVIEW_HEIGHT: u32 = 50;

/// Read-only computed preview of an optional image attribute.
/// Serializes either as a plain indicator string or as {url, width, height}.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum ImagePreview {
    Missing(String),
    Image { url: String, width: u32, height: u32 },
}

impl ImagePreview {
    pub fn from_stored(url: Option<&str>, missing_label: &str) -> Self {
        match url {
            Some(u) if !u.is_empty() => ImagePreview::Image {
                url: u.to_string(),
                width: PREVIEW_WIDTH,
                height: PREVIEW_HEIGHT,
            },
            _ => ImagePreview::Missing(missing_label.to_string()),
        }
    }
}

/// Capability for records carrying optional image attributes, implemented
/// per entity rather than through shared inheritance.
pub trait Previewable {
    fn image_previews(&self) -> Vec<(&'static str, ImagePreview)>;
}

impl Previewable for crate::models::SchoolModel {
    fn image_previews(&self) -> Vec<(&'static str, ImagePreview)> {
        vec![
            (
                "logo_preview",
                ImagePreview::from_stored(self.logo.as_deref(), "No logo"),
            ),
            (
                "cover_preview",
                ImagePreview::from_stored(self.cover_image.as_deref(), "No cover"),
            ),
        ]
    }
}

impl Previewable for crate::models::ScholarshipModel {
    fn image_previews(&self) -> Vec<(&'static str, ImagePreview)> {
        vec![(
            "thumbnail_preview",
            ImagePreview::from_stored(self.thumbnail.as_deref(), "No thumbnail"),
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_image_yields_indicator_string() {
        let preview = ImagePreview::from_stored(None, "No cover");
        assert_eq!(preview, ImagePreview::Missing("No cover".to_string()));
    }

    #[test]
    fn empty_url_treated_as_missing() {
        let preview = ImagePreview::from_stored(Some(""), "No logo");
        assert_eq!(preview, ImagePreview::Missing("No logo".to_string()));
    }

    #[test]
    fn present_image_yields_fixed_dimensions() {
        let preview =
            ImagePreview::from_stored(Some("/uploads/schools/logos/acme-x.png"), "No logo");
        assert_eq!(
            preview,
            ImagePreview::Image {
                url: "/uploads/schools/logos/acme-x.png".to_string(),
                width: 50,
                height: 50,
            }
        );
    }

    #[test]
    fn missing_preview_serializes_as_plain_string() {
        let json = serde_json::to_string(&ImagePreview::Missing("No thumbnail".into())).unwrap();
        assert_eq!(json, "\"No thumbnail\"");
    }

    #[test]
    fn image_preview_serializes_as_object() {
        let preview = ImagePreview::Image {
            url: "/uploads/x.png".into(),
            width: 50,
            height: 50,
        };
        let json = serde_json::to_value(&preview).unwrap();
        assert_eq!(json["url"], "/uploads/x.png");
        assert_eq!(json["width"], 50);
        assert_eq!(json["height"], 50);
    }
}
