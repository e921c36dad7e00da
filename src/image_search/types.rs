//! Data structures for image search results

use serde::{Deserialize, Serialize};

use crate::utils::UNKNOWN_SCOPE;

/// One image as extracted from a result page, before scope tags are attached
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExtractedImage {
    pub image_url: String,
    pub source_url: Option<String>,
    pub title: Option<String>,
    pub source_title: Option<String>,
    pub width: Option<u64>,
    pub height: Option<u64>,
}

/// Query-scope tags copied onto every record of a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeTags {
    pub country: String,
    pub theme: String,
    pub query: String,
}

impl ScopeTags {
    /// Build scope tags, defaulting missing country/theme to `"unknown"`
    #[must_use]
    pub fn new(query: impl Into<String>, country: Option<String>, theme: Option<String>) -> Self {
        Self {
            country: country.unwrap_or_else(|| UNKNOWN_SCOPE.to_string()),
            theme: theme.unwrap_or_else(|| UNKNOWN_SCOPE.to_string()),
            query: query.into(),
        }
    }
}

/// A candidate image result with its scope tags
///
/// `image_url` is the dedup key for a run. Optional fields are `None` when the
/// page did not carry the attribute at this record's position; they are never
/// defaulted to empty strings or zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    pub image_url: String,
    pub source_url: Option<String>,
    pub title: Option<String>,
    pub source_title: Option<String>,
    pub width: Option<u64>,
    pub height: Option<u64>,
    pub country: String,
    pub theme: String,
    pub query: String,
}

impl ImageRecord {
    #[must_use]
    pub fn from_extracted(extracted: ExtractedImage, scope: &ScopeTags) -> Self {
        Self {
            image_url: extracted.image_url,
            source_url: extracted.source_url,
            title: extracted.title,
            source_title: extracted.source_title,
            width: extracted.width,
            height: extracted.height,
            country: scope.country.clone(),
            theme: scope.theme.clone(),
            query: scope.query.clone(),
        }
    }
}

/// Metadata side-car contents: the record plus where its image was saved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageMetadata {
    #[serde(flatten)]
    pub record: ImageRecord,
    pub local_path: String,
}

/// Result-style filter selected by a shorthand token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterShorthand {
    LineDrawing,
    Photo,
    Clipart,
    AnimatedGif,
    Transparent,
}

impl FilterShorthand {
    /// Map a shorthand token onto a filter
    ///
    /// Unrecognized and empty tokens mean "no filter" rather than an error.
    #[must_use]
    pub fn from_shorthand(token: &str) -> Option<Self> {
        match token {
            "line" | "linedrawing" => Some(Self::LineDrawing),
            "photo" => Some(Self::Photo),
            "clipart" => Some(Self::Clipart),
            "gif" | "animatedgif" => Some(Self::AnimatedGif),
            "transparent" => Some(Self::Transparent),
            _ => None,
        }
    }

    /// Value of the `qft` query parameter for this filter
    #[must_use]
    pub const fn query_token(self) -> &'static str {
        match self {
            Self::LineDrawing => "+filterui:photo-linedrawing",
            Self::Photo => "+filterui:photo-photo",
            Self::Clipart => "+filterui:photo-clipart",
            Self::AnimatedGif => "+filterui:photo-animatedgif",
            Self::Transparent => "+filterui:photo-transparent",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shorthand_aliases_map_to_same_filter() {
        assert_eq!(
            FilterShorthand::from_shorthand("line"),
            FilterShorthand::from_shorthand("linedrawing")
        );
        assert_eq!(
            FilterShorthand::from_shorthand("gif"),
            Some(FilterShorthand::AnimatedGif)
        );
        assert_eq!(
            FilterShorthand::from_shorthand("animatedgif").map(FilterShorthand::query_token),
            Some("+filterui:photo-animatedgif")
        );
    }

    #[test]
    fn unknown_shorthand_is_no_filter() {
        assert_eq!(FilterShorthand::from_shorthand(""), None);
        assert_eq!(FilterShorthand::from_shorthand("sepia"), None);
        assert_eq!(FilterShorthand::from_shorthand("Photo"), None);
    }

    #[test]
    fn scope_defaults_to_unknown() {
        let scope = ScopeTags::new("cats", None, Some("pets".to_string()));
        assert_eq!(scope.country, "unknown");
        assert_eq!(scope.theme, "pets");
        assert_eq!(scope.query, "cats");
    }

    #[test]
    fn metadata_serializes_flat_with_nulls() {
        let metadata = ImageMetadata {
            record: ImageRecord {
                image_url: "https://x.test/a.png".to_string(),
                source_url: None,
                title: Some("A".to_string()),
                source_title: None,
                width: Some(10),
                height: None,
                country: "fr".to_string(),
                theme: "food".to_string(),
                query: "bread".to_string(),
            },
            local_path: "/tmp/img_a.png".to_string(),
        };

        let value = serde_json::to_value(&metadata).unwrap();
        assert_eq!(value["image_url"], "https://x.test/a.png");
        assert!(value["source_url"].is_null());
        assert_eq!(value["width"], 10);
        assert!(value["height"].is_null());
        assert_eq!(value["local_path"], "/tmp/img_a.png");
    }
}
