use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize};

use super::RecordId;

const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// An image reference: either a hosted URL or an inlined `data:` payload that
/// still needs uploading to blob storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageSource(String);

impl ImageSource {
    pub fn new(src: impl Into<String>) -> Self {
        Self(src.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_inline(&self) -> bool {
        self.0.starts_with("data:")
    }

    /// Decodes an inlined payload into (content type, raw bytes).
    ///
    /// The header (`data:image/png;base64,...`) names the content type; a
    /// missing or unparseable payload yields `None` and the source is passed
    /// through untouched by callers.
    #[must_use]
    pub fn decode_inline(&self) -> Option<(String, Vec<u8>)> {
        if !self.is_inline() {
            return None;
        }
        let (header, body) = self.0.split_once(',')?;
        let content_type = header
            .strip_prefix("data:")
            .map(|h| h.split(';').next().unwrap_or(""))
            .filter(|ct| !ct.is_empty())
            .unwrap_or(FALLBACK_CONTENT_TYPE);
        let bytes = BASE64.decode(body.trim()).ok()?;
        Some((content_type.to_string(), bytes))
    }

    /// Object name segment of a hosted URL (everything after the last `/`),
    /// used to find the blob backing this image.
    #[must_use]
    pub fn object_name(&self) -> Option<&str> {
        if self.is_inline() {
            return None;
        }
        self.0.rsplit('/').next().filter(|name| !name.is_empty())
    }

    /// File extension for a freshly uploaded blob of the given content type.
    #[must_use]
    pub fn extension_for(content_type: &str) -> &'static str {
        match content_type {
            "image/png" => "png",
            "image/gif" => "gif",
            "image/webp" => "webp",
            "image/svg+xml" => "svg",
            _ => "jpg",
        }
    }
}

impl From<&str> for ImageSource {
    fn from(src: &str) -> Self {
        Self::new(src)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: RecordId,
    pub image: ImageSource,
    pub category: String,
    pub date: String,
    pub author: String,
    pub comments: u32,
    pub title: String,
    pub excerpt: String,
    pub content: String,
}

/// Fields an author supplies when publishing a post; the id, date, author,
/// comment counter, and excerpt are derived.
#[derive(Debug, Clone)]
pub struct PostDraft {
    pub image: ImageSource,
    pub category: String,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instructor {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub id: RecordId,
    pub image: ImageSource,
    pub category: String,
    /// Display price, e.g. "$49.99" or "Free". Free text, not a currency.
    pub price: String,
    pub title: String,
    pub description: String,
    pub explanation: String,
    pub uniqueness: Vec<String>,
    pub lessons: u32,
    pub students: u32,
    pub rating: f32,
    pub instructor: Instructor,
}

#[derive(Debug, Clone)]
pub struct CourseDraft {
    pub image: ImageSource,
    pub category: String,
    pub price: String,
    pub title: String,
    pub description: String,
    pub explanation: String,
    pub uniqueness: Vec<String>,
    pub lessons: u32,
    pub students: u32,
    pub rating: f32,
    pub instructor: Instructor,
}

impl CourseDraft {
    /// Synthesizes the optimistic record shown until the canonical refetch.
    #[must_use]
    pub fn into_provisional(self) -> Course {
        Course {
            id: RecordId::provisional(),
            image: self.image,
            category: self.category,
            price: self.price,
            title: self.title,
            description: self.description,
            explanation: self.explanation,
            uniqueness: self.uniqueness,
            lessons: self.lessons,
            students: self.students,
            rating: self.rating,
            instructor: self.instructor,
        }
    }
}

/// Identity is the `src` string; there is no separate id column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub src: ImageSource,
    /// One of a small fixed set: campus / events / academics.
    pub category: String,
    pub caption: String,
}

/// Singleton branding record, upserted under a fixed key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub logo: ImageSource,
    #[serde(rename = "schoolName")]
    pub school_name: String,
    #[serde(rename = "schoolNameSuffix")]
    pub school_name_suffix: String,
}

/// An authenticated session, either backend-issued or locally synthesized by
/// the bypass login (recognizable by its sentinel token).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub user_id: String,
    pub email: String,
}
