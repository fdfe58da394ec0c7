//! Record models for every managed collection.
//!
//! All collections are process-lifetime only; none of these types ever hit
//! disk. Wire field names are camelCase to match the site's data shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An image reference is either a remote/site-relative URL or an inline
/// base64 payload produced by a local file pick. Rendering code treats the
/// two uniformly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ImageRef {
    Url { url: String },
    Inline { mime: String, data: String },
}

impl ImageRef {
    pub fn url(url: impl Into<String>) -> Self {
        ImageRef::Url { url: url.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GalleryKind {
    Photo,
    Video,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GalleryCategory {
    Events,
    Photos,
    Activities,
    Achievements,
}

impl GalleryCategory {
    pub fn label(self) -> &'static str {
        match self {
            GalleryCategory::Events => "Events",
            GalleryCategory::Photos => "Photos",
            GalleryCategory::Activities => "Activities",
            GalleryCategory::Achievements => "Achievements",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AchievementCategory {
    Academic,
    Sports,
    Cultural,
    Leadership,
    #[serde(rename = "Community Service")]
    CommunityService,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    pub id: String,
    pub name: String,
    pub subject: String,
    pub qualification: String,
    pub experience: String,
    pub specialization: String,
    pub achievements: Vec<String>,
    pub email: String,
    pub phone: String,
    pub image: ImageRef,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: GalleryKind,
    pub category: GalleryCategory,
    pub title: String,
    pub description: String,
    pub image: ImageRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topper {
    pub name: String,
    pub percentage: String,
    pub stream: String,
    pub rank: u32,
    pub image: ImageRef,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcademicYearResult {
    pub id: String,
    pub year: String,
    pub pass_rate: String,
    pub toppers: Vec<Topper>,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: String,
    pub category: AchievementCategory,
    pub title: String,
    pub year: String,
    pub position: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_class: Option<String>,
    pub image: ImageRef,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectMark {
    pub name: String,
    pub marks: u32,
    pub max_marks: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentResult {
    pub id: String,
    pub student_name: String,
    pub roll_number: String,
    pub class: String,
    pub section: String,
    pub stream: String,
    pub year: String,
    pub exam_type: String,
    pub father_name: String,
    pub mother_name: String,
    pub date_of_birth: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub subjects: Vec<SubjectMark>,
    /// Derived at commit time, e.g. "425/500". Manual entry is overwritten.
    pub total_marks: String,
    /// Derived at commit time, e.g. "85.00%". Manual entry is overwritten.
    pub percentage: String,
    pub grade: String,
    pub rank: String,
    pub attendance: String,
    pub extracurricular: Vec<String>,
    pub remarks: String,
    pub image: ImageRef,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub received_at: DateTime<Utc>,
}

/// Records with a store-assigned identifier.
pub trait HasId {
    fn id(&self) -> &str;
    fn set_id(&mut self, id: String);
}

macro_rules! impl_has_id {
    ($($ty:ty),+) => {
        $(impl HasId for $ty {
            fn id(&self) -> &str {
                &self.id
            }
            fn set_id(&mut self, id: String) {
                self.id = id;
            }
        })+
    };
}

impl_has_id!(Teacher, GalleryItem, AcademicYearResult, Achievement, StudentResult);

/// Public detail routes address a student by the lowercased, dash-joined
/// form of their name ("Arjun Sharma" -> "arjun-sharma").
pub fn slugify(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_collapses_whitespace_runs() {
        assert_eq!(slugify("Arjun Sharma"), "arjun-sharma");
        assert_eq!(slugify("  Priya   Patel "), "priya-patel");
        assert_eq!(slugify("RAHUL\tKumar"), "rahul-kumar");
    }

    #[test]
    fn image_ref_is_a_tagged_union_on_the_wire() {
        let url = ImageRef::url("/placeholder.svg");
        assert_eq!(
            serde_json::to_value(&url).expect("serialize"),
            serde_json::json!({ "kind": "url", "url": "/placeholder.svg" })
        );

        let inline = ImageRef::Inline {
            mime: "image/png".into(),
            data: "aGVsbG8=".into(),
        };
        let value = serde_json::to_value(&inline).expect("serialize");
        assert_eq!(value["kind"], "inline");
        let back: ImageRef = serde_json::from_value(value).expect("deserialize");
        assert_eq!(back, inline);
    }

    #[test]
    fn category_names_match_the_site_labels() {
        assert_eq!(
            serde_json::to_value(AchievementCategory::CommunityService).expect("serialize"),
            serde_json::json!("Community Service")
        );
        assert_eq!(
            serde_json::to_value(GalleryCategory::Events).expect("serialize"),
            serde_json::json!("Events")
        );
        assert_eq!(
            serde_json::to_value(GalleryKind::Video).expect("serialize"),
            serde_json::json!("video")
        );
    }
}
