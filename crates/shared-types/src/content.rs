use crate::filter::Filterable;
use crate::student::LifeDomain;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Kind of media attached to a content item.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Video,
    Audio,
    Image,
    #[default]
    #[serde(other)]
    Document,
}

impl MediaKind {
    pub fn label(&self) -> &'static str {
        match self {
            MediaKind::Video => "Video",
            MediaKind::Audio => "Audio",
            MediaKind::Image => "Image",
            MediaKind::Document => "Document",
        }
    }
}

/// Optional media attachment. Absent on most items.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MediaLink {
    #[serde(default)]
    pub kind: MediaKind,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

/// A written case study of a student's transition journey.
///
/// `tags` defaults to the empty set when the backend omits it; an untagged
/// case study never matches a non-empty tag selection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaseStudy {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<MediaLink>,
}

impl Filterable for CaseStudy {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.description.as_str(),
            self.content.as_str(),
        ]
    }

    fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }
}

/// A facilitator training module.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LearningModule {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<MediaLink>,
}

impl LearningModule {
    /// "45 min", "1 hr 30 min"; `None` when no duration is recorded.
    pub fn duration_label(&self) -> Option<String> {
        let minutes = self.duration_minutes?;
        let (hours, rest) = (minutes / 60, minutes % 60);
        Some(match (hours, rest) {
            (0, m) => format!("{m} min"),
            (h, 0) => format!("{h} hr"),
            (h, m) => format!("{h} hr {m} min"),
        })
    }
}

impl Filterable for LearningModule {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.description.as_str(),
            self.content.as_str(),
        ]
    }

    fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }
}

/// A reusable transition plan template.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanTemplate {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<LifeDomain>,
}

impl Filterable for PlanTemplate {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.description.as_str(),
            self.content.as_str(),
        ]
    }

    fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }
}
