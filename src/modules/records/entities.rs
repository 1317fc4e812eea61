// src/modules/records/entities.rs
use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// A record belonging to one of the table-API resource kinds.
///
/// `id` is `None` until the backend has persisted the record once; the server
/// assigns it on create and it never changes afterwards.
pub trait Resource:
    Clone + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Table name under `tables/` on the backend.
    const TABLE: &'static str;

    fn id(&self) -> Option<&str>;
}

/// Exposes the single field exact-match filtering runs against
/// (category for skills/projects, status for messages).
pub trait Faceted {
    fn facet(&self) -> &str;
}

//
// ──────────────────────────────────────────────────────────
// Profile (singleton — always fetched with limit=1)
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub resume_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub twitter_url: Option<String>,
    #[serde(default)]
    pub instagram_url: Option<String>,
}

impl Resource for Profile {
    const TABLE: &'static str = "profile";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

//
// ──────────────────────────────────────────────────────────
// Skill
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Skill {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub category: String,
    /// Proficiency, 0..=100. Drives the progress-bar width.
    #[serde(default)]
    pub level: u8,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub order: i32,
}

impl Resource for Skill {
    const TABLE: &'static str = "skills";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl Faceted for Skill {
    fn facet(&self) -> &str {
        &self.category
    }
}

//
// ──────────────────────────────────────────────────────────
// Project
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Project {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub category: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub demo_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub order: i32,
}

impl Resource for Project {
    const TABLE: &'static str = "projects";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl Faceted for Project {
    fn facet(&self) -> &str {
        &self.category
    }
}

//
// ──────────────────────────────────────────────────────────
// Testimonial
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Testimonial {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub company: Option<String>,
    pub content: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// Star rating, 1..=5.
    #[serde(default = "default_rating")]
    pub rating: u8,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub order: i32,
}

fn default_rating() -> u8 {
    5
}

impl Resource for Testimonial {
    const TABLE: &'static str = "testimonials";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

//
// ──────────────────────────────────────────────────────────
// Contact message
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    New,
    Read,
    Archived,
}

impl Default for MessageStatus {
    fn default() -> Self {
        MessageStatus::New
    }
}

impl MessageStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageStatus::New => "new",
            MessageStatus::Read => "read",
            MessageStatus::Archived => "archived",
        }
    }
}

/// `read` and `status` are kept in lockstep by the admin console: mark-as-read
/// flips both in one PATCH. They may diverge only transiently on the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Message {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub subject: String,
    pub message: String,
    #[serde(default)]
    pub read: bool,
    #[serde(default)]
    pub status: MessageStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Resource for Message {
    const TABLE: &'static str = "contact_messages";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl Faceted for Message {
    fn facet(&self) -> &str {
        self.status.as_str()
    }
}
