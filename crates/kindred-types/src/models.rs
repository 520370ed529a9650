use std::num::NonZeroU64;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// -- Stored records --

/// Stored admin account. Serializes the hash as-is; callers that answer
/// login or registration only expose `AdminSummary`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    pub id: u64,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Volunteer {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub availability: Option<String>,
    pub skills: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Donation {
    pub id: u64,
    pub name: String,
    pub email: String,
    /// Whole currency units.
    pub amount: NonZeroU64,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Partner {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub website: String,
    pub logo: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub category: String,
    pub content: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HealthContent {
    pub id: u64,
    pub title: String,
    pub summary: Option<String>,
    pub content: String,
    pub category: Option<String>,
    pub status: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// -- Insert payloads --
//
// Unknown JSON keys are ignored. Required keys that are missing, or values of
// the wrong JSON type, fail deserialization; blank strings are caught by
// `Validate`.

#[derive(Debug, Clone)]
pub struct NewAdmin {
    pub username: String,
    pub password_hash: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVolunteer {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub availability: Option<String>,
    #[serde(default)]
    pub skills: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDonation {
    pub name: String,
    pub email: String,
    pub amount: NonZeroU64,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPartner {
    pub name: String,
    pub description: String,
    pub website: String,
    pub logo: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewResource {
    pub title: String,
    pub description: String,
    pub category: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewHealthContent {
    pub title: String,
    #[serde(default)]
    pub summary: Option<String>,
    pub content: String,
    #[serde(default)]
    pub category: Option<String>,
    pub status: String,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

/// Partial update for `HealthContent`. Absent keys leave the stored value
/// untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthContentPatch {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl HealthContentPatch {
    /// Merge the provided fields onto `content`. Does not touch timestamps.
    pub fn apply_to(self, content: &mut HealthContent) {
        if let Some(title) = self.title {
            content.title = title;
        }
        if let Some(summary) = self.summary {
            content.summary = Some(summary);
        }
        if let Some(body) = self.content {
            content.content = body;
        }
        if let Some(category) = self.category {
            content.category = Some(category);
        }
        if let Some(status) = self.status {
            content.status = status;
        }
        if let Some(tags) = self.tags {
            content.tags = tags;
        }
    }
}
