//! Stored record types

use crate::auth::roles::RoleSet;
use crate::utils::error::{AppError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const MAX_TITLE_LEN: usize = 200;

/// A user profile document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub uid: String,
    pub email: String,
    pub display_name: Option<String>,
    #[serde(default)]
    pub roles: RoleSet,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Fields without a typed slot
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Input for creating a user
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub uid: String,
    pub email: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub roles: RoleSet,
}

/// A course offered on the platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: String,
    pub instructor_uid: String,
    pub published: bool,
    pub price_cents: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Course {
    /// Whether the course is visible to everyone
    pub fn is_public(&self) -> bool {
        self.published
    }

    pub fn is_owned_by(&self, uid: &str) -> bool {
        self.instructor_uid == uid
    }
}

/// Input for creating a course
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCourse {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub price_cents: u32,
}

impl NewCourse {
    pub fn validate(&self) -> Result<()> {
        validate_title(&self.title)?;
        validate_category(&self.category)
    }
}

/// Partial course update; absent fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub published: Option<bool>,
    pub price_cents: Option<u32>,
}

impl CourseUpdate {
    pub fn validate(&self) -> Result<()> {
        if let Some(title) = &self.title {
            validate_title(title)?;
        }
        if let Some(category) = &self.category {
            validate_category(category)?;
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.published.is_none()
            && self.price_cents.is_none()
    }

    pub(crate) fn apply(self, course: &mut Course) {
        if let Some(title) = self.title {
            course.title = title.trim().to_string();
        }
        if let Some(description) = self.description {
            course.description = description;
        }
        if let Some(category) = self.category {
            course.category = category.trim().to_lowercase();
        }
        if let Some(published) = self.published {
            course.published = published;
        }
        if let Some(price_cents) = self.price_cents {
            course.price_cents = price_cents;
        }
    }
}

/// Course listing criteria
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CourseFilter {
    pub category: Option<String>,
    pub instructor_uid: Option<String>,
    #[serde(default)]
    pub published_only: bool,
}

impl CourseFilter {
    pub fn published() -> Self {
        Self {
            published_only: true,
            ..Self::default()
        }
    }

    pub fn matches(&self, course: &Course) -> bool {
        if self.published_only && !course.published {
            return false;
        }
        if let Some(category) = &self.category {
            if !course.category.eq_ignore_ascii_case(category.trim()) {
                return false;
            }
        }
        if let Some(uid) = &self.instructor_uid {
            if &course.instructor_uid != uid {
                return false;
            }
        }
        true
    }
}

fn validate_title(title: &str) -> Result<()> {
    let title = title.trim();
    if title.is_empty() {
        return Err(AppError::validation("Course title cannot be empty"));
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(AppError::validation(format!(
            "Course title cannot exceed {} characters",
            MAX_TITLE_LEN
        )));
    }
    Ok(())
}

fn validate_category(category: &str) -> Result<()> {
    if category.trim().is_empty() {
        return Err(AppError::validation("Course category cannot be empty"));
    }
    Ok(())
}
