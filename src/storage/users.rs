//! User record store

use super::models::{NewUser, UserRecord};
use crate::auth::roles::{Role, RoleSet};
use crate::utils::error::{AppError, Result};
use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use serde_json::{Map, Value};
use tracing::{debug, info};

/// Persistence for user profile documents
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn get_user(&self, uid: &str) -> Result<Option<UserRecord>>;

    /// Create a user; fails with `Conflict` if the uid is taken
    async fn create_user(&self, user: NewUser) -> Result<UserRecord>;

    /// All users, oldest first
    async fn list_users(&self) -> Result<Vec<UserRecord>>;

    /// Merge `patch` into the user's record and stamp `updated_at`
    async fn patch_user(&self, uid: &str, patch: &Value) -> Result<UserRecord>;
}

/// Apply a JSON patch object to a user record
///
/// `email`, `displayName` and `roles` go to their typed fields; any other key
/// goes to `extra`, where `null` removes it. `extra` itself is reserved and
/// cannot be used as a key. The record is left untouched if
/// any field is rejected. Timestamps are not modified here.
pub fn apply_user_patch(record: &mut UserRecord, patch: &Value) -> Result<()> {
    let fields = patch
        .as_object()
        .ok_or_else(|| AppError::validation("User patch must be a JSON object"))?;

    let mut updated = record.clone();
    for (name, value) in fields {
        match name.as_str() {
            "uid" | "createdAt" | "updatedAt" | "extra" => {
                return Err(AppError::validation(format!(
                    "Field '{}' cannot be patched",
                    name
                )));
            }
            "email" => match value.as_str().map(str::trim) {
                Some(email) if !email.is_empty() => updated.email = email.to_string(),
                _ => return Err(AppError::validation("Email must be a non-empty string")),
            },
            "displayName" => match value {
                Value::Null => updated.display_name = None,
                Value::String(name) => updated.display_name = Some(name.clone()),
                _ => return Err(AppError::validation("Display name must be a string")),
            },
            "roles" => updated.roles = parse_roles(value)?,
            _ => {
                if value.is_null() {
                    updated.extra.remove(name);
                } else {
                    updated.extra.insert(name.clone(), value.clone());
                }
            }
        }
    }

    *record = updated;
    Ok(())
}

/// Strict role parsing for data entering the store
fn parse_roles(value: &Value) -> Result<RoleSet> {
    let items = value
        .as_array()
        .ok_or_else(|| AppError::validation("Roles must be an array of role tags"))?;

    items
        .iter()
        .map(|item| {
            item.as_str()
                .ok_or_else(|| AppError::validation("Roles must be an array of role tags"))?
                .parse::<Role>()
                .map_err(AppError::validation)
        })
        .collect()
}

/// In-memory user store
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: DashMap<String, UserRecord>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn get_user(&self, uid: &str) -> Result<Option<UserRecord>> {
        Ok(self.users.get(uid).map(|entry| entry.value().clone()))
    }

    async fn create_user(&self, user: NewUser) -> Result<UserRecord> {
        if user.uid.trim().is_empty() {
            return Err(AppError::validation("User ID cannot be empty"));
        }

        let now = Utc::now();
        let record = UserRecord {
            uid: user.uid,
            email: user.email,
            display_name: user.display_name,
            roles: user.roles,
            created_at: now,
            updated_at: now,
            extra: Map::new(),
        };

        match self.users.entry(record.uid.clone()) {
            dashmap::mapref::entry::Entry::Occupied(_) => Err(AppError::conflict(format!(
                "User already exists: {}",
                record.uid
            ))),
            dashmap::mapref::entry::Entry::Vacant(slot) => {
                slot.insert(record.clone());
                info!("Created user: {}", record.uid);
                Ok(record)
            }
        }
    }

    async fn list_users(&self) -> Result<Vec<UserRecord>> {
        let mut users: Vec<UserRecord> = self.users.iter().map(|e| e.value().clone()).collect();
        users.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.uid.cmp(&b.uid)));
        Ok(users)
    }

    async fn patch_user(&self, uid: &str, patch: &Value) -> Result<UserRecord> {
        let mut entry = self
            .users
            .get_mut(uid)
            .ok_or_else(|| AppError::not_found(format!("User not found: {}", uid)))?;

        let record = entry.value_mut();
        apply_user_patch(record, patch)?;
        record.updated_at = Utc::now().max(record.updated_at);

        debug!("Patched user: {}", uid);
        Ok(record.clone())
    }
}
