//! Administrative role management

use crate::auth::{AuthSystem, RoleSet};
use crate::storage::{StorageLayer, UserRecord};
use crate::utils::error::{AppError, Result};
use serde_json::json;
use tracing::info;

/// Replace a user's roles
///
/// Updates the stored profile, then the custom claims the identity provider
/// serves, and drops the user's cached claims resolution.
pub async fn assign_roles(
    auth: &AuthSystem,
    storage: &StorageLayer,
    uid: &str,
    roles: &RoleSet,
) -> Result<UserRecord> {
    if uid.trim().is_empty() {
        return Err(AppError::validation("User ID cannot be empty"));
    }

    let record = storage
        .users()
        .patch_user(uid, &json!({ "roles": roles.tags() }))
        .await?;
    auth.set_roles(uid, roles).await?;

    info!("Assigned roles {:?} to user {}", roles.tags(), uid);
    Ok(record)
}
