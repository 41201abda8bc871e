//! Administration endpoints

use super::{helper_failure, request_session};
use crate::auth::{AuthorizationGate, Role, RoleSet};
use crate::server::state::AppState;
use crate::services::assign_roles;
use crate::utils::error::{AppError, Result};
use actix_web::{HttpRequest, HttpResponse, web};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{error, info};

#[derive(Debug, Clone, Deserialize)]
pub struct AssignRolesRequest {
    pub uid: String,
    pub roles: Vec<String>,
}

/// Parse role tags, rejecting any that are not known roles
fn parse_role_tags(tags: &[String]) -> Result<RoleSet> {
    tags.iter()
        .map(|tag| tag.parse::<Role>().map_err(AppError::validation))
        .collect()
}

/// Replace a user's roles
///
/// Only admins may call this. A refused caller gets the standard 401/403
/// error body; failures past the gate use the helper `{message, error}` body.
pub async fn assign_user_roles(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<AssignRolesRequest>,
) -> Result<HttpResponse> {
    let session = request_session(&req, &state).await?;
    let admin = session.require_any(&AuthorizationGate::admin())?;
    let request = body.into_inner();

    let result = match parse_role_tags(&request.roles) {
        Ok(roles) => assign_roles(&state.auth, &state.storage, &request.uid, &roles).await,
        Err(e) => Err(e),
    };

    Ok(match result {
        Ok(record) => {
            info!("Roles of {} replaced by {}", record.uid, admin.uid);
            HttpResponse::Ok().json(json!({
                "message": "Roles updated successfully",
                "uid": record.uid,
                "roles": record.roles,
            }))
        }
        Err(e) => {
            error!("Role assignment for {} failed: {}", request.uid, e);
            helper_failure("Failed to update roles", &e)
        }
    })
}

/// List all user records
pub async fn list_users(state: web::Data<AppState>, req: HttpRequest) -> Result<HttpResponse> {
    let session = request_session(&req, &state).await?;
    session.require_any(&AuthorizationGate::admin())?;

    let users = state.storage.users().list_users().await?;
    Ok(HttpResponse::Ok().json(users))
}

/// Merge a JSON patch into a user record
///
/// A patch that changes `roles` also updates the user's role claims.
pub async fn patch_user(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
    body: web::Json<Value>,
) -> Result<HttpResponse> {
    let session = request_session(&req, &state).await?;
    let admin = session.require_any(&AuthorizationGate::admin())?;

    let uid = path.into_inner();
    let patch = body.into_inner();
    let record = state.storage.users().patch_user(&uid, &patch).await?;

    if patch.get("roles").is_some() {
        state.auth.set_roles(&uid, &record.roles).await?;
    }

    info!("User {} patched by {}", uid, admin.uid);
    Ok(HttpResponse::Ok().json(record))
}
