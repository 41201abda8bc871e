//! Sample data endpoint

use super::{helper_failure, request_session};
use crate::auth::AuthorizationGate;
use crate::server::state::AppState;
use crate::services::seed_database;
use crate::utils::error::Result;
use actix_web::{HttpRequest, HttpResponse, web};
use serde_json::json;
use tracing::{error, info};

/// Seed sample users and courses
///
/// Admin only. Use `seed.seed_on_start` to populate an empty deployment.
pub async fn seed(state: web::Data<AppState>, req: HttpRequest) -> Result<HttpResponse> {
    let session = request_session(&req, &state).await?;
    let admin = session.require_any(&AuthorizationGate::admin())?;

    Ok(match seed_database(&state.auth, &state.storage).await {
        Ok(report) => {
            info!("Seed endpoint completed for {}", admin.uid);
            HttpResponse::Ok().json(json!({
                "message": "Database seeded successfully",
                "users": report.users,
                "courses": report.courses,
            }))
        }
        Err(e) => {
            error!("Seeding failed: {}", e);
            helper_failure("Failed to seed database", &e)
        }
    })
}
