//! Caller claims endpoint

use super::request_session;
use crate::server::state::AppState;
use crate::utils::error::Result;
use actix_web::{HttpRequest, HttpResponse, web};
use tracing::debug;

/// The caller's resolved roles and derived flags
///
/// Anonymous callers get an empty resolution.
pub async fn my_claims(state: web::Data<AppState>, req: HttpRequest) -> Result<HttpResponse> {
    let session = request_session(&req, &state).await?;
    debug!("Claims requested by {:?}", session.uid());
    Ok(HttpResponse::Ok().json(session.claims()))
}
