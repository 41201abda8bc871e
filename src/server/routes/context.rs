//! Request session helpers

use crate::auth::Session;
use crate::server::state::AppState;
use crate::utils::error::{AppError, Result};
use actix_web::HttpRequest;
use actix_web::http::header::AUTHORIZATION;

/// Authenticate the request and resolve the caller's claims
///
/// Requests without an Authorization header get an anonymous session; a
/// header that is present but invalid is an error.
pub async fn request_session(req: &HttpRequest, state: &AppState) -> Result<Session> {
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .map(|value| {
            value
                .to_str()
                .map_err(|_| AppError::auth("Authorization header is not valid text"))
        })
        .transpose()?;

    state.auth.session(header).await
}
