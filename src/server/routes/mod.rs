//! HTTP route modules
//!
//! All API routes live under `/api`. Gated routes resolve the caller's
//! session and check it against an authorization gate before touching
//! storage.

pub mod admin;
pub mod claims;
mod context;
pub mod courses;
pub mod seed;

pub use context::request_session;

use crate::utils::error::AppError;
use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};

/// Configure API routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/seed", web::post().to(seed::seed))
            .route("/me/claims", web::get().to(claims::my_claims))
            .route("/courses", web::get().to(courses::list_courses))
            .route("/courses", web::post().to(courses::create_course))
            .route("/courses/{id}", web::get().to(courses::get_course))
            .route("/courses/{id}", web::patch().to(courses::update_course))
            .route(
                "/instructor/courses",
                web::get().to(courses::instructor_courses),
            )
            .route("/admin/roles", web::post().to(admin::assign_user_roles))
            .route("/admin/users", web::get().to(admin::list_users))
            .route("/admin/users/{uid}", web::patch().to(admin::patch_user)),
    );
}

/// JSON body settings; malformed bodies answer with the standard error shape
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _req| AppError::bad_request(err.to_string()).into())
}

/// Body returned when a seed or admin helper fails
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HelperFailure {
    pub message: String,
    pub error: String,
}

pub(crate) fn helper_failure(message: &str, error: &AppError) -> HttpResponse {
    HttpResponse::InternalServerError().json(HelperFailure {
        message: message.to_string(),
        error: error.to_string(),
    })
}
