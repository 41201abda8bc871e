//! Course endpoints

use super::request_session;
use crate::auth::{AuthorizationGate, Session};
use crate::server::state::AppState;
use crate::storage::{Course, CourseFilter, CourseUpdate, NewCourse};
use crate::utils::error::{AppError, Result};
use actix_web::{HttpRequest, HttpResponse, web};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CourseQuery {
    pub category: Option<String>,
}

/// Unpublished courses are only visible to their owner and admins
fn can_view(session: &Session, course: &Course) -> bool {
    course.is_public()
        || session.claims().is_admin
        || session.uid().is_some_and(|uid| course.is_owned_by(uid))
}

/// Published courses, optionally filtered by category
pub async fn list_courses(
    state: web::Data<AppState>,
    query: web::Query<CourseQuery>,
) -> Result<HttpResponse> {
    let filter = CourseFilter {
        category: query
            .into_inner()
            .category
            .filter(|category| !category.trim().is_empty()),
        ..CourseFilter::published()
    };

    let courses = state.storage.courses().list_courses(&filter).await?;
    Ok(HttpResponse::Ok().json(courses))
}

pub async fn get_course(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let id = path.into_inner();
    let session = request_session(&req, &state).await?;

    let course = state
        .storage
        .courses()
        .get_course(id)
        .await?
        .filter(|course| can_view(&session, course))
        .ok_or_else(|| AppError::not_found(format!("Course not found: {}", id)))?;

    Ok(HttpResponse::Ok().json(course))
}

/// Create a course owned by the calling instructor
pub async fn create_course(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<NewCourse>,
) -> Result<HttpResponse> {
    let session = request_session(&req, &state).await?;
    let principal = session.require_any(&AuthorizationGate::instructor())?;

    let course = state
        .storage
        .courses()
        .create_course(&principal.uid, body.into_inner())
        .await?;

    info!("Course {} created by {}", course.id, principal.uid);
    Ok(HttpResponse::Created().json(course))
}

/// Update a course; instructors may only edit their own
pub async fn update_course(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    body: web::Json<CourseUpdate>,
) -> Result<HttpResponse> {
    let session = request_session(&req, &state).await?;
    let principal = session.require_any(&AuthorizationGate::instructor())?;

    let id = path.into_inner();
    let update = body.into_inner();
    if update.is_empty() {
        return Err(AppError::bad_request("No fields to update"));
    }

    let course = state
        .storage
        .courses()
        .get_course(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Course not found: {}", id)))?;

    if !session.claims().is_admin && !course.is_owned_by(&principal.uid) {
        return Err(AppError::forbidden(
            "Only the course owner can edit this course",
        ));
    }

    let updated = state.storage.courses().update_course(id, update).await?;
    info!("Course {} updated by {}", id, principal.uid);
    Ok(HttpResponse::Ok().json(updated))
}

/// The calling instructor's courses, including unpublished ones
pub async fn instructor_courses(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let session = request_session(&req, &state).await?;
    let principal = session.require_any(&AuthorizationGate::instructor())?;

    let filter = CourseFilter {
        instructor_uid: Some(principal.uid.clone()),
        ..CourseFilter::default()
    };
    let courses = state.storage.courses().list_courses(&filter).await?;
    Ok(HttpResponse::Ok().json(courses))
}
