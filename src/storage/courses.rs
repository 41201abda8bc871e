//! Course store

use super::models::{Course, CourseFilter, CourseUpdate, NewCourse};
use crate::utils::error::{AppError, Result};
use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use tracing::info;
use uuid::Uuid;

/// Persistence for courses
#[async_trait]
pub trait CourseStore: Send + Sync {
    /// Courses matching the filter, oldest first
    async fn list_courses(&self, filter: &CourseFilter) -> Result<Vec<Course>>;

    async fn get_course(&self, id: Uuid) -> Result<Option<Course>>;

    /// Create a course owned by `instructor_uid`
    async fn create_course(&self, instructor_uid: &str, course: NewCourse) -> Result<Course>;

    /// Store a fully formed course; fails with `Conflict` if the ID exists
    async fn insert_course(&self, course: Course) -> Result<Course>;

    async fn update_course(&self, id: Uuid, update: CourseUpdate) -> Result<Course>;
}

/// In-memory course store
#[derive(Debug, Default)]
pub struct MemoryCourseStore {
    courses: DashMap<Uuid, Course>,
}

impl MemoryCourseStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CourseStore for MemoryCourseStore {
    async fn list_courses(&self, filter: &CourseFilter) -> Result<Vec<Course>> {
        let mut courses: Vec<Course> = self
            .courses
            .iter()
            .filter(|entry| filter.matches(entry.value()))
            .map(|entry| entry.value().clone())
            .collect();
        courses.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.title.cmp(&b.title))
        });
        Ok(courses)
    }

    async fn get_course(&self, id: Uuid) -> Result<Option<Course>> {
        Ok(self.courses.get(&id).map(|entry| entry.value().clone()))
    }

    async fn create_course(&self, instructor_uid: &str, course: NewCourse) -> Result<Course> {
        course.validate()?;

        let now = Utc::now();
        let course = Course {
            id: Uuid::new_v4(),
            title: course.title.trim().to_string(),
            description: course.description,
            category: course.category.trim().to_lowercase(),
            instructor_uid: instructor_uid.to_string(),
            published: course.published,
            price_cents: course.price_cents,
            created_at: now,
            updated_at: now,
        };

        self.insert_course(course).await
    }

    async fn insert_course(&self, course: Course) -> Result<Course> {
        match self.courses.entry(course.id) {
            dashmap::mapref::entry::Entry::Occupied(_) => Err(AppError::conflict(format!(
                "Course already exists: {}",
                course.id
            ))),
            dashmap::mapref::entry::Entry::Vacant(slot) => {
                slot.insert(course.clone());
                info!("Created course {} ({})", course.id, course.title);
                Ok(course)
            }
        }
    }

    async fn update_course(&self, id: Uuid, update: CourseUpdate) -> Result<Course> {
        update.validate()?;

        let mut entry = self
            .courses
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(format!("Course not found: {}", id)))?;

        let course = entry.value_mut();
        update.apply(course);
        course.updated_at = Utc::now().max(course.updated_at);
        Ok(course.clone())
    }
}
