//! Storage layer
//!
//! User and course records behind async store traits, with in-memory
//! implementations.

pub mod courses;
pub mod models;
pub mod users;

pub use courses::{CourseStore, MemoryCourseStore};
pub use models::{Course, CourseFilter, CourseUpdate, NewCourse, NewUser, UserRecord};
pub use users::{MemoryUserStore, UserStore, apply_user_patch};

use std::sync::Arc;
use tracing::info;

/// Main storage layer bundling the record stores
#[derive(Clone)]
pub struct StorageLayer {
    users: Arc<dyn UserStore>,
    courses: Arc<dyn CourseStore>,
}

impl std::fmt::Debug for StorageLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageLayer").finish_non_exhaustive()
    }
}

impl StorageLayer {
    pub fn new(users: Arc<dyn UserStore>, courses: Arc<dyn CourseStore>) -> Self {
        Self { users, courses }
    }

    /// Storage kept in process memory
    pub fn in_memory() -> Self {
        info!("Initializing in-memory storage layer");
        Self::new(
            Arc::new(MemoryUserStore::new()),
            Arc::new(MemoryCourseStore::new()),
        )
    }

    pub fn users(&self) -> &dyn UserStore {
        self.users.as_ref()
    }

    pub fn courses(&self) -> &dyn CourseStore {
        self.courses.as_ref()
    }
}
