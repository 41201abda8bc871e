//! Sample data seeding

use crate::auth::{AuthSystem, Role, RoleSet};
use crate::storage::{Course, NewUser, StorageLayer};
use crate::utils::error::Result;
use chrono::Utc;
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

struct SeedUser {
    uid: &'static str,
    email: &'static str,
    display_name: &'static str,
    roles: &'static [Role],
}

struct SeedCourse {
    id: u128,
    title: &'static str,
    description: &'static str,
    category: &'static str,
    instructor_uid: &'static str,
    published: bool,
    price_cents: u32,
}

const SEED_USERS: &[SeedUser] = &[
    SeedUser {
        uid: "seed-admin",
        email: "admin@courseware.dev",
        display_name: "Site Admin",
        roles: &[Role::Admin],
    },
    SeedUser {
        uid: "seed-instructor-1",
        email: "grace@courseware.dev",
        display_name: "Grace Hopper",
        roles: &[Role::Instructor],
    },
    SeedUser {
        uid: "seed-instructor-2",
        email: "alan@courseware.dev",
        display_name: "Alan Turing",
        roles: &[Role::Instructor],
    },
    SeedUser {
        uid: "seed-student-1",
        email: "ada@courseware.dev",
        display_name: "Ada Lovelace",
        roles: &[Role::Student],
    },
    SeedUser {
        uid: "seed-student-2",
        email: "edsger@courseware.dev",
        display_name: "Edsger Dijkstra",
        roles: &[Role::Student],
    },
];

const SEED_COURSES: &[SeedCourse] = &[
    SeedCourse {
        id: 0x0001,
        title: "Introduction to Compilers",
        description: "Lexing, parsing and code generation from first principles.",
        category: "programming",
        instructor_uid: "seed-instructor-1",
        published: true,
        price_cents: 4900,
    },
    SeedCourse {
        id: 0x0002,
        title: "COBOL for the Modern Age",
        description: "Maintaining business systems that refuse to retire.",
        category: "programming",
        instructor_uid: "seed-instructor-1",
        published: false,
        price_cents: 2900,
    },
    SeedCourse {
        id: 0x0003,
        title: "Computability and Machines",
        description: "Turing machines, decidability and the halting problem.",
        category: "mathematics",
        instructor_uid: "seed-instructor-2",
        published: true,
        price_cents: 0,
    },
    SeedCourse {
        id: 0x0004,
        title: "Breaking Codes",
        description: "A practical history of cryptanalysis.",
        category: "security",
        instructor_uid: "seed-instructor-2",
        published: true,
        price_cents: 3900,
    },
];

/// Records created by a seed run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub users: usize,
    pub courses: usize,
}

/// Stable ID of the `n`th sample course
pub fn seed_course_id(n: u128) -> Uuid {
    Uuid::from_u128(0x5eed_0000_0000_4000_8000_0000_0000_0000 | n)
}

/// Create the sample users and courses
///
/// Records that already exist are left alone, so repeated runs only report
/// what they added. Role claims are written only for users created by this
/// run; an existing user keeps whatever roles were assigned since.
pub async fn seed_database(auth: &AuthSystem, storage: &StorageLayer) -> Result<SeedReport> {
    info!("Seeding sample data");
    let mut report = SeedReport::default();

    for user in SEED_USERS {
        if storage.users().get_user(user.uid).await?.is_some() {
            debug!("Seed user {} already exists", user.uid);
            continue;
        }

        let record = storage
            .users()
            .create_user(NewUser {
                uid: user.uid.to_string(),
                email: user.email.to_string(),
                display_name: Some(user.display_name.to_string()),
                roles: RoleSet::new(user.roles.to_vec()),
            })
            .await?;
        auth.set_roles(&record.uid, &record.roles).await?;
        report.users += 1;
    }

    for course in SEED_COURSES {
        let id = seed_course_id(course.id);
        if storage.courses().get_course(id).await?.is_some() {
            debug!("Seed course {} already exists", id);
            continue;
        }

        let now = Utc::now();
        storage
            .courses()
            .insert_course(Course {
                id,
                title: course.title.to_string(),
                description: course.description.to_string(),
                category: course.category.to_string(),
                instructor_uid: course.instructor_uid.to_string(),
                published: course.published,
                price_cents: course.price_cents,
                created_at: now,
                updated_at: now,
            })
            .await?;
        report.courses += 1;
    }

    info!(
        "Seeding complete: {} users and {} courses created",
        report.users, report.courses
    );
    Ok(report)
}
