//! Course route integration tests
//!
//! Gated routes answer 401 without a caller, 403 when the caller's roles
//! miss the gate, and succeed otherwise.

#[cfg(test)]
mod tests {
    use crate::common::{sign_in, test_state};
    use crate::test_app;
    use actix_web::http::StatusCode;
    use actix_web::test;
    use courseware_rs::auth::Role;
    use courseware_rs::storage::Course;
    use courseware_rs::utils::error::ErrorResponse;
    use serde_json::{Value, json};

    fn course_body(title: &str, category: &str, published: bool) -> Value {
        json!({
            "title": title,
            "description": "A test course",
            "category": category,
            "published": published,
            "priceCents": 1500,
        })
    }

    #[actix_web::test]
    async fn test_health_check() {
        let app = test_app!(test_state());
        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "healthy");
    }

    #[actix_web::test]
    async fn test_create_course_requires_sign_in() {
        let app = test_app!(test_state());
        let req = test::TestRequest::post()
            .uri("/api/courses")
            .set_json(course_body("Rust", "programming", true))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_create_course_forbidden_for_student() {
        let state = test_state();
        let student = sign_in(&state, "stu", &[Role::Student]).await;
        let app = test_app!(state);

        let req = test::TestRequest::post()
            .uri("/api/courses")
            .insert_header(student.header())
            .set_json(course_body("Rust", "programming", true))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error.code, "FORBIDDEN");
    }

    #[actix_web::test]
    async fn test_create_course_forbidden_without_roles() {
        // No roles classifies as student, which the instructor gate rejects
        let state = test_state();
        let nobody = sign_in(&state, "nobody", &[]).await;
        let app = test_app!(state);

        let req = test::TestRequest::post()
            .uri("/api/courses")
            .insert_header(nobody.header())
            .set_json(course_body("Rust", "programming", true))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn test_instructor_and_admin_can_create() {
        let state = test_state();
        let instructor = sign_in(&state, "inst", &[Role::Instructor]).await;
        let admin = sign_in(&state, "root", &[Role::Admin]).await;
        let app = test_app!(state);

        for caller in [&instructor, &admin] {
            let req = test::TestRequest::post()
                .uri("/api/courses")
                .insert_header(caller.header())
                .set_json(course_body("Rust", "Programming", true))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::CREATED);

            let course: Course = test::read_body_json(resp).await;
            assert_eq!(course.instructor_uid, caller.uid);
            assert_eq!(course.category, "programming");
        }
    }

    #[actix_web::test]
    async fn test_invalid_token_is_unauthorized() {
        let app = test_app!(test_state());
        let req = test::TestRequest::post()
            .uri("/api/courses")
            .insert_header(("Authorization", "Bearer not-a-token"))
            .set_json(course_body("Rust", "programming", true))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_listing_shows_published_only() {
        let state = test_state();
        let instructor = sign_in(&state, "inst", &[Role::Instructor]).await;
        let app = test_app!(state);

        for (title, category, published) in [
            ("Rust", "programming", true),
            ("Draft", "programming", false),
            ("Watercolor", "art", true),
        ] {
            let req = test::TestRequest::post()
                .uri("/api/courses")
                .insert_header(instructor.header())
                .set_json(course_body(title, category, published))
                .to_request();
            assert_eq!(
                test::call_service(&app, req).await.status(),
                StatusCode::CREATED
            );
        }

        let req = test::TestRequest::get().uri("/api/courses").to_request();
        let courses: Vec<Course> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(courses.len(), 2);
        assert!(courses.iter().all(|c| c.published));

        let req = test::TestRequest::get()
            .uri("/api/courses?category=art")
            .to_request();
        let courses: Vec<Course> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].title, "Watercolor");

        let req = test::TestRequest::get()
            .uri("/api/instructor/courses")
            .insert_header(instructor.header())
            .to_request();
        let mine: Vec<Course> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(mine.len(), 3);
    }

    #[actix_web::test]
    async fn test_unpublished_course_visibility() {
        let state = test_state();
        let owner = sign_in(&state, "owner", &[Role::Instructor]).await;
        let other = sign_in(&state, "other", &[Role::Instructor]).await;
        let admin = sign_in(&state, "root", &[Role::Admin]).await;
        let app = test_app!(state);

        let req = test::TestRequest::post()
            .uri("/api/courses")
            .insert_header(owner.header())
            .set_json(course_body("Draft", "programming", false))
            .to_request();
        let draft: Course = test::call_and_read_body_json(&app, req).await;
        let uri = format!("/api/courses/{}", draft.id);

        let req = test::TestRequest::get().uri(&uri).to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::NOT_FOUND
        );

        let req = test::TestRequest::get()
            .uri(&uri)
            .insert_header(other.header())
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::NOT_FOUND
        );

        for caller in [&owner, &admin] {
            let req = test::TestRequest::get()
                .uri(&uri)
                .insert_header(caller.header())
                .to_request();
            assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
        }
    }

    #[actix_web::test]
    async fn test_only_owner_or_admin_can_edit() {
        let state = test_state();
        let owner = sign_in(&state, "owner", &[Role::Instructor]).await;
        let other = sign_in(&state, "other", &[Role::Instructor]).await;
        let admin = sign_in(&state, "root", &[Role::Admin]).await;
        let app = test_app!(state);

        let req = test::TestRequest::post()
            .uri("/api/courses")
            .insert_header(owner.header())
            .set_json(course_body("Rust", "programming", false))
            .to_request();
        let course: Course = test::call_and_read_body_json(&app, req).await;
        let uri = format!("/api/courses/{}", course.id);

        let req = test::TestRequest::patch()
            .uri(&uri)
            .insert_header(other.header())
            .set_json(json!({"published": true}))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::FORBIDDEN
        );

        let req = test::TestRequest::patch()
            .uri(&uri)
            .insert_header(owner.header())
            .set_json(json!({"published": true}))
            .to_request();
        let updated: Course = test::call_and_read_body_json(&app, req).await;
        assert!(updated.published);

        let req = test::TestRequest::patch()
            .uri(&uri)
            .insert_header(admin.header())
            .set_json(json!({"title": "Rust, Revised"}))
            .to_request();
        let updated: Course = test::call_and_read_body_json(&app, req).await;
        assert_eq!(updated.title, "Rust, Revised");

        let req = test::TestRequest::patch()
            .uri(&uri)
            .insert_header(owner.header())
            .set_json(json!({}))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[actix_web::test]
    async fn test_malformed_body_is_bad_request() {
        let state = test_state();
        let instructor = sign_in(&state, "inst", &[Role::Instructor]).await;
        let app = test_app!(state);

        let req = test::TestRequest::post()
            .uri("/api/courses")
            .insert_header(instructor.header())
            .insert_header(("Content-Type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error.code, "BAD_REQUEST");
    }
}
