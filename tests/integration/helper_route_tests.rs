//! Seed and admin route integration tests
//!
//! The seed and role-assignment helpers are admin only. Past the gate they
//! answer 200 with a `{message, ...}` body, or 500 with `{message, error}`
//! when the work fails.

#[cfg(test)]
mod tests {
    use crate::common::{sign_in, test_config, test_state};
    use crate::{assert_ok, test_app};
    use actix_web::http::StatusCode;
    use actix_web::test;
    use async_trait::async_trait;
    use crate::common::TestCaller;
    use courseware_rs::auth::{AuthSystem, Role, RoleSet};
    use courseware_rs::server::AppState;
    use courseware_rs::server::routes::HelperFailure;
    use courseware_rs::storage::{
        MemoryCourseStore, NewUser, StorageLayer, UserRecord, UserStore,
    };
    use courseware_rs::utils::error::{AppError, Result};
    use serde_json::{Value, json};
    use std::sync::Arc;

    /// A user store whose backend is unreachable
    struct OfflineUserStore;

    #[async_trait]
    impl UserStore for OfflineUserStore {
        async fn get_user(&self, _uid: &str) -> Result<Option<UserRecord>> {
            Err(AppError::internal("user store offline"))
        }

        async fn create_user(&self, _user: NewUser) -> Result<UserRecord> {
            Err(AppError::internal("user store offline"))
        }

        async fn list_users(&self) -> Result<Vec<UserRecord>> {
            Err(AppError::internal("user store offline"))
        }

        async fn patch_user(&self, _uid: &str, _patch: &Value) -> Result<UserRecord> {
            Err(AppError::internal("user store offline"))
        }
    }

    fn offline_state() -> AppState {
        let config = test_config();
        let auth = assert_ok!(AuthSystem::new(config.auth()));
        let storage = StorageLayer::new(
            Arc::new(OfflineUserStore),
            Arc::new(MemoryCourseStore::new()),
        );
        AppState::new(config, auth, storage)
    }

    /// An admin known only to the claims directory, not to storage
    async fn directory_admin(state: &AppState) -> TestCaller {
        assert_ok!(
            state
                .auth
                .set_roles("root", &RoleSet::new(vec![Role::Admin]))
                .await
        );
        let token = assert_ok!(state.auth.issue_token("root"));
        TestCaller {
            uid: "root".to_string(),
            bearer: format!("Bearer {}", token),
        }
    }

    #[actix_web::test]
    async fn test_seed_succeeds_and_is_idempotent() {
        let state = test_state();
        let admin = sign_in(&state, "root", &[Role::Admin]).await;
        let app = test_app!(state);

        let req = test::TestRequest::post()
            .uri("/api/seed")
            .insert_header(admin.header())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Database seeded successfully");
        assert_eq!(body["users"], 5);
        assert_eq!(body["courses"], 4);

        let req = test::TestRequest::post()
            .uri("/api/seed")
            .insert_header(admin.header())
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["users"], 0);
        assert_eq!(body["courses"], 0);
    }

    #[actix_web::test]
    async fn test_seed_requires_admin() {
        let state = test_state();
        let instructor = sign_in(&state, "inst", &[Role::Instructor]).await;
        let app = test_app!(state.clone());

        let req = test::TestRequest::post().uri("/api/seed").to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::UNAUTHORIZED
        );

        let req = test::TestRequest::post()
            .uri("/api/seed")
            .insert_header(instructor.header())
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::FORBIDDEN
        );

        assert_eq!(assert_ok!(state.storage.users().list_users().await).len(), 1);
    }

    #[actix_web::test]
    async fn test_seed_failure_is_500_with_message() {
        let state = offline_state();
        let admin = directory_admin(&state).await;
        let app = test_app!(state);

        let req = test::TestRequest::post()
            .uri("/api/seed")
            .insert_header(admin.header())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: HelperFailure = test::read_body_json(resp).await;
        assert_eq!(body.message, "Failed to seed database");
        assert!(body.error.contains("user store offline"));
    }

    #[actix_web::test]
    async fn test_assign_roles_updates_claims() {
        let state = test_state();
        let caller = sign_in(&state, "u1", &[Role::Student]).await;
        let admin = sign_in(&state, "root", &[Role::Admin]).await;
        let app = test_app!(state);

        let req = test::TestRequest::post()
            .uri("/api/admin/roles")
            .insert_header(admin.header())
            .set_json(json!({"uid": "u1", "roles": ["instructor"]}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["uid"], "u1");
        assert_eq!(body["roles"], json!(["instructor"]));

        let req = test::TestRequest::get()
            .uri("/api/me/claims")
            .insert_header(caller.header())
            .to_request();
        let claims: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(claims["isInstructor"], true);
        assert_eq!(claims["isStudent"], false);
    }

    #[actix_web::test]
    async fn test_assign_roles_refuses_non_admins() {
        let state = test_state();
        let student = sign_in(&state, "stu", &[Role::Student]).await;
        let instructor = sign_in(&state, "inst", &[Role::Instructor]).await;
        let app = test_app!(state);

        let escalate = json!({"uid": "stu", "roles": ["admin"]});

        let req = test::TestRequest::post()
            .uri("/api/admin/roles")
            .set_json(escalate.clone())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "UNAUTHORIZED");

        for caller in [&student, &instructor] {
            let req = test::TestRequest::post()
                .uri("/api/admin/roles")
                .insert_header(caller.header())
                .set_json(escalate.clone())
                .to_request();
            assert_eq!(
                test::call_service(&app, req).await.status(),
                StatusCode::FORBIDDEN
            );
        }

        let req = test::TestRequest::get()
            .uri("/api/me/claims")
            .insert_header(student.header())
            .to_request();
        let claims: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(claims["roles"], json!(["student"]));
        assert_eq!(claims["isAdmin"], false);

        let req = test::TestRequest::get()
            .uri("/api/admin/users")
            .insert_header(student.header())
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::FORBIDDEN
        );
    }

    #[actix_web::test]
    async fn test_assign_roles_unknown_user_is_500() {
        let state = test_state();
        let admin = sign_in(&state, "root", &[Role::Admin]).await;
        let app = test_app!(state);

        let req = test::TestRequest::post()
            .uri("/api/admin/roles")
            .insert_header(admin.header())
            .set_json(json!({"uid": "ghost", "roles": ["admin"]}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: HelperFailure = test::read_body_json(resp).await;
        assert_eq!(body.message, "Failed to update roles");
        assert!(body.error.contains("ghost"));
    }

    #[actix_web::test]
    async fn test_assign_unknown_role_tag_is_500() {
        let state = test_state();
        sign_in(&state, "u1", &[Role::Student]).await;
        let admin = sign_in(&state, "root", &[Role::Admin]).await;
        let app = test_app!(state);

        let req = test::TestRequest::post()
            .uri("/api/admin/roles")
            .insert_header(admin.header())
            .set_json(json!({"uid": "u1", "roles": ["superuser"]}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn test_admin_user_routes_are_gated() {
        let state = test_state();
        let instructor = sign_in(&state, "inst", &[Role::Instructor]).await;
        let admin = sign_in(&state, "root", &[Role::Admin]).await;
        let app = test_app!(state);

        let req = test::TestRequest::get().uri("/api/admin/users").to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::UNAUTHORIZED
        );

        let req = test::TestRequest::get()
            .uri("/api/admin/users")
            .insert_header(instructor.header())
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::FORBIDDEN
        );

        let req = test::TestRequest::get()
            .uri("/api/admin/users")
            .insert_header(admin.header())
            .to_request();
        let users: Vec<UserRecord> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(users.len(), 2);
    }

    #[actix_web::test]
    async fn test_admin_patch_user_syncs_role_claims() {
        let state = test_state();
        let student = sign_in(&state, "stu", &[Role::Student]).await;
        let admin = sign_in(&state, "root", &[Role::Admin]).await;
        let app = test_app!(state);

        let req = test::TestRequest::patch()
            .uri("/api/admin/users/stu")
            .insert_header(admin.header())
            .set_json(json!({"roles": ["admin"], "bio": "promoted"}))
            .to_request();
        let record: UserRecord = test::call_and_read_body_json(&app, req).await;
        assert_eq!(record.extra.get("bio"), Some(&json!("promoted")));
        assert!(record.updated_at >= record.created_at);

        let req = test::TestRequest::get()
            .uri("/api/admin/users")
            .insert_header(student.header())
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_admin_patch_rejects_immutable_fields() {
        let state = test_state();
        sign_in(&state, "stu", &[Role::Student]).await;
        let admin = sign_in(&state, "root", &[Role::Admin]).await;
        let app = test_app!(state);

        let req = test::TestRequest::patch()
            .uri("/api/admin/users/stu")
            .insert_header(admin.header())
            .set_json(json!({"uid": "someone-else"}))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::BAD_REQUEST
        );

        let req = test::TestRequest::patch()
            .uri("/api/admin/users/ghost")
            .insert_header(admin.header())
            .set_json(json!({"bio": "x"}))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::NOT_FOUND
        );
    }
}
