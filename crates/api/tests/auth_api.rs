//! HTTP-level integration tests for login and token checks.

mod common;

use axum::body::Body;
use axum::http::header::AUTHORIZATION;
use axum::http::{Request, StatusCode};
use common::{body_json, post_json};
use mediashelf_api::auth::bootstrap::ensure_account;
use mediashelf_api::auth::password::hash_password;
use mediashelf_api::config::BootstrapAccount;
use mediashelf_db::repositories::UserRepo;
use sqlx::PgPool;
use tower::ServiceExt;

const PASSWORD: &str = "test_password_123!";

async fn create_test_user(pool: &PgPool, username: &str) -> i64 {
    let hashed = hash_password(PASSWORD).expect("hashing should succeed");
    UserRepo::create(pool, username, &hashed)
        .await
        .expect("user creation should succeed")
        .id
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_success(pool: PgPool) {
    let user_id = create_test_user(&pool, "curator").await;
    let app = common::build_test_app(pool.clone());

    let body = serde_json::json!({ "username": "curator", "password": PASSWORD });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["access_token"].is_string());
    assert_eq!(json["token_type"], "Bearer");
    assert_eq!(json["expires_in"], 3600);
    assert_eq!(json["user"]["id"], user_id);
    assert_eq!(json["user"]["username"], "curator");

    let user = UserRepo::find_by_id(&pool, user_id).await.unwrap().unwrap();
    assert!(user.last_login_at.is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_issued_token_opens_catalog(pool: PgPool) {
    create_test_user(&pool, "curator").await;

    let body = serde_json::json!({ "username": "curator", "password": PASSWORD });
    let json = body_json(post_json(common::build_test_app(pool.clone()), "/api/v1/auth/login", body).await).await;
    let token = json["access_token"].as_str().unwrap();

    let request = Request::builder()
        .uri("/gamecollection")
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    let response = common::build_test_app(pool).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_wrong_password(pool: PgPool) {
    create_test_user(&pool, "curator").await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "username": "curator", "password": "incorrect" });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_nonexistent_user(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "username": "ghost", "password": "whatever" });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_inactive_user(pool: PgPool) {
    let user_id = create_test_user(&pool, "retired").await;
    sqlx::query("UPDATE users SET is_active = FALSE WHERE id = $1")
        .bind(user_id)
        .execute(&pool)
        .await
        .unwrap();
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "username": "retired", "password": PASSWORD });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_garbage_token_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let request = Request::builder()
        .uri("/moviecollection")
        .header(AUTHORIZATION, "Bearer not-a-jwt")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_bootstrap_account_created_once(pool: PgPool) {
    let account = BootstrapAccount {
        username: "admin".to_string(),
        password: "first-password".to_string(),
    };
    assert!(ensure_account(&pool, &account).await.unwrap());

    let changed = BootstrapAccount {
        password: "second-password".to_string(),
        ..account.clone()
    };
    assert!(!ensure_account(&pool, &changed).await.unwrap());

    // The original password still works.
    let body = serde_json::json!({ "username": "admin", "password": "first-password" });
    let response = post_json(common::build_test_app(pool), "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
}
