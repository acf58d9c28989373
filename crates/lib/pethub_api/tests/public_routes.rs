//! Integration tests for the public routes — malformed-input handling that
//! must resolve before any storage round-trip (the pool never connects).

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use pethub_api::{AppState, config::ApiConfig};
use pethub_core::store::DocStore;
use tower::ServiceExt;

fn test_state() -> AppState {
    let pool = sqlx::postgres::PgPoolOptions::new()
        .connect_lazy("postgres://localhost:5432/pethub_test")
        .expect("lazy pool");
    AppState {
        store: DocStore::new(pool),
        config: ApiConfig {
            bind_addr: "127.0.0.1:0".into(),
            database_url: "postgres://localhost:5432/pethub_test".into(),
            jwt_secret: "test-secret".into(),
        },
    }
}

async fn status_of(req: Request<Body>) -> StatusCode {
    let app = pethub_api::router(test_state());
    app.oneshot(req).await.expect("request").status()
}

#[tokio::test]
async fn login_with_malformed_body_is_bad_request() {
    let req = Request::builder()
        .method("POST")
        .uri("/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"username\":"))
        .unwrap();
    assert_eq!(status_of(req).await, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn login_without_content_type_is_bad_request() {
    let req = Request::builder()
        .method("POST")
        .uri("/login")
        .body(Body::from(r#"{"username":"bob","password":"hunter22"}"#))
        .unwrap();
    assert_eq!(status_of(req).await, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn register_with_short_password_is_bad_request() {
    let req = Request::builder()
        .method("POST")
        .uri("/register")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            r#"{"username":"bob","password":"short","role":"user"}"#,
        ))
        .unwrap();
    assert_eq!(status_of(req).await, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn register_with_empty_username_is_bad_request() {
    let req = Request::builder()
        .method("POST")
        .uri("/register")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            r#"{"username":"  ","password":"long-enough","role":"user"}"#,
        ))
        .unwrap();
    assert_eq!(status_of(req).await, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn get_pet_with_malformed_id_is_not_found() {
    // The public GET route advertises only 404/500; a malformed key can
    // never name a stored document.
    let req = Request::builder()
        .uri("/pets/not-a-key")
        .body(Body::empty())
        .unwrap();
    assert_eq!(status_of(req).await, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_pets_with_non_numeric_age_is_bad_request() {
    let req = Request::builder()
        .uri("/pets?age=old")
        .body(Body::empty())
        .unwrap();
    assert_eq!(status_of(req).await, StatusCode::BAD_REQUEST);
}
