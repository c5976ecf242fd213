use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use sea_orm::DatabaseConnection;
use serde_json::{Value, json};
use tower::util::ServiceExt; // for `oneshot`
use videoteka::auth::{create_jwt, decode_jwt, hash_password, verify_password};
use videoteka::config::Config;
use videoteka::{AppState, db, server};

// Helper to create a test database
async fn setup_test_db() -> DatabaseConnection {
    db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB")
}

fn app(db: &DatabaseConnection) -> Router {
    server::build_router(AppState::new(db.clone()), &Config::default())
}

fn json_post(uri: &str, payload: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

async fn read_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_password_hashing() {
    let password = "super_secret_password";
    let hash = hash_password(password).expect("Failed to hash password");

    assert_ne!(password, hash);
    assert!(verify_password(password, &hash).unwrap());
    assert!(!verify_password("wrong_password", &hash).unwrap());
}

#[tokio::test]
async fn test_jwt_creation_and_verification() {
    let token = create_jwt(42, "anna").expect("Failed to create JWT");
    assert!(!token.is_empty());

    let claims = decode_jwt(&token).expect("Failed to verify JWT");
    assert_eq!(claims.sub, "anna");
    assert_eq!(claims.uid, 42);
}

#[tokio::test]
async fn test_tampered_token_rejected() {
    let token = create_jwt(1, "anna").expect("Failed to create JWT");
    let tampered = format!("{}x", token);
    assert!(decode_jwt(&tampered).is_err());
}

#[tokio::test]
async fn test_register_login_me_flow() {
    let db = setup_test_db().await;
    let app = app(&db);

    // 1. Register
    let response = app
        .clone()
        .oneshot(json_post(
            "/api/auth/register",
            json!({
                "username": "anna",
                "password": "secret-pass",
                "phone_number": "+7 900 000-00-00",
                "email": "anna@example.ru"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = read_json(response).await;
    assert!(json["token"].is_string());
    assert!(json["user"].get("password_hash").is_none());

    // 2. Wrong password
    let response = app
        .clone()
        .oneshot(json_post(
            "/api/auth/login",
            json!({ "username": "anna", "password": "nope" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // 3. Login
    let response = app
        .clone()
        .oneshot(json_post(
            "/api/auth/login",
            json!({ "username": "anna", "password": "secret-pass" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let token = read_json(response).await["token"]
        .as_str()
        .unwrap()
        .to_string();

    // 4. Me
    let req = Request::builder()
        .uri("/api/auth/me")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = read_json(response).await;
    assert_eq!(json["username"], "anna");
    assert_eq!(json["email"], "anna@example.ru");

    // 5. Logout
    let response = app
        .oneshot(json_post("/api/auth/logout", json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_unknown_user_login_rejected() {
    let db = setup_test_db().await;

    let response = app(&db)
        .oneshot(json_post(
            "/api/auth/login",
            json!({ "username": "ghost", "password": "whatever" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_protected_routes_require_token() {
    let db = setup_test_db().await;
    let app = app(&db);

    let req = Request::builder()
        .uri("/api/profile")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .clone()
        .oneshot(json_post(
            "/api/movies/1/purchase",
            json!({ "email": "a@b.ru", "confirm": true }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let req = Request::builder()
        .uri("/api/auth/me")
        .header(header::AUTHORIZATION, "Bearer not.a.token")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_health_is_public() {
    let db = setup_test_db().await;

    let req = Request::builder()
        .uri("/api/health")
        .body(Body::empty())
        .unwrap();
    let response = app(&db).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await["status"], "ok");
}
