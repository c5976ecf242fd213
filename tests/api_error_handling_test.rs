use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use serde_json::{Value, json};
use tower::util::ServiceExt; // for `oneshot`
use videoteka::config::Config;
use videoteka::{AppState, auth, db, seed, server};

// Helper to create a seeded test app
async fn setup_test_app() -> (DatabaseConnection, Router) {
    let db = db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB");
    seed::seed_demo_data(&db).await.expect("Failed to seed");
    let app = server::build_router(AppState::new(db.clone()), &Config::default());
    (db, app)
}

// Token for the seeded demo account (first user)
fn demo_token() -> String {
    auth::create_jwt(1, "demo").expect("Failed to create token")
}

async fn read_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

fn purchase_request(movie_id: i32, payload: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(format!("/api/movies/{}/purchase", movie_id))
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {}", demo_token()))
        .body(Body::from(payload.to_string()))
        .unwrap()
}

async fn sale_count(db: &DatabaseConnection) -> u64 {
    videoteka::models::sale::Entity::find()
        .count(db)
        .await
        .unwrap()
}

#[tokio::test]
async fn test_get_movie_not_found() {
    let (_, app) = setup_test_app().await;

    let req = Request::builder()
        .uri("/api/movies/999")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = read_json(response).await;
    assert_eq!(json["success"], false);
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_get_artist_not_found() {
    let (_, app) = setup_test_app().await;

    let req = Request::builder()
        .uri("/api/artists/999")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_purchase_unknown_movie() {
    let (db, app) = setup_test_app().await;

    let response = app
        .oneshot(purchase_request(
            999,
            json!({ "email": "demo@videoteka.local", "confirm": true }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(sale_count(&db).await, 0);
}

#[tokio::test]
async fn test_purchase_without_confirmation() {
    let (db, app) = setup_test_app().await;

    let response = app
        .oneshot(purchase_request(1, json!({ "email": "anna@example.ru" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(sale_count(&db).await, 0);

    // Nothing was written, including the email
    let user = videoteka::models::user::Entity::find_by_id(1)
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(user.email.as_deref(), Some("demo@videoteka.local"));
}

#[tokio::test]
async fn test_purchase_with_invalid_email() {
    let (db, app) = setup_test_app().await;

    let response = app
        .oneshot(purchase_request(
            1,
            json!({ "email": "not-an-email", "confirm": true }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(sale_count(&db).await, 0);
}

#[tokio::test]
async fn test_purchase_without_email_gets_json_error() {
    let (db, app) = setup_test_app().await;

    let response = app
        .oneshot(purchase_request(1, json!({ "confirm": true })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = read_json(response).await;
    assert_eq!(json["success"], false);
    assert!(json["error"].as_str().unwrap().contains("email"));
    assert_eq!(sale_count(&db).await, 0);
}

#[tokio::test]
async fn test_repeat_purchase_reports_conflict() {
    let (db, app) = setup_test_app().await;
    let payload = json!({ "email": "demo@videoteka.local", "confirm": true });

    let response = app
        .clone()
        .oneshot(purchase_request(2, payload.clone()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    // Second attempt is refused even without confirmation
    let response = app
        .oneshot(purchase_request(2, json!({ "email": "demo@videoteka.local" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = read_json(response).await;
    assert_eq!(json["success"], false);

    assert_eq!(sale_count(&db).await, 1);
}

#[tokio::test]
async fn test_profile_rejects_malformed_email() {
    let (_, app) = setup_test_app().await;

    let req = Request::builder()
        .method("POST")
        .uri("/api/profile")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {}", demo_token()))
        .body(Body::from(json!({ "email": "anna@localhost" }).to_string()))
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let (_, app) = setup_test_app().await;

    let req = Request::builder()
        .method("POST")
        .uri("/api/auth/register")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({ "username": "demo", "password": "another" }).to_string(),
        ))
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_register_short_password() {
    let (_, app) = setup_test_app().await;

    let req = Request::builder()
        .method("POST")
        .uri("/api/auth/register")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({ "username": "ivan", "password": "123" }).to_string(),
        ))
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
