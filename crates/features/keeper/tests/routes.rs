use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;
use zoo_domain::config::ApiConfig;
use zoo_kernel::server::ApiState;

fn app() -> Router {
    let state = ApiState::builder()
        .config(ApiConfig::default())
        .register_slice(zoo_keeper::init(&ApiConfig::default()).unwrap())
        .build()
        .unwrap();

    zoo_keeper::router().with_state(state).split_for_parts().0
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
    (status, body)
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn post_text(uri: &str, body: &str) -> Request<Body> {
    Request::post(uri).body(Body::from(body.to_owned())).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

async fn create_animal(app: &Router, name: &str, kind: &str) {
    let (status, _) = send(app, post_json("/animals", &json!({ "name": name, "type": kind }))).await;
    assert_eq!(status, StatusCode::CREATED);
}

async fn create_habitat(app: &Router, name: &str, terrain: &str) {
    let (status, _) =
        send(app, post_json("/habitats", &json!({ "name": name, "terrainType": terrain }))).await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn create_then_fetch_all() {
    let app = app();

    let (status, created) = send(
        &app,
        post_json("/animals", &json!({ "name": "monkey", "type": "WALKING", "mood": "HAPPY" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["mood"], "UNHAPPY");

    let (status, body) = send(&app, get("/animals")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{ "name": "monkey", "type": "WALKING", "mood": "UNHAPPY", "habitat": null }])
    );
}

#[tokio::test]
async fn duplicate_animal_is_a_conflict() {
    let app = app();
    create_animal(&app, "monkey", "WALKING").await;

    let (status, body) =
        send(&app, post_json("/animals", &json!({ "name": "monkey", "type": "WALKING" }))).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "CONFLICT");
    assert_eq!(body["message"], "Conflict (animals): 'monkey' already exists");
    assert_eq!(send(&app, get("/animals")).await.1.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn blank_or_malformed_bodies_are_bad_requests() {
    let app = app();

    let (status, body) =
        send(&app, post_json("/animals", &json!({ "name": "  ", "type": "WALKING" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION");

    let (status, body) =
        send(&app, post_json("/animals", &json!({ "name": "dodo", "type": "EXTINCT" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION");
}

#[tokio::test]
async fn feed() {
    let app = app();
    create_animal(&app, "monkey", "WALKING").await;

    let (status, body) = send(&app, post_text("/animals/monkey/feed", "")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["mood"], "HAPPY");

    let (status, body) = send(&app, post_text("/animals/tiger/feed", "")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn move_into_compatible_habitat() {
    let app = app();
    create_animal(&app, "monkey", "WALKING").await;
    create_habitat(&app, "Monkey's Jungle", "FOREST").await;

    let (status, body) = send(&app, post_text("/animals/monkey/move", "Monkey's Jungle\n")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["habitat"], json!({ "name": "Monkey's Jungle", "terrainType": "FOREST" }));
    let (_, habitats) = send(&app, get("/habitats")).await;
    assert_eq!(
        habitats,
        json!([{ "name": "Monkey's Jungle", "terrainType": "FOREST", "resident": "monkey" }])
    );
}

#[tokio::test]
async fn move_incompatible() {
    let app = app();
    create_animal(&app, "eagle", "FLYING").await;
    create_habitat(&app, "Monkey's Jungle", "FOREST").await;
    send(&app, post_text("/animals/eagle/feed", "")).await;

    let (status, body) = send(&app, post_text("/animals/eagle/move", "Monkey's Jungle")).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "CONFLICT");

    let (_, animals) = send(&app, get("/animals")).await;
    assert_eq!(animals[0]["mood"], "UNHAPPY");
    assert_eq!(animals[0]["habitat"], Value::Null);
}

#[tokio::test]
async fn move_occupied() {
    let app = app();
    create_animal(&app, "monkey", "WALKING").await;
    create_animal(&app, "chimp", "WALKING").await;
    create_habitat(&app, "Monkey's Jungle", "FOREST").await;
    send(&app, post_text("/animals/monkey/move", "Monkey's Jungle")).await;

    let (status, _) = send(&app, post_text("/animals/chimp/move", "Monkey's Jungle")).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (_, animals) = send(&app, get("/animals")).await;
    assert_eq!(animals[0]["name"], "monkey");
    assert_eq!(animals[0]["habitat"]["name"], "Monkey's Jungle");
    assert_eq!(animals[1]["name"], "chimp");
    assert_eq!(animals[1]["habitat"], Value::Null);
    assert_eq!(animals[1]["mood"], "UNHAPPY");
}

#[tokio::test]
async fn move_to_missing_habitat() {
    let app = app();
    create_animal(&app, "monkey", "WALKING").await;

    let (status, body) = send(&app, post_text("/animals/monkey/move", "Atlantis")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Not found: habitat 'Atlantis'");
}

#[tokio::test]
async fn move_with_non_utf8_body_is_a_json_validation_error() {
    let app = app();
    create_animal(&app, "monkey", "WALKING").await;

    let request = Request::post("/animals/monkey/move")
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from(vec![0xff, 0xfe]))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok()),
        Some("application/json")
    );
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"], "VALIDATION");

    let (_, animals) = send(&app, get("/animals")).await;
    assert_eq!(animals[0]["habitat"], Value::Null);
}

#[tokio::test]
async fn fetch_with_params() {
    let app = app();
    create_animal(&app, "monkey", "WALKING").await;
    create_animal(&app, "eagle", "FLYING").await;
    create_animal(&app, "chimp", "WALKING").await;
    send(&app, post_text("/animals/chimp/feed", "")).await;
    send(&app, post_text("/animals/eagle/feed", "")).await;

    let (status, body) = send(&app, get("/animals?mood=HAPPY&type=WALKING")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([{ "name": "chimp", "type": "WALKING", "mood": "HAPPY", "habitat": null }]));

    let (status, body) = send(&app, get("/animals?mood=SLEEPY")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION");
}

#[tokio::test]
async fn duplicate_habitat_is_a_conflict() {
    let app = app();
    create_habitat(&app, "Lagoon", "AQUATIC").await;

    let (status, _) =
        send(&app, post_json("/habitats", &json!({ "name": "Lagoon", "terrainType": "DESERT" })))
            .await;
    assert_eq!(status, StatusCode::CONFLICT);
}
