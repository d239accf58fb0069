//! HTTP contract tests: the full router driven through `tower::oneshot`
//! against an in-memory store.

use std::sync::Arc;

use axum::{
  Router,
  body::{Body, to_bytes},
  http::{Method, Request, StatusCode, header::CONTENT_TYPE},
  routing::get,
};
use serde_json::{Value, json};
use showlog_store_json::JsonStore;
use tower::ServiceExt as _;

fn app() -> Router {
  Router::new()
    .route("/health", get(showlog_api::health))
    .nest("/api", showlog_api::api_router(Arc::new(JsonStore::open_in_memory())))
}

async fn send(
  app: &Router,
  method: Method,
  path: &str,
  body: Option<Value>,
) -> (StatusCode, Value) {
  let builder = Request::builder().method(method).uri(path);
  let request = match body {
    Some(v) => builder
      .header(CONTENT_TYPE, "application/json")
      .body(Body::from(v.to_string()))
      .unwrap(),
    None => builder.body(Body::empty()).unwrap(),
  };

  let response = app.clone().oneshot(request).await.unwrap();
  let status = response.status();
  let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
  let value = if bytes.is_empty() {
    Value::Null
  } else {
    serde_json::from_slice(&bytes).unwrap()
  };
  (status, value)
}

#[tokio::test]
async fn health_reports_ok() {
  let (status, body) = send(&app(), Method::GET, "/health", None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body, json!({ "ok": true }));
}

#[tokio::test]
async fn create_returns_201_with_the_full_record() {
  let (status, body) = send(
    &app(),
    Method::POST,
    "/api/events",
    Some(json!({ "title": "Tosca", "venue": "AKM" })),
  )
  .await;

  assert_eq!(status, StatusCode::CREATED);
  assert_eq!(body["title"], "Tosca");
  assert_eq!(body["venue"], "AKM");
  assert_eq!(body["category"], "Tiyatro");
  assert_eq!(body["photos"], "");
  assert_eq!(body["senaRating"], 0);
  assert_eq!(body["merveReview"], "");
  assert!(!body["id"].as_str().unwrap().is_empty());
  assert!(!body["createdAt"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn create_without_title_is_400() {
  let app = app();
  let (status, body) =
    send(&app, Method::POST, "/api/events", Some(json!({ "venue": "AKM" })))
      .await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert!(body["error"].is_string());

  let (_, listed) = send(&app, Method::GET, "/api/events", None).await;
  assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn put_merges_into_the_stored_record() {
  let app = app();
  let (_, created) = send(
    &app,
    Method::POST,
    "/api/events",
    Some(json!({ "title": "Tosca" })),
  )
  .await;
  let id = created["id"].as_str().unwrap();

  let (status, merged) = send(
    &app,
    Method::PUT,
    &format!("/api/events/{id}"),
    Some(json!({ "hanneReview": "büyüleyici", "photos": "a.jpg|||b.jpg" })),
  )
  .await;

  assert_eq!(status, StatusCode::OK);
  assert_eq!(merged["id"], created["id"]);
  assert_eq!(merged["title"], "Tosca");
  assert_eq!(merged["hanneReview"], "büyüleyici");
  assert_eq!(merged["photos"], "a.jpg|||b.jpg");
  assert_eq!(merged["senaReview"], "");
}

#[tokio::test]
async fn put_unknown_id_is_404() {
  let (status, body) = send(
    &app(),
    Method::PUT,
    "/api/events/nonexistent",
    Some(json!({ "title": "nope" })),
  )
  .await;
  assert_eq!(status, StatusCode::NOT_FOUND);
  assert!(body["error"].is_string());
}

#[tokio::test]
async fn delete_returns_ok_true_and_is_permanent() {
  let app = app();
  let (_, created) = send(
    &app,
    Method::POST,
    "/api/events",
    Some(json!({ "title": "silinecek" })),
  )
  .await;
  let id = created["id"].as_str().unwrap().to_string();

  let (status, body) =
    send(&app, Method::DELETE, &format!("/api/events/{id}"), None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body, json!({ "ok": true }));

  let (status, _) =
    send(&app, Method::DELETE, &format!("/api/events/{id}"), None).await;
  assert_eq!(status, StatusCode::NOT_FOUND);

  let (_, listed) = send(&app, Method::GET, "/api/events", None).await;
  assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn list_is_sorted_newest_first() {
  let app = app();
  for title in ["eski", "orta", "yeni"] {
    send(&app, Method::POST, "/api/events", Some(json!({ "title": title })))
      .await;
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
  }

  let (status, listed) = send(&app, Method::GET, "/api/events", None).await;
  assert_eq!(status, StatusCode::OK);
  let titles: Vec<_> = listed
    .as_array()
    .unwrap()
    .iter()
    .map(|e| e["title"].as_str().unwrap())
    .collect();
  assert_eq!(titles, ["yeni", "orta", "eski"]);
}

#[tokio::test]
async fn rating_out_of_range_is_400() {
  let app = app();
  let (_, created) = send(
    &app,
    Method::POST,
    "/api/events",
    Some(json!({ "title": "Tosca" })),
  )
  .await;
  let id = created["id"].as_str().unwrap();

  let (status, body) = send(
    &app,
    Method::PUT,
    &format!("/api/events/{id}"),
    Some(json!({ "senaRating": 6 })),
  )
  .await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert!(body["error"].as_str().unwrap().contains("rating"));
}
