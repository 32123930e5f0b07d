mod common;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use std::collections::HashSet;
use std::sync::Arc;
use tower::ServiceExt; // for .oneshot()

use common::MemOrderRepository;
use tienda_backend::router::order_router::order_router;

fn app() -> Router {
    Router::new().nest("/api", order_router(Arc::new(MemOrderRepository::default())))
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(resp: axum::response::Response) -> Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_create_order_then_get_returns_same_record() {
    let app = app();

    let payload = json!({
        "userId": "u1",
        "productIds": ["p1", "p2"],
        "orderDate": "2026-08-30T12:00:00+00:00",
        "totalAmount": 19.98,
        "status": "Pendiente"
    });
    let resp = app
        .clone()
        .oneshot(json_request("POST", "/api/pedidos", payload.clone()))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created = body_json(resp).await;
    let id = created["id"].as_str().expect("id missing").to_string();
    assert!(!id.is_empty());
    // Persisted verbatim: references, amount and status exactly as sent.
    for field in ["userId", "productIds", "orderDate", "totalAmount", "status"] {
        assert_eq!(created[field], payload[field], "field {} changed", field);
    }

    let resp = app
        .clone()
        .oneshot(get_request(&format!("/api/pedidos/{}", id)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, created);
}

#[tokio::test]
async fn test_order_date_is_stamped_when_missing() {
    let app = app();
    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/pedidos",
            json!({ "userId": "u1", "productIds": [], "totalAmount": 0.0, "status": "Pendiente" }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created = body_json(resp).await;
    assert!(created["orderDate"].as_str().is_some_and(|d| !d.is_empty()));
}

#[tokio::test]
async fn test_list_by_user_returns_exactly_matching_orders() {
    let app = app();

    let mut u1_ids = HashSet::new();
    for (user, amount) in [("u1", 10.0), ("u1", 20.0), ("u2", 30.0)] {
        let resp = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/pedidos",
                json!({ "userId": user, "productIds": ["p1"], "totalAmount": amount, "status": "Pendiente" }),
            ))
            .await
            .unwrap();
        let created = body_json(resp).await;
        if user == "u1" {
            u1_ids.insert(created["id"].as_str().unwrap().to_string());
        }
    }

    let resp = app
        .clone()
        .oneshot(get_request("/api/pedidos/usuario/u1"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let orders = body_json(resp).await;
    let listed: HashSet<String> = orders
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(listed, u1_ids);
}

#[tokio::test]
async fn test_list_by_user_with_no_orders_is_200_with_empty_array() {
    let app = app();
    let resp = app
        .oneshot(get_request("/api/pedidos/usuario/nadie"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!([]));
}

#[tokio::test]
async fn test_get_missing_order_is_404_with_empty_body() {
    let app = app();
    let missing = bson::oid::ObjectId::new().to_hex();
    let resp = app
        .oneshot(get_request(&format!("/api/pedidos/{}", missing)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    assert!(bytes.is_empty());
}
