//! HTTP surface tests
//!
//! Drives the router in-process with `tower::ServiceExt::oneshot`.

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use pharma_assistant::{create_app, AppState, Config};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    create_app(AppState::new(Config::default()))
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };
    (status, body)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// Test liveness and status endpoints
    #[tokio::test]
    async fn test_health_endpoints() {
        let (status, body) = send(get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, Value::String("OK".to_string()));

        let (status, body) = send(get("/api/v1/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["intents"], 22);
    }

    /// Test the intent list contains the sale intents
    #[tokio::test]
    async fn test_list_intents() {
        let (status, body) = send(get("/api/v1/assistant/intents")).await;
        assert_eq!(status, StatusCode::OK);
        let intents: Vec<&str> = body["intents"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|v| v.as_str())
            .collect();
        assert!(intents.contains(&"addOrderItem"));
        assert!(intents.contains(&"createStockRequisition"));
    }

    /// Test dispatch returns the reply and emitted actions
    #[tokio::test]
    async fn test_dispatch_add_order_item() {
        let request = post_json(
            "/api/v1/assistant/dispatch",
            json!({
                "intent": "addOrderItem",
                "args": { "drugName": "پانادول", "quantity": 2 },
                "language": "en",
                "snapshot": {
                    "drugs": [{
                        "id": "8c7f7f4e-3c1a-4d1e-9a57-2f8b8f0f6a11",
                        "name": "Panadol",
                        "unitPrice": "25000",
                        "batches": [
                            { "lotNumber": "P-1", "quantity": 40, "expiryDate": "2029-01-01" }
                        ]
                    }],
                    "alertSettings": { "lowStock": { "enabled": false, "threshold": 5 } }
                }
            }),
        );
        let (status, body) = send(request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Added 2 x Panadol to the invoice.");
        assert_eq!(body["actions"][0]["type"], "ADD_ORDER_ITEM");
        assert_eq!(body["actions"][0]["payload"]["drugName"], "Panadol");
        assert_eq!(body["actions"][0]["payload"]["quantity"], 2);
        assert_eq!(body["requisitions"], json!([]));
    }

    /// Test unknown intents map to 404 with a fallback utterance
    #[tokio::test]
    async fn test_unknown_intent() {
        let (status, body) = send(post_json(
            "/api/v1/assistant/dispatch",
            json!({ "intent": "orderPizza", "args": {} }),
        ))
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "INTENT_NOT_UNDERSTOOD");
        assert!(body["error"]["message_fa"].as_str().unwrap().contains("متوجه"));
    }

    /// Test malformed args and empty intents are rejected
    #[tokio::test]
    async fn test_bad_requests() {
        let (status, body) = send(post_json(
            "/api/v1/assistant/dispatch",
            json!({ "intent": "addOrderItem", "args": [1, 2] }),
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "MALFORMED_ARGS");

        let (status, body) = send(post_json(
            "/api/v1/assistant/dispatch",
            json!({ "intent": "" }),
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["field"], "intent");
    }

    /// Test the normalize endpoint
    #[tokio::test]
    async fn test_normalize_endpoint() {
        let (status, body) = send(post_json(
            "/api/v1/assistant/normalize",
            json!({ "name": "آموکسی سیلین" }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["normalized"], "mksln");
    }
}
