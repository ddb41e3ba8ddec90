use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json, Router, routing::post};

use stitchkart_checkout::CheckoutRequest;

use crate::app::dto::receipt_to_json;
use crate::app::errors::checkout_error_to_response;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new().route("/api/checkout", post(create_checkout))
}

async fn create_checkout(
    Extension(services): Extension<Arc<AppServices>>,
    Json(request): Json<CheckoutRequest>,
) -> Response {
    match services.sequencer().execute(request).await {
        Ok(receipt) => (StatusCode::CREATED, Json(receipt_to_json(&receipt))).into_response(),
        Err(err) => checkout_error_to_response(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::body::Body;
    use axum::http::Request;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use stitchkart_catalog::{Sku, Variant};
    use stitchkart_core::{Paise, ProductId, VariantId};
    use stitchkart_infra::StubPaymentGateway;

    fn seeded_app() -> (Router, Arc<AppServices>) {
        let services = Arc::new(AppServices::in_memory_with_gateway(Arc::new(
            StubPaymentGateway::default(),
        )));
        let dev = services.dev().unwrap();
        dev.variants.upsert(Variant {
            id: VariantId::new(),
            sku: Sku::new("TS-BLK-M"),
            stock: Some(10),
            price: Paise::new(50_000),
            cost: Paise::new(30_000),
            product_id: ProductId::new(),
        });
        (crate::app::router(services.clone()), services)
    }

    fn checkout_body(quantity: u32) -> Value {
        json!({
            "customer": {
                "name": "Asha Rao",
                "email": "asha@example.com",
                "phone": "+91 98765 43210",
            },
            "address": {
                "line1": "12 MG Road",
                "city": "Bengaluru",
                "state": "Karnataka",
                "pincode": "560001",
            },
            "items": [{
                "sku": "TS-BLK-M",
                "product_id": ProductId::new(),
                "name": "Black Tee",
                "size": "M",
                "quantity": quantity,
                "price": 500.0,
            }],
        })
    }

    async fn post_checkout(app: Router, body: Value) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/checkout")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn successful_checkout_returns_created_with_receipt() {
        let (app, services) = seeded_app();

        let (status, body) = post_checkout(app, checkout_body(2)).await;

        assert_eq!(status, StatusCode::CREATED);
        assert!(body["order_number"].as_str().unwrap().starts_with("SK"));
        assert_eq!(body["amount_paise"], 100_000);
        assert_eq!(body["total"], 1000.0);
        assert_eq!(body["gateway_order_id"], "order_stub00000001");
        assert_eq!(body["gateway_public_key"], "rzp_test_stub");

        let orders = services.dev().unwrap().orders.orders();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].gateway_order_id, "order_stub00000001");
    }

    #[tokio::test]
    async fn insufficient_stock_returns_conflict() {
        let (app, _services) = seeded_app();

        let (status, body) = post_checkout(app, checkout_body(11)).await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"], "stock_conflict");
        let failures = body["failures"].as_array().unwrap();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0]["sku"], "TS-BLK-M");
        assert_eq!(failures[0]["requested_quantity"], 11);
        assert_eq!(failures[0]["available_quantity"], 10);
    }

    #[tokio::test]
    async fn invalid_phone_returns_validation_error() {
        let (app, services) = seeded_app();

        let mut body = checkout_body(1);
        body["customer"]["phone"] = json!("12345");
        let (status, body) = post_checkout(app, body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "validation_error");
        assert_eq!(body["field"], "phone");
        assert!(services.dev().unwrap().orders.orders().is_empty());
    }

    #[tokio::test]
    async fn empty_cart_returns_validation_error() {
        let (app, _services) = seeded_app();

        let mut body = checkout_body(1);
        body["items"] = json!([]);
        let (status, body) = post_checkout(app, body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "validation_error");
        assert_eq!(body["field"], "items");
    }
}
