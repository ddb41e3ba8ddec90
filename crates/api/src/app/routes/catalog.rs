//! Dev-only routes: seed variants and inspect persisted orders.
//!
//! Only available on the in-memory wiring; against Postgres these return 503
//! and catalog management happens outside this service.

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json, Router, routing::get, routing::post};
use serde_json::json;

use stitchkart_catalog::{Sku, Variant};
use stitchkart_core::{Paise, ProductId, VariantId};

use crate::app::dto::SeedVariantRequest;
use crate::app::errors::json_error;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/api/catalog/variants", post(seed_variant))
        .route("/api/orders", get(list_orders))
}

async fn seed_variant(
    Extension(services): Extension<Arc<AppServices>>,
    Json(request): Json<SeedVariantRequest>,
) -> Response {
    let Some(dev) = services.dev() else {
        return json_error(
            StatusCode::SERVICE_UNAVAILABLE,
            "not_available",
            "catalog seeding is only available with in-memory stores",
        );
    };

    let price = match Paise::from_rupees(request.price) {
        Ok(p) => p,
        Err(e) => return json_error(StatusCode::BAD_REQUEST, "validation_error", e.to_string()),
    };
    let cost = match Paise::from_rupees(request.cost) {
        Ok(p) => p,
        Err(e) => return json_error(StatusCode::BAD_REQUEST, "validation_error", e.to_string()),
    };

    let variant = Variant {
        id: VariantId::new(),
        sku: Sku::new(request.sku),
        stock: request.stock,
        price,
        cost,
        product_id: ProductId::new(),
    };
    dev.variants.upsert(variant.clone());

    (StatusCode::CREATED, Json(json!({ "variant": variant }))).into_response()
}

async fn list_orders(Extension(services): Extension<Arc<AppServices>>) -> Response {
    let Some(dev) = services.dev() else {
        return json_error(
            StatusCode::SERVICE_UNAVAILABLE,
            "not_available",
            "order inspection is only available with in-memory stores",
        );
    };

    Json(json!({ "orders": dev.orders.orders() })).into_response()
}
