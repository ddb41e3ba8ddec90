use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use stitchkart_checkout::CheckoutError;

/// Map a checkout error to its HTTP shape.
///
/// Dependency and store failures are surfaced generically; their detail goes
/// to the logs, not to the caller.
pub fn checkout_error_to_response(err: CheckoutError) -> axum::response::Response {
    match err {
        CheckoutError::Validation { field, message } => (
            StatusCode::BAD_REQUEST,
            axum::Json(json!({
                "error": "validation_error",
                "field": field,
                "message": message,
            })),
        )
            .into_response(),
        CheckoutError::StockConflict(failures) => (
            StatusCode::CONFLICT,
            axum::Json(json!({
                "error": "stock_conflict",
                "failures": failures,
            })),
        )
            .into_response(),
        CheckoutError::AmountBelowMinimum { total, minimum } => (
            StatusCode::BAD_REQUEST,
            axum::Json(json!({
                "error": "amount_below_minimum",
                "total_paise": total.as_u64(),
                "minimum_paise": minimum.as_u64(),
            })),
        )
            .into_response(),
        CheckoutError::Gateway(e) => {
            tracing::error!(error = %e, "checkout failed at the payment gateway");
            json_error(
                StatusCode::BAD_GATEWAY,
                "gateway_error",
                "payment gateway unavailable",
            )
        }
        CheckoutError::Store(e) => {
            tracing::error!(error = %e, "checkout failed at the store layer");
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "store_error",
                "internal storage failure",
            )
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
