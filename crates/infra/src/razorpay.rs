//! Razorpay create-order client.
//!
//! Covers exactly what the checkout pipeline needs: `POST /v1/orders` with
//! basic auth. Capture, refunds, and webhooks are handled elsewhere.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use stitchkart_checkout::{GatewayError, GatewayOrder, GatewayOrderRequest, PaymentGateway};

const DEFAULT_BASE_URL: &str = "https://api.razorpay.com";

#[derive(Debug, Serialize)]
struct CreateOrderBody<'a> {
    /// Amount in paise.
    amount: u64,
    currency: &'a str,
    receipt: &'a str,
    notes: CreateOrderNotes<'a>,
}

#[derive(Debug, Serialize)]
struct CreateOrderNotes<'a> {
    order_number: &'a str,
    customer_name: &'a str,
    customer_phone: &'a str,
}

#[derive(Debug, Deserialize)]
struct CreateOrderResponse {
    #[serde(default)]
    id: String,
    #[serde(default)]
    amount: u64,
    #[serde(default)]
    currency: String,
    #[serde(default)]
    status: String,
}

/// Razorpay HTTP client.
///
/// The key id doubles as the public key the client-side payment widget uses.
pub struct RazorpayGateway {
    http: reqwest::Client,
    key_id: String,
    key_secret: String,
    base_url: String,
}

impl RazorpayGateway {
    pub fn new(key_id: impl Into<String>, key_secret: impl Into<String>) -> Self {
        Self::with_base_url(key_id, key_secret, DEFAULT_BASE_URL)
    }

    /// Point the client at a different host (test server).
    pub fn with_base_url(
        key_id: impl Into<String>,
        key_secret: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            key_id: key_id.into(),
            key_secret: key_secret.into(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl PaymentGateway for RazorpayGateway {
    async fn create_order(
        &self,
        request: &GatewayOrderRequest,
    ) -> Result<GatewayOrder, GatewayError> {
        let body = CreateOrderBody {
            amount: request.amount.as_u64(),
            currency: &request.currency,
            receipt: request.receipt.as_str(),
            notes: CreateOrderNotes {
                order_number: request.notes.order_number.as_str(),
                customer_name: &request.notes.customer_name,
                customer_phone: request.notes.customer_phone.as_str(),
            },
        };

        let response = self
            .http
            .post(format!("{}/v1/orders", self.base_url))
            .basic_auth(&self.key_id, Some(&self.key_secret))
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(GatewayError::Rejected(format!("{status}: {detail}")));
        }

        let created: CreateOrderResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::Request(format!("invalid response body: {e}")))?;

        if created.id.is_empty() {
            return Err(GatewayError::MissingOrderId);
        }

        Ok(GatewayOrder {
            id: created.id,
            amount: created.amount,
            currency: created.currency,
            status: created.status,
        })
    }

    fn provider(&self) -> &str {
        "razorpay"
    }

    fn public_key(&self) -> &str {
        &self.key_id
    }
}
