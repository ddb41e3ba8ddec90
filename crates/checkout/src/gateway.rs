//! Payment gateway seam.
//!
//! The sequencer only ever creates gateway orders; capture, refunds, and
//! webhooks live outside this pipeline.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use stitchkart_core::{Paise, Phone};
use stitchkart_orders::OrderNumber;

/// Create-order call payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayOrderRequest {
    /// Amount in the smallest currency unit (paise).
    pub amount: Paise,
    pub currency: String,
    /// Our order number, echoed back by the gateway as the receipt.
    pub receipt: OrderNumber,
    pub notes: GatewayNotes,
}

/// Free-form notes attached to the gateway order for reconciliation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayNotes {
    pub order_number: OrderNumber,
    pub customer_name: String,
    pub customer_phone: Phone,
}

/// The gateway's view of a created order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayOrder {
    pub id: String,
    pub amount: u64,
    pub currency: String,
    pub status: String,
}

#[derive(Debug, Error)]
pub enum GatewayError {
    /// The request never completed (network, timeout, TLS).
    #[error("gateway request failed: {0}")]
    Request(String),

    /// The gateway answered with an error status.
    #[error("gateway rejected the order: {0}")]
    Rejected(String),

    /// The gateway answered success but the order id was missing or empty.
    #[error("gateway returned no order id")]
    MissingOrderId,
}

/// External payment gateway.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create an external payment order. Must not have local side effects.
    async fn create_order(&self, request: &GatewayOrderRequest)
    -> Result<GatewayOrder, GatewayError>;

    /// Gateway name reported to the payment widget (e.g. "razorpay").
    fn provider(&self) -> &str;

    /// Public key the client-side payment widget needs.
    fn public_key(&self) -> &str;
}

#[async_trait]
impl<G> PaymentGateway for Arc<G>
where
    G: PaymentGateway + ?Sized,
{
    async fn create_order(
        &self,
        request: &GatewayOrderRequest,
    ) -> Result<GatewayOrder, GatewayError> {
        (**self).create_order(request).await
    }

    fn provider(&self) -> &str {
        (**self).provider()
    }

    fn public_key(&self) -> &str {
        (**self).public_key()
    }
}
