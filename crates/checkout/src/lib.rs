//! `stitchkart-checkout` — the checkout order sequencer.
//!
//! A single forward-only pipeline per request:
//! validate cart → validate stock (read-only) → validate fields → resolve
//! customer → price → create the external payment order → persist locally →
//! respond. One hard ordering constraint holds throughout: the gateway order
//! is created strictly before the local order row, so no persisted order can
//! ever lack its external payment reference.
//!
//! All collaborators (inventory, customers, orders, gateway) are injected
//! through traits, so tests run against in-process doubles.

pub mod error;
pub mod gateway;
pub mod request;
pub mod sequencer;
pub mod stores;

pub use error::CheckoutError;
pub use gateway::{GatewayError, GatewayNotes, GatewayOrder, GatewayOrderRequest, PaymentGateway};
pub use request::{CartLine, CheckoutRequest, CustomerDetails, ShippingAddress};
pub use sequencer::{CheckoutReceipt, CheckoutSequencer};
pub use stores::{CustomerStore, OrderStore, StoreError, VariantStore};
