//! `stitchkart-infra` — adapters behind the checkout seams.
//!
//! In-memory stores for dev/test, Postgres stores for production, and the
//! Razorpay HTTP client. Everything here implements traits from
//! `stitchkart-checkout`; nothing here contains business rules.

pub mod memory;
pub mod postgres;
pub mod razorpay;

pub use memory::{
    InMemoryCustomerStore, InMemoryOrderStore, InMemoryVariantStore, StubPaymentGateway,
};
pub use postgres::{PostgresCustomerStore, PostgresOrderStore, PostgresVariantStore};
pub use razorpay::RazorpayGateway;
