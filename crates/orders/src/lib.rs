//! Orders domain module: the persisted order aggregate and its write models.
//!
//! Orders are created exactly once by the checkout pipeline and never updated
//! by it; payment and shipping webhooks mutate the status fields later,
//! outside this crate.

pub mod number;
pub mod order;

pub use number::OrderNumber;
pub use order::{
    NewOrder, NewOrderLineItem, OrderMetadata, OrderStatus, OrderTotals, PaymentStatus,
    PricedItemSnapshot, ShippingStatus,
};
