//! `stitchkart-core` — domain foundation building blocks.
//!
//! Pure domain primitives shared by every other crate: errors, strongly-typed
//! identifiers, money in minor units, and normalized contact value objects.
//! No IO, no HTTP, no storage.

pub mod contact;
pub mod error;
pub mod id;
pub mod money;

pub use contact::{Phone, Pincode};
pub use error::{DomainError, DomainResult};
pub use id::{CustomerId, OrderId, ProductId, VariantId};
pub use money::{MIN_CHARGEABLE, Paise};
