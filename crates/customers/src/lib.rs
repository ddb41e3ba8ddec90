//! Customers domain module: customer records, shipping addresses, and the
//! identity a checkout request arrives with.

pub mod customer;
pub mod identity;

pub use customer::{Address, Customer, NewCustomer};
pub use identity::CheckoutSource;
