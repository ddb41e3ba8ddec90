use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stitchkart_core::{CustomerId, Phone, Pincode};

/// A persisted customer record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: Option<String>,
    pub phone: Phone,
    pub created_at: DateTime<Utc>,
}

/// Write model for creating a customer from submitted checkout details.
///
/// Used when an authenticated session has no linked customer record yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCustomer {
    pub name: String,
    pub email: Option<String>,
    pub phone: Phone,
    /// Session token to link the new record to, if any.
    pub session_token: Option<String>,
}

/// A normalized shipping address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub line1: String,
    pub line2: Option<String>,
    pub city: String,
    pub state: String,
    pub pincode: Pincode,
    pub country: String,
}

impl Address {
    /// Country applied when the caller omits one.
    pub const DEFAULT_COUNTRY: &'static str = "India";
}
