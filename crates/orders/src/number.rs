//! Human-readable order numbers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Order number shown to customers and sent to the gateway as the receipt
/// reference, e.g. `SK20260829A3F91B`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderNumber(String);

impl OrderNumber {
    /// Generate a number from the order date plus a random suffix.
    ///
    /// The suffix comes from a v4 UUID, so collisions within a day are
    /// vanishingly unlikely but not impossible; the database unique index on
    /// the column is the backstop.
    pub fn generate(at: DateTime<Utc>) -> Self {
        let suffix: String = Uuid::new_v4()
            .simple()
            .to_string()
            .chars()
            .take(6)
            .collect::<String>()
            .to_uppercase();
        Self(format!("SK{}{}", at.format("%Y%m%d"), suffix))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for OrderNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for OrderNumber {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn embeds_the_order_date() {
        let at = Utc.with_ymd_and_hms(2026, 8, 29, 10, 0, 0).unwrap();
        let number = OrderNumber::generate(at);
        assert!(number.as_str().starts_with("SK20260829"));
        assert_eq!(number.as_str().len(), "SK20260829".len() + 6);
    }

    #[test]
    fn suffix_varies_between_calls() {
        let at = Utc::now();
        assert_ne!(OrderNumber::generate(at), OrderNumber::generate(at));
    }
}
