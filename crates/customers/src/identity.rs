use serde::{Deserialize, Serialize};

/// How the caller authenticated before checking out.
///
/// `Account` and `Otp` are authenticated flows: their session may carry a
/// linked customer record, and one is created on the fly if it does not.
/// Everything else checks out as a guest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckoutSource {
    Account,
    Otp,
    Guest,
}

impl CheckoutSource {
    /// Parse the free-form source tag sent by the storefront.
    ///
    /// Unknown or absent tags fall back to guest, never to an error: the tag
    /// is advisory and must not fail a checkout.
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some("account") => Self::Account,
            Some("otp") => Self::Otp,
            _ => Self::Guest,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Account | Self::Otp)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Account => "account",
            Self::Otp => "otp",
            Self::Guest => "guest",
        }
    }
}
