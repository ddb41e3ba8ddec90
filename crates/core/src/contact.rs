//! Normalized contact value objects: phone numbers and pincodes.
//!
//! Both parse once at the boundary and are valid by construction afterwards.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// A 10-digit Indian mobile number, normalized.
///
/// Accepts input with separators and an optional leading `+91`/`91` country
/// prefix; anything that does not reduce to exactly 10 digits is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    pub fn normalize(input: &str) -> DomainResult<Self> {
        let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();

        // A 12-digit number can only be valid with the country prefix on it.
        let local = match digits.len() {
            12 if digits.starts_with("91") => &digits[2..],
            _ => digits.as_str(),
        };

        if local.len() != 10 {
            return Err(DomainError::validation(
                "phone must normalize to exactly 10 digits",
            ));
        }
        Ok(Self(local.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Phone {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A 6-digit Indian postal pincode.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pincode(String);

impl Pincode {
    pub fn normalize(input: &str) -> DomainResult<Self> {
        let trimmed = input.trim();
        if trimmed.len() != 6 || !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Err(DomainError::validation("pincode must be exactly 6 digits"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Pincode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_plus_and_country_prefix() {
        for input in ["+919876543210", "919876543210", "9876543210"] {
            assert_eq!(Phone::normalize(input).unwrap().as_str(), "9876543210");
        }
    }

    #[test]
    fn accepts_separators() {
        assert_eq!(
            Phone::normalize("+91 98765 43210").unwrap().as_str(),
            "9876543210"
        );
    }

    #[test]
    fn rejects_wrong_lengths() {
        assert!(Phone::normalize("987654321").is_err());
        assert!(Phone::normalize("98765432100").is_err());
        assert!(Phone::normalize("").is_err());
        // 12 digits without the country prefix is not a valid number.
        assert!(Phone::normalize("129876543210").is_err());
    }

    #[test]
    fn pincode_accepts_six_digits_only() {
        assert_eq!(Pincode::normalize("123456").unwrap().as_str(), "123456");
        assert_eq!(Pincode::normalize(" 560001 ").unwrap().as_str(), "560001");
        assert!(Pincode::normalize("12345").is_err());
        assert!(Pincode::normalize("abcdef").is_err());
        assert!(Pincode::normalize("1234567").is_err());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Any bare 10-digit number is already normalized.
            #[test]
            fn bare_ten_digits_pass_through(digits in "[0-9]{10}") {
                let phone = Phone::normalize(&digits).unwrap();
                prop_assert_eq!(phone.as_str(), digits.as_str());
            }

            /// Prefixing a valid number with +91 never changes the result.
            #[test]
            fn country_prefix_is_transparent(digits in "[0-9]{10}") {
                let bare = Phone::normalize(&digits).unwrap();
                let prefixed = Phone::normalize(&format!("+91{digits}")).unwrap();
                prop_assert_eq!(bare, prefixed);
            }

            /// Six digits always parse as a pincode; other lengths never do.
            #[test]
            fn pincode_length_is_strict(digits in "[0-9]{1,12}") {
                let parsed = Pincode::normalize(&digits);
                prop_assert_eq!(parsed.is_ok(), digits.len() == 6);
            }
        }
    }
}
