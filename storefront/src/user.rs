//! Buyer profile, address book, and registration validation.
//!
//! B2B buyers register with a GST number; registration is what unlocks the
//! flat 12% wholesale discount. Validation lives here, not in the view
//! layer, so the rules are testable without a browser.

#[cfg(test)]
#[path = "user_test.rs"]
mod user_test;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{ADMIN_EMAIL, ADMIN_PASSWORD, REGISTERED_DISCOUNT_PERCENT};

/// A registered buyer. At most one is active; re-registration replaces the
/// whole record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub phone: String,
    /// GST tax identifier, validated by [`is_valid_gst`].
    pub gst: String,
    pub address: String,
    pub is_registered: bool,
    /// Percentage discount on every order; fixed at registration.
    pub discount: u32,
}

/// A saved delivery address. The address book is append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub address: String,
    pub gst: String,
    pub is_default: bool,
}

/// What the registration (and checkout address) form collects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub name: String,
    pub phone: String,
    pub gst: String,
    pub address: String,
}

/// Why a registration form was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all required fields")]
    MissingField,
    #[error("Please enter a valid GST number (e.g., 22AAAAA0000A1Z5)")]
    InvalidGst,
}

impl RegistrationForm {
    /// Validate the form and mint the registered buyer.
    ///
    /// The id is supplied by the caller (the client uses a clock-derived
    /// string, matching how carts and addresses are keyed).
    ///
    /// # Errors
    ///
    /// [`ValidationError::MissingField`] when name, phone, or address is
    /// blank; [`ValidationError::InvalidGst`] when the GST number does not
    /// match the 15-character format.
    pub fn into_user(self, id: String) -> Result<User, ValidationError> {
        if self.name.trim().is_empty()
            || self.phone.trim().is_empty()
            || self.address.trim().is_empty()
        {
            return Err(ValidationError::MissingField);
        }
        if !is_valid_gst(&self.gst) {
            return Err(ValidationError::InvalidGst);
        }
        Ok(User {
            id,
            name: self.name,
            phone: self.phone,
            gst: self.gst,
            address: self.address,
            is_registered: true,
            discount: REGISTERED_DISCOUNT_PERCENT,
        })
    }
}

/// Check the 15-character GST number format:
/// 2 digits, 5 uppercase letters, 4 digits, 1 uppercase letter,
/// 1 entity code (1-9 or A-Z), a literal `Z`, 1 checksum (digit or A-Z).
#[must_use]
pub fn is_valid_gst(gst: &str) -> bool {
    let bytes = gst.as_bytes();
    if bytes.len() != 15 {
        return false;
    }
    let digit = |b: u8| b.is_ascii_digit();
    let upper = |b: u8| b.is_ascii_uppercase();
    bytes[0..2].iter().all(|&b| digit(b))
        && bytes[2..7].iter().all(|&b| upper(b))
        && bytes[7..11].iter().all(|&b| digit(b))
        && upper(bytes[11])
        && (matches!(bytes[12], b'1'..=b'9') || upper(bytes[12]))
        && bytes[13] == b'Z'
        && (digit(bytes[14]) || upper(bytes[14]))
}

/// The client-side admin gate: a single hardcoded credential pair. Not a
/// security mechanism — it only toggles which views render.
#[must_use]
pub fn is_admin_credentials(email: &str, password: &str) -> bool {
    email == ADMIN_EMAIL && password == ADMIN_PASSWORD
}
