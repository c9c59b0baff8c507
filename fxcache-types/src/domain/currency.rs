//! ISO-4217-like currency codes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// An ISO-4217-like currency code ("USD", "AUD", ...).
///
/// The remote rate table is an open set - providers add and drop currencies
/// without notice - so this is a validated string, not a closed enum.
/// The stored form is always uppercase ASCII letters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// The conventional reference currency rate tables are quoted against.
    pub fn usd() -> Self {
        CurrencyCode("USD".to_string())
    }

    /// Returns the code as an uppercase string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let code = value.trim().to_ascii_uppercase();
        let valid = (2..=8).contains(&code.len()) && code.bytes().all(|b| b.is_ascii_uppercase());
        if valid {
            Ok(CurrencyCode(code))
        } else {
            Err(format!("invalid currency code: {value:?}"))
        }
    }
}

impl FromStr for CurrencyCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CurrencyCode::try_from(s.to_string())
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
