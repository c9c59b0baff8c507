//! Output formatting helpers.

use chrono::{DateTime, Local, TimeDelta, Utc};
use fxcache_types::CurrencyCode;

/// Renders a timestamp in the device's local timezone.
pub fn format_local(timestamp: DateTime<Utc>) -> String {
    timestamp
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M")
        .to_string()
}

/// Rough human-readable age, for status output.
pub fn format_age(age: TimeDelta) -> String {
    if age < TimeDelta::minutes(1) {
        "less than a minute".to_string()
    } else if age < TimeDelta::hours(1) {
        format!("{} min", age.num_minutes())
    } else if age < TimeDelta::days(1) {
        format!("{} h", age.num_hours())
    } else {
        format!("{} d", age.num_days())
    }
}

/// Full display name for the commonly traded codes; unknown codes are shown
/// bare.
pub fn currency_name(code: &CurrencyCode) -> Option<&'static str> {
    let name = match code.as_str() {
        "AUD" => "Australian Dollar",
        "USD" => "US Dollar",
        "GBP" => "British Pound",
        "CAD" => "Canadian Dollar",
        "JPY" => "Japanese Yen",
        "CNY" => "Chinese Yuan",
        "INR" => "Indian Rupee",
        "EUR" => "Euro",
        "CHF" => "Swiss Franc",
        "SEK" => "Swedish Krona",
        "NOK" => "Norwegian Krone",
        "DKK" => "Danish Krone",
        "PLN" => "Polish Zloty",
        "TRY" => "Turkish Lira",
        "KRW" => "South Korean Won",
        "SGD" => "Singapore Dollar",
        "HKD" => "Hong Kong Dollar",
        "THB" => "Thai Baht",
        "MYR" => "Malaysian Ringgit",
        "IDR" => "Indonesian Rupiah",
        "PHP" => "Philippine Peso",
        "VND" => "Vietnamese Dong",
        "NZD" => "New Zealand Dollar",
        "BRL" => "Brazilian Real",
        "MXN" => "Mexican Peso",
        "ZAR" => "South African Rand",
        "AED" => "UAE Dirham",
        "CZK" => "Czech Koruna",
        "HUF" => "Hungarian Forint",
        _ => return None,
    };
    Some(name)
}
