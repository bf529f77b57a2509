//! Static currency table for the display layer.
//!
//! The pricing core is currency-agnostic and operates on a single unit of
//! account; these constants exist only so the presentation edge can convert
//! stored amounts for display. Rates are fixed business constants quoted in
//! units per Philippine peso, the shop's base currency. There is no live
//! exchange-rate source by design.

use crate::errors::{Error, Result};

/// A supported display currency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurrencyInfo {
    /// ISO 4217 currency code
    pub code: &'static str,
    /// Display symbol
    pub symbol: &'static str,
    /// Human-readable name
    pub name: &'static str,
    /// Exchange rate in units of this currency per PHP
    pub rate: f64,
}

/// The supported currencies, PHP first as the base.
pub const CURRENCIES: [CurrencyInfo; 5] = [
    CurrencyInfo {
        code: "PHP",
        symbol: "₱",
        name: "Philippine Peso",
        rate: 1.0,
    },
    CurrencyInfo {
        code: "USD",
        symbol: "$",
        name: "US Dollar",
        rate: 0.018,
    },
    CurrencyInfo {
        code: "EUR",
        symbol: "€",
        name: "Euro",
        rate: 0.016,
    },
    CurrencyInfo {
        code: "GBP",
        symbol: "£",
        name: "British Pound",
        rate: 0.014,
    },
    CurrencyInfo {
        code: "JPY",
        symbol: "¥",
        name: "Japanese Yen",
        rate: 2.6,
    },
];

/// Looks up a currency by its code.
#[must_use]
pub fn get(code: &str) -> Option<&'static CurrencyInfo> {
    CURRENCIES.iter().find(|c| c.code == code)
}

/// Converts an amount between two supported currencies.
///
/// With rates quoted in units per PHP, the conversion is
/// `amount * rate(to) / rate(from)`.
///
/// # Errors
/// Returns [`Error::UnknownCurrency`] if either code is not in the table.
pub fn convert(amount: f64, from: &str, to: &str) -> Result<f64> {
    let from = get(from).ok_or_else(|| Error::UnknownCurrency {
        code: from.to_string(),
    })?;
    let to = get(to).ok_or_else(|| Error::UnknownCurrency {
        code: to.to_string(),
    })?;

    Ok(amount * to.rate / from.rate)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;

    #[test]
    fn test_lookup_known_codes() {
        assert_eq!(get("PHP").unwrap().symbol, "₱");
        assert_eq!(get("USD").unwrap().rate, 0.018);
        assert_eq!(get("JPY").unwrap().name, "Japanese Yen");
        assert!(get("XYZ").is_none());
    }

    #[test]
    fn test_convert_same_currency_is_identity() {
        assert_eq!(convert(123.45, "PHP", "PHP").unwrap(), 123.45);
    }

    #[test]
    fn test_convert_from_base() {
        // 1000 PHP at 0.018 USD per PHP
        let usd = convert(1000.0, "PHP", "USD").unwrap();
        assert!((usd - 18.0).abs() < 1e-9);
    }

    #[test]
    fn test_convert_to_base() {
        // 18 USD back to PHP
        let php = convert(18.0, "USD", "PHP").unwrap();
        assert!((php - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn test_convert_cross_rate() {
        // USD -> JPY goes through the PHP base: 2.6 / 0.018
        let jpy = convert(1.0, "USD", "JPY").unwrap();
        assert!((jpy - 2.6 / 0.018).abs() < 1e-9);
    }

    #[test]
    fn test_convert_round_trip() {
        let amount = 537.25;
        let there = convert(amount, "PHP", "EUR").unwrap();
        let back = convert(there, "EUR", "PHP").unwrap();
        assert!((back - amount).abs() < 1e-9);
    }

    #[test]
    fn test_convert_unknown_currency() {
        assert!(matches!(
            convert(1.0, "XYZ", "PHP"),
            Err(Error::UnknownCurrency { code: _ })
        ));
        assert!(matches!(
            convert(1.0, "PHP", "XYZ"),
            Err(Error::UnknownCurrency { code: _ })
        ));
    }
}
