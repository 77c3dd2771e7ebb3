//! Monetary values and their JSON representation.
//!
//! All monetary amounts are [`rust_decimal::Decimal`] end to end; rounding to
//! two decimal places happens only at the serialization boundary, never in
//! intermediate arithmetic, so rounding error cannot compound across the
//! subtotal/shipping/tax pipeline.

use rust_decimal::{Decimal, RoundingStrategy};

/// Round an amount for presentation (2 decimal places, midpoint away from
/// zero, matching `Number.prototype.toFixed`).
#[must_use]
pub fn round_display(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Serde adapter serializing a [`Decimal`] as a 2-decimal string.
///
/// `"54.00"` rather than `54` - the JSON shape the storefront client expects
/// for totals and unit prices.
///
/// # Example
///
/// ```rust
/// use rust_decimal::Decimal;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Total {
///     #[serde(with = "ss_stores_core::types::money::serde_2dp")]
///     total: Decimal,
/// }
///
/// let json = serde_json::to_string(&Total { total: Decimal::new(54, 0) }).unwrap();
/// assert_eq!(json, r#"{"total":"54.00"}"#);
/// ```
pub mod serde_2dp {
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer, Serializer, de};

    /// Serialize as a string with exactly two decimal places.
    ///
    /// # Errors
    ///
    /// Propagates serializer errors.
    pub fn serialize<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{:.2}", super::round_display(*value)))
    }

    /// Deserialize from the string form produced by [`serialize`].
    ///
    /// # Errors
    ///
    /// Returns a deserialization error if the input is not a decimal string.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<Decimal>().map_err(de::Error::custom)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize)]
    struct Wrapper {
        #[serde(with = "serde_2dp")]
        amount: Decimal,
    }

    #[test]
    fn test_round_display_pads_and_rounds() {
        assert_eq!(round_display(Decimal::new(54, 0)), Decimal::new(54, 0));
        // 1.005 -> 1.01 (away from zero, toFixed-style)
        assert_eq!(round_display(Decimal::new(1005, 3)), Decimal::new(101, 2));
    }

    #[test]
    fn test_serialize_whole_number_gets_two_places() {
        let json = serde_json::to_string(&Wrapper {
            amount: Decimal::new(50, 0),
        })
        .unwrap();
        assert_eq!(json, r#"{"amount":"50.00"}"#);
    }

    #[test]
    fn test_serialize_rounds_long_fraction() {
        let json = serde_json::to_string(&Wrapper {
            amount: Decimal::new(59990, 4), // 5.9990
        })
        .unwrap();
        assert_eq!(json, r#"{"amount":"6.00"}"#);
    }

    #[test]
    fn test_deserialize_roundtrip() {
        let back: Wrapper = serde_json::from_str(r#"{"amount":"54.00"}"#).unwrap();
        assert_eq!(back.amount, Decimal::new(5400, 2));
    }

    #[test]
    fn test_deserialize_rejects_non_decimal() {
        let result: Result<Wrapper, _> = serde_json::from_str(r#"{"amount":"lots"}"#);
        assert!(result.is_err());
    }
}
