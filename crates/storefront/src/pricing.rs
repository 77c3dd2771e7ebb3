//! Pricing calculator: pure derivation of order totals.
//!
//! Given a set of resolved lines (unit price × quantity) and a
//! [`PricingPolicy`], derives subtotal, shipping, tax, and grand total. No
//! side effects and no rounding: amounts stay exact decimals until they cross
//! the serialization boundary.

use rust_decimal::Decimal;

/// Shipping and tax policy.
///
/// The defaults mirror the checkout policy of the storefront client: free
/// shipping from a 50-unit subtotal, a 5.99 flat fee below it, and an 8% tax
/// rate. All three are configurable through the environment (see
/// [`crate::config`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingPolicy {
    /// Subtotal at or above which shipping is free.
    pub free_shipping_threshold: Decimal,
    /// Flat shipping fee charged below the threshold.
    pub shipping_flat_fee: Decimal,
    /// Tax rate applied to the subtotal.
    pub tax_rate: Decimal,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            free_shipping_threshold: Decimal::new(50, 0),
            shipping_flat_fee: Decimal::new(599, 2),
            tax_rate: Decimal::new(8, 2),
        }
    }
}

/// A single line with its resolved unit price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricedLine {
    /// Unit price of the resolved product.
    pub unit_price: Decimal,
    /// Number of units.
    pub quantity: u32,
}

/// Derived totals for a set of lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub tax: Decimal,
    pub grand_total: Decimal,
}

/// Sum of `unit_price × quantity` over all lines.
#[must_use]
pub fn subtotal(lines: impl IntoIterator<Item = PricedLine>) -> Decimal {
    lines
        .into_iter()
        .map(|line| line.unit_price * Decimal::from(line.quantity))
        .sum()
}

/// Derive the full quote for a set of lines under a policy.
#[must_use]
pub fn quote(policy: &PricingPolicy, lines: impl IntoIterator<Item = PricedLine>) -> Quote {
    let subtotal = subtotal(lines);
    let shipping = if subtotal >= policy.free_shipping_threshold {
        Decimal::ZERO
    } else {
        policy.shipping_flat_fee
    };
    let tax = subtotal * policy.tax_rate;
    let grand_total = subtotal + shipping + tax;

    Quote {
        subtotal,
        shipping,
        tax,
        grand_total,
    }
}
