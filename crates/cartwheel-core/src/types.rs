//! # Domain Types
//!
//! Descriptor types consumed and produced by the [`Cart`](crate::cart::Cart).
//!
//! ## Type Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │ Product (trait) │   │    CartItem     │   │  CartDiscount   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id()           │   │  product: P     │   │  name (key)     │       │
//! │  │  price()        │   │  quantity: i64  │   │  discount       │       │
//! │  │  total_price(q) │   └─────────────────┘   └────────┬────────┘       │
//! │  └─────────────────┘                                  │                │
//! │                                              ┌────────▼────────┐       │
//! │  ┌─────────────────┐   ┌─────────────────┐   │    Discount     │       │
//! │  │    Freebie      │──►│ Condition       │   │  Fixed          │       │
//! │  │  name           │   │  Contains(P)    │   │  Percentage     │       │
//! │  │  condition      │   └─────────────────┘   │   (+ max cap)   │       │
//! │  │  reward ────────┼──► Reward(P, qty)       └─────────────────┘       │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Products are supplied by the caller. The cart only reads them.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Percentage
// =============================================================================

/// A percentage represented in basis points (bps).
///
/// 1 basis point = 0.01%, so 1000 bps = 10%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Percentage(u32);

impl Percentage {
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        Percentage(bps)
    }

    /// Creates a percentage from whole percent (10 = 10%).
    ///
    /// Saturates at `u32::MAX` bps instead of overflowing.
    #[inline]
    pub const fn from_percent(percent: u32) -> Self {
        Percentage(percent.saturating_mul(100))
    }

    /// Creates a percentage from a fractional percent (8.25 = 8.25%).
    ///
    /// Negative and NaN input becomes 0%; values past `u32::MAX` bps
    /// saturate.
    pub fn from_percentage(pct: f64) -> Self {
        if pct.is_nan() || pct <= 0.0 {
            return Percentage(0);
        }

        let bps = (pct * 100.0).round();
        if bps >= u32::MAX as f64 {
            Percentage(u32::MAX)
        } else {
            Percentage(bps as u32)
        }
    }

    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

// =============================================================================
// Product
// =============================================================================

/// The product capability the cart prices against.
///
/// Implementors own their pricing. The default [`total_price`] is linear,
/// but bundle or tiered pricing can override it; the cart never multiplies
/// a unit price itself.
///
/// [`total_price`]: Product::total_price
pub trait Product {
    /// Unique product identifier. Cart lines are keyed by it.
    fn id(&self) -> &str;

    /// Unit price.
    fn price(&self) -> Money;

    /// Total price for `quantity` units.
    fn total_price(&self, quantity: i64) -> Money {
        self.price().multiply_quantity(quantity)
    }
}

/// Shared products (e.g. one catalog entry held by many carts).
impl<T: Product + ?Sized> Product for Arc<T> {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn price(&self) -> Money {
        (**self).price()
    }

    fn total_price(&self, quantity: i64) -> Money {
        (**self).total_price(quantity)
    }
}

/// A catalog product with linear pricing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CatalogProduct {
    /// Unique identifier.
    pub id: String,

    /// Stock Keeping Unit - business identifier.
    pub sku: String,

    /// Display name.
    pub name: String,

    /// Unit price in cents.
    pub price_cents: i64,
}

impl CatalogProduct {
    pub fn new(
        id: impl Into<String>,
        sku: impl Into<String>,
        name: impl Into<String>,
        price_cents: i64,
    ) -> Self {
        CatalogProduct {
            id: id.into(),
            sku: sku.into(),
            name: name.into(),
            price_cents,
        }
    }
}

impl Product for CatalogProduct {
    fn id(&self) -> &str {
        &self.id
    }

    fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

/// A product sold cheaper in bundles ("3 for $5").
///
/// ## Pricing
/// ```text
/// quantity = 7, bundle_size = 3, bundle_price = 500, price = 200
///
///   full bundles: 7 / 3 = 2  → 2 × 500 = 1000
///   remainder:    7 % 3 = 1  → 1 × 200 =  200
///                               total   = 1200
/// ```
/// A `bundle_size` of 0 disables bundling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BulkProduct {
    pub id: String,
    pub name: String,
    pub price_cents: i64,
    pub bundle_size: u32,
    pub bundle_price_cents: i64,
}

impl Product for BulkProduct {
    fn id(&self) -> &str {
        &self.id
    }

    fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    fn total_price(&self, quantity: i64) -> Money {
        if self.bundle_size == 0 {
            return self.price().multiply_quantity(quantity);
        }

        let size = i64::from(self.bundle_size);
        let bundles = quantity / size;
        let remainder = quantity % size;

        Money::from_cents(self.bundle_price_cents).multiply_quantity(bundles)
            + self.price().multiply_quantity(remainder)
    }
}

// =============================================================================
// Cart Item
// =============================================================================

/// One product line in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem<P> {
    pub product: P,
    pub quantity: i64,
}

impl<P: Product> CartItem<P> {
    pub fn new(product: P, quantity: i64) -> Self {
        CartItem { product, quantity }
    }

    /// Line total as priced by the product.
    pub fn line_total(&self) -> Money {
        self.product.total_price(self.quantity)
    }
}

// =============================================================================
// Discounts
// =============================================================================

/// A discount payload.
///
/// Serialized with a `type` tag: `{"type":"fixed","amount":10}` or
/// `{"type":"percentage","amount":10,"max":20}`. A percentage `amount` is
/// in percent on the wire, not basis points.
///
/// A percentage `max` of zero counts as no cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Discount {
    /// Subtracts a flat amount from the running total.
    Fixed { amount: Money },

    /// Subtracts a share of the running total, optionally capped at `max`.
    Percentage {
        #[serde(rename = "amount", with = "percent_amount")]
        #[ts(type = "number")]
        rate: Percentage,
        max: Option<Money>,
    },
}

/// Percent-valued serde form of [`Percentage`] (10 ⇄ 1000 bps).
mod percent_amount {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::Percentage;

    pub fn serialize<S: Serializer>(rate: &Percentage, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(rate.percentage())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Percentage, D::Error> {
        f64::deserialize(deserializer).map(Percentage::from_percentage)
    }
}

impl Discount {
    pub const fn fixed(amount: Money) -> Self {
        Discount::Fixed { amount }
    }

    pub const fn percentage(rate: Percentage) -> Self {
        Discount::Percentage { rate, max: None }
    }

    pub const fn capped_percentage(rate: Percentage, max: Money) -> Self {
        Discount::Percentage {
            rate,
            max: Some(max),
        }
    }

    /// How much this discount takes off the given running total.
    ///
    /// The result is not clamped: a fixed amount larger than the running
    /// total, or a percentage of a negative total, passes straight through.
    pub fn amount_off(&self, running: Money) -> Money {
        match *self {
            Discount::Fixed { amount } => amount,
            Discount::Percentage { rate, max } => {
                let raw = running.percentage_of(rate);
                match max {
                    Some(max) if !max.is_zero() => raw.min(max),
                    _ => raw,
                }
            }
        }
    }
}

/// A named discount. The name is its identity within a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartDiscount {
    pub name: String,
    pub discount: Discount,
}

impl CartDiscount {
    pub fn new(name: impl Into<String>, discount: Discount) -> Self {
        CartDiscount {
            name: name.into(),
            discount,
        }
    }
}

/// The amount one discount removed during a total computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct AppliedDiscount {
    pub name: String,
    pub amount: Money,
}

// =============================================================================
// Freebies
// =============================================================================

/// Condition a freebie checks against cart contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Condition<P> {
    /// Holds when the cart has a line for `item`'s product id.
    Contains { item: P },
}

impl<P> Condition<P> {
    pub fn contains(item: P) -> Self {
        Condition::Contains { item }
    }
}

/// Product and quantity granted by a freebie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reward<P> {
    pub item: P,
    pub quantity: i64,
}

impl<P> Reward<P> {
    pub fn new(item: P, quantity: i64) -> Self {
        Reward { item, quantity }
    }
}

/// A named rule that grants a reward when its condition holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Freebie<P> {
    pub name: String,
    pub condition: Condition<P>,
    pub reward: Reward<P>,
}

impl<P> Freebie<P> {
    pub fn new(name: impl Into<String>, condition: Condition<P>, reward: Reward<P>) -> Self {
        Freebie {
            name: name.into(),
            condition,
            reward,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, price_cents: i64) -> CatalogProduct {
        CatalogProduct::new(id, format!("SKU-{}", id), format!("Product {}", id), price_cents)
    }

    #[test]
    fn test_percentage_constructors() {
        assert_eq!(Percentage::from_percent(10).bps(), 1000);
        assert_eq!(Percentage::from_percentage(8.25).bps(), 825);
        assert!((Percentage::from_bps(825).percentage() - 8.25).abs() < 0.001);
    }

    #[test]
    fn test_catalog_product_linear_pricing() {
        let a = product("A", 100);
        assert_eq!(a.id(), "A");
        assert_eq!(a.price().cents(), 100);
        assert_eq!(a.total_price(3).cents(), 300);
        assert_eq!(a.total_price(0).cents(), 0);
    }

    #[test]
    fn test_bulk_product_pricing() {
        let cola = BulkProduct {
            id: "COLA".to_string(),
            name: "Cola 330ml".to_string(),
            price_cents: 200,
            bundle_size: 3,
            bundle_price_cents: 500,
        };

        assert_eq!(cola.total_price(1).cents(), 200);
        assert_eq!(cola.total_price(3).cents(), 500);
        assert_eq!(cola.total_price(7).cents(), 1200);
    }

    #[test]
    fn test_bulk_product_without_bundle_is_linear() {
        let gum = BulkProduct {
            id: "GUM".to_string(),
            name: "Gum".to_string(),
            price_cents: 150,
            bundle_size: 0,
            bundle_price_cents: 0,
        };
        assert_eq!(gum.total_price(4).cents(), 600);
    }

    #[test]
    fn test_arc_product_delegates() {
        let shared: Arc<dyn Product> = Arc::new(product("A", 250));
        assert_eq!(shared.id(), "A");
        assert_eq!(shared.total_price(2).cents(), 500);
    }

    #[test]
    fn test_cart_item_line_total() {
        let item = CartItem::new(product("B", 200), 2);
        assert_eq!(item.line_total().cents(), 400);
    }

    #[test]
    fn test_fixed_discount_amount_off() {
        let discount = Discount::fixed(Money::from_cents(10));
        assert_eq!(discount.amount_off(Money::from_cents(400)).cents(), 10);
        // Not clamped to the running total
        assert_eq!(discount.amount_off(Money::from_cents(5)).cents(), 10);
    }

    #[test]
    fn test_percentage_discount_amount_off() {
        let uncapped = Discount::percentage(Percentage::from_percent(10));
        assert_eq!(uncapped.amount_off(Money::from_cents(400)).cents(), 40);

        let capped =
            Discount::capped_percentage(Percentage::from_percent(10), Money::from_cents(20));
        assert_eq!(capped.amount_off(Money::from_cents(400)).cents(), 20);
        assert_eq!(capped.amount_off(Money::from_cents(100)).cents(), 10);
    }

    #[test]
    fn test_discount_serde_tagging() {
        let json = serde_json::to_value(Discount::fixed(Money::from_cents(10))).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "fixed", "amount": 10 }));

        let parsed: Discount =
            serde_json::from_str(r#"{"type":"percentage","amount":10}"#).unwrap();
        assert_eq!(parsed, Discount::percentage(Percentage::from_percent(10)));
    }

    #[test]
    fn test_percentage_discount_amount_is_percent_on_the_wire() {
        let capped =
            Discount::capped_percentage(Percentage::from_percentage(8.25), Money::from_cents(20));
        let json = serde_json::to_value(capped).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "type": "percentage", "amount": 8.25, "max": 20 })
        );

        let parsed: Discount =
            serde_json::from_str(r#"{"type":"percentage","amount":8.25,"max":20}"#).unwrap();
        assert_eq!(parsed, capped);
    }

    #[test]
    fn test_zero_cap_means_uncapped() {
        let zero_cap = Discount::capped_percentage(Percentage::from_percent(10), Money::zero());
        assert_eq!(zero_cap.amount_off(Money::from_cents(400)).cents(), 40);
    }

    #[test]
    fn test_percentage_conversions_saturate() {
        assert_eq!(Percentage::from_percent(u32::MAX).bps(), u32::MAX);
        assert_eq!(Percentage::from_percentage(-5.0).bps(), 0);
        assert_eq!(Percentage::from_percentage(f64::NAN).bps(), 0);
        assert_eq!(Percentage::from_percentage(f64::INFINITY).bps(), u32::MAX);
    }

    #[test]
    fn test_condition_serde_tagging() {
        let condition = Condition::contains(product("A", 100));
        let json = serde_json::to_value(&condition).unwrap();
        assert_eq!(json["type"], "contains");
        assert_eq!(json["item"]["id"], "A");
    }
}
