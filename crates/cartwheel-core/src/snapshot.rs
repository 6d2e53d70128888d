//! # Cart Snapshots
//!
//! Read-only, serializable views of a cart for checkout and display layers.
//!
//! ## Snapshot Flow
//! ```text
//! ┌──────────┐  snapshot()  ┌──────────────┐  to_json()  ┌──────────────┐
//! │   Cart   │─────────────►│ CartSnapshot │────────────►│  checkout /  │
//! │ (mutable)│              │   (frozen)   │             │  UI (TS)     │
//! └──────────┘              └──────────────┘             └──────────────┘
//! ```
//!
//! Snapshots copy product ids and prices out of the cart, so later cart
//! mutations never show up in a snapshot already taken.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::Cart;
use crate::error::CoreResult;
use crate::money::Money;
use crate::types::{AppliedDiscount, CartDiscount, CartItem, Product};

/// Cart totals summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Distinct product lines.
    pub line_count: usize,
    /// Units across all lines.
    pub total_quantity: i64,
    pub subtotal: Money,
    /// Subtotal minus total.
    pub discount: Money,
    pub total: Money,
}

impl<P: Product> From<&Cart<P>> for CartTotals {
    fn from(cart: &Cart<P>) -> Self {
        let subtotal = cart.subtotal();
        let total = cart.total();

        CartTotals {
            line_count: cart.count().len(),
            total_quantity: cart.quantity(),
            subtotal,
            discount: subtotal - total,
            total,
        }
    }
}

/// One priced cart line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotLine {
    pub product_id: String,
    pub unit_price: Money,
    pub quantity: i64,
    /// As priced by the product, which may differ from unit price × quantity.
    pub line_total: Money,
}

impl<P: Product> From<&CartItem<P>> for SnapshotLine {
    fn from(item: &CartItem<P>) -> Self {
        SnapshotLine {
            product_id: item.product.id().to_string(),
            unit_price: item.product.price(),
            quantity: item.quantity,
            line_total: item.line_total(),
        }
    }
}

/// A frozen copy of a cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartSnapshot {
    pub customer_id: String,
    /// When the cart was created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
    #[ts(as = "String")]
    pub taken_at: DateTime<Utc>,
    pub lines: Vec<SnapshotLine>,
    pub discounts: Vec<CartDiscount>,
    /// What each discount removed, in application order.
    pub applied_discounts: Vec<AppliedDiscount>,
    /// Names of every recorded freebie rule, duplicates included.
    pub freebies: Vec<String>,
    pub totals: CartTotals,
}

impl CartSnapshot {
    /// Serializes the snapshot as pretty-printed JSON.
    pub fn to_json(&self) -> CoreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl<P: Product> Cart<P> {
    /// Takes a snapshot of the current cart state.
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            customer_id: self.customer_id().to_string(),
            created_at: self.created_at(),
            taken_at: Utc::now(),
            lines: self.count().iter().map(SnapshotLine::from).collect(),
            discounts: self.discounts().to_vec(),
            applied_discounts: self.discount_breakdown(),
            freebies: self.freebies().iter().map(|f| f.name.clone()).collect(),
            totals: CartTotals::from(self),
        }
    }
}
