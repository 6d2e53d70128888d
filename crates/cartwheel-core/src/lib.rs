//! # cartwheel-core: Shopping Cart Logic
//!
//! The cart aggregate and the pricing rules it applies, as pure in-memory
//! logic with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Cartwheel Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │        Catalog / Checkout / UI  (outside this workspace)        │   │
//! │  │   supplies Product values ───┐      ┌─── consumes snapshots     │   │
//! │  └──────────────────────────────┼──────┼──────────────────────────┘   │
//! │                                 ▼      │                               │
//! │  ┌─────────────────────────────────────┴───────────────────────────┐   │
//! │  │             ★ cartwheel-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │ snapshot  │  │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │  Totals   │  │   │
//! │  │   │  Discount │  │ Percentage│  │  freebies │  │  JSON/TS  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • NO LOG SUBSCRIBER        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`cart`] - The `Cart` aggregate
//! - [`types`] - Products, discounts, freebies
//! - [`money`] - Integer money type
//! - [`snapshot`] - Serializable cart snapshots and totals
//! - [`validation`] - Opt-in input checks used by the `try_*` operations
//! - [`error`] - Error types
//!
//! ## Example Usage
//!
//! ```rust
//! use cartwheel_core::{Cart, CartDiscount, CartItem, CatalogProduct, Discount, Money, Percentage};
//!
//! let a = CatalogProduct::new("productA", "SKU-A", "Product A", 100);
//! let b = CatalogProduct::new("productB", "SKU-B", "Product B", 200);
//!
//! let mut cart = Cart::create("customerA");
//! cart.add(CartItem::new(a, 2));
//! cart.add(CartItem::new(b, 1));
//! assert_eq!(cart.total(), Money::from_cents(400));
//!
//! cart.add_discount(CartDiscount::new(
//!     "ten-percent",
//!     Discount::capped_percentage(Percentage::from_percent(10), Money::from_cents(20)),
//! ));
//! assert_eq!(cart.total(), Money::from_cents(380));
//! ```

pub mod cart;
pub mod error;
pub mod money;
pub mod snapshot;
pub mod types;
pub mod validation;

pub use cart::Cart;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use snapshot::{CartSnapshot, CartTotals, SnapshotLine};
pub use types::*;

/// Maximum distinct lines accepted by the strict `try_*` operations.
pub const MAX_CART_ITEMS: usize = 100;

/// Maximum quantity of one line accepted by the strict `try_*` operations.
///
/// Catches typos such as 1000 instead of 10.
pub const MAX_ITEM_QUANTITY: i64 = 999;
