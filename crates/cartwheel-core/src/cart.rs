//! # Cart Aggregate
//!
//! The shopping cart: line items, named discounts and freebie history.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Call                      Effect                                       │
//! │  ────                      ──────                                       │
//! │  add(item)           ───►  merge qty into existing line, else append    │
//! │  update(item)        ───►  qty <= 0 removes, else overwrite; or append  │
//! │  remove(id)          ───►  drop line (no-op when absent)                │
//! │  destroy()           ───►  clear lines, keep discounts + freebies       │
//! │                                                                         │
//! │  add_discount(d)     ───►  replace payload by name in place, or append  │
//! │  remove_discount(n)  ───►  drop by name (no-op when absent)             │
//! │                                                                         │
//! │  add_freebie(f)      ───►  record f, then grant reward once if eligible │
//! │                                                                         │
//! │  total()             ───►  subtotal, then each discount in order on     │
//! │                            the running total (compounding, no floor)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership
//! Every mutation takes `&mut self`. A cart shared between threads must be
//! wrapped by its owner (e.g. `Mutex<Cart>`); the cart itself holds no lock.

use chrono::{DateTime, Utc};
use tracing::{debug, trace};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{
    AppliedDiscount, CartDiscount, CartItem, CatalogProduct, Condition, Freebie, Product,
};
use crate::validation::{
    validate_customer_id, validate_discount, validate_discount_name, validate_quantity,
};
use crate::{MAX_CART_ITEMS, MAX_ITEM_QUANTITY};

/// A customer's shopping cart.
///
/// ## Invariants
/// - At most one line per product id; lines keep insertion order
/// - At most one discount per name; replacing keeps the original position
/// - `update` never stores a quantity <= 0
/// - Freebies are an append-only history, duplicates allowed
///
/// `add` does not reject non-positive quantities. They merge arithmetically,
/// which can leave a line at zero or below.
#[derive(Debug, Clone)]
pub struct Cart<P = CatalogProduct> {
    customer_id: String,
    items: Vec<CartItem<P>>,
    discounts: Vec<CartDiscount>,
    freebies: Vec<Freebie<P>>,
    created_at: DateTime<Utc>,
}

impl<P: Product> Cart<P> {
    /// Creates an empty cart for a customer.
    ///
    /// ```rust
    /// use cartwheel_core::{Cart, CatalogProduct};
    ///
    /// let cart: Cart<CatalogProduct> = Cart::create("customer-a");
    /// assert!(cart.is_empty());
    /// assert_eq!(cart.customer_id(), "customer-a");
    /// ```
    pub fn create(customer_id: impl Into<String>) -> Self {
        Cart {
            customer_id: customer_id.into(),
            items: Vec::new(),
            discounts: Vec::new(),
            freebies: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Creates a cart after validating the customer id.
    pub fn try_create(customer_id: impl Into<String>) -> CoreResult<Self> {
        let customer_id = customer_id.into();
        validate_customer_id(&customer_id)?;
        Ok(Self::create(customer_id))
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    // =========================================================================
    // Items
    // =========================================================================

    /// Adds an item, merging into an existing line for the same product.
    ///
    /// ## Behavior
    /// - Product already in cart: quantity += item.quantity
    /// - Product not in cart: appended at the end
    ///
    /// Merged quantities saturate at the `i64` bounds.
    ///
    /// The existing line keeps its original product value.
    pub fn add(&mut self, item: CartItem<P>) {
        if let Some(existing) = self.line_mut(item.product.id()) {
            existing.quantity = existing.quantity.saturating_add(item.quantity);
            debug!(
                product_id = %item.product.id(),
                added = item.quantity,
                quantity = existing.quantity,
                "Merged item into cart line"
            );
            return;
        }

        debug!(product_id = %item.product.id(), quantity = item.quantity, "Adding cart line");
        self.items.push(item);
    }

    /// Sets an item's quantity, replacing rather than merging.
    ///
    /// ## Behavior
    /// - Product in cart, quantity <= 0: line removed
    /// - Product in cart, quantity > 0: quantity overwritten
    /// - Product not in cart: appended like [`add`](Self::add)
    pub fn update(&mut self, item: CartItem<P>) {
        let Some(existing) = self.line_mut(item.product.id()) else {
            debug!(product_id = %item.product.id(), quantity = item.quantity, "Adding cart line");
            self.items.push(item);
            return;
        };

        if item.quantity <= 0 {
            self.remove(item.product.id());
            return;
        }

        existing.quantity = item.quantity;
        debug!(product_id = %item.product.id(), quantity = item.quantity, "Updated cart line");
    }

    /// Removes the line for a product. Absent ids are ignored.
    pub fn remove(&mut self, product_id: &str) {
        let before = self.items.len();
        self.items.retain(|i| i.product.id() != product_id);

        if self.items.len() != before {
            debug!(product_id = %product_id, "Removed cart line");
        }
    }

    /// Clears all lines. Discounts, freebies and the customer are kept.
    pub fn destroy(&mut self) {
        debug!(customer_id = %self.customer_id, lines = self.items.len(), "Clearing cart lines");
        self.items.clear();
    }

    pub fn has(&self, product_id: &str) -> bool {
        self.items.iter().any(|i| i.product.id() == product_id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The cart lines in insertion order.
    pub fn count(&self) -> &[CartItem<P>] {
        &self.items
    }

    /// Total units across all lines (not the number of distinct products).
    ///
    /// Saturates at the `i64` bounds.
    pub fn quantity(&self) -> i64 {
        self.items
            .iter()
            .fold(0_i64, |total, i| total.saturating_add(i.quantity))
    }

    fn line_mut(&mut self, product_id: &str) -> Option<&mut CartItem<P>> {
        self.items.iter_mut().find(|i| i.product.id() == product_id)
    }

    // =========================================================================
    // Discounts
    // =========================================================================

    /// Adds a discount, or replaces the payload of the one with the same name.
    ///
    /// A replaced discount keeps its position, so it is still applied at the
    /// point in the sequence where it was first added.
    pub fn add_discount(&mut self, cart_discount: CartDiscount) {
        if let Some(existing) = self
            .discounts
            .iter_mut()
            .find(|d| d.name == cart_discount.name)
        {
            debug!(name = %cart_discount.name, "Replacing cart discount");
            existing.discount = cart_discount.discount;
            return;
        }

        debug!(name = %cart_discount.name, "Adding cart discount");
        self.discounts.push(cart_discount);
    }

    /// Removes a discount by name. Absent names are ignored.
    pub fn remove_discount(&mut self, name: &str) {
        self.discounts.retain(|d| d.name != name);
    }

    pub fn discounts(&self) -> &[CartDiscount] {
        &self.discounts
    }

    /// Sum of every line as priced by its product.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// What each discount takes off, in application order.
    ///
    /// ## Sequential Compounding
    /// ```text
    /// subtotal 400
    ///   "ten-off"  fixed 10        400 → 390   (10)
    ///   "ten-pct"  10%             390 → 351   (39)
    /// ```
    /// Each discount sees the running total left by the previous one.
    pub fn discount_breakdown(&self) -> Vec<AppliedDiscount> {
        self.fold_discounts().1
    }

    /// The cart total after all discounts.
    ///
    /// Not floored: discounts larger than the subtotal produce a negative
    /// total.
    pub fn total(&self) -> Money {
        self.fold_discounts().0
    }

    fn fold_discounts(&self) -> (Money, Vec<AppliedDiscount>) {
        let subtotal = self.subtotal();
        let mut running = subtotal;
        let mut applied = Vec::with_capacity(self.discounts.len());

        for cart_discount in &self.discounts {
            let amount = cart_discount.discount.amount_off(running);
            running -= amount;
            applied.push(AppliedDiscount {
                name: cart_discount.name.clone(),
                amount,
            });
        }

        trace!(subtotal = %subtotal, total = %running, discounts = applied.len(), "Computed cart total");
        (running, applied)
    }

    // =========================================================================
    // Freebies
    // =========================================================================

    /// Whether a freebie condition holds against the current lines.
    pub fn check_freebie_eligibility(&self, condition: &Condition<P>) -> bool {
        match condition {
            Condition::Contains { item } => self.has(item.id()),
        }
    }

    /// Recorded freebie rules, in the order they were added.
    pub fn freebies(&self) -> &[Freebie<P>] {
        &self.freebies
    }

    // =========================================================================
    // Strict Entry Points
    // =========================================================================

    /// Like [`add`](Self::add), but enforces quantity and size limits first.
    ///
    /// ## Checks
    /// - quantity in 1..=MAX_ITEM_QUANTITY
    /// - merged quantity does not exceed MAX_ITEM_QUANTITY
    /// - a new line does not exceed MAX_CART_ITEMS
    pub fn try_add(&mut self, item: CartItem<P>) -> CoreResult<()> {
        validate_quantity(item.quantity)?;

        let current = self
            .items
            .iter()
            .find(|i| i.product.id() == item.product.id())
            .map(|i| i.quantity);

        match current {
            Some(current) => {
                let requested = current.saturating_add(item.quantity);
                if requested > MAX_ITEM_QUANTITY {
                    return Err(CoreError::QuantityTooLarge {
                        product_id: item.product.id().to_string(),
                        requested,
                        max: MAX_ITEM_QUANTITY,
                    });
                }
            }
            None => self.ensure_room()?,
        }

        self.add(item);
        Ok(())
    }

    /// Like [`update`](Self::update), but rejects oversized quantities and
    /// lines beyond MAX_CART_ITEMS. A quantity <= 0 still removes the line.
    pub fn try_update(&mut self, item: CartItem<P>) -> CoreResult<()> {
        if item.quantity > 0 {
            validate_quantity(item.quantity)?;
        }

        if !self.has(item.product.id()) {
            self.ensure_room()?;
        }

        self.update(item);
        Ok(())
    }

    /// Like [`add_discount`](Self::add_discount), but validates the name
    /// and payload first.
    pub fn try_add_discount(&mut self, cart_discount: CartDiscount) -> CoreResult<()> {
        validate_discount_name(&cart_discount.name)?;
        validate_discount(&cart_discount.discount)?;
        self.add_discount(cart_discount);
        Ok(())
    }

    fn ensure_room(&self) -> CoreResult<()> {
        if self.items.len() >= MAX_CART_ITEMS {
            return Err(CoreError::CartTooLarge {
                max: MAX_CART_ITEMS,
            });
        }
        Ok(())
    }
}

impl<P: Product + Clone> Cart<P> {
    /// Records a freebie and grants its reward if the condition holds now.
    ///
    /// ## Evaluation
    /// ```text
    /// add_freebie(f)
    ///      │
    ///      ├── freebies.push(f)            always
    ///      │
    ///      └── condition holds?  ── yes ──► add(reward)   (merges)
    ///                            ── no  ──► nothing
    /// ```
    /// The rule is evaluated exactly once. Later cart changes neither grant
    /// nor revoke the reward.
    pub fn add_freebie(&mut self, freebie: Freebie<P>) {
        let eligible = self.check_freebie_eligibility(&freebie.condition);
        let reward = CartItem::new(freebie.reward.item.clone(), freebie.reward.quantity);

        debug!(name = %freebie.name, eligible, "Recording freebie");
        self.freebies.push(freebie);

        if eligible {
            self.add(reward);
        }
    }
}
