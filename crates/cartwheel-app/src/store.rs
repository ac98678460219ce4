//! Cart store: the single writer over the session cart.
//!
//! The store owns the [`Cart`] for the lifetime of the UI session and is the
//! only component that mutates it. After every mutation it publishes an
//! owned [`CartSnapshot`] to registered subscribers, so state flows one way:
//! view intent in, snapshot out. Views hold read capabilities (snapshot,
//! derived numbers, quantity lookup) through a shared reference; the
//! mutators require the exclusive reference only the composition root has.

use cartwheel_commerce::{Cart, CartError, LineItem, Money, Product, ProductId};
use tracing::debug;

/// Immutable view of the cart published to subscribers.
///
/// The aggregates are computed from the items at snapshot time; consumers
/// must take a fresh snapshot after any mutation rather than cache these.
#[derive(Debug, Clone, PartialEq)]
pub struct CartSnapshot {
    /// Line items in insertion order.
    pub items: Vec<LineItem>,
    /// Sum of quantities across all lines.
    pub item_count: i64,
    /// Sum of line subtotals.
    pub total: Money,
}

/// A user intent forwarded by a view.
#[derive(Debug, Clone, PartialEq)]
pub enum CartIntent {
    /// Add units of a product (merging with an existing line).
    Add { product: Product, quantity: i64 },
    /// Replace a line's quantity; zero or less removes the line.
    SetQuantity { id: ProductId, quantity: i64 },
    /// Remove a line.
    Remove { id: ProductId },
    /// Empty the cart.
    Clear,
}

type Subscriber = Box<dyn Fn(&CartSnapshot)>;

/// Owns the session cart and publishes snapshots to subscribers.
#[derive(Default)]
pub struct CartStore {
    cart: Cart,
    subscribers: Vec<Subscriber>,
}

impl CartStore {
    /// Create a store with an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a subscriber.
    ///
    /// Subscribers are called after every state-changing operation, in
    /// registration order, with the snapshot of the committed state.
    pub fn subscribe(&mut self, subscriber: impl Fn(&CartSnapshot) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Apply a view intent.
    pub fn apply(&mut self, intent: CartIntent) -> Result<(), CartError> {
        match intent {
            CartIntent::Add { product, quantity } => self.add_to_cart(product, quantity),
            CartIntent::SetQuantity { id, quantity } => {
                self.update_quantity(id, quantity);
                Ok(())
            }
            CartIntent::Remove { id } => {
                self.remove_from_cart(id);
                Ok(())
            }
            CartIntent::Clear => {
                self.clear_cart();
                Ok(())
            }
        }
    }

    /// Add `quantity` units of `product`, merging with an existing line.
    pub fn add_to_cart(&mut self, product: Product, quantity: i64) -> Result<(), CartError> {
        let id = product.id;
        self.cart.add(product, quantity)?;
        debug!(%id, quantity, "added to cart");
        self.publish();
        Ok(())
    }

    /// Replace the quantity of the line with `id`; zero or less removes it.
    ///
    /// An absent id is a silent no-op and publishes nothing.
    pub fn update_quantity(&mut self, id: ProductId, quantity: i64) -> bool {
        let changed = self.cart.update_quantity(id, quantity);
        if changed {
            debug!(%id, quantity, "quantity updated");
            self.publish();
        } else {
            debug!(%id, "update for id not in cart");
        }
        changed
    }

    /// Remove the line with `id`. An absent id is a silent no-op.
    pub fn remove_from_cart(&mut self, id: ProductId) -> bool {
        let removed = self.cart.remove(id);
        if removed {
            debug!(%id, "removed from cart");
            self.publish();
        } else {
            debug!(%id, "remove for id not in cart");
        }
        removed
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
        debug!("cart cleared");
        self.publish();
    }

    /// Quantity of the line with `id`, or zero when absent.
    pub fn item_quantity(&self, id: ProductId) -> i64 {
        self.cart.quantity_of(id)
    }

    /// Sum of quantities across all lines, recomputed.
    pub fn item_count(&self) -> i64 {
        self.cart.item_count()
    }

    /// Sum of line subtotals, recomputed.
    pub fn total(&self) -> Money {
        self.cart.total()
    }

    /// Owned snapshot of the current committed state.
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            items: self.cart.items().to_vec(),
            item_count: self.cart.item_count(),
            total: self.cart.total(),
        }
    }

    fn publish(&self) {
        let snapshot = self.snapshot();
        for subscriber in &self.subscribers {
            subscriber(&snapshot);
        }
    }
}
