//! Cart and line item types.

use crate::error::CartError;
use crate::ids::ProductId;
use crate::money::Money;
use crate::product::Product;
use serde::{Deserialize, Serialize};

/// A line in the cart: a product plus how many units of it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Snapshot of the catalog record being purchased.
    pub product: Product,
    /// Quantity, always at least 1.
    pub quantity: i64,
}

impl LineItem {
    fn new(product: Product, quantity: i64) -> Self {
        Self { product, quantity }
    }

    /// The product id this line is keyed by.
    pub fn id(&self) -> ProductId {
        self.product.id
    }

    /// Unit price times quantity for this line.
    pub fn subtotal(&self) -> Money {
        self.product.price.times(self.quantity)
    }
}

/// An insertion-ordered collection of line items, one per product id.
///
/// The cart stores no derived state: item count and total are recomputed
/// from the collection on every read. Each mutator completes synchronously
/// and leaves the collection in a committed state; there are no observable
/// intermediate states.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` units of `product`.
    ///
    /// If a line for the same product id already exists its quantity grows
    /// by `quantity`; repeated adds accumulate rather than overwrite. A new
    /// product is appended after the existing lines. Accumulation saturates,
    /// so any positive quantity is accepted.
    ///
    /// Returns an error if `quantity` is zero or negative.
    pub fn add(&mut self, product: Product, quantity: i64) -> Result<(), CartError> {
        if quantity <= 0 {
            return Err(CartError::InvalidQuantity(quantity));
        }

        if let Some(existing) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            existing.quantity = existing.quantity.saturating_add(quantity);
        } else {
            self.items.push(LineItem::new(product, quantity));
        }

        self.debug_assert_unique();
        Ok(())
    }

    /// Add a single unit of `product`.
    pub fn add_one(&mut self, product: Product) -> Result<(), CartError> {
        self.add(product, 1)
    }

    /// Replace the quantity of the line with `id`.
    ///
    /// A quantity of zero or less removes the line entirely. An id with no
    /// matching line is a no-op, not an error. Returns whether the
    /// collection changed. Updates never reposition a line.
    pub fn update_quantity(&mut self, id: ProductId, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove(id);
        }

        match self.items.iter_mut().find(|i| i.product.id == id) {
            Some(item) => {
                item.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Remove the line with `id`.
    ///
    /// A missing id is a no-op, not an error. Returns whether a line was
    /// removed.
    pub fn remove(&mut self, id: ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| i.product.id != id);
        self.items.len() < len_before
    }

    /// Drop every line.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Quantity of the line with `id`, or zero when absent. Pure read.
    pub fn quantity_of(&self, id: ProductId) -> i64 {
        self.items
            .iter()
            .find(|i| i.product.id == id)
            .map(|i| i.quantity)
            .unwrap_or(0)
    }

    /// Total number of units across all lines.
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Sum of line subtotals.
    pub fn total(&self) -> Money {
        self.items.iter().map(|i| i.subtotal()).sum()
    }

    /// The line items, in insertion order. Read-only view.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // One line per product id must hold after every mutation.
    fn debug_assert_unique(&self) {
        #[cfg(debug_assertions)]
        {
            let mut seen = std::collections::HashSet::new();
            for item in &self.items {
                debug_assert!(
                    seen.insert(item.product.id),
                    "duplicate line item for product {}",
                    item.product.id
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, price_cents: i64) -> Product {
        Product::new(id, format!("Product {id}"), Money::from_cents(price_cents))
    }

    #[test]
    fn test_new_cart_is_empty() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.total(), Money::ZERO);
    }

    #[test]
    fn test_add_computes_aggregates() {
        let mut cart = Cart::new();
        cart.add(product(1, 1099), 2).unwrap();

        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.total(), Money::from_cents(2198));
    }

    #[test]
    fn test_add_same_product_merges() {
        let mut cart = Cart::new();
        cart.add(product(1, 1099), 1).unwrap();
        cart.add(product(1, 1099), 2).unwrap();

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_add_one_defaults_quantity() {
        let mut cart = Cart::new();
        cart.add_one(product(1, 500)).unwrap();

        assert_eq!(cart.quantity_of(ProductId::new(1)), 1);
    }

    #[test]
    fn test_add_rejects_non_positive_quantity() {
        let mut cart = Cart::new();
        assert_eq!(
            cart.add(product(1, 500), 0),
            Err(CartError::InvalidQuantity(0))
        );
        assert_eq!(
            cart.add(product(1, 500), -3),
            Err(CartError::InvalidQuantity(-3))
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_saturates_instead_of_overflowing() {
        let mut cart = Cart::new();
        cart.add(product(1, 100), i64::MAX).unwrap();
        cart.add(product(1, 100), 5).unwrap();

        assert_eq!(cart.quantity_of(ProductId::new(1)), i64::MAX);
    }

    #[test]
    fn test_remove_empties_cart() {
        let mut cart = Cart::new();
        cart.add(product(1, 1099), 2).unwrap();

        assert!(cart.remove(ProductId::new(1)));
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.total(), Money::ZERO);
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let mut cart = Cart::new();
        cart.add(product(1, 1099), 2).unwrap();
        let before = cart.clone();

        assert!(!cart.remove(ProductId::new(9)));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_update_quantity_replaces() {
        let mut cart = Cart::new();
        cart.add(product(1, 1099), 2).unwrap();

        assert!(cart.update_quantity(ProductId::new(1), 5));
        assert_eq!(cart.item_count(), 5);
        assert_eq!(cart.total(), Money::from_cents(5495));
    }

    #[test]
    fn test_update_quantity_zero_removes() {
        let mut cart = Cart::new();
        cart.add(product(1, 1099), 2).unwrap();

        assert!(cart.update_quantity(ProductId::new(1), 0));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_negative_removes() {
        let mut cart = Cart::new();
        cart.add(product(1, 1099), 2).unwrap();

        assert!(cart.update_quantity(ProductId::new(1), -1));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_absent_id_is_noop() {
        let mut cart = Cart::new();
        cart.add(product(1, 1099), 2).unwrap();
        let before = cart.clone();

        assert!(!cart.update_quantity(ProductId::new(9), 4));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_update_does_not_reposition() {
        let mut cart = Cart::new();
        cart.add(product(1, 100), 1).unwrap();
        cart.add(product(2, 200), 1).unwrap();
        cart.add(product(3, 300), 1).unwrap();

        cart.update_quantity(ProductId::new(1), 7);

        let order: Vec<_> = cart.items().iter().map(|i| i.id().value()).collect();
        assert_eq!(order, vec![1, 2, 3]);
    }

    #[test]
    fn test_clear_resets_to_empty() {
        let mut cart = Cart::new();
        cart.add(product(1, 1099), 2).unwrap();
        cart.add(product(2, 2550), 1).unwrap();

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.total(), Money::ZERO);
    }

    #[test]
    fn test_quantity_of_absent_id_is_zero() {
        let cart = Cart::new();
        assert_eq!(cart.quantity_of(ProductId::new(1)), 0);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut cart = Cart::new();
        cart.add(product(3, 100), 1).unwrap();
        cart.add(product(1, 100), 1).unwrap();
        cart.add(product(3, 100), 2).unwrap();
        cart.add(product(2, 100), 1).unwrap();

        let order: Vec<_> = cart.items().iter().map(|i| i.id().value()).collect();
        assert_eq!(order, vec![3, 1, 2]);
    }

    #[test]
    fn test_line_subtotal() {
        let mut cart = Cart::new();
        cart.add(product(1, 1099), 3).unwrap();

        assert_eq!(cart.items()[0].subtotal(), Money::from_cents(3297));
    }
}
