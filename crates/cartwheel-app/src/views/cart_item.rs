//! Cart line-item row.

use cartwheel_commerce::LineItem;

use crate::views::escape_html;

/// Render one cart row.
///
/// The stepper buttons forward set-quantity intents for one unit more or
/// one unit less; stepping down from quantity 1 stages quantity 0, which
/// removes the line.
pub fn render_cart_item(item: &LineItem) -> String {
    let id = item.id();
    let title = escape_html(&item.product.title);
    let price = item.product.price.display();
    let quantity = item.quantity;
    let subtotal = item.subtotal().display();
    let decrement = quantity - 1;
    let increment = quantity.saturating_add(1);

    format!(
        r#"<div class="cart-item" data-product-id="{id}">
    <div class="cart-item-info">
        <h4 class="cart-item-title">{title}</h4>
        <p class="cart-item-price">{price} each</p>
    </div>
    <div class="cart-item-controls">
        <button data-intent="set-quantity" data-product-id="{id}" data-quantity="{decrement}">-</button>
        <span class="cart-item-quantity">{quantity}</span>
        <button data-intent="set-quantity" data-product-id="{id}" data-quantity="{increment}">+</button>
        <button class="cart-item-remove" data-intent="remove" data-product-id="{id}">Remove</button>
    </div>
    <p class="cart-item-subtotal">{subtotal}</p>
</div>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use cartwheel_commerce::{Cart, Money, Product};

    fn line(quantity: i64) -> LineItem {
        let mut cart = Cart::new();
        cart.add(
            Product::new(1, "Backpack", Money::from_cents(1099)),
            quantity,
        )
        .unwrap();
        cart.items()[0].clone()
    }

    #[test]
    fn test_row_shows_quantity_and_subtotal() {
        let html = render_cart_item(&line(3));
        assert!(html.contains(r#"<span class="cart-item-quantity">3</span>"#));
        assert!(html.contains("$32.97"));
    }

    #[test]
    fn test_stepper_stages_adjacent_quantities() {
        let html = render_cart_item(&line(3));
        assert!(html.contains(r#"data-quantity="2""#));
        assert!(html.contains(r#"data-quantity="4""#));
    }

    #[test]
    fn test_stepping_down_from_one_stages_removal() {
        let html = render_cart_item(&line(1));
        assert!(html.contains(r#"data-quantity="0""#));
    }
}
