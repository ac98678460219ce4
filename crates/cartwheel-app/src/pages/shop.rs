//! Shop page: the catalog grid.

use cartwheel_commerce::Product;
use cartwheel_data::CatalogError;

use crate::store::CartStore;
use crate::views::{escape_html, render_product_card};

/// Render the shop page.
///
/// The page needs only the store's quantity-lookup capability: each card
/// shows how many units of its product the cart already holds. Add intents
/// travel back through the card's data attributes.
pub fn render_shop(products: &[Product], store: &CartStore) -> String {
    if products.is_empty() {
        return r#"<section class="shop shop--empty" data-section="shop">
    <h2>Shop</h2>
    <p>No products available.</p>
</section>"#
            .to_string();
    }

    let cards: Vec<String> = products
        .iter()
        .map(|p| render_product_card(p, store.item_quantity(p.id)))
        .collect();

    format!(
        r#"<section class="shop" data-section="shop">
    <h2>Shop</h2>
    <div class="product-grid">
{}
    </div>
</section>"#,
        cards.join("\n")
    )
}

/// Render the page-level presentation for a failed catalog fetch.
pub fn render_shop_error(error: &CatalogError) -> String {
    format!(
        r#"<section class="shop shop--error" data-section="shop">
    <h2>Shop</h2>
    <p>Unable to load products. Please try again.</p>
    <p class="error-detail">{}</p>
</section>"#,
        escape_html(&error.to_string())
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use cartwheel_commerce::Money;

    fn products() -> Vec<Product> {
        vec![
            Product::new(1, "Backpack", Money::from_cents(10995)),
            Product::new(2, "Mug", Money::from_cents(450)),
        ]
    }

    #[test]
    fn test_shop_renders_all_cards() {
        let html = render_shop(&products(), &CartStore::new());
        assert!(html.contains("Backpack"));
        assert!(html.contains("Mug"));
    }

    #[test]
    fn test_shop_reflects_cart_quantities() {
        let mut store = CartStore::new();
        store
            .add_to_cart(Product::new(1, "Backpack", Money::from_cents(10995)), 2)
            .unwrap();

        let html = render_shop(&products(), &store);
        assert!(html.contains("2 in cart"));
    }

    #[test]
    fn test_shop_empty_listing() {
        let html = render_shop(&[], &CartStore::new());
        assert!(html.contains("No products available."));
    }

    #[test]
    fn test_shop_error_presentation() {
        let error = CatalogError::Status {
            status: 500,
            url: "https://api.example.com/products".to_string(),
        };
        let html = render_shop_error(&error);
        assert!(html.contains("Unable to load products"));
        assert!(html.contains("HTTP 500"));
    }
}
