//! Product card for the shop grid.

use cartwheel_commerce::Product;

use crate::views::escape_html;

/// Render a product card.
///
/// `in_cart` is the quantity of this product already in the cart. The
/// quantity input stages a positive amount locally (`min="1"`); the add
/// button forwards an add intent for the staged amount.
pub fn render_product_card(product: &Product, in_cart: i64) -> String {
    let id = product.id;
    let title = escape_html(&product.title);
    let price = product.price.display();

    let image_html = if product.image.is_empty() {
        r#"<div class="card-image card-image--placeholder">No image</div>"#.to_string()
    } else {
        format!(
            r#"<img src="{}" alt="{}" class="card-image">"#,
            escape_html(&product.image),
            title
        )
    };

    let category_html = product
        .category
        .as_deref()
        .map(|c| format!(r#"<p class="card-category">{}</p>"#, escape_html(c)))
        .unwrap_or_default();

    let badge_html = if in_cart > 0 {
        format!(r#"<span class="card-in-cart">{in_cart} in cart</span>"#)
    } else {
        String::new()
    };

    format!(
        r#"<article class="product-card" data-product-id="{id}">
    {image_html}
    {category_html}
    <h3 class="card-title">{title}</h3>
    <p class="card-price">{price}</p>
    {badge_html}
    <div class="card-actions">
        <input type="number" class="card-quantity" value="1" min="1">
        <button class="card-add" data-intent="add" data-product-id="{id}">Add to Cart</button>
    </div>
</article>"#
    )
}
