//! Cart page.

use crate::store::CartSnapshot;
use crate::views::render_cart_item;

/// Render the cart page from a snapshot.
///
/// The page receives the committed snapshot (collection plus derived
/// numbers); row controls and the clear button forward intents back to the
/// store.
pub fn render_cart(snapshot: &CartSnapshot) -> String {
    if snapshot.items.is_empty() {
        return r#"<section class="cart cart--empty" data-section="cart">
    <h2>Your Cart</h2>
    <p>Your cart is empty.</p>
    <a href="/shop">Continue shopping</a>
</section>"#
            .to_string();
    }

    let rows: Vec<String> = snapshot.items.iter().map(render_cart_item).collect();

    format!(
        r#"<section class="cart" data-section="cart">
    <h2>Your Cart</h2>
    <p class="cart-count">{count} item(s)</p>
{rows}
    <div class="cart-summary">
        <span>Total</span>
        <strong class="cart-total">{total}</strong>
    </div>
    <button class="cart-clear" data-intent="clear">Clear Cart</button>
</section>"#,
        count = snapshot.item_count,
        rows = rows.join("\n"),
        total = snapshot.total.display()
    )
}
