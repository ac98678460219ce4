//! Site navigation bar with the cart badge.

/// Render the navigation bar.
///
/// The badge shows the cart's current item count; the composition root
/// re-renders it from a fresh count after every mutation.
pub fn render_navigation(cart_item_count: i64) -> String {
    format!(
        r#"<nav class="site-nav" data-section="navigation">
    <a href="/" class="nav-brand">Cartwheel</a>
    <div class="nav-links">
        <a href="/">Home</a>
        <a href="/shop">Shop</a>
        <a href="/cart" class="nav-cart">Cart ({cart_item_count})</a>
    </div>
</nav>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_shows_count() {
        assert!(render_navigation(0).contains("Cart (0)"));
        assert!(render_navigation(3).contains("Cart (3)"));
    }

    #[test]
    fn test_links_cover_all_routes() {
        let html = render_navigation(0);
        assert!(html.contains(r#"href="/""#));
        assert!(html.contains(r#"href="/shop""#));
        assert!(html.contains(r#"href="/cart""#));
    }
}
