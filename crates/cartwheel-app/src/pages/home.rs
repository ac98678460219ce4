//! Landing page.

/// Render the landing page.
pub fn render_home() -> String {
    r#"<section class="hero" data-section="home">
    <h2>Welcome to Cartwheel</h2>
    <p>Browse the catalog and build your cart.</p>
    <a href="/shop" class="btn">Browse Products</a>
</section>"#
        .to_string()
}
