//! Cartwheel storefront demo.
//!
//! Walks a short scripted session: render the landing page, add the first
//! two catalog products to the cart, then render the shop and cart pages.

use cartwheel_app::{App, CartIntent, Route};
use cartwheel_data::CatalogClient;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut app = App::new(CatalogClient::default());

    println!("{}\n", app.render(Route::Home).await);

    match app.catalog().products().await {
        Ok(products) => {
            for product in products.into_iter().take(2) {
                if let Err(error) = app.dispatch(CartIntent::Add {
                    product,
                    quantity: 1,
                }) {
                    warn!(%error, "add rejected");
                }
            }
        }
        Err(error) => warn!(%error, "catalog unavailable; cart stays empty"),
    }

    println!("{}\n", app.render(Route::Shop).await);
    println!("{}", app.render(Route::Cart).await);
}
