//! Composition root: routes pages and wires capabilities.

use cartwheel_commerce::CartError;
use cartwheel_data::CatalogClient;
use tracing::{info, warn};

use crate::boundary::render_boundary;
use crate::pages;
use crate::store::{CartIntent, CartStore};
use crate::views::render_navigation;

/// Navigable views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Shop,
    Cart,
}

impl Route {
    /// The path this route is served under.
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Shop => "/shop",
            Route::Cart => "/cart",
        }
    }

    /// Resolve a path to a route.
    pub fn from_path(path: &str) -> Option<Route> {
        match path {
            "/" => Some(Route::Home),
            "/shop" => Some(Route::Shop),
            "/cart" => Some(Route::Cart),
            _ => None,
        }
    }
}

/// Owns the catalog client and the cart store; renders routed pages.
///
/// Pages receive exactly the capabilities they need: the shop gets the
/// quantity lookup (and add intents travel back through [`App::dispatch`]),
/// the cart page gets the committed snapshot, and the navigation gets the
/// item count. Catalog fetches are awaited here, at page level; their
/// errors become the shop's error presentation and never reach the cart.
pub struct App {
    catalog: CatalogClient,
    store: CartStore,
}

impl App {
    /// Create an app with an empty cart.
    pub fn new(catalog: CatalogClient) -> Self {
        Self {
            catalog,
            store: CartStore::new(),
        }
    }

    /// The catalog client.
    pub fn catalog(&self) -> &CatalogClient {
        &self.catalog
    }

    /// The cart store, for reads and subscriptions.
    pub fn store(&self) -> &CartStore {
        &self.store
    }

    /// The cart store, for direct mutation.
    pub fn store_mut(&mut self) -> &mut CartStore {
        &mut self.store
    }

    /// Forward a view intent to the cart store.
    pub fn dispatch(&mut self, intent: CartIntent) -> Result<(), CartError> {
        self.store.apply(intent)
    }

    /// Render the page for `route`, navigation included.
    pub async fn render(&self, route: Route) -> String {
        info!(path = route.path(), "render page");
        let nav = render_navigation(self.store.item_count());

        let body = match route {
            Route::Home => render_boundary(pages::render_home),
            Route::Shop => match self.catalog.products().await {
                Ok(products) => render_boundary(|| pages::render_shop(&products, &self.store)),
                Err(error) => {
                    warn!(%error, "catalog fetch failed");
                    pages::render_shop_error(&error)
                }
            },
            Route::Cart => {
                let snapshot = self.store.snapshot();
                render_boundary(|| pages::render_cart(&snapshot))
            }
        };

        format!("{nav}\n<main>\n{body}\n</main>")
    }
}
