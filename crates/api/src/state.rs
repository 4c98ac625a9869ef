//! Shared application state.

use std::sync::Arc;

use checkout::CheckoutCoordinator;
use domain::{CartService, CatalogService, OrderService, WishlistService};
use store::{InMemoryBookStore, InMemoryCartStore, InMemoryOrderStore, InMemoryWishlistStore};

pub type Catalog = CatalogService<InMemoryBookStore>;
pub type Carts = CartService<InMemoryCartStore, InMemoryBookStore>;
pub type Wishlists = WishlistService<InMemoryWishlistStore, InMemoryBookStore>;
pub type Orders = OrderService<InMemoryOrderStore, InMemoryBookStore>;
pub type Checkout = CheckoutCoordinator<
    InMemoryBookStore,
    InMemoryCartStore,
    InMemoryWishlistStore,
    InMemoryOrderStore,
>;

/// Services shared by every handler.
///
/// All services are built over the same store instances, so a book created
/// through the catalog is immediately visible to carts and checkout.
pub struct AppState {
    pub catalog: Catalog,
    pub carts: Carts,
    pub wishlists: Wishlists,
    pub orders: Orders,
    pub checkout: Checkout,
}

impl AppState {
    /// Wires every service to one set of stores.
    pub fn new(
        books: InMemoryBookStore,
        carts: InMemoryCartStore,
        wishlists: InMemoryWishlistStore,
        orders: InMemoryOrderStore,
    ) -> Self {
        Self {
            catalog: CatalogService::new(books.clone()),
            carts: CartService::new(carts.clone(), books.clone()),
            wishlists: WishlistService::new(wishlists.clone(), books.clone()),
            orders: OrderService::new(orders.clone(), books.clone()),
            checkout: CheckoutCoordinator::new(books, carts, wishlists, orders),
        }
    }
}

/// Creates the default application state over fresh in-memory stores.
pub fn create_default_state() -> Arc<AppState> {
    Arc::new(AppState::new(
        InMemoryBookStore::new(),
        InMemoryCartStore::new(),
        InMemoryWishlistStore::new(),
        InMemoryOrderStore::new(),
    ))
}
