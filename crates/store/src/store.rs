use async_trait::async_trait;

use crate::{
    Book, BookId, BookQuery, Cart, CartId, CartItem, CartItemId, CustomerId, NewBook,
    NewOrderItem, Order, OrderId, OrderItem, Result, Wishlist, WishlistId, WishlistItem,
    WishlistItemId,
};

/// Catalog of books.
///
/// All implementations must be thread-safe (Send + Sync).
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Stores a new book under a freshly assigned id.
    ///
    /// Fails with `InvalidArgument` if title or author is empty or the price
    /// is negative.
    async fn create(&self, book: NewBook) -> Result<Book>;

    /// Retrieves a book by id.
    async fn get(&self, id: BookId) -> Result<Book>;

    /// Lists books matching the query.
    ///
    /// Results come in insertion order unless the query names a known sort
    /// key.
    async fn list(&self, query: BookQuery) -> Result<Vec<Book>>;

    /// Replaces a stored book. Same validation as `create`.
    async fn update(&self, book: Book) -> Result<()>;

    /// Removes a book. Items referencing it are left untouched.
    async fn delete(&self, id: BookId) -> Result<()>;
}

/// Shopping carts and their items.
///
/// Reads return copies. Item operations on one cart are serialized; item
/// operations on different carts do not block each other.
#[async_trait]
pub trait CartStore: Send + Sync {
    /// Opens a new empty cart for the customer.
    async fn create_cart(&self, customer_id: CustomerId) -> Result<Cart>;

    /// Returns the customer's first cart, opening one if none exists.
    async fn for_customer(&self, customer_id: CustomerId) -> Result<Cart>;

    /// Retrieves a cart together with a copy of its items.
    async fn get_cart(&self, id: CartId) -> Result<(Cart, Vec<CartItem>)>;

    /// Lists all cart headers in id order.
    async fn list_carts(&self) -> Result<Vec<Cart>>;

    /// Replaces a cart header. Items are untouched.
    async fn update_cart(&self, cart: Cart) -> Result<()>;

    /// Removes a cart and all of its items.
    async fn delete_cart(&self, id: CartId) -> Result<()>;

    /// Adds `quantity` of a book to the cart.
    ///
    /// If the book is already in the cart its quantity is incremented,
    /// otherwise a new item is appended.
    async fn add_item(&self, cart_id: CartId, book_id: BookId, quantity: i64)
    -> Result<CartItem>;

    /// Sets the quantity of an existing item.
    async fn update_item(&self, cart_id: CartId, item_id: CartItemId, quantity: i64)
    -> Result<()>;

    /// Removes an item from the cart.
    async fn delete_item(&self, cart_id: CartId, item_id: CartItemId) -> Result<()>;
}

/// Wishlists and their items. Same contract as [`CartStore`].
#[async_trait]
pub trait WishlistStore: Send + Sync {
    async fn create_wishlist(&self, customer_id: CustomerId) -> Result<Wishlist>;

    async fn for_customer(&self, customer_id: CustomerId) -> Result<Wishlist>;

    async fn get_wishlist(&self, id: WishlistId) -> Result<(Wishlist, Vec<WishlistItem>)>;

    async fn list_wishlists(&self) -> Result<Vec<Wishlist>>;

    async fn update_wishlist(&self, wishlist: Wishlist) -> Result<()>;

    async fn delete_wishlist(&self, id: WishlistId) -> Result<()>;

    async fn add_item(
        &self,
        wishlist_id: WishlistId,
        book_id: BookId,
        quantity: i64,
    ) -> Result<WishlistItem>;

    async fn update_item(
        &self,
        wishlist_id: WishlistId,
        item_id: WishlistItemId,
        quantity: i64,
    ) -> Result<()>;

    async fn delete_item(&self, wishlist_id: WishlistId, item_id: WishlistItemId) -> Result<()>;
}

/// Ledger of placed orders.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Creates an order and its items atomically.
    ///
    /// Every item is validated before anything is written; on failure no part
    /// of the order is observable. The total is the sum of the line prices.
    async fn create(
        &self,
        customer_id: CustomerId,
        items: Vec<NewOrderItem>,
    ) -> Result<(Order, Vec<OrderItem>)>;

    /// Retrieves an order together with a copy of its items.
    async fn get(&self, id: OrderId) -> Result<(Order, Vec<OrderItem>)>;

    /// Lists all orders in id order.
    async fn list(&self) -> Result<Vec<Order>>;

    /// Lists the orders placed under a customer.
    async fn list_for_customer(&self, customer_id: CustomerId) -> Result<Vec<Order>>;

    /// Replaces owner, total and status. Items are never changed.
    async fn update(&self, order: Order) -> Result<()>;

    /// Removes an order and its items.
    async fn delete(&self, id: OrderId) -> Result<()>;
}
