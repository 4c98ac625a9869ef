//! Integration tests for services sharing one set of stores.

use domain::{CartService, CatalogService, DomainError, OrderService, WishlistService};
use store::{
    BookQuery, CustomerId, InMemoryBookStore, InMemoryCartStore, InMemoryOrderStore,
    InMemoryWishlistStore, Money, NewBook, NewOrderItem,
};

struct Services {
    catalog: CatalogService<InMemoryBookStore>,
    carts: CartService<InMemoryCartStore, InMemoryBookStore>,
    wishlists: WishlistService<InMemoryWishlistStore, InMemoryBookStore>,
    orders: OrderService<InMemoryOrderStore, InMemoryBookStore>,
}

fn services() -> Services {
    let books = InMemoryBookStore::new();
    Services {
        catalog: CatalogService::new(books.clone()),
        carts: CartService::new(InMemoryCartStore::new(), books.clone()),
        wishlists: WishlistService::new(InMemoryWishlistStore::new(), books.clone()),
        orders: OrderService::new(InMemoryOrderStore::new(), books),
    }
}

#[tokio::test]
async fn deleted_book_cannot_be_added_anywhere() {
    let s = services();
    let book = s
        .catalog
        .create_book(NewBook::new("Dune", "Frank Herbert", Money::from_cents(1000)))
        .await
        .unwrap();
    let customer = CustomerId::new(1);
    let cart = s.carts.cart_for_customer(customer).await.unwrap();
    let wishlist = s.wishlists.wishlist_for_customer(customer).await.unwrap();

    s.carts.add_item(cart.id, book.id, 1).await.unwrap();
    s.catalog.delete_book(book.id).await.unwrap();

    // Existing lines keep their reference.
    let (_, items) = s.carts.get_cart(cart.id).await.unwrap();
    assert_eq!(items[0].book_id, book.id);

    let cart_add = s.carts.add_item(cart.id, book.id, 1).await;
    assert!(matches!(cart_add, Err(DomainError::BookNotFound(_))));
    let wishlist_add = s.wishlists.add_item(wishlist.id, book.id, 1).await;
    assert!(matches!(wishlist_add, Err(DomainError::BookNotFound(_))));
    let order = s
        .orders
        .create_order(
            customer,
            vec![NewOrderItem::new(book.id, Money::from_cents(1000), 1)],
        )
        .await;
    assert!(matches!(order, Err(DomainError::BookNotFound(_))));
}

#[tokio::test]
async fn one_cart_and_wishlist_per_customer() {
    let s = services();
    let first = s.carts.cart_for_customer(CustomerId::new(3)).await.unwrap();
    let second = s.carts.cart_for_customer(CustomerId::new(3)).await.unwrap();
    let other = s.carts.cart_for_customer(CustomerId::new(4)).await.unwrap();
    assert_eq!(first.id, second.id);
    assert_ne!(first.id, other.id);

    let wishlist = s
        .wishlists
        .wishlist_for_customer(CustomerId::new(3))
        .await
        .unwrap();
    assert_eq!(s.wishlists.list_wishlists().await.unwrap(), vec![wishlist]);
}

#[tokio::test]
async fn catalog_updates_are_visible_to_listing() {
    let s = services();
    let mut book = s
        .catalog
        .create_book(NewBook::new("Emma", "Jane Austen", Money::from_cents(800)))
        .await
        .unwrap();

    book.genre = "Romance".to_string();
    s.catalog.update_book(book.clone()).await.unwrap();

    let listed = s
        .catalog
        .list_books(BookQuery::new().genre("ROMANCE"))
        .await
        .unwrap();
    assert_eq!(listed, vec![book]);
}
