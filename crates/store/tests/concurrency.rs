//! Concurrency tests for the in-memory stores.

use std::collections::HashSet;

use futures_util::future::join_all;
use store::{
    BookId, CartStore, CustomerId, InMemoryCartStore, InMemoryOrderStore, InMemoryWishlistStore,
    Money, NewOrderItem, OrderStore, WishlistStore,
};

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn concurrent_adds_of_one_book_merge_into_one_line() {
    let store = InMemoryCartStore::new();
    let cart = store.create_cart(CustomerId::new(1)).await.unwrap();
    let cart_id = cart.id;
    let book = BookId::new(42);

    let tasks = (0..100).map(|_| {
        let store = store.clone();
        tokio::spawn(async move { store.add_item(cart_id, book, 1).await })
    });
    for result in join_all(tasks).await {
        result.unwrap().unwrap();
    }

    let (_, items) = store.get_cart(cart_id).await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].book_id, book);
    assert_eq!(items[0].quantity, 100);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn delete_racing_adds_leaves_no_cart_behind() {
    for round in 1..=20u64 {
        let store = InMemoryCartStore::new();
        let cart = store.create_cart(CustomerId::new(round)).await.unwrap();
        let cart_id = cart.id;

        let adds = (1..=16u64).map(|n| {
            let store = store.clone();
            tokio::spawn(async move { store.add_item(cart_id, BookId::new(n % 3 + 1), 1).await })
        });
        let delete = {
            let store = store.clone();
            tokio::spawn(async move { store.delete_cart(cart_id).await })
        };

        let (added, deleted) = tokio::join!(join_all(adds), delete);
        deleted.unwrap().unwrap();
        for result in added {
            if let Err(err) = result.unwrap() {
                assert!(err.is_not_found(), "unexpected error: {err}");
            }
        }

        assert!(store.get_cart(cart_id).await.unwrap_err().is_not_found());
        let late = store.add_item(cart_id, BookId::new(1), 1).await;
        assert!(late.unwrap_err().is_not_found());
        assert!(store.list_carts().await.unwrap().is_empty());
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn concurrent_adds_across_carts_do_not_interfere() {
    let store = InMemoryCartStore::new();
    let mut carts = Vec::new();
    for customer in 1..=10 {
        carts.push(store.create_cart(CustomerId::new(customer)).await.unwrap());
    }

    let tasks = carts.iter().flat_map(|cart| {
        let cart_id = cart.id;
        let store = store.clone();
        (1..=20u64).map(move |n| {
            let store = store.clone();
            tokio::spawn(async move { store.add_item(cart_id, BookId::new(n % 4 + 1), 2).await })
        })
    });
    for result in join_all(tasks).await {
        result.unwrap().unwrap();
    }

    let mut item_ids = HashSet::new();
    for cart in &carts {
        let (_, items) = store.get_cart(cart.id).await.unwrap();
        assert_eq!(items.len(), 4);
        assert_eq!(items.iter().map(|i| i.quantity).sum::<i64>(), 40);
        for item in items {
            assert!(item_ids.insert(item.id), "item id handed out twice");
        }
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn concurrent_wishlist_adds_are_not_lost() {
    let store = InMemoryWishlistStore::new();
    let wishlist_id = store.create_wishlist(CustomerId::new(9)).await.unwrap().id;

    let tasks = (0..50u64).map(|i| {
        let store = store.clone();
        tokio::spawn(async move { store.add_item(wishlist_id, BookId::new(i % 2 + 1), 3).await })
    });
    for result in join_all(tasks).await {
        result.unwrap().unwrap();
    }

    let (_, items) = store.get_wishlist(wishlist_id).await.unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items.iter().map(|i| i.quantity).sum::<i64>(), 150);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn concurrent_first_access_opens_a_single_cart() {
    let store = InMemoryCartStore::new();
    let customer = CustomerId::new(77);

    let tasks = (0..32).map(|_| {
        let store = store.clone();
        tokio::spawn(async move { store.for_customer(customer).await })
    });
    let ids: HashSet<_> = join_all(tasks)
        .await
        .into_iter()
        .map(|r| r.unwrap().unwrap().id)
        .collect();

    assert_eq!(ids.len(), 1);
    assert_eq!(store.list_carts().await.unwrap().len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn concurrent_order_creation_hands_out_unique_handles() {
    let store = InMemoryOrderStore::new();

    let tasks = (1..=40u64).map(|customer| {
        let store = store.clone();
        tokio::spawn(async move {
            let items = vec![
                NewOrderItem::new(BookId::new(1), Money::from_cents(500), 1),
                NewOrderItem::new(BookId::new(2), Money::from_cents(700), 2),
            ];
            store.create(CustomerId::new(customer), items).await
        })
    });

    let mut order_ids = HashSet::new();
    let mut item_ids = HashSet::new();
    for result in join_all(tasks).await {
        let (order, items) = result.unwrap().unwrap();
        assert_eq!(order.total, Money::from_cents(1900));
        assert!(order_ids.insert(order.id));
        for item in items {
            assert_eq!(item.order_id, order.id);
            assert!(item_ids.insert(item.id));
        }
    }
    assert_eq!(store.order_count().await, 40);
}
