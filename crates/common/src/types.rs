use serde::{Deserialize, Serialize};

/// Declares an integer handle newtype.
///
/// Handles are positive; zero is representable so that callers can express
/// "no valid handle" at the edges, but stores never hand one out.
macro_rules! handle {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
            Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Wraps a raw handle value.
            pub const fn new(raw: u64) -> Self {
                Self(raw)
            }

            /// Converts a signed value coming from an outer layer.
            ///
            /// Returns `None` for zero and negative values.
            pub fn from_i64(raw: i64) -> Option<Self> {
                u64::try_from(raw).ok().filter(|v| *v > 0).map(Self)
            }

            /// Returns the underlying integer.
            pub const fn get(&self) -> u64 {
                self.0
            }

            /// Returns true if the handle is positive.
            pub const fn is_valid(&self) -> bool {
                self.0 > 0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(raw: u64) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

handle!(
    /// Identifier of a book in the catalog.
    BookId
);
handle!(
    /// Identifier of a customer. Customers live outside the core.
    CustomerId
);
handle!(
    /// Identifier of a shopping cart.
    CartId
);
handle!(CartItemId);
handle!(
    /// Identifier of a wishlist.
    WishlistId
);
handle!(WishlistItemId);
handle!(
    /// Identifier of a placed order.
    OrderId
);
handle!(OrderItemId);
