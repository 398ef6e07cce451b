//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types.

/// Macro to define a type-safe, string-backed ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - `generate()` for fresh time-ordered (UUIDv7) identifiers
/// - `new()`, `as_str()`, `into_inner()`
/// - `From<String>`, `From<&str>`, `Display` and `FromStr`
///
/// Stored identifiers are opaque: any string read back from storage is
/// accepted as-is, so identifiers minted by older writers keep working.
///
/// # Example
///
/// ```rust
/// # use artisan_connect_core::define_id;
/// define_id!(ShopId);
/// define_id!(OrderId);
///
/// let shop_id = ShopId::new("1712345678901");
/// let order_id = OrderId::generate();
///
/// // These are different types, so this won't compile:
/// // let _: ShopId = order_id;
/// # let _ = (shop_id, order_id);
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap an existing identifier.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Mint a fresh, time-ordered identifier.
            #[must_use]
            pub fn generate() -> Self {
                Self(::uuid::Uuid::now_v7().to_string())
            }

            /// Get the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the ID and return the inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = ::core::convert::Infallible;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                Ok(Self(s.to_owned()))
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(ArtisanId);
define_id!(ReviewId);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_unique() {
        let a = ArtisanId::generate();
        let b = ArtisanId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_generated_ids_are_time_ordered() {
        let first = ReviewId::generate();
        let second = ReviewId::generate();
        assert!(first < second);
    }

    #[test]
    fn test_legacy_ids_round_trip() {
        let id: ArtisanId = serde_json::from_str("\"1712345678901\"").unwrap();
        assert_eq!(id.as_str(), "1712345678901");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"1712345678901\"");
    }
}
