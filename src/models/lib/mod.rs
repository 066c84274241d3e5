//! Shared machinery for our heroic models.

/// A macro that standardizes the shape of our persisted record types: every
/// record gets a builder, public getters, crate-internal setters, serde
/// support, and created/updated timestamps. The caller of whatever operation
/// touches a record supplies the timestamps; the core never reads a clock on
/// its own.
#[macro_export]
macro_rules! ledger_model {
    (
        $(#[$struct_meta:meta])*
        pub struct $name:ident {
            $($fields:tt)*
        }
        $builder:ident
    ) => {
        $(#[$struct_meta])*
        #[derive(Clone, Debug, PartialEq, getset::Getters, getset::Setters, derive_builder::Builder, serde::Serialize, serde::Deserialize)]
        #[builder(pattern = "owned", setter(into))]
        #[getset(get = "pub", set = "pub(crate)")]
        pub struct $name {
            $($fields)*
            /// When this record was first written.
            created: chrono::DateTime<chrono::Utc>,
            /// When this record was last mutated.
            updated: chrono::DateTime<chrono::Utc>,
        }

        impl $name {
            pub fn builder() -> $builder {
                $builder::default()
            }
        }
    }
}
