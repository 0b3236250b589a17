//! `define_port_error!`: port error enums with snake_case constructors.
//!
//! Each variant gets a `thiserror` message and a constructor named after it
//! whose parameters accept anything convertible into the field types, so
//! adapters can write `ProductRepositoryError::query(err.to_string())` or
//! `ProductRepositoryError::connection("refused")`.

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        ::paste::paste! {
            impl $name {
                $(
                    pub fn [<$variant:snake>]($( $($field: impl Into<$ty>),* )?) -> Self {
                        Self::$variant $( { $($field: $field.into()),* } )?
                    }
                )*
            }
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        pub enum StoreProbeError {
            Offline => "store offline",
            Rejected { message: String } => "rejected: {message}",
            Lagging { message: String, seconds: u64 } => "{message} lagging by {seconds}s",
        }
    }

    #[test]
    fn unit_variants_get_nullary_constructors() {
        assert_eq!(StoreProbeError::offline(), StoreProbeError::Offline);
    }

    #[test]
    fn string_fields_accept_str() {
        assert_eq!(
            StoreProbeError::rejected("bad filter").to_string(),
            "rejected: bad filter"
        );
    }

    #[test]
    fn mixed_fields_keep_their_types() {
        let err = StoreProbeError::lagging("replica", 3_u64);
        assert_eq!(err.to_string(), "replica lagging by 3s");
    }
}
