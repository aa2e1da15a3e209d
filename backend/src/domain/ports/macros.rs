//! `define_port_error!` builds the error enum for a driven port.
//!
//! Each variant carries named fields and a display template. The macro adds
//! a snake_case constructor per variant whose parameters accept anything
//! convertible into the field type.

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident { $($field:ident : $ty:ty),+ $(,)? } => $message:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant { $($field: $ty),+ },
            )+
        }

        impl $name {
            $(
                ::paste::paste! {
                    #[doc = "Build the `" $variant "` variant."]
                    pub fn [<$variant:snake>]($($field: impl Into<$ty>),+) -> Self {
                        Self::$variant { $($field: $field.into()),+ }
                    }
                }
            )+
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    use rstest::rstest;

    define_port_error! {
        pub enum LedgerPortError {
            Connection { message: String } => "ledger unreachable: {message}",
            Rejected { reason: String, attempts: u8 } => "ledger rejected after {attempts}: {reason}",
        }
    }

    #[rstest]
    fn constructor_converts_borrowed_strings() {
        let err = LedgerPortError::connection("socket closed");
        assert_eq!(
            err,
            LedgerPortError::Connection {
                message: "socket closed".to_owned()
            }
        );
        assert_eq!(err.to_string(), "ledger unreachable: socket closed");
    }

    #[rstest]
    fn multi_field_variants_keep_parameter_order() {
        let err = LedgerPortError::rejected("duplicate", 3_u8);
        assert_eq!(err.to_string(), "ledger rejected after 3: duplicate");
    }
}
