use std::{error::Error as StdError, fmt};

// Macro to declare a detail error type carrying a fixed reason string plus
// whatever context value is useful for diagnostics.
macro_rules! detail_error {
    ($name:literal, $error:ident, $value_type:ty) => {
        #[doc = concat!("Invalid ", $name, ".")]
        #[derive(Clone, Debug, PartialEq)]
        #[allow(
            clippy::derive_partial_eq_without_eq,
            reason = "value type is not always Eq"
        )]
        pub struct $error {
            /// Context describing what was invalid.
            pub value: $value_type,
            /// The reason it was rejected.
            pub reason: &'static str,
        }

        impl $error {
            pub(crate) fn new(value: $value_type, reason: &'static str) -> Self {
                Self { value, reason }
            }
        }

        impl fmt::Display for $error {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "invalid {} ({:?}): {}", $name, self.value, self.reason)
            }
        }

        impl StdError for $error {
            fn source(&self) -> Option<&(dyn StdError + 'static)> {
                None
            }
        }
    };
}

detail_error!("grid parameter", InvalidParameter, String);
detail_error!("binary layout", FormatViolation, String);
detail_error!("directory lookup", NotFound, String);
detail_error!("array shape", ShapeMismatch, String);
detail_error!("configuration option", UnsupportedConfiguration, String);
