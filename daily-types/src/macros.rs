/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

/// Declares a string-token enum that tolerates tokens it does not know.
///
/// Known tokens decode to their variant. Anything else is kept verbatim in
/// `Other` and encoded back unchanged, so a newer service value never fails
/// a decode.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $token:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// A token not known to this version of the crate.
            Other(String),
        }

        impl $name {
            /// The wire token for this value.
            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $token, )+
                    Self::Other(token) => token,
                }
            }
        }

        impl From<String> for $name {
            fn from(token: String) -> Self {
                match token.as_str() {
                    $( $token => Self::$variant, )+
                    _ => Self::Other(token),
                }
            }
        }

        impl From<&str> for $name {
            fn from(token: &str) -> Self {
                Self::from(token.to_string())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> String {
                match value {
                    $name::Other(token) => token,
                    known => known.as_str().to_string(),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}
