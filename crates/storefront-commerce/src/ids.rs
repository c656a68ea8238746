//! Newtype IDs for catalog identifiers.
//!
//! The product API returns numeric ids for some records and string ids for
//! others, so both are accepted and held as strings.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

macro_rules! define_id {
    ($name:ident) => {
        /// A catalog identifier.
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// True if the upstream record carried no id.
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<u64> for $name {
            fn from(n: u64) -> Self {
                Self(n.to_string())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                #[derive(Deserialize)]
                #[serde(untagged)]
                enum Raw {
                    Int(i64),
                    Text(String),
                }

                Ok(match Option::<Raw>::deserialize(deserializer)? {
                    Some(Raw::Int(n)) => Self(n.to_string()),
                    Some(Raw::Text(s)) => Self(s),
                    None => Self::default(),
                })
            }
        }
    };
}

define_id!(ProductId);
define_id!(Slug);
