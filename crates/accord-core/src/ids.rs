//! Non-empty identifiers for documents and users.
//!
//! Both are opaque strings assigned by the backend (usually UUIDs). The only
//! client-side rule is that they are never empty, so an acceptance or view
//! event can't be submitted without the identifiers it names.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} must not be empty")]
pub struct InvalidId {
    pub kind: &'static str,
}

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Result<Self, InvalidId> {
                let value = value.into();
                if value.trim().is_empty() {
                    return Err(InvalidId { kind: $kind });
                }
                Ok(Self(value))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = InvalidId;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = InvalidId;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl std::str::FromStr for $name {
            type Err = InvalidId;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
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

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(
    /// Identifier of a terms-of-use document or a privacy policy.
    DocumentId,
    "document id"
);

string_id!(
    /// Identifier of an authenticated user.
    UserId,
    "user id"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_blank() {
        assert_eq!(
            DocumentId::new("").unwrap_err(),
            InvalidId { kind: "document id" }
        );
        assert!(UserId::new("   ").is_err());
        assert_eq!(UserId::new("").unwrap_err().to_string(), "user id must not be empty");
    }

    #[test]
    fn keeps_value_verbatim() {
        let id: DocumentId = "7c9e6679-7425-40de-944b-e07fc1f90ae7".parse().unwrap();
        assert_eq!(id.as_str(), "7c9e6679-7425-40de-944b-e07fc1f90ae7");
        assert_eq!(id.to_string(), "7c9e6679-7425-40de-944b-e07fc1f90ae7");
    }

    #[test]
    fn deserialize_applies_same_check() {
        let ok: UserId = serde_json::from_str(r#""u1""#).unwrap();
        assert_eq!(ok.as_str(), "u1");
        assert!(serde_json::from_str::<UserId>(r#""""#).is_err());
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = DocumentId::new("t1").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""t1""#);
    }
}
