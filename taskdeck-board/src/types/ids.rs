//! ID wrapper types for type-safe identifiers.
//!
//! This module provides strongly typed ID wrappers around ULID to prevent
//! mixing up different types of identifiers in the system.

use serde::{Deserialize, Serialize};
use ulid::Ulid;

macro_rules! ulid_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(Ulid);

        impl $name {
            /// Generate a fresh identifier
            pub fn new() -> Self {
                Self(Ulid::new())
            }

            /// Wrap an existing ULID
            pub fn from_ulid(ulid: Ulid) -> Self {
                Self(ulid)
            }

            /// Get the underlying ULID
            pub fn as_ulid(&self) -> Ulid {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = ulid::DecodeError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Ulid::from_string(s)?))
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

ulid_id! {
    /// Task identifier
    TaskId
}

ulid_id! {
    /// Project identifier
    ProjectId
}

ulid_id! {
    /// Column identifier
    ColumnId
}

ulid_id! {
    /// Member identifier
    MemberId
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_ids_round_trip_as_strings() {
        let id = TaskId::new();
        let parsed = TaskId::from_str(&id.to_string()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_ids_serialize_as_strings() {
        let id = ColumnId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id));
    }

    #[test]
    fn test_distinct_ids_differ() {
        assert_ne!(MemberId::new(), MemberId::new());
    }
}
