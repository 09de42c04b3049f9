use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use uuid::Uuid;

// Stored documents carry free-form string ids ("1", "2", timestamps), so ids
// wrap a String rather than a Uuid. Fresh ids are v4 uuids.
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                Ok(Self::from_value(&Value::deserialize(deserializer)?))
            }
        }

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Numeric ids keep their digits; missing or empty ids get a fresh one.
            fn from_value(value: &Value) -> Self {
                match value {
                    Value::String(s) if !s.is_empty() => Self(s.clone()),
                    Value::Number(n) => Self(n.to_string()),
                    _ => Self::new(),
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

define_id!(ItemId);
define_id!(TeamMemberId);
define_id!(PokemonId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_ids_are_unique() {
        assert_ne!(ItemId::new(), ItemId::new());
    }

    #[test]
    fn ids_serialize_as_plain_strings() {
        let id = TeamMemberId::from("1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"1\"");
        let parsed: TeamMemberId = serde_json::from_str("\"42\"").unwrap();
        assert_eq!(parsed.as_str(), "42");
    }

    #[test]
    fn numeric_and_missing_ids_are_tolerated() {
        let parsed: ItemId = serde_json::from_str("1717171717171").unwrap();
        assert_eq!(parsed.as_str(), "1717171717171");
        let parsed: PokemonId = serde_json::from_str("null").unwrap();
        assert!(!parsed.as_str().is_empty());
    }
}
