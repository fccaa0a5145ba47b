use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque entity identifier.
///
/// The backend may send ids as JSON strings or numbers; both normalize to the
/// same string form so ids compare equal regardless of how they arrived.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RawId", into = "String")]
pub struct Id(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

impl From<RawId> for Id {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(s) => Id(s),
            RawId::Number(n) => Id(n.to_string()),
        }
    }
}

impl From<Id> for String {
    fn from(id: Id) -> Self {
        id.0
    }
}

impl Id {
    pub fn new(id: impl Into<String>) -> Self {
        Id(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Id {
    fn from(s: &str) -> Self {
        Id(s.to_string())
    }
}

impl From<String> for Id {
    fn from(s: String) -> Self {
        Id(s)
    }
}

/// Entities addressable by id inside a locally held list.
pub trait HasId {
    fn id(&self) -> &Id;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_and_number_ids_normalize() {
        let a: Id = serde_json::from_str("\"42\"").unwrap();
        let b: Id = serde_json::from_str("42").unwrap();
        assert_eq!(a, b);
        assert_eq!(b.as_str(), "42");
    }

    #[test]
    fn test_serializes_as_string() {
        let id = Id::new("c0ffee");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"c0ffee\"");
        assert_eq!(id.to_string(), "c0ffee");
    }
}
