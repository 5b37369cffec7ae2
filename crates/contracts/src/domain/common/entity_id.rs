use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

/// Identifier types that travel through URLs and query strings
pub trait EntityId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + fmt::Debug
{
    /// Render the id for a path segment
    fn as_string(&self) -> String;

    /// Parse the id back from a path segment or query parameter
    fn from_string(s: &str) -> Result<Self, String>;
}

/// Backend-assigned record id. Never generated on the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub i64);

impl RecordId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl EntityId for RecordId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.trim()
            .parse::<i64>()
            .map(RecordId)
            .map_err(|e| format!("Invalid record id '{}': {}", s, e))
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parent scope a resource list is nested under (`configuracion_id`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScopeId(pub i64);

impl ScopeId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl EntityId for ScopeId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.trim()
            .parse::<i64>()
            .map(ScopeId)
            .map_err(|e| format!("Invalid scope id '{}': {}", s, e))
    }
}

impl fmt::Display for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_transparent_on_the_wire() {
        let id: RecordId = serde_json::from_str("17").unwrap();
        assert_eq!(id, RecordId(17));
        assert_eq!(serde_json::to_string(&ScopeId(42)).unwrap(), "42");
    }

    #[test]
    fn test_from_string() {
        assert_eq!(RecordId::from_string(" 7 ").unwrap(), RecordId(7));
        assert!(ScopeId::from_string("abc").is_err());
    }
}
