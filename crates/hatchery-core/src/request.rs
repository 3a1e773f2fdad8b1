//! Spawn requests and the memory payload attached to produced units.

use crate::body::Body;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// UnitMemory
// ---------------------------------------------------------------------------

/// Payload handed to the facility with a production request and attached to
/// the produced unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitMemory {
    /// Tag of the requester subsystem that asked for the unit.
    pub marker: Option<String>,
    /// Role the unit should take on once produced.
    pub role: Option<String>,
    /// Free-form key/value pairs owned by the requester.
    pub fields: BTreeMap<String, String>,
}

impl UnitMemory {
    pub fn with_marker(marker: impl Into<String>) -> Self {
        Self {
            marker: Some(marker.into()),
            ..Self::default()
        }
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }
}

// ---------------------------------------------------------------------------
// SpawnRequest
// ---------------------------------------------------------------------------

/// One queued request to produce a unit. Never mutated once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnRequest {
    body: Body,
    name: String,
    memory: Option<UnitMemory>,
}

impl SpawnRequest {
    pub fn new(body: Body, name: impl Into<String>, memory: Option<UnitMemory>) -> Self {
        Self {
            body,
            name: name.into(),
            memory,
        }
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn memory(&self) -> Option<&UnitMemory> {
        self.memory.as_ref()
    }

    /// The requester tag, if the request carries memory with a marker.
    pub fn marker(&self) -> Option<&str> {
        self.memory.as_ref().and_then(|m| m.marker.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::PartType;

    #[test]
    fn marker_from_memory() {
        let req = SpawnRequest::new(
            Body::base(),
            "h1",
            Some(UnitMemory::with_marker("harvest").role("harvester")),
        );
        assert_eq!(req.marker(), Some("harvest"));
        assert_eq!(req.memory().unwrap().role.as_deref(), Some("harvester"));
    }

    #[test]
    fn no_memory_no_marker() {
        let req = SpawnRequest::new(Body::new(vec![PartType::Move]), "m1", None);
        assert_eq!(req.marker(), None);
    }

    #[test]
    fn memory_without_marker() {
        let req = SpawnRequest::new(
            Body::base(),
            "u1",
            Some(UnitMemory::default().field("home", "W1N1")),
        );
        assert_eq!(req.marker(), None);
        assert_eq!(req.memory().unwrap().fields["home"], "W1N1");
    }
}
