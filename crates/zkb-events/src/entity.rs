//! Named entities embedded in a killmail.

use serde::{Deserialize, Serialize};

/// A character, corporation, alliance, ship type, weapon type or solar system.
///
/// Entities are snapshots taken from a single killmail. Fields missing from
/// the wire document decode to `0` and the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct NamedEntity {
    pub id: i64,
    pub name: String,
}

impl NamedEntity {
    /// Creates a new entity.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// True when the document carried neither an id nor a name.
    pub fn is_absent(&self) -> bool {
        self.id == 0 && self.name.is_empty()
    }

    /// The id rendered the way users write it in watch-lists.
    pub fn id_token(&self) -> String {
        self.id.to_string()
    }
}
