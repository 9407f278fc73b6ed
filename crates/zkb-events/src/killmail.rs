//! Killmail Types
//!
//! Wire types for the RedisQ listen document. Every field is optional on the
//! wire: absent and `null` values decode to their defaults, and a package without a
//! kill id is treated as "no event".

use serde::{Deserialize, Deserializer, Serialize};

use crate::entity::NamedEntity;

/// Reads an explicit `null` the same way as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One participant that dealt damage to the victim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Attacker {
    #[serde(deserialize_with = "null_as_default")]
    pub character: NamedEntity,
    #[serde(deserialize_with = "null_as_default")]
    pub corporation: NamedEntity,
    #[serde(deserialize_with = "null_as_default")]
    pub alliance: NamedEntity,
    pub damage_done: i64,
    pub final_blow: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub ship_type: NamedEntity,
    #[serde(deserialize_with = "null_as_default")]
    pub weapon_type: NamedEntity,
}

impl Attacker {
    /// Creates an attacker with only a character, damage and final blow flag set.
    pub fn new(character: NamedEntity, damage_done: i64, final_blow: bool) -> Self {
        Self {
            character,
            damage_done,
            final_blow,
            ..Self::default()
        }
    }

    /// Sets the corporation.
    pub fn with_corporation(mut self, corporation: NamedEntity) -> Self {
        self.corporation = corporation;
        self
    }

    /// Sets the alliance.
    pub fn with_alliance(mut self, alliance: NamedEntity) -> Self {
        self.alliance = alliance;
        self
    }

    /// Environmental and NPC attackers carry no character id.
    pub fn is_npc(&self) -> bool {
        self.character.id == 0
    }
}

/// The destroyed ship and its pilot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Victim {
    #[serde(deserialize_with = "null_as_default")]
    pub character: NamedEntity,
    #[serde(deserialize_with = "null_as_default")]
    pub corporation: NamedEntity,
    #[serde(deserialize_with = "null_as_default")]
    pub alliance: NamedEntity,
    pub damage_taken: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub ship_type: NamedEntity,
}

impl Victim {
    /// Creates a victim flying the given ship.
    pub fn new(character: NamedEntity, ship_type: NamedEntity) -> Self {
        Self {
            character,
            ship_type,
            ..Self::default()
        }
    }

    /// Sets the corporation.
    pub fn with_corporation(mut self, corporation: NamedEntity) -> Self {
        self.corporation = corporation;
        self
    }

    /// Sets the alliance.
    pub fn with_alliance(mut self, alliance: NamedEntity) -> Self {
        self.alliance = alliance;
        self
    }
}

/// The combat record itself.
///
/// `attacker_count` includes NPC attackers even after they have been
/// stripped from `attackers`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Killmail {
    pub attacker_count: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub attackers: Vec<Attacker>,
    #[serde(deserialize_with = "null_as_default")]
    pub victim: Victim,
    #[serde(deserialize_with = "null_as_default")]
    pub solar_system: NamedEntity,
}

impl Killmail {
    /// Number of attackers counted by the server but absent from `attackers`.
    pub fn npc_count(&self) -> usize {
        let listed = self.attackers.len() as i64;
        self.attacker_count.saturating_sub(listed).max(0) as usize
    }
}

/// zKillboard metadata attached to a package.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ZkbMetadata {
    pub total_value: f64,
}

/// A killmail together with its id and valuation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZkbPackage {
    #[serde(deserialize_with = "null_as_default")]
    pub killmail: Killmail,
    #[serde(rename = "killID")]
    pub kill_id: i64,
    #[serde(rename = "zkb", deserialize_with = "null_as_default")]
    pub metadata: ZkbMetadata,
}

impl ZkbPackage {
    /// Creates a package with the given id, killmail and value.
    pub fn new(kill_id: i64, killmail: Killmail, total_value: f64) -> Self {
        Self {
            killmail,
            kill_id,
            metadata: ZkbMetadata { total_value },
        }
    }

    /// Removes NPC attackers, keeping the order of the rest.
    ///
    /// Returns how many were removed. `attacker_count` is left untouched so
    /// the NPC tally stays recoverable through [`Killmail::npc_count`].
    pub fn strip_npcs(&mut self) -> usize {
        let before = self.killmail.attackers.len();
        self.killmail.attackers.retain(|a| !a.is_npc());
        before - self.killmail.attackers.len()
    }

    /// Serializes the package to a JSON line (for JSONL replay files).
    pub fn to_jsonl(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserializes a package from a JSON line.
    pub fn from_jsonl(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }
}

/// Top level document returned by the listen endpoint.
///
/// `package` is `null` when no kill arrived within the server's wait window.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedisQResponse {
    pub package: Option<ZkbPackage>,
}

/// Decodes a raw listen document.
///
/// Malformed JSON, an empty package and a package whose kill id is zero all
/// come back as `None`.
pub fn decode_package(raw: &[u8]) -> Option<ZkbPackage> {
    let response: RedisQResponse = serde_json::from_slice(raw).ok()?;
    response.package.filter(|p| p.kill_id != 0)
}
