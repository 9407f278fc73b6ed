//! Shared killfeed types and decoding for the relay.
//!
//! This crate contains pure data structures with no filtering or formatting
//! logic. It mirrors the document served by the zKillboard RedisQ listen
//! endpoint and is a dependency for all other crates in the workspace.

pub mod entity;
pub mod killmail;

#[cfg(any(test, feature = "test-fixtures"))]
pub mod fixtures;

pub use entity::NamedEntity;
pub use killmail::{
    decode_package, Attacker, Killmail, RedisQResponse, Victim, ZkbMetadata, ZkbPackage,
};
