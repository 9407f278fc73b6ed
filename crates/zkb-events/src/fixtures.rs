//! Sample data fixtures for testing.
//!
//! This module provides ready-made killmails for other crates to use.
//! Enable the `test-fixtures` feature to access these helpers.
//!
//! # Example
//!
//! ```ignore
//! // In your Cargo.toml:
//! // [dev-dependencies]
//! // zkb-events = { path = "../zkb-events", features = ["test-fixtures"] }
//!
//! use zkb_events::fixtures;
//!
//! let packages = fixtures::sample_packages();
//! let solo = fixtures::solo_kill();
//! ```
//!
//! The packages are built around one watch setup: the character
//! `Bob Nobody`, the corporation id `98000001` and the alliance
//! `Test Alliance Please Ignore`.

use crate::ZkbPackage;

/// Returns sample packages from the fixtures file.
///
/// Contains 6 packages, NPC attackers not yet stripped:
/// - 1001: Bob Nobody solo kill in Jita
/// - 1002: gang kill by four watched corp members, one outsider and one NPC
/// - 1003: alliance member lost to three pilots and two NPCs
/// - 1004: nobody watched involved
/// - 1005: Bob Nobody loses an Ibis
/// - 1006: Bob Nobody kills an alliance member (attack and loss both match)
pub fn sample_packages() -> Vec<ZkbPackage> {
    let jsonl = include_str!("../tests/fixtures/sample_packages.jsonl");
    jsonl
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| {
            ZkbPackage::from_jsonl(l).unwrap_or_else(|e| {
                panic!("Failed to parse package line: {}\nError: {}", l, e)
            })
        })
        .collect()
}

/// Returns a specific package by kill id.
pub fn get_package(kill_id: i64) -> Option<ZkbPackage> {
    sample_packages().into_iter().find(|p| p.kill_id == kill_id)
}

/// Returns the solo kill (1001).
pub fn solo_kill() -> ZkbPackage {
    get_package(1001).expect("solo kill fixture missing")
}

/// Returns the gang kill (1002).
pub fn gang_kill() -> ZkbPackage {
    get_package(1002).expect("gang kill fixture missing")
}

/// Returns the alliance loss with NPCs on the killmail (1003).
pub fn alliance_loss() -> ZkbPackage {
    get_package(1003).expect("alliance loss fixture missing")
}

/// Returns the package nobody watches (1004).
pub fn unrelated_kill() -> ZkbPackage {
    get_package(1004).expect("unrelated fixture missing")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_packages_load() {
        let packages = sample_packages();
        assert_eq!(packages.len(), 6);
        assert!(packages.iter().all(|p| p.kill_id != 0));
    }

    #[test]
    fn test_gang_kill_has_npc() {
        let package = gang_kill();
        assert_eq!(package.killmail.attackers.len(), 6);
        assert_eq!(package.killmail.attackers.iter().filter(|a| a.is_npc()).count(), 1);
    }

    #[test]
    fn test_alliance_loss_counts() {
        let mut package = alliance_loss();
        assert_eq!(package.strip_npcs(), 2);
        assert_eq!(package.killmail.npc_count(), 2);
    }

    #[test]
    fn test_get_missing_package() {
        assert!(get_package(9999).is_none());
        assert_eq!(unrelated_kill().kill_id, 1004);
        assert_eq!(solo_kill().killmail.victim.character.name, "Alice Vex");
    }
}
