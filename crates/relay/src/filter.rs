//! Relevance filtering of killmail participants.

use zkb_events::{Attacker, Victim, ZkbPackage};

use crate::matcher::{is_relevant, WatchSet};

/// Returns true if any of the attacker's character, corporation or alliance
/// is watched. NPC attackers are never relevant.
pub fn attacker_is_relevant(attacker: &Attacker, watch: &WatchSet) -> bool {
    !attacker.is_npc()
        && (is_relevant(&attacker.character, &watch.characters)
            || is_relevant(&attacker.corporation, &watch.corporations)
            || is_relevant(&attacker.alliance, &watch.alliances))
}

/// Returns true if any of the victim's character, corporation or alliance is watched.
pub fn victim_is_relevant(victim: &Victim, watch: &WatchSet) -> bool {
    is_relevant(&victim.character, &watch.characters)
        || is_relevant(&victim.corporation, &watch.corporations)
        || is_relevant(&victim.alliance, &watch.alliances)
}

/// Collects the watched attackers in killmail order.
pub fn relevant_attackers<'a>(package: &'a ZkbPackage, watch: &WatchSet) -> Vec<&'a Attacker> {
    package
        .killmail
        .attackers
        .iter()
        .filter(|a| attacker_is_relevant(a, watch))
        .collect()
}

/// Returns the victim if it is watched.
pub fn relevant_victim<'a>(package: &'a ZkbPackage, watch: &WatchSet) -> Option<&'a Victim> {
    let victim = &package.killmail.victim;
    victim_is_relevant(victim, watch).then_some(victim)
}

#[cfg(test)]
mod tests {
    use super::*;
    use zkb_events::{Killmail, NamedEntity};

    fn watch() -> WatchSet {
        WatchSet::parse("Bob Nobody", "98000001", "Test Alliance Please Ignore")
    }

    fn make_package(attackers: Vec<Attacker>, victim: Victim) -> ZkbPackage {
        ZkbPackage::new(
            1,
            Killmail {
                attacker_count: attackers.len() as i64,
                attackers,
                victim,
                solar_system: NamedEntity::new(30000142, "Jita"),
            },
            0.0,
        )
    }

    fn unwatched_victim() -> Victim {
        Victim::new(NamedEntity::new(9, "Nobody Special"), NamedEntity::new(587, "Rifter"))
    }

    #[test]
    fn test_attacker_matched_by_each_kind() {
        let by_char = Attacker::new(NamedEntity::new(1, "Bob Nobody"), 10, false);
        let by_corp = Attacker::new(NamedEntity::new(2, "Dax"), 10, false)
            .with_corporation(NamedEntity::new(98000001, "Hard Knocks Salvage"));
        let by_alliance = Attacker::new(NamedEntity::new(3, "Kira"), 10, false)
            .with_alliance(NamedEntity::new(99000001, "Test Alliance Please Ignore"));
        let nobody = Attacker::new(NamedEntity::new(4, "Zed"), 10, false);

        let w = watch();
        assert!(attacker_is_relevant(&by_char, &w));
        assert!(attacker_is_relevant(&by_corp, &w));
        assert!(attacker_is_relevant(&by_alliance, &w));
        assert!(!attacker_is_relevant(&nobody, &w));
    }

    #[test]
    fn test_watch_lists_are_typed() {
        // A corporation name on the character list does not match the corporation
        let w = WatchSet::parse("Hard Knocks Salvage", "", "");
        let attacker = Attacker::new(NamedEntity::new(2, "Dax"), 10, false)
            .with_corporation(NamedEntity::new(98000001, "Hard Knocks Salvage"));
        assert!(!attacker_is_relevant(&attacker, &w));
    }

    #[test]
    fn test_relevant_attackers_keep_order() {
        let package = make_package(
            vec![
                Attacker::new(NamedEntity::new(1, "Bob Nobody"), 10, false),
                Attacker::new(NamedEntity::new(4, "Zed"), 900, true),
                Attacker::new(NamedEntity::new(2, "Dax"), 50, false)
                    .with_corporation(NamedEntity::new(98000001, "")),
            ],
            unwatched_victim(),
        );

        let names: Vec<_> = relevant_attackers(&package, &watch())
            .iter()
            .map(|a| a.character.name.as_str())
            .collect();
        assert_eq!(names, vec!["Bob Nobody", "Dax"]);
    }

    #[test]
    fn test_npc_never_relevant() {
        // NPC in a watched corporation, left in place on purpose
        let npc = Attacker::new(NamedEntity::default(), 10, true)
            .with_corporation(NamedEntity::new(98000001, "Hard Knocks Salvage"));
        let package = make_package(vec![npc], unwatched_victim());

        assert!(relevant_attackers(&package, &watch()).is_empty());
    }

    #[test]
    fn test_relevant_victim() {
        let w = watch();
        let package = make_package(vec![], unwatched_victim());
        assert!(relevant_victim(&package, &w).is_none());

        let victim = unwatched_victim()
            .with_alliance(NamedEntity::new(99000001, "Test Alliance Please Ignore"));
        let package = make_package(vec![], victim);
        let found = relevant_victim(&package, &w).unwrap();
        assert_eq!(found.character.name, "Nobody Special");
    }

    #[test]
    fn test_filter_never_grows() {
        let package = make_package(
            vec![
                Attacker::new(NamedEntity::new(1, "Bob Nobody"), 10, false),
                Attacker::new(NamedEntity::new(1, "Bob Nobody"), 20, true),
            ],
            unwatched_victim(),
        );
        assert!(relevant_attackers(&package, &watch()).len() <= package.killmail.attackers.len());
    }
}
