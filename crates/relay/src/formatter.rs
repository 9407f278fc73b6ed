//! One-line notification text.
//!
//! Markdown flavoured for chat webhooks: `**bold**` for pilots and systems,
//! `*italic*` for ship and value.

use zkb_events::{Attacker, Victim, ZkbPackage};

/// Base URL of a kill page.
pub const KILL_URL: &str = "https://zkillboard.com/kill/";

/// Attackers named individually before the rest are folded into a count.
pub const NAMED_ATTACKERS: usize = 3;

/// Formats an ISK value with thousands separators and two decimals.
///
/// ```
/// assert_eq!(relay::formatter::format_isk(1_234_567.891), "1,234,567.89");
/// assert_eq!(relay::formatter::format_isk(999.0), "999.00");
/// ```
pub fn format_isk(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3 + 4);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let negative = value < 0.0 && fixed.bytes().any(|b| b != b'0' && b != b'.');
    format!("{}{}.{}", if negative { "-" } else { "" }, grouped, frac_part)
}

/// Joins name tokens: `"A (solo)"`, `"A and B"`, `"A, B and C"`.
pub fn join_names(tokens: &[String]) -> String {
    match tokens {
        [] => String::new(),
        [only] => format!("{} (solo)", only),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}

/// Builds the attacker section of a kill message.
///
/// The first ranked attacker is bold. Watched attackers past the first
/// three and every unwatched attacker on the killmail are folded into a
/// trailing `"N other(s)"` token.
pub fn attacker_section(package: &ZkbPackage, ranked: &[&Attacker]) -> String {
    let other = package.killmail.attackers.len().saturating_sub(ranked.len());
    let extra = ranked.len().saturating_sub(NAMED_ATTACKERS);

    let mut tokens: Vec<String> = ranked
        .iter()
        .take(NAMED_ATTACKERS)
        .enumerate()
        .map(|(i, a)| {
            if i == 0 {
                format!("**{}**", a.character.name)
            } else {
                a.character.name.clone()
            }
        })
        .collect();

    if other + extra > 0 {
        tokens.push(format!("{} other(s)", other + extra));
    }

    join_names(&tokens)
}

/// Formats a kill made by watched attackers.
///
/// `ranked` is expected to be non-empty and already in display order.
pub fn format_kill_message(package: &ZkbPackage, ranked: &[&Attacker]) -> String {
    let killmail = &package.killmail;
    format!(
        "{} killed **{}** (*{}*; *{}* ISK) in **{}** -- {}{}",
        attacker_section(package, ranked),
        killmail.victim.character.name,
        killmail.victim.ship_type.name,
        format_isk(package.metadata.total_value),
        killmail.solar_system.name,
        KILL_URL,
        package.kill_id,
    )
}

/// Formats the loss of a watched victim.
///
/// The attacker count covers player attackers only; NPCs counted by the
/// server get their own clause.
pub fn format_loss_message(package: &ZkbPackage, victim: &Victim) -> String {
    let killmail = &package.killmail;
    let npc_count = killmail.npc_count();
    let npc_section = if npc_count > 0 {
        format!("and {} NPC(s) ", npc_count)
    } else {
        String::new()
    };

    format!(
        "**{}** was killed (*{}*; *{}* ISK) by {} attacker(s) {}in **{}** -- {}{}",
        victim.character.name,
        victim.ship_type.name,
        format_isk(package.metadata.total_value),
        killmail.attackers.len(),
        npc_section,
        killmail.solar_system.name,
        KILL_URL,
        package.kill_id,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use zkb_events::{Killmail, NamedEntity};

    fn make_package(kill_id: i64, attackers: Vec<Attacker>, attacker_count: i64, value: f64) -> ZkbPackage {
        ZkbPackage::new(
            kill_id,
            Killmail {
                attacker_count,
                attackers,
                victim: Victim::new(NamedEntity::new(9, "V"), NamedEntity::new(587, "Rifter")),
                solar_system: NamedEntity::new(30000142, "Jita"),
            },
            value,
        )
    }

    fn pilot(name: &str, damage: i64, final_blow: bool) -> Attacker {
        Attacker::new(NamedEntity::new(1, name), damage, final_blow)
    }

    #[test]
    fn test_format_isk() {
        assert_eq!(format_isk(0.0), "0.00");
        assert_eq!(format_isk(12.5), "12.50");
        assert_eq!(format_isk(999.999), "1,000.00");
        assert_eq!(format_isk(1_000.0), "1,000.00");
        assert_eq!(format_isk(1_500_000.0), "1,500,000.00");
        assert_eq!(format_isk(123_456_789.01), "123,456,789.01");
        assert_eq!(format_isk(-2_500.5), "-2,500.50");
        assert_eq!(format_isk(-0.001), "0.00");
    }

    #[test]
    fn test_join_names() {
        let t = |v: &[&str]| v.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        assert_eq!(join_names(&t(&["**A**"])), "**A** (solo)");
        assert_eq!(join_names(&t(&["**A**", "B"])), "**A** and B");
        assert_eq!(join_names(&t(&["**A**", "B", "C", "4 other(s)"])), "**A**, B, C and 4 other(s)");
        assert_eq!(join_names(&[]), "");
    }

    #[test]
    fn test_solo_kill_message() {
        let bob = pilot("Bob", 500, true);
        let mut package = make_package(42, vec![bob.clone()], 1, 1_500_000.0);
        package.killmail.victim.character.name = "Alice".to_string();

        let message = format_kill_message(&package, &[&bob]);

        assert_eq!(
            message,
            "**Bob** (solo) killed **Alice** (*Rifter*; *1,500,000.00* ISK) in **Jita** -- https://zkillboard.com/kill/42"
        );
    }

    #[test]
    fn test_unwatched_attacker_counts_as_other() {
        let bob = pilot("Bob", 500, true);
        let zed = pilot("Zed", 50, false);
        let package = make_package(7, vec![bob.clone(), zed], 2, 10.0);

        assert_eq!(attacker_section(&package, &[&bob]), "**Bob** and 1 other(s)");
    }

    #[test]
    fn test_extra_watched_attackers_fold() {
        let pilots: Vec<Attacker> = ["A", "B", "C", "D", "E"]
            .iter()
            .map(|n| pilot(n, 10, false))
            .collect();
        let ranked: Vec<&Attacker> = pilots.iter().collect();
        let mut all = pilots.clone();
        all.push(pilot("Outsider", 1, false));
        let package = make_package(7, all, 6, 10.0);

        // 2 extra watched + 1 unwatched
        assert_eq!(attacker_section(&package, &ranked), "**A**, B, C and 3 other(s)");
    }

    #[test]
    fn test_three_named_no_others() {
        let pilots: Vec<Attacker> = ["B", "A", "C"].iter().map(|n| pilot(n, 10, false)).collect();
        let ranked: Vec<&Attacker> = pilots.iter().collect();
        let package = make_package(7, pilots.clone(), 3, 10.0);

        assert_eq!(attacker_section(&package, &ranked), "**B**, A and C");
    }

    #[test]
    fn test_loss_message_with_npcs() {
        let attackers = vec![pilot("X", 1, true), pilot("Y", 1, false), pilot("Z", 1, false)];
        let package = make_package(99, attackers, 5, 12_000_000.5);

        let message = format_loss_message(&package, &package.killmail.victim);

        assert_eq!(
            message,
            "**V** was killed (*Rifter*; *12,000,000.50* ISK) by 3 attacker(s) and 2 NPC(s) in **Jita** -- https://zkillboard.com/kill/99"
        );
    }

    #[test]
    fn test_loss_message_without_npcs() {
        let package = make_package(100, vec![pilot("X", 1, true)], 1, 10_000.0);

        let message = format_loss_message(&package, &package.killmail.victim);

        assert_eq!(
            message,
            "**V** was killed (*Rifter*; *10,000.00* ISK) by 1 attacker(s) in **Jita** -- https://zkillboard.com/kill/100"
        );
    }

    #[test]
    fn test_loss_to_npcs_only() {
        let package = make_package(101, vec![], 4, 0.0);

        let message = format_loss_message(&package, &package.killmail.victim);

        assert!(message.contains("by 0 attacker(s) and 4 NPC(s) in **Jita**"));
    }

    #[test]
    fn test_formatting_is_deterministic() {
        let bob = pilot("Bob", 500, true);
        let package = make_package(42, vec![bob.clone()], 1, 1.0);

        assert_eq!(
            format_kill_message(&package, &[&bob]),
            format_kill_message(&package, &[&bob])
        );
    }
}
