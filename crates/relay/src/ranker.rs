//! Display ordering of watched attackers.
//!
//! The attacker who landed the final blow is mentioned first, the rest by
//! damage dealt. Two final-blow attackers (invalid data, but the feed has
//! produced it) both claim the front; the later one in killmail order wins.
//!
//! This ordering is the one notifications have always shown ("**B**, A and
//! C" for `[A 10, B 90 final blow, C 5]`). Sorting ascending with the bare
//! `final_blow || damage < other.damage` comparison would instead produce
//! "C, B, A", so do not swap [`passes`] for that comparison.

use zkb_events::Attacker;

/// Returns true if `attacker` moves ahead of `prev` in display order.
///
/// Short-circuits on the final blow flag without looking at `prev`, so the
/// relation is not a strict order when both carry the flag.
pub fn passes(attacker: &Attacker, prev: &Attacker) -> bool {
    attacker.final_blow || (!prev.final_blow && attacker.damage_done > prev.damage_done)
}

/// Orders attackers for mention, most notable first.
///
/// Insertion sort over [`passes`]. `slice::sort_by` is not usable here since
/// the relation is not total and the standard sorts may panic on that. The
/// output is a permutation of the input; attackers with equal damage keep
/// their killmail order.
pub fn rank(mut attackers: Vec<&Attacker>) -> Vec<&Attacker> {
    for i in 1..attackers.len() {
        let mut j = i;
        while j > 0 && passes(attackers[j], attackers[j - 1]) {
            attackers.swap(j, j - 1);
            j -= 1;
        }
    }
    attackers
}
