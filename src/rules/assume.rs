//! Assumption placement.
//!
//! Only `→S`, `¬S`, `∀S`, `◻S` are placed here, driven by a pending
//! goal's `gid` ending in `S`. `∃S`/`◇S` are not: `goal_list` never
//! produces an `S`-tagged child for ∃/◇ (it enumerates witness
//! candidates instead), so their assumption blocks are opened directly
//! by [crate::rules::elim::some_elim]/[crate::rules::elim::poss_elim].

use crate::formula::Formula;
use crate::goal::Goal;
use crate::line::{Line, Rule};

/// Finds the first pending goal whose `gid` ends in `S` at the current
/// cursor depth, determines which of the four assumption rules it calls
/// for, and appends that assumption line.
pub fn add_sm(proof: &[Line], goals: &[Goal]) -> Option<Line> {
    let cursor_depth = proof.last()?.depth;
    for g in goals {
        if !g.gid.ends_with('S') || g.depth != cursor_depth {
            continue;
        }
        let rule = classify(g, goals);
        return Some(Line::derive(proof, g.tree.clone(), rule, vec![]));
    }
    None
}

/// An `S`-tagged goal's own tree is the assumption's body in every case;
/// only the rule tag varies, and it is read off either the tree's own
/// shape (a placeholder marks ∀S/◻S) or its sibling `SA` goal (a falsum
/// consequent marks ¬S; anything else defaults to →S).
fn classify(g: &Goal, goals: &[Goal]) -> Rule {
    if let Some(c) = g.tree.placeholder_const() {
        return if crate::alphabet::is_world_digit(c) {
            Rule::NecAssume
        } else {
            Rule::AllAssume
        };
    }
    let sibling_gid = format!("{}SA", &g.gid[..g.gid.len() - 1]);
    let sibling = goals.iter().find(|h| h.gid == sibling_gid);
    match sibling {
        Some(h) if h.tree.is_falsum() => Rule::NotAssume,
        _ => Rule::ThenAssume,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::parse;
    use crate::goal::{goal_list, Arbs};

    #[test]
    fn opens_then_assume_for_conditional_goal() {
        let tree = parse("A→B").unwrap();
        let goals = goal_list(&tree, Arbs::from_trees(&[&tree]), String::new(), 0).unwrap();
        let proof = vec![Line::premise(1, Formula::verum())];
        let got = add_sm(&proof, &goals).unwrap();
        assert_eq!(got.rule, Rule::ThenAssume);
        assert_eq!(got.tree.as_str(), "A");
    }

    #[test]
    fn opens_not_assume_for_negation_goal() {
        let tree = parse("¬A").unwrap();
        let goals = goal_list(&tree, Arbs::from_trees(&[&tree]), String::new(), 0).unwrap();
        let proof = vec![Line::premise(1, Formula::verum())];
        let got = add_sm(&proof, &goals).unwrap();
        assert_eq!(got.rule, Rule::NotAssume);
        assert_eq!(got.tree.as_str(), "A");
    }

    #[test]
    fn opens_all_assume_for_universal_goal() {
        let tree = parse("∀xPx").unwrap();
        let goals = goal_list(&tree, Arbs::from_trees(&[&tree]), String::new(), 0).unwrap();
        let proof = vec![Line::premise(1, Formula::verum())];
        let got = add_sm(&proof, &goals).unwrap();
        assert_eq!(got.rule, Rule::AllAssume);
        assert!(got.tree.placeholder_const().is_some());
    }
}
