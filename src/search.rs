/*!
The search driver: alternates goal reduction, rule application, and
assumption placement until the root goal is met or a pass makes no
progress. Shaped after `otter_sat::procedures::solve` (a `loop` with
`log::trace!` at each branch, an explicit ceiling check,
restart-on-progress).
*/

use crate::config::Config;
use crate::formula::{BinaryOp, Formula};
use crate::goal::{drop_subtree, goal_list, sort_goals, Arbs, Goal};
use crate::line::{valid_premises, Line};
use crate::rules::{self, assume};
use crate::types::err::ErrorKind;

/// Runs the search to fixpoint, mutating `goals` and `proof` in place.
pub fn derive(goals: &mut Vec<Goal>, proof: &mut Vec<Line>, config: &Config) -> Result<(), ErrorKind> {
    loop {
        reduce_goals(goals, proof);

        if !goals.iter().any(|g| g.gid.is_empty()) {
            log::debug!("root goal satisfied at {} lines", proof.len());
            break;
        }
        if proof.len() >= config.max_lines {
            log::debug!("search ceiling of {} lines reached", config.max_lines);
            break;
        }

        if let Some(line) = try_introductions(proof, goals) {
            log::trace!("{} {}", line.rule.label(), line.tree);
            proof.push(line);
            continue;
        }
        if let Some(line) = try_eliminations(proof) {
            log::trace!("{} {}", line.rule.label(), line.tree);
            proof.push(line);
            continue;
        }
        if let Some(line) = assume::add_sm(proof, goals) {
            log::trace!("{} {}", line.rule.label(), line.tree);
            proof.push(line);
            continue;
        }
        if synthesize_missing_premises(goals, proof)? {
            continue;
        }

        log::debug!("pass made no progress at {} lines, stopping", proof.len());
        break;
    }
    Ok(())
}

fn try_introductions(proof: &[Line], goals: &[Goal]) -> Option<Line> {
    for rule in rules::introductions() {
        if let Some(line) = rule(proof, goals) {
            return Some(line);
        }
    }
    None
}

fn try_eliminations(proof: &[Line]) -> Option<Line> {
    for rule in rules::eliminations() {
        if let Some(line) = rule(proof) {
            return Some(line);
        }
    }
    None
}

/// Drops every non-`S` goal (and its descendants) already witnessed by a
/// valid premise at a depth no deeper than the goal's own.
fn reduce_goals(goals: &mut Vec<Goal>, proof: &[Line]) {
    let valid = valid_premises(proof);
    let satisfied: Vec<String> = goals
        .iter()
        .filter(|g| !g.gid.ends_with('S'))
        .filter(|g| valid.iter().any(|p| p.tree == g.tree && p.depth <= g.depth))
        .map(|g| g.gid.clone())
        .collect();
    for gid in satisfied {
        drop_subtree(goals, &gid);
    }
}

/// When a valid premise is `A→B` and `A` is neither derived nor already
/// pending, adds `A` (fully decomposed) as a new subgoal so the search can
/// work towards satisfying it and eventually fire →E.
fn synthesize_missing_premises(goals: &mut Vec<Goal>, proof: &[Line]) -> Result<bool, ErrorKind> {
    let valid = valid_premises(proof);
    for p in &valid {
        let Some((antecedent, _)) = p.tree.as_binary(BinaryOp::Then) else {
            continue;
        };
        let derived = valid.iter().any(|q| &q.tree == antecedent);
        let pending = goals.iter().any(|g| &g.tree == antecedent);
        if derived || pending {
            continue;
        }
        let trees: Vec<&Formula> = valid.iter().map(|l| &l.tree).collect();
        let arbs = Arbs::from_trees(&trees);
        let gid = format!("!{}", p.lnum);
        let mut fresh = vec![Goal {
            tree: antecedent.clone(),
            arbs: arbs.clone(),
            gid: gid.clone(),
            depth: 0,
        }];
        fresh.extend(goal_list(antecedent, arbs, gid, 0)?);
        goals.extend(fresh);
        let taken = std::mem::take(goals);
        *goals = sort_goals(taken);
        return Ok(true);
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::parse;
    use crate::line::Rule;

    fn init(wffs: &[&str]) -> (Vec<Goal>, Vec<Line>) {
        crate::context::init_proof(wffs).unwrap()
    }

    #[test]
    fn modus_ponens_scenario() {
        let (mut goals, mut proof) = init(&["A", "A→B", "B"]);
        derive(&mut goals, &mut proof, &Config::default()).unwrap();
        let last = proof.last().unwrap();
        assert_eq!(last.tree, parse("B").unwrap());
        assert_eq!(last.rule, Rule::ThenElim);
    }

    #[test]
    fn conjunction_scenario() {
        let (mut goals, mut proof) = init(&["A∧B", "B∧A"]);
        derive(&mut goals, &mut proof, &Config::default()).unwrap();
        let last = proof.last().unwrap();
        assert_eq!(last.tree, parse("B∧A").unwrap());
    }

    #[test]
    fn reflexivity_scenario() {
        let (mut goals, mut proof) = init(&["a=a"]);
        derive(&mut goals, &mut proof, &Config::default()).unwrap();
        let last = proof.last().unwrap();
        assert_eq!(last.rule, Rule::EqIntro);
    }

    #[test]
    fn peirce_law_is_not_provable_by_this_core() {
        let (mut goals, mut proof) = init(&["((A→B)→A)→A"]);
        derive(&mut goals, &mut proof, &Config::default()).unwrap();
        let last = proof.last().unwrap();
        assert_ne!(last.tree, parse("((A→B)→A)→A").unwrap());
    }
}
