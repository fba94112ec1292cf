/*!
The engine's three entry points: `init_proof`, `derive`, `simplify`.
*/

use crate::alphabet::convert_surface_symbols;
use crate::config::Config;
use crate::formula::Formula;
use crate::goal::{goal_list, sort_goals, Arbs, Goal};
use crate::line::Line;
use crate::reports::Report;
use crate::types::err::ErrorKind;

/// Builds the initial `(goals, proof)` pair from an ordered list of
/// formula strings, the last of which is the goal and all prior of which
/// are premises. Premise lines are numbered `1..n-1` at depth 0 with rule
/// `"P"`; the goal's own item/predicate constants seed every line's
/// `gics`/`gpcs` hint sets; the goal is decomposed and the resulting
/// goals sorted by `gid`.
pub fn init_proof(wffs: &[&str]) -> Result<(Vec<Goal>, Vec<Line>), ErrorKind> {
    let (target_str, premise_strs) = wffs
        .split_last()
        .ok_or(crate::types::err::ParseError::EmptyFormula)?;

    let target = Formula::parse(&convert_surface_symbols(*target_str))?;
    let (gics, gpcs) = target.constants();

    let mut proof = Vec::with_capacity(premise_strs.len());
    for (i, s) in premise_strs.iter().enumerate() {
        let tree = Formula::parse(&convert_surface_symbols(*s))?;
        let mut line = Line::premise(i + 1, tree);
        line.gics = gics.clone();
        line.gpcs = gpcs.clone();
        proof.push(line);
    }

    let premise_trees: Vec<&Formula> = proof.iter().map(|l| &l.tree).collect();
    let mut arbs_trees = premise_trees;
    arbs_trees.push(&target);
    let arbs = Arbs::from_trees(&arbs_trees);

    let goals = sort_goals(goal_list(&target, arbs, String::new(), 0)?);
    Ok((goals, proof))
}

/// Runs the search driver to fixpoint with default [Config].
pub fn derive(goals: &mut Vec<Goal>, proof: &mut Vec<Line>) -> Result<(), ErrorKind> {
    derive_with(goals, proof, &Config::default())
}

/// Runs the search driver to fixpoint with a caller-supplied [Config].
pub fn derive_with(goals: &mut Vec<Goal>, proof: &mut Vec<Line>, config: &Config) -> Result<(), ErrorKind> {
    crate::search::derive(goals, proof, config)
}

/// Dead-line pruning: keeps only what the last line's justification
/// transitively depends on.
pub fn simplify(proof: &[Line]) -> Vec<Line> {
    crate::simplify::simplify(proof)
}

/// Inspects whether `proof`'s last line matches `target` at depth 0, the
/// caller-facing success/failure signal (non-derivation is not an error).
pub fn report(proof: &[Line], target: &Formula) -> Report {
    match proof.last() {
        Some(last) if last.depth == 0 && &last.tree == target => Report::Proved,
        _ => Report::NotProved,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_proof_numbers_premises_and_sorts_goals() {
        let (goals, proof) = init_proof(&["A", "A→B", "B"]).unwrap();
        assert_eq!(proof.len(), 2);
        assert_eq!(proof[0].lnum, 1);
        assert_eq!(proof[1].lnum, 2);
        assert!(goals.iter().any(|g| g.gid.is_empty()));
    }

    #[test]
    fn init_proof_with_no_premises_still_builds_goals() {
        let (goals, proof) = init_proof(&["a=a"]).unwrap();
        assert!(proof.is_empty());
        assert!(!goals.is_empty());
    }

    #[test]
    fn report_reflects_the_final_line() {
        let (mut goals, mut proof) = init_proof(&["A", "A→B", "B"]).unwrap();
        derive(&mut goals, &mut proof).unwrap();
        let target = Formula::parse("B").unwrap();
        assert_eq!(report(&proof, &target), Report::Proved);
    }
}
