/*!
The rule library: one pair of procedures per connective, plus
falsum/verum/identity/reiteration.

Every rule either appends exactly one new line and returns it, or
declines (returns `None`) and leaves the proof untouched. No rule mutates
an existing line. Every rule checks, before firing, that its proposed
formula does not already appear among the valid premises at the current
cursor (the redundancy guard).
*/

pub mod assume;
pub mod elim;
pub mod intro;

use crate::formula::Formula;
use crate::goal::Goal;
use crate::line::{valid_premises, Line};

/// An introduction rule: observes the proof and the pending goals,
/// optionally proposing one new line.
pub type IntroRule = fn(&[Line], &[Goal]) -> Option<Line>;

/// An elimination rule: observes the proof alone.
pub type ElimRule = fn(&[Line]) -> Option<Line>;

/// Introductions, in the fixed search order (cheap zero/one-premise rules
/// before expensive combinatorial ones).
pub fn introductions() -> [IntroRule; 12] {
    [
        intro::verum_intro,
        intro::eq_intro,
        intro::or_intro,
        intro::some_intro,
        intro::poss_intro,
        intro::and_intro,
        intro::falsum_intro,
        intro::iff_intro,
        intro::then_intro,
        intro::not_intro,
        intro::all_intro,
        intro::nec_intro,
    ]
}

/// Eliminations, in the fixed search order.
pub fn eliminations() -> [ElimRule; 10] {
    [
        elim::and_elim,
        elim::not_elim,
        elim::all_elim,
        elim::nec_elim,
        elim::then_elim,
        elim::iff_elim,
        elim::eq_elim,
        elim::or_elim,
        elim::some_elim,
        elim::poss_elim,
    ]
}

/// Whether `tree` already appears, structurally, among `valid`.
pub(crate) fn is_redundant(valid: &[&Line], tree: &Formula) -> bool {
    valid.iter().any(|l| &l.tree == tree)
}

pub(crate) fn valid(proof: &[Line]) -> Vec<&Line> {
    valid_premises(proof)
}
