//! Elimination rules: one function per eliminated connective.
//!
//! Every elimination rule is goal-independent: it looks only at the
//! current proof.

use super::{is_redundant, valid};
use crate::alphabet::{is_item_var, WORLD_DIGITS};
use crate::formula::{inst, stamp_world, BinaryOp, Formula, QuantOp, UnaryOp};
use crate::goal::Arbs;
use crate::line::{deepest_open_block, Line, Rule};

/// ∧E: from `A∧B` derive `A` if missing, else `B`.
pub fn and_elim(proof: &[Line]) -> Option<Line> {
    let v = valid(proof);
    for x in &v {
        if let Some((l, r)) = x.tree.as_binary(BinaryOp::And) {
            if !is_redundant(&v, l) {
                return Some(Line::derive(proof, l.clone(), Rule::AndElim, vec![x.lnum]));
            }
            if !is_redundant(&v, r) {
                return Some(Line::derive(proof, r.clone(), Rule::AndElim, vec![x.lnum]));
            }
        }
    }
    None
}

/// ¬E: from `¬¬A` derive `A`.
pub fn not_elim(proof: &[Line]) -> Option<Line> {
    let v = valid(proof);
    for x in &v {
        if let Some(inner1) = x.tree.as_unary(UnaryOp::Not) {
            if let Some(inner2) = inner1.as_unary(UnaryOp::Not) {
                if !is_redundant(&v, inner2) {
                    return Some(Line::derive(proof, inner2.clone(), Rule::NotElim, vec![x.lnum]));
                }
            }
        }
    }
    None
}

/// ∀E: from `∀v.A` derive `A[v:=c]` for any item/predicate constant `c`
/// already present somewhere among the valid premises or the line's own
/// goal-constant hints.
pub fn all_elim(proof: &[Line]) -> Option<Line> {
    let v = valid(proof);
    let joined: String = v.iter().map(|l| l.tree.as_str()).collect();
    for x in &v {
        if let Some((var, _)) = x.tree.as_quantifier(QuantOp::All) {
            let hints: Vec<char> = if is_item_var(var) {
                x.gics.clone()
            } else {
                x.gpcs.clone()
            };
            let mut candidates: Vec<char> = joined.chars().filter(|c| matches(var, *c)).collect();
            candidates.extend(hints);
            candidates.sort_unstable();
            candidates.dedup();
            for c in candidates {
                let instantiated = inst(&x.tree, c);
                if !is_redundant(&v, &instantiated) {
                    return Some(Line::derive(proof, instantiated, Rule::AllElim, vec![x.lnum]));
                }
            }
        }
    }
    None
}

fn matches(var: char, c: char) -> bool {
    if is_item_var(var) {
        crate::alphabet::is_item_const(c)
    } else {
        crate::alphabet::is_pred_const(c)
    }
}

/// ◻E: from `◻A` derive `A_w` for each world digit already present
/// somewhere among the valid premises.
pub fn nec_elim(proof: &[Line]) -> Option<Line> {
    let v = valid(proof);
    let joined: String = v.iter().map(|l| l.tree.as_str()).collect();
    let worlds_present: Vec<char> = WORLD_DIGITS.filter(|w| joined.contains(*w)).collect();
    for x in &v {
        if let Some(body) = x.tree.as_unary(UnaryOp::Nec) {
            for w in &worlds_present {
                let instantiated = stamp_world(body, *w);
                if !is_redundant(&v, &instantiated) {
                    return Some(Line::derive(proof, instantiated, Rule::NecElim, vec![x.lnum]));
                }
            }
        }
    }
    None
}

/// →E (modus ponens): from `A→B` and `A`, derive `B`.
pub fn then_elim(proof: &[Line]) -> Option<Line> {
    let v = valid(proof);
    for x in &v {
        if let Some((l, r)) = x.tree.as_binary(BinaryOp::Then) {
            if let Some(y) = v.iter().find(|p| &p.tree == l) {
                if !is_redundant(&v, r) {
                    return Some(Line::derive(proof, r.clone(), Rule::ThenElim, vec![x.lnum, y.lnum]));
                }
            }
        }
    }
    None
}

/// ↔E: from `A↔B` derive `A→B`, then (on a later pass) `B→A`.
pub fn iff_elim(proof: &[Line]) -> Option<Line> {
    let v = valid(proof);
    for x in &v {
        if let Some((l, r)) = x.tree.as_binary(BinaryOp::Iff) {
            let fwd = Formula::binary(BinaryOp::Then, l.clone(), r.clone());
            if !is_redundant(&v, &fwd) {
                return Some(Line::derive(proof, fwd, Rule::IffElim, vec![x.lnum]));
            }
            let back = Formula::binary(BinaryOp::Then, r.clone(), l.clone());
            if !is_redundant(&v, &back) {
                return Some(Line::derive(proof, back, Rule::IffElim, vec![x.lnum]));
            }
        }
    }
    None
}

/// =E: from `l=r` and a premise containing `l` (or `r`), derive that
/// premise with `l` and `r` swapped, via literal-textual substitution over
/// the canonical string, direction chosen by whichever side appears.
pub fn eq_elim(proof: &[Line]) -> Option<Line> {
    let v = valid(proof);
    for x in &v {
        if let Some((l, r)) = x.tree.as_equality() {
            let (lt, rt) = (l.render(), r.render());
            if lt == rt {
                continue;
            }
            for y in &v {
                if y.lnum == x.lnum {
                    continue;
                }
                let s = y.tree.as_str();
                let rewritten = if s.contains(&lt) {
                    Some(s.replacen(&lt, &rt, 1))
                } else if s.contains(&rt) {
                    Some(s.replacen(&rt, &lt, 1))
                } else {
                    None
                };
                if let Some(new_str) = rewritten {
                    if let Ok(candidate) = Formula::parse(&new_str) {
                        if !is_redundant(&v, &candidate) {
                            return Some(Line::derive(
                                proof,
                                candidate,
                                Rule::EqElim,
                                vec![x.lnum, y.lnum],
                            ));
                        }
                    }
                }
            }
        }
    }
    None
}

/// ∨E: from `A∨B`, `A→C`, and `B→C`, derive `C`.
pub fn or_elim(proof: &[Line]) -> Option<Line> {
    let v = valid(proof);
    for x in &v {
        if let Some((a, b)) = x.tree.as_binary(BinaryOp::Or) {
            for y in &v {
                if let Some((yl, c)) = y.tree.as_binary(BinaryOp::Then) {
                    if yl != a {
                        continue;
                    }
                    let needed = Formula::binary(BinaryOp::Then, b.clone(), c.clone());
                    if let Some(z) = v.iter().find(|p| p.tree == needed) {
                        if !is_redundant(&v, c) {
                            return Some(Line::derive(
                                proof,
                                c.clone(),
                                Rule::OrElim,
                                vec![x.lnum, y.lnum, z.lnum],
                            ));
                        }
                    }
                }
            }
        }
    }
    None
}

/// ∃E: with `∃v.A` present, opens a fresh-constant assumption block
/// `A[v:=a']` tagged `∃S/a'`, citing the existential premise directly in
/// the assumption's own justification. Once open, discharges to any line
/// in the block whose formula does not mention `a'`.
pub fn some_elim(proof: &[Line]) -> Option<Line> {
    let v = valid(proof);
    if let Some(open) = deepest_open_block(&v) {
        if let Rule::SomeAssume(a_prime) = open.rule {
            let block: Vec<&&Line> = v.iter().filter(|p| p.lnum > open.lnum).collect();
            if let Some(target) = block.iter().find(|p| !p.tree.as_str().contains(a_prime)) {
                if !is_redundant(&v, &target.tree) {
                    return Some(Line::derive(
                        proof,
                        target.tree.clone(),
                        Rule::SomeElim,
                        vec![open.lnum, target.lnum],
                    ));
                }
            }
            return None;
        }
    }
    for x in &v {
        if let Some((var, _)) = x.tree.as_quantifier(QuantOp::Some) {
            let trees: Vec<&Formula> = v.iter().map(|p| &p.tree).collect();
            let mut pool = Arbs::from_trees(&trees);
            let fresh = if is_item_var(var) {
                pool.take_item(&x.tree)
            } else {
                pool.take_pred(&x.tree)
            };
            if let Ok(a_prime) = fresh {
                let instantiated = inst(&x.tree, a_prime);
                if !is_redundant(&v, &instantiated) {
                    return Some(Line::derive(
                        proof,
                        instantiated,
                        Rule::SomeAssume(a_prime),
                        vec![x.lnum],
                    ));
                }
            }
        }
    }
    None
}

/// ◇E: with `◇A` present, opens a fresh-world assumption block `A_w'`
/// tagged `◇S/w'`, mirroring ∃E.
pub fn poss_elim(proof: &[Line]) -> Option<Line> {
    let v = valid(proof);
    if let Some(open) = deepest_open_block(&v) {
        if let Rule::PossAssume(w_prime) = open.rule {
            let block: Vec<&&Line> = v.iter().filter(|p| p.lnum > open.lnum).collect();
            if let Some(target) = block.iter().find(|p| !p.tree.as_str().contains(w_prime)) {
                if !is_redundant(&v, &target.tree) {
                    return Some(Line::derive(
                        proof,
                        target.tree.clone(),
                        Rule::PossElim,
                        vec![open.lnum, target.lnum],
                    ));
                }
            }
            return None;
        }
    }
    for x in &v {
        if let Some(body) = x.tree.as_unary(UnaryOp::Poss) {
            let trees: Vec<&Formula> = v.iter().map(|p| &p.tree).collect();
            let mut pool = Arbs::from_trees(&trees);
            if let Ok(w_prime) = pool.take_world(&x.tree) {
                let instantiated = stamp_world(body, w_prime);
                if !is_redundant(&v, &instantiated) {
                    return Some(Line::derive(
                        proof,
                        instantiated,
                        Rule::PossAssume(w_prime),
                        vec![x.lnum],
                    ));
                }
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::parse;

    fn premise(lnum: usize, s: &str) -> Line {
        Line::premise(lnum, parse(s).unwrap())
    }

    #[test]
    fn and_elim_derives_left_then_right() {
        let proof = vec![premise(1, "A∧B")];
        let got = and_elim(&proof).unwrap();
        assert_eq!(got.tree.as_str(), "A");
        assert_eq!(got.jstlns, vec![1]);
    }

    #[test]
    fn then_elim_is_modus_ponens() {
        let proof = vec![premise(1, "A→B"), premise(2, "A")];
        let got = then_elim(&proof).unwrap();
        assert_eq!(got.tree.as_str(), "B");
        assert_eq!(got.jstlns, vec![1, 2]);
    }

    #[test]
    fn not_elim_strips_double_negation() {
        let proof = vec![premise(1, "¬¬A")];
        let got = not_elim(&proof).unwrap();
        assert_eq!(got.tree.as_str(), "A");
    }

    #[test]
    fn eq_elim_rewrites_using_identity() {
        let proof = vec![premise(1, "a=b"), premise(2, "Pa")];
        let got = eq_elim(&proof).unwrap();
        assert_eq!(got.tree.as_str(), "Pb");
    }

    #[test]
    fn or_elim_combines_three_premises() {
        let proof = vec![premise(1, "A∨B"), premise(2, "A→C"), premise(3, "B→C")];
        let got = or_elim(&proof).unwrap();
        assert_eq!(got.tree.as_str(), "C");
        assert_eq!(got.jstlns, vec![1, 2, 3]);
    }

    #[test]
    fn some_elim_opens_then_discharges() {
        let proof = vec![premise(1, "∃xPx")];
        let opened = some_elim(&proof).unwrap();
        assert!(matches!(opened.rule, Rule::SomeAssume(_)));
        assert_eq!(opened.jstlns, vec![1]);
        let mut proof = proof;
        proof.push(opened);
        let discharged = some_elim(&proof);
        assert!(discharged.is_none());
    }
}
