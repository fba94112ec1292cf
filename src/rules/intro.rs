//! Introduction rules: one function per introduced connective.

use super::{is_redundant, valid};
use crate::alphabet::WORLD_DIGITS;
use crate::formula::{inst, stamp_world, BinaryOp, Formula, QuantOp, UnaryOp};
use crate::goal::Goal;
use crate::line::{deepest_open_block, Line, Rule};

/// ⊤I: derive ⊤ when it is among the pending goals. Fires once; the
/// redundancy guard stops it from firing again.
pub fn verum_intro(proof: &[Line], goals: &[Goal]) -> Option<Line> {
    let v = valid(proof);
    if goals.iter().any(|g| g.tree.is_verum()) && !is_redundant(&v, &Formula::verum()) {
        return Some(Line::derive(proof, Formula::verum(), Rule::VerumIntro, vec![]));
    }
    None
}

/// =I: derive `t=t` when such a reflexive goal is pending.
pub fn eq_intro(proof: &[Line], goals: &[Goal]) -> Option<Line> {
    let v = valid(proof);
    for g in goals {
        if let Some((l, r)) = g.tree.as_equality() {
            if l.render() == r.render() && !is_redundant(&v, &g.tree) {
                return Some(Line::derive(proof, g.tree.clone(), Rule::EqIntro, vec![]));
            }
        }
    }
    None
}

/// ∨I: given a pending goal `A∨B` and a premise equal to `A` or `B`, derive `A∨B`.
pub fn or_intro(proof: &[Line], goals: &[Goal]) -> Option<Line> {
    let v = valid(proof);
    for g in goals {
        if let Some((l, r)) = g.tree.as_binary(BinaryOp::Or) {
            if let Some(hit) = v.iter().find(|p| &p.tree == l || &p.tree == r) {
                if !is_redundant(&v, &g.tree) {
                    return Some(Line::derive(proof, g.tree.clone(), Rule::OrIntro, vec![hit.lnum]));
                }
            }
        }
    }
    None
}

/// ∃I: from `A[x:=c]` derive `∃x.A` when `∃x.A` is a pending goal.
pub fn some_intro(proof: &[Line], goals: &[Goal]) -> Option<Line> {
    let v = valid(proof);
    for g in goals {
        if let Some((var, _)) = g.tree.as_quantifier(QuantOp::Some) {
            let candidates: Vec<char> = if crate::alphabet::is_item_var(var) {
                crate::alphabet::ITEM_CONSTS.collect()
            } else {
                crate::alphabet::PRED_CONSTS.collect()
            };
            for c in candidates {
                let instantiated = inst(&g.tree, c);
                if let Some(hit) = v.iter().find(|p| p.tree == instantiated) {
                    if !is_redundant(&v, &g.tree) {
                        return Some(Line::derive(proof, g.tree.clone(), Rule::SomeIntro, vec![hit.lnum]));
                    }
                }
            }
        }
    }
    None
}

/// ◇I: from `A_w` derive `◇A` when `◇A` is a pending goal.
pub fn poss_intro(proof: &[Line], goals: &[Goal]) -> Option<Line> {
    let v = valid(proof);
    for g in goals {
        if let Some(body) = g.tree.as_unary(UnaryOp::Poss) {
            for w in WORLD_DIGITS {
                let stamped = stamp_world(body, w);
                if let Some(hit) = v.iter().find(|p| p.tree == stamped) {
                    if !is_redundant(&v, &g.tree) {
                        return Some(Line::derive(proof, g.tree.clone(), Rule::PossIntro, vec![hit.lnum]));
                    }
                }
            }
        }
    }
    None
}

/// ∧I: given a pending goal `A∧B` and two distinct premises matching `A`
/// and `B`, derive `A∧B`.
pub fn and_intro(proof: &[Line], goals: &[Goal]) -> Option<Line> {
    let v = valid(proof);
    for g in goals {
        if let Some((l, r)) = g.tree.as_binary(BinaryOp::And) {
            if let Some(pa) = v.iter().find(|p| &p.tree == l) {
                if let Some(pb) = v.iter().find(|p| &p.tree == r && p.lnum != pa.lnum) {
                    if !is_redundant(&v, &g.tree) {
                        return Some(Line::derive(
                            proof,
                            g.tree.clone(),
                            Rule::AndIntro,
                            vec![pa.lnum, pb.lnum],
                        ));
                    }
                }
            }
        }
    }
    None
}

/// ⊥I/⊥E folded into one procedure: with no `⊥` among the valid premises,
/// look for `x` and `¬x` both present and derive `⊥`; with `⊥` already
/// present, derive the next unmet pending goal from it. This realizes the
/// "⊥I, then immediately ⊥E on the next pending goal" self-recursion.
pub fn falsum_intro(proof: &[Line], goals: &[Goal]) -> Option<Line> {
    let v = valid(proof);
    if v.iter().any(|l| l.tree.is_falsum()) {
        let fal = v.iter().rev().find(|l| l.tree.is_falsum()).unwrap();
        for g in goals {
            if !is_redundant(&v, &g.tree) {
                return Some(Line::derive(proof, g.tree.clone(), Rule::FalsumElim, vec![fal.lnum]));
            }
        }
        return None;
    }
    for x in &v {
        let negated = Formula::unary(UnaryOp::Not, x.tree.clone());
        if let Some(notx) = v.iter().find(|p| p.tree == negated) {
            if !is_redundant(&v, &Formula::falsum()) {
                return Some(Line::derive(
                    proof,
                    Formula::falsum(),
                    Rule::FalsumIntro,
                    vec![x.lnum, notx.lnum],
                ));
            }
        }
    }
    None
}

/// ↔I: from `A→B` and `B→A` both present, matching a pending goal `A↔B`.
pub fn iff_intro(proof: &[Line], goals: &[Goal]) -> Option<Line> {
    let v = valid(proof);
    for g in goals {
        if let Some((l, r)) = g.tree.as_binary(BinaryOp::Iff) {
            let fwd = Formula::binary(BinaryOp::Then, l.clone(), r.clone());
            let back = Formula::binary(BinaryOp::Then, r.clone(), l.clone());
            if let (Some(pf), Some(pb)) = (
                v.iter().find(|p| p.tree == fwd),
                v.iter().find(|p| p.tree == back),
            ) {
                if !is_redundant(&v, &g.tree) {
                    return Some(Line::derive(
                        proof,
                        g.tree.clone(),
                        Rule::IffIntro,
                        vec![pf.lnum, pb.lnum],
                    ));
                }
            }
        }
    }
    None
}

/// →I: discharges the deepest open `→S` block when its consequent is
/// present inside the block. If the consequent is present only outside
/// the block, reiterates it in first and retries on the next pass.
pub fn then_intro(proof: &[Line], goals: &[Goal]) -> Option<Line> {
    let v = valid(proof);
    let open = deepest_open_block(&v)?;
    if open.rule != Rule::ThenAssume {
        return None;
    }
    let g = goals.iter().find(|g| {
        g.tree
            .as_binary(BinaryOp::Then)
            .map(|(l, _)| *l == open.tree)
            .unwrap_or(false)
    })?;
    let (_, consequent) = g.tree.as_binary(BinaryOp::Then).unwrap();
    if let Some(inside) = v.iter().find(|p| p.lnum > open.lnum && &p.tree == consequent) {
        if !is_redundant(&v, &g.tree) {
            return Some(Line::derive(
                proof,
                g.tree.clone(),
                Rule::ThenIntro,
                vec![open.lnum, inside.lnum],
            ));
        }
        return None;
    }
    if let Some(outside) = v.iter().find(|p| p.lnum <= open.lnum && &p.tree == consequent) {
        return Some(Line::derive(proof, outside.tree.clone(), Rule::Reiteration, vec![outside.lnum]));
    }
    None
}

/// ¬I: discharges the deepest open `¬S` block when `⊥` is present inside
/// it. Falls back to reiterating an outside `⊥` in, same as →I.
pub fn not_intro(proof: &[Line], goals: &[Goal]) -> Option<Line> {
    let v = valid(proof);
    let open = deepest_open_block(&v)?;
    if open.rule != Rule::NotAssume {
        return None;
    }
    let candidate = Formula::unary(UnaryOp::Not, open.tree.clone());
    if !goals.iter().any(|g| g.tree == candidate) {
        return None;
    }
    if let Some(inside) = v.iter().find(|p| p.lnum > open.lnum && p.tree.is_falsum()) {
        if !is_redundant(&v, &candidate) {
            return Some(Line::derive(
                proof,
                candidate,
                Rule::NotIntro,
                vec![open.lnum, inside.lnum],
            ));
        }
        return None;
    }
    if let Some(outside) = v.iter().find(|p| p.lnum <= open.lnum && p.tree.is_falsum()) {
        return Some(Line::derive(proof, outside.tree.clone(), Rule::Reiteration, vec![outside.lnum]));
    }
    None
}

/// ∀I: discharges the deepest open `∀S` block (a fresh-constant
/// placeholder) once its instantiated body is present inside the block.
pub fn all_intro(proof: &[Line], goals: &[Goal]) -> Option<Line> {
    let v = valid(proof);
    let open = deepest_open_block(&v)?;
    if open.rule != Rule::AllAssume {
        return None;
    }
    let a_prime = open.tree.placeholder_const()?;
    for g in goals {
        if g.tree.as_quantifier(QuantOp::All).is_some() {
            let instantiated = inst(&g.tree, a_prime);
            if let Some(inside) = v.iter().find(|p| p.lnum > open.lnum && p.tree == instantiated) {
                if !is_redundant(&v, &g.tree) {
                    return Some(Line::derive(
                        proof,
                        g.tree.clone(),
                        Rule::AllIntro,
                        vec![open.lnum, inside.lnum],
                    ));
                }
            }
        }
    }
    None
}

/// ◻I: discharges the deepest open `◻S` block (a fresh-world
/// placeholder) once the body stamped with that world is present inside it.
pub fn nec_intro(proof: &[Line], goals: &[Goal]) -> Option<Line> {
    let v = valid(proof);
    let open = deepest_open_block(&v)?;
    if open.rule != Rule::NecAssume {
        return None;
    }
    let w_prime = open.tree.placeholder_const()?;
    for g in goals {
        if let Some(body) = g.tree.as_unary(UnaryOp::Nec) {
            let instantiated = inst(body, w_prime);
            if let Some(inside) = v.iter().find(|p| p.lnum > open.lnum && p.tree == instantiated) {
                if !is_redundant(&v, &g.tree) {
                    return Some(Line::derive(
                        proof,
                        g.tree.clone(),
                        Rule::NecIntro,
                        vec![open.lnum, inside.lnum],
                    ));
                }
            }
        }
    }
    None
}
