/*!
The goal planner: decomposes a target formula into a deterministic,
ordered tree of subgoals, tracking the fresh arbitrary constants still
available at each point in the decomposition.

*/

use crate::alphabet::{ITEM_CONSTS, PRED_CONSTS, WORLD_DIGITS};
use crate::formula::{inst, BinaryOp, Formula, QuantOp, UnaryOp};
use crate::types::err::{PlannerError, PoolKind};

/// The fresh constants still available to a goal and its descendants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Arbs {
    items: Vec<char>,
    preds: Vec<char>,
    worlds: Vec<char>,
}

impl Arbs {
    /// The pool of each kind not occurring anywhere among `trees`.
    pub fn from_trees(trees: &[&Formula]) -> Arbs {
        let joined: String = trees.iter().map(|t| t.as_str()).collect();
        let items = ITEM_CONSTS.filter(|c| !joined.contains(*c)).collect();
        let preds = PRED_CONSTS.filter(|c| !joined.contains(*c)).collect();
        let worlds = WORLD_DIGITS.filter(|c| !joined.contains(*c)).collect();
        Arbs { items, preds, worlds }
    }

    fn take(pool: &mut Vec<char>, kind: PoolKind, goal: &Formula) -> Result<char, PlannerError> {
        if pool.is_empty() {
            Err(PlannerError::ExhaustedPool {
                kind,
                goal: Box::new(goal.clone()),
            })
        } else {
            Ok(pool.remove(0))
        }
    }

    pub fn take_item(&mut self, goal: &Formula) -> Result<char, PlannerError> {
        Self::take(&mut self.items, PoolKind::Item, goal)
    }

    pub fn take_pred(&mut self, goal: &Formula) -> Result<char, PlannerError> {
        Self::take(&mut self.preds, PoolKind::Predicate, goal)
    }

    pub fn take_world(&mut self, goal: &Formula) -> Result<char, PlannerError> {
        Self::take(&mut self.worlds, PoolKind::World, goal)
    }
}

/// A node in the decomposition plan of a target formula.
#[derive(Clone, Debug)]
pub struct Goal {
    pub tree: Formula,
    pub arbs: Arbs,
    pub gid: String,
    pub depth: usize,
}

/// Decomposes `tree` into an ordered list of subgoals, following the
/// per-connective table. The root goal (empty `gid`) is included only
/// when `gid` is itself empty, i.e. only at the very top of the call.
pub fn goal_list(tree: &Formula, arbs: Arbs, gid: String, depth: usize) -> Result<Vec<Goal>, PlannerError> {
    let mut out = Vec::new();
    if gid.is_empty() {
        out.push(Goal {
            tree: tree.clone(),
            arbs: arbs.clone(),
            gid: gid.clone(),
            depth,
        });
    }

    if let Some((l, r)) = tree.as_binary(BinaryOp::And) {
        out.extend(goal_list(l, arbs.clone(), format!("{gid}A"), depth)?);
        out.extend(goal_list(r, arbs, format!("{gid}B"), depth)?);
    } else if let Some((l, r)) = tree.as_binary(BinaryOp::Or) {
        out.extend(goal_list(l, arbs.clone(), format!("{gid}A"), depth)?);
        out.extend(goal_list(r, arbs, format!("{gid}B"), depth)?);
    } else if let Some((l, r)) = tree.as_binary(BinaryOp::Then) {
        out.extend(goal_list(l, arbs.clone(), format!("{gid}S"), depth)?);
        out.extend(goal_list(r, arbs, format!("{gid}SA"), depth + 1)?);
    } else if let Some((l, r)) = tree.as_binary(BinaryOp::Iff) {
        let fwd = Formula::binary(BinaryOp::Then, l.clone(), r.clone());
        let back = Formula::binary(BinaryOp::Then, r.clone(), l.clone());
        out.extend(goal_list(&fwd, arbs.clone(), format!("{gid}A"), depth)?);
        out.extend(goal_list(&back, arbs, format!("{gid}B"), depth)?);
    } else if let Some(body) = tree.as_unary(UnaryOp::Not) {
        out.extend(goal_list(body, arbs.clone(), format!("{gid}S"), depth)?);
        out.extend(goal_list(&Formula::falsum(), arbs, format!("{gid}SA"), depth + 1)?);
    } else if tree.as_quantifier(QuantOp::All).is_some() {
        let mut child_arbs = arbs;
        let fresh = child_arbs.take_item(tree)?;
        let placeholder = Formula::placeholder(fresh);
        let instantiated = inst(tree, fresh);
        out.extend(goal_list(&placeholder, child_arbs.clone(), format!("{gid}S"), depth)?);
        out.extend(goal_list(&instantiated, child_arbs, format!("{gid}SA"), depth + 1)?);
    } else if let Some((var, _body)) = tree.as_quantifier(QuantOp::Some) {
        let candidates: Vec<char> = if crate::alphabet::is_item_var(var) {
            ITEM_CONSTS.collect()
        } else {
            PRED_CONSTS.collect()
        };
        for c in candidates {
            let instantiated = inst(tree, c);
            out.extend(goal_list(&instantiated, arbs.clone(), format!("{gid}*{c}*"), depth)?);
        }
    } else if let Some(body) = tree.as_unary(UnaryOp::Nec) {
        let mut child_arbs = arbs;
        let fresh = child_arbs.take_world(tree)?;
        let placeholder = Formula::placeholder(fresh);
        let instantiated = inst(body, fresh);
        out.extend(goal_list(&placeholder, child_arbs.clone(), format!("{gid}S"), depth)?);
        out.extend(goal_list(&instantiated, child_arbs, format!("{gid}SA"), depth + 1)?);
    } else if let Some(body) = tree.as_unary(UnaryOp::Poss) {
        for c in WORLD_DIGITS {
            let instantiated = inst(body, c);
            out.extend(goal_list(&instantiated, arbs.clone(), format!("{gid}*{c}*"), depth)?);
        }
    } else if let Some((l, r)) = tree.as_equality() {
        let ll = Formula::equality(l.clone(), l.clone());
        let rr = Formula::equality(r.clone(), r.clone());
        out.extend(goal_list(&ll, arbs.clone(), format!("{gid}A"), depth)?);
        out.extend(goal_list(&rr, arbs, format!("{gid}B"), depth)?);
    } else {
        // Atomic, verum, falsum, or placeholder: default to reductio.
        let neg = Formula::unary(UnaryOp::Not, tree.clone());
        out.extend(goal_list(&neg, arbs.clone(), format!("{gid}S"), depth)?);
        out.extend(goal_list(&Formula::falsum(), arbs, format!("{gid}SA"), depth + 1)?);
    }

    Ok(out)
}

/// Sorts goals by `gid`; since `gid` concatenates structural tags along
/// the path from the root, lexicographic order equals depth-first order.
pub fn sort_goals(mut goals: Vec<Goal>) -> Vec<Goal> {
    goals.sort_by(|a, b| a.gid.cmp(&b.gid));
    goals
}

/// Drops the goal with this `gid` together with every descendant (every
/// goal whose `gid` starts with it).
pub fn drop_subtree(goals: &mut Vec<Goal>, gid: &str) {
    goals.retain(|g| !g.gid.starts_with(gid));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::parse;

    #[test]
    fn and_goal_decomposes_into_both_halves() {
        let tree = parse("A∧B").unwrap();
        let arbs = Arbs::from_trees(&[&tree]);
        let goals = goal_list(&tree, arbs, String::new(), 0).unwrap();
        let gids: Vec<&str> = goals.iter().map(|g| g.gid.as_str()).collect();
        assert!(gids.contains(&""));
        assert!(gids.contains(&"A"));
        assert!(gids.contains(&"B"));
    }

    #[test]
    fn then_goal_increases_depth_for_consequent() {
        let tree = parse("A→B").unwrap();
        let arbs = Arbs::from_trees(&[&tree]);
        let goals = goal_list(&tree, arbs, String::new(), 0).unwrap();
        let sa = goals.iter().find(|g| g.gid == "SA").unwrap();
        assert_eq!(sa.depth, 1);
        let s = goals.iter().find(|g| g.gid == "S").unwrap();
        assert_eq!(s.depth, 0);
    }

    #[test]
    fn universal_consumes_one_item_constant() {
        let tree = parse("∀xPx").unwrap();
        let arbs = Arbs::from_trees(&[&tree]);
        let before = arbs.items.len();
        let goals = goal_list(&tree, arbs, String::new(), 0).unwrap();
        let sa = goals.iter().find(|g| g.gid == "SA").unwrap();
        assert_eq!(sa.arbs.items.len(), before - 1);
    }

    #[test]
    fn existential_emits_one_child_per_witness() {
        let tree = parse("∃xPx").unwrap();
        let arbs = Arbs::from_trees(&[&tree]);
        let goals = goal_list(&tree, arbs, String::new(), 0).unwrap();
        let witnesses = goals.iter().filter(|g| g.gid.starts_with('*')).count();
        assert_eq!(witnesses, 20);
    }

    #[test]
    fn sort_is_lexicographic_by_gid() {
        let mut goals = vec![
            Goal { tree: parse("A").unwrap(), arbs: Arbs::from_trees(&[]), gid: "B".into(), depth: 0 },
            Goal { tree: parse("A").unwrap(), arbs: Arbs::from_trees(&[]), gid: "".into(), depth: 0 },
            Goal { tree: parse("A").unwrap(), arbs: Arbs::from_trees(&[]), gid: "A".into(), depth: 0 },
        ];
        goals = sort_goals(goals);
        let gids: Vec<&str> = goals.iter().map(|g| g.gid.as_str()).collect();
        assert_eq!(gids, vec!["", "A", "B"]);
    }

    #[test]
    fn drop_subtree_removes_descendants_only() {
        let mut goals = vec![
            Goal { tree: parse("A").unwrap(), arbs: Arbs::from_trees(&[]), gid: "A".into(), depth: 0 },
            Goal { tree: parse("A").unwrap(), arbs: Arbs::from_trees(&[]), gid: "AB".into(), depth: 0 },
            Goal { tree: parse("A").unwrap(), arbs: Arbs::from_trees(&[]), gid: "C".into(), depth: 0 },
        ];
        drop_subtree(&mut goals, "A");
        let gids: Vec<&str> = goals.iter().map(|g| g.gid.as_str()).collect();
        assert_eq!(gids, vec!["C"]);
    }
}
