/*!
Substitution and modal world-stamping.

`inst` is purely syntactic: it never checks that the replacement is
capture-free. The goal planner is the only caller, and it only ever
supplies fresh constants, so capture cannot arise.
*/

use super::{Formula, FormulaKind, Term};

/// Instantiates `tree`.
///
/// If `c` is a world digit, `tree` is taken to be the operand of a modal
/// connective and every atomic leaf inside it is stamped with `c`
/// (recursing through binary and unary nodes; quantifier bodies are
/// stamped as a whole, since the modal fragment of this logic does not
/// combine with quantification below the modal operator).
///
/// Otherwise `tree` is taken to be a quantifier tree, and every free
/// occurrence of its bound variable in its body is replaced with `c`.
pub fn inst(tree: &Formula, c: char) -> Formula {
    if crate::alphabet::is_world_digit(c) {
        stamp_world(tree, c)
    } else {
        match &tree.kind {
            FormulaKind::Quantifier { var, body, .. } => substitute(body, *var, c),
            _ => tree.clone(),
        }
    }
}

/// Stamps every atomic leaf of `tree` with `world`, descending through
/// binary and unary nodes.
pub fn stamp_world(tree: &Formula, world: char) -> Formula {
    match &tree.kind {
        FormulaKind::Binary { op, left, right } => {
            Formula::binary(*op, stamp_world(left, world), stamp_world(right, world))
        }
        FormulaKind::Unary { op, right } => Formula::unary(*op, stamp_world(right, world)),
        _ => Formula::stamped(world, tree.clone()),
    }
}

/// The inverse of [stamp_world]: removes every `_world` stamp from `tree`,
/// descending through binary and unary nodes.
pub fn strip_world(tree: &Formula, world: char) -> Formula {
    match &tree.kind {
        FormulaKind::Binary { op, left, right } => {
            Formula::binary(*op, strip_world(left, world), strip_world(right, world))
        }
        FormulaKind::Unary { op, right } => Formula::unary(*op, strip_world(right, world)),
        FormulaKind::Stamped { world: w, inner } if *w == world => (**inner).clone(),
        _ => tree.clone(),
    }
}

fn substitute(f: &Formula, var: char, c: char) -> Formula {
    match &f.kind {
        FormulaKind::Verum | FormulaKind::Falsum | FormulaKind::Placeholder(_) => f.clone(),
        FormulaKind::Predicate { head, args } => {
            let new_head = if *head == var { c } else { *head };
            let new_args = args.iter().map(|a| substitute_term(a, var, c)).collect();
            Formula::predicate(new_head, new_args)
        }
        FormulaKind::Equality { left, right } => Formula::equality(
            substitute_term(left, var, c),
            substitute_term(right, var, c),
        ),
        FormulaKind::Unary { op, right } => Formula::unary(*op, substitute(right, var, c)),
        FormulaKind::Binary { op, left, right } => {
            Formula::binary(*op, substitute(left, var, c), substitute(right, var, c))
        }
        FormulaKind::Quantifier { op, var: qvar, body } => {
            if *qvar == var {
                f.clone()
            } else {
                Formula::quantifier(*op, *qvar, substitute(body, var, c))
            }
        }
        FormulaKind::Stamped { world, inner } => {
            Formula::stamped(*world, substitute(inner, var, c))
        }
    }
}

fn substitute_term(t: &Term, var: char, c: char) -> Term {
    match t {
        Term::Const(tc) if *tc == var => Term::Const(c),
        Term::Const(tc) => Term::Const(*tc),
        Term::Quoted(inner) => Term::Quoted(Box::new(substitute(inner, var, c))),
    }
}
