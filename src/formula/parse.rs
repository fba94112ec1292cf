/*!
The formula parser.

Locates the main operator by a single left-to-right scan recording, at
each operator-glyph position, the paren/quote depth accumulated to its
left, then recurses on the pieces either side of it. Outer parentheses
are peeled before the scan runs, via the same prefix-balance approach.
*/

use super::{BinaryOp, Formula, QuantOp, Term, UnaryOp};
use crate::alphabet::*;
use crate::types::err::ParseError;

/// Parses `s` (already through [crate::alphabet::convert_surface_symbols]) into a formula.
pub fn parse(s: &str) -> Result<Formula, ParseError> {
    if s.is_empty() {
        return Err(ParseError::EmptyFormula);
    }
    let chars: Vec<char> = s.chars().collect();
    parse_chars(&chars)
}

fn parse_chars(chars: &[char]) -> Result<Formula, ParseError> {
    let peeled = peel_outer_parens(chars);
    if peeled.is_empty() {
        return Err(ParseError::EmptyFormula);
    }
    validate_alphabet(&peeled)?;

    if peeled.len() == 1 {
        return parse_nullary(peeled[0]);
    }
    if peeled.len() == 3 && peeled[0] == LB && peeled[2] == RB {
        return Ok(Formula::placeholder(peeled[1]));
    }

    let candidate = find_main_op(&peeled)?;
    build_from_main_op(&peeled, candidate)
}

/// Peels one matching outer parenthesis pair at a time, as long as the
/// open-paren balance of every proper prefix stays nonzero (i.e. the
/// opening paren at position 0 closes only at the very last character).
fn peel_outer_parens(chars: &[char]) -> Vec<char> {
    let mut cur: Vec<char> = chars.to_vec();
    loop {
        let n = cur.len();
        if n < 2 {
            break;
        }
        let mut balance = 0i32;
        let mut balances = Vec::with_capacity(n);
        for &c in &cur {
            if c == LP {
                balance += 1;
            } else if c == RP {
                balance -= 1;
            }
            balances.push(balance);
        }
        let prefix_nonzero = balances[..n - 1].iter().all(|&b| b != 0);
        let first_nonzero = balances[0] != 0;
        if prefix_nonzero && first_nonzero {
            cur = cur[1..n - 1].to_vec();
        } else {
            break;
        }
    }
    cur
}

fn validate_alphabet(chars: &[char]) -> Result<(), ParseError> {
    let mut paren_depth = 0i32;
    let mut quote_depth = 0i32;
    for &c in chars {
        match c {
            LP => paren_depth += 1,
            RP => {
                paren_depth -= 1;
                if paren_depth < 0 {
                    return Err(ParseError::UnbalancedGrouping);
                }
            }
            LQ => quote_depth += 1,
            RQ => {
                quote_depth -= 1;
                if quote_depth < 0 {
                    return Err(ParseError::UnbalancedGrouping);
                }
            }
            LB | RB => {}
            c if is_alphabet_glyph(c) => {}
            c => return Err(ParseError::InvalidCharacter(c)),
        }
    }
    if paren_depth != 0 || quote_depth != 0 {
        return Err(ParseError::UnbalancedGrouping);
    }
    Ok(())
}

fn is_alphabet_glyph(c: char) -> bool {
    is_item_const(c)
        || is_pred_const(c)
        || is_item_var(c)
        || is_pred_var(c)
        || is_world_digit(c)
        || matches!(c, NOT | THEN | AND | OR | IFF | VER | FAL | ALL | SOME | NEC | POSS | EQ)
}

fn parse_nullary(c: char) -> Result<Formula, ParseError> {
    match c {
        VER => Ok(Formula::verum()),
        FAL => Ok(Formula::falsum()),
        c if is_pred_const(c) => Ok(Formula::predicate(c, vec![])),
        c => Err(ParseError::InvalidCharacter(c)),
    }
}

#[derive(Clone, Copy)]
enum Category {
    Binary(BinaryOp),
    Unary(UnaryOp),
    Quant(QuantOp),
    Eq,
    Atomic,
}

#[derive(Clone, Copy)]
struct Candidate {
    pos: usize,
    depth: i32,
    cat: Category,
}

fn op_category(c: char) -> Option<Category> {
    match c {
        THEN => Some(Category::Binary(BinaryOp::Then)),
        AND => Some(Category::Binary(BinaryOp::And)),
        OR => Some(Category::Binary(BinaryOp::Or)),
        IFF => Some(Category::Binary(BinaryOp::Iff)),
        NOT => Some(Category::Unary(UnaryOp::Not)),
        NEC => Some(Category::Unary(UnaryOp::Nec)),
        POSS => Some(Category::Unary(UnaryOp::Poss)),
        ALL => Some(Category::Quant(QuantOp::All)),
        SOME => Some(Category::Quant(QuantOp::Some)),
        EQ => Some(Category::Eq),
        VER | FAL => Some(Category::Atomic),
        c if is_pred_const(c) => Some(Category::Atomic),
        _ => None,
    }
}

/// Finds the main operator: the minimum-depth candidate, tie-broken (i)
/// binary wins, rightmost among ties; (ii) else leftmost unary/quantifier;
/// (iii) else `=`, rightmost among ties; (iv) else predicate/verum/falsum,
/// rightmost among ties.
fn find_main_op(chars: &[char]) -> Result<Candidate, ParseError> {
    let mut depth = 0i32;
    let mut candidates = Vec::new();
    for (i, &c) in chars.iter().enumerate() {
        if let Some(cat) = op_category(c) {
            candidates.push(Candidate { pos: i, depth, cat });
        }
        if c == LP || c == LQ {
            depth += 1;
        } else if c == RP || c == RQ {
            depth -= 1;
        }
    }
    if candidates.is_empty() {
        return Err(ParseError::MissingOperand);
    }
    let min_depth = candidates.iter().map(|c| c.depth).min().unwrap();
    let at_min: Vec<Candidate> = candidates.into_iter().filter(|c| c.depth == min_depth).collect();

    if let Some(c) = at_min.iter().rev().find(|c| matches!(c.cat, Category::Binary(_))) {
        return Ok(*c);
    }
    if let Some(c) = at_min
        .iter()
        .find(|c| matches!(c.cat, Category::Unary(_) | Category::Quant(_)))
    {
        return Ok(*c);
    }
    if let Some(c) = at_min.iter().rev().find(|c| matches!(c.cat, Category::Eq)) {
        return Ok(*c);
    }
    if let Some(c) = at_min.iter().rev().find(|c| matches!(c.cat, Category::Atomic)) {
        return Ok(*c);
    }
    unreachable!("every candidate falls into one of the four categories above")
}

fn build_from_main_op(chars: &[char], candidate: Candidate) -> Result<Formula, ParseError> {
    match candidate.cat {
        Category::Binary(op) => {
            let left = &chars[..candidate.pos];
            let right = &chars[candidate.pos + 1..];
            if left.is_empty() || right.is_empty() {
                return Err(ParseError::MissingOperand);
            }
            Ok(Formula::binary(op, parse_chars(left)?, parse_chars(right)?))
        }
        Category::Unary(op) => {
            let body = &chars[candidate.pos + 1..];
            if body.is_empty() {
                return Err(ParseError::MissingOperand);
            }
            Ok(Formula::unary(op, parse_chars(body)?))
        }
        Category::Quant(op) => {
            if candidate.pos + 1 >= chars.len() {
                return Err(ParseError::MissingOperand);
            }
            let var = chars[candidate.pos + 1];
            if !(is_item_var(var) || is_pred_var(var)) {
                return Err(ParseError::InvalidCharacter(var));
            }
            let body_chars = &chars[candidate.pos + 2..];
            if body_chars.is_empty() {
                return Err(ParseError::MissingOperand);
            }
            let body = parse_chars(body_chars)?;
            if !body.as_str().contains(var) {
                return Err(ParseError::UnboundVariable(var));
            }
            Ok(Formula::quantifier(op, var, body))
        }
        Category::Eq => {
            let left = parse_term(&chars[..candidate.pos])?;
            let right = parse_term(&chars[candidate.pos + 1..])?;
            Ok(Formula::equality(left, right))
        }
        Category::Atomic => {
            if chars.len() == 1 {
                return parse_nullary(chars[0]);
            }
            let head = chars[0];
            if !is_pred_const(head) {
                return Err(ParseError::InvalidCharacter(chars[0]));
            }
            let args = parse_pred_args(&chars[1..])?;
            Ok(Formula::predicate(head, args))
        }
    }
}

fn parse_term(chars: &[char]) -> Result<Term, ParseError> {
    if chars.len() == 1 {
        let c = chars[0];
        return if is_item_const(c) || is_item_var(c) {
            Ok(Term::Const(c))
        } else {
            Err(ParseError::InvalidCharacter(c))
        };
    }
    if chars.len() >= 2 && chars[0] == LQ && chars[chars.len() - 1] == RQ {
        let inner = &chars[1..chars.len() - 1];
        return Ok(Term::Quoted(Box::new(parse_chars(inner)?)));
    }
    Err(ParseError::MissingOperand)
}

fn parse_pred_args(chars: &[char]) -> Result<Vec<Term>, ParseError> {
    let mut args = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c == LQ {
            let mut depth = 1;
            let mut j = i + 1;
            while j < chars.len() && depth > 0 {
                if chars[j] == LQ {
                    depth += 1;
                } else if chars[j] == RQ {
                    depth -= 1;
                }
                j += 1;
            }
            if depth != 0 {
                return Err(ParseError::UnbalancedGrouping);
            }
            let inner = &chars[i + 1..j - 1];
            args.push(Term::Quoted(Box::new(parse_chars(inner)?)));
            i = j;
        } else if is_item_const(c) || is_item_var(c) {
            args.push(Term::Const(c));
            i += 1;
        } else {
            return Err(ParseError::InvalidCharacter(c));
        }
    }
    Ok(args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::{BinaryOp, UnaryOp};

    #[test]
    fn parses_atomic_predicate() {
        let f = parse("Pab").unwrap();
        assert_eq!(f.as_str(), "Pab");
    }

    #[test]
    fn parses_nested_binary_with_right_associative_pick() {
        // Without parens, the rightmost tied binop at minimum depth is the root.
        let f = parse("A∧B∨C").unwrap();
        assert_eq!(f.as_binary(BinaryOp::Or).is_some(), true);
        assert_eq!(f.as_str(), "(A∧B)∨C");
    }

    #[test]
    fn redundant_parens_are_stripped() {
        let f = parse("((A))").unwrap();
        assert_eq!(f.as_str(), "A");
    }

    #[test]
    fn unary_binds_before_sibling_binop_regardless_of_position() {
        let f = parse("¬A∧B").unwrap();
        let (l, r) = f.as_binary(BinaryOp::And).unwrap();
        assert_eq!(l.as_unary(UnaryOp::Not).is_some(), true);
        assert_eq!(r.as_str(), "B");
    }

    #[test]
    fn requires_parens_to_nest_binop_under_unary() {
        let f = parse("¬(A∧B)").unwrap();
        let body = f.as_unary(UnaryOp::Not).unwrap();
        assert_eq!(body.as_binary(BinaryOp::And).is_some(), true);
    }

    #[test]
    fn parses_quantifier_with_predicate_body() {
        let f = parse("∀x(Px→Qx)").unwrap();
        let (var, body) = f.as_quantifier(crate::formula::QuantOp::All).unwrap();
        assert_eq!(var, 'x');
        assert_eq!(body.as_str(), "Px→Qx");
    }

    #[test]
    fn parses_quoted_compound_term() {
        let f = parse("P«Qa»").unwrap();
        assert_eq!(f.as_str(), "P«Qa»");
    }

    #[test]
    fn parses_equality() {
        let f = parse("a=a").unwrap();
        assert_eq!(f.as_equality().is_some(), true);
    }

    #[test]
    fn round_trip_is_canonical_and_stable() {
        for s in ["A", "A∧B", "A∨B∧C", "∀x(Px→Qx)", "a=a", "◻A", "◇A"] {
            let once = parse(s).unwrap();
            let twice = parse(once.as_str()).unwrap();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn rejects_unbalanced_parens() {
        assert_eq!(parse("(A∧B").unwrap_err(), ParseError::UnbalancedGrouping);
    }

    #[test]
    fn rejects_unknown_character() {
        assert_eq!(parse("A∧%").unwrap_err(), ParseError::InvalidCharacter('%'));
    }

    #[test]
    fn rejects_unbound_quantified_variable() {
        assert_eq!(parse("∀xPa").unwrap_err(), ParseError::UnboundVariable('x'));
    }

    #[test]
    fn parses_placeholder() {
        let f = parse("[a]").unwrap();
        assert_eq!(f.placeholder_const(), Some('a'));
    }
}
