/*!
The fixed alphabet of the logic, and the surface-symbol conversion table.

Item constants, predicate constants, item variables, predicate variables, and
world digits are each a contiguous range of characters. These ranges, plus the
operator glyphs, are the only characters a well-formed formula may contain.

# Surface symbols

Formulas typed with ASCII digraphs (`->`, `&`, `@`, ...) are converted to their
canonical glyph (→, ∧, ∀, ...) once, left to right, before parsing. See
[convert_surface_symbols].
*/

/// Item constants: `a..t`.
pub const ITEM_CONSTS: std::ops::RangeInclusive<char> = 'a'..='t';

/// Predicate constants: `A..T`.
pub const PRED_CONSTS: std::ops::RangeInclusive<char> = 'A'..='T';

/// Item variables: `u..z`.
pub const ITEM_VARS: std::ops::RangeInclusive<char> = 'u'..='z';

/// Predicate variables: `U..Z`.
pub const PRED_VARS: std::ops::RangeInclusive<char> = 'U'..='Z';

/// World digits: `1..9`.
pub const WORLD_DIGITS: std::ops::RangeInclusive<char> = '1'..='9';

/// Negation.
pub const NOT: char = '¬';
/// Conditional.
pub const THEN: char = '→';
/// Conjunction.
pub const AND: char = '∧';
/// Disjunction.
pub const OR: char = '∨';
/// Biconditional.
pub const IFF: char = '↔';
/// Verum.
pub const VER: char = '⊤';
/// Falsum.
pub const FAL: char = '⊥';
/// Universal quantifier.
pub const ALL: char = '∀';
/// Existential quantifier.
pub const SOME: char = '∃';
/// Necessity.
pub const NEC: char = '◻';
/// Possibility.
pub const POSS: char = '◇';
/// Identity.
pub const EQ: char = '=';
/// Left parenthesis.
pub const LP: char = '(';
/// Right parenthesis.
pub const RP: char = ')';
/// Left predicate-argument quote.
pub const LQ: char = '«';
/// Right predicate-argument quote.
pub const RQ: char = '»';
/// Left bracket, opens a fresh-constant assumption placeholder `[x]`.
pub const LB: char = '[';
/// Right bracket, closes a fresh-constant assumption placeholder `[x]`.
pub const RB: char = ']';

/// Unary connectives: ¬, ◻, ◇.
pub const UNOPS: [char; 3] = [NOT, NEC, POSS];

/// Binary connectives: →, ∧, ∨, ↔.
pub const BINOPS: [char; 4] = [THEN, AND, OR, IFF];

/// Quantifiers: ∀, ∃.
pub const QUANTS: [char; 2] = [ALL, SOME];

/// Whether `c` is an item constant.
pub fn is_item_const(c: char) -> bool {
    ITEM_CONSTS.contains(&c)
}

/// Whether `c` is a predicate constant.
pub fn is_pred_const(c: char) -> bool {
    PRED_CONSTS.contains(&c)
}

/// Whether `c` is an item variable.
pub fn is_item_var(c: char) -> bool {
    ITEM_VARS.contains(&c)
}

/// Whether `c` is a predicate variable.
pub fn is_pred_var(c: char) -> bool {
    PRED_VARS.contains(&c)
}

/// Whether `c` is a world digit.
pub fn is_world_digit(c: char) -> bool {
    WORLD_DIGITS.contains(&c)
}

/// Whether `c` is any item or predicate constant.
pub fn is_const(c: char) -> bool {
    is_item_const(c) || is_pred_const(c)
}

/// The surface-symbol conversion table: ASCII digraphs to canonical glyphs.
///
/// Ordered longest-key-first so `<->` is matched before `<` could be (if `<`
/// were ever a key, which it is not, but the ordering discipline is kept for
/// any future additions).
const SYM_CONV: &[(&str, char)] = &[
    ("<->", IFF),
    ("<=>", IFF),
    ("->", THEN),
    ("=>", THEN),
    ("/\\", AND),
    ("\\/", OR),
    ("#T", VER),
    ("#F", FAL),
    ("[]", NEC),
    ("<>", POSS),
    ("\"l", LQ),
    ("\"r", RQ),
    ("~", NOT),
    ("!", NOT),
    ("&", AND),
    ("^", AND),
    ("|", OR),
    ("@", ALL),
    ("3", SOME),
];

/// Converts ASCII digraphs in `input` to their canonical glyphs, once, left to right.
///
/// Longer keys are tried before shorter ones at each position so that, e.g.,
/// `<->` is not captured as `<` followed by `->`.
pub fn convert_surface_symbols(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(chars.len());
    let mut i = 0;
    'outer: while i < chars.len() {
        for (key, glyph) in SYM_CONV {
            let key_len = key.chars().count();
            if i + key_len <= chars.len() && chars[i..i + key_len].iter().collect::<String>() == *key {
                out.push(*glyph);
                i += key_len;
                continue 'outer;
            }
        }
        out.push(chars[i]);
        i += 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_arrow_before_lt() {
        assert_eq!(convert_surface_symbols("p<->q"), "p↔q");
        assert_eq!(convert_surface_symbols("p->q"), "p→q");
    }

    #[test]
    fn converts_quantifiers_and_modal() {
        assert_eq!(convert_surface_symbols("@xP«x»"), "∀xP«x»");
        assert_eq!(convert_surface_symbols("3xP«x»"), "∃xP«x»");
        assert_eq!(convert_surface_symbols("[]A"), "◻A");
        assert_eq!(convert_surface_symbols("<>A"), "◇A");
    }

    #[test]
    fn leaves_canonical_input_untouched() {
        let s = "∀x(P«x»→Q«x»)";
        assert_eq!(convert_surface_symbols(s), s);
    }
}
