/*!
The error hierarchy.

[ErrorKind] is the single error type surfaced by this crate; it wraps one
sub-enum per component, one of: a malformed formula, an exhausted
arbitrary-constant pool, or a rule dispatched on a glyph outside the
closed operator set (an implementation bug, not a user error).

Non-derivation (`derive` stopping without reaching the root goal) is
*not* an error; callers inspect the returned proof's last line instead.
*/

use crate::formula::Formula;

/// The single error type surfaced by this crate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The parser could not produce a formula tree.
    Parse(ParseError),

    /// The goal planner ran out of fresh constants.
    Planner(PlannerError),

    /// A rule was dispatched on an operator outside the closed set.
    Rule(RuleError),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Parse(e) => write!(f, "{e}"),
            ErrorKind::Planner(e) => write!(f, "{e}"),
            ErrorKind::Rule(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

impl From<PlannerError> for ErrorKind {
    fn from(e: PlannerError) -> Self {
        ErrorKind::Planner(e)
    }
}

impl From<RuleError> for ErrorKind {
    fn from(e: RuleError) -> Self {
        ErrorKind::Rule(e)
    }
}

/// Why a formula string failed to parse. Corresponds to the `MalformedFormula` kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The input was empty.
    EmptyFormula,

    /// Parentheses or quotes did not balance.
    UnbalancedGrouping,

    /// An operator had no operand where one was required.
    MissingOperand,

    /// A character outside the defined alphabet appeared in the input.
    InvalidCharacter(char),

    /// A quantifier's body did not mention its bound variable.
    UnboundVariable(char),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::EmptyFormula => write!(f, "empty formula"),
            ParseError::UnbalancedGrouping => write!(f, "unbalanced parentheses or quotes"),
            ParseError::MissingOperand => write!(f, "operator is missing an operand"),
            ParseError::InvalidCharacter(c) => write!(f, "character '{c}' is outside the alphabet"),
            ParseError::UnboundVariable(c) => write!(f, "variable '{c}' does not occur in its scope"),
        }
    }
}

/// Which arbitrary-constant pool ran dry. Corresponds to the `ExhaustedPool` kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PoolKind {
    /// Item constants, `a..t`.
    Item,
    /// Predicate constants, `A..T`.
    Predicate,
    /// World digits, `1..9`.
    World,
}

impl std::fmt::Display for PoolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PoolKind::Item => write!(f, "item constant"),
            PoolKind::Predicate => write!(f, "predicate constant"),
            PoolKind::World => write!(f, "world digit"),
        }
    }
}

/// Goal-planner failures.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlannerError {
    /// A decomposition needed a fresh constant of `kind` but its pool, for this goal, was empty.
    ExhaustedPool { kind: PoolKind, goal: Box<Formula> },
}

impl std::fmt::Display for PlannerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlannerError::ExhaustedPool { kind, goal } => {
                write!(f, "no fresh {kind} constant left to decompose goal `{goal}`")
            }
        }
    }
}

/// Rule-dispatch failures. These indicate a bug in this crate, not a user error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuleError {
    /// A rule was looked up for a glyph outside the closed operator set.
    NonRulableOperator(char),
}

impl std::fmt::Display for RuleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleError::NonRulableOperator(c) => write!(f, "'{c}' is not a rulable operator"),
        }
    }
}
