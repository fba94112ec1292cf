//! Shared types: the error hierarchy.

pub mod err;

pub use err::{ErrorKind, ParseError, PlannerError, RuleError};
