use crate::consts::MAX_DEPTH;
use crate::symbolic::expr::Symbol;
use equgrad_attrs::ErrorKind;

/// A variable was given a name that is not a single ASCII letter.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is not a valid symbol name", self.name),
    help = "symbol names must be exactly one letter from `a-z` or `A-Z`",
)]
pub struct InvalidSymbolName {
    /// The rejected name.
    pub name: String,
}

/// The expression references a variable that has no value in the evaluation context.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is not defined", self.symbol),
    help = format!("bind a value to `{}` before evaluating", self.symbol),
)]
pub struct UndefinedSymbol {
    /// The variable that was missing.
    pub symbol: Symbol,
}

/// A denominator is identically zero.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "division by zero",
    help = "the denominator of this quotient is zero",
)]
pub struct DivisionByZero;

/// A negative number was raised to a non-integer power.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!(
        "cannot raise the negative number `{}` to the non-integer power `{}`",
        self.base,
        self.exponent,
    ),
    help = "the result would be a complex number, which is not supported",
)]
pub struct DomainError {
    /// The negative base.
    pub base: f64,

    /// The non-integer exponent.
    pub exponent: f64,
}

/// The expression is nested too deeply to be processed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "maximum expression depth exceeded",
    help = format!("the maximum expression depth is equal to: `{}`", MAX_DEPTH),
)]
pub struct TooDeep;
