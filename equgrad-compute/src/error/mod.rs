//! Errors produced while building, transforming, or evaluating expressions.

pub mod kind;

use equgrad_error::ErrorKind;
use kind::{DivisionByZero, DomainError, InvalidSymbolName, TooDeep, UndefinedSymbol};

/// Represents an error that can occur in any operation of this crate.
///
/// Every operation is non-mutating, so an error never leaves behind a partially built
/// expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A variable was constructed with an illegal name.
    InvalidSymbolName(InvalidSymbolName),

    /// Evaluation referenced a variable missing from the bindings.
    UndefinedSymbol(UndefinedSymbol),

    /// Evaluation or simplification found a denominator equal to zero.
    DivisionByZero(DivisionByZero),

    /// A negative base was raised to a non-integer power.
    DomainError(DomainError),

    /// The expression is nested deeper than [`MAX_DEPTH`](crate::consts::MAX_DEPTH).
    TooDeep(TooDeep),
}

impl Error {
    /// Returns the underlying error kind.
    pub fn kind(&self) -> &dyn ErrorKind {
        match self {
            Error::InvalidSymbolName(e) => e,
            Error::UndefinedSymbol(e) => e,
            Error::DivisionByZero(e) => e,
            Error::DomainError(e) => e,
            Error::TooDeep(e) => e,
        }
    }

    /// Build a report from this error kind.
    pub fn report(&self) -> String {
        self.kind().report()
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.kind().message())
    }
}

impl std::error::Error for Error {}

/// Implements `From<Kind> for Error` for each error kind.
macro_rules! impl_from_kind {
    ($($kind:ident),* $(,)?) => {
        $(
            impl From<$kind> for Error {
                fn from(e: $kind) -> Self {
                    Error::$kind(e)
                }
            }
        )*
    };
}

impl_from_kind!(InvalidSymbolName, UndefinedSymbol, DivisionByZero, DomainError, TooDeep);

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn report() {
        let err = Error::from(InvalidSymbolName { name: "xy".to_string() });
        assert_eq!(err.to_string(), "`xy` is not a valid symbol name");
        assert_eq!(
            err.report(),
            "error: `xy` is not a valid symbol name\nhelp: symbol names must be exactly one letter from `a-z` or `A-Z`",
        );
    }

    #[test]
    fn downcast_kind() {
        let err = Error::from(DomainError { base: -1.0, exponent: 0.5 });
        let kind = err.kind().as_any().downcast_ref::<DomainError>().unwrap();
        assert_eq!(kind.base, -1.0);
        assert_eq!(err.to_string(), "cannot raise the negative number `-1` to the non-integer power `0.5`");
    }

    #[test]
    fn too_deep_help() {
        let err = Error::from(TooDeep);
        assert_eq!(err.kind().help().as_deref(), Some("the maximum expression depth is equal to: `256`"));
    }
}
