//! The expression tree manipulated by every pass in this crate.
//!
//! An [`Expr`] is a closed set of six node kinds: two leaves ([`Expr::Constant`] and
//! [`Expr::Variable`]), two n-ary associative nodes ([`Expr::Sum`] and [`Expr::Product`]), and two
//! binary nodes ([`Expr::Quotient`] and [`Expr::Power`]). Expressions are plain immutable values;
//! every transformation in this crate takes `&Expr` and returns a new tree.
//!
//! Trees built with the arithmetic operators are **raw**: `a + b + c` is a [`Expr::Sum`] nested
//! inside another [`Expr::Sum`], exactly as written. Flattening, combining and ordering only
//! happens when [`simplify`](crate::symbolic::simplify()) is called.
//!
//! # Strict equality
//!
//! Deciding whether two expressions are _mathematically_ equal is as hard as simplification
//! itself (`x^2 + 2x + 1` and `(x + 1)^2` are equal, but look nothing alike). The [`PartialEq`],
//! [`Eq`], [`Ord`] and [`Hash`] implementations for [`Expr`] instead implement **strict
//! equality**: two expressions are equal only if they are the same kind of node with strictly
//! equal children, in the same order. Constants are compared by their bit patterns (with
//! [`f64::total_cmp`]), so strict equality is reflexive even for `NaN`.
//!
//! Strict equality never reports false positives, and because [`simplify`] produces a canonical
//! form, comparing two simplified expressions strictly is a practical way to compare them
//! semantically.
//!
//! [`simplify`]: crate::symbolic::simplify()

mod iter;

use crate::error::{kind::InvalidSymbolName, Error};
use crate::primitive::as_integer;
pub use iter::ExprIter;
use std::{cmp::Ordering, hash::{Hash, Hasher}, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The name of a variable: exactly one ASCII letter, `a-z` or `A-Z`.
///
/// Symbols order alphabetically by their letter in ASCII order, so every uppercase letter sorts
/// before every lowercase letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Symbol(char);

impl Symbol {
    /// Creates a symbol from the given name, failing with
    /// [`InvalidSymbolName`](crate::error::kind::InvalidSymbolName) unless the name is exactly
    /// one ASCII letter.
    pub fn new(name: &str) -> Result<Self, Error> {
        let mut chars = name.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => Ok(Self(c)),
            _ => Err(InvalidSymbolName { name: name.to_string() }.into()),
        }
    }

    /// Returns the letter naming this symbol.
    pub fn name(self) -> char {
        self.0
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Symbol {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Symbol {
    type Error = Error;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Self::new(&name)
    }
}

impl From<Symbol> for String {
    fn from(symbol: Symbol) -> Self {
        symbol.0.to_string()
    }
}

/// An algebraic expression over real constants and single-letter variables.
///
/// For more information about this type, see the [module-level documentation](self).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// A real number, such as `2` or `-0.5`.
    Constant(f64),

    /// A variable, such as `x` or `Y`.
    Variable(Symbol),

    /// Zero or more terms added together. An empty sum is `0`.
    Sum(Vec<Expr>),

    /// Zero or more factors multiplied together. An empty product is `1`.
    Product(Vec<Expr>),

    /// A numerator divided by a denominator.
    Quotient(Box<Expr>, Box<Expr>),

    /// A base raised to an exponent.
    Power(Box<Expr>, Box<Expr>),
}

impl Expr {
    /// Creates a [`Expr::Constant`].
    pub fn constant(value: f64) -> Self {
        Self::Constant(value)
    }

    /// Creates a [`Expr::Variable`] with the given name, failing with
    /// [`InvalidSymbolName`](crate::error::kind::InvalidSymbolName) unless the name is exactly one
    /// ASCII letter.
    pub fn variable(name: &str) -> Result<Self, Error> {
        Symbol::new(name).map(Self::Variable)
    }

    /// Creates a [`Expr::Sum`] of the given terms.
    pub fn sum(terms: Vec<Expr>) -> Self {
        Self::Sum(terms)
    }

    /// Creates a [`Expr::Product`] of the given factors.
    pub fn product(factors: Vec<Expr>) -> Self {
        Self::Product(factors)
    }

    /// Creates a [`Expr::Quotient`].
    pub fn quotient(numerator: Expr, denominator: Expr) -> Self {
        Self::Quotient(Box::new(numerator), Box::new(denominator))
    }

    /// Creates a [`Expr::Power`].
    pub fn power(base: Expr, exponent: Expr) -> Self {
        Self::Power(Box::new(base), Box::new(exponent))
    }

    /// If the expression is a [`Expr::Constant`], returns the contained value.
    pub fn as_constant(&self) -> Option<f64> {
        match self {
            Self::Constant(value) => Some(*value),
            _ => None,
        }
    }

    /// If the expression is a [`Expr::Constant`] holding an exactly representable integer,
    /// returns it.
    pub fn as_integer(&self) -> Option<i64> {
        self.as_constant().and_then(as_integer)
    }

    /// If the expression is a [`Expr::Variable`], returns the contained symbol.
    pub fn as_symbol(&self) -> Option<Symbol> {
        match self {
            Self::Variable(symbol) => Some(*symbol),
            _ => None,
        }
    }

    /// Returns true if the expression is a [`Expr::Constant`] with exactly the given value.
    pub fn is_constant(&self, value: f64) -> bool {
        self.as_constant() == Some(value)
    }

    /// Trivially downgrades the expression into a simpler form.
    ///
    /// Some operations may result in an [`Expr::Sum`] with zero / one term, or an
    /// [`Expr::Product`] with zero / one factor. This function checks for these cases and
    /// simplifies the expression into the single term / factor, or an [`Expr::Constant`]
    /// containing 0 or 1.
    pub(crate) fn downgrade(self) -> Self {
        match self {
            Self::Sum(mut terms) => {
                if terms.is_empty() {
                    Self::Constant(0.0)
                } else if terms.len() == 1 {
                    terms.remove(0)
                } else {
                    Self::Sum(terms)
                }
            },
            Self::Product(mut factors) => {
                if factors.is_empty() {
                    Self::Constant(1.0)
                } else if factors.len() == 1 {
                    factors.remove(0)
                } else {
                    Self::Product(factors)
                }
            },
            _ => self,
        }
    }

    /// Returns an iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn post_order_iter(&self) -> ExprIter {
        ExprIter::new(self)
    }

    /// Returns the variables appearing in the expression, sorted and without duplicates.
    pub fn symbols(&self) -> Vec<Symbol> {
        let mut symbols = self.post_order_iter()
            .filter_map(Expr::as_symbol)
            .collect::<Vec<_>>();
        symbols.sort();
        symbols.dedup();
        symbols
    }

    /// Position of the node kind in the total order used by [`Ord`].
    fn rank(&self) -> u8 {
        match self {
            Self::Constant(_) => 0,
            Self::Variable(_) => 1,
            Self::Sum(_) => 2,
            Self::Product(_) => 3,
            Self::Quotient(..) => 4,
            Self::Power(..) => 5,
        }
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Self::Constant(value)
    }
}

impl From<Symbol> for Expr {
    fn from(symbol: Symbol) -> Self {
        Self::Variable(symbol)
    }
}

/// Orders expressions by kind first (constant, variable, sum, product, quotient, power), then by
/// their contents. Constants use [`f64::total_cmp`], children are compared lexicographically.
impl Ord for Expr {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Constant(lhs), Self::Constant(rhs)) => lhs.total_cmp(rhs),
            (Self::Variable(lhs), Self::Variable(rhs)) => lhs.cmp(rhs),
            (Self::Sum(lhs), Self::Sum(rhs)) | (Self::Product(lhs), Self::Product(rhs)) => {
                lhs.cmp(rhs)
            },
            (Self::Quotient(lhs_a, lhs_b), Self::Quotient(rhs_a, rhs_b))
                | (Self::Power(lhs_a, lhs_b), Self::Power(rhs_a, rhs_b)) => {
                lhs_a.cmp(rhs_a).then_with(|| lhs_b.cmp(rhs_b))
            },
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for Expr {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Checks if two expressions are **strictly** equal.
///
/// For more information about strict equality, see the [module-level documentation](self).
impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Expr {}

/// [`Hash`] is implemented manually to hash [`Expr::Constant`]s by their bit pattern, which is
/// consistent with the strict equality above.
impl Hash for Expr {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank().hash(state);
        match self {
            Self::Constant(value) => value.to_bits().hash(state),
            Self::Variable(symbol) => symbol.hash(state),
            Self::Sum(children) | Self::Product(children) => children.hash(state),
            Self::Quotient(lhs, rhs) | Self::Power(lhs, rhs) => {
                lhs.hash(state);
                rhs.hash(state);
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;
    use super::*;

    fn var(name: &str) -> Expr {
        Expr::variable(name).unwrap()
    }

    #[test]
    fn valid_symbols() {
        assert_eq!(Symbol::new("x").unwrap().name(), 'x');
        assert_eq!(Symbol::new("Q").unwrap().name(), 'Q');
        assert_eq!("z".parse::<Symbol>().unwrap(), Symbol::new("z").unwrap());
    }

    #[test]
    fn invalid_symbols() {
        for name in ["xy", "1", "", "_", "é", " x", "x "] {
            assert_eq!(
                Expr::variable(name),
                Err(Error::InvalidSymbolName(InvalidSymbolName { name: name.to_string() })),
                "name: {:?}",
                name,
            );
        }
    }

    #[test]
    fn strict_equality() {
        let a = Expr::Sum(vec![var("x"), Expr::Constant(2.0)]);
        let b = Expr::Sum(vec![var("x"), Expr::Constant(2.0)]);
        assert_eq!(a, b);

        // same terms in a different order are NOT strictly equal
        let c = Expr::Sum(vec![Expr::Constant(2.0), var("x")]);
        assert_ne!(a, c);

        // nor is the same value in a different shape
        let d = Expr::Product(vec![var("x"), Expr::Constant(2.0)]);
        assert_ne!(a, d);
    }

    #[test]
    fn strict_equality_of_constants() {
        assert_eq!(Expr::Constant(f64::NAN), Expr::Constant(f64::NAN));
        assert_ne!(Expr::Constant(0.0), Expr::Constant(-0.0));
    }

    #[test]
    fn total_order() {
        let mut exprs = vec![
            Expr::power(var("x"), Expr::Constant(2.0)),
            Expr::quotient(var("x"), var("y")),
            Expr::Product(vec![]),
            Expr::Sum(vec![]),
            var("b"),
            var("a"),
            Expr::Constant(3.0),
            Expr::Constant(-1.0),
        ];
        exprs.sort();
        assert_eq!(exprs, vec![
            Expr::Constant(-1.0),
            Expr::Constant(3.0),
            var("a"),
            var("b"),
            Expr::Sum(vec![]),
            Expr::Product(vec![]),
            Expr::quotient(var("x"), var("y")),
            Expr::power(var("x"), Expr::Constant(2.0)),
        ]);
    }

    #[test]
    fn hash_matches_equality() {
        let set = [
            Expr::Sum(vec![var("x"), Expr::Constant(1.0)]),
            Expr::Sum(vec![var("x"), Expr::Constant(1.0)]),
            Expr::Sum(vec![Expr::Constant(1.0), var("x")]),
        ].into_iter().collect::<HashSet<_>>();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn downgrade() {
        assert_eq!(Expr::Sum(vec![]).downgrade(), Expr::Constant(0.0));
        assert_eq!(Expr::Product(vec![]).downgrade(), Expr::Constant(1.0));
        assert_eq!(Expr::Sum(vec![var("x")]).downgrade(), var("x"));
        assert_eq!(Expr::Product(vec![var("y")]).downgrade(), var("y"));
    }

    #[test]
    fn free_symbols() {
        let expr = Expr::Sum(vec![
            Expr::power(var("y"), var("x")),
            Expr::Product(vec![Expr::Constant(2.0), var("x")]),
            Expr::quotient(var("a"), var("y")),
        ]);
        assert_eq!(expr.symbols(), vec![
            Symbol::new("a").unwrap(),
            Symbol::new("x").unwrap(),
            Symbol::new("y").unwrap(),
        ]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_validates_symbol() {
        let symbol: Symbol = serde_json::from_str("\"x\"").unwrap();
        assert_eq!(symbol, Symbol::new("x").unwrap());
        assert_eq!(serde_json::to_string(&symbol).unwrap(), "\"x\"");

        assert!(serde_json::from_str::<Symbol>("\"xy\"").is_err());
        assert!(serde_json::from_str::<Symbol>("\"1\"").is_err());
    }
}

