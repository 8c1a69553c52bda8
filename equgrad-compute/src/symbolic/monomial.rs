//! Monomials: the numeric coefficient and the multiset of powers that make up a single term.
//!
//! Every canonical term can be read as `coeff * b1^k1 * b2^k2 * ...`, where each base `bi` is
//! either a [`Symbol`] or some other expression that cannot be broken down further (a sum, a
//! quotient, a power with a non-integer exponent, ...). The sorted list of `(base, exponent)`
//! pairs is the term's [`Signature`]; two terms are **like terms** exactly when their signatures
//! are equal, and combining them is a matter of adding their coefficients.
//!
//! [`Monomial::into_expr`] renders a monomial back into canonical product form, and
//! [`Monomial::of`] reads that form back into an equal monomial.

use crate::primitive::{as_integer, normalize};
use std::collections::BTreeMap;
use super::expr::{Expr, Symbol};

/// The base of a power inside a monomial.
///
/// Symbols sort before opaque bases, and symbols sort alphabetically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Base {
    /// A variable.
    Symbol(Symbol),

    /// Any other expression, treated as an indivisible unit.
    Opaque(Expr),
}

impl Base {
    /// Converts the base back into an expression.
    pub fn into_expr(self) -> Expr {
        match self {
            Self::Symbol(symbol) => Expr::Variable(symbol),
            Self::Opaque(expr) => expr,
        }
    }
}

/// The sorted `(base, exponent)` pairs identifying the shape of a term, independent of its
/// numeric coefficient. Exponents are never zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Signature(pub Vec<(Base, i64)>);

impl Signature {
    /// The total degree of the term, i.e. the sum of its exponents.
    pub fn degree(&self) -> i64 {
        self.0.iter().fold(0i64, |acc, (_, exp)| acc.saturating_add(*exp))
    }

    /// Returns true if this is the signature of a bare constant.
    pub fn is_constant(&self) -> bool {
        self.0.is_empty()
    }
}

/// A numeric coefficient multiplied by integer powers of bases.
#[derive(Debug, Clone, PartialEq)]
pub struct Monomial {
    /// The numeric coefficient.
    pub coeff: f64,

    /// The exponent of each base. Zero exponents are never stored.
    pub factors: BTreeMap<Base, i64>,
}

impl Default for Monomial {
    fn default() -> Self {
        Self::one()
    }
}

impl Monomial {
    /// The monomial `1`.
    pub fn one() -> Self {
        Self { coeff: 1.0, factors: BTreeMap::new() }
    }

    /// Builds a monomial from a coefficient and a signature.
    pub fn new(coeff: f64, signature: Signature) -> Self {
        Self { coeff, factors: signature.0.into_iter().collect() }
    }

    /// Reads the given expression as a monomial.
    ///
    /// Products are flattened (with an explicit worklist, so nesting depth is irrelevant),
    /// constants are folded into the coefficient, and variables raised to integer powers become
    /// symbol entries. Everything else becomes an opaque base.
    pub fn of(expr: &Expr) -> Self {
        Self::of_factors(std::slice::from_ref(expr))
    }

    /// Reads the product of the given factors as a monomial. See [`Monomial::of`].
    pub fn of_factors(factors: &[Expr]) -> Self {
        let mut monomial = Self::one();
        let mut stack = factors.iter().rev().collect::<Vec<_>>();

        while let Some(expr) = stack.pop() {
            match expr {
                Expr::Constant(value) => monomial.coeff *= value,
                Expr::Variable(symbol) => monomial.mul_factor(Base::Symbol(*symbol), 1),
                Expr::Product(inner) => stack.extend(inner.iter().rev()),
                Expr::Power(base, exp) => match (&**base, exp.as_integer()) {
                    (Expr::Variable(symbol), Some(n)) => {
                        monomial.mul_factor(Base::Symbol(*symbol), n);
                    },
                    (Expr::Sum(_) | Expr::Product(_) | Expr::Quotient(..) | Expr::Power(..), Some(n)) => {
                        monomial.mul_factor(Base::Opaque((**base).clone()), n);
                    },
                    _ => monomial.mul_factor(Base::Opaque(expr.clone()), 1),
                },
                Expr::Sum(_) | Expr::Quotient(..) => {
                    monomial.mul_factor(Base::Opaque(expr.clone()), 1);
                },
            }
        }

        monomial.coeff = normalize(monomial.coeff);
        monomial
    }

    /// Multiplies the monomial by `base^exp`, removing the base if its exponent becomes zero.
    pub fn mul_factor(&mut self, base: Base, exp: i64) {
        if exp == 0 {
            return;
        }

        let entry = self.factors.entry(base).or_insert(0);
        *entry = entry.saturating_add(exp);
        if *entry == 0 {
            self.factors.retain(|_, exp| *exp != 0);
        }
    }

    /// Multiplies this monomial by another.
    pub fn mul(&mut self, other: Monomial) {
        self.coeff = normalize(self.coeff * other.coeff);
        for (base, exp) in other.factors {
            self.mul_factor(base, exp);
        }
    }

    /// Raises this monomial to an integer power.
    pub fn pow(self, k: i64) -> Self {
        if k == 0 {
            return Self::one();
        }

        Self {
            coeff: normalize(self.coeff.powf(k as f64)),
            factors: self.factors
                .into_iter()
                .map(|(base, exp)| (base, exp.saturating_mul(k)))
                .collect(),
        }
    }

    /// Divides this monomial by another.
    pub fn divide(&self, other: &Monomial) -> Self {
        let mut result = self.clone();
        result.coeff = normalize(result.coeff / other.coeff);
        for (base, exp) in &other.factors {
            result.mul_factor(base.clone(), exp.saturating_neg());
        }
        result
    }

    /// Returns the exponent of the given base, or 0 if it is absent.
    pub fn exponent_of(&self, base: &Base) -> i64 {
        self.factors.get(base).copied().unwrap_or(0)
    }

    /// Returns the signature of this monomial.
    pub fn signature(&self) -> Signature {
        Signature(self.factors.iter().map(|(base, exp)| (base.clone(), *exp)).collect())
    }

    /// Returns the coefficient as an integer, if it is one.
    pub fn integer_coeff(&self) -> Option<i64> {
        as_integer(self.coeff)
    }

    /// Renders the monomial in canonical product form.
    ///
    /// - A zero coefficient renders as `0`.
    /// - The coefficient is the first factor, and is omitted if it is `1` and other factors
    ///   exist.
    /// - Bases follow in signature order; an exponent of 1 renders the bare base.
    pub fn into_expr(self) -> Expr {
        if self.coeff == 0.0 {
            return Expr::Constant(0.0);
        }

        let mut factors = Vec::with_capacity(self.factors.len() + 1);
        if self.coeff != 1.0 || self.factors.is_empty() {
            factors.push(Expr::Constant(self.coeff));
        }

        for (base, exp) in self.factors {
            let base = base.into_expr();
            if exp == 1 {
                factors.push(base);
            } else {
                factors.push(Expr::power(base, Expr::Constant(exp as f64)));
            }
        }

        Expr::Product(factors).downgrade()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn sym(name: &str) -> Symbol {
        Symbol::new(name).unwrap()
    }

    fn var(name: &str) -> Expr {
        Expr::variable(name).unwrap()
    }

    #[test]
    fn read_flattened_product() {
        // 2 * (x * (3 * x^2)) * y
        let expr = Expr::Product(vec![
            Expr::Constant(2.0),
            Expr::Product(vec![
                var("x"),
                Expr::Product(vec![
                    Expr::Constant(3.0),
                    Expr::power(var("x"), Expr::Constant(2.0)),
                ]),
            ]),
            var("y"),
        ]);
        let monomial = Monomial::of(&expr);
        assert_eq!(monomial.coeff, 6.0);
        assert_eq!(monomial.signature(), Signature(vec![
            (Base::Symbol(sym("x")), 3),
            (Base::Symbol(sym("y")), 1),
        ]));
        assert_eq!(monomial.signature().degree(), 4);
    }

    #[test]
    fn opaque_bases() {
        let sum = Expr::Sum(vec![var("a"), var("b")]);
        let root = Expr::power(var("x"), Expr::Constant(0.5));
        let expr = Expr::Product(vec![
            Expr::power(sum.clone(), Expr::Constant(-2.0)),
            root.clone(),
        ]);
        let monomial = Monomial::of(&expr);
        assert_eq!(monomial.coeff, 1.0);
        assert_eq!(monomial.exponent_of(&Base::Opaque(sum)), -2);
        assert_eq!(monomial.exponent_of(&Base::Opaque(root)), 1);
        assert_eq!(monomial.exponent_of(&Base::Symbol(sym("x"))), 0);
    }

    #[test]
    fn cancelling_exponents() {
        let expr = Expr::Product(vec![
            var("x"),
            Expr::power(var("x"), Expr::Constant(-1.0)),
        ]);
        let monomial = Monomial::of(&expr);
        assert!(monomial.signature().is_constant());
        assert_eq!(monomial.into_expr(), Expr::Constant(1.0));
    }

    #[test]
    fn render() {
        let monomial = Monomial::new(-3.0, Signature(vec![
            (Base::Symbol(sym("x")), 2),
            (Base::Symbol(sym("y")), 1),
        ]));
        assert_eq!(monomial.into_expr(), Expr::Product(vec![
            Expr::Constant(-3.0),
            Expr::power(var("x"), Expr::Constant(2.0)),
            var("y"),
        ]));

        let unit = Monomial::new(1.0, Signature(vec![(Base::Symbol(sym("z")), 1)]));
        assert_eq!(unit.into_expr(), var("z"));

        let zero = Monomial::new(0.0, Signature(vec![(Base::Symbol(sym("z")), 1)]));
        assert_eq!(zero.into_expr(), Expr::Constant(0.0));
    }

    #[test]
    fn render_then_read() {
        let monomial = Monomial::new(4.0, Signature(vec![
            (Base::Symbol(sym("a")), -1),
            (Base::Opaque(Expr::Sum(vec![Expr::Constant(1.0), var("b")])), 3),
        ]));
        assert_eq!(Monomial::of(&monomial.clone().into_expr()), monomial);
    }

    #[test]
    fn power_and_divide() {
        let monomial = Monomial::of(&Expr::Product(vec![Expr::Constant(2.0), var("x")]));
        let squared = monomial.clone().pow(2);
        assert_eq!(squared.coeff, 4.0);
        assert_eq!(squared.exponent_of(&Base::Symbol(sym("x"))), 2);

        let quotient = squared.divide(&monomial);
        assert_eq!(quotient, monomial);
        assert_eq!(monomial.pow(0), Monomial::one());
    }
}
