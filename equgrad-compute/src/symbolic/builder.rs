//! Arithmetic combinators that assemble **raw** expression trees.
//!
//! The operators in this module never simplify: `a + b` is always `Sum([a, b])`, even if `a` is
//! itself a sum, and `x * 1` is still a two-factor product. Canonicalization is deferred to an
//! explicit [`simplify`](crate::symbolic::simplify()) call. The single exception is negation of a
//! [`Expr::Constant`], which negates the value directly.
//!
//! ```
//! use equgrad_compute::symbolic::Expr;
//!
//! let x = Expr::variable("x")?;
//! let expr = &x * 2.0 - 1.0;
//! assert_eq!(expr, Expr::Sum(vec![
//!     Expr::Product(vec![Expr::variable("x")?, Expr::Constant(2.0)]),
//!     Expr::Constant(-1.0),
//! ]));
//! # Ok::<(), equgrad_compute::error::Error>(())
//! ```

use std::ops::{Add, Div, Mul, Neg, Sub};
use super::expr::Expr;

impl Expr {
    /// Raises this expression to the given power, producing a raw [`Expr::Power`].
    pub fn pow(self, exponent: impl Into<Expr>) -> Self {
        Self::Power(Box::new(self), Box::new(exponent.into()))
    }
}

/// Multiplies this expression by -1. No simplification is done, except for the case where the
/// expression is a [`Expr::Constant`], in which case the number is negated.
impl Neg for Expr {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Self::Constant(value) => Self::Constant(-value),
            expr => Self::Product(vec![Self::Constant(-1.0), expr]),
        }
    }
}

impl Neg for &Expr {
    type Output = Expr;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

impl Add for Expr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::Sum(vec![self, rhs])
    }
}

/// `a - b` is built as `a + (-b)`.
impl Sub for Expr {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::Sum(vec![self, -rhs])
    }
}

impl Mul for Expr {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::Product(vec![self, rhs])
    }
}

impl Div for Expr {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Self::Quotient(Box::new(self), Box::new(rhs))
    }
}

/// Forwards the borrowed and `f64` forms of a binary operator to the owned `Expr op Expr`
/// implementation.
macro_rules! forward_binop {
    ($($trait:ident $method:ident),* $(,)?) => {
        $(
            impl $trait<&Expr> for &Expr {
                type Output = Expr;

                fn $method(self, rhs: &Expr) -> Self::Output {
                    $trait::$method(self.clone(), rhs.clone())
                }
            }

            impl $trait<Expr> for &Expr {
                type Output = Expr;

                fn $method(self, rhs: Expr) -> Self::Output {
                    $trait::$method(self.clone(), rhs)
                }
            }

            impl $trait<&Expr> for Expr {
                type Output = Expr;

                fn $method(self, rhs: &Expr) -> Self::Output {
                    $trait::$method(self, rhs.clone())
                }
            }

            impl $trait<f64> for Expr {
                type Output = Expr;

                fn $method(self, rhs: f64) -> Self::Output {
                    $trait::$method(self, Expr::Constant(rhs))
                }
            }

            impl $trait<f64> for &Expr {
                type Output = Expr;

                fn $method(self, rhs: f64) -> Self::Output {
                    $trait::$method(self.clone(), Expr::Constant(rhs))
                }
            }

            impl $trait<Expr> for f64 {
                type Output = Expr;

                fn $method(self, rhs: Expr) -> Self::Output {
                    $trait::$method(Expr::Constant(self), rhs)
                }
            }
        )*
    };
}

forward_binop!(Add add, Sub sub, Mul mul, Div div);
