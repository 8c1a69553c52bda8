//! Algebraic manipulation of expressions.
//!
//! # Expression representation
//!
//! Algebraic expressions in this module are represented as a tree of [`Expr`] nodes. Trees are
//! usually assembled with the arithmetic operators (see [`builder`]), which produce **raw** trees
//! that mirror how the expression was written:
//!
//! ```
//! use equgrad_compute::symbolic::Expr;
//!
//! let x = Expr::variable("x")?;
//! let y = Expr::variable("y")?;
//! let z = Expr::variable("z")?;
//!
//! // `x + (y + z)` is a sum nested in a sum
//! let expr = x.clone() + (y.clone() + z.clone());
//! assert_eq!(expr, Expr::Sum(vec![x, Expr::Sum(vec![y, z])]));
//! # Ok::<(), equgrad_compute::error::Error>(())
//! ```
//!
//! # Simplification
//!
//! A primary use case for algebraic manipulation is to reduce expressions to some canonical form.
//! This is done with the [`simplify()`] function, which flattens nested sums and products,
//! combines like terms and like factors, expands products of sums, and orders what is left.
//!
//! ```
//! use equgrad_compute::symbolic::{simplify, Expr};
//!
//! let x = Expr::variable("x")?;
//! let simplified = simplify(&(x.clone() + x.clone() + x.clone()))?;
//!
//! // `x + x + x = 3x`
//! assert_eq!(simplified, Expr::Product(vec![
//!     Expr::Constant(3.0),
//!     Expr::variable("x")?,
//! ]));
//! # Ok::<(), equgrad_compute::error::Error>(())
//! ```
//!
//! Like terms are found by reading each term as a [`Monomial`](monomial::Monomial): a numeric
//! coefficient times integer powers of bases. Terms whose [`Signature`](monomial::Signature)s
//! match are combined by adding their coefficients.
//!
//! # Factoring
//!
//! [`factor()`] goes the other way, pulling the greatest common factor out of every sum. See the
//! [`mod@factor`] module for details.

pub mod builder;
pub mod expr;
pub mod factor;
pub mod monomial;
pub mod simplify;
pub mod step;
pub mod step_collector;

pub use expr::{Expr, Symbol};
pub use factor::{factor, factor_with_steps};
pub use simplify::{simplify, simplify_with_steps};
pub use step::Step;
pub use step_collector::StepCollector;
