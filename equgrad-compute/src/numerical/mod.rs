//! Numerical evaluation of expressions.
//!
//! Evaluation substitutes a value for every variable, taken from a [`Ctxt`](ctxt::Ctxt), and
//! computes the resulting `f64`. Any tree can be evaluated, whether it is raw or simplified.

pub mod ctxt;
pub mod eval;
