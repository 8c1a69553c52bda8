use crate::consts::MAX_DEPTH;
use crate::error::{
    kind::{DivisionByZero, DomainError, TooDeep, UndefinedSymbol},
    Error,
};
use crate::primitive::is_integer;
use crate::symbolic::{
    expr::Expr,
    simplify::{flatten_chain, product_factors, sum_terms},
};
use log::trace;
use super::ctxt::Ctxt;

/// Any type that can be evaluated to produce a number.
pub trait Eval {
    /// Evaluate the expression to produce a number, using the given context.
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error>;

    /// Evaluate the expression to produce a number, using an empty context.
    fn eval_default(&self) -> Result<f64, Error> {
        self.eval(&Ctxt::default())
    }
}

/// Evaluates each of the given expressions in order, folding the results with `op`.
fn eval_chain(
    exprs: &[&Expr],
    init: f64,
    op: fn(f64, f64) -> f64,
    ctxt: &Ctxt,
    depth: usize,
) -> Result<f64, Error> {
    exprs.iter().try_fold(init, |acc, expr| Ok(op(acc, eval_expr(expr, ctxt, depth)?)))
}

/// Computes `lhs^rhs`, failing if the base is negative and the exponent is not an integer.
fn pow(lhs: f64, rhs: f64) -> Result<f64, Error> {
    if lhs < 0.0 && !is_integer(rhs) {
        Err(DomainError { base: lhs, exponent: rhs }.into())
    } else {
        Ok(lhs.powf(rhs))
    }
}

/// Base implementation of the evaluator.
fn eval_expr(expr: &Expr, ctxt: &Ctxt, depth: usize) -> Result<f64, Error> {
    if depth > MAX_DEPTH {
        return Err(TooDeep.into());
    }

    match expr {
        Expr::Constant(value) => Ok(*value),
        Expr::Variable(symbol) => ctxt.get_var(*symbol)
            .ok_or_else(|| UndefinedSymbol { symbol: *symbol }.into()),
        Expr::Sum(terms) => {
            let (terms, _) = flatten_chain(terms, sum_terms);
            eval_chain(&terms, 0.0, |acc, n| acc + n, ctxt, depth + 1)
        },
        Expr::Product(factors) => {
            let (factors, _) = flatten_chain(factors, product_factors);
            eval_chain(&factors, 1.0, |acc, n| acc * n, ctxt, depth + 1)
        },
        Expr::Quotient(num, den) => {
            let num = eval_expr(num, ctxt, depth + 1)?;
            let den = eval_expr(den, ctxt, depth + 1)?;
            if den == 0.0 {
                Err(DivisionByZero.into())
            } else {
                Ok(num / den)
            }
        },
        Expr::Power(base, exp) => {
            let base = eval_expr(base, ctxt, depth + 1)?;
            let exp = eval_expr(exp, ctxt, depth + 1)?;
            pow(base, exp)
        },
    }
}

impl Eval for Expr {
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error> {
        eval_expr(self, ctxt, 0)
    }
}

/// Evaluates the expression, substituting the values bound in the context for its variables.
///
/// Fails with:
///
/// - [`UndefinedSymbol`] if a variable has no value in the context,
/// - [`DivisionByZero`] if a denominator evaluates to exactly zero,
/// - [`DomainError`] if a negative number is raised to a non-integer power,
/// - [`TooDeep`] if the expression is nested too deeply.
pub fn evaluate(expr: &Expr, ctxt: &Ctxt) -> Result<f64, Error> {
    trace!("evaluate: {:?}", expr);
    expr.eval(ctxt)
}
