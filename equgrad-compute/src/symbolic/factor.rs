//! Greatest-common-factor extraction.
//!
//! [`factor`] rewrites every sum in an expression as the product of the greatest common factor
//! of its terms and the residual sum:
//!
//! ```
//! use equgrad_compute::symbolic::{factor, Expr};
//!
//! // 2x + 4y = 2(x + 2y)
//! let x = Expr::variable("x")?;
//! let y = Expr::variable("y")?;
//! let factored = factor(&(2.0 * x.clone() + 4.0 * y.clone()))?;
//! assert_eq!(factored, Expr::Product(vec![
//!     Expr::Constant(2.0),
//!     Expr::Sum(vec![x, Expr::Product(vec![Expr::Constant(2.0), y])]),
//! ]));
//! # Ok::<(), equgrad_compute::error::Error>(())
//! ```
//!
//! Unlike [`simplify`](super::simplify()), factoring never combines like terms, and never
//! expands a product or power into a sum. A sum with no common factor is returned unchanged, and
//! a [`Step::Unsupported`] step is recorded; factoring beyond common-factor extraction is not
//! attempted.

use crate::consts::MAX_DEPTH;
use crate::error::{kind::TooDeep, Error};
use crate::primitive::gcd;
use log::trace;
use std::collections::BTreeMap;
use super::{
    expr::Expr,
    monomial::{Base, Monomial},
    simplify::{flatten_chain, sum_terms},
    step::Step,
    step_collector::StepCollector,
};

/// Returns the greatest common divisor of the coefficients, or 1 if any coefficient is not an
/// integer.
fn coefficient_gcd(monomials: &[Monomial]) -> i64 {
    let divisor = monomials.iter()
        .try_fold(0, |acc, monomial| Some(gcd(acc, monomial.integer_coeff()?)));
    match divisor {
        Some(0) | None => 1,
        Some(divisor) => divisor,
    }
}

/// Returns the bases present with a positive exponent in every monomial, each with the minimum
/// such exponent.
fn common_bases(monomials: &[Monomial]) -> BTreeMap<Base, i64> {
    let Some((first, rest)) = monomials.split_first() else {
        return BTreeMap::new();
    };

    first.factors.iter()
        .filter(|(_, exp)| **exp > 0)
        .filter_map(|(base, &exp)| {
            rest.iter().try_fold(exp, |min, monomial| {
                let exp = monomial.exponent_of(base);
                (exp > 0).then(|| min.min(exp))
            })
            .map(|min| (base.clone(), min))
        })
        .collect()
}

/// Returns the greatest common factor of the given monomials: the gcd of their integer
/// coefficients, times every base they share at its minimum positive exponent.
pub(crate) fn common_factor(monomials: &[Monomial]) -> Monomial {
    Monomial {
        coeff: coefficient_gcd(monomials) as f64,
        factors: common_bases(monomials),
    }
}

/// Extracts the greatest common factor from the given (already factored) terms of a sum.
///
/// `2a+4b = 2(a+2b)`
/// `x^2y+xy^3 = xy(x+y^2)`
fn extract_common_factor(terms: Vec<Expr>, step_collector: &mut dyn StepCollector<Step>) -> Expr {
    if terms.len() < 2 {
        return Expr::Sum(terms);
    }

    let monomials = terms.iter().map(Monomial::of).collect::<Vec<_>>();
    let common = common_factor(&monomials);

    if common == Monomial::one() {
        step_collector.push(Step::Unsupported);
        return Expr::Sum(terms);
    }

    step_collector.push(Step::ExtractCommonFactor);
    let residuals = monomials.iter()
        .map(|monomial| monomial.divide(&common).into_expr())
        .collect();
    Expr::Product(vec![common.into_expr(), Expr::Sum(residuals)])
}

/// Factors every operand of a chain of nested products, keeping the nesting as written.
///
/// The chain is walked with an explicit stack, so only the operands count toward the depth.
fn factor_product_chain(
    factors: &[Expr],
    depth: usize,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Expr, Error> {
    let mut frames = vec![(factors.iter(), Vec::with_capacity(factors.len()))];
    let mut product = None;

    while let Some(frame) = frames.last_mut() {
        match frame.0.next() {
            Some(Expr::Product(inner)) => {
                frames.push((inner.iter(), Vec::with_capacity(inner.len())));
            },
            Some(child) => {
                let factored = inner_factor(child, depth, step_collector)?;
                frame.1.push(factored);
            },
            None => {
                let done = Expr::Product(std::mem::take(&mut frame.1));
                frames.pop();
                match frames.last_mut() {
                    Some((_, parent)) => parent.push(done),
                    None => product = Some(done),
                }
            },
        }
    }

    Ok(product.unwrap_or_else(|| Expr::Product(Vec::new())))
}

/// Factors each of the given expressions.
fn factor_all(
    exprs: &[&Expr],
    depth: usize,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Vec<Expr>, Error> {
    exprs.iter()
        .map(|expr| inner_factor(expr, depth, step_collector))
        .collect()
}

/// Base implementation of the factoring algorithm.
fn inner_factor(
    expr: &Expr,
    depth: usize,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Expr, Error> {
    if depth > MAX_DEPTH {
        return Err(TooDeep.into());
    }

    match expr {
        Expr::Constant(_) | Expr::Variable(_) => Ok(expr.clone()),
        Expr::Sum(terms) => {
            let (terms, _) = flatten_chain(terms, sum_terms);
            let terms = factor_all(&terms, depth + 1, step_collector)?;
            Ok(extract_common_factor(terms, step_collector))
        },
        Expr::Product(factors) => factor_product_chain(factors, depth + 1, step_collector),
        Expr::Quotient(num, den) => Ok(Expr::quotient(
            inner_factor(num, depth + 1, step_collector)?,
            inner_factor(den, depth + 1, step_collector)?,
        )),
        Expr::Power(base, exp) => Ok(Expr::power(
            inner_factor(base, depth + 1, step_collector)?,
            inner_factor(exp, depth + 1, step_collector)?,
        )),
    }
}

/// Factors the greatest common factor out of every sum in the given expression.
///
/// The result always has the same value as the input. Fails with [`TooDeep`] if the expression
/// is nested too deeply.
pub fn factor(expr: &Expr) -> Result<Expr, Error> {
    trace!("factor: {:?}", expr);
    inner_factor(expr, 0, &mut ())
}

/// Factors the greatest common factor out of every sum in the given expression, also returning
/// the steps taken. A sum with no common factor produces a [`Step::Unsupported`] step.
pub fn factor_with_steps(expr: &Expr) -> Result<(Expr, Vec<Step>), Error> {
    trace!("factor_with_steps: {:?}", expr);
    let mut steps = Vec::new();
    let expr = inner_factor(expr, 0, &mut steps)?;
    Ok((expr, steps))
}
