//! Module to simplify expressions.
//!
//! This module provides the [`simplify`] function, which rewrites an expression into its
//! **canonical form**. Two expressions with the same canonical form are guaranteed to be equal;
//! in particular, any polynomial (after expansion) has exactly one canonical form.
//!
//! Simplification works bottom-up: the children of a node are simplified first, then the node
//! itself is rebuilt by the rule for its kind (see [`rules`] and [`fraction`]). Chains of nested
//! sums or products are flattened with an explicit worklist before recursing, so long chains
//! built with the arithmetic operators do not count toward [`MAX_DEPTH`].
//!
//! The result satisfies `simplify(simplify(e)) == simplify(e)`.

pub mod fraction;
pub mod rules;

use crate::consts::MAX_DEPTH;
use crate::error::{kind::TooDeep, Error};
use crate::primitive::normalize;
use log::trace;
use super::{expr::Expr, step::Step, step_collector::StepCollector};

/// Collects the operands of a chain of nested nodes of the same kind, in left-to-right order.
///
/// `select` returns the children of a node if it is of the kind being flattened.
pub(crate) fn flatten_chain<'a>(
    children: &'a [Expr],
    select: impl Fn(&'a Expr) -> Option<&'a [Expr]>,
) -> (Vec<&'a Expr>, bool) {
    let mut flattened = Vec::with_capacity(children.len());
    let mut stack = children.iter().rev().collect::<Vec<_>>();
    let mut nested = false;

    while let Some(expr) = stack.pop() {
        match select(expr) {
            Some(inner) => {
                nested = true;
                stack.extend(inner.iter().rev());
            },
            None => flattened.push(expr),
        }
    }

    (flattened, nested)
}

/// Returns the terms of the expression if it is a [`Expr::Sum`].
pub(crate) fn sum_terms(expr: &Expr) -> Option<&[Expr]> {
    match expr {
        Expr::Sum(terms) => Some(terms),
        _ => None,
    }
}

/// Returns the factors of the expression if it is a [`Expr::Product`].
pub(crate) fn product_factors(expr: &Expr) -> Option<&[Expr]> {
    match expr {
        Expr::Product(factors) => Some(factors),
        _ => None,
    }
}

/// Simplifies each of the given expressions.
fn simplify_all(
    exprs: &[&Expr],
    depth: usize,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Vec<Expr>, Error> {
    exprs.iter()
        .map(|expr| inner_simplify(expr, depth, step_collector))
        .collect()
}

/// Base implementation of the simplification algorithm.
pub(crate) fn inner_simplify(
    expr: &Expr,
    depth: usize,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Expr, Error> {
    if depth > MAX_DEPTH {
        return Err(TooDeep.into());
    }

    match expr {
        Expr::Constant(value) => Ok(Expr::Constant(normalize(*value))),
        Expr::Variable(_) => Ok(expr.clone()),
        Expr::Sum(terms) => {
            let (terms, nested) = flatten_chain(terms, sum_terms);
            if nested {
                step_collector.push(Step::FlattenSum);
            }
            let terms = simplify_all(&terms, depth + 1, step_collector)?;
            Ok(rules::canonical_sum(terms, step_collector))
        },
        Expr::Product(factors) => {
            let (factors, nested) = flatten_chain(factors, product_factors);
            if nested {
                step_collector.push(Step::FlattenProduct);
            }
            let factors = simplify_all(&factors, depth + 1, step_collector)?;
            Ok(rules::canonical_product(factors, step_collector))
        },
        Expr::Quotient(num, den) => fraction::simplify_quotient(num, den, depth, step_collector),
        Expr::Power(base, exp) => {
            let base = inner_simplify(base, depth + 1, step_collector)?;
            let exp = inner_simplify(exp, depth + 1, step_collector)?;
            Ok(rules::simplify_power(base, exp, step_collector))
        },
    }
}

/// Simplifies the given expression into its canonical form.
///
/// Fails with [`DivisionByZero`](crate::error::kind::DivisionByZero) if a denominator
/// simplifies to zero, or with [`TooDeep`] if the expression is nested too deeply.
pub fn simplify(expr: &Expr) -> Result<Expr, Error> {
    trace!("simplify: {:?}", expr);
    inner_simplify(expr, 0, &mut ())
}

/// Simplifies the given expression into its canonical form. The steps taken by the simplifier
/// will also be collected and returned. This is useful for debugging, and also for displaying the
/// steps taken to the user.
pub fn simplify_with_steps(expr: &Expr) -> Result<(Expr, Vec<Step>), Error> {
    trace!("simplify_with_steps: {:?}", expr);
    let mut steps = Vec::new();
    let expr = inner_simplify(expr, 0, &mut steps)?;
    Ok((expr, steps))
}
