//! Simplification rules for power expressions.

use crate::primitive::{is_integer, normalize};
use crate::symbolic::{expr::Expr, step::Step, step_collector::StepCollector};
use super::multiply::canonical_product;

/// Attempts to fold `lhs^rhs` into a single number.
///
/// Folding is skipped if the result would not be finite, or if the base is negative and the
/// exponent is not an integer. The symbolic power is kept in those cases, so that evaluation
/// still reports the error.
fn fold(lhs: f64, rhs: f64) -> Option<f64> {
    if lhs < 0.0 && !is_integer(rhs) {
        return None;
    }

    let value = lhs.powf(rhs);
    if value.is_finite() {
        Some(normalize(value))
    } else {
        None
    }
}

/// Builds the canonical form of `base^exp`, where the base and exponent must each be in
/// canonical form already.
///
/// The rules are tried in this order:
///
/// - `a^0 = 1`, including `0^0`
/// - `a^1 = a`
/// - `1^a = 1`
/// - `2^3 = 8`, see [`fold`]
/// - `(a^b)^c = a^(b*c)`
/// - `a^n` for an integer `n` is multiplied out as a product, which merges the exponent into
///   `a` if `a` is a power of a variable, distributes it over `a` if `a` is a product and `n` is
///   non-negative, and expands `a` if it is a sum and `n` is positive
///
/// Anything else is left as a symbolic power.
pub fn simplify_power(base: Expr, exp: Expr, step_collector: &mut dyn StepCollector<Step>) -> Expr {
    if exp.is_constant(0.0) {
        step_collector.push(Step::PowerZero);
        return Expr::Constant(1.0);
    }

    if exp.is_constant(1.0) {
        step_collector.push(Step::PowerOne);
        return base;
    }

    if base.is_constant(1.0) {
        step_collector.push(Step::PowerOneLeft);
        return Expr::Constant(1.0);
    }

    match (base, exp) {
        (Expr::Constant(lhs), Expr::Constant(rhs)) => match fold(lhs, rhs) {
            Some(value) => {
                step_collector.push(Step::FoldPower);
                Expr::Constant(value)
            },
            None => Expr::power(Expr::Constant(lhs), Expr::Constant(rhs)),
        },
        (Expr::Power(inner_base, inner_exp), exp) => {
            step_collector.push(Step::PowerPower);
            let exp = canonical_product(vec![*inner_exp, exp], step_collector);
            simplify_power(*inner_base, exp, step_collector)
        },
        (base, exp) if exp.as_integer().is_some() => {
            canonical_product(vec![Expr::power(base, exp)], step_collector)
        },
        (base, exp) => Expr::power(base, exp),
    }
}
