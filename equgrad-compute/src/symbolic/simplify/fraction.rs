//! Simplification of rational expressions.
//!
//! The numerator and denominator of a quotient are simplified first, and each is then read as a
//! [`Monomial`], with the greatest common factor pulled out of every sum in it. Any base (a
//! variable, or an opaque sub-expression such as a sum) appearing in both is cancelled, and
//! integer coefficients are reduced by their greatest common divisor.
//!
//! Cancellation only looks at the top level of the already canonical operands. Nested quotients
//! are never simplified twice, so the work done is linear in the depth of the quotient.

use crate::consts::MAX_CANCEL_PASSES;
use crate::error::{kind::DivisionByZero, Error};
use crate::primitive::gcd;
use crate::symbolic::{
    expr::Expr,
    factor::common_factor,
    monomial::{Base, Monomial},
    step::Step,
    step_collector::StepCollector,
};
use log::debug;
use super::{
    inner_simplify,
    rules::{canonical_product, canonical_sum},
};

/// Splits the canonical sum of the given terms into its greatest common factor and the residual
/// sum, or returns [`None`] if the common factor is `1`.
fn split_common_factor(terms: &[Expr]) -> Option<(Monomial, Monomial)> {
    let monomials = terms.iter().map(Monomial::of).collect::<Vec<_>>();
    let common = common_factor(&monomials);
    if common == Monomial::one() {
        return None;
    }

    let residuals = monomials.iter()
        .map(|monomial| monomial.divide(&common).into_expr())
        .collect();
    let residual = Monomial::of(&canonical_sum(residuals, &mut ()));
    Some((common, residual))
}

/// Reads the given canonical expression as a monomial, pulling the greatest common factor out of
/// every sum raised to a positive power.
///
/// `(2x+2)^2 = 4(1+x)^2`
/// `x^2+x = x(1+x)`
fn factored_monomial(expr: &Expr) -> Monomial {
    let monomial = Monomial::of(expr);
    let mut factored = Monomial { coeff: monomial.coeff, ..Monomial::one() };

    for (base, exp) in monomial.factors {
        let split = match &base {
            Base::Opaque(Expr::Sum(terms)) if exp > 0 => split_common_factor(terms),
            _ => None,
        };
        match split {
            Some((common, residual)) => {
                factored.mul(common.pow(exp));
                factored.mul(residual.pow(exp));
            },
            None => factored.mul_factor(base, exp),
        }
    }

    factored
}

/// Renders a monomial built from canonical pieces in canonical form.
fn render(monomial: Monomial, step_collector: &mut dyn StepCollector<Step>) -> Expr {
    let factors = match monomial.into_expr() {
        Expr::Product(factors) => factors,
        other => vec![other],
    };
    canonical_product(factors, step_collector)
}

/// Cancels the factors shared by the given canonical numerator and denominator.
///
/// `(a*b)/(a*c) = b/c`
/// `6a/4 = 3a/2`
/// `a/(-b) = (-a)/b`
///
/// Returns the simplified numerator and denominator if anything was cancelled, or [`None`] if
/// the quotient is already fully reduced.
fn cancel_common_factors(
    num: &Expr,
    den: &Expr,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<(Expr, Expr)> {
    let mut num_monomial = factored_monomial(num);
    let mut den_monomial = factored_monomial(den);
    let mut changed = false;

    let shared = num_monomial.factors.iter()
        .filter_map(|(base, &exp)| {
            let den_exp = den_monomial.exponent_of(base);
            (exp > 0 && den_exp > 0).then(|| (base.clone(), exp.min(den_exp)))
        })
        .collect::<Vec<_>>();
    if !shared.is_empty() {
        step_collector.push(Step::CancelFactor);
        changed = true;
        for (base, exp) in shared {
            num_monomial.mul_factor(base.clone(), -exp);
            den_monomial.mul_factor(base, -exp);
        }
    }

    if let (Some(n), Some(d)) = (num_monomial.integer_coeff(), den_monomial.integer_coeff()) {
        let divisor = gcd(n, d);
        if n != 0 && d != 0 && divisor > 1 {
            step_collector.push(Step::ReduceFraction);
            changed = true;
            num_monomial.coeff /= divisor as f64;
            den_monomial.coeff /= divisor as f64;
        }
    }

    if den_monomial.coeff < 0.0 {
        step_collector.push(Step::ReduceFraction);
        changed = true;
        num_monomial.coeff = -num_monomial.coeff;
        den_monomial.coeff = -den_monomial.coeff;
    }

    changed.then(|| (render(num_monomial, step_collector), render(den_monomial, step_collector)))
}

/// Runs up to `max_passes` cancellation passes over the canonical quotient `num / den`.
///
/// If the quotient is still changing after the last pass, it is returned exactly as given. The
/// outcome depends only on the canonical operands, so simplifying the result again reaches the
/// same outcome.
fn reduce_quotient(
    num: Expr,
    den: Expr,
    max_passes: usize,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Expr, Error> {
    if den.is_constant(0.0) {
        return Err(DivisionByZero.into());
    }

    let (mut reduced_num, mut reduced_den) = (num.clone(), den.clone());
    for pass in 0..max_passes {
        match cancel_common_factors(&reduced_num, &reduced_den, step_collector) {
            Some((new_num, new_den)) => {
                debug!("cancellation pass {}: {:?} / {:?}", pass, new_num, new_den);
                reduced_num = new_num;
                reduced_den = new_den;
            },
            None => {
                return if reduced_den.is_constant(0.0) {
                    Err(DivisionByZero.into())
                } else if reduced_den.is_constant(1.0) {
                    Ok(reduced_num)
                } else {
                    Ok(Expr::quotient(reduced_num, reduced_den))
                };
            },
        }
    }

    debug!("quotient still changing after {} passes, leaving it as is", max_passes);
    if den.is_constant(1.0) {
        Ok(num)
    } else {
        Ok(Expr::quotient(num, den))
    }
}

/// Simplifies the quotient `num / den`.
///
/// Fails with [`DivisionByZero`] if the denominator simplifies to zero. A denominator that
/// simplifies to one is dropped; any other denominator is kept, even if it could be zero for
/// some values of its variables.
pub(crate) fn simplify_quotient(
    num: &Expr,
    den: &Expr,
    depth: usize,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Expr, Error> {
    let num = inner_simplify(num, depth + 1, step_collector)?;
    let den = inner_simplify(den, depth + 1, step_collector)?;
    reduce_quotient(num, den, MAX_CANCEL_PASSES, step_collector)
}

#[cfg(test)]
mod tests {
    use crate::symbolic::simplify::simplify;
    use pretty_assertions::assert_eq;
    use super::*;

    fn var(name: &str) -> Expr {
        Expr::variable(name).unwrap()
    }

    #[test]
    fn cancel_self() {
        assert_eq!(simplify(&(var("x") / var("x"))).unwrap(), Expr::Constant(1.0));
    }

    #[test]
    fn cancel_shared_variable() {
        // x^3 y / (x z) = x^2 y / z
        let expr = (var("x").pow(3.0) * var("y")) / (var("x") * var("z"));
        assert_eq!(simplify(&expr).unwrap(), Expr::quotient(
            Expr::Product(vec![Expr::power(var("x"), Expr::Constant(2.0)), var("y")]),
            var("z"),
        ));
    }

    #[test]
    fn reduce_coefficients() {
        // 6x / 4 = 3x / 2
        let expr = (6.0 * var("x")) / Expr::constant(4.0);
        assert_eq!(simplify(&expr).unwrap(), Expr::quotient(
            Expr::Product(vec![Expr::Constant(3.0), var("x")]),
            Expr::Constant(2.0),
        ));

        // 4x / 2 = 2x
        let expr = (4.0 * var("x")) / Expr::constant(2.0);
        assert_eq!(simplify(&expr).unwrap(), Expr::Product(vec![
            Expr::Constant(2.0),
            var("x"),
        ]));
    }

    #[test]
    fn cancel_common_sum() {
        // (2x + 2) / (x + 1) = 2
        let expr = (2.0 * var("x") + 2.0) / (var("x") + 1.0);
        assert_eq!(simplify(&expr).unwrap(), Expr::Constant(2.0));
    }

    #[test]
    fn cancel_extracted_variable() {
        // (x^2 + x) / x = 1 + x
        let expr = (var("x").pow(2.0) + var("x")) / var("x");
        assert_eq!(simplify(&expr).unwrap(), Expr::Sum(vec![Expr::Constant(1.0), var("x")]));
    }

    #[test]
    fn negative_denominator() {
        // x / -y = -x / y
        let expr = var("x") / -var("y");
        assert_eq!(simplify(&expr).unwrap(), Expr::quotient(
            Expr::Product(vec![Expr::Constant(-1.0), var("x")]),
            var("y"),
        ));
    }

    #[test]
    fn zero_numerator() {
        let expr = Expr::constant(0.0) / var("x");
        assert_eq!(simplify(&expr).unwrap(), Expr::quotient(Expr::Constant(0.0), var("x")));
    }

    #[test]
    fn division_by_zero() {
        let expr = Expr::constant(1.0) / Expr::constant(0.0);
        assert_eq!(simplify(&expr), Err(Error::DivisionByZero(DivisionByZero)));
    }

    #[test]
    fn steps() {
        let mut steps = Vec::new();
        let expr = simplify_quotient(&var("a"), &var("a"), 0, &mut steps).unwrap();
        assert_eq!(expr, Expr::Constant(1.0));
        assert!(steps.contains(&Step::CancelFactor));
    }

    #[test]
    fn cancel_after_extracting_common_factor() {
        // (4x^2 + 2x) / 6x = 2x(1 + 2x) / 6x = (1 + 2x) / 3
        let expr = (4.0 * var("x").pow(2.0) + 2.0 * var("x")) / (6.0 * var("x"));
        assert_eq!(simplify(&expr).unwrap(), Expr::quotient(
            Expr::Sum(vec![
                Expr::Constant(1.0),
                Expr::Product(vec![Expr::Constant(2.0), var("x")]),
            ]),
            Expr::Constant(3.0),
        ));
    }

    #[test]
    fn pass_limit() {
        // x/x needs one pass to cancel and a second to confirm nothing is left
        let reduced = reduce_quotient(var("x"), var("x"), MAX_CANCEL_PASSES, &mut ()).unwrap();
        assert_eq!(reduced, Expr::Constant(1.0));

        // out of passes, the quotient is returned as given
        let given = Expr::quotient(var("x"), var("x"));
        let once = reduce_quotient(var("x"), var("x"), 1, &mut ()).unwrap();
        assert_eq!(once, given);

        // and reducing that result again ends in the same place
        let Expr::Quotient(num, den) = once.clone() else {
            panic!("expected a quotient, got {:?}", once);
        };
        assert_eq!(reduce_quotient(*num, *den, 1, &mut ()).unwrap(), once);
    }
}

