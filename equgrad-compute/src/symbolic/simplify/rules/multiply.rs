//! Simplification rules for products, including combining like factors and distributing
//! multiplication over addition.

use crate::consts::MAX_EXPANDED_TERMS;
use crate::symbolic::{
    expr::Expr,
    monomial::{Base, Monomial},
    step::Step,
    step_collector::StepCollector,
};
use log::debug;
use super::{add::canonical_sum, power::simplify_power};

/// Finds an opaque base in the monomial that is not in its final form:
///
/// - a product raised to a non-negative power, which must be distributed, or
/// - a power raised to a power other than 1, which must be folded.
fn find_reducible(monomial: &Monomial) -> Option<(Base, i64)> {
    monomial.factors.iter().find_map(|(base, &exp)| match base {
        Base::Opaque(Expr::Product(_)) if exp >= 0 => Some((base.clone(), exp)),
        Base::Opaque(Expr::Power(..)) if exp != 1 => Some((base.clone(), exp)),
        _ => None,
    })
}

/// Rewrites the monomial until every opaque base is in its final form.
///
/// `(a*b)^2 = a^2*b^2`
/// `(a^0.5)^2 = a`
fn reduce_opaque_factors(mut monomial: Monomial, step_collector: &mut dyn StepCollector<Step>) -> Monomial {
    while let Some((base, exp)) = find_reducible(&monomial) {
        monomial.factors.remove(&base);
        match base {
            Base::Opaque(product @ Expr::Product(_)) => {
                step_collector.push(Step::DistributePower);
                monomial.mul(Monomial::of(&product).pow(exp));
            },
            Base::Opaque(Expr::Power(inner_base, inner_exp)) => {
                step_collector.push(Step::PowerPower);
                let exp = canonical_product(vec![*inner_exp, Expr::Constant(exp as f64)], step_collector);
                let power = simplify_power(*inner_base, exp, step_collector);
                monomial.mul(Monomial::of(&power));
            },
            // `find_reducible` only returns the two kinds above
            base => monomial.mul_factor(base, exp),
        }
    }
    monomial
}

/// Returns the number of terms that expanding the given sums would produce, or [`None`] if it
/// overflows.
fn expanded_len(sums: &[(Vec<Expr>, i64)]) -> Option<usize> {
    sums.iter().try_fold(1usize, |acc, (terms, exp)| {
        let exp = u32::try_from(*exp).ok()?;
        terms.len().checked_pow(exp)?.checked_mul(acc)
    })
}

/// Distributes the rest of the product over the given sums, returning the canonical sum of the
/// resulting products.
///
/// `a*(b+c) = a*b + a*c`
/// `(a+b)^2 = a^2 + 2ab + b^2`
fn distribute(rest: Expr, sums: Vec<(Vec<Expr>, i64)>, step_collector: &mut dyn StepCollector<Step>) -> Expr {
    step_collector.push(Step::DistributiveProperty);

    let mut partials = vec![vec![rest]];
    for (terms, exp) in &sums {
        for _ in 0..*exp {
            let mut next = Vec::with_capacity(partials.len() * terms.len());
            for partial in &partials {
                for term in terms {
                    let mut factors = partial.clone();
                    factors.push(term.clone());
                    next.push(factors);
                }
            }
            partials = next;
        }
    }

    let products = partials.into_iter()
        .map(|factors| canonical_product(factors, step_collector))
        .collect();
    canonical_sum(products, step_collector)
}

/// Builds the canonical form of the product of the given factors, which must each be in canonical
/// form already.
///
/// Constants are folded into a single leading coefficient, integer powers of the same base are
/// merged, and the remaining factors are ordered by base. Sums are expanded, unless doing so
/// would produce more than [`MAX_EXPANDED_TERMS`] terms.
pub fn canonical_product(factors: Vec<Expr>, step_collector: &mut dyn StepCollector<Step>) -> Expr {
    if factors.iter().any(|factor| matches!(factor, Expr::Product(_))) {
        step_collector.push(Step::FlattenProduct);
    }

    let monomial = Monomial::of_factors(&factors);
    if monomial.coeff == 0.0 {
        step_collector.push(Step::MultiplyZero);
        return Expr::Constant(0.0);
    }

    let constants = factors.iter().filter(|factor| factor.as_constant().is_some()).count();
    if constants > 1 {
        step_collector.push(Step::FoldConstants);
    }
    if monomial.factors.len() < factors.len() - constants {
        step_collector.push(Step::CombineLikeFactors);
    }

    let mut monomial = reduce_opaque_factors(monomial, step_collector);

    let sums = monomial.factors.iter()
        .filter_map(|(base, &exp)| match base {
            Base::Opaque(Expr::Sum(terms)) if exp >= 1 => Some((terms.clone(), exp)),
            _ => None,
        })
        .collect::<Vec<_>>();
    if !sums.is_empty() {
        match expanded_len(&sums) {
            Some(len) if len <= MAX_EXPANDED_TERMS => {
                monomial.factors.retain(|base, exp| {
                    !(matches!(base, Base::Opaque(Expr::Sum(_))) && *exp >= 1)
                });
                return distribute(monomial.into_expr(), sums, step_collector);
            },
            len => debug!(
                "not expanding product of {} sums: would produce {:?} terms (max {})",
                sums.len(),
                len,
                MAX_EXPANDED_TERMS,
            ),
        }
    }

    monomial.into_expr()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn var(name: &str) -> Expr {
        Expr::variable(name).unwrap()
    }

    fn product(factors: Vec<Expr>) -> Expr {
        canonical_product(factors, &mut ())
    }

    #[test]
    fn multiply_zero() {
        let mut steps = Vec::new();
        let expr = canonical_product(vec![
            Expr::Constant(0.0),
            Expr::Sum(vec![var("x"), var("y")]),
        ], &mut steps);
        assert_eq!(expr, Expr::Constant(0.0));
        assert_eq!(steps, vec![Step::MultiplyZero]);
    }

    #[test]
    fn multiply_one() {
        assert_eq!(product(vec![Expr::Constant(1.0), var("x")]), var("x"));
        assert_eq!(product(vec![]), Expr::Constant(1.0));
    }

    #[test]
    fn combine_like_factors() {
        // b * a^3 * 2 * a * b^-1 = 2a^4
        let expr = product(vec![
            var("b"),
            Expr::power(var("a"), Expr::Constant(3.0)),
            Expr::Constant(2.0),
            var("a"),
            Expr::power(var("b"), Expr::Constant(-1.0)),
        ]);
        assert_eq!(expr, Expr::Product(vec![
            Expr::Constant(2.0),
            Expr::power(var("a"), Expr::Constant(4.0)),
        ]));
    }

    #[test]
    fn factor_order() {
        let expr = product(vec![var("z"), var("a"), var("m")]);
        assert_eq!(expr, Expr::Product(vec![var("a"), var("m"), var("z")]));
    }

    #[test]
    fn distribute_over_sum() {
        // 2 * (x + 1) = 2 + 2x
        let expr = product(vec![
            Expr::Constant(2.0),
            Expr::Sum(vec![Expr::Constant(1.0), var("x")]),
        ]);
        assert_eq!(expr, Expr::Sum(vec![
            Expr::Constant(2.0),
            Expr::Product(vec![Expr::Constant(2.0), var("x")]),
        ]));
    }

    #[test]
    fn expand_binomials() {
        // (1 + x)(1 + x) = 1 + x^2 + 2x
        let binomial = Expr::Sum(vec![Expr::Constant(1.0), var("x")]);
        let expr = product(vec![binomial.clone(), binomial]);
        assert_eq!(expr, Expr::Sum(vec![
            Expr::Constant(1.0),
            Expr::power(var("x"), Expr::Constant(2.0)),
            Expr::Product(vec![Expr::Constant(2.0), var("x")]),
        ]));
    }

    #[test]
    fn too_many_terms() {
        // (a + b)^11 would have 2048 terms before combining
        let binomial = Expr::Sum(vec![var("a"), var("b")]);
        let expr = product(vec![Expr::power(binomial.clone(), Expr::Constant(11.0))]);
        assert_eq!(expr, Expr::power(binomial, Expr::Constant(11.0)));
    }

    #[test]
    fn negative_power_of_sum_is_kept() {
        let sum = Expr::Sum(vec![Expr::Constant(1.0), var("x")]);
        let reciprocal = Expr::power(sum.clone(), Expr::Constant(-1.0));
        let expr = product(vec![Expr::Constant(3.0), reciprocal.clone()]);
        assert_eq!(expr, Expr::Product(vec![Expr::Constant(3.0), reciprocal]));
    }

    #[test]
    fn distribute_power_over_product() {
        // (2x)^2 * y = 4x^2y
        let expr = product(vec![
            Expr::power(
                Expr::Product(vec![Expr::Constant(2.0), var("x")]),
                Expr::Constant(2.0),
            ),
            var("y"),
        ]);
        assert_eq!(expr, Expr::Product(vec![
            Expr::Constant(4.0),
            Expr::power(var("x"), Expr::Constant(2.0)),
            var("y"),
        ]));
    }

    #[test]
    fn merge_fractional_powers() {
        // x^0.5 * x^0.5 = x
        let root = Expr::power(var("x"), Expr::Constant(0.5));
        assert_eq!(product(vec![root.clone(), root]), var("x"));
    }
}
