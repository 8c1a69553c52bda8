//! Simplification rules for sums, including combining like terms.

use crate::primitive::normalize;
use crate::symbolic::{
    expr::Expr,
    monomial::{Monomial, Signature},
    step::Step,
    step_collector::StepCollector,
};
use std::{cmp::Reverse, collections::BTreeMap};

/// Flattens nested sums into a single list of terms.
///
/// `a+(b+(c+d)) = a+b+c+d`
///
/// An explicit worklist is used, since flattening one level can expose another nested sum.
pub fn flatten_terms(terms: Vec<Expr>, step_collector: &mut dyn StepCollector<Step>) -> Vec<Expr> {
    let mut flattened = Vec::with_capacity(terms.len());
    let mut stack = terms;
    stack.reverse();

    let mut nested = false;
    while let Some(term) = stack.pop() {
        match term {
            Expr::Sum(inner) => {
                nested = true;
                stack.extend(inner.into_iter().rev());
            },
            term => flattened.push(term),
        }
    }

    if nested {
        step_collector.push(Step::FlattenSum);
    }
    flattened
}

/// Groups terms by their [`Signature`], adding the coefficients of like terms, and dropping
/// groups whose coefficient adds up to zero.
///
/// `a+a = 2a`
/// `2a+3a = 5a`
/// `a-a = 0`
fn combine_like_terms(
    terms: &[Expr],
    step_collector: &mut dyn StepCollector<Step>,
) -> Vec<(Signature, f64)> {
    let mut groups = BTreeMap::<Signature, f64>::new();
    let mut constants = 0usize;
    for term in terms {
        let monomial = Monomial::of(term);
        let signature = monomial.signature();
        if signature.is_constant() {
            constants += 1;
        }
        *groups.entry(signature).or_insert(0.0) += monomial.coeff;
    }

    if constants > 1 {
        step_collector.push(Step::FoldConstants);
    }
    if groups.len() + constants.saturating_sub(1) < terms.len() {
        step_collector.push(Step::CombineLikeTerms);
    }

    let before = groups.len();
    let groups = groups.into_iter()
        .filter(|(_, coeff)| *coeff != 0.0)
        .map(|(signature, coeff)| (signature, normalize(coeff)))
        .collect::<Vec<_>>();
    if groups.len() < before {
        step_collector.push(Step::AddZero);
    }
    groups
}

/// Builds the canonical form of the sum of the given terms, which must each be in canonical
/// form already.
///
/// The constant term (if nonzero) comes first, then the other terms by descending total degree,
/// with ties broken by signature order. An empty sum is `0`, and a sum of one term is that term.
pub fn canonical_sum(terms: Vec<Expr>, step_collector: &mut dyn StepCollector<Step>) -> Expr {
    let terms = flatten_terms(terms, step_collector);
    let mut groups = combine_like_terms(&terms, step_collector);

    groups.sort_by(|(lhs, _), (rhs, _)| {
        let key = |signature: &Signature| (!signature.is_constant(), Reverse(signature.degree()));
        key(lhs).cmp(&key(rhs)).then_with(|| lhs.cmp(rhs))
    });

    let terms = groups.into_iter()
        .map(|(signature, coeff)| Monomial::new(coeff, signature).into_expr())
        .collect::<Vec<_>>();
    Expr::Sum(terms).downgrade()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn var(name: &str) -> Expr {
        Expr::variable(name).unwrap()
    }

    fn sum(terms: Vec<Expr>) -> Expr {
        canonical_sum(terms, &mut ())
    }

    #[test]
    fn fold_constants() {
        assert_eq!(sum(vec![Expr::Constant(1.0), Expr::Constant(2.0)]), Expr::Constant(3.0));
        assert_eq!(sum(vec![]), Expr::Constant(0.0));
    }

    #[test]
    fn combine_like_terms() {
        let expr = sum(vec![
            var("x"),
            Expr::Product(vec![Expr::Constant(2.0), var("x")]),
        ]);
        assert_eq!(expr, Expr::Product(vec![Expr::Constant(3.0), var("x")]));
    }

    #[test]
    fn cancel_to_zero() {
        let expr = sum(vec![
            var("x"),
            Expr::Product(vec![Expr::Constant(-1.0), var("x")]),
        ]);
        assert_eq!(expr, Expr::Constant(0.0));
    }

    #[test]
    fn ordering() {
        // y + 5 + x^2 + x = 5 + x^2 + x + y
        let mut steps = Vec::new();
        let expr = canonical_sum(vec![
            var("y"),
            Expr::Constant(5.0),
            Expr::power(var("x"), Expr::Constant(2.0)),
            var("x"),
        ], &mut steps);
        assert_eq!(expr, Expr::Sum(vec![
            Expr::Constant(5.0),
            Expr::power(var("x"), Expr::Constant(2.0)),
            var("x"),
            var("y"),
        ]));
        assert!(steps.is_empty());
    }

    #[test]
    fn zero_constant_is_dropped() {
        let mut steps = Vec::new();
        let expr = canonical_sum(vec![
            Expr::Constant(0.0),
            var("x"),
        ], &mut steps);
        assert_eq!(expr, var("x"));
        assert_eq!(steps, vec![Step::AddZero]);
    }

    #[test]
    fn flatten() {
        let mut steps = Vec::new();
        let terms = flatten_terms(vec![
            var("a"),
            Expr::Sum(vec![var("b"), Expr::Sum(vec![var("c")])]),
        ], &mut steps);
        assert_eq!(terms, vec![var("a"), var("b"), var("c")]);
        assert_eq!(steps, vec![Step::FlattenSum]);
    }

    #[test]
    fn folding_constants_is_not_combining_terms() {
        let mut steps = Vec::new();
        let expr = canonical_sum(vec![
            Expr::Constant(1.0),
            Expr::Constant(2.0),
            var("x"),
        ], &mut steps);
        assert_eq!(expr, Expr::Sum(vec![Expr::Constant(3.0), var("x")]));
        assert_eq!(steps, vec![Step::FoldConstants]);
    }
}

