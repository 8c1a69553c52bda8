/// Possible rewrite steps taken by [`simplify`](super::simplify()) and [`factor`](super::factor()).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// `0+a = a`
    /// `a+0 = a`
    AddZero,

    /// `a+(b+c) = a+b+c`
    FlattenSum,

    /// `a+a = 2a`
    /// `2a+3a = 5a`
    /// etc.
    CombineLikeTerms,

    /// `a*(b*c) = a*b*c`
    FlattenProduct,

    /// `0*a = 0`
    /// `a*0 = 0`
    MultiplyZero,

    /// `2*3*a = 6a`
    /// `1+2 = 3`
    FoldConstants,

    /// `a*a = a^2`
    /// `a^2*a^3 = a^5`
    /// etc.
    CombineLikeFactors,

    /// `a*(b+c) = a*b + a*c`
    /// `(a+b)^2 = a^2 + 2ab + b^2`
    DistributiveProperty,

    /// `a^0 = 1`
    PowerZero,

    /// `a^1 = a`
    PowerOne,

    /// `1^a = 1`
    PowerOneLeft,

    /// `(a^b)^c = a^(b*c)`
    PowerPower,

    /// `(a*b)^c = a^c*b^c`
    DistributePower,

    /// `2^3 = 8`
    FoldPower,

    /// `(a*b)/(a*c) = b/c`
    CancelFactor,

    /// `6a/4 = 3a/2`
    ReduceFraction,

    /// `2a+4b = 2(a+2b)`
    ExtractCommonFactor,

    /// A sum had no common factor to extract and was left unchanged.
    Unsupported,
}
