//! Limits used by the symbolic and numerical passes.

/// The maximum nesting depth of an expression. Nested sums inside sums (and products inside
/// products) are flattened iteratively and do not count toward this limit.
///
/// Every level costs up to two stack frames of the recursive passes, so this must stay small
/// enough for the whole recursion to fit in the 2 MiB stack of a spawned thread.
pub const MAX_DEPTH: usize = 1 << 8;

/// The maximum number of terms a product or power is allowed to expand into. Products that would
/// expand into more terms are left factored.
pub const MAX_EXPANDED_TERMS: usize = 1 << 10;

/// The maximum number of cancellation passes run over a single quotient.
pub const MAX_CANCEL_PASSES: usize = 16;
