//! The canonicalization rules for each kind of node.
//!
//! Each function in this module accepts the **already simplified** children of a node, and
//! returns the canonical form of the node itself. None of them fail: errors can only be raised
//! while simplifying children (see [`super::simplify()`]) or quotients (see [`super::fraction`]).

pub mod add;
pub mod multiply;
pub mod power;

pub use add::canonical_sum;
pub use multiply::canonical_product;
pub use power::simplify_power;
