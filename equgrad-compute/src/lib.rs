//! A symbolic algebra engine over real constants and single-letter variables.
//!
//! Expressions are built as raw trees with the arithmetic operators (see
//! [`symbolic::builder`]), then transformed on demand:
//!
//! - [`simplify`] rewrites a tree into its canonical form,
//! - [`factor`] pulls the greatest common factor out of sums,
//! - [`evaluate`] substitutes values for the variables and computes a number.
//!
//! ```
//! use equgrad_compute::{evaluate, simplify, numerical::ctxt::Ctxt, symbolic::Expr};
//!
//! let x = Expr::variable("x")?;
//! let expr = x.clone() + x;
//! let simplified = simplify(&expr)?;
//! assert_eq!(simplified, Expr::Product(vec![
//!     Expr::Constant(2.0),
//!     Expr::variable("x")?,
//! ]));
//!
//! let mut ctxt = Ctxt::new();
//! ctxt.add_var("x", 3.0)?;
//! assert_eq!(evaluate(&simplified, &ctxt)?, 6.0);
//! # Ok::<(), equgrad_compute::error::Error>(())
//! ```

pub mod consts;
pub mod error;
pub mod numerical;
pub mod primitive;
pub mod symbolic;

pub use error::Error;
pub use numerical::eval::{evaluate, Eval};
pub use symbolic::{factor, simplify, Expr, Symbol};
