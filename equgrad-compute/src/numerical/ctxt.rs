use crate::error::Error;
use crate::symbolic::expr::Symbol;
use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A context to use when evaluating an expression, binding a value to each variable that can be
/// used within the expression.
///
/// The context is only read during evaluation, so a single context can be shared between any
/// number of concurrent evaluations.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ctxt {
    /// The variables in the context.
    vars: HashMap<Symbol, f64>,
}

impl Ctxt {
    /// Creates a new empty context.
    pub fn new() -> Ctxt {
        Ctxt::default()
    }

    /// Creates a context from `(name, value)` pairs, failing if any name is not a valid symbol
    /// name.
    pub fn from_names<'a>(vars: impl IntoIterator<Item = (&'a str, f64)>) -> Result<Ctxt, Error> {
        let mut ctxt = Ctxt::new();
        for (name, value) in vars {
            ctxt.add_var(name, value)?;
        }
        Ok(ctxt)
    }

    /// Add a variable to the context, replacing any previous value. Fails if the name is not a
    /// valid symbol name.
    pub fn add_var(&mut self, name: &str, value: f64) -> Result<(), Error> {
        self.add_symbol(Symbol::new(name)?, value);
        Ok(())
    }

    /// Add a variable to the context, replacing any previous value.
    pub fn add_symbol(&mut self, symbol: Symbol, value: f64) {
        self.vars.insert(symbol, value);
    }

    /// Get the value of a variable in the context.
    pub fn get_var(&self, symbol: Symbol) -> Option<f64> {
        self.vars.get(&symbol).copied()
    }

    /// Returns the variables in the context.
    pub fn get_vars(&self) -> &HashMap<Symbol, f64> {
        &self.vars
    }
}

impl FromIterator<(Symbol, f64)> for Ctxt {
    fn from_iter<T: IntoIterator<Item = (Symbol, f64)>>(iter: T) -> Self {
        Ctxt { vars: iter.into_iter().collect() }
    }
}
