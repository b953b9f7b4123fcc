//! Binding of a validated function to a minimization algorithm.
//!
//! A concrete algorithm implements [`Minimizer`]. A [`Reducer`] pairs it with a
//! [`BooleanFunction`] and memoizes the covers it generates:
//!
//! ```
//! use minterm_rs::cache::Covers;
//! use minterm_rs::function::BooleanFunction;
//! use minterm_rs::reducer::{Minimizer, Reducer};
//!
//! struct SumOfMinterms {
//!     vars: Vec<String>,
//! }
//!
//! impl Minimizer for SumOfMinterms {
//!     fn generate_covers(&self, function: &BooleanFunction) -> Covers {
//!         vec![function.minmax_bit_terms().terms]
//!     }
//!
//!     fn vars(&self) -> &[String] {
//!         &self.vars
//!     }
//! }
//!
//! let f = BooleanFunction::from_minterms(2, [1, 2]).unwrap();
//! let vars = vec!["a".to_string(), "b".to_string()];
//! let reducer = Reducer::new(f, SumOfMinterms { vars }).unwrap();
//! assert_eq!(reducer.covers(), &vec![vec!["01".to_string(), "10".to_string()]]);
//! ```

use log::debug;

use crate::algorithm::algorithm_name;
use crate::cache::{Covers, CoversCache};
use crate::error::Result;
use crate::function::BooleanFunction;
use crate::validate::check_vars;

/// A minimization algorithm.
pub trait Minimizer {
    /// Computes the covers of `function`.
    fn generate_covers(&self, function: &BooleanFunction) -> Covers;

    /// Variable names, one per input at least.
    fn vars(&self) -> &[String];

    /// Display name of the algorithm.
    fn algorithm(&self) -> String {
        algorithm_name::<Self>()
    }
}

/// A function bound to a minimizer, with memoized covers.
///
/// Covers are generated on the first [`covers`][Reducer::covers] call and kept
/// until [`clear_covers`][Reducer::clear_covers].
#[derive(Debug)]
pub struct Reducer<M> {
    function: BooleanFunction,
    minimizer: M,
    algorithm: Option<String>,
    covers: CoversCache,
}

impl<M: Minimizer> Reducer<M> {
    /// Binds `function` to `minimizer`, checking that every input has a variable name.
    pub fn new(function: BooleanFunction, minimizer: M) -> Result<Self> {
        check_vars(function.width(), minimizer.vars())?;
        Ok(Self {
            function,
            minimizer,
            algorithm: None,
            covers: CoversCache::new(),
        })
    }

    /// Overrides the display name of the algorithm.
    pub fn with_algorithm(mut self, name: impl Into<String>) -> Self {
        self.algorithm = Some(name.into());
        self
    }

    pub fn algorithm(&self) -> String {
        match &self.algorithm {
            Some(name) => name.clone(),
            None => self.minimizer.algorithm(),
        }
    }

    pub fn function(&self) -> &BooleanFunction {
        &self.function
    }

    pub fn minimizer(&self) -> &M {
        &self.minimizer
    }

    pub fn vars(&self) -> &[String] {
        self.minimizer.vars()
    }

    /// Covers of the function, generated on first access.
    pub fn covers(&self) -> &Covers {
        self.covers.get_or_compute(|| {
            debug!("generate_covers({}) with {}", self.function, self.algorithm());
            self.minimizer.generate_covers(&self.function)
        })
    }

    /// Check if covers are currently memoized.
    pub fn covers_computed(&self) -> bool {
        self.covers.is_computed()
    }

    /// Drops memoized covers; the next [`covers`][Reducer::covers] call regenerates them.
    pub fn clear_covers(&mut self) {
        if self.covers.clear().is_some() {
            debug!("clear_covers({})", self.function);
        }
    }

    pub fn into_parts(self) -> (BooleanFunction, M) {
        (self.function, self.minimizer)
    }
}
