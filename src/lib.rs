//! # minterm-rs: Boolean function terms for logic minimizers
//!
//! **`minterm-rs`** describes a Boolean function of a fixed width in the forms
//! logic minimizers (Quine–McCluskey and friends) consume: minterm lists,
//! maxterm lists, don't-care lists, and a packed column string.
//! It checks that a given combination of inputs describes exactly one function,
//! converts between the forms bit-exactly, and memoizes the covers a minimizer
//! computes. The minimization itself is left to implementors of [`Minimizer`][crate::reducer::Minimizer].
//!
//! ## Column strings
//!
//! The column string of a function of width `n` holds one symbol per row,
//! row `0` first, `2^n` symbols in total: `1` where the function is true,
//! `0` where it is false, and the don't-care symbol (`-` by default) where it
//! is unconstrained.
//!
//! ## Basic Usage
//!
//! ```rust
//! use minterm_rs::function::BooleanFunction;
//!
//! // f(x2, x1, x0) is true on rows 1, 3, 5
//! let f = BooleanFunction::from_minterms(3, [1, 3, 5]).unwrap();
//! assert_eq!(f.to_column_string(), "01010100");
//!
//! // The same function read back from its column
//! let g = BooleanFunction::from_column_string(3, "01010100").unwrap();
//! assert_eq!(g.break_column_string().minterms, vec![1, 3, 5]);
//!
//! // Maxterms with a don't-care
//! let h = BooleanFunction::builder(2)
//!     .maxterms([0, 2])
//!     .dontcares([3])
//!     .build()
//!     .unwrap();
//! assert_eq!(h.to_column_string(), "010-");
//! ```
//!
//! ## Core Components
//!
//! - **[`function`]**: [`BooleanFunction`][crate::function::BooleanFunction] and its builder.
//! - **[`validate`]**: the input contract, checked in a fixed order.
//! - **[`convert`]**: term lists to column strings and back.
//! - **[`reducer`]**: the [`Minimizer`][crate::reducer::Minimizer] trait and memoized covers.

pub mod algorithm;
pub mod cache;
pub mod convert;
pub mod error;
pub mod function;
pub mod reducer;
pub mod symbol;
pub mod validate;
