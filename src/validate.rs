//! Cross-field validation of raw function inputs.
//!
//! Rules are checked in a fixed order and the first violation is returned:
//!
//! | # | Rule | Error |
//! |---|------|-------|
//! | 1 | not both minterms and maxterms | [`ConflictingTermFamilies`][TermError::ConflictingTermFamilies] |
//! | 2 | column string alone | [`RedundantColumnStringInputs`][TermError::RedundantColumnStringInputs] |
//! | 2b | `width <= MAX_WIDTH` | [`WidthTooLarge`][TermError::WidthTooLarge] |
//! | 3 | column string of length `2^width` | [`ColumnStringTooShort`][TermError::ColumnStringTooShort], [`ColumnStringTooLong`][TermError::ColumnStringTooLong] |
//! | 4 | one term family present | [`MissingTermFamily`][TermError::MissingTermFamily] |
//! | 5 | don't-cares disjoint from terms | [`DontCareTermOverlap`][TermError::DontCareTermOverlap] |
//! | 6 | indices in `0..2^width` | [`TermOutOfRange`][TermError::TermOutOfRange] |
//! | 7 | valid don't-care symbol | [`InvalidDontCareSymbol`][TermError::InvalidDontCareSymbol] |
//! | 7b | column alphabet `{0, 1, dc}` | [`UnexpectedColumnSymbol`][TermError::UnexpectedColumnSymbol] |
//! | 8 | enough variable names | [`InsufficientVariableNames`][TermError::InsufficientVariableNames] |
//!
//! Rule 8 depends on the minimizer and is checked by [`check_vars`] when a
//! function is bound to one.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use log::debug;

use crate::error::{Result, TermError};
use crate::function::{FunctionBuilder, MAX_WIDTH};
use crate::symbol::DontCare;

/// Checks rules 1 to 7b and returns the validated don't-care symbol.
pub fn validate(inputs: &FunctionBuilder) -> Result<DontCare> {
    let res = check_all(inputs);
    if let Err(err) = &res {
        debug!("validate(width = {}) failed: {}", inputs.width, err);
    }
    res
}

fn check_all(inputs: &FunctionBuilder) -> Result<DontCare> {
    let width = inputs.width;

    // 1
    if inputs.minterms.is_some() && inputs.maxterms.is_some() {
        return Err(TermError::ConflictingTermFamilies);
    }

    // 2
    if inputs.column_string.is_some()
        && (inputs.minterms.is_some() || inputs.maxterms.is_some() || inputs.dontcares.is_some())
    {
        return Err(TermError::RedundantColumnStringInputs);
    }

    // 2b
    let size = domain_size(width)?;

    // 3
    if let Some(column) = &inputs.column_string {
        check_column_length(column, width)?;
    }

    let active = match (&inputs.column_string, &inputs.minterms, &inputs.maxterms) {
        (Some(_), _, _) => None,
        (None, Some(terms), None) | (None, None, Some(terms)) => Some(terms),
        // 4
        _ => return Err(TermError::MissingTermFamily),
    };

    if let Some(terms) = active {
        let terms: BTreeSet<i64> = terms.iter().copied().collect();
        let dontcares: BTreeSet<i64> = inputs.dontcares.iter().flatten().copied().collect();

        // 5
        let overlap: Vec<i64> = terms.intersection(&dontcares).copied().collect();
        if !overlap.is_empty() {
            return Err(TermError::DontCareTermOverlap { indices: overlap });
        }

        // 6
        let out_of_range: Vec<i64> = terms
            .union(&dontcares)
            .copied()
            .filter(|&i| !in_range(i, size))
            .collect();
        if !out_of_range.is_empty() {
            return Err(TermError::TermOutOfRange {
                indices: out_of_range,
                width,
            });
        }
    }

    // 7
    let dc = match &inputs.dc {
        Some(symbol) => DontCare::try_from(symbol.as_str())?,
        None => DontCare::default(),
    };

    // 7b
    if let Some(column) = &inputs.column_string {
        check_column_alphabet(column, dc)?;
    }

    Ok(dc)
}

fn in_range(index: i64, size: usize) -> bool {
    index >= 0 && (index as u64) < size as u64
}

/// Number of rows of a `width`-input function, if addressable.
fn domain_size(width: u32) -> Result<usize> {
    if width > MAX_WIDTH {
        return Err(TermError::WidthTooLarge { width, max: MAX_WIDTH });
    }
    Ok(1 << width)
}

/// Checks that `column` holds exactly one symbol per row of a `width`-input function.
pub fn check_column_length(column: &str, width: u32) -> Result<()> {
    let expected = domain_size(width)?;
    let actual = column.chars().count();
    match actual.cmp(&expected) {
        Ordering::Less => Err(TermError::ColumnStringTooShort {
            by: expected - actual,
            width,
        }),
        Ordering::Greater => Err(TermError::ColumnStringTooLong {
            by: actual - expected,
            width,
        }),
        Ordering::Equal => Ok(()),
    }
}

/// Checks that every symbol of `column` is `0`, `1` or `dc`.
pub fn check_column_alphabet(column: &str, dc: DontCare) -> Result<()> {
    match column
        .chars()
        .enumerate()
        .find(|&(_, c)| c != '0' && c != '1' && !dc.matches(c))
    {
        Some((position, symbol)) => Err(TermError::UnexpectedColumnSymbol { position, symbol }),
        None => Ok(()),
    }
}

/// Checks that there is a variable name for every input.
pub fn check_vars<S: AsRef<str>>(width: u32, vars: &[S]) -> Result<()> {
    if vars.len() < width as usize {
        debug!("check_vars(width = {}) failed: only {} names", width, vars.len());
        return Err(TermError::InsufficientVariableNames {
            required: width,
            available: vars.len(),
        });
    }
    Ok(())
}
