//! Boolean function of a fixed width, described by term lists or a column string.
//!
//! A [`BooleanFunction`] is created through a [`FunctionBuilder`], which accepts the
//! raw inputs a caller may supply (minterms, maxterms, don't-cares, a column string,
//! a don't-care symbol) and runs the [validator][crate::validate] over them.
//! Once built, the function holds exactly one [`Representation`].

use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

use log::debug;

use crate::convert::break_column;
use crate::error::{Result, TermError};
use crate::symbol::DontCare;
use crate::validate;

/// Largest supported width: `2^width` rows must be addressable.
pub const MAX_WIDTH: u32 = usize::BITS - 1;

/// Which rows a term list enumerates.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum TermKind {
    /// Rows where the function is true.
    Minterms,
    /// Rows where the function is false.
    Maxterms,
}

impl TermKind {
    /// Symbol of the rows *not* listed by this family.
    pub const fn default_symbol(self) -> char {
        match self {
            TermKind::Minterms => '0',
            TermKind::Maxterms => '1',
        }
    }

    /// Symbol of the rows listed by this family.
    pub const fn set_symbol(self) -> char {
        match self {
            TermKind::Minterms => '1',
            TermKind::Maxterms => '0',
        }
    }
}

impl Display for TermKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TermKind::Minterms => write!(f, "minterms"),
            TermKind::Maxterms => write!(f, "maxterms"),
        }
    }
}

/// A term family with optional don't-cares.
///
/// # Invariants
///
/// - `indices` and `dontcares` are sorted, free of duplicates and disjoint
/// - every index lies in `0..2^width` of the owning function
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct TermList {
    kind: TermKind,
    indices: Vec<usize>,
    dontcares: Option<Vec<usize>>,
}

impl TermList {
    pub(crate) fn new(kind: TermKind, indices: Vec<usize>, dontcares: Option<Vec<usize>>) -> Self {
        Self {
            kind,
            indices,
            dontcares,
        }
    }

    pub fn kind(&self) -> TermKind {
        self.kind
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Don't-care rows, if any were supplied.
    pub fn dontcares(&self) -> Option<&[usize]> {
        self.dontcares.as_deref()
    }
}

/// The single caller-supplied description of a function.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Representation {
    Terms(TermList),
    ColumnString(String),
}

/// A Boolean function of `width` inputs over `2^width` rows.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct BooleanFunction {
    width: u32,
    representation: Representation,
    dc: DontCare,
}

impl BooleanFunction {
    /// Starts describing a function of the given width.
    pub fn builder(width: u32) -> FunctionBuilder {
        FunctionBuilder::new(width)
    }

    /// Function that is true exactly on `minterms`.
    pub fn from_minterms(width: u32, minterms: impl IntoIterator<Item = i64>) -> Result<Self> {
        Self::builder(width).minterms(minterms).build()
    }

    /// Function that is false exactly on `maxterms`.
    pub fn from_maxterms(width: u32, maxterms: impl IntoIterator<Item = i64>) -> Result<Self> {
        Self::builder(width).maxterms(maxterms).build()
    }

    /// Function described by its output column, using the default don't-care symbol.
    pub fn from_column_string(width: u32, column: impl Into<String>) -> Result<Self> {
        Self::builder(width).column_string(column).build()
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows, `2^width`.
    pub fn domain_size(&self) -> usize {
        1 << self.width
    }

    pub fn representation(&self) -> &Representation {
        &self.representation
    }

    pub fn dc(&self) -> DontCare {
        self.dc
    }

    fn terms(&self) -> Option<&TermList> {
        match &self.representation {
            Representation::Terms(terms) => Some(terms),
            Representation::ColumnString(_) => None,
        }
    }

    /// Supplied minterms, if the function was described by minterms.
    pub fn minterms(&self) -> Option<&[usize]> {
        self.terms()
            .filter(|t| t.kind == TermKind::Minterms)
            .map(|t| t.indices())
    }

    /// Supplied maxterms, if the function was described by maxterms.
    pub fn maxterms(&self) -> Option<&[usize]> {
        self.terms()
            .filter(|t| t.kind == TermKind::Maxterms)
            .map(|t| t.indices())
    }

    /// Supplied don't-cares, if any.
    pub fn dontcares(&self) -> Option<&[usize]> {
        self.terms().and_then(|t| t.dontcares())
    }

    /// Supplied column string, if the function was described by one.
    pub fn column_string(&self) -> Option<&str> {
        match &self.representation {
            Representation::ColumnString(column) => Some(column.as_str()),
            Representation::Terms(_) => None,
        }
    }

    pub fn has_minterms(&self) -> bool {
        self.minterms().is_some()
    }

    pub fn has_maxterms(&self) -> bool {
        self.maxterms().is_some()
    }

    pub fn has_dontcares(&self) -> bool {
        self.dontcares().is_some()
    }

    pub fn has_column_string(&self) -> bool {
        self.column_string().is_some()
    }

    /// Term family a minimizer should read. A column string reads as minterms.
    pub fn active_kind(&self) -> TermKind {
        match &self.representation {
            Representation::Terms(terms) => terms.kind,
            Representation::ColumnString(_) => TermKind::Minterms,
        }
    }

    /// The active term family together with the don't-cares.
    ///
    /// For a column string this is its minterms, with don't-cares present
    /// only if the column contains the don't-care symbol.
    pub fn canonical_terms(&self) -> TermList {
        match &self.representation {
            Representation::Terms(terms) => terms.clone(),
            Representation::ColumnString(column) => {
                let broken = break_column(column, self.dc);
                let dontcares = if broken.dontcares.is_empty() {
                    None
                } else {
                    Some(broken.dontcares)
                };
                TermList::new(TermKind::Minterms, broken.minterms, dontcares)
            }
        }
    }
}

impl Display for BooleanFunction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_column_string())
    }
}

/// Raw, not yet validated description of a [`BooleanFunction`].
///
/// Every field is optional; [`FunctionBuilder::build`] decides whether the
/// combination describes exactly one function.
#[derive(Debug, Clone, Default)]
pub struct FunctionBuilder {
    pub(crate) width: u32,
    pub(crate) minterms: Option<Vec<i64>>,
    pub(crate) maxterms: Option<Vec<i64>>,
    pub(crate) dontcares: Option<Vec<i64>>,
    pub(crate) column_string: Option<String>,
    pub(crate) dc: Option<String>,
}

impl FunctionBuilder {
    pub fn new(width: u32) -> Self {
        Self {
            width,
            ..Default::default()
        }
    }

    pub fn minterms(mut self, minterms: impl IntoIterator<Item = i64>) -> Self {
        self.minterms = Some(minterms.into_iter().collect());
        self
    }

    pub fn maxterms(mut self, maxterms: impl IntoIterator<Item = i64>) -> Self {
        self.maxterms = Some(maxterms.into_iter().collect());
        self
    }

    pub fn dontcares(mut self, dontcares: impl IntoIterator<Item = i64>) -> Self {
        self.dontcares = Some(dontcares.into_iter().collect());
        self
    }

    pub fn column_string(mut self, column: impl Into<String>) -> Self {
        self.column_string = Some(column.into());
        self
    }

    /// Don't-care symbol; must be a single character other than `0` and `1`.
    pub fn dc(mut self, symbol: impl Into<String>) -> Self {
        self.dc = Some(symbol.into());
        self
    }

    /// Validates the inputs and builds the function.
    pub fn build(self) -> Result<BooleanFunction> {
        let dc = validate::validate(&self)?;

        let representation = match self.column_string {
            Some(column) => Representation::ColumnString(column),
            None => {
                let (kind, indices) = match (self.minterms, self.maxterms) {
                    (Some(minterms), None) => (TermKind::Minterms, minterms),
                    (None, Some(maxterms)) => (TermKind::Maxterms, maxterms),
                    (Some(_), Some(_)) => return Err(TermError::ConflictingTermFamilies),
                    (None, None) => return Err(TermError::MissingTermFamily),
                };
                let dontcares = self.dontcares.map(index_set);
                Representation::Terms(TermList::new(kind, index_set(indices), dontcares))
            }
        };

        debug!("build(width = {}, dc = {}) -> {:?}", self.width, dc, representation);

        Ok(BooleanFunction {
            width: self.width,
            representation,
            dc,
        })
    }
}

/// Sorted, deduplicated row indices. All values must already be range-checked.
fn index_set(values: Vec<i64>) -> Vec<usize> {
    values
        .into_iter()
        .map(|i| i as usize)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
