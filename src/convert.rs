//! Conversions between term lists and column strings.
//!
//! A column string holds one symbol per row, row `0` first. Converting a term
//! list to a column and breaking the column again yields the same sets of
//! minterms, maxterms and don't-cares for the same width and don't-care symbol.

use log::debug;
use num_bigint::BigUint;

use crate::function::{BooleanFunction, Representation, TermKind, TermList};
use crate::symbol::DontCare;

/// Rows of a column string, split by symbol.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct BrokenColumn {
    /// Rows holding `1`.
    pub minterms: Vec<usize>,
    /// Rows holding `0`.
    pub maxterms: Vec<usize>,
    /// Rows holding the don't-care symbol.
    pub dontcares: Vec<usize>,
}

/// Binary forms of the active term family, as read by a minimizer.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct BitTerms {
    pub kind: TermKind,
    pub terms: Vec<String>,
    pub dontcares: Vec<String>,
}

/// Builds the column of a `width`-input function described by `terms`.
///
/// Every row starts at the default symbol of the term family, listed rows get
/// the set symbol, and don't-care rows get `dc` last.
pub fn column_list(width: u32, terms: &TermList, dc: DontCare) -> Vec<char> {
    let kind = terms.kind();
    let mut column = vec![kind.default_symbol(); 1 << width];
    for &i in terms.indices() {
        column[i] = kind.set_symbol();
    }
    for &i in terms.dontcares().unwrap_or_default() {
        column[i] = dc.get();
    }
    column
}

/// Splits a column string into the rows of each symbol, in ascending order.
pub fn break_column(column: &str, dc: DontCare) -> BrokenColumn {
    let mut broken = BrokenColumn::default();
    for (i, c) in column.chars().enumerate() {
        if c == '1' {
            broken.minterms.push(i);
        } else if c == '0' {
            broken.maxterms.push(i);
        } else if dc.matches(c) {
            broken.dontcares.push(i);
        }
    }
    broken
}

/// Binary form of row `index` with `width` digits, most significant first.
///
/// Digits beyond the bit width of `usize` are `0`.
///
/// ```
/// use minterm_rs::convert::bit_string;
///
/// assert_eq!(bit_string(5, 4), "0101");
/// assert_eq!(bit_string(0, 0), "");
/// ```
pub fn bit_string(index: usize, width: u32) -> String {
    (0..width)
        .rev()
        .map(|bit| match index.checked_shr(bit) {
            Some(shifted) if shifted & 1 == 1 => '1',
            _ => '0',
        })
        .collect()
}

impl BooleanFunction {
    /// Output symbol of every row.
    pub fn to_column_list(&self) -> Vec<char> {
        match self.representation() {
            Representation::Terms(terms) => {
                debug!("to_column_list(width = {}, kind = {})", self.width(), terms.kind());
                column_list(self.width(), terms, self.dc())
            }
            Representation::ColumnString(column) => column.chars().collect(),
        }
    }

    /// Output column as a string of length `2^width`.
    pub fn to_column_string(&self) -> String {
        match self.representation() {
            Representation::Terms(_) => self.to_column_list().into_iter().collect(),
            Representation::ColumnString(column) => column.clone(),
        }
    }

    /// Minterms, maxterms and don't-cares of the function.
    pub fn break_column_string(&self) -> BrokenColumn {
        match self.representation() {
            Representation::ColumnString(column) => break_column(column, self.dc()),
            Representation::Terms(_) => break_column(&self.to_column_string(), self.dc()),
        }
    }

    /// Binary forms of the active term family and of the don't-cares.
    pub fn minmax_bit_terms(&self) -> BitTerms {
        let terms = self.canonical_terms();
        let width = self.width();
        let to_bits = |indices: &[usize]| -> Vec<String> {
            indices.iter().map(|&i| bit_string(i, width)).collect()
        };
        BitTerms {
            kind: terms.kind(),
            terms: to_bits(terms.indices()),
            dontcares: to_bits(terms.dontcares().unwrap_or_default()),
        }
    }

    /// Value of the function at `row`, or `None` if the row is a don't-care.
    ///
    /// # Panics
    ///
    /// Panics if `row >= 2^width`.
    pub fn eval(&self, row: usize) -> Option<bool> {
        assert!(row < self.domain_size(), "Row {} out of range", row);
        let symbol = match self.representation() {
            Representation::Terms(terms) => {
                if terms.dontcares().unwrap_or_default().binary_search(&row).is_ok() {
                    return None;
                }
                let kind = terms.kind();
                if terms.indices().binary_search(&row).is_ok() {
                    kind.set_symbol()
                } else {
                    kind.default_symbol()
                }
            }
            Representation::ColumnString(column) => column.chars().nth(row)?,
        };
        match symbol {
            '1' => Some(true),
            '0' => Some(false),
            _ => None,
        }
    }

    /// On-set packed into an integer, bit `i` set iff row `i` is true.
    pub fn on_set_bits(&self) -> BigUint {
        pack(&self.break_column_string().minterms)
    }

    /// Don't-care set packed into an integer, bit `i` set iff row `i` is a don't-care.
    pub fn dc_set_bits(&self) -> BigUint {
        pack(&self.break_column_string().dontcares)
    }
}

fn pack(rows: &[usize]) -> BigUint {
    let mut bits = BigUint::ZERO;
    for &i in rows {
        bits |= BigUint::from(1u8) << i;
    }
    bits
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn test_minterms_to_column() {
        let f = BooleanFunction::from_minterms(3, [1, 3, 5]).unwrap();
        assert_eq!(f.to_column_string(), "01010100");
        assert_eq!(f.to_column_list(), vec!['0', '1', '0', '1', '0', '1', '0', '0']);
    }

    #[test]
    fn test_maxterms_with_dontcares_to_column() {
        let f = BooleanFunction::builder(2)
            .maxterms([0, 2])
            .dontcares([3])
            .build()
            .unwrap();
        assert_eq!(f.to_column_string(), "010-");
    }

    #[test]
    fn test_custom_dontcare_in_column() {
        let f = BooleanFunction::builder(2)
            .minterms([0])
            .dontcares([1, 2])
            .dc("x")
            .build()
            .unwrap();
        assert_eq!(f.to_column_string(), "1xx0");
    }

    #[test]
    fn test_dontcare_wins_over_term() {
        let terms = TermList::new(TermKind::Minterms, vec![1, 2], Some(vec![2]));
        assert_eq!(column_list(2, &terms, DontCare::DEFAULT), vec!['0', '1', '-', '0']);
    }

    #[test]
    fn test_break_column_string() {
        let f = BooleanFunction::from_column_string(2, "0-1-").unwrap();
        let broken = f.break_column_string();
        assert_eq!(broken.minterms, vec![2]);
        assert_eq!(broken.maxterms, vec![0]);
        assert_eq!(broken.dontcares, vec![1, 3]);
    }

    #[test]
    fn test_break_terms() {
        let f = BooleanFunction::builder(3)
            .minterms([6, 1])
            .dontcares([0])
            .build()
            .unwrap();
        let broken = f.break_column_string();
        assert_eq!(broken.minterms, vec![1, 6]);
        assert_eq!(broken.maxterms, vec![2, 3, 4, 5, 7]);
        assert_eq!(broken.dontcares, vec![0]);
    }

    #[test]
    fn test_column_string_is_passed_through() {
        let f = BooleanFunction::builder(1).column_string("*1").dc("*").build().unwrap();
        assert_eq!(f.to_column_string(), "*1");
        assert_eq!(f.to_column_list(), vec!['*', '1']);
    }

    #[test]
    fn test_width_zero_column() {
        let f = BooleanFunction::from_maxterms(0, []).unwrap();
        assert_eq!(f.to_column_string(), "1");
        let g = BooleanFunction::from_maxterms(0, [0]).unwrap();
        assert_eq!(g.to_column_string(), "0");
    }

    #[test]
    fn test_bit_string() {
        assert_eq!(bit_string(0, 3), "000");
        assert_eq!(bit_string(5, 3), "101");
        assert_eq!(bit_string(7, 3), "111");
        assert_eq!(bit_string(1, 5), "00001");
    }

    #[test]
    fn test_bit_string_wider_than_usize() {
        let bits = bit_string(5, usize::BITS + 2);
        assert_eq!(bits.len(), usize::BITS as usize + 2);
        assert!(bits.ends_with("101"));
        assert!(bits[..bits.len() - 3].chars().all(|c| c == '0'));
    }

    #[test]
    fn test_minmax_bit_terms_minterms() {
        let f = BooleanFunction::builder(3)
            .minterms([1, 5])
            .dontcares([7])
            .build()
            .unwrap();
        let bits = f.minmax_bit_terms();
        assert_eq!(bits.kind, TermKind::Minterms);
        assert_eq!(bits.terms, vec!["001", "101"]);
        assert_eq!(bits.dontcares, vec!["111"]);
    }

    #[test]
    fn test_minmax_bit_terms_maxterms() {
        let f = BooleanFunction::from_maxterms(2, [3, 0]).unwrap();
        let bits = f.minmax_bit_terms();
        assert_eq!(bits.kind, TermKind::Maxterms);
        assert_eq!(bits.terms, vec!["00", "11"]);
        assert!(bits.dontcares.is_empty());
    }

    #[test]
    fn test_minmax_bit_terms_column_string() {
        let f = BooleanFunction::from_column_string(2, "-01-").unwrap();
        let bits = f.minmax_bit_terms();
        assert_eq!(bits.kind, TermKind::Minterms);
        assert_eq!(bits.terms, vec!["10"]);
        assert_eq!(bits.dontcares, vec!["00", "11"]);
    }

    #[test]
    fn test_eval() {
        let f = BooleanFunction::builder(2)
            .maxterms([0, 2])
            .dontcares([3])
            .build()
            .unwrap();
        assert_eq!(f.eval(0), Some(false));
        assert_eq!(f.eval(1), Some(true));
        assert_eq!(f.eval(2), Some(false));
        assert_eq!(f.eval(3), None);

        let g = BooleanFunction::from_column_string(2, "010-").unwrap();
        for row in 0..4 {
            assert_eq!(f.eval(row), g.eval(row));
        }
    }

    #[test]
    #[should_panic]
    fn test_eval_out_of_range() {
        let f = BooleanFunction::from_minterms(1, [0]).unwrap();
        f.eval(2);
    }

    #[test]
    fn test_packed_sets() {
        let f = BooleanFunction::builder(3)
            .minterms([1, 3, 5])
            .dontcares([6])
            .build()
            .unwrap();
        assert_eq!(f.on_set_bits(), BigUint::from(0b101010u32));
        assert_eq!(f.dc_set_bits(), BigUint::from(0b1000000u32));

        let g = BooleanFunction::from_column_string(2, "0000").unwrap();
        assert_eq!(g.on_set_bits(), BigUint::ZERO);
    }
}
