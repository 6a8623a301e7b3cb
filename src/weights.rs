//! Place-value weight table.
//!
//! The encoder decomposes a value against an explicit table of powers of two
//! rather than calling a base-conversion primitive. This module builds that
//! table: an ordered `Vec<u32>` where entry *i* is 2^i.

use std::fmt;

/// Number of bits in the word this tool renders. The canonical table size.
pub const WORD_BITS: usize = 32;

/// Errors from [`build_weight_table`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WeightError {
    /// The requested table would need an entry of 2^32 or above, which does
    /// not fit in `u32`. Refusing beats silently wrapping.
    SizeExceedsWidth { requested: usize },
}

impl fmt::Display for WeightError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeightError::SizeExceedsWidth { requested } => {
                write!(
                    f,
                    "weight table of {requested} entries exceeds u32 width (max {WORD_BITS})"
                )
            }
        }
    }
}

impl std::error::Error for WeightError {}

/// Build the ordered table of place-value weights `[1, 2, 4, .., 2^(size-1)]`.
///
/// The table is built by doubling an accumulator, so entry *i* is exactly
/// 2^i. `size` may be at most [`WORD_BITS`]; larger requests fail with
/// [`WeightError::SizeExceedsWidth`]. A `size` of zero yields an empty table.
///
/// The result is never mutated by the rest of the crate, so one table can be
/// shared across any number of encode calls.
pub fn build_weight_table(size: usize) -> Result<Vec<u32>, WeightError> {
    if size > WORD_BITS {
        return Err(WeightError::SizeExceedsWidth { requested: size });
    }

    let mut table = Vec::with_capacity(size);
    let mut weight: u32 = 1;
    for i in 0..size {
        table.push(weight);
        // The double after the last entry would overflow at size == 32;
        // nothing reads it, so skip it instead of wrapping.
        if i + 1 < size {
            weight *= 2;
        }
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_table_contents() {
        let table = build_weight_table(WORD_BITS).unwrap();
        assert_eq!(table.len(), 32);
        assert_eq!(table[0], 1);
        assert_eq!(table[1], 2);
        assert_eq!(table[4], 16);
        assert_eq!(table[31], 2_147_483_648);
    }

    #[test]
    fn each_entry_doubles_its_predecessor() {
        let table = build_weight_table(WORD_BITS).unwrap();
        for pair in table.windows(2) {
            assert_eq!(pair[1], pair[0] * 2);
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn oversize_request_is_rejected() {
        let err = build_weight_table(33).unwrap_err();
        assert_eq!(err, WeightError::SizeExceedsWidth { requested: 33 });
    }

    #[test]
    fn zero_size_is_empty() {
        assert!(build_weight_table(0).unwrap().is_empty());
    }
}
