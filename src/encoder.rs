//! Greedy binary-weight encoder.
//!
//! Converts a value in `[0, 2_147_483_647]` to its full-width 32-bit binary
//! string, grouped in blocks of four digits for readability:
//!
//! ```text
//! 255 -> "0000 0000 0000 0000 0000 0000 1111 1111"
//! ```
//!
//! The digits come from a greedy decomposition against the weight table
//! (subtract the weight whenever the remainder can afford it), scanning the
//! table from its highest entry down. Since the weights are descending powers
//! of two, the greedy rule recovers every bit exactly.

use crate::weights::WORD_BITS;
use std::fmt;

/// Largest encodable value: `i32::MAX`, per the tool's contract.
pub const MAX_VALUE: u32 = i32::MAX as u32;

/// Digits per separator group.
pub const GROUP_SIZE: usize = 4;

/// Total output length: 32 digits plus 7 interior spaces.
pub const OUTPUT_LEN: usize = WORD_BITS + WORD_BITS / GROUP_SIZE - 1;

/// Contract violations at the encoder boundary.
///
/// The shell validates user input before calling in, so seeing one of these
/// means a caller bug, not bad user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// Value above [`MAX_VALUE`].
    ValueOutOfRange { value: u32 },
    /// Weight table is not exactly 32 entries.
    WrongTableLength { len: usize },
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::ValueOutOfRange { value } => {
                write!(f, "value {value} exceeds maximum {MAX_VALUE}")
            }
            EncodeError::WrongTableLength { len } => {
                write!(f, "weight table has {len} entries, expected {WORD_BITS}")
            }
        }
    }
}

impl std::error::Error for EncodeError {}

/// Encode `value` as a spaced 32-bit binary string.
///
/// `weights` must be the ascending 32-entry table from
/// [`build_weight_table`](crate::weights::build_weight_table); it is scanned
/// from index 31 down to 0 so the most significant digit is emitted first.
/// Leading zeros are kept, so the output is always [`OUTPUT_LEN`] characters.
///
/// Pure: same inputs, same string, no side effects.
pub fn encode_binary(value: u32, weights: &[u32]) -> Result<String, EncodeError> {
    if value > MAX_VALUE {
        return Err(EncodeError::ValueOutOfRange { value });
    }
    if weights.len() != WORD_BITS {
        return Err(EncodeError::WrongTableLength {
            len: weights.len(),
        });
    }

    let mut output = String::with_capacity(OUTPUT_LEN);
    let mut remainder = value;
    let mut group = 0;

    for &weight in weights.iter().rev() {
        if group == GROUP_SIZE {
            group = 0;
            output.push(' ');
        }
        group += 1;

        if weight == 1 {
            // Terminal position: the remainder can only be 0 or 1 here.
            output.push(if remainder == 1 { '1' } else { '0' });
        } else if remainder < weight {
            output.push('0');
        } else {
            output.push('1');
            remainder -= weight;
        }
    }

    Ok(output)
}
