//! bin32 - 32-bit Binary Representation Calculator
//!
//! Copyright (c) 2025 bin32 Contributors
//! Licensed under MIT License
//!
//! Converts non-negative integers up to `i32::MAX` into their full-width
//! binary form via an explicit greedy decomposition against a table of
//! power-of-two weights, grouped every four digits for readability.

pub mod cli;
pub mod encoder;
pub mod weights;

// Re-export main items for convenience
pub use encoder::{encode_binary, EncodeError, GROUP_SIZE, MAX_VALUE, OUTPUT_LEN};
pub use weights::{build_weight_table, WeightError, WORD_BITS};
