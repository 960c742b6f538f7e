//! The tools module provides helper functions for the rlehuff codec.
//!
//! The tools are:
//! - cli: Command line interface for the rlehuff binary.
//! - freq_count: Byte frequency count feeding the Huffman builder.
pub mod cli;
pub mod freq_count;
