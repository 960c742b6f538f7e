//! The huffman module builds the prefix-free code table carried in every
//! rlehuff frame.
//!
//! Unlike block compressors that rebuild canonical codes from transmitted
//! lengths, this format ships the table itself: the encoder derives one
//! table from the whole input's byte frequencies and the decoder only has
//! to invert it. The prefix-free property is what lets the decoder recover
//! symbol boundaries from an unaligned bitstream by growing a bit window
//! until its contents match a code.
//!
//! Construction is the standard Huffman merge of the two lightest nodes,
//! with frequency ties broken by ascending byte value so that a given input
//! always yields the same table.
pub mod code;
pub mod code_builder;
