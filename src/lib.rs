//! rlehuff: a byte-stream codec pairing run-length encoding with a Huffman
//! prefix code.
//!
//! The encoder derives one prefix-free code table from the whole input's
//! byte frequencies, renders each maximal run of a repeated byte as a short
//! bit token, and packs everything into a single self-describing frame:
//! header, serialized code table, then the bit-packed payload. The decoder
//! needs nothing but the frame; it inverts the carried table and recovers
//! symbol boundaries from the unaligned bitstream by greedy prefix
//! matching.
//!
//! ```
//! let frame = rlehuff::codec::encode::encode(b"aaabaaab").unwrap();
//! let data = rlehuff::codec::decode::decode(&frame).unwrap();
//! assert_eq!(data, b"aaabaaab");
//! ```
//!
//! Both transforms are synchronous, single-threaded, and all-or-nothing;
//! inputs and frames must fit in memory. The frame carries no checksum and
//! no version tag.
pub mod bitstream;
pub mod codec;
pub mod error;
pub mod huffman;
pub mod tools;
