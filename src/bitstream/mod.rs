//! The bitstream module handles the packed-bit layer of the rlehuff frame.
//!
//! Token bit-strings are variable width and do not respect byte boundaries.
//! The encode side concatenates them through the BitPacker, which pads the
//! final byte with zero bits. The decode side never consumes bits in order;
//! its window scan needs bits by position, which the BitSpan view provides.
//!
//! Neither type is general purpose I/O. Both operate on in-memory buffers
//! only, matching the all-at-once design of the codec.
pub mod bitpacker;
pub mod bitspan;
