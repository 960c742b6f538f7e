//! The codec module holds the encode and decode pipelines for the rlehuff
//! frame format.
//!
//! Encoding happens in the following steps:
//! - Frequency count: one bucket per byte value over the whole input.
//! - Huffman coding: derive a prefix-free code per distinct byte value.
//! - Run tokenization: partition the input into maximal runs and render
//!   each as a token, short runs as code-plus-flag-bit pairs, longer runs
//!   as code-plus-count.
//! - Bit packing: concatenate the tokens and zero-pad the final byte.
//! - Framing: prepend the header and the serialized code table.
//!
//! Decoding is the inverse, with one twist: the payload carries no explicit
//! bit length, so the decoder walks a growing bit window over it and leans
//! on the prefix-free property to find every symbol boundary, treating a
//! short all-zero tail as padding.
//!
//! Both directions run as one blocking pass over in-memory buffers. There
//! is no streaming mode.
pub mod decode;
pub mod encode;
pub mod frame;
pub mod runs;

#[cfg(test)]
mod test {
    use super::decode::decode;
    use super::encode::encode;

    fn round_trip(data: &[u8]) {
        let frame = encode(data).unwrap();
        assert_eq!(decode(&frame).unwrap(), data, "input {:?}", &data);
    }

    #[test]
    fn round_trip_test() {
        round_trip(b"aaab");
        round_trip(b"z");
        round_trip(b"hello world");
        round_trip(b"the quick brown fox jumps over the lazy dog");
        round_trip(&[0, 0, 255, 255, 7, 7, 7, 0]);
    }

    #[test]
    fn round_trip_single_value_test() {
        round_trip(&[42]);
        round_trip(&[42; 2]);
        round_trip(&[42; 3]);
        round_trip(&[42; 100]);
    }

    #[test]
    fn round_trip_long_run_test() {
        // Runs past the 127 count cap, and past the old 255 limit.
        round_trip(&[9; 127]);
        round_trip(&[9; 128]);
        round_trip(&[9; 255]);
        round_trip(&[9; 256]);
        round_trip(&[9; 1000]);
        let mut data = vec![b'x'; 300];
        data.extend_from_slice(b"tail");
        round_trip(&data);
    }

    #[test]
    fn round_trip_all_values_test() {
        let mut data: Vec<u8> = (0..=255).collect();
        data.extend((0..=255).rev());
        round_trip(&data);
    }

    #[test]
    fn round_trip_run_boundaries_test() {
        // Lengths around the literal/counted switch, in every position.
        round_trip(b"aabbbccd");
        round_trip(b"abba");
        round_trip(b"aaabbb");
        round_trip(b"xxyyyzzzz");
    }

    #[test]
    fn round_trip_skewed_test() {
        let mut data = vec![b'e'; 500];
        for (i, slot) in data.iter_mut().enumerate() {
            if i % 7 == 0 {
                *slot = (i % 256) as u8;
            }
        }
        round_trip(&data);
    }
}
