use log::{debug, info};
use rustc_hash::FxHashMap;

use crate::bitstream::bitspan::BitSpan;
use crate::codec::frame;
use crate::error::CodecError;
use crate::huffman::code::{self, Code, MAX_CODE_BITS};

/// Restore the original byte sequence from a frame: split off the code
/// table, invert it, and expand the packed token stream.
pub fn decode(frame_bytes: &[u8]) -> Result<Vec<u8>, CodecError> {
    if frame_bytes.is_empty() {
        return Err(CodecError::NullInput);
    }
    let (table, payload) = frame::split_frame(frame_bytes)?;
    if payload.is_empty() {
        return Err(CodecError::FrameFormat("frame carries no payload"));
    }
    let inverted = code::invert(&table)?;
    debug!(
        "decoding {} payload bytes against {} codes",
        payload.len(),
        inverted.len()
    );

    let out = expand(payload, &inverted)?;
    info!(
        "decoded a {} byte frame into {} bytes",
        frame_bytes.len(),
        out.len()
    );
    Ok(out)
}

/// Greedy bit-window scan over the payload. The window [lower, upper) grows
/// one bit at a time until its contents match a code; the prefix-free table
/// guarantees the first match is the only possible one. The bit just after
/// the window then picks the branch: 1 means a single occurrence, 0 means
/// an eight bit big-endian count follows.
fn expand(payload: &[u8], inverted: &FxHashMap<Code, u8>) -> Result<Vec<u8>, CodecError> {
    let span = BitSpan::new(payload);
    let bit_len = span.bit_len();
    let mut out = Vec::with_capacity(payload.len() * 2);

    let mut lower = 0;
    let mut upper = 1;
    let mut window = Code::new(span.bit(0) as u64, 1);

    while upper < bit_len {
        match inverted.get(&window) {
            None => {
                // Codes never exceed MAX_CODE_BITS, so a window that wide
                // without a match can never resolve.
                if window.len == MAX_CODE_BITS {
                    return Err(CodecError::FrameFormat(
                        "payload cannot be resolved into codes",
                    ));
                }
                window = window.child(span.bit(upper) as u64);
                upper += 1;
            }
            Some(&value) => {
                if span.bit(upper) == 1 {
                    // Flag bit: one occurrence of the value.
                    out.push(value);
                    lower = upper + 1;
                } else {
                    // Count field. A field truncated by the end of the
                    // payload covers only zero padding and reads as zero.
                    let count = span.field(upper, upper + 8);
                    out.extend(std::iter::repeat(value).take(count as usize));
                    lower = upper + 8;
                }
                upper = lower + 1;
                if lower < bit_len {
                    window = Code::new(span.bit(lower) as u64, 1);
                }
            }
        }
    }

    // Whatever is left unmatched must be pure end-of-stream padding: fewer
    // than eight bits, all zero.
    if lower < bit_len {
        let tail = bit_len - lower;
        if tail >= 8 || span.field(lower, bit_len) != 0 {
            return Err(CodecError::FrameFormat(
                "payload cannot be resolved into codes",
            ));
        }
    }
    Ok(out)
}
