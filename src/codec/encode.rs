use log::{debug, info};

use crate::codec::{frame, runs};
use crate::error::CodecError;
use crate::huffman::code_builder::build_code_table;
use crate::tools::freq_count::freqs;

/// Compress data into a self-describing frame: derive the code table from
/// the byte frequencies, tokenize the runs, pack the token bits, and wrap
/// table and payload in the frame header.
pub fn encode(data: &[u8]) -> Result<Vec<u8>, CodecError> {
    if data.is_empty() {
        return Err(CodecError::NullInput);
    }

    let table = build_code_table(&freqs(data));
    debug!("{} distinct byte values", table.len());

    let run_list = runs::runs(data);
    let tokens = runs::tokenize(&run_list, &table);
    debug!("{} runs became {} tokens", run_list.len(), tokens.len());

    let packer = runs::pack_tokens(&tokens, data.len() / 2 + 16);
    let frame = frame::build_frame(&table, &packer.output);
    info!(
        "encoded {} bytes into a {} byte frame",
        data.len(),
        frame.len()
    );
    Ok(frame)
}

/// Text front end. Every character must fit in one byte (0-255); anything
/// wider is rejected before any output is produced.
pub fn encode_str(text: &str) -> Result<Vec<u8>, CodecError> {
    let mut data = Vec::with_capacity(text.len());
    for c in text.chars() {
        if c as u32 > 255 {
            return Err(CodecError::NonAsciiByte(c));
        }
        data.push(c as u8);
    }
    encode(&data)
}
