use log::trace;
use rustc_hash::FxHashMap;

use crate::error::CodecError;
use crate::huffman::code::{Code, CodeTable, MAX_CODE_BITS};

/*
Frame layout, byte exact:

    sizeFieldLength      1 byte
    tableByteSize        sizeFieldLength bytes, big-endian unsigned
    serializedCodeTable  tableByteSize bytes
    packedPayload        remainder of the frame

The table's own wire format is equally explicit: a two byte big-endian entry
count, then per entry the byte value, the code bit-length, and the code bits
right-aligned in the fewest whole bytes. Nothing here leans on an external
serialization convention; the frame is fully specified by this file.
*/

/// Serialize the code table into its wire form.
pub fn serialize_table(table: &CodeTable) -> Vec<u8> {
    // Entries go out in byte order so identical tables serialize identically.
    let mut entries: Vec<(&u8, &Code)> = table.iter().collect();
    entries.sort_unstable_by_key(|(sym, _)| **sym);

    let mut out = Vec::with_capacity(2 + entries.len() * 3);
    out.extend_from_slice(&(entries.len() as u16).to_be_bytes());
    for (&sym, &code) in entries {
        out.push(sym);
        out.push(code.len);
        let bytes = (code.len as usize + 7) / 8;
        out.extend_from_slice(&code.bits.to_be_bytes()[8 - bytes..]);
    }
    out
}

/// Rebuild a code table from its wire form. Every length is checked against
/// the buffer before use; the table region must be consumed exactly.
pub fn deserialize_table(buf: &[u8]) -> Result<CodeTable, CodecError> {
    if buf.len() < 2 {
        return Err(CodecError::FrameFormat("code table shorter than its entry count"));
    }
    let count = u16::from_be_bytes([buf[0], buf[1]]) as usize;
    if count == 0 {
        return Err(CodecError::FrameFormat("code table with no entries"));
    }

    let mut table = FxHashMap::default();
    let mut at = 2;
    for _ in 0..count {
        if buf.len() < at + 2 {
            return Err(CodecError::FrameFormat("code table entry runs past the table"));
        }
        let sym = buf[at];
        let len = buf[at + 1];
        at += 2;
        if len == 0 || len > MAX_CODE_BITS {
            return Err(CodecError::FrameFormat("code length out of range"));
        }
        let bytes = (len as usize + 7) / 8;
        if buf.len() < at + bytes {
            return Err(CodecError::FrameFormat("code bits run past the table"));
        }
        let mut bits = 0_u64;
        for &b in &buf[at..at + bytes] {
            bits = bits << 8 | b as u64;
        }
        at += bytes;
        if len < 64 && bits >> len != 0 {
            return Err(CodecError::FrameFormat("code bits wider than the stated length"));
        }
        if table.insert(sym, Code::new(bits, len)).is_some() {
            return Err(CodecError::FrameFormat("byte value listed twice in the code table"));
        }
    }
    if at != buf.len() {
        return Err(CodecError::FrameFormat("trailing bytes after the code table"));
    }
    Ok(table)
}

/// Assemble the full frame from the table and the packed payload.
pub fn build_frame(table: &CodeTable, payload: &[u8]) -> Vec<u8> {
    let serialized = serialize_table(table);
    let size = serialized.len();
    // Minimum bytes (at least one) holding the table size big-endian.
    let width = ((64 - (size as u64).leading_zeros() as usize + 7) / 8).max(1);

    let mut frame = Vec::with_capacity(1 + width + size + payload.len());
    frame.push(width as u8);
    frame.extend_from_slice(&size.to_be_bytes()[8 - width..]);
    frame.extend_from_slice(&serialized);
    frame.extend_from_slice(payload);
    trace!(
        "frame: {} header + {} table + {} payload bytes",
        1 + width,
        size,
        payload.len()
    );
    frame
}

/// Split a frame into its code table and packed payload per the header.
pub fn split_frame(frame: &[u8]) -> Result<(CodeTable, &[u8]), CodecError> {
    if frame.is_empty() {
        return Err(CodecError::FrameFormat("empty frame"));
    }
    let width = frame[0] as usize;
    if width == 0 {
        return Err(CodecError::FrameFormat("size field width of zero"));
    }
    if width > 8 {
        return Err(CodecError::FrameFormat("size field wider than eight bytes"));
    }
    if frame.len() < 1 + width {
        return Err(CodecError::FrameFormat("frame ends inside the size field"));
    }
    let mut size = 0_usize;
    for &b in &frame[1..1 + width] {
        size = size << 8 | b as usize;
    }

    let table_end = 1 + width + size;
    if frame.len() < table_end {
        return Err(CodecError::FrameFormat("frame shorter than its code table"));
    }
    let table = deserialize_table(&frame[1 + width..table_end])?;
    Ok((table, &frame[table_end..]))
}

#[cfg(test)]
mod test {
    use super::{build_frame, deserialize_table, serialize_table, split_frame};
    use crate::error::CodecError;
    use crate::huffman::code::{Code, CodeTable};
    use crate::huffman::code_builder::build_code_table;

    fn ab_table() -> CodeTable {
        let mut table = CodeTable::default();
        table.insert(97, Code::new(0b1, 1));
        table.insert(98, Code::new(0b0, 1));
        table
    }

    #[test]
    fn serialize_table_test() {
        // Two entries, byte order, one code byte each.
        assert_eq!(
            serialize_table(&ab_table()),
            vec![0, 2, 97, 1, 1, 98, 1, 0]
        );
    }

    #[test]
    fn table_round_trip_test() {
        let table = ab_table();
        assert_eq!(deserialize_table(&serialize_table(&table)).unwrap(), table);
    }

    #[test]
    fn wide_code_round_trip_test() {
        let mut table = CodeTable::default();
        table.insert(7, Code::new(0b1_0110_0101, 9));
        table.insert(8, Code::new(0, 1));
        let back = deserialize_table(&serialize_table(&table)).unwrap();
        assert_eq!(back[&7], Code::new(0b1_0110_0101, 9));
    }

    #[test]
    fn frame_layout_test() {
        let frame = build_frame(&ab_table(), &[0x81, 0xa0]);
        assert_eq!(
            frame,
            vec![1, 8, 0, 2, 97, 1, 1, 98, 1, 0, 0x81, 0xa0]
        );
    }

    #[test]
    fn split_frame_test() {
        let table = ab_table();
        let frame = build_frame(&table, &[0x81, 0xa0]);
        let (back, payload) = split_frame(&frame).unwrap();
        assert_eq!(back, table);
        assert_eq!(payload, &[0x81, 0xa0]);
    }

    #[test]
    fn wide_size_field_test() {
        // A full 256-entry table is far past 255 bytes, forcing a two byte
        // size field.
        let table = build_code_table(&vec![1_u64; 256]);
        let frame = build_frame(&table, &[0xff]);
        assert_eq!(frame[0], 2);
        let (back, payload) = split_frame(&frame).unwrap();
        assert_eq!(back, table);
        assert_eq!(payload, &[0xff]);
    }

    #[test]
    fn truncated_frame_test() {
        let frame = build_frame(&ab_table(), &[0x81, 0xa0]);
        // Chop inside the table: the header now implies more than is there.
        assert_eq!(
            split_frame(&frame[..6]),
            Err(CodecError::FrameFormat("frame shorter than its code table"))
        );
        // Chop inside the size field.
        assert_eq!(
            split_frame(&frame[..1]),
            Err(CodecError::FrameFormat("frame ends inside the size field"))
        );
    }

    #[test]
    fn bad_width_test() {
        assert_eq!(
            split_frame(&[0, 1, 2]),
            Err(CodecError::FrameFormat("size field width of zero"))
        );
        assert_eq!(
            split_frame(&[9, 1, 2]),
            Err(CodecError::FrameFormat("size field wider than eight bytes"))
        );
    }

    #[test]
    fn bad_table_test() {
        assert_eq!(
            deserialize_table(&[0, 0]),
            Err(CodecError::FrameFormat("code table with no entries"))
        );
        assert_eq!(
            deserialize_table(&[0, 1, 97]),
            Err(CodecError::FrameFormat("code table entry runs past the table"))
        );
        assert_eq!(
            deserialize_table(&[0, 1, 97, 9, 1]),
            Err(CodecError::FrameFormat("code bits run past the table"))
        );
        assert_eq!(
            deserialize_table(&[0, 1, 97, 0]),
            Err(CodecError::FrameFormat("code length out of range"))
        );
        assert_eq!(
            deserialize_table(&[0, 1, 97, 2, 0b100]),
            Err(CodecError::FrameFormat("code bits wider than the stated length"))
        );
        assert_eq!(
            deserialize_table(&[0, 2, 97, 1, 1, 97, 1, 0]),
            Err(CodecError::FrameFormat("byte value listed twice in the code table"))
        );
        assert_eq!(
            deserialize_table(&[0, 1, 97, 1, 1, 5]),
            Err(CodecError::FrameFormat("trailing bytes after the code table"))
        );
    }
}
