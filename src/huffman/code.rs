use rustc_hash::FxHashMap;

use crate::error::CodecError;

/// Longest code representable. Reaching 64 bits honestly would need a
/// Fibonacci-skewed input beyond 10^13 bytes, far past anything this codec
/// can hold in memory, but tables read back from a frame are untrusted and
/// get checked against this bound.
pub const MAX_CODE_BITS: u8 = 64;

/// One prefix code: 1-64 bits, right-aligned in a u64.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code {
    pub bits: u64,
    pub len: u8,
}

impl Code {
    pub fn new(bits: u64, len: u8) -> Self {
        Self { bits, len }
    }

    /// The empty code at the root of the tree.
    pub fn root() -> Self {
        Self { bits: 0, len: 0 }
    }

    /// This code extended by one edge bit (0 or 1).
    pub fn child(self, edge: u64) -> Self {
        debug_assert!(self.len < MAX_CODE_BITS);
        Self {
            bits: self.bits << 1 | edge,
            len: self.len + 1,
        }
    }
}

impl std::fmt::Debug for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:0width$b}", self.bits, width = self.len as usize)
    }
}

/// Byte value to code, one entry per distinct byte in the input.
pub type CodeTable = FxHashMap<u8, Code>;

/// Flip a code table to code-to-byte form for decoding. Fails when two byte
/// values share one code, which marks a corrupt or foreign frame.
pub fn invert(table: &CodeTable) -> Result<FxHashMap<Code, u8>, CodecError> {
    // Walk entries in byte order so the reported pair is stable.
    let mut entries: Vec<(&u8, &Code)> = table.iter().collect();
    entries.sort_unstable_by_key(|(sym, _)| **sym);

    let mut inverted = FxHashMap::default();
    for (&sym, &code) in entries {
        if let Some(prev) = inverted.insert(code, sym) {
            return Err(CodecError::DuplicateCode(prev, sym));
        }
    }
    Ok(inverted)
}
