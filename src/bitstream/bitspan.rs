/// Indexed bit view over a byte slice. Bit 0 is the most significant bit of
/// the first byte, matching the order the BitPacker wrote them.
#[derive(Debug, Clone, Copy)]
pub struct BitSpan<'a> {
    data: &'a [u8],
}

impl<'a> BitSpan<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    /// Total number of bits in the span.
    pub fn bit_len(&self) -> usize {
        self.data.len() * 8
    }

    /// The bit at the given position (1 or 0).
    pub fn bit(&self, index: usize) -> u8 {
        (self.data[index / 8] >> (7 - index % 8)) & 1
    }

    /// Big-endian unsigned integer from the bits in [start, end). Positions
    /// past the end of the span are dropped, so a field truncated by the end
    /// of the buffer yields the value of the bits that exist.
    pub fn field(&self, start: usize, end: usize) -> u64 {
        let end = end.min(self.bit_len());
        let mut result = 0_u64;
        for index in start..end {
            result = result << 1 | self.bit(index) as u64;
        }
        result
    }
}
