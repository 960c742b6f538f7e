use log::error;

/// Packs token bit-strings into a byte-aligned buffer.
pub struct BitPacker {
    pub output: Vec<u8>,
    /// Number of zero bits flush() appended to fill the last byte.
    pub padding: u8,
    queue: u64,
    q_bits: u8,
}

impl BitPacker {
    /// Create a new BitPacker with an output buffer of the size specified.
    /// Call flush() to empty the bit queue into the buffer before reading
    /// the output.
    pub fn new(size: usize) -> Self {
        Self {
            output: Vec::with_capacity(size),
            padding: 0,
            queue: 0,
            q_bits: 0,
        }
    }

    /// Internal bitstream write function common to the push_XX functions.
    fn write_stream(&mut self) {
        while self.q_bits > 7 {
            let byte = (self.queue >> (self.q_bits - 8)) as u8;
            self.output.push(byte); //push the packed byte out
            self.q_bits -= 8; //adjust the count of bits left in the queue
        }
    }

    /// Append the depth least significant bits of data, most significant
    /// first. Depth may be 0-64.
    pub fn push_bits(&mut self, data: u64, depth: u8) {
        // The queue drains below 8 bits after every push, but 7 held bits
        // plus 64 new ones overflow it. Split wide pushes in two.
        if depth > 32 {
            self.push_bits(data >> 32, depth - 32);
            self.push_bits(data & 0xffff_ffff, 32);
            return;
        }
        if depth == 0 {
            return;
        }
        self.queue <<= depth; //shift queue by bit length
        self.queue |= data & (u64::MAX >> (64 - depth)); //add data portion to queue
        self.q_bits += depth; //update depth of queue bits
        self.write_stream();
    }

    /// Append one whole byte.
    pub fn push_byte(&mut self, data: u8) {
        self.push_bits(data as u64, 8);
    }

    /// Flushes the remaining bits (1-7) from the queue, padding with 0s in
    /// the least significant bits and recording the padding count.
    pub fn flush(&mut self) {
        self.padding = (8 - self.q_bits % 8) % 8;
        if self.q_bits > 0 {
            self.queue <<= self.padding; //pad the queue with zeros
            self.q_bits += self.padding;
            self.write_stream(); // write out all that is left
            if self.q_bits > 0 {
                error!("Stuff left in the BitPacker queue.");
            }
        }
    }

    /// Debugging function to return the number of bytes.bits output so far.
    pub fn loc(&self) -> String {
        format! {"[{}.{}]", ((self.output.len() * 8) + self.q_bits as usize) / 8, ((self.output.len() * 8) + self.q_bits as usize) % 8}
    }
}
