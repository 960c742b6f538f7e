use log::trace;

use crate::bitstream::bitpacker::BitPacker;
use crate::huffman::code::{Code, CodeTable};

/// Longest run a single counted token may carry. The count field is eight
/// bits, but the decoder tells a count apart from a lone-occurrence flag by
/// the first bit alone, so counts with the top bit set must never be
/// written. Longer runs are split across several tokens instead.
pub const MAX_COUNT: usize = 127;

/// A maximal stretch of one repeated byte value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub value: u8,
    pub length: usize,
}

/// The bit rendering of one run (or one slice of a long run).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// The value's code followed by a 1 flag bit, repeated reps (1-2) times.
    Literal { code: Code, reps: u8 },
    /// The value's code once, followed by an eight bit big-endian count in
    /// 3..=MAX_COUNT.
    Counted { code: Code, count: u8 },
}

/// Partition data into maximal runs, in input order. The open run is
/// threaded through the scan as an explicit accumulator and flushed after
/// the last byte; dropping that flush would lose the trailing run.
pub fn runs(data: &[u8]) -> Vec<Run> {
    let mut out = Vec::new();
    if data.is_empty() {
        return out;
    }

    // The open run starts at the first byte with length zero; the first
    // loop pass counts it.
    let mut open = Run {
        value: data[0],
        length: 0,
    };
    for &byte in data {
        if byte == open.value {
            open.length += 1;
        } else {
            out.push(open);
            open = Run {
                value: byte,
                length: 1,
            };
        }
    }
    out.push(open);
    out
}

/// Render each run as tokens using the code table. Lengths one and two take
/// the flag-bit form; longer runs take the counted form, split so no count
/// exceeds MAX_COUNT. A remainder of one or two falls back to the flag-bit
/// form.
pub fn tokenize(runs: &[Run], table: &CodeTable) -> Vec<Token> {
    let mut out = Vec::with_capacity(runs.len());
    for run in runs {
        let code = table[&run.value];
        let mut left = run.length;
        while left > MAX_COUNT {
            out.push(Token::Counted {
                code,
                count: MAX_COUNT as u8,
            });
            left -= MAX_COUNT;
        }
        match left {
            0 => {}
            1 | 2 => out.push(Token::Literal {
                code,
                reps: left as u8,
            }),
            _ => out.push(Token::Counted {
                code,
                count: left as u8,
            }),
        }
    }
    out
}

/// Concatenate the token bit-strings, in order, into a byte-aligned payload.
/// Zero padding is appended only at the very end of the stream.
pub fn pack_tokens(tokens: &[Token], size_hint: usize) -> BitPacker {
    let mut bp = BitPacker::new(size_hint);
    for token in tokens {
        match token {
            Token::Literal { code, reps } => {
                for _ in 0..*reps {
                    bp.push_bits(code.bits, code.len);
                    bp.push_bits(1, 1);
                }
            }
            Token::Counted { code, count } => {
                bp.push_bits(code.bits, code.len);
                bp.push_bits(*count as u64, 8);
            }
        }
    }
    bp.flush();
    trace!(
        "packed {} tokens into {} bytes ({} padding bits)",
        tokens.len(),
        bp.output.len(),
        bp.padding
    );
    bp
}

#[cfg(test)]
mod test {
    use super::{pack_tokens, runs, tokenize, Run, Token};
    use crate::huffman::code::{Code, CodeTable};

    fn ab_table() -> CodeTable {
        let mut table = CodeTable::default();
        table.insert(b'a', Code::new(0b1, 1));
        table.insert(b'b', Code::new(0b0, 1));
        table
    }

    #[test]
    fn runs_test() {
        assert_eq!(
            runs(b"aaab"),
            vec![
                Run {
                    value: b'a',
                    length: 3
                },
                Run {
                    value: b'b',
                    length: 1
                }
            ]
        );
    }

    #[test]
    fn trailing_run_is_flushed_test() {
        // The scan must close the run still open when the data ends.
        let r = runs(b"abbb");
        assert_eq!(r.len(), 2);
        assert_eq!(
            r[1],
            Run {
                value: b'b',
                length: 3
            }
        );
    }

    #[test]
    fn single_byte_run_test() {
        assert_eq!(
            runs(b"z"),
            vec![Run {
                value: b'z',
                length: 1
            }]
        );
    }

    #[test]
    fn length_boundary_test() {
        let table = ab_table();
        let code = table[&b'a'];
        // Length two stays in the flag-bit form, length three switches to
        // the count field.
        let two = tokenize(
            &[Run {
                value: b'a',
                length: 2,
            }],
            &table,
        );
        assert_eq!(two, vec![Token::Literal { code, reps: 2 }]);
        let three = tokenize(
            &[Run {
                value: b'a',
                length: 3,
            }],
            &table,
        );
        assert_eq!(three, vec![Token::Counted { code, count: 3 }]);
    }

    #[test]
    fn long_run_split_test() {
        let table = ab_table();
        let code = table[&b'a'];
        let split = |length| {
            tokenize(&[Run {
                value: b'a',
                length,
            }], &table)
        };
        assert_eq!(
            split(128),
            vec![
                Token::Counted { code, count: 127 },
                Token::Literal { code, reps: 1 }
            ]
        );
        assert_eq!(
            split(254),
            vec![
                Token::Counted { code, count: 127 },
                Token::Counted { code, count: 127 }
            ]
        );
        assert_eq!(
            split(300),
            vec![
                Token::Counted { code, count: 127 },
                Token::Counted { code, count: 127 },
                Token::Counted { code, count: 46 }
            ]
        );
    }

    #[test]
    fn pack_tokens_test() {
        let table = ab_table();
        let tokens = tokenize(&runs(b"aaab"), &table);
        let bp = pack_tokens(&tokens, 16);
        // "1" + count 3, then "0" + flag: 1 00000011 01 padded to 16 bits.
        assert_eq!(bp.output, vec![0b1000_0001, 0b1010_0000]);
        assert_eq!(bp.padding, 5);
    }
}
