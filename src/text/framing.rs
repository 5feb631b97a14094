//! Bit framing: payload characters to a stream of cipher symbols.
//!
//! Each payload character becomes the minimal binary rendering of its
//! codepoint (most significant digit first, a single `0` for U+0000), every
//! digit mapped through the alphabet, followed by one terminator symbol:
//!
//! ```text
//! 'A' = U+0041 = 1000001  ->  one zero zero zero zero zero one terminator
//! ```
//!
//! There is no length prefix and no padding. The terminator is the only
//! framing, so the stream for a payload of `n` characters holds exactly `n`
//! terminators.

use crate::cipher::CipherAlphabet;

/// Number of binary digits in the minimal rendering of `c`'s codepoint.
///
/// Always at least 1 (U+0000 renders as `0`), at most 21 (U+10FFFF).
pub fn bit_length(c: char) -> usize {
    let value = c as u32;
    (u32::BITS - value.leading_zeros()).max(1) as usize
}

/// Appends the framed symbols of a single character to `out`.
pub fn frame_char(c: char, cipher: &CipherAlphabet, out: &mut String) {
    let value = c as u32;
    for shift in (0..bit_length(c)).rev() {
        out.push(cipher.bit((value >> shift) & 1 == 1));
    }
    out.push(cipher.terminator());
}

/// Frames a whole payload. An empty payload yields an empty stream.
pub fn frame(payload: &str, cipher: &CipherAlphabet) -> String {
    let mut stream = String::with_capacity(framed_len(payload) * cipher.one().len_utf8());
    for c in payload.chars() {
        frame_char(c, cipher, &mut stream);
    }
    stream
}

/// Length in symbols of `frame(payload, _)`, computed without building it.
pub fn framed_len(payload: &str) -> usize {
    payload.chars().map(|c| bit_length(c) + 1).sum()
}
