//! Spreading a framed stream across the gaps of a carrier.
//!
//! A carrier of `N` characters has `K = N - 1` interior gaps. The stream of
//! `L` symbols is cut into exactly `K` fragments of `S = ceil(L / K)` symbols,
//! front-loaded: full fragments first, then the remainder, then empty
//! fragments until there are `K` of them.
//!
//! ```text
//! L = 5, K = 4  ->  S = 2  ->  [2, 2, 1, 0]
//! L = 8, K = 3  ->  S = 3  ->  [3, 3, 2]
//! ```
//!
//! Trailing fragments are often empty when `L` is small relative to `K`.
//! That is accepted; no attempt is made to even the distribution out.

use thiserror::Error;

/// Errors that can occur while distributing a stream.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DistributeError {
    #[error("Carrier has {len} character(s); at least 2 are needed to leave a gap")]
    InsufficientCarrier { len: usize },
}

/// Number of gaps available in a carrier of `carrier_len` characters.
pub fn gap_count(carrier_len: usize) -> Result<usize, DistributeError> {
    if carrier_len < 2 {
        return Err(DistributeError::InsufficientCarrier { len: carrier_len });
    }
    Ok(carrier_len - 1)
}

/// Fragment size `ceil(stream_len / gaps)`. Zero for an empty stream.
pub fn fragment_size(stream_len: usize, gaps: usize) -> usize {
    if gaps == 0 {
        return stream_len;
    }
    stream_len.div_ceil(gaps)
}

/// Cuts `stream` into exactly `carrier_len - 1` fragments.
///
/// Fragment lengths (in characters) always sum to the stream length.
pub fn distribute(stream: &str, carrier_len: usize) -> Result<Vec<String>, DistributeError> {
    let gaps = gap_count(carrier_len)?;
    let symbols: Vec<char> = stream.chars().collect();
    let size = fragment_size(symbols.len(), gaps);

    let mut fragments: Vec<String> = Vec::with_capacity(gaps);
    if size > 0 {
        fragments.extend(symbols.chunks(size).map(|chunk| chunk.iter().collect::<String>()));
    }
    fragments.resize(gaps, String::new());

    Ok(fragments)
}
