//! Text processing for zero-width embedding.
//!
//! This module provides:
//! - Bit framing of payload characters into cipher symbols
//! - Distribution of the framed stream over carrier gaps
//! - Single-pass scanning of composite text

pub mod distribute;
pub mod framing;
pub mod scanner;

pub use distribute::{distribute, fragment_size, gap_count, DistributeError};
pub use framing::{bit_length, frame, frame_char, framed_len};
pub use scanner::{scan, Scanner};
