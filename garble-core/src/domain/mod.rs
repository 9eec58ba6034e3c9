//! Domain layer for the garbling algorithm
//!
//! This module contains the pure logic: span tokenization, the
//! deterministic per-word scoring function, and the assembler that
//! rebuilds the output string. Nothing here performs I/O or holds
//! state between calls.

pub mod assembler;
pub mod score;
pub mod span;

pub use assembler::{assemble, garble, Rendered};
pub use score::{decide, word_score, Intelligibility};
pub use span::{tokenize, Span, SpanKind};
