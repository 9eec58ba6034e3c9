//! Deterministic per-word scoring
//!
//! Each word receives a pseudo-random score in `[0, 1)` derived from a
//! stable hash of its text and ordinal position. Replacing a global
//! random source with a call-local hash keeps the transform
//! reproducible across calls, threads, and processes without locks.

use serde::Serialize;

/// Whether the listener understands a given word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Intelligibility {
    /// The word is rendered verbatim
    Understood,
    /// The word is rendered bracketed
    Unintelligible,
}

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Compute the deterministic score for a word
///
/// The score is an FNV-1a hash of the word's ordinal index followed by
/// its bytes, mapped onto `[0, 1)` using the top 53 bits so the result
/// is exactly representable as an `f64`. The same `(text, index)` pair
/// always yields the same score.
pub fn word_score(text: &str, index: usize) -> f64 {
    let mut hash = FNV_OFFSET_BASIS;
    // Index is widened to u64 so the hash does not depend on pointer width.
    for byte in (index as u64).to_le_bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    for &byte in text.as_bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    (hash >> 11) as f64 / (1u64 << 53) as f64
}

/// Decide whether a word is understood at the given comprehension level
///
/// A word is unintelligible iff its score is at least `comprehension`.
/// Because scores always fall in `[0, 1)`, a comprehension of 1.0 or
/// above lets every word through and a comprehension of 0.0 or below
/// (including negative values) garbles every word. The value is taken
/// unclamped; no range check is needed.
pub fn decide(text: &str, index: usize, comprehension: f32) -> Intelligibility {
    if word_score(text, index) >= f64::from(comprehension) {
        Intelligibility::Unintelligible
    } else {
        Intelligibility::Understood
    }
}
