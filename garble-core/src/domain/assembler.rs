//! Output assembly
//!
//! Walks the span sequence in order, emitting separators verbatim and
//! wrapping unintelligible words in markers. Everything outside the
//! inserted markers is preserved byte-for-byte.

use crate::domain::score::{decide, Intelligibility};
use crate::domain::span::{tokenize, Span};

/// Default markers wrapped around unintelligible words
pub const DEFAULT_MARKERS: (&str, &str) = ("[", "]");

/// Result of assembling a garbled message
#[derive(Debug, Clone)]
pub struct Rendered<'a> {
    /// The assembled output text
    pub text: String,
    /// Word spans judged unintelligible, with their word-ordinal index
    pub garbled: Vec<(usize, Span<'a>)>,
    /// Total number of word spans in the input
    pub words_total: usize,
}

/// Tokenize, decide per word, and rebuild the output string
///
/// Separator spans pass through unchanged; word spans are wrapped in
/// `markers` when the listener fails to understand them.
pub fn assemble<'a>(text: &'a str, comprehension: f32, markers: (&str, &str)) -> Rendered<'a> {
    let (open, close) = markers;
    let mut output = String::with_capacity(text.len());
    let mut garbled = Vec::new();
    let mut word_index = 0;

    for span in tokenize(text) {
        if !span.is_word() {
            output.push_str(span.text);
            continue;
        }
        match decide(span.text, word_index, comprehension) {
            Intelligibility::Understood => output.push_str(span.text),
            Intelligibility::Unintelligible => {
                output.push_str(open);
                output.push_str(span.text);
                output.push_str(close);
                garbled.push((word_index, span));
            }
        }
        word_index += 1;
    }

    Rendered {
        text: output,
        garbled,
        words_total: word_index,
    }
}

/// Render a message at the given comprehension level
///
/// This is the single pure operation of the crate: the returned string
/// is the input with every word the listener cannot understand wrapped
/// in square brackets. It never fails and has no side effects, so it
/// may be called concurrently without synchronization.
pub fn garble(text: &str, comprehension: f32) -> String {
    assemble(text, comprehension, DEFAULT_MARKERS).text
}
