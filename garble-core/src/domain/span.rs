//! Span tokenization
//!
//! Splits input text into an ordered sequence of word and separator
//! spans. The spans partition the input with no gaps or overlaps, so
//! concatenating them in order reproduces the original string
//! byte-for-byte.

use serde::Serialize;

/// Classification of a tokenized span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SpanKind {
    /// A maximal run of letters, possibly with internal apostrophes
    Word,
    /// A maximal run of everything else (whitespace, digits, punctuation)
    Separator,
}

/// A contiguous slice of the input text
///
/// Spans borrow from the input rather than copying it; the tokenizer
/// never allocates per-character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'a> {
    /// Whether this span is a word or a separator
    pub kind: SpanKind,
    /// The exact substring covered by this span
    pub text: &'a str,
    /// Byte offset of the span start in the original text
    pub start: usize,
}

impl Span<'_> {
    /// True if this span is a word span
    pub fn is_word(&self) -> bool {
        self.kind == SpanKind::Word
    }
}

/// Split text into word and separator spans
///
/// A word character is any Unicode letter. An ASCII apostrophe counts
/// as part of a word only when flanked by letters on both sides, so
/// contractions (`doesn't`) and possessives (`John's`) stay intact
/// while quoting apostrophes (`'hello'`) fall into separator spans.
///
/// Empty input yields an empty span sequence.
pub fn tokenize(text: &str) -> Vec<Span<'_>> {
    let mut spans = Vec::new();
    let mut start = 0;
    let mut current: Option<SpanKind> = None;
    let mut prev_is_letter = false;

    let mut chars = text.char_indices().peekable();
    while let Some((pos, ch)) = chars.next() {
        let next_is_letter = chars
            .peek()
            .map_or(false, |&(_, next)| next.is_alphabetic());
        let kind = if ch.is_alphabetic() || (ch == '\'' && prev_is_letter && next_is_letter) {
            SpanKind::Word
        } else {
            SpanKind::Separator
        };

        match current {
            Some(k) if k == kind => {}
            Some(k) => {
                spans.push(Span {
                    kind: k,
                    text: &text[start..pos],
                    start,
                });
                start = pos;
                current = Some(kind);
            }
            None => current = Some(kind),
        }
        prev_is_letter = ch.is_alphabetic();
    }

    if let Some(kind) = current {
        spans.push(Span {
            kind,
            text: &text[start..],
            start,
        });
    }

    spans
}
