//! Output types for the API

use std::time::Duration;

use serde::Serialize;

use crate::domain::assembler::Rendered;

/// Processing output with the rendered text and metadata
#[derive(Debug, Clone)]
pub struct Output {
    /// The rendered message, with unintelligible words wrapped in markers
    pub text: String,
    /// Words that were rendered unintelligible
    pub garbled: Vec<GarbledWord>,
    /// Processing metadata
    pub metadata: ProcessingMetadata,
}

/// A word the listener failed to understand
#[derive(Debug, Clone, Serialize)]
pub struct GarbledWord {
    /// The word text as it appeared in the input (markers excluded)
    pub text: String,
    /// Byte offset of the word in the original text
    pub start: usize,
    /// Ordinal position among word spans in the input
    pub index: usize,
}

/// Metadata about the processing
#[derive(Debug, Clone)]
pub struct ProcessingMetadata {
    /// Total processing duration
    pub duration: Duration,
    /// Additional statistics
    pub stats: ProcessingStats,
}

/// Additional processing statistics
#[derive(Debug, Clone, Serialize)]
pub struct ProcessingStats {
    /// Total bytes processed
    pub bytes_processed: usize,
    /// Number of word spans in the input
    pub words_total: usize,
    /// Number of words rendered unintelligible
    pub words_garbled: usize,
}

impl Output {
    /// Create output from an assembled rendering
    pub(crate) fn from_rendered(rendered: Rendered<'_>, source: &str, duration: Duration) -> Self {
        let garbled = rendered
            .garbled
            .iter()
            .map(|&(index, span)| GarbledWord {
                text: span.text.to_string(),
                start: span.start,
                index,
            })
            .collect::<Vec<_>>();

        Self {
            metadata: ProcessingMetadata {
                duration,
                stats: ProcessingStats {
                    bytes_processed: source.len(),
                    words_total: rendered.words_total,
                    words_garbled: garbled.len(),
                },
            },
            garbled,
            text: rendered.text,
        }
    }
}
