//! Message file discovery
//!
//! Expands the patterns given on the command line into the list of
//! message files to render. Reading and UTF-8 validation happen in
//! garble-core via [`garble_core::Input`].

use anyhow::{Context, Result};
use glob::glob;
use std::path::PathBuf;

/// Expand message-file patterns into a stable list of paths
///
/// Each pattern may be a literal path or a glob. Matches that are not
/// regular files are skipped. The list is sorted and deduplicated so
/// batch output order does not depend on shell expansion order.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = Vec::new();

    for pattern in patterns {
        let matches =
            glob(pattern).with_context(|| format!("Invalid message file pattern: {pattern}"))?;

        for entry in matches {
            let path = entry.with_context(|| format!("Failed to expand pattern: {pattern}"))?;
            if path.is_file() {
                files.push(path);
            }
        }
    }

    files.sort();
    files.dedup();

    if files.is_empty() {
        anyhow::bail!("No message files matched the given patterns");
    }

    Ok(files)
}
