//! Assembled workflow document
//!
//! Accumulates the header and step blocks with normalized join points:
//! consecutive blocks are separated by exactly one blank line and the
//! rendered document always ends with a single trailing newline.

use crate::core::editor::normalize_newlines;
use std::fs;
use std::io;
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct Document {
    text: String,
}

impl Document {
    /// Start a document from the (already transformed) header text.
    pub fn new(header: &str) -> Self {
        let mut text = normalize_newlines(header);
        if !text.is_empty() && !text.ends_with('\n') {
            text.push('\n');
        }
        Self { text }
    }

    /// Append a block, separated from the preceding content by exactly
    /// one blank line. Leading and trailing blank lines on either side
    /// of the join point are collapsed so blocks are never glued
    /// together and extra blank lines never accumulate.
    pub fn append_block(&mut self, block: &str) {
        let block = normalize_newlines(block);
        let block = block.trim_matches('\n');
        if block.is_empty() {
            return;
        }
        if self.text.is_empty() {
            self.text = format!("{block}\n");
            return;
        }
        while self.text.ends_with("\n\n") {
            self.text.pop();
        }
        self.text.push('\n');
        self.text.push_str(block);
        self.text.push('\n');
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Write the document, creating missing parent directories first.
    pub fn write_to(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, &self.text)
    }
}
