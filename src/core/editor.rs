//! Line-based text editing for template splicing
//!
//! The header transforms (env injection, trigger rewriting) are
//! textual edits keyed on marker lines and indentation. Templates are
//! never parsed as YAML; this editor works over an ordered sequence of
//! lines and keeps the splice logic out of the header code.

/// Convert CRLF line endings to bare LF.
pub fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n")
}

/// An editable sequence of lines split from a text blob.
///
/// Line endings are normalized on construction; `render` restores the
/// original trailing-newline state.
#[derive(Debug, Clone)]
pub struct LineEditor {
    lines: Vec<String>,
    trailing_newline: bool,
}

impl LineEditor {
    pub fn new(text: &str) -> Self {
        let normalized = normalize_newlines(text);
        let trailing_newline = normalized.ends_with('\n');
        let lines = normalized.lines().map(str::to_string).collect();
        Self {
            lines,
            trailing_newline,
        }
    }

    /// Index of the first line whose trimmed content equals `marker`.
    pub fn find_marker(&self, marker: &str) -> Option<usize> {
        self.lines.iter().position(|line| line.trim() == marker)
    }

    /// Insert `new_lines` immediately after line `index`.
    pub fn insert_after(&mut self, index: usize, new_lines: &[String]) {
        for (offset, line) in new_lines.iter().enumerate() {
            self.lines.insert(index + 1 + offset, line.clone());
        }
    }

    /// Insert `new_lines` before the entire content.
    pub fn prepend(&mut self, new_lines: &[String]) {
        for (offset, line) in new_lines.iter().enumerate() {
            self.lines.insert(offset, line.clone());
        }
    }

    /// Drop every line containing `needle`, returning how many were removed.
    pub fn remove_containing(&mut self, needle: &str) -> usize {
        let before = self.lines.len();
        self.lines.retain(|line| !line.contains(needle));
        before - self.lines.len()
    }

    /// Remove the indented sub-block immediately following line `index`.
    ///
    /// A line belongs to the sub-block while its indentation is strictly
    /// deeper than the marker line's. Blank lines are consumed only when
    /// a deeper-indented line follows them, so the gap separating the
    /// block from the next top-level section survives. Returns the
    /// number of removed lines.
    pub fn remove_indented_block(&mut self, index: usize) -> usize {
        let marker_indent = indent_width(&self.lines[index]);
        let mut cursor = index + 1;
        let mut last_in_block = index;
        while cursor < self.lines.len() {
            let line = &self.lines[cursor];
            if line.trim().is_empty() {
                cursor += 1;
                continue;
            }
            if indent_width(line) > marker_indent {
                last_in_block = cursor;
                cursor += 1;
            } else {
                break;
            }
        }
        if last_in_block == index {
            return 0;
        }
        let removed = last_in_block - index;
        self.lines.drain(index + 1..=last_in_block);
        removed
    }

    /// Render back to text.
    pub fn render(&self) -> String {
        let mut text = self.lines.join("\n");
        if self.trailing_newline {
            text.push('\n');
        }
        text
    }
}

fn indent_width(line: &str) -> usize {
    line.len() - line.trim_start().len()
}
