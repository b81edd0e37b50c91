// ABOUTME: Append-only output buffer for server text, rendered as plain line records
// Maps each newline to a line break, escapes control characters, and tracks scrollback

use unicode_width::UnicodeWidthChar;

const TAB_WIDTH: usize = 4;

/// The scrolling output region of the terminal.
///
/// Text is stored as plain lines and never interpreted as markup. The last
/// line is the open line that the next fragment continues.
#[derive(Debug, Clone)]
pub struct TerminalView {
    lines: Vec<String>,
    /// Lines scrolled up from the bottom; 0 follows new output
    scroll_back: usize,
}

impl TerminalView {
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
            scroll_back: 0,
        }
    }

    /// Append server or echo text and scroll to the bottom.
    pub fn display(&mut self, text: &str) {
        let mut segments = text.split('\n');

        if let Some(first) = segments.next() {
            if let Some(open_line) = self.lines.last_mut() {
                push_escaped(open_line, first);
            }
        }
        for segment in segments {
            let mut line = String::with_capacity(segment.len());
            push_escaped(&mut line, segment);
            self.lines.push(line);
        }

        self.scroll_to_bottom();
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of line breaks inserted so far
    pub fn line_breaks(&self) -> usize {
        self.lines.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }

    pub fn scroll_back(&self) -> usize {
        self.scroll_back
    }

    pub fn scroll_up(&mut self, amount: usize) {
        self.scroll_back = (self.scroll_back + amount).min(self.line_breaks());
    }

    pub fn scroll_down(&mut self, amount: usize) {
        self.scroll_back = self.scroll_back.saturating_sub(amount);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_back = 0;
    }

    /// Rows for a viewport `width` columns wide and `height` rows tall.
    ///
    /// Lines wider than the viewport wrap onto extra rows. The last row is the
    /// end of the last line not scrolled away, so the tail of a long line
    /// stays on screen.
    pub fn visible_rows(&self, width: usize, height: usize) -> Vec<String> {
        let end = self.lines.len().saturating_sub(self.scroll_back);
        let mut rows = Vec::with_capacity(height);

        for line in self.lines[..end].iter().rev() {
            if rows.len() == height {
                break;
            }
            let mut wrapped = wrap_line(line, width);
            while let Some(row) = wrapped.pop() {
                if rows.len() == height {
                    break;
                }
                rows.push(row);
            }
        }

        rows.reverse();
        rows
    }
}

impl Default for TerminalView {
    fn default() -> Self {
        Self::new()
    }
}

/// Copy of `text` fit for a single row: newlines and every other control
/// character are escaped.
pub(crate) fn escape_line(text: &str) -> String {
    let mut line = String::with_capacity(text.len());
    push_escaped(&mut line, text);
    line
}

/// Split `line` into rows at most `width` columns wide
fn wrap_line(line: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![line.to_string()];
    }

    let mut rows = Vec::new();
    let mut row = String::new();
    let mut row_width = 0;
    for c in line.chars() {
        let w = c.width().unwrap_or(0);
        if row_width + w > width && !row.is_empty() {
            rows.push(std::mem::take(&mut row));
            row_width = 0;
        }
        row.push(c);
        row_width += w;
    }
    rows.push(row);
    rows
}

/// Append `segment` with control characters made inert.
///
/// `\r` is dropped, tabs become spaces, and any other control character is
/// written in caret notation so it cannot drive the host terminal.
fn push_escaped(line: &mut String, segment: &str) {
    for c in segment.chars() {
        match c {
            '\r' => {}
            '\t' => line.extend(std::iter::repeat(' ').take(TAB_WIDTH)),
            '\u{7f}' => line.push_str("^?"),
            c if c.is_ascii_control() => {
                line.push('^');
                line.push(char::from(c as u8 + b'@'));
            }
            c if c.is_control() => line.push('\u{fffd}'),
            c => line.push(c),
        }
    }
}
