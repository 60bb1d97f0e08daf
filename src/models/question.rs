//! Editable question buffer.
//!
//! The cursor is tracked as a character index so multi-byte input never
//! splits a code point. Layout is measured in terminal columns.

use unicode_width::UnicodeWidthChar;

/// Multi-line text buffer with a single cursor
#[derive(Debug, Clone, Default)]
pub struct QuestionInput {
    text: String,
    cursor: usize,
}

/// Text hard-wrapped into display rows, with the cursor's row/column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputLayout {
    pub rows: Vec<String>,
    pub cursor_row: usize,
    pub cursor_col: usize,
}

impl QuestionInput {
    pub fn value(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// True when there is nothing but whitespace to submit
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
    }

    /// Insert a block of text at the cursor, normalizing line endings to `\n`
    pub fn insert_str(&mut self, text: &str) {
        let text = text.replace("\r\n", "\n").replace('\r', "\n");
        let at = self.byte_index(self.cursor);
        self.text.insert_str(at, &text);
        self.cursor += text.chars().count();
    }

    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.text.remove(at);
    }

    pub fn delete(&mut self) {
        if self.cursor >= self.char_count() {
            return;
        }
        let at = self.byte_index(self.cursor);
        self.text.remove(at);
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    /// Move to the start of the current line
    pub fn move_home(&mut self) {
        let before: Vec<char> = self.text.chars().take(self.cursor).collect();
        self.cursor = match before.iter().rposition(|&c| c == '\n') {
            Some(newline) => newline + 1,
            None => 0,
        };
    }

    /// Move to the end of the current line
    pub fn move_end(&mut self) {
        let remaining = self.text.chars().skip(self.cursor).position(|c| c == '\n');
        self.cursor = match remaining {
            Some(offset) => self.cursor + offset,
            None => self.char_count(),
        };
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Hard-wrap every line at `width` columns and locate the cursor.
    ///
    /// A character that does not fit in what is left of a row starts the
    /// next one. A cursor sitting right after a row that exactly fills the
    /// width is placed on a fresh empty row.
    pub fn layout(&self, width: u16) -> InputLayout {
        let width = usize::from(width.max(1));
        let mut rows = Vec::new();
        let mut cursor_row = 0;
        let mut cursor_col = 0;
        let mut line_start = 0;

        for line in self.text.split('\n') {
            let mut row = String::new();
            let mut row_width = 0;
            let mut line_len = 0;

            for c in line.chars() {
                let char_width = c.width().unwrap_or(0);
                if row_width + char_width > width && !row.is_empty() {
                    rows.push(std::mem::take(&mut row));
                    row_width = 0;
                }
                if self.cursor == line_start + line_len {
                    cursor_row = rows.len();
                    cursor_col = row_width;
                }
                row.push(c);
                row_width += char_width;
                line_len += 1;
            }

            if self.cursor == line_start + line_len {
                if row_width >= width {
                    rows.push(std::mem::take(&mut row));
                    row_width = 0;
                }
                cursor_row = rows.len();
                cursor_col = row_width;
            }
            rows.push(row);

            line_start += line_len + 1;
        }

        InputLayout {
            rows,
            cursor_row,
            cursor_col,
        }
    }
}
