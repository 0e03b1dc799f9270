//! Text input state with cursor handling and horizontal scrolling.
//!
//! Pure editing state: the contact form owns one of these per field and
//! the UI layer renders them. Single-line by default; the message field
//! enables multiline, which only changes whether `\n` may be inserted.

/// Editable text buffer with a cursor.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// The text content
    content: String,
    /// Cursor position as a character index
    cursor: usize,
    /// Whether newlines may be inserted
    multiline: bool,
}

impl TextInput {
    /// Create an empty single-line input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty multiline input.
    pub fn multiline() -> Self {
        Self {
            multiline: true,
            ..Self::default()
        }
    }

    /// Insert a character at the cursor.
    pub fn insert_char(&mut self, c: char) {
        if c == '\n' && !self.multiline {
            return;
        }
        let byte = self.byte_index(self.cursor);
        self.content.insert(byte, c);
        self.cursor += 1;
    }

    /// Insert a whole string at the cursor (paste).
    pub fn insert_str(&mut self, s: &str) {
        for c in s.chars() {
            self.insert_char(c);
        }
    }

    /// Insert a newline, if this input allows them.
    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let byte = self.byte_index(self.cursor);
            self.content.remove(byte);
        }
    }

    /// Delete the character at the cursor.
    pub fn delete_char(&mut self) {
        if self.cursor < self.char_len() {
            let byte = self.byte_index(self.cursor);
            self.content.remove(byte);
        }
    }

    /// Move the cursor one position left, clamped.
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the cursor one position right, clamped.
    pub fn move_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    /// Move the cursor to the start.
    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    /// Move the cursor to the end.
    pub fn move_end(&mut self) {
        self.cursor = self.char_len();
    }

    /// The current content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Cursor position as a character index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the content is empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Clear content and cursor.
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// The slice of content visible in a window of `width` characters,
    /// scrolled so the cursor stays inside, plus the cursor's column
    /// within that window.
    ///
    /// Used by single-line field rendering; multiline fields render the
    /// whole content wrapped instead.
    pub fn visible_window(&self, width: usize) -> (String, usize) {
        if width == 0 {
            return (String::new(), 0);
        }
        // Leave one cell for the cursor block at the right edge.
        let start = if self.cursor >= width {
            self.cursor - width + 1
        } else {
            0
        };
        let window: String = self.content.chars().skip(start).take(width).collect();
        (window, self.cursor - start)
    }

    fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    /// Byte offset of the given character index.
    fn byte_index(&self, char_idx: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_idx)
            .map(|(b, _)| b)
            .unwrap_or(self.content.len())
    }
}
