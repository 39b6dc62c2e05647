use crate::util::unicode;

/// Single-line text buffer backing the add and edit prompts.
///
/// `cursor` is a byte offset into `content` and always sits on a grapheme
/// boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineInput {
    content: String,
    placeholder: String,
    cursor: usize,
}

impl LineInput {
    pub fn new(placeholder: impl Into<String>) -> Self {
        LineInput {
            content: String::new(),
            placeholder: placeholder.into(),
            cursor: 0,
        }
    }

    pub fn value(&self) -> &str {
        &self.content
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Replace the content, leaving the cursor at the end
    pub fn set(&mut self, value: impl Into<String>) {
        self.content = value.into();
        self.cursor = self.content.len();
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.placeholder = placeholder.into();
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    pub fn insert_char(&mut self, c: char) {
        self.content.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Insert text at the cursor. Line breaks become spaces.
    pub fn insert_str(&mut self, text: &str) {
        let clean = text.replace("\r\n", " ").replace(['\n', '\r'], " ");
        self.content.insert_str(self.cursor, &clean);
        self.cursor += clean.len();
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = unicode::prev_grapheme_boundary(&self.content, self.cursor) {
            self.content.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete(&mut self) {
        if let Some(next) = unicode::next_grapheme_boundary(&self.content, self.cursor) {
            self.content.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = unicode::prev_grapheme_boundary(&self.content, self.cursor) {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = unicode::next_grapheme_boundary(&self.content, self.cursor) {
            self.cursor = next;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.content.len();
    }

    /// Kill everything before the cursor
    pub fn clear_to_start(&mut self) {
        self.content.drain(..self.cursor);
        self.cursor = 0;
    }

    /// Terminal column of the cursor, relative to the start of the content
    pub fn cursor_col(&self) -> usize {
        unicode::display_width(&self.content[..self.cursor])
    }
}
