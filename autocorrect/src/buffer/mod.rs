//! The editable text the live controller works on.
use std::ops::Range;

use crate::tokenizer::is_word_char;
use crate::types::Offset;

pub mod locate;

/// An editable text with a cursor, addressed by character offsets.
///
/// Offsets are plain values: callers query them right before use and never
/// keep them across edits.
pub trait TextBuffer {
    /// The text in `range`, clamped to the buffer.
    fn read(&self, range: Range<Offset>) -> String;
    /// All text from the start of the document up to `offset`.
    fn read_before(&self, offset: Offset) -> String;
    /// Removes the text in `range`.
    fn delete(&mut self, range: Range<Offset>);
    /// Inserts `text` at `offset`.
    fn insert(&mut self, offset: Offset, text: &str);
    /// Where the cursor currently is.
    fn cursor_offset(&self) -> Offset;

    /// Start of the occurrence of `word` closest to, and ending at or before,
    /// `before`, where the occurrence is not glued to other word characters.
    fn find_nearest_preceding(&self, word: &str, before: Offset) -> Option<Offset> {
        let needle: Vec<char> = word.chars().collect();
        if needle.is_empty() {
            return None;
        }

        let haystack: Vec<char> = self.read_before(before).chars().collect();
        let after = self.read(haystack.len()..haystack.len() + 1).chars().next();

        (0..=haystack.len().checked_sub(needle.len())?)
            .rev()
            .find(|&start| {
                let end = start + needle.len();
                let next = haystack.get(end).copied().or(after);

                haystack[start..end] == needle[..]
                    && (start == 0 || !is_word_char(haystack[start - 1]))
                    && !next.map(is_word_char).unwrap_or(false)
            })
    }
}

/// A [`TextBuffer`] held in memory.
///
/// The cursor behaves like an insertion mark: text inserted at or before it
/// pushes it right, deleted text before it pulls it left.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringBuffer {
    chars: Vec<char>,
    cursor: Offset,
}

impl StringBuffer {
    /// A buffer holding `text` with the cursor at its end.
    pub fn new(text: &str) -> StringBuffer {
        let chars: Vec<char> = text.chars().collect();
        let cursor = chars.len();
        StringBuffer { chars, cursor }
    }

    /// A buffer holding `text` with the cursor at `cursor` (clamped).
    pub fn with_cursor(text: &str, cursor: Offset) -> StringBuffer {
        let mut buffer = StringBuffer::new(text);
        buffer.set_cursor(cursor);
        buffer
    }

    /// Moves the cursor, clamped to the buffer.
    pub fn set_cursor(&mut self, cursor: Offset) {
        self.cursor = cursor.min(self.chars.len());
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// True when the buffer holds no text.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The whole text.
    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    fn clamp(&self, range: Range<Offset>) -> Range<Offset> {
        let end = range.end.min(self.chars.len());
        range.start.min(end)..end
    }
}

impl TextBuffer for StringBuffer {
    fn read(&self, range: Range<Offset>) -> String {
        self.chars[self.clamp(range)].iter().collect()
    }

    fn read_before(&self, offset: Offset) -> String {
        self.read(0..offset)
    }

    fn delete(&mut self, range: Range<Offset>) {
        let range = self.clamp(range);
        let len = range.len();

        if self.cursor >= range.end {
            self.cursor -= len;
        } else if self.cursor > range.start {
            self.cursor = range.start;
        }

        self.chars.drain(range);
    }

    fn insert(&mut self, offset: Offset, text: &str) {
        let offset = offset.min(self.chars.len());
        let before = self.chars.len();

        self.chars.splice(offset..offset, text.chars());

        if offset <= self.cursor {
            self.cursor += self.chars.len() - before;
        }
    }

    fn cursor_offset(&self) -> Offset {
        self.cursor
    }
}
