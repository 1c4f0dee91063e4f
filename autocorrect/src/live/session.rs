//! A controller and its buffer, safe to feed from several threads.
use parking_lot::Mutex;

use super::{DisplayUpdate, KeyEvent, LiveController};
use crate::buffer::TextBuffer;
use crate::dictionary::Dictionary;

/// Owns a buffer and applies keystrokes to it one at a time.
///
/// Typing a key edits the buffer and runs the controller under a single
/// lock, so at most one keystroke, and one word replacement, is in flight.
pub struct Session<D, B> {
    controller: LiveController<D>,
    buffer: Mutex<B>,
}

impl<D: Dictionary, B: TextBuffer> Session<D, B> {
    /// Starts a session over `buffer`.
    pub fn new(controller: LiveController<D>, buffer: B) -> Session<D, B> {
        Session {
            controller,
            buffer: Mutex::new(buffer),
        }
    }

    /// Applies the key to the buffer at the cursor, then handles it.
    ///
    /// `BackSpace` removes the character before the cursor; keys carrying
    /// a printable character, whitespace included, insert it. Other keys
    /// leave the text alone.
    pub fn type_key(&self, event: &KeyEvent) -> DisplayUpdate {
        let mut buffer = self.buffer.lock();
        let cursor = buffer.cursor_offset();

        match event.ch {
            _ if event.key == "BackSpace" => {
                if cursor > 0 {
                    buffer.delete(cursor - 1..cursor);
                }
            }
            Some('\r') => buffer.insert(cursor, "\n"),
            Some(ch) if ch.is_whitespace() || !ch.is_control() => {
                buffer.insert(cursor, ch.encode_utf8(&mut [0; 4]))
            }
            _ => {}
        }

        self.controller.on_keystroke(&mut *buffer, event)
    }

    /// Types every character of `text`, returning one update per character.
    pub fn type_str(&self, text: &str) -> Vec<DisplayUpdate> {
        text.chars()
            .map(|ch| self.type_key(&KeyEvent::from_char(ch)))
            .collect()
    }

    /// Runs `f` with the buffer locked.
    pub fn with_buffer<R>(&self, f: impl FnOnce(&B) -> R) -> R {
        f(&self.buffer.lock())
    }

    /// The controller handling keystrokes.
    pub fn controller(&self) -> &LiveController<D> {
        &self.controller
    }

    /// Ends the session, returning the buffer.
    pub fn into_buffer(self) -> B {
        self.buffer.into_inner()
    }
}
