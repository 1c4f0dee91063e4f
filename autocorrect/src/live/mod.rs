//! Correcting words as they are typed.
//!
//! Every keystroke is handled to completion on its own. The controller
//! keeps no memory of earlier keystrokes; word positions are recomputed
//! from the buffer each time, so external edits never leave it with stale
//! offsets.
use std::fmt;
use std::ops::Range;

use itertools::Itertools;
use smol_str::SmolStr;

use crate::buffer::locate::{word_before, word_in_progress, LocatedWord};
use crate::buffer::TextBuffer;
use crate::constants::{TRIGGER_KEYS, TRIGGER_PUNCTUATION};
use crate::dictionary::Dictionary;
use crate::speller::suggestion::CandidateList;
use crate::speller::{CandidateRanker, SpellerConfig, Verdict};
use crate::tokenizer::case_handling::preserve_case;
use crate::types::Offset;

pub mod session;

/// A key press: the key's name and the character it produced, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    /// Key name, such as `a`, `space`, `Return` or `BackSpace`
    pub key: SmolStr,
    /// The character typed, if the key produces one
    pub ch: Option<char>,
}

impl KeyEvent {
    /// An event for a named key.
    pub fn new(key: &str, ch: Option<char>) -> KeyEvent {
        KeyEvent {
            key: key.into(),
            ch,
        }
    }

    /// The event for typing `ch`.
    pub fn from_char(ch: char) -> KeyEvent {
        let key: SmolStr = match ch {
            ' ' => "space".into(),
            '\n' | '\r' => "Return".into(),
            '\t' => "Tab".into(),
            c => SmolStr::from(c.to_string()),
        };

        KeyEvent { key, ch: Some(ch) }
    }

    /// Whether this key completes a word.
    pub fn class(&self) -> KeyClass {
        let key = self.key.as_str();
        let mut key_chars = key.chars();
        let single = match (key_chars.next(), key_chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        };

        if TRIGGER_KEYS.iter().any(|k| *k == key)
            || single.map(|c| TRIGGER_PUNCTUATION.contains(&c)).unwrap_or(false)
        {
            return KeyClass::Boundary;
        }

        match self.ch {
            Some(c) if c.is_whitespace() || TRIGGER_PUNCTUATION.contains(&c) => KeyClass::Boundary,
            _ => KeyClass::Ordinary,
        }
    }
}

/// How a keystroke is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyClass {
    /// Whitespace, enter or sentence punctuation: the word before it is done
    Boundary,
    /// Anything else, including keys that are not recognised
    Ordinary,
}

/// A word replaced in the buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    /// Offsets the original word occupied
    pub range: Range<Offset>,
    /// The word that was replaced
    pub original: SmolStr,
    /// What was written in its place
    pub new_text: SmolStr,
}

/// What to show after a keystroke.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayUpdate {
    /// Suggestions for the current word, best first; empty clears the display
    pub suggestions: Vec<SmolStr>,
    /// Set when the keystroke replaced a word
    pub applied_replacement: Option<Replacement>,
}

impl DisplayUpdate {
    /// Nothing to suggest.
    pub fn cleared() -> DisplayUpdate {
        DisplayUpdate::default()
    }

    fn suggestions(list: &CandidateList) -> DisplayUpdate {
        DisplayUpdate {
            suggestions: list.values().to_vec(),
            applied_replacement: None,
        }
    }

    /// True when there is nothing to show.
    pub fn is_cleared(&self) -> bool {
        self.suggestions.is_empty() && self.applied_replacement.is_none()
    }
}

impl fmt::Display for DisplayUpdate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Suggestions: {}", self.suggestions.iter().join(", "))?;

        if let Some(replacement) = &self.applied_replacement {
            write!(f, " (auto → {})", replacement.new_text)?;
        }

        Ok(())
    }
}

/// Turns keystrokes into suggestion updates and, on word boundaries,
/// replacements of the word just completed.
#[derive(Debug, Clone)]
pub struct LiveController<D> {
    ranker: CandidateRanker<D>,
    auto_replace: bool,
}

impl<D: Dictionary> LiveController<D> {
    /// A controller using `config.auto_replace` as its initial setting.
    pub fn new(dictionary: D, config: SpellerConfig) -> LiveController<D> {
        let auto_replace = config.auto_replace;

        LiveController {
            ranker: CandidateRanker::new(dictionary, config),
            auto_replace,
        }
    }

    /// Whether completed words are replaced.
    pub fn auto_replace(&self) -> bool {
        self.auto_replace
    }

    /// Turns replacement of completed words on or off.
    pub fn set_auto_replace(&mut self, enabled: bool) {
        self.auto_replace = enabled;
    }

    /// Handles one keystroke that has already been applied to `buffer`.
    ///
    /// Ordinary keys only refresh suggestions for the word in progress.
    /// Boundary keys check the word just completed and, with auto-replace
    /// on, rewrite that one word in place. No other text is touched.
    pub fn on_keystroke<B: TextBuffer + ?Sized>(
        &self,
        buffer: &mut B,
        event: &KeyEvent,
    ) -> DisplayUpdate {
        let cursor = buffer.cursor_offset();

        match event.class() {
            KeyClass::Ordinary => self.refresh(buffer, cursor),
            KeyClass::Boundary => {
                log::debug!("Boundary key {:?} at {}", event.key, cursor);
                self.complete(buffer, cursor)
            }
        }
    }

    fn misspelled(&self, located: &LocatedWord) -> Option<CandidateList> {
        match self.ranker.check(&located.word) {
            Verdict::Misspelled(list) => Some(list),
            _ => None,
        }
    }

    fn refresh<B: TextBuffer + ?Sized>(&self, buffer: &B, cursor: Offset) -> DisplayUpdate {
        word_in_progress(buffer, cursor)
            .and_then(|located| self.misspelled(&located))
            .map(|list| DisplayUpdate::suggestions(&list))
            .unwrap_or_else(DisplayUpdate::cleared)
    }

    fn complete<B: TextBuffer + ?Sized>(&self, buffer: &mut B, cursor: Offset) -> DisplayUpdate {
        let located = match word_before(&*buffer, cursor) {
            Some(v) => v,
            None => return DisplayUpdate::cleared(),
        };

        let list = match self.misspelled(&located) {
            Some(v) => v,
            None => return DisplayUpdate::cleared(),
        };

        let mut update = DisplayUpdate::suggestions(&list);

        let best = match list.best_guess() {
            Some(best) if self.auto_replace => best,
            _ => return update,
        };

        let range = located.range();
        if buffer.read(range.clone()) != located.word.as_str() {
            log::warn!("{:?} moved before it could be replaced", located.word);
            return update;
        }

        let new_text = preserve_case(&located.word, best);
        log::debug!("Replacing {:?} at {:?} with {:?}", located.word, range, new_text);

        buffer.delete(range.clone());
        buffer.insert(range.start, &new_text);

        update.applied_replacement = Some(Replacement {
            range,
            original: located.word,
            new_text,
        });
        update
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::StringBuffer;
    use crate::testing::{sentence_dictionary, FakeDictionary};

    fn controller(auto_replace: bool) -> LiveController<FakeDictionary> {
        LiveController::new(
            sentence_dictionary(),
            SpellerConfig {
                n_best: 3,
                auto_replace,
            },
        )
    }

    fn type_str<D: Dictionary>(
        controller: &LiveController<D>,
        buffer: &mut StringBuffer,
        text: &str,
    ) -> Vec<DisplayUpdate> {
        text.chars()
            .map(|ch| {
                buffer.insert(buffer.cursor_offset(), &ch.to_string());
                controller.on_keystroke(buffer, &KeyEvent::from_char(ch))
            })
            .collect()
    }

    #[test]
    fn classifies_keys() {
        for ch in [' ', '\n', '\t', '.', ',', '!', '?', ';', ':'] {
            assert_eq!(KeyEvent::from_char(ch).class(), KeyClass::Boundary, "{:?}", ch);
        }
        for ch in ['a', 'Z', '1', '-', '\'', '"'] {
            assert_eq!(KeyEvent::from_char(ch).class(), KeyClass::Ordinary, "{:?}", ch);
        }
        assert_eq!(KeyEvent::new("Return", None).class(), KeyClass::Boundary);
        assert_eq!(KeyEvent::new("KP_Enter", None).class(), KeyClass::Boundary);
        assert_eq!(KeyEvent::new(".", None).class(), KeyClass::Boundary);
        assert_eq!(KeyEvent::new("Shift_L", None).class(), KeyClass::Ordinary);
        assert_eq!(KeyEvent::new("XF86Whatever", None).class(), KeyClass::Ordinary);
    }

    #[test]
    fn ordinary_keys_only_suggest() {
        let controller = controller(true);
        let mut buffer = StringBuffer::new("Ths");

        let update = controller.on_keystroke(&mut buffer, &KeyEvent::from_char('s'));
        assert_eq!(update.suggestions, vec!["this", "the", "thus"]);
        assert_eq!(update.applied_replacement, None);
        assert_eq!(buffer.text(), "Ths");
    }

    #[test]
    fn ordinary_keys_clear_for_valid_ignored_or_missing_words() {
        let controller = controller(true);

        for text in ["this", "th", "AI", "ths2", "ths ", ""] {
            let mut buffer = StringBuffer::new(text);
            let update = controller.on_keystroke(&mut buffer, &KeyEvent::from_char('x'));
            assert!(update.is_cleared(), "{:?}", text);
            assert_eq!(buffer.text(), text);
        }
    }

    #[test]
    fn boundary_replaces_with_case() {
        let controller = controller(true);
        let mut buffer = StringBuffer::new("");

        let updates = type_str(&controller, &mut buffer, "Ths ");
        assert_eq!(buffer.text(), "This ");
        assert_eq!(buffer.cursor_offset(), 5);

        let last = updates.last().unwrap();
        assert_eq!(last.suggestions, vec!["this", "the", "thus"]);
        assert_eq!(
            last.applied_replacement,
            Some(Replacement {
                range: 0..3,
                original: "Ths".into(),
                new_text: "This".into(),
            })
        );
        assert_eq!(last.to_string(), "Suggestions: this, the, thus (auto → This)");

        for update in &updates[..3] {
            assert_eq!(update.applied_replacement, None);
        }
    }

    #[test]
    fn boundary_without_auto_replace_only_suggests() {
        let controller = controller(false);
        let mut buffer = StringBuffer::new("");

        let updates = type_str(&controller, &mut buffer, "smple.");
        assert_eq!(buffer.text(), "smple.");
        let last = updates.last().unwrap();
        assert_eq!(last.suggestions, vec!["simple", "sample"]);
        assert_eq!(last.applied_replacement, None);
        assert_eq!(last.to_string(), "Suggestions: simple, sample");
    }

    #[test]
    fn replaces_nearest_occurrence_only() {
        let controller = controller(true);
        let mut buffer = StringBuffer::new("teh cat sat on teh");
        buffer.insert(buffer.cursor_offset(), " ");

        let update = controller.on_keystroke(&mut buffer, &KeyEvent::from_char(' '));
        assert_eq!(buffer.text(), "teh cat sat on the ");
        assert_eq!(update.applied_replacement.unwrap().range, 15..18);
        assert_eq!(buffer.cursor_offset(), 19);
    }

    #[test]
    fn cursor_keeps_position_after_length_change() {
        let controller = controller(true);
        let mut buffer = StringBuffer::new("");

        type_str(&controller, &mut buffer, "Sentnce, and more");
        assert_eq!(buffer.text(), "Sentence, and more");
        assert_eq!(buffer.cursor_offset(), buffer.len());

        let mut buffer = StringBuffer::with_cursor("ths! tail", 4);
        controller.on_keystroke(&mut buffer, &KeyEvent::from_char('!'));
        assert_eq!(buffer.text(), "this! tail");
        assert_eq!(buffer.cursor_offset(), 5);
    }

    #[test]
    fn boundary_clears_when_nothing_to_do() {
        let controller = controller(true);

        for text in ["this ", "AI ", "to ", "... ", " ", "a1b "] {
            let mut buffer = StringBuffer::new(text);
            let update = controller.on_keystroke(&mut buffer, &KeyEvent::from_char(' '));
            assert!(update.is_cleared(), "{:?}", text);
            assert_eq!(buffer.text(), text);
            assert_eq!(update.to_string(), "Suggestions: ");
        }
    }

    /// A buffer whose prefix reads lag behind edits made by someone else.
    struct LaggingBuffer {
        seen: StringBuffer,
        current: StringBuffer,
    }

    impl TextBuffer for LaggingBuffer {
        fn read(&self, range: Range<Offset>) -> String {
            self.current.read(range)
        }

        fn read_before(&self, offset: Offset) -> String {
            self.seen.read_before(offset)
        }

        fn delete(&mut self, range: Range<Offset>) {
            self.current.delete(range)
        }

        fn insert(&mut self, offset: Offset, text: &str) {
            self.current.insert(offset, text)
        }

        fn cursor_offset(&self) -> Offset {
            self.seen.cursor_offset()
        }
    }

    #[test]
    fn changed_word_is_not_replaced() {
        let controller = controller(true);
        let mut buffer = LaggingBuffer {
            seen: StringBuffer::new("teh "),
            current: StringBuffer::new("tea "),
        };

        let update = controller.on_keystroke(&mut buffer, &KeyEvent::from_char(' '));
        assert_eq!(update.suggestions, vec!["the", "ten", "tea"]);
        assert_eq!(update.applied_replacement, None);
        assert_eq!(buffer.current.text(), "tea ");
    }

    #[test]
    fn no_best_guess_no_mutation() {
        let controller = LiveController::new(
            FakeDictionary::new().candidates_only("smple", &["sample", "simple"]),
            SpellerConfig::default(),
        );
        let mut buffer = StringBuffer::new("smple ");
        let update = controller.on_keystroke(&mut buffer, &KeyEvent::from_char(' '));
        assert_eq!(buffer.text(), "smple ");
        assert_eq!(update.suggestions, vec!["sample", "simple"]);
        assert_eq!(update.applied_replacement, None);
    }

    #[test]
    fn failed_lookup_never_mutates() {
        let controller = LiveController::new(sentence_dictionary().failing("ths"), SpellerConfig::default());
        let mut buffer = StringBuffer::new("ths ");
        let update = controller.on_keystroke(&mut buffer, &KeyEvent::from_char(' '));
        assert!(update.is_cleared());
        assert_eq!(buffer.text(), "ths ");
    }

    #[test]
    fn one_mutation_per_boundary() {
        let controller = controller(true);
        let mut buffer = StringBuffer::new("");

        let updates = type_str(&controller, &mut buffer, "teh smple, ths... erors\n");
        assert_eq!(buffer.text(), "the simple, this... errors\n");

        let applied: Vec<_> = updates
            .iter()
            .filter_map(|u| u.applied_replacement.as_ref())
            .map(|r| r.original.as_str())
            .collect();
        assert_eq!(applied, vec!["teh", "smple", "ths", "erors"]);
    }

    #[test]
    fn toggling_auto_replace() {
        let mut controller = controller(true);
        controller.set_auto_replace(false);
        assert!(!controller.auto_replace());

        let mut buffer = StringBuffer::new("teh ");
        controller.on_keystroke(&mut buffer, &KeyEvent::from_char(' '));
        assert_eq!(buffer.text(), "teh ");
    }
}
