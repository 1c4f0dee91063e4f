/// Upper bound on the number of suggestions ever offered for a word.
pub const MAX_SUGGESTIONS: usize = 3;

/// Words shorter than this (in characters) are never checked.
pub const MIN_WORD_LEN: usize = 3;

/// Characters that complete a word when typed.
pub const TRIGGER_PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':'];

/// Key names that complete a word regardless of the character they carry.
pub const TRIGGER_KEYS: &[&str] = &["space", "Return", "KP_Enter", "Tab"];
