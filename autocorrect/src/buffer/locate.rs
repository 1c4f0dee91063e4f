//! Finding the word just typed before the cursor.
use std::ops::Range;

use smol_str::SmolStr;

use super::TextBuffer;
use crate::tokenizer::{is_letter, is_word_char};
use crate::types::Offset;

/// A run of letters and the character offsets it occupies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedWord {
    /// The word's text as it is in the buffer
    pub word: SmolStr,
    /// Offset of its first character
    pub start: Offset,
    /// Offset just past its last character
    pub end: Offset,
}

impl LocatedWord {
    /// The offsets the word occupies.
    pub fn range(&self) -> Range<Offset> {
        self.start..self.end
    }
}

/// The word ending at or before `cursor`, skipping punctuation and
/// whitespace typed after it.
///
/// Always the closest run of letters before the cursor, even when the same
/// word appears earlier in the document. Nothing is found when the run is
/// part of a longer token with digits or underscores, or when no letters
/// precede the cursor.
pub fn word_before<B: TextBuffer + ?Sized>(buffer: &B, cursor: Offset) -> Option<LocatedWord> {
    locate(buffer, cursor, true)
}

/// The word still being typed: a run of letters ending exactly at `cursor`.
pub fn word_in_progress<B: TextBuffer + ?Sized>(
    buffer: &B,
    cursor: Offset,
) -> Option<LocatedWord> {
    locate(buffer, cursor, false)
}

fn locate<B: TextBuffer + ?Sized>(
    buffer: &B,
    cursor: Offset,
    skip_trailing: bool,
) -> Option<LocatedWord> {
    let before: Vec<char> = buffer.read_before(cursor).chars().collect();

    let end = if skip_trailing {
        before.iter().rposition(|c| is_word_char(*c))? + 1
    } else {
        before.len()
    };

    let start = before[..end]
        .iter()
        .rposition(|c| !is_letter(*c))
        .map(|i| i + 1)
        .unwrap_or(0);

    if start == end || (start > 0 && is_word_char(before[start - 1])) {
        return None;
    }

    let word: SmolStr = before[start..end].iter().copied().collect();

    // Offsets found above are re-checked against the buffer's own search.
    let resolved = buffer.find_nearest_preceding(&word, end)?;
    if resolved != start {
        log::trace!("{:?} resolved to {} instead of {}", word, resolved, start);
        return None;
    }

    log::trace!("Located {:?} at {}..{}", word, start, end);
    Some(LocatedWord { word, start, end })
}
