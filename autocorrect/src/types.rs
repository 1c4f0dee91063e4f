/// Absolute character index into a text buffer.
pub type Offset = usize;

/// Occurrence count of a word in a frequency list.
pub type Frequency = u64;
