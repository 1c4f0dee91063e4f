/*! Real-time and batch autocorrection.

Finds the word being typed in an editable buffer, decides whether it is
misspelled, ranks corrections and optionally replaces the word while
keeping its original casing. The same components drive a one-shot batch
pass over a whole text.

Spelling knowledge comes from a [`Dictionary`](dictionary::Dictionary)
collaborator and the editable text from a
[`TextBuffer`](buffer::TextBuffer); neither is global state.

# Usage examples

```
use autocorrect::dictionary::WordList;
use autocorrect::pipeline::{correct, Mode};

let dictionary = WordList::from_frequencies(vec![
    ("this", 10),
    ("is", 8),
    ("simple", 4),
    ("sentence", 3),
]);
let result = correct("Ths is a smple sentnce.", Mode::Auto, &dictionary);

assert_eq!(result.text, "This is a simple sentence.");
assert_eq!(result.findings.len(), 3);
```

The interactive path goes through [`live::LiveController`], fed one
keystroke at a time; [`live::session::Session`] wraps it together with a
buffer for callers that receive input from several sources.
*/

#![warn(missing_docs)]
pub mod buffer;
pub mod dictionary;
pub mod live;
pub mod pipeline;
pub mod speller;
pub mod tokenizer;

pub(crate) mod constants;
pub(crate) mod types;

#[cfg(test)]
pub(crate) mod testing;
