//! The spelling knowledge the engine consumes.
use std::sync::Arc;

use smol_str::SmolStr;

/// Errors raised while loading or querying a dictionary.
pub mod error;
mod word_list;

pub use self::error::DictionaryError;
pub use self::word_list::WordList;

/// Answers spelling questions about lower-case words.
///
/// Implementations backed by a slower or remote resource must still answer
/// synchronously; a failure is reported as an error and the caller treats
/// the word as having no correction.
pub trait Dictionary {
    /// Whether `word` is a valid spelling.
    fn is_known(&self, word: &str) -> Result<bool, DictionaryError>;
    /// The single most likely correction of `word`, if any.
    fn best_correction(&self, word: &str) -> Result<Option<SmolStr>, DictionaryError>;
    /// Valid alternative spellings of `word`, in a deterministic order.
    fn candidates(&self, word: &str) -> Result<Vec<SmolStr>, DictionaryError>;

    /// The best correction and the candidates together.
    ///
    /// Implementations that find both in the same search should override
    /// this so a word is only searched once.
    fn corrections(&self, word: &str) -> Result<(Option<SmolStr>, Vec<SmolStr>), DictionaryError> {
        Ok((self.best_correction(word)?, self.candidates(word)?))
    }
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    #[inline]
    fn is_known(&self, word: &str) -> Result<bool, DictionaryError> {
        (**self).is_known(word)
    }

    #[inline]
    fn best_correction(&self, word: &str) -> Result<Option<SmolStr>, DictionaryError> {
        (**self).best_correction(word)
    }

    #[inline]
    fn candidates(&self, word: &str) -> Result<Vec<SmolStr>, DictionaryError> {
        (**self).candidates(word)
    }

    #[inline]
    fn corrections(&self, word: &str) -> Result<(Option<SmolStr>, Vec<SmolStr>), DictionaryError> {
        (**self).corrections(word)
    }
}

impl<D: Dictionary + ?Sized> Dictionary for Arc<D> {
    #[inline]
    fn is_known(&self, word: &str) -> Result<bool, DictionaryError> {
        (**self).is_known(word)
    }

    #[inline]
    fn best_correction(&self, word: &str) -> Result<Option<SmolStr>, DictionaryError> {
        (**self).best_correction(word)
    }

    #[inline]
    fn candidates(&self, word: &str) -> Result<Vec<SmolStr>, DictionaryError> {
        (**self).candidates(word)
    }

    #[inline]
    fn corrections(&self, word: &str) -> Result<(Option<SmolStr>, Vec<SmolStr>), DictionaryError> {
        (**self).corrections(word)
    }
}
