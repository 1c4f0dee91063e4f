//! A scripted dictionary for unit tests.
use hashbrown::{HashMap, HashSet};
use smol_str::SmolStr;

use crate::dictionary::{Dictionary, DictionaryError};

#[derive(Debug, Default)]
pub(crate) struct FakeDictionary {
    known: HashSet<SmolStr>,
    best: HashMap<SmolStr, SmolStr>,
    candidates: HashMap<SmolStr, Vec<SmolStr>>,
    failing: HashSet<SmolStr>,
}

impl FakeDictionary {
    pub fn new() -> FakeDictionary {
        FakeDictionary::default()
    }

    pub fn known(mut self, words: &[&str]) -> FakeDictionary {
        self.known.extend(words.iter().map(|w| SmolStr::new(w)));
        self
    }

    pub fn correction(mut self, word: &str, best: &str, candidates: &[&str]) -> FakeDictionary {
        self.best.insert(word.into(), best.into());
        self.candidates
            .insert(word.into(), candidates.iter().map(|w| SmolStr::new(w)).collect());
        self
    }

    pub fn candidates_only(mut self, word: &str, candidates: &[&str]) -> FakeDictionary {
        self.candidates
            .insert(word.into(), candidates.iter().map(|w| SmolStr::new(w)).collect());
        self
    }

    pub fn failing(mut self, word: &str) -> FakeDictionary {
        self.failing.insert(word.into());
        self
    }

    fn check(&self, word: &str) -> Result<(), DictionaryError> {
        if self.failing.contains(word) {
            return Err(DictionaryError::Lookup(format!("no answer for {}", word)));
        }
        Ok(())
    }
}

impl Dictionary for FakeDictionary {
    fn is_known(&self, word: &str) -> Result<bool, DictionaryError> {
        Ok(self.known.contains(word))
    }

    fn best_correction(&self, word: &str) -> Result<Option<SmolStr>, DictionaryError> {
        self.check(word)?;
        Ok(self.best.get(word).cloned())
    }

    fn candidates(&self, word: &str) -> Result<Vec<SmolStr>, DictionaryError> {
        self.check(word)?;
        Ok(self.candidates.get(word).cloned().unwrap_or_default())
    }
}

/// The dictionary used throughout the component tests.
pub(crate) fn sentence_dictionary() -> FakeDictionary {
    FakeDictionary::new()
        .known(&["this", "is", "sentence", "simple", "cat", "sat", "on", "the", "mat", "with"])
        .correction("ths", "this", &["this", "the", "thus", "tis"])
        .correction("smple", "simple", &["sample", "simple"])
        .correction("sentnce", "sentence", &[])
        .correction("teh", "the", &["ten", "the", "tea", "tech"])
        .correction("erors", "errors", &["errors", "error"])
}
