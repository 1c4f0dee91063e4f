//! Deciding whether a word is misspelled and ranking its corrections.
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::constants::MAX_SUGGESTIONS;
use crate::dictionary::{Dictionary, DictionaryError};
use crate::tokenizer::case_handling::lower_case;
use crate::tokenizer::ignore::should_ignore;

pub mod suggestion;

use self::suggestion::CandidateList;

/// Tunables shared by the batch pipeline and the live controller.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SpellerConfig {
    /// How many suggestions to offer, clamped to one through three.
    pub n_best: usize,
    /// Whether completed words are replaced by their best guess.
    pub auto_replace: bool,
}

impl SpellerConfig {
    /// Three suggestions, auto-replace on.
    pub const fn default() -> SpellerConfig {
        SpellerConfig {
            n_best: MAX_SUGGESTIONS,
            auto_replace: true,
        }
    }

    fn limit(&self) -> usize {
        self.n_best.clamp(1, MAX_SUGGESTIONS)
    }
}

impl Default for SpellerConfig {
    fn default() -> SpellerConfig {
        SpellerConfig::default()
    }
}

/// The outcome of checking one word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Exempt from correction (short, has digits, or all capitals)
    Ignored,
    /// Spelled correctly
    Known,
    /// The dictionary could not answer; the word is left alone
    Unavailable,
    /// Not a known word; corrections may be empty
    Misspelled(CandidateList),
}

impl Verdict {
    /// The ranked corrections of a misspelled word.
    pub fn suggestions(&self) -> Option<&CandidateList> {
        match self {
            Verdict::Misspelled(list) => Some(list),
            _ => None,
        }
    }
}

/// Ranks corrections for words using a [`Dictionary`].
#[derive(Debug, Clone)]
pub struct CandidateRanker<D> {
    dictionary: D,
    config: SpellerConfig,
}

impl<D: Dictionary> CandidateRanker<D> {
    /// Wraps a dictionary with the given settings.
    pub fn new(dictionary: D, config: SpellerConfig) -> CandidateRanker<D> {
        CandidateRanker { dictionary, config }
    }

    /// The settings in use.
    pub fn config(&self) -> &SpellerConfig {
        &self.config
    }

    /// The wrapped dictionary.
    pub fn dictionary(&self) -> &D {
        &self.dictionary
    }

    /// Applies the ignore policy, then ranks the word.
    pub fn check(&self, word: &str) -> Verdict {
        if should_ignore(word) {
            return Verdict::Ignored;
        }

        self.rank(word)
    }

    /// Looks the word up case-insensitively and ranks its corrections.
    ///
    /// Lookup failures are logged and reported as [`Verdict::Unavailable`].
    pub fn rank(&self, word: &str) -> Verdict {
        let lower = lower_case(word);

        match self.lookup(&lower) {
            Ok(verdict) => verdict,
            Err(e) => {
                log::warn!("Lookup of {:?} failed: {}", word, e);
                Verdict::Unavailable
            }
        }
    }

    fn lookup(&self, word: &SmolStr) -> Result<Verdict, DictionaryError> {
        if self.dictionary.is_known(word)? {
            return Ok(Verdict::Known);
        }

        let (best, candidates) = self.dictionary.corrections(word)?;

        Ok(Verdict::Misspelled(CandidateList::new(
            best,
            candidates,
            self.config.limit(),
        )))
    }
}
