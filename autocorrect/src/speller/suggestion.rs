//! Ranked corrections and the findings that report them.
use itertools::Itertools;
use serde::{Serialize, Serializer};
use smol_str::SmolStr;

/// Corrections for one word, best first, never longer than the suggestion bound.
///
/// When the dictionary supplied a best guess it is the first entry and
/// does not appear again further down.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CandidateList {
    values: Vec<SmolStr>,
    has_best_guess: bool,
}

impl CandidateList {
    /// Merges a best guess with alternative candidates and truncates to `limit`.
    pub fn new(best_guess: Option<SmolStr>, candidates: Vec<SmolStr>, limit: usize) -> CandidateList {
        let best_guess = best_guess.filter(|x| !x.is_empty());
        let has_best_guess = best_guess.is_some() && limit > 0;

        let values = best_guess
            .iter()
            .cloned()
            .chain(
                candidates
                    .into_iter()
                    .filter(|x| !x.is_empty() && Some(x) != best_guess.as_ref()),
            )
            .unique()
            .take(limit)
            .collect();

        CandidateList {
            values,
            has_best_guess,
        }
    }

    /// The dictionary's single best guess, the only value ever auto-applied.
    pub fn best_guess(&self) -> Option<&str> {
        if self.has_best_guess {
            self.values.first().map(|x| x.as_str())
        } else {
            None
        }
    }

    /// All suggestions in rank order.
    pub fn values(&self) -> &[SmolStr] {
        &self.values
    }

    /// Number of suggestions.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when no suggestion is available.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over the suggestions in rank order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(|x| x.as_str())
    }
}

impl Serialize for CandidateList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.values.iter())
    }
}

/// A misspelled word and what it could have been.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CorrectionFinding {
    /// The word as it appeared in the input
    #[serde(rename = "word")]
    pub original: SmolStr,
    /// Ranked corrections
    pub suggestions: CandidateList,
}

impl CorrectionFinding {
    /// Records a flagged word.
    pub fn new(original: SmolStr, suggestions: CandidateList) -> CorrectionFinding {
        CorrectionFinding {
            original,
            suggestions,
        }
    }
}
