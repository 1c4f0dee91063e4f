//! One-pass correction of a whole text.
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::dictionary::Dictionary;
use crate::speller::suggestion::CorrectionFinding;
use crate::speller::{CandidateRanker, SpellerConfig, Verdict};
use crate::tokenizer::case_handling::preserve_case;
use crate::tokenizer::{is_alphanumeric, Tokenize};

/// What to do with misspelled words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Only report findings; the text is kept as is
    Report,
    /// Report findings and replace each word by its best guess
    Auto,
}

/// The rewritten text and every misspelling found, left to right.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Correction {
    /// Output text, re-spaced
    pub text: String,
    /// One entry per flagged word
    pub findings: Vec<CorrectionFinding>,
}

/// Corrects `text` with default settings.
pub fn correct<D: Dictionary>(text: &str, mode: Mode, dictionary: D) -> Correction {
    correct_with(&CandidateRanker::new(dictionary, SpellerConfig::default()), text, mode)
}

/// Corrects `text` using an existing ranker.
///
/// Words made only of letters that pass the ignore policy are looked up.
/// Misspelled ones are always reported; in [`Mode::Auto`] those with a
/// best guess are replaced, keeping the original casing.
///
/// The output is rebuilt with one space after every alphanumeric token,
/// and punctuation pulled onto the preceding token. Original whitespace
/// is not kept.
pub fn correct_with<D: Dictionary>(ranker: &CandidateRanker<D>, text: &str, mode: Mode) -> Correction {
    let mut output: Vec<SmolStr> = vec![];
    let mut findings = vec![];

    for token in text.tokens() {
        if !token.is_alphabetic() {
            output.push(token.text.into());
            continue;
        }

        let list = match ranker.check(token.text) {
            Verdict::Misspelled(list) => list,
            _ => {
                output.push(token.text.into());
                continue;
            }
        };

        let replacement = match (mode, list.best_guess()) {
            (Mode::Auto, Some(best)) => preserve_case(token.text, best),
            _ => token.text.into(),
        };

        log::debug!(
            "Flagged {:?} at {}: {:?} -> {:?}",
            token.text,
            token.index,
            list.values(),
            replacement
        );

        findings.push(CorrectionFinding::new(token.text.into(), list));
        output.push(replacement);
    }

    Correction {
        text: join(&output),
        findings,
    }
}

fn join(tokens: &[SmolStr]) -> String {
    let mut out = String::new();

    for token in tokens {
        if !is_alphanumeric(token) {
            out.truncate(out.trim_end().len());
        }
        out.push_str(token);
        out.push(' ');
    }

    out.truncate(out.trim_end().len());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{sentence_dictionary, FakeDictionary};

    fn words(c: &Correction) -> Vec<(&str, Vec<&str>)> {
        c.findings
            .iter()
            .map(|f| (f.original.as_str(), f.suggestions.iter().collect()))
            .collect()
    }

    #[test]
    fn report_mode_keeps_text() {
        let c = correct("Ths is a smple sentnce.", Mode::Report, sentence_dictionary());
        assert_eq!(c.text, "Ths is a smple sentnce.");
        assert_eq!(
            words(&c),
            vec![
                ("Ths", vec!["this", "the", "thus"]),
                ("smple", vec!["simple", "sample"]),
                ("sentnce", vec!["sentence"])
            ]
        );
    }

    #[test]
    fn auto_mode_replaces_with_case() {
        let c = correct("Ths is a smple sentnce.", Mode::Auto, sentence_dictionary());
        assert_eq!(c.text, "This is a simple sentence.");
        assert_eq!(c.findings.len(), 3);

        let c = correct(
            "Ths is a smple sentence with teh erors.",
            Mode::Auto,
            sentence_dictionary(),
        );
        assert_eq!(c.text, "This is a simple sentence with the errors.");
    }

    #[test]
    fn valid_words_are_untouched() {
        for mode in [Mode::Report, Mode::Auto] {
            let c = correct("The cat sat on the mat", mode, sentence_dictionary());
            assert_eq!(c.text, "The cat sat on the mat");
            assert!(c.findings.is_empty());
        }
    }

    #[test]
    fn ignored_words_are_not_reported() {
        let c = correct("NASA ths2 ab THS", Mode::Auto, sentence_dictionary());
        assert_eq!(c.text, "NASA ths2 ab THS");
        assert!(c.findings.is_empty());
    }

    #[test]
    fn no_best_guess_no_replacement() {
        let dictionary = FakeDictionary::new().candidates_only("smple", &["sample", "simple"]);
        let c = correct("smple qwzx", Mode::Auto, &dictionary);
        assert_eq!(c.text, "smple qwzx");
        assert_eq!(
            words(&c),
            vec![("smple", vec!["sample", "simple"]), ("qwzx", vec![])]
        );
    }

    #[test]
    fn failed_lookups_pass_through_unflagged() {
        let c = correct("Ths smple", Mode::Auto, sentence_dictionary().failing("ths"));
        assert_eq!(c.text, "Ths simple");
        assert_eq!(words(&c), vec![("smple", vec!["simple", "sample"])]);
    }

    #[test]
    fn spacing_rule() {
        let dictionary = FakeDictionary::new().known(&["hello", "world", "fine"]);
        let c = correct("Hello ,   world ! (ok)\n\tfine...", Mode::Report, dictionary);
        assert_eq!(c.text, "Hello, world!( ok) fine...");

        let c = correct("snake_case here", Mode::Report, FakeDictionary::new().known(&["here"]));
        assert_eq!(c.text, "snake_case here");

        let c = correct("it's", Mode::Report, FakeDictionary::new());
        assert_eq!(c.text, "it' s");
    }

    #[test]
    fn empty_input() {
        let c = correct("", Mode::Auto, sentence_dictionary());
        assert_eq!(c, Correction::default());
        assert_eq!(correct(" \n ", Mode::Report, sentence_dictionary()).text, "");
    }

    #[test]
    fn zero_n_best_still_replaces() {
        let ranker = CandidateRanker::new(
            sentence_dictionary(),
            SpellerConfig {
                n_best: 0,
                auto_replace: true,
            },
        );
        let c = correct_with(&ranker, "Ths", Mode::Auto);
        assert_eq!(c.text, "This");
        assert_eq!(words(&c), vec![("Ths", vec!["this"])]);
    }

    #[test]
    fn correction_as_json() {
        let c = correct("Ths", Mode::Auto, sentence_dictionary());
        assert_eq!(
            serde_json::to_value(&c).unwrap(),
            serde_json::json!({
                "text": "This",
                "findings": [{ "word": "Ths", "suggestions": ["this", "the", "thus"] }]
            })
        );
    }
}
