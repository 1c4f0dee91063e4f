use std::cmp::Reverse;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use hashbrown::{HashMap, HashSet};
use itertools::Itertools;
use smol_str::SmolStr;

use super::{Dictionary, DictionaryError};
use crate::tokenizer::case_handling::lower_case;
use crate::types::Frequency;

/// Corrections are searched up to this many edits away.
const MAX_DISTANCE: usize = 2;

/// A word-frequency list that proposes corrections by edit distance.
///
/// Candidates are the known words of the nearest non-empty edit tier
/// (the word itself, then distance one, then distance two), most frequent
/// first. Edits are insertions, deletions, substitutions and transpositions
/// of adjacent characters.
///
/// Every entry is indexed under the strings left after removing up to two
/// of its characters, so a lookup only compares against entries sharing
/// such a string with the input, whatever the size of the alphabet.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: HashMap<SmolStr, Frequency>,
    deletes: HashMap<SmolStr, Vec<SmolStr>>,
}

impl WordList {
    /// Builds a list from `(word, frequency)` pairs; repeated words add up.
    pub fn from_frequencies<I, S>(entries: I) -> WordList
    where
        I: IntoIterator<Item = (S, Frequency)>,
        S: AsRef<str>,
    {
        let mut words: HashMap<SmolStr, Frequency> = HashMap::new();

        for (word, frequency) in entries {
            let word = lower_case(word.as_ref().trim());
            if word.is_empty() {
                continue;
            }
            *words.entry(word).or_insert(0) += frequency;
        }

        let mut deletes: HashMap<SmolStr, Vec<SmolStr>> = HashMap::new();
        for word in words.keys() {
            for key in delete_variants(word) {
                deletes.entry(key).or_insert_with(Vec::new).push(word.clone());
            }
        }

        WordList { words, deletes }
    }

    /// Builds a list where every occurrence of a word counts once.
    pub fn from_words<I, S>(words: I) -> WordList
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        WordList::from_frequencies(words.into_iter().map(|w| (w, 1)))
    }

    /// Opens a word list file, choosing the format by extension.
    ///
    /// `.json` files hold an object of word to count. `.txt`, `.dic`, `.tsv`
    /// or extensionless files hold one `word [count]` entry per line.
    pub fn open(path: &Path) -> Result<WordList, DictionaryError> {
        let ext = path
            .extension()
            .map(|x| x.to_string_lossy().to_ascii_lowercase());

        let list = match ext.as_deref() {
            Some("json") => WordList::from_json_reader(File::open(path)?)?,
            None | Some("txt") | Some("dic") | Some("tsv") => {
                WordList::from_text_reader(BufReader::new(File::open(path)?))?
            }
            Some(_) => return Err(DictionaryError::UnsupportedFormat(path.to_path_buf())),
        };

        log::info!("Loaded {} words from {}", list.len(), path.display());
        Ok(list)
    }

    /// Parses a plain-text list. Blank lines and `#` comments are skipped.
    pub fn from_text_reader<R: BufRead>(reader: R) -> Result<WordList, DictionaryError> {
        let mut entries = vec![];

        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut fields = line.split_whitespace();
            let word = fields.next().unwrap_or_default().to_string();
            let frequency = match fields.next() {
                None => 1,
                Some(count) => count.parse::<Frequency>().map_err(|e| {
                    DictionaryError::InvalidEntry {
                        line: i + 1,
                        reason: format!("bad count {:?}: {}", count, e),
                    }
                })?,
            };

            if fields.next().is_some() {
                return Err(DictionaryError::InvalidEntry {
                    line: i + 1,
                    reason: "expected `word` or `word count`".into(),
                });
            }

            entries.push((word, frequency));
        }

        Ok(WordList::from_frequencies(entries))
    }

    /// Parses a JSON object mapping words to counts.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<WordList, DictionaryError> {
        let entries: HashMap<String, Frequency> = serde_json::from_reader(reader)?;
        Ok(WordList::from_frequencies(entries))
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when the list holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// How often `word` occurs, if it is known.
    pub fn frequency(&self, word: &str) -> Option<Frequency> {
        self.words.get(lower_case(word).as_str()).copied()
    }

    fn ranked(&self, words: HashSet<SmolStr>) -> Vec<SmolStr> {
        words
            .into_iter()
            .sorted_by_key(|w| (Reverse(self.words.get(w).copied().unwrap_or(0)), w.clone()))
            .collect()
    }

    fn lookup(&self, word: &str) -> Vec<SmolStr> {
        let word = lower_case(word);

        if self.words.contains_key(&word) {
            return vec![word];
        }

        let input: Vec<char> = word.chars().collect();
        let mut seen: HashSet<&SmolStr> = HashSet::new();
        let mut tiers: [HashSet<SmolStr>; MAX_DISTANCE] = Default::default();

        for key in delete_variants(&word) {
            for entry in self.deletes.get(&key).into_iter().flatten() {
                if !seen.insert(entry) {
                    continue;
                }

                let target: Vec<char> = entry.chars().collect();
                if let Some(d) = edit_distance(&input, &target) {
                    if d > 0 {
                        tiers[d - 1].insert(entry.clone());
                    }
                }
            }
        }

        log::trace!("{:?}: compared against {} entries", word, seen.len());

        tiers
            .into_iter()
            .find(|tier| !tier.is_empty())
            .map(|tier| self.ranked(tier))
            .unwrap_or_default()
    }
}

/// The word itself and every string left after removing up to
/// `MAX_DISTANCE` of its characters.
fn delete_variants(word: &str) -> HashSet<SmolStr> {
    let mut out = HashSet::new();
    out.insert(SmolStr::new(word));

    let mut frontier = vec![SmolStr::new(word)];
    for _ in 0..MAX_DISTANCE {
        let mut next = vec![];
        for current in frontier.iter() {
            let chars: Vec<char> = current.chars().collect();
            for i in 0..chars.len() {
                let shorter: SmolStr = chars[..i].iter().chain(&chars[i + 1..]).copied().collect();
                if out.insert(shorter.clone()) {
                    next.push(shorter);
                }
            }
        }
        frontier = next;
    }

    out
}

/// Edit distance counting adjacent transpositions as one edit, or `None`
/// when it exceeds `MAX_DISTANCE`.
fn edit_distance(source: &[char], target: &[char]) -> Option<usize> {
    if source.len().abs_diff(target.len()) > MAX_DISTANCE {
        return None;
    }

    let (n, m) = (source.len(), target.len());
    let mut matrix = vec![vec![0usize; m + 1]; n + 1];
    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=m {
        matrix[0][j] = j;
    }

    for i in 1..=n {
        for j in 1..=m {
            let cost = usize::from(source[i - 1] != target[j - 1]);
            let mut value = (matrix[i - 1][j] + 1)
                .min(matrix[i][j - 1] + 1)
                .min(matrix[i - 1][j - 1] + cost);

            if i > 1 && j > 1 && source[i - 1] == target[j - 2] && source[i - 2] == target[j - 1] {
                value = value.min(matrix[i - 2][j - 2] + 1);
            }

            matrix[i][j] = value;
        }
    }

    Some(matrix[n][m]).filter(|d| *d <= MAX_DISTANCE)
}

impl Dictionary for WordList {
    fn is_known(&self, word: &str) -> Result<bool, DictionaryError> {
        Ok(self.words.contains_key(lower_case(word).as_str()))
    }

    fn best_correction(&self, word: &str) -> Result<Option<SmolStr>, DictionaryError> {
        Ok(self.lookup(word).into_iter().next())
    }

    fn candidates(&self, word: &str) -> Result<Vec<SmolStr>, DictionaryError> {
        Ok(self.lookup(word))
    }

    fn corrections(&self, word: &str) -> Result<(Option<SmolStr>, Vec<SmolStr>), DictionaryError> {
        let candidates = self.lookup(word);
        Ok((candidates.first().cloned(), candidates))
    }
}
