//! Casing helpers: detecting a word's case category and re-applying it.
use smol_str::SmolStr;

/// Lower-cases every character.
#[inline(always)]
pub fn lower_case(s: &str) -> SmolStr {
    s.chars()
        .map(|c| c.to_lowercase().collect::<String>())
        .collect::<SmolStr>()
}

/// Upper-cases every character.
#[inline(always)]
pub fn upper_case(s: &str) -> SmolStr {
    s.chars()
        .map(|c| c.to_uppercase().collect::<String>())
        .collect::<SmolStr>()
}

/// Upper-cases the first character and lower-cases the rest.
#[inline(always)]
pub fn capitalize(s: &str) -> SmolStr {
    let mut c = s.chars();
    match c.next() {
        None => SmolStr::new(""),
        Some(f) => SmolStr::from(f.to_uppercase().collect::<String>() + lower_case(c.as_str()).as_str()),
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Case {
    Upper,
    Lower,
    Neither,
}

impl Case {
    #[inline(always)]
    fn new(ch: char) -> Case {
        if ch.is_lowercase() {
            Case::Lower
        } else if ch.is_uppercase() {
            Case::Upper
        } else {
            Case::Neither
        }
    }
}

/// True when the word has at least one cased letter and none of them is lower-case.
pub fn is_all_caps(word: &str) -> bool {
    let mut has_upper = false;

    for ch in word.chars() {
        match Case::new(ch) {
            Case::Lower => return false,
            Case::Upper => has_upper = true,
            Case::Neither => {}
        }
    }

    has_upper
}

/// True when the first letter is upper-case and every later letter is lower-case.
pub fn is_title_case(word: &str) -> bool {
    let mut cased = word.chars().map(Case::new).filter(|c| *c != Case::Neither);

    match cased.next() {
        Some(Case::Upper) => cased.all(|c| c == Case::Lower),
        _ => false,
    }
}

/// The casing pattern of a source word, re-applied to its replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseMutation {
    /// First letter upper-case, the rest lower-case
    FirstCaps,
    /// Every letter upper-case
    AllCaps,
    /// Left as the dictionary spells it
    None,
}

impl CaseMutation {
    /// The pattern of `word`.
    pub fn of(word: &str) -> CaseMutation {
        if is_all_caps(word) {
            CaseMutation::AllCaps
        } else if is_title_case(word) {
            CaseMutation::FirstCaps
        } else {
            CaseMutation::None
        }
    }

    /// Rewrites `word` in this pattern.
    pub fn apply(self, word: &str) -> SmolStr {
        match self {
            CaseMutation::AllCaps => upper_case(word),
            CaseMutation::FirstCaps => capitalize(word),
            CaseMutation::None => SmolStr::new(word),
        }
    }
}

/// Gives `corrected` the case category of `original`.
///
/// Dictionary corrections are lower-case, so a lower-case or mixed-case
/// original leaves `corrected` as is.
pub fn preserve_case(original: &str, corrected: &str) -> SmolStr {
    CaseMutation::of(original).apply(corrected)
}
