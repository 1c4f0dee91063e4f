//! Which words are never corrected.
use super::case_handling::is_all_caps;
use crate::constants::MIN_WORD_LEN;

/// Whether a word is exempt from correction: shorter than three characters,
/// containing a digit, or written entirely in capitals (an acronym).
pub fn should_ignore(word: &str) -> bool {
    word.chars().count() < MIN_WORD_LEN || word.chars().any(char::is_numeric) || is_all_caps(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignore_policy() {
        assert!(should_ignore("AI"));
        assert!(should_ignore("a1b"));
        assert!(should_ignore("to"));
        assert!(!should_ignore("house"));
    }

    #[test]
    fn acronyms_of_any_length() {
        assert!(should_ignore("NASA"));
        assert!(!should_ignore("Nasa"));
    }

    #[test]
    fn length_counts_characters() {
        assert!(!should_ignore("été"));
        assert!(should_ignore("é"));
        assert!(should_ignore(""));
    }

    #[test]
    fn any_digit() {
        assert!(should_ignore("mp3player"));
        assert!(should_ignore("2nd"));
        assert!(should_ignore("abc٣"));
    }
}
