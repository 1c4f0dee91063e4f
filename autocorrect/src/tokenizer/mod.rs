//! Splitting text into word and punctuation tokens.
use unic_ucd_category::GeneralCategory;

pub mod case_handling;
pub mod ignore;

/// Letters, numbers and the underscore make up words.
#[inline]
pub fn is_word_char(ch: char) -> bool {
    let category = GeneralCategory::of(ch);
    ch == '_' || category.is_letter() || category.is_number()
}

/// Letters are the only characters that belong to a correctable word.
#[inline]
pub fn is_letter(ch: char) -> bool {
    GeneralCategory::of(ch).is_letter()
}

/// True for non-empty text made only of letters and numbers.
pub fn is_alphanumeric(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c != '_' && is_word_char(c))
}

/// What a token is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A maximal run of word characters.
    Word,
    /// A single character that is neither a word character nor whitespace.
    Punctuation,
}

/// A token borrowed from the tokenized text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// Byte offset of the token in the source text.
    pub index: usize,
    /// The token's text.
    pub text: &'a str,
    /// Whether this is a word or a punctuation mark.
    pub kind: TokenKind,
}

impl<'a> Token<'a> {
    /// True for word tokens made only of letters, the ones worth spell-checking.
    pub fn is_alphabetic(&self) -> bool {
        self.kind == TokenKind::Word && self.text.chars().all(is_letter)
    }

    /// True for word tokens made only of letters and numbers.
    pub fn is_alphanumeric(&self) -> bool {
        self.kind == TokenKind::Word && is_alphanumeric(self.text)
    }
}

/// Lazy iterator over the tokens of a text. Whitespace is skipped.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    text: &'a str,
    cursor: usize,
}

impl<'a> Tokens<'a> {
    /// Starts tokenizing `text` from the beginning.
    pub fn new(text: &'a str) -> Tokens<'a> {
        Tokens { text, cursor: 0 }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let rest = &self.text[self.cursor..];
        let (skipped, first) = rest.char_indices().find(|(_, c)| !c.is_whitespace())?;
        let start = self.cursor + skipped;

        let (end, kind) = if is_word_char(first) {
            let len = self.text[start..]
                .char_indices()
                .find(|(_, c)| !is_word_char(*c))
                .map(|(i, _)| i)
                .unwrap_or(self.text.len() - start);
            (start + len, TokenKind::Word)
        } else {
            (start + first.len_utf8(), TokenKind::Punctuation)
        };

        self.cursor = end;

        Some(Token {
            index: start,
            text: &self.text[start..end],
            kind,
        })
    }
}

/// Tokenization entry points for string slices.
pub trait Tokenize {
    /// Every word and punctuation token, in document order.
    fn tokens(&self) -> Tokens;
    /// Only the word tokens, with their byte offsets.
    fn word_indices(&self) -> Box<dyn Iterator<Item = (usize, &str)> + '_>;
}

impl Tokenize for str {
    fn tokens(&self) -> Tokens {
        Tokens::new(self)
    }

    fn word_indices(&self) -> Box<dyn Iterator<Item = (usize, &str)> + '_> {
        Box::new(
            self.tokens()
                .filter(|t| t.kind == TokenKind::Word)
                .map(|t| (t.index, t.text)),
        )
    }
}
