// Document preprocessing: lowercase alphabetic tokens, stopwords removed.
//
// Digits and punctuation act as token separators ("python3" yields
// "python"), tokens outside 2..=15 characters are dropped, and stopword
// tokens are removed. Deterministic: the same document and lexicon always
// yield the same token sequence.

use super::lexicon::Lexicon;

/// Shortest token the tokenizer keeps.
pub const MIN_TOKEN_LEN: usize = 2;

/// Longest token the tokenizer keeps.
pub const MAX_TOKEN_LEN: usize = 15;

/// Split a document into normalized tokens.
///
/// Lowercases, splits on every non-alphabetic character, keeps tokens of
/// 2 to 15 characters, and drops stopwords. An empty or all-stopword
/// document yields an empty vector, not an error.
pub fn tokenize(document: &str, lexicon: &Lexicon) -> Vec<String> {
    document
        .to_lowercase()
        .split(|c: char| !c.is_alphabetic())
        .filter(|token| {
            let len = token.chars().count();
            (MIN_TOKEN_LEN..=MAX_TOKEN_LEN).contains(&len)
        })
        .filter(|token| !lexicon.is_stopword(token))
        .map(str::to_string)
        .collect()
}
