// src/core/tokenizer.rs

/// Characters that end a word. Anything else, digits and other punctuation
/// included, is part of a word.
pub const SEPARATORS: [char; 9] = [' ', '\t', '\n', '\r', '.', ',', ';', '!', '?'];

/// Splits `text` into lowercased words, dropping the empty pieces produced by
/// runs of separators.
///
/// Each character is lowercased on its own, so a word's lowercase form does not
/// depend on its position (no final-sigma rule).
#[inline]
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(SEPARATORS)
        .filter(|token| !token.is_empty())
        .map(|token| token.chars().flat_map(char::to_lowercase).collect())
}
