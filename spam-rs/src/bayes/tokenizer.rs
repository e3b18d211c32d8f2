//! Delimiter-based word splitting

/// Characters that separate words.
pub const DELIMITERS: [char; 20] = [
    ' ', '\t', '\n', '"', '.', ',', ';', ':', '/', '?', '!', '&', '[', ']', '{', '}', '(', ')',
    '<', '>',
];

/// Split text at every delimiter character.
///
/// Each delimiter separates on its own, so adjacent delimiters and
/// delimiters at either end of the text produce empty words. The result
/// always holds at least one element. No case folding happens here.
pub fn get_words(text: &str) -> Vec<&str> {
    text.split(|c: char| DELIMITERS.contains(&c)).collect()
}
