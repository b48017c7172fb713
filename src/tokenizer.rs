//! Sentence splitting.

/// Characters that end a sentence.
pub const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Split text into lowercase, trimmed, non-empty sentences in reading order.
///
/// Only the terminator characters are considered; abbreviations and decimal
/// numbers are split like any other full stop.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(&SENTENCE_TERMINATORS[..])
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .map(str::to_owned)
        .collect()
}
