//! Wake-word handling for spoken input
//!
//! A transcription such as `"ok assistant euh ouvre Chrome"` becomes
//! `"ouvre Chrome"`: everything up to and including the first occurrence of
//! the wake word is dropped, then filler words are removed.

use regex::RegexBuilder;

/// Extract the command following the wake word.
///
/// Returns `None` when the wake word is absent or nothing is left once
/// filler words are removed.
pub fn extract_command(text: &str, wake_word: &str, fillers: &[String]) -> Option<String> {
    let wake_word = wake_word.trim();
    if wake_word.is_empty() {
        return None;
    }

    let pattern = RegexBuilder::new(&format!(r"\b{}\b", regex::escape(wake_word)))
        .case_insensitive(true)
        .build()
        .ok()?;
    let found = pattern.find(text)?;

    let words: Vec<&str> = text[found.end()..]
        .split_whitespace()
        .filter(|word| !is_noise(word, fillers))
        .collect();

    if words.is_empty() {
        log::debug!("wake word heard without a command");
        None
    } else {
        Some(words.join(" "))
    }
}

/// Filler words and bare punctuation
fn is_noise(word: &str, fillers: &[String]) -> bool {
    let word = word.trim_matches(|c: char| ",.;:!?".contains(c)).to_lowercase();
    word.is_empty() || fillers.iter().any(|f| f.to_lowercase() == word)
}
