//! Transcript normalization.

use unicode_segmentation::UnicodeSegmentation;

/// Normalize a raw transcript for rule matching.
///
/// Lowercases and trims the input. This function is total; an empty or
/// whitespace-only transcript normalizes to the empty string, which the
/// interpreter treats as "nothing was said" without running the rule chain.
pub fn normalize(transcript: &str) -> String {
    transcript.trim().to_lowercase()
}

/// Count the words in a normalized transcript.
///
/// Word boundaries follow Unicode segmentation rules, which on speech
/// transcripts coincide with whitespace separation.
pub fn token_count(text: &str) -> usize {
    text.unicode_words().count()
}

/// Title-case a vocabulary name for display and route building.
///
/// Each word has its first letter uppercased: `"iron rods"` becomes
/// `"Iron Rods"`.
pub fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for (i, word) in name.unicode_words().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}
