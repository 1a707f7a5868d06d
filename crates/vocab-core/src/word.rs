//! Word entries and the pipe-delimited word list format.
//!
//! Each non-blank line holds up to six fields in fixed order:
//!
//! ```text
//! word|part of speech|definition|pronunciation|example|theme
//! ```
//!
//! Trailing fields may be omitted. Every field is trimmed; an empty theme
//! becomes [`DEFAULT_THEME`]. Lines whose word field is empty are skipped.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Theme assigned to entries that do not name one.
pub const DEFAULT_THEME: &str = "general";

/// Separator between fields on a line.
pub const FIELD_SEPARATOR: char = '|';

/// A single vocabulary item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordEntry {
    /// The word itself. Never empty.
    pub word: String,
    /// Part of speech, e.g. "noun".
    pub part_of_speech: String,
    /// Definition.
    pub definition: String,
    /// Pronunciation, usually IPA.
    pub pronunciation: String,
    /// Example sentence.
    pub example: String,
    /// Theme tag.
    pub theme: String,
}

impl WordEntry {
    /// Create an entry with empty metadata and the default theme.
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            part_of_speech: String::new(),
            definition: String::new(),
            pronunciation: String::new(),
            example: String::new(),
            theme: DEFAULT_THEME.to_string(),
        }
    }

    /// Set part of speech.
    pub fn with_part_of_speech(mut self, pos: impl Into<String>) -> Self {
        self.part_of_speech = pos.into();
        self
    }

    /// Set definition.
    pub fn with_definition(mut self, definition: impl Into<String>) -> Self {
        self.definition = definition.into();
        self
    }

    /// Set pronunciation.
    pub fn with_pronunciation(mut self, pronunciation: impl Into<String>) -> Self {
        self.pronunciation = pronunciation.into();
        self
    }

    /// Set example sentence.
    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = example.into();
        self
    }

    /// Set theme.
    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = theme.into();
        self
    }

    /// Parse one line of the word list format.
    ///
    /// Returns `None` for blank lines and lines with an empty word field.
    /// Fields past the sixth are ignored.
    pub fn from_line(line: &str) -> Option<Self> {
        let mut fields = line.split(FIELD_SEPARATOR).map(str::trim);
        let word = fields.next().unwrap_or_default();
        if word.is_empty() {
            return None;
        }

        let mut next = || fields.next().unwrap_or_default().to_string();
        let part_of_speech = next();
        let definition = next();
        let pronunciation = next();
        let example = next();
        let theme = match next() {
            t if t.is_empty() => DEFAULT_THEME.to_string(),
            t => t,
        };

        Some(Self {
            word: word.to_string(),
            part_of_speech,
            definition,
            pronunciation,
            example,
            theme,
        })
    }

    /// Part of speech, or "word" when unknown. Used in fallback text.
    pub fn part_of_speech_or_word(&self) -> &str {
        if self.part_of_speech.is_empty() {
            "word"
        } else {
            &self.part_of_speech
        }
    }
}

/// Parse a whole word list, keeping input order.
///
/// Malformed input never fails; the worst case is an empty list.
pub fn parse_word_list(text: &str) -> Vec<WordEntry> {
    let entries: Vec<WordEntry> = text.lines().filter_map(WordEntry::from_line).collect();
    debug!(entries = entries.len(), "parsed word list");
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_and_partial_lines() {
        let words = parse_word_list("cat|noun|a small feline|||animals\ndog|noun||");
        assert_eq!(words.len(), 2);

        assert_eq!(
            words[0],
            WordEntry::new("cat")
                .with_part_of_speech("noun")
                .with_definition("a small feline")
                .with_theme("animals")
        );
        assert_eq!(words[1], WordEntry::new("dog").with_part_of_speech("noun"));
        assert_eq!(words[1].theme, DEFAULT_THEME);
    }

    #[test]
    fn test_fields_are_trimmed() {
        let entry = WordEntry::from_line("  run | verb |move quickly on foot | /rʌn/ | I run. | movement ").unwrap();
        assert_eq!(entry.word, "run");
        assert_eq!(entry.part_of_speech, "verb");
        assert_eq!(entry.definition, "move quickly on foot");
        assert_eq!(entry.pronunciation, "/rʌn/");
        assert_eq!(entry.example, "I run.");
        assert_eq!(entry.theme, "movement");
    }

    #[test]
    fn test_blank_and_wordless_lines_are_skipped() {
        let words = parse_word_list("\n   \n|noun|orphan definition\nhappy\n\n  |  \n");
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].word, "happy");
    }

    #[test]
    fn test_blank_theme_defaults_to_general() {
        let entry = WordEntry::from_line("tree|noun|a plant|||   ").unwrap();
        assert_eq!(entry.theme, DEFAULT_THEME);
    }

    #[test]
    fn test_extra_fields_ignored() {
        let entry = WordEntry::from_line("a|b|c|d|e|f|g|h").unwrap();
        assert_eq!(entry.theme, "f");
    }

    #[test]
    fn test_crlf_line_endings() {
        let words = parse_word_list("cat|noun\r\ndog|noun\r\n");
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].part_of_speech, "noun");
        assert_eq!(words[1].word, "dog");
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_word_list("").is_empty());
        assert!(parse_word_list("\n\n").is_empty());
    }

    #[test]
    fn test_part_of_speech_fallback() {
        assert_eq!(WordEntry::new("x").part_of_speech_or_word(), "word");
        assert_eq!(WordEntry::new("x").with_part_of_speech("verb").part_of_speech_or_word(), "verb");
    }

    #[test]
    fn test_entry_serializes_camel_case() {
        let entry = WordEntry::new("run").with_part_of_speech("verb").with_theme("movement");
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["partOfSpeech"], "verb");
        assert_eq!(json["theme"], "movement");
        assert!(json.get("part_of_speech").is_none());

        let back: WordEntry = serde_json::from_value(json).unwrap();
        assert_eq!(back, entry);
    }
}
