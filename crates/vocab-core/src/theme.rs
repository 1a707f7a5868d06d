//! Grouping of words by theme tag.

use crate::word::WordEntry;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Theme name to the words tagged with it, in word list order.
///
/// Rebuilt from scratch whenever the word list is replaced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeIndex {
    themes: BTreeMap<String, Vec<String>>,
}

impl ThemeIndex {
    /// Build the index for a word list.
    pub fn from_words(words: &[WordEntry]) -> Self {
        let mut themes: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for entry in words {
            themes
                .entry(entry.theme.clone())
                .or_default()
                .push(entry.word.clone());
        }
        debug!(themes = themes.len(), words = words.len(), "rebuilt theme index");
        Self { themes }
    }

    /// Words under a theme.
    pub fn words(&self, theme: &str) -> Option<&[String]> {
        self.themes.get(theme).map(Vec::as_slice)
    }

    /// Theme names in sorted order.
    pub fn theme_names(&self) -> impl Iterator<Item = &str> {
        self.themes.keys().map(String::as_str)
    }

    /// All buckets.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.themes.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}
