//! Activity kinds and the challenges generated for them.

use crate::error::VocabError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the seven activities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    /// Unscramble the letters.
    Spelling,
    /// Match a word to its definition.
    Meaning,
    /// Pick the right form for a sentence.
    Grammar,
    /// Free-text story using a group of words.
    Story,
    /// Select every word belonging to a theme.
    Themes,
    /// Multiple-choice definition quiz.
    Quiz,
    /// Self-assessed flashcards.
    Flashcards,
}

impl ActivityKind {
    /// Every activity, in menu order.
    pub const ALL: [ActivityKind; 7] = [
        Self::Spelling,
        Self::Meaning,
        Self::Grammar,
        Self::Story,
        Self::Themes,
        Self::Quiz,
        Self::Flashcards,
    ];

    /// Stable lower-case name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Spelling => "spelling",
            Self::Meaning => "meaning",
            Self::Grammar => "grammar",
            Self::Story => "story",
            Self::Themes => "themes",
            Self::Quiz => "quiz",
            Self::Flashcards => "flashcards",
        }
    }

    /// Menu title.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Spelling => "Spelling Challenge",
            Self::Meaning => "Meaning Match",
            Self::Grammar => "Grammar Practice",
            Self::Story => "Story Creator",
            Self::Themes => "Theme Groups",
            Self::Quiz => "Quick Quiz",
            Self::Flashcards => "Flashcards",
        }
    }

    /// One-line description for menus.
    pub fn tagline(&self) -> &'static str {
        match self {
            Self::Spelling => "Unscramble the letters!",
            Self::Meaning => "Match words to definitions!",
            Self::Grammar => "Choose the correct form!",
            Self::Story => "Write creative stories!",
            Self::Themes => "Group words by theme!",
            Self::Quiz => "Test your knowledge!",
            Self::Flashcards => "Flip and learn!",
        }
    }

    /// Menu shortcut key.
    pub fn key(&self) -> char {
        match self {
            Self::Spelling => '1',
            Self::Meaning => '2',
            Self::Grammar => '3',
            Self::Story => '4',
            Self::Themes => '5',
            Self::Quiz => '6',
            Self::Flashcards => '7',
        }
    }

    /// Look up an activity by its shortcut key.
    pub fn from_key(key: char) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.key() == key)
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ActivityKind {
    type Err = VocabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| VocabError::UnknownActivity(s.to_string()))
    }
}

/// Back side of a flashcard. Empty source fields are already replaced by
/// fallback text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlashcardBack {
    pub definition: String,
    pub pronunciation: String,
    pub example: String,
    pub part_of_speech: String,
}

/// A single generated question. Never mutated once created; the next
/// question replaces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Challenge {
    Spelling {
        question: String,
        hint: String,
        pronunciation: String,
        scrambled: String,
        answer: String,
    },
    Meaning {
        question: String,
        word: String,
        options: Vec<String>,
        answer: String,
    },
    Grammar {
        question: String,
        options: Vec<String>,
        answer: String,
    },
    Story {
        prompt: String,
        words: Vec<String>,
        theme: String,
    },
    Themes {
        question: String,
        theme: String,
        /// Correct and distractor words, shuffled.
        words: Vec<String>,
        /// Every word under `theme`.
        answer: Vec<String>,
    },
    Quiz {
        question: String,
        options: Vec<String>,
        answer: String,
    },
    Flashcards {
        front: String,
        back: FlashcardBack,
    },
}

impl Challenge {
    /// Activity this challenge belongs to.
    pub fn kind(&self) -> ActivityKind {
        match self {
            Self::Spelling { .. } => ActivityKind::Spelling,
            Self::Meaning { .. } => ActivityKind::Meaning,
            Self::Grammar { .. } => ActivityKind::Grammar,
            Self::Story { .. } => ActivityKind::Story,
            Self::Themes { .. } => ActivityKind::Themes,
            Self::Quiz { .. } => ActivityKind::Quiz,
            Self::Flashcards { .. } => ActivityKind::Flashcards,
        }
    }

    /// Heading shown above the challenge.
    pub fn prompt(&self) -> &str {
        match self {
            Self::Spelling { question, .. }
            | Self::Meaning { question, .. }
            | Self::Grammar { question, .. }
            | Self::Themes { question, .. }
            | Self::Quiz { question, .. } => question,
            Self::Story { prompt, .. } => prompt,
            Self::Flashcards { front, .. } => front,
        }
    }

    /// Choices for the multiple-choice kinds, empty otherwise.
    pub fn options(&self) -> &[String] {
        match self {
            Self::Meaning { options, .. }
            | Self::Grammar { options, .. }
            | Self::Quiz { options, .. } => options,
            _ => &[],
        }
    }

    /// Expected answer rendered as text, for feedback.
    pub fn answer_text(&self) -> String {
        match self {
            Self::Spelling { answer, .. }
            | Self::Meaning { answer, .. }
            | Self::Grammar { answer, .. }
            | Self::Quiz { answer, .. } => answer.clone(),
            Self::Themes { answer, .. } => answer.join(", "),
            Self::Story { words, .. } => words.join(", "),
            Self::Flashcards { back, .. } => back.definition.clone(),
        }
    }
}
