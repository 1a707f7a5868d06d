//! # vocab-core
//!
//! Game logic for Vocab Master: turns a learner's own word list into quiz
//! activities and keeps score.
//!
//! ## Features
//!
//! - Pipe-delimited word list parsing with per-field defaults
//! - Theme grouping
//! - Seven activities: spelling, meaning match, grammar, story writing,
//!   theme groups, quiz and flashcards
//! - Grading and level progression
//!
//! Generation is randomised through any [`rand::Rng`], so tests can run
//! with a seeded generator.

mod challenge;
mod error;
mod evaluator;
mod generator;
mod samples;
mod session;
mod theme;
mod word;

pub use challenge::{ActivityKind, Challenge, FlashcardBack};
pub use error::{VocabError, VocabResult};
pub use evaluator::{
    evaluate, Answer, Evaluation, CORRECT_POINTS, FLASHCARD_POINTS, STORY_POINTS_CAP,
    STORY_POINTS_PER_CHAR, THEME_HIT_POINTS, THEME_MISS_PENALTY,
};
pub use generator::{
    flashcard_challenges, generate, grammar_challenges, meaning_challenges, quiz_challenges,
    scramble, spelling_challenges, story_challenges, themes_challenge, word_forms,
    GRAMMAR_DISTRACTORS, MEANING_PLACEHOLDERS, STORY_GROUP_SIZE, STORY_PROMPT, THEME_DISTRACTORS,
};
pub use samples::SAMPLE_WORDS;
pub use session::{
    FlashcardSide, Session, SessionState, View, MIN_STORY_LENGTH, QUESTIONS_PER_LEVEL,
};
pub use theme::ThemeIndex;
pub use word::{parse_word_list, WordEntry, DEFAULT_THEME, FIELD_SEPARATOR};
