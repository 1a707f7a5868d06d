//! Error types for session transitions.
//!
//! Parsing, generation and grading never fail. These errors only come from
//! user actions that arrive while the session is in the wrong state, and
//! their messages are meant to be shown to the learner as-is.

use crate::challenge::ActivityKind;
use thiserror::Error;

/// Errors returned by [`Session`](crate::Session) transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VocabError {
    /// Submitted text produced no word entries.
    #[error("Please enter some words!")]
    EmptyWordList,

    /// An activity was requested before any words were loaded.
    #[error("Please add some words first!")]
    NoWords,

    /// An answer or interaction arrived with no challenge on screen.
    #[error("No activity is in progress")]
    NoActiveChallenge,

    /// The current challenge was already graded.
    #[error("This question has already been answered")]
    AlreadyAnswered,

    /// Blank typed answer.
    #[error("Please enter an answer first")]
    EmptyAnswer,

    /// Story shorter than the minimum length.
    #[error("Stories need at least {min} characters")]
    StoryTooShort { min: usize },

    /// Themes submission with nothing selected.
    #[error("Select at least one word first")]
    EmptySelection,

    /// The interaction does not apply to the active activity.
    #[error("{0} does not accept that kind of answer")]
    UnexpectedResponse(ActivityKind),

    /// Flashcard marked as recalled while still showing its front.
    #[error("Flip the card before marking it")]
    FlashcardNotFlipped,

    /// Activity name not recognised.
    #[error("Unknown activity: {0}")]
    UnknownActivity(String),
}

/// Result type for session transitions.
pub type VocabResult<T> = Result<T, VocabError>;
