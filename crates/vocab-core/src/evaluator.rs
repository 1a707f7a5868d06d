//! Answer grading.

use crate::challenge::Challenge;
use serde::{Deserialize, Serialize};

/// Points for a correct spelling, meaning, grammar or quiz answer.
pub const CORRECT_POINTS: i32 = 10;
/// Points per character of a story.
pub const STORY_POINTS_PER_CHAR: i32 = 2;
/// Maximum points for a story.
pub const STORY_POINTS_CAP: i32 = 50;
/// Points per correctly selected theme word.
pub const THEME_HIT_POINTS: i32 = 5;
/// Penalty per wrongly selected theme word.
pub const THEME_MISS_PENALTY: i32 = 2;
/// Flat points for a flashcard.
pub const FLASHCARD_POINTS: i32 = 5;

/// A learner's response to a challenge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer<'a> {
    /// Typed text, a chosen option or a story.
    Text(&'a str),
    /// Words selected in the themes activity.
    Selection(&'a [String]),
    /// Flashcard self-assessment.
    Recall,
}

impl<'a> Answer<'a> {
    fn text(&self) -> &'a str {
        match *self {
            Self::Text(text) => text,
            _ => "",
        }
    }

    fn selection(&self) -> &'a [String] {
        match *self {
            Self::Selection(words) => words,
            _ => &[],
        }
    }
}

/// Outcome of grading one answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    pub is_correct: bool,
    /// Raw points. Themes grading can go negative.
    pub points: i32,
}

impl Evaluation {
    pub fn new(is_correct: bool, points: i32) -> Self {
        Self { is_correct, points }
    }

    /// Points actually added to the score.
    pub fn awarded(&self) -> u64 {
        self.points.max(0) as u64
    }

    /// Feedback line shown after grading.
    ///
    /// Partially correct themes selections read the same as wrong ones.
    pub fn feedback(&self, challenge: &Challenge) -> String {
        if self.is_correct {
            format!("Correct! +{} points", self.points)
        } else {
            format!("Not quite. The answer was: {}", challenge.answer_text())
        }
    }
}

/// Grade an answer against a challenge.
///
/// An answer of the wrong shape is graded as empty text or an empty
/// selection.
pub fn evaluate(challenge: &Challenge, answer: Answer<'_>) -> Evaluation {
    match challenge {
        Challenge::Spelling { answer: expected, .. } => {
            let correct = answer.text().to_lowercase() == expected.to_lowercase();
            exact(correct)
        }
        Challenge::Meaning { answer: expected, .. }
        | Challenge::Grammar { answer: expected, .. }
        | Challenge::Quiz { answer: expected, .. } => exact(answer.text() == expected),
        Challenge::Story { .. } => {
            let length = i32::try_from(answer.text().chars().count()).unwrap_or(i32::MAX);
            let points = length.saturating_mul(STORY_POINTS_PER_CHAR).min(STORY_POINTS_CAP);
            Evaluation::new(true, points)
        }
        Challenge::Themes { answer: expected, .. } => grade_selection(expected, answer.selection()),
        Challenge::Flashcards { .. } => Evaluation::new(true, FLASHCARD_POINTS),
    }
}

fn exact(correct: bool) -> Evaluation {
    Evaluation::new(correct, if correct { CORRECT_POINTS } else { 0 })
}

fn grade_selection(expected: &[String], selected: &[String]) -> Evaluation {
    let (hits, misses): (Vec<&String>, Vec<&String>) =
        selected.iter().partition(|word| expected.contains(word));

    let points = hits.len() as i32 * THEME_HIT_POINTS - misses.len() as i32 * THEME_MISS_PENALTY;
    let is_correct = hits.len() == expected.len() && misses.is_empty();
    Evaluation::new(is_correct, points)
}
