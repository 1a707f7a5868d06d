//! Session state and progress tracking.
//!
//! [`Session`] is the single owner of everything that changes while a
//! learner plays: the active word list and its theme index, the current
//! challenge, score and level. Every user action maps to one method, and
//! each method leaves the session fully updated before returning.

use crate::challenge::{ActivityKind, Challenge};
use crate::error::{VocabError, VocabResult};
use crate::evaluator::{evaluate, Answer, Evaluation};
use crate::generator::generate;
use crate::samples::SAMPLE_WORDS;
use crate::theme::ThemeIndex;
use crate::word::{parse_word_list, WordEntry};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Answers needed to complete a level.
pub const QUESTIONS_PER_LEVEL: u32 = 5;

/// Shortest story accepted for grading, in characters.
pub const MIN_STORY_LENGTH: usize = 20;

/// Score and level progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    /// Cumulative score. Never decreases.
    pub score: u64,
    /// Current level, starting at 1.
    pub level: u32,
    /// Answers given in the current level.
    pub questions_answered_in_level: u32,
    /// Words picked in the themes activity, in selection order.
    pub selected_answers: Vec<String>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            score: 0,
            level: 1,
            questions_answered_in_level: 0,
            selected_answers: Vec::new(),
        }
    }
}

impl SessionState {
    /// Apply a graded answer. Returns true if it completed the level.
    pub fn record(&mut self, evaluation: &Evaluation) -> bool {
        self.score += evaluation.awarded();
        self.questions_answered_in_level += 1;

        if self.questions_answered_in_level >= QUESTIONS_PER_LEVEL {
            self.level += 1;
            self.questions_answered_in_level = 0;
            true
        } else {
            false
        }
    }

    /// Fraction of the current level completed, in `0.0..1.0`.
    pub fn level_progress(&self) -> f64 {
        f64::from(self.questions_answered_in_level) / f64::from(QUESTIONS_PER_LEVEL)
    }

    /// Add or remove a word from the themes selection. Returns whether the
    /// word is selected afterwards.
    pub fn toggle_selection(&mut self, word: &str) -> bool {
        if let Some(pos) = self.selected_answers.iter().position(|w| w == word) {
            self.selected_answers.remove(pos);
            false
        } else {
            self.selected_answers.push(word.to_string());
            true
        }
    }

    pub fn is_selected(&self, word: &str) -> bool {
        self.selected_answers.iter().any(|w| w == word)
    }

    pub fn clear_selection(&mut self) {
        self.selected_answers.clear();
    }
}

/// Screen the learner is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// Entering the word list.
    #[default]
    Input,
    /// Choosing an activity.
    Menu,
    /// Playing an activity.
    Activity,
}

/// Visible side of the current flashcard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashcardSide {
    #[default]
    Front,
    Back,
}

impl FlashcardSide {
    pub fn flipped(self) -> Self {
        match self {
            Self::Front => Self::Back,
            Self::Back => Self::Front,
        }
    }
}

/// One learner's play session.
#[derive(Debug)]
pub struct Session<R = StdRng> {
    words: Vec<WordEntry>,
    themes: ThemeIndex,
    state: SessionState,
    view: View,
    activity: Option<ActivityKind>,
    challenge: Option<Challenge>,
    evaluation: Option<Evaluation>,
    feedback: Option<String>,
    flashcard_side: FlashcardSide,
    rng: R,
}

impl Session<StdRng> {
    /// Create a session seeded from the OS.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl Default for Session<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Session<R> {
    /// Create a session drawing randomness from `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self {
            words: Vec::new(),
            themes: ThemeIndex::default(),
            state: SessionState::default(),
            view: View::Input,
            activity: None,
            challenge: None,
            evaluation: None,
            feedback: None,
            flashcard_side: FlashcardSide::Front,
            rng,
        }
    }

    pub fn words(&self) -> &[WordEntry] {
        &self.words
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn themes(&self) -> &ThemeIndex {
        &self.themes
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn activity(&self) -> Option<ActivityKind> {
        self.activity
    }

    pub fn challenge(&self) -> Option<&Challenge> {
        self.challenge.as_ref()
    }

    /// Grade of the current challenge, once answered.
    pub fn evaluation(&self) -> Option<&Evaluation> {
        self.evaluation.as_ref()
    }

    pub fn is_answered(&self) -> bool {
        self.evaluation.is_some()
    }

    pub fn feedback(&self) -> Option<&str> {
        self.feedback.as_deref()
    }

    pub fn flashcard_side(&self) -> FlashcardSide {
        self.flashcard_side
    }

    /// Replace the word list with the parsed contents of `text`.
    ///
    /// Text with no usable lines is rejected and the current list is kept.
    /// Score and level carry over to the new list.
    pub fn submit_word_list(&mut self, text: &str) -> VocabResult<usize> {
        let words = parse_word_list(text);
        if words.is_empty() {
            self.feedback = Some(VocabError::EmptyWordList.to_string());
            return self.reject(VocabError::EmptyWordList);
        }

        let count = words.len();
        self.themes = ThemeIndex::from_words(&words);
        self.words = words;
        self.activity = None;
        self.view = View::Menu;
        self.reset_question();
        self.feedback = Some(format!("Added {count} words! Ready to play!"));

        info!(words = count, themes = self.themes.len(), "loaded word list");
        Ok(count)
    }

    /// Load the built-in sample words.
    pub fn load_samples(&mut self) -> VocabResult<usize> {
        self.submit_word_list(SAMPLE_WORDS)
    }

    /// Go back to the word list editor.
    pub fn edit_words(&mut self) {
        self.activity = None;
        self.view = View::Input;
        self.reset_question();
    }

    /// Leave the current activity. Score and level are kept.
    pub fn back_to_menu(&mut self) {
        self.activity = None;
        self.view = View::Menu;
        self.reset_question();
    }

    /// Start an activity with a fresh challenge.
    pub fn start_activity(&mut self, kind: ActivityKind) -> VocabResult<&Challenge> {
        if self.words.is_empty() {
            self.feedback = Some(VocabError::NoWords.to_string());
            return self.reject(VocabError::NoWords);
        }

        info!(activity = %kind, "starting activity");
        self.activity = Some(kind);
        self.view = View::Activity;
        self.load_challenge(kind)
    }

    /// Replace the current challenge with a new one of the same activity.
    pub fn next_question(&mut self) -> VocabResult<&Challenge> {
        match self.activity {
            Some(kind) => self.load_challenge(kind),
            None => self.reject(VocabError::NoActiveChallenge),
        }
    }

    /// Select or deselect a word in the themes activity. The selection is
    /// frozen once graded.
    pub fn toggle_theme_word(&mut self, word: &str) -> VocabResult<bool> {
        match self.pending_kind()? {
            ActivityKind::Themes => {
                let selected = self.state.toggle_selection(word);
                debug!(word, selected, "toggled theme word");
                Ok(selected)
            }
            kind => self.reject(VocabError::UnexpectedResponse(kind)),
        }
    }

    /// Turn the current flashcard over.
    pub fn flip_flashcard(&mut self) -> VocabResult<FlashcardSide> {
        match self.challenge.as_ref().map(Challenge::kind) {
            Some(ActivityKind::Flashcards) => {
                self.flashcard_side = self.flashcard_side.flipped();
                Ok(self.flashcard_side)
            }
            Some(kind) => self.reject(VocabError::UnexpectedResponse(kind)),
            None => self.reject(VocabError::NoActiveChallenge),
        }
    }

    /// Grade a typed answer, chosen option or story.
    pub fn submit_answer(&mut self, text: &str) -> VocabResult<Evaluation> {
        match self.pending_kind()? {
            kind @ (ActivityKind::Themes | ActivityKind::Flashcards) => {
                self.reject(VocabError::UnexpectedResponse(kind))
            }
            ActivityKind::Story if text.chars().count() < MIN_STORY_LENGTH => {
                self.reject(VocabError::StoryTooShort { min: MIN_STORY_LENGTH })
            }
            ActivityKind::Story => self.record(Answer::Text(text)),
            _ if text.trim().is_empty() => self.reject(VocabError::EmptyAnswer),
            _ => self.record(Answer::Text(text)),
        }
    }

    /// Grade the current themes selection.
    pub fn submit_selection(&mut self) -> VocabResult<Evaluation> {
        match self.pending_kind()? {
            ActivityKind::Themes if self.state.selected_answers.is_empty() => {
                self.reject(VocabError::EmptySelection)
            }
            ActivityKind::Themes => {
                let selected = self.state.selected_answers.clone();
                self.record(Answer::Selection(&selected))
            }
            kind => self.reject(VocabError::UnexpectedResponse(kind)),
        }
    }

    /// Mark the current flashcard as recalled. The card must show its back.
    pub fn mark_recalled(&mut self) -> VocabResult<Evaluation> {
        match self.pending_kind()? {
            ActivityKind::Flashcards if self.flashcard_side == FlashcardSide::Front => {
                self.reject(VocabError::FlashcardNotFlipped)
            }
            ActivityKind::Flashcards => self.record(Answer::Recall),
            kind => self.reject(VocabError::UnexpectedResponse(kind)),
        }
    }

    fn load_challenge(&mut self, kind: ActivityKind) -> VocabResult<&Challenge> {
        self.reset_question();
        match generate(kind, &self.words, &self.themes, &mut self.rng) {
            Some(challenge) => Ok(&*self.challenge.insert(challenge)),
            None => self.reject(VocabError::NoWords),
        }
    }

    /// Kind of the challenge waiting for an answer.
    fn pending_kind(&self) -> VocabResult<ActivityKind> {
        let Some(challenge) = &self.challenge else {
            return self.reject(VocabError::NoActiveChallenge);
        };
        if self.evaluation.is_some() {
            return self.reject(VocabError::AlreadyAnswered);
        }
        Ok(challenge.kind())
    }

    fn record(&mut self, answer: Answer<'_>) -> VocabResult<Evaluation> {
        let Some(challenge) = &self.challenge else {
            return self.reject(VocabError::NoActiveChallenge);
        };

        let evaluation = evaluate(challenge, answer);
        let feedback = evaluation.feedback(challenge);
        let leveled_up = self.state.record(&evaluation);

        info!(
            activity = %challenge.kind(),
            correct = evaluation.is_correct,
            points = evaluation.points,
            score = self.state.score,
            "answer evaluated"
        );
        if leveled_up {
            info!(level = self.state.level, "level up");
        }

        self.evaluation = Some(evaluation);
        self.feedback = Some(feedback);
        Ok(evaluation)
    }

    fn reset_question(&mut self) {
        self.challenge = None;
        self.evaluation = None;
        self.feedback = None;
        self.flashcard_side = FlashcardSide::Front;
        self.state.clear_selection();
    }

    fn reject<T>(&self, error: VocabError) -> VocabResult<T> {
        warn!(%error, view = ?self.view, "rejected action");
        Err(error)
    }
}
