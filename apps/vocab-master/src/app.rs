//! Application state and key handling.
//!
//! All game rules live in [`vocab_core::Session`]; this layer only turns
//! keys into session actions and keeps the text being typed.

use crate::config::Config;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use vocab_core::{ActivityKind, Challenge, Session, View, VocabResult, SAMPLE_WORDS};

pub struct App {
    pub session: Session,
    pub config: Config,
    /// Word list being edited in the input view.
    pub word_list_buffer: String,
    /// Typed spelling answer or story.
    pub answer_buffer: String,
    /// Highlighted activity in the menu.
    pub menu_cursor: usize,
    /// Highlighted option or theme word.
    pub option_cursor: usize,
    pub message: Option<String>,
    pub show_help: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        let mut app = Self {
            session: Session::new(),
            config,
            word_list_buffer: String::new(),
            answer_buffer: String::new(),
            menu_cursor: 0,
            option_cursor: 0,
            message: None,
            show_help: false,
        };

        if app.config.session.load_samples_on_start {
            app.load_samples();
        }
        app
    }

    pub fn can_quit(&self) -> bool {
        !self.show_help && self.session.view() == View::Menu
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        self.message = None;

        if self.show_help {
            self.show_help = false;
            return;
        }

        match self.session.view() {
            View::Input => self.handle_input_key(key),
            View::Menu => self.handle_menu_key(key),
            View::Activity => self.handle_activity_key(key),
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('s') if ctrl => {
                let result = self.session.submit_word_list(&self.word_list_buffer);
                self.report(result);
            }
            KeyCode::Char('l') if ctrl => self.load_samples(),
            KeyCode::Esc => {
                if self.session.word_count() > 0 {
                    self.session.back_to_menu();
                }
            }
            KeyCode::Enter => self.word_list_buffer.push('\n'),
            KeyCode::Backspace => { self.word_list_buffer.pop(); }
            KeyCode::Char(c) if !ctrl => self.word_list_buffer.push(c),
            _ => {}
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.menu_cursor = (self.menu_cursor + 1).min(ActivityKind::ALL.len() - 1);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.menu_cursor = self.menu_cursor.saturating_sub(1);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.start(ActivityKind::ALL[self.menu_cursor]),
            KeyCode::Char('e') => self.session.edit_words(),
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Char(c) => {
                if let Some(kind) = ActivityKind::from_key(c) {
                    self.start(kind);
                }
            }
            _ => {}
        }
    }

    fn handle_activity_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc {
            self.session.back_to_menu();
            self.clear_answer();
            return;
        }

        let Some(kind) = self.session.challenge().map(Challenge::kind) else {
            self.session.back_to_menu();
            return;
        };

        if self.session.is_answered() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Char('n') | KeyCode::Char(' ')) {
                self.next_question();
            }
            return;
        }

        match kind {
            ActivityKind::Spelling | ActivityKind::Story => self.handle_text_key(key),
            ActivityKind::Meaning | ActivityKind::Grammar | ActivityKind::Quiz => {
                self.handle_choice_key(key)
            }
            ActivityKind::Themes => self.handle_themes_key(key),
            ActivityKind::Flashcards => self.handle_flashcard_key(key),
        }
    }

    fn handle_text_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Enter => {
                let result = self.session.submit_answer(&self.answer_buffer);
                self.report(result);
            }
            KeyCode::Backspace => { self.answer_buffer.pop(); }
            KeyCode::Char(c) if !ctrl => self.answer_buffer.push(c),
            _ => {}
        }
    }

    fn handle_choice_key(&mut self, key: KeyEvent) {
        let count = self.session.challenge().map_or(0, |c| c.options().len());
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.move_cursor(1, count),
            KeyCode::Char('k') | KeyCode::Up => self.move_cursor(-1, count),
            KeyCode::Enter | KeyCode::Char(' ') => self.choose(self.option_cursor),
            KeyCode::Char(c) => {
                if let Some(index) = c.to_digit(10).and_then(|d| (d as usize).checked_sub(1)) {
                    if index < count {
                        self.choose(index);
                    }
                }
            }
            _ => {}
        }
    }

    fn handle_themes_key(&mut self, key: KeyEvent) {
        let words = match self.session.challenge() {
            Some(Challenge::Themes { words, .. }) => words.clone(),
            _ => return,
        };
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.move_cursor(1, words.len()),
            KeyCode::Char('k') | KeyCode::Up => self.move_cursor(-1, words.len()),
            KeyCode::Char(' ') => {
                if let Some(word) = words.get(self.option_cursor) {
                    let result = self.session.toggle_theme_word(word);
                    self.report(result);
                }
            }
            KeyCode::Enter => {
                let result = self.session.submit_selection();
                self.report(result);
            }
            _ => {}
        }
    }

    fn handle_flashcard_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(' ') | KeyCode::Char('f') => {
                let result = self.session.flip_flashcard();
                self.report(result);
            }
            KeyCode::Enter | KeyCode::Char('y') => {
                let result = self.session.mark_recalled();
                self.report(result);
            }
            _ => {}
        }
    }

    fn move_cursor(&mut self, delta: isize, count: usize) {
        if count == 0 {
            return;
        }
        self.option_cursor = self.option_cursor.saturating_add_signed(delta).min(count - 1);
    }

    fn choose(&mut self, index: usize) {
        let Some(option) = self.session.challenge().and_then(|c| c.options().get(index).cloned()) else {
            return;
        };
        self.option_cursor = index;
        let result = self.session.submit_answer(&option);
        self.report(result);
    }

    fn start(&mut self, kind: ActivityKind) {
        self.clear_answer();
        let result = self.session.start_activity(kind).map(|_| ());
        self.report(result);
    }

    fn next_question(&mut self) {
        self.clear_answer();
        let result = self.session.next_question().map(|_| ());
        self.report(result);
    }

    fn load_samples(&mut self) {
        let result = self.session.load_samples();
        if self.report(result).is_some() {
            self.word_list_buffer = SAMPLE_WORDS.to_string();
        }
    }

    fn clear_answer(&mut self) {
        self.answer_buffer.clear();
        self.option_cursor = 0;
    }

    /// Surface a rejected action as a message.
    fn report<T>(&mut self, result: VocabResult<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.message = Some(err.to_string());
                None
            }
        }
    }
}
