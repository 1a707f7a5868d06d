//! UI rendering for vocab master.

use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, Paragraph, Wrap},
    Frame,
};
use vocab_core::{ActivityKind, Challenge, FlashcardSide, View, MIN_STORY_LENGTH, QUESTIONS_PER_LEVEL};

pub fn draw(f: &mut Frame, app: &App) {
    match app.session.view() {
        View::Input => draw_word_input(f, app),
        View::Menu => draw_menu(f, app),
        View::Activity => draw_activity(f, app),
    }

    if app.show_help {
        draw_help(f);
    }

    if let Some(msg) = &app.message {
        draw_message(f, msg);
    }
}

fn header(title: &str) -> Paragraph<'_> {
    Paragraph::new(title)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL))
}

fn footer(keys: &str) -> Paragraph<'_> {
    Paragraph::new(keys)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL))
}

fn draw_word_input(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    f.render_widget(header("Vocab Master"), chunks[0]);

    let format = Paragraph::new(vec![
        Line::from("Enter words in this format (one per line):"),
        Line::from(Span::styled(
            "word|part of speech|definition|pronunciation|example sentence|theme",
            Style::default().fg(Color::Yellow),
        )),
    ])
    .block(Block::default().borders(Borders::ALL).title(" Add Your Words "));
    f.render_widget(format, chunks[1]);

    let editor_area = chunks[2];
    let editor = Paragraph::new(app.word_list_buffer.as_str())
        .block(Block::default().borders(Borders::ALL).title(" Word List "));
    f.render_widget(editor, editor_area);

    // Cursor at the end of the text
    let rows = app.word_list_buffer.split('\n').count().max(1) as u16;
    let last = app.word_list_buffer.rsplit('\n').next().unwrap_or_default();
    let x = editor_area.x + 1 + last.chars().count() as u16;
    let y = editor_area.y + rows;
    if x < editor_area.right().saturating_sub(1) && y < editor_area.bottom().saturating_sub(1) {
        f.set_cursor_position((x, y));
    }

    let keys = if app.session.word_count() > 0 {
        "Ctrl+S:Generate activities  Ctrl+L:Use sample words  Esc:Menu  Ctrl+C:Quit"
    } else {
        "Ctrl+S:Generate activities  Ctrl+L:Use sample words  Ctrl+C:Quit"
    };
    f.render_widget(footer(keys), chunks[3]);
}

fn draw_menu(f: &mut Frame, app: &App) {
    let state = app.session.state();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(f.area());

    let mut lines = vec![
        Line::from(Span::styled("Vocab Master", Style::default().add_modifier(Modifier::BOLD))),
        Line::from(format!(
            "Level {} | Score: {} | Words loaded: {}",
            state.level,
            state.score,
            app.session.word_count()
        )),
    ];
    if let Some(feedback) = app.session.feedback() {
        lines.push(Line::from(Span::styled(feedback, Style::default().fg(Color::Cyan))));
    }
    let title = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let items: Vec<ListItem> = ActivityKind::ALL
        .iter()
        .enumerate()
        .map(|(i, kind)| {
            let spans = vec![
                Span::styled(format!("[{}] ", kind.key()), Style::default().fg(Color::Yellow)),
                Span::styled(kind.title(), Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(format!(" - {}", kind.tagline()), Style::default().fg(Color::Gray)),
            ];
            ListItem::new(Line::from(spans)).style(if i == app.menu_cursor {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            })
        })
        .collect();
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(" Activities "));
    f.render_widget(list, chunks[1]);

    let progress = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(format!(" Level {} ", state.level)))
        .gauge_style(Style::default().fg(Color::Green))
        .ratio(state.level_progress())
        .label(format!("{}/{}", state.questions_answered_in_level, QUESTIONS_PER_LEVEL));
    f.render_widget(progress, chunks[2]);

    f.render_widget(
        footer("j/k:Navigate  Enter/1-7:Start  e:Edit words  ?:Help  q:Quit"),
        chunks[3],
    );
}

fn draw_activity(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(f.area());

    let state = app.session.state();
    let title = app.session.activity().map_or("", |kind| kind.title());
    let status = Paragraph::new(Line::from(vec![
        Span::styled(title, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(format!("   Score: {}  Level {}", state.score, state.level)),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, chunks[0]);

    let Some(challenge) = app.session.challenge() else {
        return;
    };

    match challenge {
        Challenge::Spelling { .. } => draw_spelling(f, chunks[1], app, challenge),
        Challenge::Meaning { .. } | Challenge::Grammar { .. } | Challenge::Quiz { .. } => {
            draw_choices(f, chunks[1], app, challenge)
        }
        Challenge::Story { .. } => draw_story(f, chunks[1], app, challenge),
        Challenge::Themes { .. } => draw_themes(f, chunks[1], app, challenge),
        Challenge::Flashcards { .. } => draw_flashcard(f, chunks[1], app, challenge),
    }

    let feedback_style = match app.session.evaluation() {
        Some(e) if e.is_correct => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        Some(_) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        None => Style::default(),
    };
    let feedback = Paragraph::new(app.session.feedback().unwrap_or_default())
        .style(feedback_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(feedback, chunks[2]);

    f.render_widget(footer(activity_keys(app, challenge)), chunks[3]);
}

fn activity_keys(app: &App, challenge: &Challenge) -> &'static str {
    if app.session.is_answered() {
        return "Enter/n:Next question  Esc:Menu";
    }
    match challenge.kind() {
        ActivityKind::Spelling => "Type the word  Enter:Submit  Esc:Menu",
        ActivityKind::Story => "Type your story  Enter:Submit  Esc:Menu",
        ActivityKind::Meaning | ActivityKind::Grammar | ActivityKind::Quiz => {
            "j/k:Navigate  Enter:Choose  1-4:Pick  Esc:Menu"
        }
        ActivityKind::Themes => "j/k:Navigate  Space:Toggle  Enter:Submit selection  Esc:Menu",
        ActivityKind::Flashcards => match app.session.flashcard_side() {
            FlashcardSide::Front => "Space:Flip to see answer  Esc:Menu",
            FlashcardSide::Back => "Space:Flip back  Enter:Got it right!  Esc:Menu",
        },
    }
}

fn draw_spelling(f: &mut Frame, area: Rect, app: &App, challenge: &Challenge) {
    let Challenge::Spelling { question, hint, pronunciation, scrambled, .. } = challenge else {
        return;
    };

    let mut lines = vec![Line::from(Span::styled(
        question.as_str(),
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    if app.config.display.show_hints {
        lines.push(Line::from(hint.as_str()));
    }
    if app.config.display.show_pronunciation && !pronunciation.is_empty() {
        lines.push(Line::from(Span::styled(
            pronunciation.as_str(),
            Style::default().fg(Color::DarkGray),
        )));
    }
    let spaced: Vec<String> = scrambled.chars().map(String::from).collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        spaced.join(" "),
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(format!("> {}", app.answer_buffer)));

    let body = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(body, area);
}

fn draw_choices(f: &mut Frame, area: Rect, app: &App, challenge: &Challenge) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let question = Paragraph::new(challenge.prompt())
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(question, chunks[0]);

    let answered = app.session.is_answered();
    let answer = challenge.answer_text();
    let items: Vec<ListItem> = challenge
        .options()
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let mut style = Style::default();
            if answered && *option == answer {
                style = style.fg(Color::Green).add_modifier(Modifier::BOLD);
            }
            if i == app.option_cursor {
                style = style.bg(Color::DarkGray);
            }
            ListItem::new(format!("[{}] {}", i + 1, option)).style(style)
        })
        .collect();
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(" Options "));
    f.render_widget(list, chunks[1]);
}

fn draw_story(f: &mut Frame, area: Rect, app: &App, challenge: &Challenge) {
    let Challenge::Story { prompt, words, theme } = challenge else {
        return;
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(0)])
        .split(area);

    let info = Paragraph::new(vec![
        Line::from(Span::styled(prompt.as_str(), Style::default().add_modifier(Modifier::BOLD))),
        Line::from(Span::styled(words.join("  "), Style::default().fg(Color::Cyan))),
        Line::from(Span::styled(format!("Theme: {theme}"), Style::default().fg(Color::DarkGray))),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(info, chunks[0]);

    let length = app.answer_buffer.chars().count();
    let counter_style = if length < MIN_STORY_LENGTH {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Green)
    };
    let editor = Paragraph::new(app.answer_buffer.as_str())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Your Story ")
                .title_bottom(Line::from(Span::styled(
                    format!(" {length}/{MIN_STORY_LENGTH} characters "),
                    counter_style,
                ))),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(editor, chunks[1]);
}

fn draw_themes(f: &mut Frame, area: Rect, app: &App, challenge: &Challenge) {
    let Challenge::Themes { words, answer, .. } = challenge else {
        return;
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let question = Paragraph::new(challenge.prompt())
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(question, chunks[0]);

    let state = app.session.state();
    let answered = app.session.is_answered();
    let items: Vec<ListItem> = words
        .iter()
        .enumerate()
        .map(|(i, word)| {
            let selected = state.is_selected(word);
            let mut style = Style::default();
            if answered {
                if answer.contains(word) {
                    style = style.fg(Color::Green);
                } else if selected {
                    style = style.fg(Color::Red);
                }
            } else if selected {
                style = style.fg(Color::Blue).add_modifier(Modifier::BOLD);
            }
            if i == app.option_cursor {
                style = style.bg(Color::DarkGray);
            }
            let mark = if selected { "[x]" } else { "[ ]" };
            ListItem::new(format!("{mark} {word}")).style(style)
        })
        .collect();
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(" Words "));
    f.render_widget(list, chunks[1]);
}

fn draw_flashcard(f: &mut Frame, area: Rect, app: &App, challenge: &Challenge) {
    let Challenge::Flashcards { front, back } = challenge else {
        return;
    };

    let mut lines = vec![Line::from(Span::styled(
        front.as_str(),
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    ))];

    if app.session.flashcard_side() == FlashcardSide::Back {
        let label = Style::default().add_modifier(Modifier::BOLD);
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Definition: ", label),
            Span::raw(back.definition.as_str()),
        ]));
        if app.config.display.show_pronunciation {
            lines.push(Line::from(vec![
                Span::styled("Pronunciation: ", label),
                Span::raw(back.pronunciation.as_str()),
            ]));
        }
        lines.push(Line::from(vec![
            Span::styled("Part of Speech: ", label),
            Span::raw(back.part_of_speech.as_str()),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Example: ", label),
            Span::raw(back.example.as_str()),
        ]));
    }

    let title = match app.session.flashcard_side() {
        FlashcardSide::Front => " Front ",
        FlashcardSide::Back => " Back ",
    };
    let card = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: true });
    f.render_widget(card, area);
}

fn draw_help(f: &mut Frame) {
    let area = centered_rect(60, 80, f.area());
    f.render_widget(Clear, area);

    let help = r#"
Vocab Master Keybindings

Word List:
  Ctrl+S          Generate activities
  Ctrl+L          Use sample words
  Esc             Back to menu

Menu:
  j/k, Up/Down    Navigate activities
  Enter, 1-7      Start activity
  e               Edit word list
  q               Quit

Activities:
  Enter           Submit / choose / next question
  j/k, Up/Down    Move between options
  1-4             Pick an option
  Space           Toggle theme word / flip flashcard
  Esc             Back to menu

Press any key to close
"#;

    let popup = Paragraph::new(help)
        .block(Block::default().borders(Borders::ALL).title(" Help "))
        .wrap(Wrap { trim: false });
    f.render_widget(popup, area);
}

fn draw_message(f: &mut Frame, msg: &str) {
    let area = Rect::new(
        f.area().x + 2,
        f.area().height.saturating_sub(5),
        f.area().width.saturating_sub(4),
        3,
    );
    f.render_widget(Clear, area);

    let message = Paragraph::new(msg)
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
