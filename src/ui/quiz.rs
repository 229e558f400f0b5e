use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use super::layout::calculate_screen_chunks;
use super::{draw_help, draw_input, draw_title, highlight_style};
use crate::quiz::QuizState;
use crate::screens::quiz::QuizScreen;

pub fn draw_quiz(f: &mut Frame, screen: &QuizScreen) {
    let layout = calculate_screen_chunks(f.area());
    draw_title(f, layout.header_area, "Astronomy Quiz");

    match screen.engine.state() {
        QuizState::InProgress(_) => {
            draw_question(f, layout.body_area, screen);
            draw_help(
                f,
                layout.help_area,
                &[
                    ("↑/↓", "Choose"),
                    ("Enter", "Answer"),
                    ("1-4", "Answer"),
                    ("Esc", "Abandon Quiz"),
                ],
            );
        }
        QuizState::NotStarted | QuizState::Completed => {
            draw_age_prompt(f, layout.body_area, screen);
            draw_help(
                f,
                layout.help_area,
                &[("Enter", "Start Quiz"), ("Esc", "Back to Menu")],
            );
        }
    }
}

fn draw_age_prompt(f: &mut Frame, area: Rect, screen: &QuizScreen) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(4)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    f.render_widget(
        Paragraph::new("Questions are chosen to match your age."),
        chunks[0],
    );
    draw_input(
        f,
        chunks[1],
        "Enter your age",
        screen.age_input.value(),
        screen.age_input.cursor_column(),
        true,
    );
}

fn draw_question(f: &mut Frame, area: Rect, screen: &QuizScreen) {
    let Some(view) = screen.engine.current_question() else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(6)])
        .split(area);

    let level = screen
        .engine
        .tier()
        .map(|tier| tier.label())
        .unwrap_or_default();
    let prompt = Paragraph::new(vec![Line::from(view.prompt)])
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(format!(
            "Question {}/{} ({})",
            view.number, view.total, level
        )));
    f.render_widget(prompt, chunks[0]);

    let options: Vec<ListItem> = view
        .options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let style = if i == screen.selected {
                highlight_style()
            } else {
                Style::default()
            };
            ListItem::new(format!("{}. {}", i + 1, option)).style(style)
        })
        .collect();
    let list = List::new(options).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Score: {}", screen.engine.score())),
    );
    f.render_widget(list, chunks[1]);
}
