use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::screens::ActiveScreen;

pub mod layout;
mod learning;
mod login;
mod menu;
mod notice;
mod profile;
mod quiz;
mod schedule;

pub use layout::{calculate_screen_chunks, centered_rect};
pub use profile::format_result_time;

pub fn draw(f: &mut Frame, app: &App) {
    match app.session.active() {
        ActiveScreen::Login(screen) => login::draw_login(f, screen),
        ActiveScreen::MainMenu(screen) => menu::draw_menu(f, screen),
        ActiveScreen::Profile(screen) => profile::draw_profile(f, screen),
        ActiveScreen::Quiz(screen) => quiz::draw_quiz(f, screen),
        ActiveScreen::Learning(screen) => learning::draw_learning(f, screen),
        ActiveScreen::Schedule(screen) => schedule::draw_schedule(f, screen),
    }

    if let Some(notice) = &app.notice {
        notice::draw_notice(f, notice);
    }
}

fn key_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

fn highlight_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// One help line: each key in cyan followed by what it does.
fn key_hints(hints: &[(&'static str, &'static str)]) -> Line<'static> {
    let spans: Vec<Span> = hints
        .iter()
        .flat_map(|(key, action)| {
            [
                Span::styled(*key, key_style()),
                Span::from(format!(" {}  ", action)),
            ]
        })
        .collect();
    Line::from(spans)
}

fn draw_title(f: &mut Frame, area: Rect, title: &str) {
    let title = Paragraph::new(title.to_string())
        .style(key_style())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, area);
}

fn draw_help(f: &mut Frame, area: Rect, hints: &[(&'static str, &'static str)]) {
    let help = Paragraph::new(vec![key_hints(hints)])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, area);
}

/// Bordered single-line field; puts the terminal cursor in it when focused.
fn draw_input(f: &mut Frame, area: Rect, title: &str, shown: &str, cursor_column: usize, focused: bool) {
    let field = Paragraph::new(shown.to_string()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(focused))
            .title(title.to_string()),
    );
    f.render_widget(field, area);

    if focused {
        let max_x = area.x + area.width.saturating_sub(2);
        let x = (area.x + 1 + cursor_column as u16).min(max_x);
        f.set_cursor_position((x, area.y + 1));
    }
}
