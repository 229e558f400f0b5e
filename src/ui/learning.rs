use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use super::layout::calculate_screen_chunks;
use super::{draw_help, draw_title, highlight_style};
use crate::content::TOPICS;
use crate::screens::learning::LearningScreen;

pub fn draw_learning(f: &mut Frame, screen: &LearningScreen) {
    let layout = calculate_screen_chunks(f.area());
    draw_title(f, layout.header_area, "Learning Section");

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TOPICS.len() as u16 + 2),
            Constraint::Min(3),
        ])
        .split(layout.body_area);

    let items: Vec<ListItem> = TOPICS
        .iter()
        .enumerate()
        .map(|(i, topic)| {
            let mark = if screen.is_completed(topic.id) {
                Span::styled("[✓] ", Style::default().fg(Color::Green))
            } else {
                Span::from("[ ] ")
            };
            let style = if i == screen.selected {
                highlight_style()
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![mark, Span::styled(topic.title, style)]))
        })
        .collect();
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Topics"));
    f.render_widget(list, chunks[0]);

    let topic = screen.selected_topic();
    let description = Paragraph::new(topic.description)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(topic.title));
    f.render_widget(description, chunks[1]);

    draw_help(
        f,
        layout.help_area,
        &[
            ("↑/↓", "Navigate"),
            ("r", "Read More"),
            ("s", "Search"),
            ("c", "Mark Complete"),
            ("Esc", "Back"),
        ],
    );
}
