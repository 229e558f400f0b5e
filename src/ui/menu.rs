use ratatui::{
    style::Style,
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use super::layout::calculate_screen_chunks;
use super::{draw_help, draw_title, highlight_style};
use crate::screens::menu::{MainMenuScreen, MenuItem};

pub fn draw_menu(f: &mut Frame, screen: &MainMenuScreen) {
    let layout = calculate_screen_chunks(f.area());
    draw_title(f, layout.header_area, &format!("Welcome, {}", screen.username));

    let items: Vec<ListItem> = MenuItem::ALL
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let style = if i == screen.selected {
                highlight_style()
            } else {
                Style::default()
            };
            ListItem::new(format!("[{}] {}", i + 1, item.label())).style(style)
        })
        .collect();

    let menu = List::new(items).block(Block::default().borders(Borders::ALL).title("Main Menu"));
    f.render_widget(menu, layout.body_area);

    draw_help(
        f,
        layout.help_area,
        &[
            ("↑/↓", "Navigate"),
            ("Enter", "Select"),
            ("1-5", "Jump"),
            ("l", "Logout"),
            ("Esc/Ctrl+C", "Quit"),
        ],
    );
}
