use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

use super::layout::{calculate_screen_chunks, centered_rect};
use super::{draw_help, draw_input, draw_title, highlight_style, key_hints};
use crate::screens::schedule::{EditorField, EditorMode, ScheduleEditor, ScheduleScreen};
use crate::utils::truncate_string;

pub fn draw_schedule(f: &mut Frame, screen: &ScheduleScreen) {
    let layout = calculate_screen_chunks(f.area());
    draw_title(f, layout.header_area, "Observation Schedule");

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(layout.body_area);

    let row_width = chunks[0].width.saturating_sub(2) as usize;
    let items: Vec<ListItem> = screen
        .entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let style = if i == screen.selected {
                highlight_style()
            } else {
                Style::default()
            };
            let line = format!("{}: {}", entry.time, entry.object);
            ListItem::new(truncate_string(&line, row_width)).style(style)
        })
        .collect();
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Tonight"));
    f.render_widget(list, chunks[0]);

    if screen.showing_defaults {
        let hint = Paragraph::new("Suggested events. Press 'a' to start your own schedule.")
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(hint, chunks[1]);
    }

    draw_help(
        f,
        layout.help_area,
        &[
            ("↑/↓", "Navigate"),
            ("a", "Add"),
            ("e", "Edit"),
            ("Esc", "Back"),
        ],
    );

    if let Some(editor) = &screen.editor {
        draw_editor(f, editor);
    }
}

fn draw_editor(f: &mut Frame, editor: &ScheduleEditor) {
    let area = centered_rect(60, 10, f.area());
    f.render_widget(Clear, area);

    let title = match editor.mode {
        EditorMode::Add => "Add Event",
        EditorMode::Edit(_) => "Edit Event",
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(title);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .split(inner);

    draw_input(
        f,
        rows[0],
        "Time (e.g. 21:00)",
        editor.time.value(),
        editor.time.cursor_column(),
        editor.focus == EditorField::Time,
    );
    draw_input(
        f,
        rows[1],
        "Object",
        editor.object.value(),
        editor.object.cursor_column(),
        editor.focus == EditorField::Object,
    );
    draw_editor_help(f, rows[2]);
}

fn draw_editor_help(f: &mut Frame, area: Rect) {
    let help = Paragraph::new(key_hints(&[
        ("Tab", "Switch"),
        ("Enter", "Save"),
        ("Esc", "Cancel"),
    ]));
    f.render_widget(help, area);
}
