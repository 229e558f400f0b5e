use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::layout::centered_rect;
use crate::models::{Notice, NoticeKind};
use crate::utils::display_width;

pub fn draw_notice(f: &mut Frame, notice: &Notice) {
    let area = f.area();
    let popup_width = centered_rect(60, 1, area).width;
    // Rough line count after wrapping, plus borders, spacer and footer.
    let text_width = popup_width.saturating_sub(2).max(1) as usize;
    let message_lines = display_width(&notice.message)
        .div_ceil(text_width)
        .clamp(1, usize::from(area.height)) as u16;
    let popup = centered_rect(60, message_lines.saturating_add(4), area);

    let color = match notice.kind {
        NoticeKind::Info => Color::Green,
        NoticeKind::Error => Color::Red,
    };

    f.render_widget(Clear, popup);
    let text = vec![
        Line::from(notice.message.clone()),
        Line::from(""),
        Line::styled(
            "Press Enter to continue",
            Style::default().add_modifier(Modifier::DIM),
        ),
    ];
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .title(notice.title.clone()),
        );
    f.render_widget(widget, popup);
}
