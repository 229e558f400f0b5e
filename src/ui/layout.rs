use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct ScreenLayout {
    pub header_area: Rect,
    pub body_area: Rect,
    pub help_area: Rect,
}

pub fn calculate_screen_chunks(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .split(area);

    ScreenLayout {
        header_area: chunks[0],
        body_area: chunks[1],
        help_area: chunks[2],
    }
}

/// A `height`-row box, `percent_x` wide, centered in `area`.
pub fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let width = (u32::from(area.width) * u32::from(percent_x.min(100)) / 100) as u16;
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
