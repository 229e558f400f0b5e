use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use super::layout::calculate_screen_chunks;
use super::{draw_help, draw_input, draw_title};
use crate::screens::login::{LoginField, LoginScreen};

pub fn draw_login(f: &mut Frame, screen: &LoginScreen) {
    let layout = calculate_screen_chunks(f.area());
    draw_title(f, layout.header_area, "Astronomy Explorer");

    let fields = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(4)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(layout.body_area);

    draw_input(
        f,
        fields[1],
        "Username",
        screen.username.value(),
        screen.username.cursor_column(),
        screen.focus == LoginField::Username,
    );

    let masked = "*".repeat(screen.password.value().chars().count());
    draw_input(
        f,
        fields[2],
        "Password",
        &masked,
        screen.password.cursor(),
        screen.focus == LoginField::Password,
    );

    draw_help(
        f,
        layout.help_area,
        &[
            ("Enter", "Login"),
            ("Ctrl+N", "Create Account"),
            ("Tab", "Switch Field"),
            ("Esc", "Quit"),
        ],
    );
}
