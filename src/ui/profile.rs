use chrono::{Local, NaiveDateTime};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    text::{Line, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::layout::calculate_screen_chunks;
use super::{draw_help, draw_title};
use crate::quiz::TIMESTAMP_FORMAT;
use crate::screens::profile::ProfileScreen;
use crate::utils::round1;

const DATE_FORMAT_TODAY: &str = "Today %H:%M";
const DATE_FORMAT_YESTERDAY: &str = "Yesterday %H:%M";
const DATE_FORMAT_OTHER: &str = "%Y-%m-%d %H:%M";

/// Shortens a stored result time relative to today; unparsable values
/// are shown as stored.
pub fn format_result_time(time: &str) -> String {
    let Ok(datetime) = NaiveDateTime::parse_from_str(time, TIMESTAMP_FORMAT) else {
        return time.to_string();
    };

    let today = Local::now().date_naive();
    let date = datetime.date();

    if date == today {
        datetime.format(DATE_FORMAT_TODAY).to_string()
    } else if date == today - chrono::Duration::days(1) {
        datetime.format(DATE_FORMAT_YESTERDAY).to_string()
    } else {
        datetime.format(DATE_FORMAT_OTHER).to_string()
    }
}

pub fn draw_profile(f: &mut Frame, screen: &ProfileScreen) {
    let layout = calculate_screen_chunks(f.area());
    draw_title(f, layout.header_area, &format!("{}'s Profile", screen.username));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(3)])
        .split(layout.body_area);

    let stats = &screen.stats;
    let stats_text = vec![
        Line::from(format!("Total Quizzes: {}", stats.total_quizzes)),
        Line::from(format!("Average Score: {:.1}%", stats.average_percent)),
        Line::from(format!("Best Score: {:.1}%", stats.best_percent)),
        Line::from(format!("Topics Completed: {}", screen.topics_completed)),
    ];
    let stats_widget = Paragraph::new(stats_text)
        .block(Block::default().borders(Borders::ALL).title("Statistics"));
    f.render_widget(stats_widget, chunks[0]);

    let mut history = Text::default();
    if screen.history.is_empty() {
        history.push_line(Line::from("No quizzes taken yet"));
    }
    for result in &screen.history {
        history.push_line(Line::from(format!(
            "{} — {} — Score: {}/{} ({:.1}%)",
            format_result_time(&result.time),
            result.level,
            result.score,
            result.total,
            round1(result.ratio_percent())
        )));
    }
    let history_widget = Paragraph::new(history)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Recent Quiz History"));
    f.render_widget(history_widget, chunks[1]);

    draw_help(f, layout.help_area, &[("Esc", "Back to Menu")]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_today_is_relative() {
        let now = Local::now().naive_local();
        let stored = now.format(TIMESTAMP_FORMAT).to_string();
        assert_eq!(format_result_time(&stored), now.format("Today %H:%M").to_string());
    }

    #[test]
    fn test_yesterday_is_relative() {
        let then = Local::now().naive_local() - chrono::Duration::days(1);
        let stored = then.format(TIMESTAMP_FORMAT).to_string();
        assert!(format_result_time(&stored).starts_with("Yesterday "));
    }

    #[test]
    fn test_old_dates_are_absolute() {
        assert_eq!(format_result_time("2020-02-03 21:15:00"), "2020-02-03 21:15");
    }

    #[test]
    fn test_unparsable_time_is_kept() {
        assert_eq!(format_result_time("last night"), "last night");
    }
}
