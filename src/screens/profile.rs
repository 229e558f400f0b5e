use crossterm::event::{KeyCode, KeyEvent};
use rusqlite::Connection;

use super::ScreenAction;
use crate::content::find_topic;
use crate::db::{quiz_results, topics};
use crate::error::AppResult;
use crate::models::{QuizResult, Screen};
use crate::utils::round1;

pub const HISTORY_LEN: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileStats {
    pub total_quizzes: usize,
    /// Mean of score/total in percent, rounded to one decimal.
    pub average_percent: f64,
    pub best_percent: f64,
}

pub fn compute_stats(results: &[QuizResult]) -> ProfileStats {
    if results.is_empty() {
        return ProfileStats {
            total_quizzes: 0,
            average_percent: 0.0,
            best_percent: 0.0,
        };
    }

    let sum: f64 = results.iter().map(QuizResult::ratio_percent).sum();
    let best = results
        .iter()
        .map(QuizResult::ratio_percent)
        .fold(0.0_f64, f64::max);

    ProfileStats {
        total_quizzes: results.len(),
        average_percent: round1(sum / results.len() as f64),
        best_percent: best,
    }
}

#[derive(Debug)]
pub struct ProfileScreen {
    pub username: String,
    pub stats: ProfileStats,
    /// The most recent results, oldest first.
    pub history: Vec<QuizResult>,
    pub topics_completed: usize,
}

impl ProfileScreen {
    pub fn load(conn: &Connection, username: &str) -> AppResult<Self> {
        let results = quiz_results::list_quiz_results(conn, username)?;
        let stats = compute_stats(&results);
        let skip = results.len().saturating_sub(HISTORY_LEN);
        let history = results.into_iter().skip(skip).collect();

        // Rows naming a topic that no longer exists are not counted.
        let mut completed: Vec<u32> = topics::list_completed_topics(conn, username)?
            .into_iter()
            .filter(|id| find_topic(*id).is_some())
            .collect();
        completed.sort_unstable();
        completed.dedup();

        Ok(Self {
            username: username.to_string(),
            stats,
            history,
            topics_completed: completed.len(),
        })
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> ScreenAction {
        match key.code {
            KeyCode::Esc | KeyCode::Char('m') => ScreenAction::navigate(Screen::MainMenu),
            _ => ScreenAction::None,
        }
    }
}
