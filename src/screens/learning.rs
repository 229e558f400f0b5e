use crossterm::event::{KeyCode, KeyEvent};
use rusqlite::Connection;

use super::ScreenAction;
use crate::content::{TOPICS, Topic};
use crate::db::{Database, topics};
use crate::error::AppResult;
use crate::models::{Notice, Screen};

#[derive(Debug)]
pub struct LearningScreen {
    pub username: String,
    pub selected: usize,
    /// Topic ids marked complete, duplicates included.
    pub completed: Vec<u32>,
}

impl LearningScreen {
    pub fn load(conn: &Connection, username: &str) -> AppResult<Self> {
        Ok(Self {
            username: username.to_string(),
            selected: 0,
            completed: topics::list_completed_topics(conn, username)?,
        })
    }

    pub fn selected_topic(&self) -> &'static Topic {
        &TOPICS[self.selected.min(TOPICS.len() - 1)]
    }

    pub fn is_completed(&self, topic_id: u32) -> bool {
        self.completed.contains(&topic_id)
    }

    fn mark_complete(&mut self, db: &Database) -> AppResult<ScreenAction> {
        let topic = self.selected_topic();
        topics::mark_topic_complete(db.conn(), &self.username, topic.id)?;
        self.completed.push(topic.id);
        Ok(ScreenAction::Notify(Notice::info(
            "Completed",
            "Marked as completed!",
        )))
    }

    pub fn handle_key(&mut self, key: KeyEvent, db: &Database) -> AppResult<ScreenAction> {
        let action = match key.code {
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                ScreenAction::None
            }
            KeyCode::Down => {
                if self.selected < TOPICS.len() - 1 {
                    self.selected += 1;
                }
                ScreenAction::None
            }
            KeyCode::Enter | KeyCode::Char('r') => {
                let topic = self.selected_topic();
                ScreenAction::Notify(Notice::info(topic.title, topic.description))
            }
            KeyCode::Char('s') => ScreenAction::Search(self.selected_topic().title.to_string()),
            KeyCode::Char('c') => return self.mark_complete(db),
            KeyCode::Esc => ScreenAction::navigate(Screen::MainMenu),
            _ => ScreenAction::None,
        };
        Ok(action)
    }
}
