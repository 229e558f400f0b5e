use crossterm::event::{KeyCode, KeyEvent};

use super::ScreenAction;
use crate::db::Database;
use crate::error::AppResult;
use crate::input::TextInput;
use crate::models::{Notice, Screen};
use crate::quiz::{AnswerOutcome, QuizEngine, QuizState};

#[derive(Debug)]
pub struct QuizScreen {
    pub username: String,
    pub age_input: TextInput,
    pub engine: QuizEngine,
    /// Highlighted option of the current question.
    pub selected: usize,
}

impl QuizScreen {
    pub fn new(username: &str) -> Self {
        Self {
            username: username.to_string(),
            age_input: TextInput::new(),
            engine: QuizEngine::new(),
            selected: 0,
        }
    }

    fn start(&mut self) -> AppResult<ScreenAction> {
        self.engine.start(self.age_input.value())?;
        self.selected = 0;
        Ok(ScreenAction::None)
    }

    fn choose(&mut self, index: usize, db: &Database) -> AppResult<ScreenAction> {
        let Some(view) = self.engine.current_question() else {
            return Ok(ScreenAction::None);
        };
        let Some(choice) = view.options.get(index) else {
            return Ok(ScreenAction::None);
        };

        match self.engine.answer(db.conn(), &self.username, choice)? {
            AnswerOutcome::Next { .. } => {
                self.selected = 0;
                Ok(ScreenAction::None)
            }
            AnswerOutcome::Finished(result) => Ok(ScreenAction::Navigate {
                to: Screen::Profile,
                notice: Some(Notice::info(
                    "Quiz Completed",
                    format!("You scored {} out of {}", result.score, result.total),
                )),
            }),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, db: &Database) -> AppResult<ScreenAction> {
        if key.code == KeyCode::Esc {
            return Ok(ScreenAction::navigate(Screen::MainMenu));
        }

        match self.engine.state() {
            QuizState::NotStarted | QuizState::Completed => match key.code {
                KeyCode::Enter => self.start(),
                _ => {
                    self.age_input.handle_key(key);
                    Ok(ScreenAction::None)
                }
            },
            QuizState::InProgress(_) => match key.code {
                KeyCode::Up => {
                    self.selected = self.selected.saturating_sub(1);
                    Ok(ScreenAction::None)
                }
                KeyCode::Down => {
                    self.selected = (self.selected + 1).min(3);
                    Ok(ScreenAction::None)
                }
                KeyCode::Enter => self.choose(self.selected, db),
                KeyCode::Char(c @ '1'..='4') => self.choose(c as usize - '1' as usize, db),
                _ => Ok(ScreenAction::None),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::question_bank;
    use crate::db::quiz_results::list_quiz_results;
    use crate::error::AppError;
    use crate::models::Tier;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn start_with_age(screen: &mut QuizScreen, db: &Database, age: &str) -> AppResult<ScreenAction> {
        for c in age.chars() {
            screen.handle_key(key(KeyCode::Char(c)), db)?;
        }
        screen.handle_key(key(KeyCode::Enter), db)
    }

    #[test]
    fn test_non_numeric_age_is_rejected() {
        let db = Database::open_in_memory().unwrap();
        let mut screen = QuizScreen::new("ada");
        assert!(matches!(
            start_with_age(&mut screen, &db, "ten"),
            Err(AppError::InvalidInput(_))
        ));
        assert_eq!(screen.engine.state(), QuizState::NotStarted);
    }

    #[test]
    fn test_option_selection_with_arrows() {
        let db = Database::open_in_memory().unwrap();
        let mut screen = QuizScreen::new("ada");
        start_with_age(&mut screen, &db, "9").unwrap();

        // "Which planet is known as the Red Planet?" -> Mars is option 2.
        screen.handle_key(key(KeyCode::Down), &db).unwrap();
        screen.handle_key(key(KeyCode::Enter), &db).unwrap();
        assert_eq!(screen.engine.score(), 1);
        assert_eq!(screen.engine.state(), QuizState::InProgress(1));
        assert_eq!(screen.selected, 0);
    }

    #[test]
    fn test_full_quiz_ends_on_profile() {
        let db = Database::open_in_memory().unwrap();
        let mut screen = QuizScreen::new("ada");
        start_with_age(&mut screen, &db, "10").unwrap();
        assert_eq!(screen.engine.tier(), Some(Tier::Easy));

        let mut last = ScreenAction::None;
        for question in question_bank(Tier::Easy) {
            let index = question
                .options
                .iter()
                .position(|o| *o == question.answer)
                .unwrap();
            let digit = char::from(b'1' + index as u8);
            last = screen.handle_key(key(KeyCode::Char(digit)), &db).unwrap();
        }

        assert_eq!(
            last,
            ScreenAction::Navigate {
                to: Screen::Profile,
                notice: Some(Notice::info("Quiz Completed", "You scored 10 out of 10")),
            }
        );
        let rows = list_quiz_results(db.conn(), "ada").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].level, Tier::Easy);
    }

    #[test]
    fn test_escape_abandons_quiz() {
        let db = Database::open_in_memory().unwrap();
        let mut screen = QuizScreen::new("ada");
        start_with_age(&mut screen, &db, "15").unwrap();
        assert_eq!(
            screen.handle_key(key(KeyCode::Esc), &db).unwrap(),
            ScreenAction::navigate(Screen::MainMenu)
        );
        assert!(list_quiz_results(db.conn(), "ada").unwrap().is_empty());
    }
}
