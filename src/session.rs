use crate::db::Database;
use crate::error::{AppError, AppResult};
use crate::logger;
use crate::models::Screen;
use crate::screens::ActiveScreen;

const EVERY_SCREEN: &[Screen] = &Screen::ALL;

/// Permitted `from -> to` transitions. Every move is allowed today;
/// narrowing a row here is all it takes to forbid one.
pub const TRANSITIONS: &[(Screen, &[Screen])] = &[
    (Screen::Login, EVERY_SCREEN),
    (Screen::MainMenu, EVERY_SCREEN),
    (Screen::Profile, EVERY_SCREEN),
    (Screen::Quiz, EVERY_SCREEN),
    (Screen::Learning, EVERY_SCREEN),
    (Screen::Schedule, EVERY_SCREEN),
];

pub fn can_transition(from: Screen, to: Screen) -> bool {
    TRANSITIONS
        .iter()
        .find(|(source, _)| *source == from)
        .is_some_and(|(_, targets)| targets.contains(&to))
}

/// Who is logged in and which screen is showing.
#[derive(Debug)]
pub struct Session {
    username: Option<String>,
    active: ActiveScreen,
}

impl Session {
    pub fn new(db: &Database) -> AppResult<Self> {
        Ok(Self {
            username: None,
            active: ActiveScreen::build(Screen::Login, db, None)?,
        })
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn current_screen(&self) -> Screen {
        self.active.screen()
    }

    pub fn active(&self) -> &ActiveScreen {
        &self.active
    }

    pub fn active_mut(&mut self) -> &mut ActiveScreen {
        &mut self.active
    }

    /// Replaces the active screen with a freshly built `to`.
    ///
    /// On failure the current screen stays in place, state included.
    pub fn show_screen(&mut self, db: &Database, to: Screen) -> AppResult<()> {
        let from = self.current_screen();
        if !can_transition(from, to) {
            return Err(AppError::Navigation { from, to });
        }

        self.active = ActiveScreen::build(to, db, self.username.as_deref())?;
        logger::log(&format!("Screen {} -> {}", from, to));
        Ok(())
    }

    pub fn login(&mut self, db: &Database, username: String) -> AppResult<()> {
        logger::log(&format!("User {} logged in", username));
        self.username = Some(username);
        self.show_screen(db, Screen::MainMenu)
    }

    pub fn logout(&mut self, db: &Database) -> AppResult<()> {
        if let Some(username) = self.username.take() {
            logger::log(&format!("User {} logged out", username));
        }
        self.show_screen(db, Screen::Login)
    }
}
