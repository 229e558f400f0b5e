use crossterm::event::KeyEvent;

use crate::db::Database;
use crate::error::{AppError, AppResult};
use crate::models::{Notice, Screen};

pub mod learning;
pub mod login;
pub mod menu;
pub mod profile;
pub mod quiz;
pub mod schedule;

pub use learning::LearningScreen;
pub use login::LoginScreen;
pub use menu::MainMenuScreen;
pub use profile::ProfileScreen;
pub use quiz::QuizScreen;
pub use schedule::ScheduleScreen;

/// What a screen asks the runtime to do after handling a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenAction {
    None,
    Notify(Notice),
    Navigate {
        to: Screen,
        notice: Option<Notice>,
    },
    Login(String),
    Logout,
    Search(String),
    Quit,
}

impl ScreenAction {
    pub fn navigate(to: Screen) -> Self {
        ScreenAction::Navigate { to, notice: None }
    }
}

#[allow(clippy::large_enum_variant)]
#[derive(Debug)]
pub enum ActiveScreen {
    Login(LoginScreen),
    MainMenu(MainMenuScreen),
    Profile(ProfileScreen),
    Quiz(QuizScreen),
    Learning(LearningScreen),
    Schedule(ScheduleScreen),
}

impl ActiveScreen {
    /// Builds fresh state for `screen`, loading whatever it displays.
    pub fn build(screen: Screen, db: &Database, username: Option<&str>) -> AppResult<Self> {
        let user = || username.ok_or(AppError::NotLoggedIn);
        let built = match screen {
            Screen::Login => ActiveScreen::Login(LoginScreen::new()),
            Screen::MainMenu => ActiveScreen::MainMenu(MainMenuScreen::new(user()?)),
            Screen::Profile => ActiveScreen::Profile(ProfileScreen::load(db.conn(), user()?)?),
            Screen::Quiz => ActiveScreen::Quiz(QuizScreen::new(user()?)),
            Screen::Learning => ActiveScreen::Learning(LearningScreen::load(db.conn(), user()?)?),
            Screen::Schedule => ActiveScreen::Schedule(ScheduleScreen::load(db.conn(), user()?)?),
        };
        Ok(built)
    }

    pub fn screen(&self) -> Screen {
        match self {
            ActiveScreen::Login(_) => Screen::Login,
            ActiveScreen::MainMenu(_) => Screen::MainMenu,
            ActiveScreen::Profile(_) => Screen::Profile,
            ActiveScreen::Quiz(_) => Screen::Quiz,
            ActiveScreen::Learning(_) => Screen::Learning,
            ActiveScreen::Schedule(_) => Screen::Schedule,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, db: &Database) -> AppResult<ScreenAction> {
        match self {
            ActiveScreen::Login(s) => s.handle_key(key, db),
            ActiveScreen::MainMenu(s) => Ok(s.handle_key(key)),
            ActiveScreen::Profile(s) => Ok(s.handle_key(key)),
            ActiveScreen::Quiz(s) => s.handle_key(key, db),
            ActiveScreen::Learning(s) => s.handle_key(key, db),
            ActiveScreen::Schedule(s) => s.handle_key(key, db),
        }
    }
}
