use crossterm::event::{KeyCode, KeyEvent};

use super::ScreenAction;
use crate::models::Screen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Profile,
    Schedule,
    Quiz,
    Learning,
    Logout,
}

impl MenuItem {
    pub const ALL: [MenuItem; 5] = [
        MenuItem::Profile,
        MenuItem::Schedule,
        MenuItem::Quiz,
        MenuItem::Learning,
        MenuItem::Logout,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::Profile => "Profile",
            MenuItem::Schedule => "Schedule",
            MenuItem::Quiz => "Quiz",
            MenuItem::Learning => "Learning Section",
            MenuItem::Logout => "Logout",
        }
    }

    fn action(&self) -> ScreenAction {
        match self {
            MenuItem::Profile => ScreenAction::navigate(Screen::Profile),
            MenuItem::Schedule => ScreenAction::navigate(Screen::Schedule),
            MenuItem::Quiz => ScreenAction::navigate(Screen::Quiz),
            MenuItem::Learning => ScreenAction::navigate(Screen::Learning),
            MenuItem::Logout => ScreenAction::Logout,
        }
    }
}

#[derive(Debug)]
pub struct MainMenuScreen {
    pub username: String,
    pub selected: usize,
}

impl MainMenuScreen {
    pub fn new(username: &str) -> Self {
        Self {
            username: username.to_string(),
            selected: 0,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> ScreenAction {
        match key.code {
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                ScreenAction::None
            }
            KeyCode::Down => {
                if self.selected < MenuItem::ALL.len() - 1 {
                    self.selected += 1;
                }
                ScreenAction::None
            }
            KeyCode::Enter => MenuItem::ALL[self.selected].action(),
            KeyCode::Char(c @ '1'..='5') => {
                let index = c as usize - '1' as usize;
                self.selected = index;
                MenuItem::ALL[index].action()
            }
            KeyCode::Char('l') => ScreenAction::Logout,
            KeyCode::Esc => ScreenAction::Quit,
            _ => ScreenAction::None,
        }
    }
}
