use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::ScreenAction;
use crate::db::{Database, users};
use crate::error::{AppError, AppResult};
use crate::input::TextInput;
use crate::logger;
use crate::models::Notice;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Username,
    Password,
}

#[derive(Debug)]
pub struct LoginScreen {
    pub username: TextInput,
    pub password: TextInput,
    pub focus: LoginField,
}

impl Default for LoginScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginScreen {
    pub fn new() -> Self {
        Self {
            username: TextInput::new(),
            password: TextInput::new(),
            focus: LoginField::Username,
        }
    }

    fn focused_input(&mut self) -> &mut TextInput {
        match self.focus {
            LoginField::Username => &mut self.username,
            LoginField::Password => &mut self.password,
        }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            LoginField::Username => LoginField::Password,
            LoginField::Password => LoginField::Username,
        };
    }

    /// Trimmed credentials, or the first empty field.
    fn credentials(&self) -> AppResult<(String, String)> {
        if self.username.is_blank() {
            return Err(AppError::MissingField("username"));
        }
        if self.password.is_blank() {
            return Err(AppError::MissingField("password"));
        }
        Ok((
            self.username.value().trim().to_string(),
            self.password.value().trim().to_string(),
        ))
    }

    pub fn submit_login(&mut self, db: &Database) -> AppResult<ScreenAction> {
        let (username, password) = self.credentials()?;
        match users::authenticate(db.conn(), &username, &password)? {
            Some(user) => Ok(ScreenAction::Login(user.username)),
            None => {
                self.password.clear();
                Err(AppError::InvalidCredentials)
            }
        }
    }

    pub fn submit_register(&mut self, db: &Database) -> AppResult<ScreenAction> {
        let (username, password) = self.credentials()?;
        users::register_user(db.conn(), &username, &password)?;
        logger::log(&format!("Registered user {}", username));
        Ok(ScreenAction::Notify(Notice::info(
            "Success",
            "Account created successfully!",
        )))
    }

    pub fn handle_key(&mut self, key: KeyEvent, db: &Database) -> AppResult<ScreenAction> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('n') => self.submit_register(db),
                _ => Ok(ScreenAction::None),
            };
        }

        match key.code {
            KeyCode::Esc => Ok(ScreenAction::Quit),
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.toggle_focus();
                Ok(ScreenAction::None)
            }
            KeyCode::Enter => match self.focus {
                LoginField::Username if self.password.value().is_empty() => {
                    self.focus = LoginField::Password;
                    Ok(ScreenAction::None)
                }
                _ => self.submit_login(db),
            },
            _ => {
                self.focused_input().handle_key(key);
                Ok(ScreenAction::None)
            }
        }
    }
}
