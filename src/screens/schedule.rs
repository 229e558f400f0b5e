use crossterm::event::{KeyCode, KeyEvent};
use rusqlite::Connection;

use super::ScreenAction;
use crate::content::default_schedule;
use crate::db::{Database, schedule};
use crate::error::{AppError, AppResult};
use crate::input::TextInput;
use crate::logger;
use crate::models::{Screen, ScheduleEntry};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMode {
    Add,
    /// Editing the row currently holding this exact time and object.
    Edit(ScheduleEntry),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorField {
    Time,
    Object,
}

#[derive(Debug)]
pub struct ScheduleEditor {
    pub mode: EditorMode,
    pub time: TextInput,
    pub object: TextInput,
    pub focus: EditorField,
}

impl ScheduleEditor {
    fn add() -> Self {
        Self {
            mode: EditorMode::Add,
            time: TextInput::new(),
            object: TextInput::new(),
            focus: EditorField::Time,
        }
    }

    fn edit(entry: &ScheduleEntry) -> Self {
        Self {
            mode: EditorMode::Edit(entry.clone()),
            time: TextInput::with_value(&entry.time),
            object: TextInput::with_value(&entry.object),
            focus: EditorField::Time,
        }
    }

    fn entry(&self) -> AppResult<ScheduleEntry> {
        if self.time.is_blank() {
            return Err(AppError::MissingField("time"));
        }
        if self.object.is_blank() {
            return Err(AppError::MissingField("object"));
        }
        Ok(ScheduleEntry::new(
            self.time.value().trim(),
            self.object.value().trim(),
        ))
    }
}

#[derive(Debug)]
pub struct ScheduleScreen {
    pub username: String,
    pub entries: Vec<ScheduleEntry>,
    /// True while `entries` holds the unsaved suggestions.
    pub showing_defaults: bool,
    pub selected: usize,
    pub editor: Option<ScheduleEditor>,
}

impl ScheduleScreen {
    pub fn load(conn: &Connection, username: &str) -> AppResult<Self> {
        let mut screen = Self {
            username: username.to_string(),
            entries: Vec::new(),
            showing_defaults: false,
            selected: 0,
            editor: None,
        };
        screen.reload(conn)?;
        Ok(screen)
    }

    fn reload(&mut self, conn: &Connection) -> AppResult<()> {
        let entries = schedule::list_schedule(conn, &self.username)?;
        self.showing_defaults = entries.is_empty();
        self.entries = if entries.is_empty() {
            default_schedule()
        } else {
            entries
        };
        self.selected = self.selected.min(self.entries.len().saturating_sub(1));
        Ok(())
    }

    fn submit(&mut self, db: &Database) -> AppResult<ScreenAction> {
        let Some(editor) = &self.editor else {
            return Ok(ScreenAction::None);
        };
        let entry = editor.entry()?;

        match &editor.mode {
            EditorMode::Add => {
                schedule::add_schedule_entry(db.conn(), &self.username, &entry)?;
            }
            EditorMode::Edit(old) => {
                let changed = schedule::update_schedule_entry(db.conn(), &self.username, old, &entry)?;
                if changed == 0 {
                    logger::log(&format!(
                        "Schedule edit for {} matched no rows ({} / {})",
                        self.username, old.time, old.object
                    ));
                }
            }
        }

        self.editor = None;
        self.reload(db.conn())?;
        Ok(ScreenAction::None)
    }

    fn handle_editor_key(&mut self, key: KeyEvent, db: &Database) -> AppResult<ScreenAction> {
        let Some(editor) = self.editor.as_mut() else {
            return Ok(ScreenAction::None);
        };
        match key.code {
            KeyCode::Esc => {
                self.editor = None;
                Ok(ScreenAction::None)
            }
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                editor.focus = match editor.focus {
                    EditorField::Time => EditorField::Object,
                    EditorField::Object => EditorField::Time,
                };
                Ok(ScreenAction::None)
            }
            KeyCode::Enter => self.submit(db),
            _ => {
                match editor.focus {
                    EditorField::Time => editor.time.handle_key(key),
                    EditorField::Object => editor.object.handle_key(key),
                };
                Ok(ScreenAction::None)
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, db: &Database) -> AppResult<ScreenAction> {
        if self.editor.is_some() {
            return self.handle_editor_key(key, db);
        }

        let action = match key.code {
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                ScreenAction::None
            }
            KeyCode::Down => {
                if self.selected + 1 < self.entries.len() {
                    self.selected += 1;
                }
                ScreenAction::None
            }
            KeyCode::Char('a') => {
                self.editor = Some(ScheduleEditor::add());
                ScreenAction::None
            }
            KeyCode::Char('e') | KeyCode::Enter => {
                if let Some(entry) = self.entries.get(self.selected) {
                    self.editor = Some(ScheduleEditor::edit(entry));
                }
                ScreenAction::None
            }
            KeyCode::Esc => ScreenAction::navigate(Screen::MainMenu),
            _ => ScreenAction::None,
        };
        Ok(action)
    }
}
