use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::config::Config;
use crate::db::Database;
use crate::error::{AppError, AppResult};
use crate::links::{LinkOpener, search_url};
use crate::logger;
use crate::models::Notice;
use crate::screens::ScreenAction;
use crate::session::Session;

/// Everything the event loop needs: the database, the session controller
/// and the notice currently covering the screen.
pub struct App {
    pub config: Config,
    pub db: Database,
    pub session: Session,
    pub notice: Option<Notice>,
    pub should_quit: bool,
    links: Box<dyn LinkOpener>,
}

impl App {
    pub fn new(config: Config, db: Database, links: Box<dyn LinkOpener>) -> AppResult<Self> {
        let session = Session::new(&db)?;
        Ok(Self {
            config,
            db,
            session,
            notice: None,
            should_quit: false,
            links,
        })
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.notice.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.notice = None;
            }
            return;
        }

        let result = self
            .session
            .active_mut()
            .handle_key(key, &self.db)
            .and_then(|action| self.apply(action));
        if let Err(err) = result {
            self.report(err);
        }
    }

    fn apply(&mut self, action: ScreenAction) -> AppResult<()> {
        match action {
            ScreenAction::None => {}
            ScreenAction::Notify(notice) => self.notice = Some(notice),
            ScreenAction::Navigate { to, notice } => {
                self.session.show_screen(&self.db, to)?;
                self.notice = notice;
            }
            ScreenAction::Login(username) => self.session.login(&self.db, username)?,
            ScreenAction::Logout => self.session.logout(&self.db)?,
            ScreenAction::Search(title) => {
                let url = search_url(&self.config.search_url, &title);
                logger::log(&format!("Opening {}", url));
                self.links.open_url(&url);
            }
            ScreenAction::Quit => self.should_quit = true,
        }
        Ok(())
    }

    fn report(&mut self, err: AppError) {
        if err.is_internal() {
            logger::log(&format!("Error on {}: {}", self.session.current_screen(), err));
        }
        self.notice = Some(Notice::error(err.title(), err.to_string()));
    }
}
