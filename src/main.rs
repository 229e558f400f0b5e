use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::process::ExitCode;

use starlens::{logger, ui, App, AppResult, Config, Database, DesktopLinkOpener};

fn main() -> ExitCode {
    let app = match setup() {
        Ok(app) => app,
        Err(err) => {
            eprintln!("{}: {}", err.title(), err);
            return ExitCode::FAILURE;
        }
    };

    match run(app) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            logger::log(&format!("Fatal error: {}", err));
            eprintln!("{}: {}", err.title(), err);
            ExitCode::FAILURE
        }
    }
}

fn setup() -> AppResult<App> {
    let config = Config::load()?;
    logger::init(&config.log_path);
    logger::log("StarLens starting");
    logger::log(&format!("Data directory {}", config.data_dir.display()));

    let db = Database::open(&config.db_path)?;
    App::new(config, db, Box::new(DesktopLinkOpener))
}

fn run(mut app: App) -> AppResult<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    logger::log("StarLens exiting");

    result
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> AppResult<()> {
    while !app.should_quit {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }
    }
    Ok(())
}
