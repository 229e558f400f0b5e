pub mod app;
pub mod config;
pub mod content;
pub mod db;
pub mod error;
pub mod input;
pub mod links;
pub mod logger;
pub mod models;
pub mod quiz;
pub mod screens;
pub mod session;
pub mod ui;
pub mod utils;

#[cfg(test)]
mod ui_tests;

// Re-exports for convenience
pub use app::App;
pub use config::Config;
pub use db::Database;
pub use error::{AppError, AppResult};
pub use links::{DesktopLinkOpener, LinkOpener};
pub use models::{Notice, QuizResult, ScheduleEntry, Screen, Tier};
pub use quiz::QuizEngine;
pub use session::Session;
