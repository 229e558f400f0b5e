use rusqlite::{Connection, Result};
use std::path::Path;

use crate::logger;

pub mod quiz_results;
pub mod schedule;
pub mod topics;
pub mod users;

/// The one database handle of the process.
///
/// Opened at startup and handed to every screen by reference; the
/// connection closes when the value is dropped.
#[derive(Debug)]
pub struct Database {
    conn: Connection,
}

impl Database {
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).ok();
        }

        let conn = Connection::open(path)?;
        run_migrations(&conn)?;
        logger::log(&format!("Opened database at {}", path.display()));

        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        run_migrations(&conn)?;
        Ok(Self { conn })
    }

    pub fn conn(&self) -> &Connection {
        &self.conn
    }
}

pub(crate) fn run_migrations(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS users (
            username TEXT PRIMARY KEY,
            password TEXT NOT NULL
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS quiz_results (
            username TEXT,
            score INTEGER,
            total INTEGER,
            level TEXT,
            time TEXT
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS completed_topics (
            username TEXT,
            topic_id INTEGER
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS schedules (
            username TEXT,
            time TEXT,
            object TEXT
        )",
        [],
    )?;

    Ok(())
}
