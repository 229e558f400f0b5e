use rusqlite::{Connection, ErrorCode, OptionalExtension, ffi};

use crate::error::{AppError, AppResult};
use crate::models::User;

/// True only for primary-key/unique violations, so other storage failures
/// are never reported as a taken username.
fn is_duplicate_key(err: &rusqlite::Error) -> bool {
    match err {
        rusqlite::Error::SqliteFailure(e, _) => {
            e.code == ErrorCode::ConstraintViolation
                && (e.extended_code == ffi::SQLITE_CONSTRAINT_PRIMARYKEY
                    || e.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE)
        }
        _ => false,
    }
}

pub fn register_user(conn: &Connection, username: &str, password: &str) -> AppResult<()> {
    conn.execute(
        "INSERT INTO users (username, password) VALUES (?, ?)",
        rusqlite::params![username, password],
    )
    .map_err(|e| {
        if is_duplicate_key(&e) {
            AppError::DuplicateKey(username.to_string())
        } else {
            AppError::Storage(e)
        }
    })?;
    Ok(())
}

/// Exact, case-sensitive match on both fields.
pub fn authenticate(conn: &Connection, username: &str, password: &str) -> AppResult<Option<User>> {
    let user = conn
        .query_row(
            "SELECT username, password FROM users WHERE username = ? AND password = ?",
            rusqlite::params![username, password],
            |row| {
                Ok(User {
                    username: row.get(0)?,
                    password: row.get(1)?,
                })
            },
        )
        .optional()?;
    Ok(user)
}
