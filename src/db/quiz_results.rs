use rusqlite::{Connection, Result};

use crate::models::QuizResult;

pub fn record_quiz_result(conn: &Connection, result: &QuizResult) -> Result<()> {
    conn.execute(
        "INSERT INTO quiz_results (username, score, total, level, time) VALUES (?, ?, ?, ?, ?)",
        rusqlite::params![
            result.username,
            result.score,
            result.total,
            result.level,
            result.time
        ],
    )?;
    Ok(())
}

/// All results of `username`, oldest first.
pub fn list_quiz_results(conn: &Connection, username: &str) -> Result<Vec<QuizResult>> {
    let mut stmt = conn.prepare(
        "SELECT username, score, total, level, time
         FROM quiz_results WHERE username = ? ORDER BY rowid",
    )?;

    let results = stmt
        .query_map([username], |row| {
            Ok(QuizResult {
                username: row.get(0)?,
                score: row.get(1)?,
                total: row.get(2)?,
                level: row.get(3)?,
                time: row.get(4)?,
            })
        })?
        .collect::<Result<Vec<_>>>()?;

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;
    use crate::models::Tier;

    fn result(username: &str, score: u32, level: Tier, time: &str) -> QuizResult {
        QuizResult {
            username: username.to_string(),
            score,
            total: 10,
            level,
            time: time.to_string(),
        }
    }

    #[test]
    fn test_results_come_back_in_insertion_order() {
        let db = Database::open_in_memory().unwrap();
        record_quiz_result(db.conn(), &result("ada", 7, Tier::Medium, "2024-01-02 10:00:00")).unwrap();
        record_quiz_result(db.conn(), &result("ada", 3, Tier::Easy, "2024-01-01 10:00:00")).unwrap();

        let rows = list_quiz_results(db.conn(), "ada").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].score, 7);
        assert_eq!(rows[0].level, Tier::Medium);
        assert_eq!(rows[1].score, 3);
        assert_eq!(rows[1].time, "2024-01-01 10:00:00");
    }

    #[test]
    fn test_results_are_scoped_to_user() {
        let db = Database::open_in_memory().unwrap();
        record_quiz_result(db.conn(), &result("ada", 7, Tier::Hard, "t")).unwrap();
        record_quiz_result(db.conn(), &result("bob", 2, Tier::Hard, "t")).unwrap();

        let rows = list_quiz_results(db.conn(), "bob").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].username, "bob");
        assert!(list_quiz_results(db.conn(), "carol").unwrap().is_empty());
    }

    #[test]
    fn test_unknown_level_is_a_conversion_error() {
        let db = Database::open_in_memory().unwrap();
        db.conn()
            .execute(
                "INSERT INTO quiz_results (username, score, total, level, time) VALUES ('ada', 1, 10, 'Expert', 't')",
                [],
            )
            .unwrap();

        assert!(list_quiz_results(db.conn(), "ada").is_err());
    }
}
