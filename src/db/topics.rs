use rusqlite::{Connection, Result};

/// Appends a completion row; marking the same topic again adds another row.
pub fn mark_topic_complete(conn: &Connection, username: &str, topic_id: u32) -> Result<()> {
    conn.execute(
        "INSERT INTO completed_topics (username, topic_id) VALUES (?, ?)",
        rusqlite::params![username, topic_id],
    )?;
    Ok(())
}

pub fn list_completed_topics(conn: &Connection, username: &str) -> Result<Vec<u32>> {
    let mut stmt =
        conn.prepare("SELECT topic_id FROM completed_topics WHERE username = ? ORDER BY rowid")?;
    let ids = stmt
        .query_map([username], |row| row.get(0))?
        .collect::<Result<Vec<u32>>>()?;
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;

    #[test]
    fn test_marking_twice_inserts_two_rows() {
        let db = Database::open_in_memory().unwrap();
        mark_topic_complete(db.conn(), "ada", 2).unwrap();
        mark_topic_complete(db.conn(), "ada", 2).unwrap();

        let count: u32 = db
            .conn()
            .query_row(
                "SELECT COUNT(*) FROM completed_topics WHERE username = 'ada' AND topic_id = 2",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 2);
        assert_eq!(list_completed_topics(db.conn(), "ada").unwrap(), vec![2, 2]);
    }

    #[test]
    fn test_completed_topics_per_user() {
        let db = Database::open_in_memory().unwrap();
        mark_topic_complete(db.conn(), "ada", 1).unwrap();
        mark_topic_complete(db.conn(), "bob", 4).unwrap();
        mark_topic_complete(db.conn(), "ada", 3).unwrap();

        assert_eq!(list_completed_topics(db.conn(), "ada").unwrap(), vec![1, 3]);
        assert_eq!(list_completed_topics(db.conn(), "bob").unwrap(), vec![4]);
    }
}
