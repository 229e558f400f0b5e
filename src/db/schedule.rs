use rusqlite::{Connection, Result};

use crate::models::ScheduleEntry;

pub fn list_schedule(conn: &Connection, username: &str) -> Result<Vec<ScheduleEntry>> {
    let mut stmt =
        conn.prepare("SELECT time, object FROM schedules WHERE username = ? ORDER BY rowid")?;
    let entries = stmt
        .query_map([username], |row| {
            Ok(ScheduleEntry {
                time: row.get(0)?,
                object: row.get(1)?,
            })
        })?
        .collect::<Result<Vec<_>>>()?;
    Ok(entries)
}

pub fn add_schedule_entry(conn: &Connection, username: &str, entry: &ScheduleEntry) -> Result<()> {
    conn.execute(
        "INSERT INTO schedules (username, time, object) VALUES (?, ?, ?)",
        rusqlite::params![username, entry.time, entry.object],
    )?;
    Ok(())
}

/// Rewrites every row matching `(username, old.time, old.object)` exactly.
/// Returns the number of rows changed; zero means nothing matched.
pub fn update_schedule_entry(
    conn: &Connection,
    username: &str,
    old: &ScheduleEntry,
    new: &ScheduleEntry,
) -> Result<usize> {
    conn.execute(
        "UPDATE schedules SET time = ?, object = ? WHERE username = ? AND time = ? AND object = ?",
        rusqlite::params![new.time, new.object, username, old.time, old.object],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;

    fn seed(db: &Database) {
        for (user, time, object) in [
            ("ada", "Evening (7 PM)", "Venus – The Evening Star"),
            ("ada", "Midnight (12 AM)", "Orion Nebula"),
            ("bob", "Evening (7 PM)", "Venus – The Evening Star"),
        ] {
            add_schedule_entry(db.conn(), user, &ScheduleEntry::new(time, object)).unwrap();
        }
    }

    #[test]
    fn test_update_touches_only_the_matching_row() {
        let db = Database::open_in_memory().unwrap();
        seed(&db);

        let changed = update_schedule_entry(
            db.conn(),
            "ada",
            &ScheduleEntry::new("Evening (7 PM)", "Venus – The Evening Star"),
            &ScheduleEntry::new("10 PM", "Mars"),
        )
        .unwrap();
        assert_eq!(changed, 1);

        assert_eq!(
            list_schedule(db.conn(), "ada").unwrap(),
            vec![
                ScheduleEntry::new("10 PM", "Mars"),
                ScheduleEntry::new("Midnight (12 AM)", "Orion Nebula"),
            ]
        );
        assert_eq!(
            list_schedule(db.conn(), "bob").unwrap(),
            vec![ScheduleEntry::new("Evening (7 PM)", "Venus – The Evening Star")]
        );
    }

    #[test]
    fn test_update_of_missing_pair_is_a_no_op() {
        let db = Database::open_in_memory().unwrap();
        seed(&db);

        let changed = update_schedule_entry(
            db.conn(),
            "ada",
            &ScheduleEntry::new("Noon", "Sun"),
            &ScheduleEntry::new("10 PM", "Mars"),
        )
        .unwrap();
        assert_eq!(changed, 0);
        assert_eq!(list_schedule(db.conn(), "ada").unwrap().len(), 2);
    }

    #[test]
    fn test_empty_schedule() {
        let db = Database::open_in_memory().unwrap();
        assert!(list_schedule(db.conn(), "ada").unwrap().is_empty());
    }
}
