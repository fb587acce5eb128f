//! SQLite poll store
//!
//! ## Tables
//!
//! - `question` - id, text, publish date (UTC milliseconds)
//! - `choice` - id, owning question (cascade delete), text, vote tally
//!
//! One connection serves every caller behind a mutex. Vote increments and
//! capped choice inserts are single statements, so the database applies
//! them atomically even if the lock is ever relaxed.

use std::path::Path;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use log::{debug, info};
use rusqlite::{Connection, OptionalExtension, Row, params};

use crate::core::models::{Choice, ChoiceId, MAX_CHOICES, Question, QuestionId};
use crate::core::ports::{PollStore, StoreError};

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS question (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        question_text TEXT NOT NULL,
        pub_date INTEGER NOT NULL
    );
    CREATE INDEX IF NOT EXISTS question_pub_date ON question (pub_date);

    CREATE TABLE IF NOT EXISTS choice (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        question_id INTEGER NOT NULL REFERENCES question (id) ON DELETE CASCADE,
        choice_text TEXT NOT NULL,
        votes INTEGER NOT NULL DEFAULT 0 CHECK (votes >= 0)
    );
    CREATE INDEX IF NOT EXISTS choice_question ON choice (question_id);
";

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Database(Box::new(err))
    }
}

/// Poll store backed by a single SQLite connection
#[derive(Debug)]
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open or create the database file at `path`
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::Database(Box::new(e)))?;
        }

        info!("Opening poll database at {}", path.display());
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA synchronous=NORMAL;")?;
        Self::init(conn)
    }

    /// Open a private in-memory database
    pub fn open_in_memory() -> Result<Self, StoreError> {
        debug!("Opening in-memory poll database");
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn with_conn<F, T>(&self, f: F) -> Result<T, StoreError>
    where
        F: FnOnce(&Connection) -> Result<T, StoreError>,
    {
        let conn = self.conn.lock().map_err(|_| StoreError::LockPoisoned)?;
        f(&conn)
    }

    fn query_questions(
        conn: &Connection,
        sql: &str,
        params: impl rusqlite::Params,
    ) -> Result<Vec<Question>, StoreError> {
        let mut stmt = conn.prepare_cached(sql)?;
        let rows = stmt.query_map(params, question_from_row)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }
}

fn question_from_row(row: &Row<'_>) -> rusqlite::Result<Question> {
    let millis: i64 = row.get(2)?;
    let pub_date = DateTime::<Utc>::from_timestamp_millis(millis)
        .ok_or(rusqlite::Error::IntegralValueOutOfRange(2, millis))?;
    Ok(Question::new(row.get(0)?, row.get(1)?, pub_date))
}

fn choice_from_row(row: &Row<'_>) -> rusqlite::Result<Choice> {
    Ok(Choice::new(row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
}

fn to_millis(at: DateTime<Utc>) -> Result<(i64, DateTime<Utc>), StoreError> {
    let millis = at.timestamp_millis();
    let truncated = DateTime::<Utc>::from_timestamp_millis(millis)
        .ok_or_else(|| StoreError::Corrupt(format!("timestamp out of range: {at}")))?;
    Ok((millis, truncated))
}

impl PollStore for SqliteStore {
    fn create_question(
        &self,
        text: &str,
        pub_date: DateTime<Utc>,
    ) -> Result<Question, StoreError> {
        let (millis, pub_date) = to_millis(pub_date)?;
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO question (question_text, pub_date) VALUES (?1, ?2)",
                params![text, millis],
            )?;
            let id = conn.last_insert_rowid();
            debug!("Inserted question {id}");
            Ok(Question::new(id, text.to_string(), pub_date))
        })
    }

    fn question(&self, id: QuestionId) -> Result<Option<Question>, StoreError> {
        self.with_conn(|conn| {
            Ok(conn
                .query_row(
                    "SELECT id, question_text, pub_date FROM question WHERE id = ?1",
                    [id],
                    question_from_row,
                )
                .optional()?)
        })
    }

    fn latest_published(
        &self,
        now: DateTime<Utc>,
        limit: usize,
    ) -> Result<Vec<Question>, StoreError> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        self.with_conn(|conn| {
            Self::query_questions(
                conn,
                "SELECT id, question_text, pub_date FROM question
                 WHERE pub_date <= ?1
                 ORDER BY pub_date DESC, id DESC
                 LIMIT ?2",
                params![now.timestamp_millis(), limit],
            )
        })
    }

    fn all_questions(&self) -> Result<Vec<Question>, StoreError> {
        self.with_conn(|conn| {
            Self::query_questions(
                conn,
                "SELECT id, question_text, pub_date FROM question ORDER BY pub_date DESC, id DESC",
                [],
            )
        })
    }

    fn find_by_text(&self, text: &str) -> Result<Vec<Question>, StoreError> {
        self.with_conn(|conn| {
            Self::query_questions(
                conn,
                "SELECT id, question_text, pub_date FROM question
                 WHERE question_text = ?1 ORDER BY id",
                [text],
            )
        })
    }

    fn delete_question(&self, id: QuestionId) -> Result<bool, StoreError> {
        self.with_conn(|conn| {
            let deleted = conn.execute("DELETE FROM question WHERE id = ?1", [id])?;
            Ok(deleted > 0)
        })
    }

    fn choices(&self, question_id: QuestionId) -> Result<Vec<Choice>, StoreError> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare_cached(
                "SELECT id, question_id, choice_text, votes FROM choice
                 WHERE question_id = ?1 ORDER BY id",
            )?;
            let rows = stmt.query_map([question_id], choice_from_row)?;
            Ok(rows.collect::<Result<Vec<_>, _>>()?)
        })
    }

    fn choice_count(&self, question_id: QuestionId) -> Result<usize, StoreError> {
        self.with_conn(|conn| {
            let count: i64 = conn.query_row(
                "SELECT COUNT(*) FROM choice WHERE question_id = ?1",
                [question_id],
                |row| row.get(0),
            )?;
            usize::try_from(count).map_err(|_| StoreError::Corrupt(format!("choice count {count}")))
        })
    }

    fn add_choice(&self, question_id: QuestionId, text: &str) -> Result<Choice, StoreError> {
        let max = i64::try_from(MAX_CHOICES).unwrap_or(i64::MAX);
        self.with_conn(|conn| {
            let exists: bool = conn.query_row(
                "SELECT EXISTS (SELECT 1 FROM question WHERE id = ?1)",
                [question_id],
                |row| row.get(0),
            )?;
            if !exists {
                return Err(StoreError::QuestionNotFound(question_id));
            }

            // The count and the insert run as one statement.
            let inserted = conn.execute(
                "INSERT INTO choice (question_id, choice_text, votes)
                 SELECT ?1, ?2, 0
                 WHERE (SELECT COUNT(*) FROM choice WHERE question_id = ?1) < ?3",
                params![question_id, text, max],
            )?;
            if inserted == 0 {
                return Err(StoreError::ChoiceLimitReached(question_id));
            }

            let id = conn.last_insert_rowid();
            debug!("Inserted choice {id} for question {question_id}");
            Ok(Choice::new(id, question_id, text.to_string(), 0))
        })
    }

    fn record_vote(
        &self,
        question_id: QuestionId,
        choice_id: ChoiceId,
    ) -> Result<bool, StoreError> {
        self.with_conn(|conn| {
            let updated = conn.execute(
                "UPDATE choice SET votes = votes + 1 WHERE id = ?1 AND question_id = ?2",
                params![choice_id, question_id],
            )?;
            Ok(updated == 1)
        })
    }
}
