//! Throwaway CCMem databases for unit tests.

use crate::storage::Store;
use rusqlite::{Connection, params};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const SCHEMA: &str = "
    CREATE TABLE story (id INTEGER PRIMARY KEY AUTOINCREMENT, message TEXT NOT NULL, timestamp DATETIME DEFAULT CURRENT_TIMESTAMP);
    CREATE TABLE task (id INTEGER PRIMARY KEY AUTOINCREMENT, story_id INTEGER, description TEXT NOT NULL, status TEXT NOT NULL DEFAULT 'pending', timestamp DATETIME DEFAULT CURRENT_TIMESTAMP);
    CREATE TABLE defect (id INTEGER PRIMARY KEY AUTOINCREMENT, story_id INTEGER, task_id INTEGER, description TEXT NOT NULL, status TEXT NOT NULL DEFAULT 'open', timestamp DATETIME DEFAULT CURRENT_TIMESTAMP);
    CREATE TABLE landmines (id INTEGER PRIMARY KEY AUTOINCREMENT, task_id INTEGER NOT NULL, session_id TEXT NOT NULL, error_context TEXT NOT NULL, attempted_fixes TEXT NOT NULL, timestamp DATETIME DEFAULT CURRENT_TIMESTAMP);
";

/// A database file with the CCMem schema inside a temp directory.
///
/// Foreign keys are not declared so tests can insert dangling references.
pub struct Fixture {
    pub dir: TempDir,
    path: PathBuf,
    conn: Connection,
}

impl Fixture {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ccmem.db");
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch(SCHEMA).unwrap();
        Self { dir, path, conn }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn open(&self) -> Store {
        Store::open(&self.path).unwrap()
    }

    pub fn story(&self, id: i64, message: &str, timestamp: &str) {
        self.conn
            .execute(
                "INSERT INTO story (id, message, timestamp) VALUES (?1, ?2, ?3)",
                params![id, message, timestamp],
            )
            .unwrap();
    }

    pub fn task(
        &self,
        id: i64,
        story_id: Option<i64>,
        description: &str,
        status: &str,
        timestamp: &str,
    ) {
        self.conn
            .execute(
                "INSERT INTO task (id, story_id, description, status, timestamp) VALUES (?1, ?2, ?3, ?4, ?5)",
                params![id, story_id, description, status, timestamp],
            )
            .unwrap();
    }

    pub fn defect(
        &self,
        id: i64,
        story_id: Option<i64>,
        task_id: Option<i64>,
        description: &str,
        status: &str,
        timestamp: &str,
    ) {
        self.conn
            .execute(
                "INSERT INTO defect (id, story_id, task_id, description, status, timestamp) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![id, story_id, task_id, description, status, timestamp],
            )
            .unwrap();
    }

    pub fn landmine(
        &self,
        id: i64,
        task_id: i64,
        session_id: &str,
        error_context: &str,
        attempted_fixes: &str,
        timestamp: &str,
    ) {
        self.conn
            .execute(
                "INSERT INTO landmines (id, task_id, session_id, error_context, attempted_fixes, timestamp) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![id, task_id, session_id, error_context, attempted_fixes, timestamp],
            )
            .unwrap();
    }
}
