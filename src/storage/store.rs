use crate::{
    error::{ExportError, Result},
    model::{Defect, Landmine, Metrics, Story, Task, TaskStatus},
};
use rusqlite::{Connection, OpenFlags};
use std::path::{Path, PathBuf};

const STORIES_SQL: &str = "
    SELECT id, message, timestamp
    FROM story
    ORDER BY timestamp DESC, id DESC";

const TASKS_SQL: &str = "
    SELECT t.id, t.story_id, s.message, t.description, t.status, t.timestamp
    FROM task t
    LEFT JOIN story s ON t.story_id = s.id
    ORDER BY t.timestamp DESC, t.id DESC";

const DEFECTS_SQL: &str = "
    SELECT d.id, d.story_id, d.task_id, s.message, t.description,
           d.description, d.status, d.timestamp
    FROM defect d
    LEFT JOIN story s ON d.story_id = s.id
    LEFT JOIN task t ON d.task_id = t.id
    ORDER BY d.timestamp DESC, d.id DESC";

const LANDMINES_SQL: &str = "
    SELECT l.id, l.task_id, l.session_id, t.description, s.message,
           l.error_context, l.attempted_fixes, l.timestamp
    FROM landmines l
    LEFT JOIN task t ON l.task_id = t.id
    LEFT JOIN story s ON t.story_id = s.id
    ORDER BY l.timestamp DESC, l.id DESC";

/// Read-only handle on a CCMem database.
///
/// The connection lives exactly as long as the `Store`; dropping it closes the
/// database.
pub struct Store {
    conn: Connection,
    path: PathBuf,
}

impl Store {
    /// Opens the database read-only.
    ///
    /// Fails with [`ExportError::MissingDatabase`] if no file exists at `path`.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(ExportError::MissingDatabase(path.to_path_buf()));
        }

        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        tracing::debug!(path = %path.display(), "Opened database");

        Ok(Self {
            conn,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All stories, most recent first, with derived fields left at their defaults.
    pub fn load_stories(&self) -> Result<Vec<Story>> {
        let mut stmt = self.conn.prepare(STORIES_SQL)?;
        let stories = stmt
            .query_map([], |row| Ok(Story::new(row.get(0)?, row.get(1)?, row.get(2)?)))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        tracing::debug!(count = stories.len(), "Loaded stories");
        Ok(stories)
    }

    pub fn load_tasks(&self) -> Result<Vec<Task>> {
        let mut stmt = self.conn.prepare(TASKS_SQL)?;
        let tasks = stmt
            .query_map([], |row| {
                Ok(Task {
                    id: row.get(0)?,
                    story_id: row.get(1)?,
                    story_message: row.get(2)?,
                    description: row.get(3)?,
                    status: TaskStatus::from(row.get::<_, String>(4)?),
                    timestamp: row.get(5)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        tracing::debug!(count = tasks.len(), "Loaded tasks");
        Ok(tasks)
    }

    pub fn load_defects(&self) -> Result<Vec<Defect>> {
        let mut stmt = self.conn.prepare(DEFECTS_SQL)?;
        let defects = stmt
            .query_map([], |row| {
                Ok(Defect {
                    id: row.get(0)?,
                    story_id: row.get(1)?,
                    task_id: row.get(2)?,
                    story_message: row.get(3)?,
                    task_description: row.get(4)?,
                    description: row.get(5)?,
                    status: row.get::<_, String>(6)?.into(),
                    timestamp: row.get(7)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        tracing::debug!(count = defects.len(), "Loaded defects");
        Ok(defects)
    }

    pub fn load_landmines(&self) -> Result<Vec<Landmine>> {
        let mut stmt = self.conn.prepare(LANDMINES_SQL)?;
        let landmines = stmt
            .query_map([], |row| {
                Ok(Landmine {
                    id: row.get(0)?,
                    task_id: row.get(1)?,
                    session_id: row.get(2)?,
                    task_description: row.get(3)?,
                    story_message: row.get(4)?,
                    error_context: row.get(5)?,
                    attempted_fixes: row.get(6)?,
                    timestamp: row.get(7)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        tracing::debug!(count = landmines.len(), "Loaded landmines");
        Ok(landmines)
    }

    /// Store-wide counts, taken straight from the tables.
    pub fn metrics(&self) -> Result<Metrics> {
        Ok(Metrics::new(
            self.count("SELECT COUNT(*) FROM story", [])?,
            self.count_tasks(&TaskStatus::Pending)?,
            self.count_tasks(&TaskStatus::InProgress)?,
            self.count_tasks(&TaskStatus::Completed)?,
            self.count("SELECT COUNT(*) FROM defect WHERE status = 'open'", [])?,
            self.count("SELECT COUNT(*) FROM landmines", [])?,
        ))
    }

    fn count_tasks(&self, status: &TaskStatus) -> Result<u64> {
        self.count("SELECT COUNT(*) FROM task WHERE status = ?1", [status.as_str()])
    }

    fn count<P: rusqlite::Params>(&self, sql: &str, params: P) -> Result<u64> {
        let count: i64 = self.conn.query_row(sql, params, |row| row.get(0))?;
        Ok(count as u64)
    }
}
