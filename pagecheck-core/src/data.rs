use crate::result::CheckResult;
use rusqlite::{Connection, Result, params};
use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

pub struct Database {
    conn: Connection,
}

/// One persisted check row, as read back for history listings.
#[derive(Debug, Clone)]
pub struct StoredCheck {
    pub id: String,
    pub user_id: Option<String>,
    pub url: String,
    pub verdict: String,
    pub reasons: String, // JSON array
    pub summary: String,
    pub created_at: i64,
}

fn current_timestamp() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs() as i64
}

impl Database {
    pub fn drop(path: &Path) {
        fs::remove_file(path).unwrap();
    }

    pub fn exists(path: &Path) -> bool {
        path.exists()
    }

    pub fn new(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;

        // Optimize for concurrent writes
        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            PRAGMA temp_store = MEMORY;
            PRAGMA foreign_keys = ON;
            ",
        )?;

        let db = Database { conn };
        db.init_schema()?;
        Ok(db)
    }

    /// In-memory database, useful for tests.
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Database { conn };
        db.init_schema()?;
        Ok(db)
    }

    fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS url_checks (
                id TEXT PRIMARY KEY,
                user_id TEXT,
                url TEXT NOT NULL,
                verdict TEXT NOT NULL CHECK(verdict IN ('ok', 'warning', 'danger')),
                reasons TEXT NOT NULL,    -- JSON array of reason tags
                summary TEXT NOT NULL,
                raw_meta TEXT,            -- JSON object, headers subset only
                created_at INTEGER NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_url_checks_user ON url_checks(user_id);
            CREATE INDEX IF NOT EXISTS idx_url_checks_created ON url_checks(created_at);
            CREATE INDEX IF NOT EXISTS idx_url_checks_verdict ON url_checks(verdict);
            ",
        )?;
        Ok(())
    }

    /// Record one completed check with optional user attribution.
    pub fn insert_check(
        &self,
        result: &CheckResult,
        url: &str,
        user_id: Option<&str>,
    ) -> Result<String> {
        let id = uuid::Uuid::new_v4().to_string();
        let reasons = serde_json::to_string(&result.reasons).unwrap_or_else(|_| "[]".to_string());
        let raw_meta = serde_json::to_string(&result.meta).ok();

        self.conn.execute(
            "INSERT INTO url_checks (id, user_id, url, verdict, reasons, summary, raw_meta, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                &id,
                user_id,
                url,
                result.verdict.as_str(),
                &reasons,
                &result.summary,
                &raw_meta,
                current_timestamp(),
            ],
        )?;

        Ok(id)
    }

    pub fn recent_checks(&self, limit: usize) -> Result<Vec<StoredCheck>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, user_id, url, verdict, reasons, summary, created_at
             FROM url_checks ORDER BY created_at DESC, id LIMIT ?1",
        )?;

        let checks = stmt
            .query_map(params![limit as i64], |row| {
                Ok(StoredCheck {
                    id: row.get(0)?,
                    user_id: row.get(1)?,
                    url: row.get(2)?,
                    verdict: row.get(3)?,
                    reasons: row.get(4)?,
                    summary: row.get(5)?,
                    created_at: row.get(6)?,
                })
            })?
            .collect::<Result<Vec<_>>>()?;

        Ok(checks)
    }

    pub fn verdict_counts(&self) -> Result<Vec<(String, i64)>> {
        let mut stmt = self.conn.prepare(
            "SELECT verdict, COUNT(*) FROM url_checks GROUP BY verdict
             ORDER BY CASE verdict
                WHEN 'danger' THEN 1
                WHEN 'warning' THEN 2
                WHEN 'ok' THEN 3
             END",
        )?;

        let counts = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<Result<Vec<_>>>()?;

        Ok(counts)
    }

    pub fn get_connection(&self) -> &Connection {
        &self.conn
    }
}
