#[cfg(feature = "ssr")]
mod db_impl {
    use crate::error::StoreError;
    use crate::models::test_record::{TestRecord, DEFAULT_MESSAGE};
    use leptos::logging;
    use leptos::logging::log;
    use rusqlite::Connection;
    use std::sync::Arc;
    use tokio::sync::Mutex;


    /// Handle to the relational store. Cheap to clone; every clone shares one connection.
    #[derive(Debug, Clone)]
    pub struct Database {
        conn: Arc<Mutex<Connection>>,
    }

    impl Database {
        // Open the store at `db_path` (":memory:" for a throwaway database)
        pub fn new(db_path: &str) -> Result<Self, StoreError> {
            let conn = Connection::open(db_path)?;
            logging::log!("[DB] Connection established at: {}", db_path);
            Ok(Database {
                conn: Arc::new(Mutex::new(conn)),
            })
        }

        pub async fn create_schema(&self) -> Result<(), StoreError> {
            let conn = self.conn.lock().await;

            // AUTOINCREMENT keeps ids monotonic even after rows are purged
            conn.execute_batch(
                "CREATE TABLE IF NOT EXISTS test_records (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    message TEXT NOT NULL
                );",
            )
            .map_err(|e| {
                logging::error!("[DB] Failed creating test_records table: {}", e);
                e
            })?;
            Ok(())
        }

        /// Persist a new record. An absent or empty message stores [`DEFAULT_MESSAGE`].
        pub async fn create_record(&self, message: Option<&str>) -> Result<TestRecord, StoreError> {
            let message = match message {
                Some(m) if !m.is_empty() => m,
                _ => DEFAULT_MESSAGE,
            };

            let conn = self.conn.lock().await;
            conn.execute("INSERT INTO test_records (message) VALUES (?)", [message])?;
            let record = TestRecord {
                id: conn.last_insert_rowid(),
                message: message.to_string(),
            };
            log!("[DB] Created record {}", record.id);
            Ok(record)
        }

        /// Every record, newest first.
        pub async fn list_records(&self) -> Result<Vec<TestRecord>, StoreError> {
            let conn = self.conn.lock().await;
            let mut stmt = conn.prepare("SELECT id, message FROM test_records ORDER BY id DESC")?;
            let rows = stmt.query_map([], |row| {
                Ok(TestRecord {
                    id: row.get(0)?,
                    message: row.get(1)?,
                })
            })?;

            let mut records = Vec::new();
            for row in rows {
                records.push(row?);
            }
            log!("[DB] Fetched {} records", records.len());
            Ok(records)
        }

        /// Release the connection if this is the last handle to it.
        pub async fn close(self) -> Result<CloseOutcome, StoreError> {
            match Arc::try_unwrap(self.conn) {
                Ok(conn) => {
                    conn.into_inner().close().map_err(|(_, e)| e)?;
                    log!("[DB] Connection closed");
                    Ok(CloseOutcome::Closed)
                }
                Err(conn) => {
                    logging::warn!(
                        "[DB] Connection still shared by {} other handles",
                        Arc::strong_count(&conn) - 1
                    );
                    Ok(CloseOutcome::StillShared)
                }
            }
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum CloseOutcome {
        Closed,
        /// Other clones are alive; the connection closes when the last one drops.
        StillShared,
    }

    pub const SEED_MESSAGES: [&str; 3] = [
        "Welcome to the storefront",
        "Catalog synced",
        "Reviews service connected",
    ];

    /// Open the store at `db_path`, ensure the schema and insert [`SEED_MESSAGES`].
    pub async fn seed(db_path: &str) -> Result<Vec<TestRecord>, StoreError> {
        let db = Database::new(db_path)?;
        db.create_schema().await?;

        let mut records = Vec::with_capacity(SEED_MESSAGES.len());
        for message in SEED_MESSAGES {
            let record = db.create_record(Some(message)).await?;
            log!("[SEED] Inserted record {}: {}", record.id, record.message);
            records.push(record);
        }

        db.close().await?;
        Ok(records)
    }
}

#[cfg(feature = "ssr")]
pub use db_impl::{seed, CloseOutcome, Database, SEED_MESSAGES};
