use holiday_rota::infrastructure::persistence::Database;
use std::path::PathBuf;

/// A migrated, file-backed SQLite database unique to one test.
/// The file is removed when the handle is dropped.
pub struct TestDb {
    db: Database,
    path: PathBuf,
}

impl TestDb {
    pub fn db(&self) -> Database {
        self.db.clone()
    }
}

impl Drop for TestDb {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
        let _ = std::fs::remove_file(self.path.with_extension("db-wal"));
        let _ = std::fs::remove_file(self.path.with_extension("db-shm"));
    }
}

pub async fn setup_test_db() -> TestDb {
    // Unique file per test so tests can run in parallel
    let path = std::env::temp_dir().join(format!("holiday_rota_test_{}.db", uuid::Uuid::new_v4()));
    let db_url = format!("sqlite://{}?mode=rwc", path.display());

    let db = Database::connect(&db_url)
        .await
        .expect("Failed to connect to test database");

    db.run_migrations()
        .await
        .expect("Failed to run migrations");

    TestDb { db, path }
}
