//! SQLite store implementation using Diesel.

use std::fs;
use std::path::Path;

use diesel::prelude::*;
use tokio::task;

use super::StudentStore;
use crate::db::model::{NewStudentRow, StudentRow};
use crate::db::schema::students;
use crate::db::{self, DbPool};
use crate::domain::{Student, StudentEntry};
use crate::error::{Error, Result};

/// SQLite-backed student store.
///
/// Every operation runs its blocking Diesel call on the Tokio blocking
/// thread pool, keeping store I/O off the interactive task.
pub struct SqliteStudentStore {
    pool: DbPool,
}

impl SqliteStudentStore {
    /// Create a store over an existing pool. The schema must already be in
    /// place (see [`db::run_migrations`]).
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Open (or create) the database file at `path` and apply pending
    /// migrations.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let pool = db::create_pool(&path.to_string_lossy())?;
        db::run_migrations(&pool)?;
        Ok(Self::new(pool))
    }

    fn to_row(entry: &StudentEntry) -> NewStudentRow {
        NewStudentRow {
            student_name: entry.name.clone(),
            student_id: entry.student_id.clone(),
        }
    }

    fn from_row(row: StudentRow) -> Student {
        Student {
            id: row.id,
            name: row.student_name,
            student_id: row.student_id,
        }
    }

    async fn blocking<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(DbPool) -> Result<T> + Send + 'static,
    {
        let pool = self.pool.clone();
        task::spawn_blocking(move || op(pool))
            .await
            .map_err(|e| Error::Task(e.to_string()))?
    }
}

impl StudentStore for SqliteStudentStore {
    async fn list_all(&self) -> Result<Vec<Student>> {
        self.blocking(|pool| {
            let mut conn = pool.get().map_err(|e| Error::Connection(e.to_string()))?;

            // No ORDER BY: iteration order is storage-defined.
            let rows: Vec<StudentRow> = students::table
                .load(&mut conn)
                .map_err(|e| Error::Database(e.to_string()))?;

            Ok(rows.into_iter().map(Self::from_row).collect())
        })
        .await
    }

    async fn insert(&self, entry: &StudentEntry) -> Result<()> {
        let row = Self::to_row(entry);
        self.blocking(move |pool| {
            let mut conn = pool.get().map_err(|e| Error::Connection(e.to_string()))?;

            diesel::insert_into(students::table)
                .values(&row)
                .execute(&mut conn)
                .map_err(|e| Error::Database(e.to_string()))?;

            Ok(())
        })
        .await
    }

    async fn update(&self, key: &str, entry: &StudentEntry) -> Result<usize> {
        let key = key.to_string();
        let row = Self::to_row(entry);
        self.blocking(move |pool| {
            let mut conn = pool.get().map_err(|e| Error::Connection(e.to_string()))?;

            diesel::update(students::table.filter(students::student_id.eq(&key)))
                .set(&row)
                .execute(&mut conn)
                .map_err(|e| Error::Database(e.to_string()))
        })
        .await
    }

    async fn delete_by_student_id(&self, student_id: &str) -> Result<usize> {
        let student_id = student_id.to_string();
        self.blocking(move |pool| {
            let mut conn = pool.get().map_err(|e| Error::Connection(e.to_string()))?;

            diesel::delete(students::table.filter(students::student_id.eq(&student_id)))
                .execute(&mut conn)
                .map_err(|e| Error::Database(e.to_string()))
        })
        .await
    }
}
