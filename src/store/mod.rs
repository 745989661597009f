//! Persistence layer with pluggable storage backends.

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStudentStore;

use std::future::Future;

use crate::domain::{Student, StudentEntry};
use crate::error::Result;

/// Storage operations for student records.
///
/// Each call is independently atomic at the storage layer; no transaction
/// spans multiple operations.
pub trait StudentStore: Send + Sync {
    /// List every record in storage-defined order. Callers must not assume
    /// the result is sorted.
    fn list_all(&self) -> impl Future<Output = Result<Vec<Student>>> + Send;

    /// Append a new record; the primary key is assigned by the store.
    fn insert(&self, entry: &StudentEntry) -> impl Future<Output = Result<()>> + Send;

    /// Replace both fields of every record whose student id currently
    /// equals `key`. Returns the number of rows affected.
    fn update(&self, key: &str, entry: &StudentEntry) -> impl Future<Output = Result<usize>> + Send;

    /// Remove all records with the given student id. Returns the count
    /// removed; zero matches is not an error.
    fn delete_by_student_id(&self, student_id: &str)
        -> impl Future<Output = Result<usize>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, id: &str) -> StudentEntry {
        StudentEntry::new(name, id).unwrap()
    }

    #[tokio::test]
    async fn insert_then_list_contains_record() {
        let store = MemoryStore::new();
        store.insert(&entry("Alice", "SV001")).await.unwrap();

        let all = store.list_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Alice");
        assert_eq!(all[0].student_id, "SV001");
    }

    #[tokio::test]
    async fn update_is_keyed_on_current_student_id() {
        let store = MemoryStore::new();
        store.insert(&entry("Alice", "SV001")).await.unwrap();
        store.insert(&entry("Bob", "SV002")).await.unwrap();

        let affected = store
            .update("SV001", &entry("Alice Tran", "SV010"))
            .await
            .unwrap();
        assert_eq!(affected, 1);

        let all = store.list_all().await.unwrap();
        let alice = all.iter().find(|s| s.student_id == "SV010").unwrap();
        assert_eq!(alice.name, "Alice Tran");
        // The other record is untouched.
        assert!(all.iter().any(|s| s.student_id == "SV002" && s.name == "Bob"));
    }

    #[tokio::test]
    async fn update_with_absent_key_affects_nothing() {
        let store = MemoryStore::new();
        store.insert(&entry("Alice", "SV001")).await.unwrap();

        let affected = store.update("SV999", &entry("Nobody", "SV998")).await.unwrap();
        assert_eq!(affected, 0);

        let all = store.list_all().await.unwrap();
        assert_eq!(all[0].student_id, "SV001");
    }

    #[tokio::test]
    async fn delete_of_absent_id_is_a_no_op() {
        let store = MemoryStore::new();
        store.insert(&entry("Alice", "SV001")).await.unwrap();

        let removed = store.delete_by_student_id("SV999").await.unwrap();
        assert_eq!(removed, 0);
        assert_eq!(store.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delete_removes_every_matching_record() {
        let store = MemoryStore::new();
        // No uniqueness constraint: duplicate student ids are legal.
        store.insert(&entry("Alice", "SV001")).await.unwrap();
        store.insert(&entry("Alice again", "SV001")).await.unwrap();
        store.insert(&entry("Bob", "SV002")).await.unwrap();

        let removed = store.delete_by_student_id("SV001").await.unwrap();
        assert_eq!(removed, 2);

        let all = store.list_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].student_id, "SV002");
    }
}
