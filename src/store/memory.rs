//! In-memory store implementation for testing.

use parking_lot::RwLock;

use super::StudentStore;
use crate::domain::{Student, StudentEntry};
use crate::error::Result;

/// In-memory store for testing purposes. Keys are assigned from a
/// monotonically increasing counter; iteration order is insertion order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    students: Vec<Student>,
    next_id: i32,
}

impl MemoryStore {
    /// Create a new empty memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl StudentStore for MemoryStore {
    async fn list_all(&self) -> Result<Vec<Student>> {
        Ok(self.inner.read().students.clone())
    }

    async fn insert(&self, entry: &StudentEntry) -> Result<()> {
        let mut inner = self.inner.write();
        inner.next_id += 1;
        let id = inner.next_id;
        inner.students.push(Student {
            id,
            name: entry.name.clone(),
            student_id: entry.student_id.clone(),
        });
        Ok(())
    }

    async fn update(&self, key: &str, entry: &StudentEntry) -> Result<usize> {
        let mut inner = self.inner.write();
        let mut affected = 0;
        for student in inner.students.iter_mut().filter(|s| s.student_id == key) {
            student.name = entry.name.clone();
            student.student_id = entry.student_id.clone();
            affected += 1;
        }
        Ok(affected)
    }

    async fn delete_by_student_id(&self, student_id: &str) -> Result<usize> {
        let mut inner = self.inner.write();
        let before = inner.students.len();
        inner.students.retain(|s| s.student_id != student_id);
        Ok(before - inner.students.len())
    }
}
