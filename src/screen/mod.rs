//! The single roster screen: controller, row rendering, and prompts.

pub mod prompts;
pub mod view;

use tracing::{debug, info, warn};

use crate::domain::{Roster, StudentEntry};
use crate::error::{Error, Result};
use crate::store::StudentStore;

/// Screen lifecycle: `Loading` until the first successful load, `Ready`
/// afterwards. The transition happens exactly once per controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenState {
    Loading,
    Ready,
}

/// Owns the roster mirror and the store handle, and sequences every
/// screen action: persist first, then mutate the mirror.
///
/// Mirror mutation only happens after the store call has completed, on the
/// task driving the screen; `&mut self` across the await keeps actions
/// serialized.
pub struct ScreenController<S> {
    store: S,
    roster: Roster,
    state: ScreenState,
}

impl<S: StudentStore> ScreenController<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            roster: Roster::default(),
            state: ScreenState::Loading,
        }
    }

    pub fn state(&self) -> ScreenState {
        self.state
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Fetch all records and populate the mirror. Transitions the screen
    /// to `Ready` on success.
    pub async fn load(&mut self) -> Result<()> {
        let students = self.store.list_all().await?;
        info!(count = students.len(), "roster loaded");
        self.roster = Roster::from_students(students);
        self.state = ScreenState::Ready;
        Ok(())
    }

    /// Validate and persist a new student, then append it to the mirror.
    /// Blank input is rejected before any store call.
    pub async fn add(&mut self, name: &str, student_id: &str) -> Result<StudentEntry> {
        let entry = StudentEntry::new(name, student_id)?;
        self.store.insert(&entry).await?;
        let position = self.roster.push(entry.clone());
        debug!(position, student_id = %entry.student_id, "student added");
        Ok(entry)
    }

    /// Validate and persist an edit of the row at `position`, keyed on the
    /// student id that row currently holds, then replace the mirror entry.
    pub async fn edit(&mut self, position: usize, name: &str, student_id: &str) -> Result<StudentEntry> {
        let entry = StudentEntry::new(name, student_id)?;
        let current = self.entry_at(position)?.clone();

        let affected = self.store.update(&current.student_id, &entry).await?;
        if affected == 0 {
            warn!(student_id = %current.student_id, "no stored row matched the edited one");
        }

        self.roster.replace(position, entry.clone());
        debug!(position, student_id = %entry.student_id, "student updated");
        Ok(entry)
    }

    /// Delete the row at `position` by its student id and drop the mirror
    /// entry. Deleting an id the store no longer has is a silent no-op.
    pub async fn remove(&mut self, position: usize) -> Result<StudentEntry> {
        let current = self.entry_at(position)?.clone();

        let removed = self.store.delete_by_student_id(&current.student_id).await?;
        debug!(position, student_id = %current.student_id, removed, "student deleted");

        // Bounds were checked above; the mirror cannot have shrunk since.
        Ok(self
            .roster
            .remove(position)
            .unwrap_or(current))
    }

    fn entry_at(&self, position: usize) -> Result<&StudentEntry> {
        self.roster.get(position).ok_or(Error::RowOutOfRange {
            position,
            len: self.roster.len(),
        })
    }
}
