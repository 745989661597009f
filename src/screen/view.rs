//! Roster rendering: the full table is rebuilt from the mirror after
//! every mutation.

use tabled::{Table, Tabled};

use crate::domain::Roster;

#[derive(Tabled)]
struct RosterRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Student ID")]
    student_id: String,
}

/// Render the roster as a table. Row numbers are 1-based for display; the
/// underlying positions are the mirror's indexes.
pub fn render(roster: &Roster) -> String {
    if roster.is_empty() {
        return "No students yet. Choose \"Add\" to create the first one.".to_string();
    }

    let rows = roster.entries().iter().enumerate().map(|(i, entry)| RosterRow {
        position: i + 1,
        name: entry.name.clone(),
        student_id: entry.student_id.clone(),
    });

    Table::new(rows).to_string()
}
