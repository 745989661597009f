//! Domain types: student records, the roster mirror, and field validation.

mod roster;
mod student;

pub use roster::Roster;
pub use student::{Student, StudentEntry, ValidationError};
