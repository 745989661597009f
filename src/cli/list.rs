//! Non-interactive roster listing.

use crate::config::Config;
use crate::domain::Roster;
use crate::error::Result;
use crate::screen::view;
use crate::store::{SqliteStudentStore, StudentStore};

/// Print the roster table and exit.
pub async fn execute(config: Config) -> Result<()> {
    let store = SqliteStudentStore::open(&config.database.path)?;

    let students = store.list_all().await?;
    let roster = Roster::from_students(students);

    println!("{}", view::render(&roster));
    Ok(())
}
