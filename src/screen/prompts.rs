//! Interactive prompts for the roster screen.
//!
//! Validation lives in the controller; the form therefore accepts empty
//! input and the caller decides whether to re-open it.

use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use crate::domain::{Roster, StudentEntry};
use crate::error::Result;

/// Top-level actions offered by the screen menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Add,
    Edit,
    Delete,
    Quit,
}

/// Raw form input for add and edit. Kept as submitted so a rejected form
/// can re-open with the user's text preserved.
#[derive(Debug, Clone, Default)]
pub struct StudentForm {
    pub name: String,
    pub student_id: String,
}

impl From<&StudentEntry> for StudentForm {
    fn from(entry: &StudentEntry) -> Self {
        Self {
            name: entry.name.clone(),
            student_id: entry.student_id.clone(),
        }
    }
}

/// Show the main menu. Edit and delete are only offered when the roster
/// has rows. Escape maps to `None` (treated as quit by the caller).
pub fn main_menu(theme: &ColorfulTheme, has_rows: bool) -> Result<Option<MenuAction>> {
    let actions: &[(&str, MenuAction)] = if has_rows {
        &[
            ("Add a student", MenuAction::Add),
            ("Edit a student", MenuAction::Edit),
            ("Delete a student", MenuAction::Delete),
            ("Quit", MenuAction::Quit),
        ]
    } else {
        &[("Add a student", MenuAction::Add), ("Quit", MenuAction::Quit)]
    };

    let labels: Vec<&str> = actions.iter().map(|(label, _)| *label).collect();
    let selection = Select::with_theme(theme)
        .with_prompt("What next?")
        .items(&labels)
        .default(0)
        .interact_opt()?;

    Ok(selection.map(|index| actions[index].1))
}

/// Two-field student form, seeded with `initial` text (current values for
/// an edit, the previous submission after a rejection).
pub fn student_form(
    theme: &ColorfulTheme,
    prompt: &str,
    initial: &StudentForm,
) -> Result<StudentForm> {
    println!("{prompt}");

    let name: String = Input::with_theme(theme)
        .with_prompt("Name")
        .with_initial_text(&initial.name)
        .allow_empty(true)
        .interact_text()?;

    let student_id: String = Input::with_theme(theme)
        .with_prompt("Student ID")
        .with_initial_text(&initial.student_id)
        .allow_empty(true)
        .interact_text()?;

    Ok(StudentForm { name, student_id })
}

/// Let the user pick a row; returns the mirror position, or `None` on
/// cancel.
pub fn pick_row(theme: &ColorfulTheme, prompt: &str, roster: &Roster) -> Result<Option<usize>> {
    let labels: Vec<String> = roster
        .entries()
        .iter()
        .map(|entry| format!("{} ({})", entry.name, entry.student_id))
        .collect();

    let selection = Select::with_theme(theme)
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact_opt()?;

    Ok(selection)
}

/// Confirmation prompt naming the student about to be deleted.
pub fn confirm_delete(theme: &ColorfulTheme, entry: &StudentEntry) -> Result<bool> {
    Confirm::with_theme(theme)
        .with_prompt(format!(
            "Delete student {} ({})?",
            entry.name, entry.student_id
        ))
        .default(false)
        .interact()
        .map_err(Into::into)
}
