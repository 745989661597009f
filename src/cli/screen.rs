//! The interactive roster screen loop.

use dialoguer::theme::ColorfulTheme;

use crate::cli::output;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::screen::prompts::{self, MenuAction, StudentForm};
use crate::screen::{view, ScreenController};
use crate::store::{SqliteStudentStore, StudentStore};

/// Open the roster screen: load everything once, then loop over menu
/// actions until the user quits.
///
/// A storage fault during the initial load is fatal; once the screen is
/// up, faults only abort the in-flight action.
pub async fn execute(config: Config) -> Result<()> {
    let store = SqliteStudentStore::open(&config.database.path)?;

    let mut controller = ScreenController::new(store);
    controller.load().await?;

    let theme = ColorfulTheme::default();
    loop {
        output::section("Students");
        println!("{}", view::render(controller.roster()));
        println!();

        let Some(action) = prompts::main_menu(&theme, !controller.roster().is_empty())? else {
            break;
        };

        match action {
            MenuAction::Add => add_flow(&theme, &mut controller).await?,
            MenuAction::Edit => edit_flow(&theme, &mut controller).await?,
            MenuAction::Delete => delete_flow(&theme, &mut controller).await?,
            MenuAction::Quit => break,
        }
    }

    Ok(())
}

/// Add dialog: the form re-opens (input preserved) while validation
/// fails; a storage fault closes it with a notice.
async fn add_flow<S: StudentStore>(
    theme: &ColorfulTheme,
    controller: &mut ScreenController<S>,
) -> Result<()> {
    let mut form = StudentForm::default();
    loop {
        form = prompts::student_form(theme, "Add a new student", &form)?;
        match controller.add(&form.name, &form.student_id).await {
            Ok(entry) => {
                output::ok(&format!("Added {} ({})", entry.name, entry.student_id));
                return Ok(());
            }
            Err(Error::Validation(reason)) => output::warn(&reason.to_string()),
            Err(err) => {
                output::error(&format!("Could not save the student: {err}"));
                return Ok(());
            }
        }
    }
}

/// Edit dialog: pre-filled with the selected row's current values.
async fn edit_flow<S: StudentStore>(
    theme: &ColorfulTheme,
    controller: &mut ScreenController<S>,
) -> Result<()> {
    let Some(position) = prompts::pick_row(theme, "Edit which student?", controller.roster())?
    else {
        return Ok(());
    };

    let current = controller
        .roster()
        .get(position)
        .cloned()
        .ok_or(Error::RowOutOfRange {
            position,
            len: controller.roster().len(),
        })?;

    let mut form = StudentForm::from(&current);
    loop {
        form = prompts::student_form(theme, "Edit student", &form)?;
        match controller.edit(position, &form.name, &form.student_id).await {
            Ok(entry) => {
                output::ok(&format!("Updated {} ({})", entry.name, entry.student_id));
                return Ok(());
            }
            Err(Error::Validation(reason)) => output::warn(&reason.to_string()),
            Err(err) => {
                output::error(&format!("Could not save the change: {err}"));
                return Ok(());
            }
        }
    }
}

/// Delete flow: confirmation names the student; cancel changes nothing.
async fn delete_flow<S: StudentStore>(
    theme: &ColorfulTheme,
    controller: &mut ScreenController<S>,
) -> Result<()> {
    let Some(position) = prompts::pick_row(theme, "Delete which student?", controller.roster())?
    else {
        return Ok(());
    };

    let Some(entry) = controller.roster().get(position).cloned() else {
        return Ok(());
    };

    if !prompts::confirm_delete(theme, &entry)? {
        return Ok(());
    }

    match controller.remove(position).await {
        Ok(removed) => output::ok(&format!("Deleted {} ({})", removed.name, removed.student_id)),
        Err(err) => output::error(&format!("Could not delete the student: {err}")),
    }
    Ok(())
}
