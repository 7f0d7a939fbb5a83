//! Interactive menu loop driving the report store.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use super::clock::Clock;
use super::errors::{BugTrackError, BugTrackResult};
use super::prompt::Console;
use super::report::ReportFields;
use super::store::ReportStore;

pub const BANNER: &str = "--------- Bug Tracking System ---------";

/// Top-level menu entries, selected by exact input token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    FileBug,
    ChangeStatus,
    PrintReport,
    Exit,
}

impl MenuCommand {
    pub fn from_input(input: &str) -> BugTrackResult<Self> {
        match input {
            "1" => Ok(MenuCommand::FileBug),
            "2" => Ok(MenuCommand::ChangeStatus),
            "3" => Ok(MenuCommand::PrintReport),
            "4" => Ok(MenuCommand::Exit),
            other => Err(BugTrackError::invalid_choice("menu", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Running,
    Exiting,
}

/// Runs the menu until the user exits or input ends.
///
/// Report failures are printed and the loop carries on; only failures of the
/// console itself are returned.
pub fn run_menu<R, W, C>(console: &mut Console<R, W>, store: &ReportStore<C>) -> BugTrackResult<()>
where
    R: BufRead,
    W: Write,
    C: Clock,
{
    console.println(BANNER)?;
    let mut state = MenuState::Running;

    while state == MenuState::Running {
        state = match step(console, store) {
            Ok(next) => next,
            Err(err @ BugTrackError::InputClosed { .. }) => {
                debug!(error = %err, "input ended, leaving menu");
                console.println("")?;
                console.println("System exiting.")?;
                MenuState::Exiting
            }
            Err(err) if matches!(err, BugTrackError::Io { path: Some(_), .. }) => {
                if err.is_not_found() {
                    info!(code = err.error_code(), error = %err, "report path not found");
                } else {
                    warn!(
                        code = err.error_code(),
                        category = ?err.category(),
                        error = %err,
                        "report operation failed"
                    );
                }
                console.println(&format!("Error: {err}"))?;
                MenuState::Running
            }
            Err(err) => return Err(err),
        };
    }
    Ok(())
}

fn step<R, W, C>(console: &mut Console<R, W>, store: &ReportStore<C>) -> BugTrackResult<MenuState>
where
    R: BufRead,
    W: Write,
    C: Clock,
{
    console.println(
        "Choose between one of the options below by entering a number and then pressing enter",
    )?;
    console.println("1. File a new bug")?;
    console.println("2. Change status of an existing bug")?;
    console.println("3. Print the file of a bug")?;
    console.println("4. Exit")?;
    let choice = console.ask("Enter your choice: ")?;

    match MenuCommand::from_input(&choice) {
        Ok(MenuCommand::FileBug) => file_new_bug(console, store)?,
        Ok(MenuCommand::ChangeStatus) => change_status(console, store)?,
        Ok(MenuCommand::PrintReport) => print_report(console, store)?,
        Ok(MenuCommand::Exit) => {
            console.println("System exiting.")?;
            return Ok(MenuState::Exiting);
        }
        Err(err) => {
            debug!(error = %err, "unmatched menu input");
            console.println("Invalid input detected.")?;
        }
    }
    Ok(MenuState::Running)
}

fn file_new_bug<R, W, C>(console: &mut Console<R, W>, store: &ReportStore<C>) -> BugTrackResult<()>
where
    R: BufRead,
    W: Write,
    C: Clock,
{
    console.println("--------- File Creation ---------")?;
    let name = console.ask("Enter the name of the file to track the bug: ")?;
    let path = store.report_path(&name);

    let fields = ReportFields {
        source_file: console.ask("Enter the file that contains the bug: ")?,
        user: console.ask("Enter your username to save into the file: ")?,
        bug_type: console.ask("Enter the bug type: ")?,
        priority: console.ask("Enter the priority of the bug: ")?,
        description: console.ask("Enter the bug description: ")?,
    };
    let status = console.prompt_status()?;

    store.create_report(&path, &fields, status)
}

fn change_status<R, W, C>(console: &mut Console<R, W>, store: &ReportStore<C>) -> BugTrackResult<()>
where
    R: BufRead,
    W: Write,
    C: Clock,
{
    console.println("--------- Bug Status Change ---------")?;
    let name = console.ask("Enter the name of the file to update the bug: ")?;
    let path = store.report_path(&name);
    let status = console.prompt_status()?;

    store.append_status_update(&path, status)?;
    console.println("")
}

fn print_report<R, W, C>(console: &mut Console<R, W>, store: &ReportStore<C>) -> BugTrackResult<()>
where
    R: BufRead,
    W: Write,
    C: Clock,
{
    console.println("--------- Print Bug File ---------")?;
    let name = console.ask("Enter the name of the bug file to print: ")?;
    let path = store.report_path(&name);

    let lines = store.read_report(&path)?;
    console.println("")?;
    for line in lines {
        console.println(&line?)?;
    }
    console.println("")
}
