//! Command-line front end for the pinnote store.
//!
//! # Responsibility
//! - Map subcommands onto `NoteList` operations against the configured store.
//! - Print toast messages and inline errors the way a UI host would show them.
//!
//! Environment: `PINNOTE_DB_PATH` selects the store file, `PINNOTE_LOG_DIR`
//! enables file logging, `PINNOTE_LOG_LEVEL` sets its level.

use clap::{Parser, Subcommand};
use pinnote_core::{
    core_version, init_logging, resolve_db_path, resolve_log_dir, resolve_log_level, Note,
    NoteDraft, NoteId, NoteList, SqliteStore,
};
use std::error::Error;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "pinnote", version, about = "Pinned short notes", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show one page of notes (6 per page)
    List { page: Option<usize> },
    /// Print the page view model as JSON
    View { page: Option<usize> },
    /// Add a note
    Add {
        title: String,
        tagline: String,
        body: String,
    },
    /// Replace a note's text, keeping its pin
    Edit {
        id: NoteId,
        title: String,
        tagline: String,
        body: String,
    },
    /// Toggle a note's pin
    Pin { id: NoteId },
    /// Delete every note with this id
    Delete { id: NoteId },
    /// Print the core version
    Version,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Some(log_dir) = resolve_log_dir() {
        if let Err(err) = init_logging(&resolve_log_level(), &log_dir) {
            eprintln!("warning: logging disabled: {err}");
        }
    }

    match run(args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<(), Box<dyn Error>> {
    match command {
        Commands::Version => println!("pinnote_core version={}", core_version()),
        Commands::List { page } => {
            let list = open_at_page(page)?;
            print_page(&list);
        }
        Commands::View { page } => {
            let list = open_at_page(page)?;
            println!("{}", serde_json::to_string_pretty(&list.view())?);
        }
        Commands::Add {
            title,
            tagline,
            body,
        } => {
            let mut list = open_list()?;
            let result = list.add(NoteDraft::new(title, tagline, body));
            if let Some(inline) = list.error() {
                eprintln!("{inline}");
            }
            flush_notifications(&mut list);
            let note = result?;
            println!("added note {}", note.id);
        }
        Commands::Edit {
            id,
            title,
            tagline,
            body,
        } => {
            let mut list = open_list()?;
            let pinned = list
                .notes()
                .iter()
                .find(|note| note.id == id)
                .is_some_and(|note| note.pinned);
            list.save_note(&Note {
                id,
                title,
                tagline,
                body,
                pinned,
            })?;
            flush_notifications(&mut list);
        }
        Commands::Pin { id } => {
            let mut list = open_list()?;
            list.toggle_pin(id)?;
            flush_notifications(&mut list);
        }
        Commands::Delete { id } => {
            let mut list = open_list()?;
            list.delete_note(id)?;
            flush_notifications(&mut list);
        }
    }

    Ok(())
}

fn open_list() -> Result<NoteList<SqliteStore>, Box<dyn Error>> {
    let store = SqliteStore::open(resolve_db_path())?;
    Ok(NoteList::load(store)?)
}

fn open_at_page(page: Option<usize>) -> Result<NoteList<SqliteStore>, Box<dyn Error>> {
    let mut list = open_list()?;
    if let Some(page) = page {
        list.paginate(page)?;
    }
    Ok(list)
}

fn print_page(list: &NoteList<SqliteStore>) {
    if list.notes().is_empty() {
        println!("No notes.");
        return;
    }
    for note in list.current_notes() {
        let marker = if note.pinned { "*" } else { " " };
        println!("{marker} #{:<4} {} | {}", note.id, note.title, note.tagline);
        println!("         {}", note.body);
    }
    println!("page {}/{}", list.current_page(), list.page_count());
}

fn flush_notifications(list: &mut NoteList<SqliteStore>) {
    for notification in list.take_notifications() {
        println!("{}", notification.message);
    }
}
