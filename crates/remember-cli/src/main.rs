//! remember command-line tool.
//!
//! Works directly on the SQLite database the server uses: export the stored
//! document, import one from a file, print a readable summary, list the
//! users with a stored document, or remove one user's document.
//!
//! Exit codes: 0 = success, 1 = invalid input, 3 = I/O or storage error.

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};

use remember_core::{Document, EMPTY_DOCUMENT};
use remember_storage::{DocumentKey, DocumentStore, SqliteStore};

/// remember notes-and-tasks tools.
#[derive(Parser)]
#[command(name = "remember", about = "remember notes-and-tasks tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every subcommand.
#[derive(clap::Args)]
struct Target {
    /// Path to the database file.
    #[arg(short, long, default_value = "remember.db")]
    db: String,

    /// User whose document to use.
    #[arg(short, long, default_value = "default")]
    user: String,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Print the stored document as pretty JSON.
    Export {
        #[command(flatten)]
        target: Target,
    },
    /// Replace the stored document with the contents of a JSON file.
    Import {
        #[command(flatten)]
        target: Target,

        /// JSON file to import.
        file: PathBuf,
    },
    /// Print notes and todos in display order.
    Show {
        #[command(flatten)]
        target: Target,
    },
    /// List users that have a stored document.
    Users {
        /// Path to the database file.
        #[arg(short, long, default_value = "remember.db")]
        db: String,
    },
    /// Remove a user's stored document.
    Reset {
        #[command(flatten)]
        target: Target,
    },
}

/// A failed command: message plus exit code.
#[derive(Debug)]
struct Failure {
    code: i32,
    message: String,
}

impl Failure {
    fn input(message: String) -> Self {
        Failure { code: 1, message }
    }

    fn io(message: String) -> Self {
        Failure { code: 3, message }
    }
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Export { target } => run_export(&target),
        Commands::Import { target, file } => run_import(&target, &file),
        Commands::Show { target } => run_show(&target),
        Commands::Users { db } => run_users(&db),
        Commands::Reset { target } => run_reset(&target),
    };

    if let Err(failure) = result {
        eprintln!("Error: {}", failure.message);
        process::exit(failure.code);
    }
}

fn open_db(db: &str) -> Result<SqliteStore, Failure> {
    SqliteStore::new(db)
        .map_err(|e| Failure::io(format!("failed to open database '{}': {}", db, e)))
}

fn open(target: &Target) -> Result<(SqliteStore, DocumentKey), Failure> {
    let store = open_db(&target.db)?;
    Ok((store, DocumentKey::for_user(&target.user)))
}

fn load_raw(store: &dyn DocumentStore, key: &DocumentKey) -> Result<Vec<u8>, Failure> {
    let stored = store
        .get(key)
        .map_err(|e| Failure::io(format!("failed to read '{}': {}", key, e)))?;
    Ok(stored.unwrap_or_else(|| EMPTY_DOCUMENT.as_bytes().to_vec()))
}

/// Execute the export subcommand.
fn run_export(target: &Target) -> Result<(), Failure> {
    let (store, key) = open(target)?;
    let raw = load_raw(&store, &key)?;
    let value: serde_json::Value = serde_json::from_slice(&raw)
        .map_err(|e| Failure::input(format!("stored document is not JSON: {}", e)))?;
    let pretty = serde_json::to_string_pretty(&value)
        .map_err(|e| Failure::io(format!("failed to render document: {}", e)))?;
    println!("{}", pretty);
    Ok(())
}

/// Execute the import subcommand.
fn run_import(target: &Target, file: &Path) -> Result<(), Failure> {
    let body = std::fs::read(file)
        .map_err(|e| Failure::io(format!("failed to read {}: {}", file.display(), e)))?;
    serde_json::from_slice::<serde_json::Value>(&body)
        .map_err(|e| Failure::input(format!("{} is not valid JSON: {}", file.display(), e)))?;

    let (mut store, key) = open(target)?;
    store
        .put(&key, &body)
        .map_err(|e| Failure::io(format!("failed to write '{}': {}", key, e)))?;
    eprintln!("imported {} bytes into {}", body.len(), key);
    Ok(())
}

/// Execute the show subcommand.
fn run_show(target: &Target) -> Result<(), Failure> {
    let (store, key) = open(target)?;
    let raw = load_raw(&store, &key)?;
    let mut document = Document::decode(&raw)
        .map_err(|e| Failure::input(format!("stored document is malformed: {}", e)))?;
    document.sort_for_display();
    print!("{}", render_summary(&document));
    Ok(())
}

/// Execute the users subcommand.
fn run_users(db: &str) -> Result<(), Failure> {
    let store = open_db(db)?;
    for user in list_users(&store)? {
        println!("{}", user);
    }
    Ok(())
}

/// Execute the reset subcommand.
fn run_reset(target: &Target) -> Result<(), Failure> {
    let (mut store, key) = open(target)?;
    if remove_document(&mut store, &key)? {
        eprintln!("removed {}", key);
    } else {
        eprintln!("nothing stored for {}", key);
    }
    Ok(())
}

/// User ids with a stored document, in key order. Keys that are not user
/// documents are skipped.
fn list_users(store: &dyn DocumentStore) -> Result<Vec<String>, Failure> {
    let keys = store
        .keys()
        .map_err(|e| Failure::io(format!("failed to list documents: {}", e)))?;
    Ok(keys
        .iter()
        .filter_map(DocumentKey::user_id)
        .map(str::to_owned)
        .collect())
}

fn remove_document(store: &mut dyn DocumentStore, key: &DocumentKey) -> Result<bool, Failure> {
    store
        .delete(key)
        .map_err(|e| Failure::io(format!("failed to remove '{}': {}", key, e)))
}

/// Plain-text summary of a sorted document.
fn render_summary(document: &Document) -> String {
    let mut out = String::new();

    out.push_str(&format!("Notes ({})\n", document.notes.len()));
    for note in &document.notes {
        out.push_str(&format!("  [{}] {}  {}\n", note.id, note.title, note.date));
    }

    out.push_str(&format!("Pending ({})\n", document.todos.len()));
    for (position, todo) in document.todos.iter().enumerate() {
        out.push_str(&format!("  {}. [{}] {}", position + 1, todo.id, todo.content));
        match (todo.start_time.as_deref(), todo.end_time.as_deref()) {
            (Some(start), Some(end)) if !start.is_empty() && !end.is_empty() => {
                out.push_str(&format!("  ({} - {})", start, end))
            }
            (Some(start), _) if !start.is_empty() => out.push_str(&format!("  (from {})", start)),
            (_, Some(end)) if !end.is_empty() => out.push_str(&format!("  (until {})", end)),
            _ => {}
        }
        out.push('\n');
    }

    out.push_str(&format!("Completed ({})\n", document.completed_todos.len()));
    for todo in &document.completed_todos {
        out.push_str(&format!("  [{}] {}\n", todo.id, todo.content));
    }

    out
}
