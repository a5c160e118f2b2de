//! rulefield - edit a rule list field stored in a JSON file
//!
//! Mounts the rule list editor on a file-backed host, applies one author
//! action and prints the resulting rows.
//!
//! Usage:
//!   rulefield --value field.json add
//!   rulefield --value field.json edit --id <ID> --field key --text includes
//!   rulefield --param valueOnly=true --param operatorOptions=AND,OR show

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use rulefield_cli::{FileHost, load_parameters, render_table};
use rulefield_editor::{FieldHost, RecordField, RecordId, RuleListEditor};
use tracing::{Level, debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "rulefield")]
#[command(about = "Edit a key/operator/value rule list stored as JSON")]
struct Args {
    /// JSON file holding the field value
    #[arg(long, default_value = "field.json")]
    value: PathBuf,

    /// JSON object file with instance parameters
    #[arg(long)]
    params: Option<PathBuf>,

    /// Instance parameter override, NAME=VALUE (repeatable)
    #[arg(long = "param", value_name = "NAME=VALUE")]
    param: Vec<String>,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the rows as a table
    Show,
    /// Print the row projection as JSON
    View,
    /// Print the parsed editor configuration as JSON
    Config,
    /// Append a blank record
    Add,
    /// Change one field of a record
    Edit {
        #[arg(long)]
        id: String,
        /// key, operator or value
        #[arg(long)]
        field: RecordField,
        #[arg(long)]
        text: String,
    },
    /// Remove a record
    Delete {
        #[arg(long)]
        id: String,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.as_str().to_lowercase()));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr)
        .init();

    let parameters = load_parameters(args.params.as_deref(), &args.param)
        .context("Failed to load instance parameters")?;
    let mut host = FileHost::open(&args.value, parameters)
        .with_context(|| format!("Failed to open {}", args.value.display()))?;
    let mut editor = RuleListEditor::mount(&mut host);

    match args.command {
        Command::Show => print!("{}", render_table(&editor.view())),
        Command::View => println!("{}", serde_json::to_string_pretty(&editor.view())?),
        Command::Config => println!("{}", serde_json::to_string_pretty(editor.config())?),
        Command::Add => {
            let id = editor.append(&mut host);
            settle(&mut editor, &mut host)?;
            info!(record_id = %id, "Record added");
            print!("{}", render_table(&editor.view()));
        }
        Command::Edit { id, field, text } => {
            let id = RecordId::new(id);
            if !editor.edit(&mut host, &id, field, &text) {
                bail!("no record with id {id}");
            }
            settle(&mut editor, &mut host)?;
            print!("{}", render_table(&editor.view()));
        }
        Command::Delete { id } => {
            let id = RecordId::new(id);
            if !editor.delete(&mut host, &id) {
                bail!("no record with id {id}");
            }
            settle(&mut editor, &mut host)?;
            print!("{}", render_table(&editor.view()));
        }
    }

    Ok(())
}

/// Surfaces a failed write and delivers the host's echoes to the editor.
fn settle(editor: &mut RuleListEditor, host: &mut FileHost) -> Result<()> {
    if let Some(e) = host.take_write_error() {
        return Err(e).with_context(|| format!("Failed to save {}", host.path().display()));
    }
    for value in host.take_notifications() {
        editor.on_value_changed(&value);
    }
    debug!(records = editor.items().len(), stored = host.value().is_some(), "Editor settled");
    Ok(())
}
