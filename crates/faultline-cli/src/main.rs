use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use faultline_store::{FailureStore, FailureStoreError, FsFailureStore};
use faultline_wire::{deserialize_error, serialize_error};
use serde_json::{Map, Value};

#[derive(Parser, Debug)]
#[command(name = "faultline-cli")]
#[command(about = "Inspect serialized platform errors and captured failures")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Inspect(InspectArgs),
    List(ListArgs),
}

#[derive(clap::Args, Debug)]
struct InspectArgs {
    /// File containing one serialized error payload.
    #[arg(long)]
    file: Option<PathBuf>,
    /// Serialized error payload given inline.
    #[arg(long)]
    payload: Option<String>,
    /// Print the normalized record as pretty JSON instead of a tree.
    #[arg(long, action = ArgAction::SetTrue)]
    json: bool,
}

#[derive(clap::Args, Debug)]
struct ListArgs {
    /// Root directory of a filesystem failure store.
    #[arg(long)]
    root: PathBuf,
    /// Subject (chat or job record id) to list failures for.
    #[arg(long)]
    subject: String,
    #[arg(long, default_value_t = 10)]
    limit: usize,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Inspect(args) => inspect_command(args),
        Commands::List(args) => list_command(args).await,
    };

    match result {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(1)
        }
    }
}

fn inspect_command(args: InspectArgs) -> Result<ExitCode, String> {
    let payload = load_payload(args.file.as_deref(), args.payload.as_deref())?;
    let error = deserialize_error(payload.trim()).map_err(|error| error.to_string())?;

    // Re-encoding normalizes mangled tags and drops fields no codec owns.
    let normalized: Value = serde_json::from_str(&serialize_error(&error))
        .map_err(|error| error.to_string())?;
    if args.json {
        let json = serde_json::to_string_pretty(&normalized).map_err(|error| error.to_string())?;
        println!("{json}");
    } else if let Value::Object(record) = &normalized {
        print_record(record, 0);
    }
    Ok(ExitCode::SUCCESS)
}

async fn list_command(args: ListArgs) -> Result<ExitCode, String> {
    let store = FsFailureStore::new(&args.root).map_err(|error| error.to_string())?;
    let failures = match store.list_failures(&args.subject, args.limit).await {
        Ok(failures) => failures,
        Err(FailureStoreError::NotFound { .. }) => {
            println!("no failures recorded for subject {}", args.subject);
            return Ok(ExitCode::SUCCESS);
        }
        Err(error) => return Err(error.to_string()),
    };

    for failure in failures {
        let summary = match deserialize_error(&failure.payload) {
            Ok(error) => format!("{}: {}", error.tag(), error.message()),
            Err(_) => failure.payload.clone(),
        };
        println!(
            "{:>4}  {}  [{}]  {summary}",
            failure.seq, failure.failure_id, failure.source
        );
    }
    Ok(ExitCode::SUCCESS)
}

fn load_payload(file: Option<&Path>, payload: Option<&str>) -> Result<String, String> {
    match (file, payload) {
        (Some(_), Some(_)) => Err("provide only one of --file or --payload".to_string()),
        (None, None) => Err("one of --file or --payload is required".to_string()),
        (Some(path), None) => std::fs::read_to_string(path)
            .map_err(|e| format!("failed reading payload file '{}': {e}", path.display())),
        (None, Some(payload)) => Ok(payload.to_string()),
    }
}

/// Prints a decoded record as an indented tree, recursing into tagged
/// error objects (`cause`, `originalError`, `errors`).
fn print_record(record: &Map<String, Value>, indent: usize) {
    let class_name = record
        .get("className")
        .and_then(Value::as_str)
        .unwrap_or("Error");
    let message = record.get("message").and_then(Value::as_str).unwrap_or("");
    println!("{:indent$}{class_name}: {message}", "");

    let field_indent = indent + 2;
    for (key, value) in record {
        if matches!(key.as_str(), "className" | "message") {
            continue;
        }
        match value {
            Value::Object(nested) if nested.contains_key("className") => {
                println!("{:field_indent$}{key}:", "");
                print_record(nested, field_indent + 2);
            }
            Value::Array(items) if items.iter().any(is_tagged_record) => {
                println!("{:field_indent$}{key}:", "");
                for item in items {
                    match item {
                        Value::Object(nested) if nested.contains_key("className") => {
                            print_record(nested, field_indent + 2);
                        }
                        other => println!("{:width$}{other}", "", width = field_indent + 2),
                    }
                }
            }
            other => println!("{:field_indent$}{key}: {other}", ""),
        }
    }
}

fn is_tagged_record(value: &Value) -> bool {
    value
        .as_object()
        .is_some_and(|object| object.contains_key("className"))
}
