//! Command implementations. Each command opens the store file, runs one
//! operation and prints its result as JSON.

use dotstore::{Store, doc::Value, provider::JsonFile};

use crate::cli::{AllArgs, Cli, Commands, PathArgs, SetArgs};
use crate::output::{OutputFormat, print_json};

type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Dispatch a parsed command line.
pub fn run(cli: &Cli) -> CommandResult {
    let provider = JsonFile::new(&cli.file).pretty(cli.pretty);
    tracing::debug!(file = %cli.file.display(), "Opening store");
    let mut store = Store::open(provider);
    let format = OutputFormat::from(cli.pretty);

    match &cli.command {
        Commands::Get(args) => get(&store, args, format),
        Commands::Set(args) => set(&mut store, args, format),
        Commands::Del(args) => del(&mut store, args, format),
        Commands::All(args) => all(&store, args, format),
        Commands::Type(args) => type_of(&store, args, format),
    }
}

/// Parse a command-line value as JSON, falling back to a plain string.
pub fn parse_value(raw: &str) -> Value {
    serde_json::from_str::<Value>(raw).unwrap_or_else(|_| Value::from(raw))
}

/// Run the get command. Exits with status 1 when nothing is stored at the path.
fn get(store: &Store, args: &PathArgs, format: OutputFormat) -> CommandResult {
    match store.get(&args.path)? {
        Some(value) => print_json(&value, format)?,
        None => {
            eprintln!("no value at '{}'", args.path);
            std::process::exit(1);
        }
    }
    Ok(())
}

/// Run the set command
fn set(store: &mut Store, args: &SetArgs, format: OutputFormat) -> CommandResult {
    let value = parse_value(&args.value);
    store.set(&args.path, value.clone())?;
    tracing::info!(path = %args.path, "Value stored");
    print_json(&value, format)?;
    Ok(())
}

/// Run the del command. Prints whether anything was removed.
fn del(store: &mut Store, args: &PathArgs, format: OutputFormat) -> CommandResult {
    let removed = store.del(&args.path)?;
    print_json(&removed, format)?;
    Ok(())
}

/// Run the all command
fn all(store: &Store, args: &AllArgs, format: OutputFormat) -> CommandResult {
    let entries = store.all(args.limit)?;
    print_json(&entries, format)?;
    Ok(())
}

/// Run the type command
fn type_of(store: &Store, args: &PathArgs, format: OutputFormat) -> CommandResult {
    let tag = store.type_of(&args.path)?;
    print_json(tag.as_str(), format)?;
    Ok(())
}
