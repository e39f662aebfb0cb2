use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use copilot::roster::{self, OPERATORS};
use copilot::{DocumentError, Level, StageIndex};
use serde_json::{Value, json};
use tracing_subscriber::EnvFilter;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    Read { path: String, source: io::Error },
    #[error(transparent)]
    Document(#[from] DocumentError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("level list must be an array or an object with a `data` array")]
    InvalidLevels,
    #[error("unknown profession `{0}`")]
    UnknownProfession(String),
    #[error("operation failed validation:\n  - {}", .0.join("\n  - "))]
    Invalid(Vec<String>),
}

#[derive(Parser, Debug)]
#[command(name = "copilot-cli", about = "MAA copilot operation document tools")]
struct Cli {
    /// Print compact instead of pretty JSON.
    #[arg(long, global = true, default_value_t = false)]
    compact: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert an MAA document into the editable shape.
    Import(InputArgs),
    /// Convert a document into a patched MAA document.
    Export(InputArgs),
    /// Back-fill `doc.details` on an MAA document.
    Patch(InputArgs),
    /// Validate that a document names a stage and carries an action list.
    Check(InputArgs),
    Stages(StagesCommand),
    /// List known operators.
    Roster {
        /// Only list operators of this profession id (e.g. `caster`).
        #[arg(long)]
        prof: Option<String>,
    },
}

#[derive(Args, Debug)]
struct InputArgs {
    #[arg(default_value = "-", help = "Input file path, or - for stdin")]
    input: String,
}

#[derive(Args, Debug)]
struct StagesCommand {
    #[command(subcommand)]
    command: StagesSubcommand,
}

#[derive(Subcommand, Debug)]
enum StagesSubcommand {
    /// Fuzzy-search a level list; an empty query lists every level.
    Search {
        query: Option<String>,

        #[arg(long, env = "COPILOT_LEVELS_FILE", help = "Level list JSON file, or - for stdin")]
        levels: String,

        #[arg(long, default_value_t = copilot::stage::DEFAULT_THRESHOLD)]
        threshold: f64,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let output = match cli.command {
        Command::Import(args) => import_document(&read_input(&args.input)?)?,
        Command::Export(args) => export_document(&read_input(&args.input)?)?,
        Command::Patch(args) => patch_document(&read_input(&args.input)?)?,
        Command::Check(args) => {
            check_document(&read_input(&args.input)?)?;
            json!({ "ok": true })
        }
        Command::Stages(stages) => match stages.command {
            StagesSubcommand::Search {
                query,
                levels,
                threshold,
            } => search_levels(&read_input(&levels)?, query.as_deref().unwrap_or_default(), threshold)?,
        },
        Command::Roster { prof } => roster_listing(prof.as_deref())?,
    };
    print_json(&output, cli.compact)
}

fn read_input(path: &str) -> Result<String, CliError> {
    let result = if path == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text).map(|_| text)
    } else {
        fs::read_to_string(path)
    };
    result.map_err(|source| CliError::Read {
        path: path.to_owned(),
        source,
    })
}

fn print_json(value: &Value, compact: bool) -> Result<(), CliError> {
    let rendered = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{rendered}");
    Ok(())
}

fn import_document(text: &str) -> Result<Value, CliError> {
    let operation = copilot::import_operation_json(text)?;
    Ok(serde_json::to_value(operation)?)
}

fn export_document(text: &str) -> Result<Value, CliError> {
    let operation = copilot::import_operation_json(text)?;
    Ok(copilot::export_operation_json(&operation)?)
}

fn patch_document(text: &str) -> Result<Value, CliError> {
    let mut value: Value = serde_json::from_str(text)?;
    copilot::patch_operation(&mut value);
    Ok(value)
}

/// Collect every validation problem rather than stopping at the first.
fn check_document(text: &str) -> Result<(), CliError> {
    let value: Value = serde_json::from_str(text)?;
    let Some(map) = value.as_object() else {
        return Err(CliError::Invalid(vec!["document root must be an object".to_owned()]));
    };

    let mut problems = Vec::new();
    let stage_name = map.get("stage_name").or_else(|| map.get("stageName"));
    if !stage_name.and_then(Value::as_str).is_some_and(|s| !s.trim().is_empty()) {
        problems.push("missing stage_name".to_owned());
    }
    if !map.get("actions").is_some_and(Value::is_array) {
        problems.push("missing actions list".to_owned());
    }
    if let Err(err) = copilot::import_operation_json(text) {
        problems.push(err.to_string());
    }

    if problems.is_empty() {
        tracing::debug!("document passed validation");
        Ok(())
    } else {
        Err(CliError::Invalid(problems))
    }
}

fn parse_levels(text: &str) -> Result<Vec<Level>, CliError> {
    let value: Value = serde_json::from_str(text)?;
    let list = match value {
        Value::Array(_) => value,
        Value::Object(mut map) => map.remove("data").ok_or(CliError::InvalidLevels)?,
        _ => return Err(CliError::InvalidLevels),
    };
    if !list.is_array() {
        return Err(CliError::InvalidLevels);
    }
    Ok(serde_json::from_value(list)?)
}

fn search_levels(levels_text: &str, query: &str, threshold: f64) -> Result<Value, CliError> {
    let index = StageIndex::new(parse_levels(levels_text)?).with_threshold(threshold);
    tracing::debug!(levels = index.levels().len(), query, "searching levels");
    let hits: Vec<Value> = index
        .search(query)
        .into_iter()
        .map(|level| {
            json!({
                "level_id": level.level_id,
                "label": level.display_label(),
                "cat_two": level.cat_two,
            })
        })
        .collect();
    Ok(Value::Array(hits))
}

fn roster_listing(prof: Option<&str>) -> Result<Value, CliError> {
    let wanted = prof
        .map(|id| roster::find_profession(id).ok_or_else(|| CliError::UnknownProfession(id.to_owned())))
        .transpose()?;
    let entries: Vec<Value> = OPERATORS
        .iter()
        .filter_map(|info| {
            let profession = roster::profession_of(info.sub_prof);
            if wanted.is_some_and(|w| profession.is_none_or(|p| p.id != w.id)) {
                return None;
            }
            Some(json!({
                "name": info.name,
                "profession": profession.map(|p| p.id),
                "sub_profession": info.sub_prof,
            }))
        })
        .collect();
    Ok(Value::Array(entries))
}
