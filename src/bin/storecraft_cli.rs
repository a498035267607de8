//! Storecraft CLI - Bridge interface for the storefront editor
//!
//! Commands: catalog, theme, render, replay
//! Outputs JSON (or the rendered document) to stdout, logs to stderr
//! Returns 1 on input/IO failures, 2 on domain failures

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use storecraft_core::{
    theme, Catalog, Command, EditorSession, PreviewConfig, SectionKind, StudioError,
    StudioResult,
};

#[derive(Parser)]
#[command(name = "storecraft-cli", version)]
#[command(about = "Storecraft CLI - storefront section composer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log debug events to stderr (otherwise RUST_LOG, default warn)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List section types the user can add
    Catalog,

    /// Print the theme derived from a primary color
    Theme {
        #[arg(short, long, default_value = theme::DEFAULT_PRIMARY)]
        color: String,
    },

    /// Render a saved layout to an HTML document
    Render {
        /// Saved layout (JSON array of {id, typeId, enabled, props})
        #[arg(short, long)]
        layout: PathBuf,

        /// Preview config file (storeName, storeKind, primaryColor)
        #[arg(long)]
        config: Option<PathBuf>,

        #[arg(long, env = "STORECRAFT_STORE_NAME")]
        name: Option<String>,

        #[arg(long, env = "STORECRAFT_STORE_KIND")]
        kind: Option<String>,

        #[arg(long, env = "STORECRAFT_PRIMARY_COLOR")]
        color: Option<String>,

        /// Print a data: URL instead of raw HTML
        #[arg(long)]
        data_url: bool,
    },

    /// Apply a command script to a session and print the outcome
    Replay {
        /// JSON array of commands; ids of the form "@N" name the section at index N
        #[arg(short, long)]
        script: PathBuf,

        /// Starting layout (default: empty composition)
        #[arg(short, long)]
        layout: Option<PathBuf>,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReplayOutcome<'a> {
    sections: Vec<storecraft_core::SavedSection>,
    active_id: Option<&'a str>,
    can_undo: bool,
    can_redo: bool,
    fingerprint: String,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn print_json<T: Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => fail(&StudioError::from(e)),
    }
}

fn fail(error: &StudioError) -> ExitCode {
    let output = serde_json::json!({
        "success": false,
        "error": error.to_string(),
    });
    println!("{}", output);
    if error.is_domain() {
        ExitCode::from(2)
    } else {
        ExitCode::FAILURE
    }
}

fn load_session(layout: Option<&Path>) -> StudioResult<EditorSession> {
    match layout {
        Some(path) => EditorSession::load_json(&fs::read_to_string(path)?),
        None => Ok(EditorSession::new()),
    }
}

/// Replace "@N" ids with the id of the section currently at index N.
fn resolve_id(session: &EditorSession, id: String) -> String {
    let resolved = id
        .strip_prefix('@')
        .and_then(|index| index.parse::<usize>().ok())
        .and_then(|index| session.sections().get(index))
        .map(|section| section.id.clone());
    resolved.unwrap_or(id)
}

fn resolve_refs(session: &EditorSession, command: Command) -> Command {
    match command {
        Command::Remove { id } => Command::Remove { id: resolve_id(session, id) },
        Command::Toggle { id } => Command::Toggle { id: resolve_id(session, id) },
        Command::Reorder { id, target_index } => Command::Reorder {
            id: resolve_id(session, id),
            target_index,
        },
        Command::UpdateProps { id, props } => Command::UpdateProps {
            id: resolve_id(session, id),
            props,
        },
        Command::SetProp { id, key, value } => Command::SetProp {
            id: resolve_id(session, id),
            key,
            value,
        },
        Command::SetActive { id } => Command::SetActive {
            id: id.map(|id| resolve_id(session, id)),
        },
        other => other,
    }
}

fn run_render(
    layout: &Path,
    config: Option<&Path>,
    overrides: (Option<String>, Option<String>, Option<String>),
    data_url: bool,
) -> StudioResult<String> {
    let base = match config {
        Some(path) => PreviewConfig::from_file(path)?,
        None => PreviewConfig::default(),
    };
    let (name, kind, color) = overrides;
    let config = base.with_overrides(name, kind, color);
    config.validate()?;

    let mut session = load_session(Some(layout))?.with_config(&config);
    let document = session.preview()?;
    debug!(fingerprint = %document.fingerprint, "document rendered");

    Ok(if data_url {
        document.to_data_url()
    } else {
        document.html.clone()
    })
}

fn run_replay(script: &Path, layout: Option<&Path>) -> StudioResult<ExitCode> {
    let commands: Vec<Command> = serde_json::from_str(&fs::read_to_string(script)?)?;
    let mut session = load_session(layout)?;

    for (step, command) in commands.into_iter().enumerate() {
        let command = resolve_refs(&session, command);
        debug!(step, ?command, "replaying command");
        session.apply(command)?;
    }

    let fingerprint = session.preview()?.fingerprint.clone();
    let outcome = ReplayOutcome {
        sections: session.save(),
        active_id: session.active_id(),
        can_undo: session.can_undo(),
        can_redo: session.can_redo(),
        fingerprint,
    };
    Ok(print_json(&outcome))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Catalog => {
            let catalog = Catalog::builtin();
            let entries: Vec<_> = catalog
                .definitions()
                .into_iter()
                .map(|def| {
                    let schema = catalog
                        .get(&def.type_id)
                        .map(|kind| kind.schema())
                        .unwrap_or_default();
                    serde_json::json!({
                        "typeId": def.type_id,
                        "label": def.label,
                        "icon": def.icon,
                        "description": def.description,
                        "defaultProps": def.default_props,
                        "schema": schema,
                    })
                })
                .collect();
            print_json(&entries)
        }

        Commands::Theme { color } => print_json(&theme::build(&color)),

        Commands::Render {
            layout,
            config,
            name,
            kind,
            color,
            data_url,
        } => match run_render(&layout, config.as_deref(), (name, kind, color), data_url) {
            Ok(output) => {
                println!("{}", output);
                ExitCode::SUCCESS
            }
            Err(e) => fail(&e),
        },

        Commands::Replay { script, layout } => {
            run_replay(&script, layout.as_deref()).unwrap_or_else(|e| fail(&e))
        }
    }
}
