use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use itemlist::command::{render_props, run_lines, Session};
use itemlist::config::Config;
use itemlist::list::{get_items, ListProps, ListState};
use itemlist::logging::init_tracing;

#[derive(Debug, Parser)]
#[command(
    name = "itemlist",
    version,
    about = "Edit a list of items by dispatching actions to a reducer"
)]
struct Cli {
    /// Config file (default: <config dir>/itemlist/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Read commands from a file instead of stdin
    #[arg(long, value_name = "PATH")]
    script: Option<PathBuf>,

    /// Start with this item instead of the configured ones (repeatable)
    #[arg(long = "item", value_name = "TEXT")]
    items: Vec<String>,

    /// Print the final state as JSON
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if !cli.items.is_empty() {
        config.store.initial_items = cli.items;
        config.validate()?;
    }

    let mut session = Session::from_config(&config);
    let _subscription = session.store().subscribe(|state: &ListState| {
        if state.has_error() {
            tracing::info!(error = %state.error, "List reported an error");
        }
        tracing::debug!(items = get_items(state).len(), "State changed");
    });

    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();

    let summary = match &cli.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open script '{}'", path.display()))?;
            run_lines(&mut session, BufReader::new(file), &mut out, &mut err)?
        }
        None => run_lines(&mut session, io::stdin().lock(), &mut out, &mut err)?,
    };
    tracing::info!(
        executed = summary.executed,
        rejected = summary.rejected,
        "Input finished"
    );

    let state = session.store().get_state();
    if cli.json {
        serde_json::to_writer_pretty(&mut out, &state)?;
        writeln!(out)?;
    } else {
        write!(out, "{}", render_props(&ListProps::from_state(&state)))?;
    }
    out.flush()?;
    Ok(())
}
