//! fsmgen CLI - FSM boilerplate generation and diagram recovery.
//!
//! `fsmgen door.fsm` renders the C template set for the machine described
//! in `door.fsm`. `fsmgen` with no argument sweeps the parent directory
//! tree for generated state tables and writes one Mermaid diagram pair per
//! table under `docs/`.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use fsmgen::error::FsmError;
use fsmgen::render::template::{self, TemplateSet};
use fsmgen::{descriptor, fsio, scan};

/// Transition-table compiler for embedded-style state machines.
///
/// Forward direction: give a descriptor file (one `state,event,callback`
/// transition per line) and get the four C boilerplate files of that
/// machine, named after the descriptor's stem.
///
/// Reverse direction: run without arguments inside a project to sweep the
/// parent tree for `static fsm_state_t` tables and render a Mermaid
/// diagram (.txt) and static viewer (.html) per table into docs/.
#[derive(Parser)]
#[command(name = "fsmgen", version, about = "FSM boilerplate and diagram generator")]
struct Cli {
    /// Descriptor file; omit to scan the parent tree for state tables
    descriptor: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// FSM name: descriptor file-name stem before the first `.`.
fn fsm_name(path: &Path) -> Result<String> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .with_context(|| format!("descriptor path has no file name: {}", path.display()))?;
    let stem = file_name.split('.').next().unwrap_or(file_name);
    anyhow::ensure!(!stem.is_empty(), "descriptor name has an empty stem: {file_name}");
    Ok(stem.to_string())
}

/// Forward pipeline: descriptor -> transition table -> rendered templates.
fn run_forward(path: &Path) -> Result<()> {
    if !path.is_file() {
        return Err(FsmError::MissingInputFile(path.to_path_buf()).into());
    }
    let name = fsm_name(path)?;
    let contents = fsio::read_to_string(path)?;
    let table = descriptor::parse(&contents, &name, path)?;

    let base = path.parent().unwrap_or_else(|| Path::new("."));
    let override_dir = base.join("templates");
    let templates = if override_dir.is_dir() {
        TemplateSet::load(&override_dir)?
    } else {
        TemplateSet::embedded()
    };

    let out_dir = base.join(&name);
    template::generate_sources(&table, &templates, &out_dir)?;

    println!("Generated {name} FSM machine in {}", out_dir.display());
    Ok(())
}

/// Reverse pipeline: sweep the parent tree, render diagrams into docs/.
fn run_reverse() -> Result<()> {
    let cwd = env::current_dir().context("cannot determine current directory")?;
    let root = cwd.parent().map(Path::to_path_buf).unwrap_or(cwd);
    let docs = root.join("docs");

    let count = scan::scan_tree(&root, &docs)?;
    println!("Generated {count} FSM machines in {}", docs.display());
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match cli.descriptor {
        Some(path) => run_forward(&path),
        None => run_reverse(),
    }
}
