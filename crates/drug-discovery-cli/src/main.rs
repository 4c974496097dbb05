//! CLI for the drug discovery molecule utilities.
//!
//! Subcommands:
//!  - `check`     : validate SMILES strings and estimate their molecular weight.
//!  - `component` : print a boilerplate Vue component.
//!
//! Usage examples:
//!  drug-discovery check "CC(=O)O" "C[N+](C)(C)C"
//!  cat molecules.txt | drug-discovery check --json
//!  drug-discovery component --name TaskTable --kind data_table

use std::io::{self, BufRead};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use drug_discovery::{generate_component, ComponentKind, MoleculeSummary};

/// CLI entrypoint.
#[derive(Parser, Debug)]
#[command(
    name = "drug-discovery",
    about = "Drug discovery CLI: SMILES checks and component scaffolding",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate SMILES strings and estimate molecular weight.
    Check(CheckArgs),

    /// Print a Vue 3 component scaffold.
    Component(ComponentArgs),
}

/// Arguments for the `check` subcommand.
#[derive(Args, Debug)]
struct CheckArgs {
    /// SMILES strings to check. Reads one per line from stdin when omitted.
    #[arg(value_name = "SMILES")]
    smiles: Vec<String>,

    /// Output results as a JSON array.
    #[arg(long)]
    json: bool,

    /// Exit with a failure status if any input is structurally invalid.
    #[arg(long)]
    strict: bool,
}

/// Arguments for the `component` subcommand.
#[derive(Args, Debug)]
struct ComponentArgs {
    /// Component name; its lowercase form becomes the root CSS class.
    #[arg(long)]
    name: String,

    /// data_table | molecule_viewer | task_monitor (anything else: basic).
    #[arg(long, default_value = "basic")]
    kind: String,

    /// Feature to note in the generated script block. Repeatable.
    #[arg(long = "feature", value_name = "NAME")]
    features: Vec<String>,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check(args) => run_check(args),
        Commands::Component(args) => run_component(args),
    }
}

/// Run the `check` subcommand.
fn run_check(args: CheckArgs) -> Result<ExitCode> {
    let inputs = if args.smiles.is_empty() {
        let stdin = io::stdin();
        read_inputs(stdin.lock()).context("reading SMILES from stdin")?
    } else {
        args.smiles
    };

    let summaries: Vec<MoleculeSummary> = inputs
        .iter()
        .map(|s| MoleculeSummary::analyze(s))
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
    } else {
        for summary in &summaries {
            println!("{}", summary.to_line());
        }
    }

    let invalid = summaries.iter().filter(|s| !s.valid).count();
    if invalid > 0 {
        eprintln!("{} of {} input(s) invalid", invalid, summaries.len());
    }
    if should_fail(args.strict, invalid) {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// Run the `component` subcommand.
fn run_component(args: ComponentArgs) -> Result<ExitCode> {
    let kind = ComponentKind::parse(&args.kind);
    println!("{}", generate_component(&args.name, kind, &args.features));
    Ok(ExitCode::SUCCESS)
}

/// Every non-empty line, trimmed and otherwise taken as-is. `#` is a bond
/// symbol, so there is no comment syntax.
fn read_inputs<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut out = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            out.push(trimmed.to_string());
        }
    }
    Ok(out)
}

fn should_fail(strict: bool, invalid: usize) -> bool {
    strict && invalid > 0
}
