//! # county-roster CLI
//!
//! Prints the county roster of one route from a CSV segment table, or the
//! route taxonomy of every route in the table.

mod report;

use clap::Parser;
use county_roster::{
    Collapse, ColumnMap, Direction, Field, RosterFacts, RosterOptions, SegmentRecord, TriplistRow, build_roster_verbose,
    cumulative_miles, group_known_routes, load_schema, load_segments, summarize,
};
use log::{error, info};
use serde::Serialize;
use std::io::{self, IsTerminal};
use std::path::PathBuf;

/// Command-line interface for county-roster
#[derive(Parser)]
#[command(name = "county-roster")]
#[command(about = "Derive the ordered county roster of a highway route")]
#[command(long_about = "Derive the ordered county roster of a highway route:
  county-roster segments.csv --route I.40             # Counties of I-40, west to east
  county-roster segments.csv --route I.40 --reverse   # Same route, opposite direction
  county-roster segments.csv --route US.11 --touch --lump
  county-roster segments.csv --groups                 # Route taxonomy of the table")]
#[command(version)]
struct Cli {
    /// CSV segment table with a header row
    csv: PathBuf,

    /// Route identifier to build, e.g. "I.40"
    #[arg(short, long, required_unless_present = "groups")]
    route: Option<String>,

    /// Walk the route in descending order
    #[arg(long)]
    reverse: bool,

    /// Merge reentries of the same county
    #[arg(long)]
    touch: bool,

    /// Merge dependent settlements into their anchoring county
    #[arg(long)]
    lump: bool,

    /// TOML schema mapping for non-standard column names
    #[arg(long)]
    schema: Option<PathBuf>,

    /// Print the route taxonomy instead of a roster
    #[arg(long, conflicts_with = "route")]
    groups: bool,

    /// Print the roster and facts as JSON
    #[arg(long)]
    json: bool,

    /// Force colored output
    #[arg(long, conflicts_with = "no_color")]
    color: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Print the per-stage trace
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    route: &'a str,
    reverse: bool,
    roster: &'a [TriplistRow],
    cumulative_miles: Vec<f64>,
    facts: &'a RosterFacts,
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_default_env().target(env_logger::Target::Stderr).init();

    std::process::exit(run(&cli));
}

fn run(cli: &Cli) -> i32 {
    let rows = match load_segments(&cli.csv) {
        Ok(rows) => rows,
        Err(e) => {
            error!("{e}");
            return 1;
        }
    };
    info!("loaded {} segments from {}", rows.len(), cli.csv.display());

    let columns = match resolve_columns(cli, &rows) {
        Ok(columns) => columns,
        Err(e) => {
            error!("{e}");
            return 1;
        }
    };
    let color = use_color(cli);

    if cli.groups {
        let route_column = columns.get(Field::Route);
        let routes: Vec<String> = rows.iter().map(|row| row.text(route_column)).collect();
        let grouping = group_known_routes(routes.iter().map(String::as_str));

        if cli.json {
            return print_json(&grouping);
        }
        report::print_groups(&grouping, color);
        return 0;
    }

    let Some(route) = cli.route.as_deref() else {
        error!("--route is required unless --groups is given");
        return 2;
    };

    let mut collapse = Collapse::empty();
    collapse.set(Collapse::TOUCH, cli.touch);
    collapse.set(Collapse::LUMP, cli.lump);
    let direction = if cli.reverse { Direction::Reverse } else { Direction::Forward };
    let options = RosterOptions::new(direction, collapse);

    let run = build_roster_verbose(&rows, &columns, route, &options);
    let Some(facts) = summarize(&run.roster) else {
        error!("route {route} has no segments in {}", cli.csv.display());
        return 2;
    };

    if cli.json {
        return print_json(&JsonReport {
            route,
            reverse: cli.reverse,
            roster: &run.roster,
            cumulative_miles: cumulative_miles(&run.roster),
            facts: &facts,
        });
    }

    report::print_roster(route, &run, &facts, color, cli.verbose);
    0
}

fn resolve_columns(cli: &Cli, rows: &[SegmentRecord]) -> county_roster::Result<ColumnMap> {
    let sample = rows.first().cloned().unwrap_or_default();
    match &cli.schema {
        Some(path) => {
            let mapping = load_schema(path)?;
            Ok(ColumnMap::with_schema(&sample, &mapping))
        }
        None => Ok(ColumnMap::resolve(&sample)),
    }
}

fn use_color(cli: &Cli) -> bool {
    if cli.no_color {
        false
    } else {
        cli.color || io::stdout().is_terminal()
    }
}

fn print_json<T: Serialize>(value: &T) -> i32 {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{json}");
            0
        }
        Err(e) => {
            error!("failed to encode JSON: {e}");
            1
        }
    }
}
