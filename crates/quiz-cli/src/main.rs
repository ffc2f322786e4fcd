use std::error::Error;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args as ClapArgs, Parser, Subcommand};
use quiz_core::entropy_seed;
use quiz_draw::{CoveragePolicy, DrawConfig, DrawSummary};

mod history;
mod rules;

#[derive(Parser, Debug)]
#[command(name = "quiz-cli", about = "Regulatory quiz batch drawing CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Draw a quiz batch against the exclusion history.
    Draw(DrawArgs),
    /// Print the built-in rule table.
    Rules,
}

#[derive(ClapArgs, Debug)]
struct DrawArgs {
    /// Master seed; omitted means a fresh entropy seed.
    #[arg(long)]
    seed: Option<u64>,
    /// Optional YAML draw configuration.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Optional YAML history file replacing the built-in quiz lists.
    #[arg(long)]
    history: Option<PathBuf>,
    /// Draw with full coverage of all 19 chapters instead of the
    /// restricted 17-chapter policy.
    #[arg(long)]
    full: bool,
    /// Write the draw summary as pretty JSON to this path.
    #[arg(long)]
    summary_json: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    match cli.command {
        Command::Draw(args) => run_draw(args),
        Command::Rules => print_rules(),
    }
}

fn run_draw(args: DrawArgs) -> Result<(), Box<dyn Error>> {
    let map = rules::rule_table()?;
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => rules::restricted_config(),
    };
    if args.full {
        config.policy = CoveragePolicy::FullCoverage { extras: 1 };
        config.batch = map.len() + 1;
    }
    let seed = args
        .seed
        .or(config.seed_policy.master_seed)
        .unwrap_or_else(entropy_seed);
    let excluded = match &args.history {
        Some(path) => history::load(path)?,
        None => history::built_in(),
    };

    let summary = quiz_draw::run(&config, seed, &map, &excluded)?;

    for pick in &summary.picks {
        println!("Regola {}: {}", map.label(pick.partition), pick.id);
    }
    if let Some(flat) = render_flat_ids(&summary) {
        println!("{flat}");
    }
    if let Some(path) = &args.summary_json {
        write_json(path, &summary)?;
    }
    Ok(())
}

fn print_rules() -> Result<(), Box<dyn Error>> {
    let map = rules::rule_table()?;
    for partition in map.partitions() {
        let span = map.span(partition)?;
        println!(
            "Regola {}: {}-{}",
            map.label(partition),
            span.first,
            span.last
        );
    }
    Ok(())
}

fn load_config(path: &Path) -> Result<DrawConfig, Box<dyn Error>> {
    let contents = fs::read_to_string(path)?;
    if contents.trim().is_empty() {
        return Ok(DrawConfig::default());
    }
    let config: DrawConfig = serde_yaml::from_str(&contents)?;
    Ok(config)
}

/// Renders the flat bracketed ID list in display order. Best-effort: a
/// formatting failure yields `None` instead of aborting a successful draw.
fn render_flat_ids(summary: &DrawSummary) -> Option<String> {
    let mut out = String::from("[");
    for (idx, pick) in summary.picks.iter().enumerate() {
        if idx > 0 {
            write!(out, ", ").ok()?;
        }
        write!(out, "{}", pick.id).ok()?;
    }
    out.push(']');
    Some(out)
}

fn write_json<P: AsRef<Path>, T: serde::Serialize>(
    path: P,
    value: &T,
) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.as_ref().parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}
