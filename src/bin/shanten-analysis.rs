//! Prints the shanten number and every nearest complete hand of a hand.
//!
//! The hand comes from the first argument or, when absent, from stdin:
//!
//! ```text
//! shanten-analysis "1m 1m 1m 1m 2m 3m 4m 4m 4m 4m 1p 1p 1p 1p"
//! echo 123m456p789s11z22z | shanten-analysis --json
//! ```

use std::io::{self, BufRead, BufWriter, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use shanten_engine::{
    analyze_shanten_with, counts_to_string, parse_hand, ShantenAnalysis, ShantenOptions,
    TileCounts, MAX_SHANTEN_NUMBER,
};

#[derive(Debug, Parser)]
#[command(name = "shanten-analysis")]
#[command(about = "Shanten number and nearest winning hands of a concealed hand")]
struct Args {
    /// Tiles, e.g. "1m 2m 3m E E" or "123m11z"
    hand: Option<String>,

    /// Extra shanten tolerated when listing goals
    #[arg(long, default_value_t = 0)]
    slack: i32,

    /// Highest shanten to search for
    #[arg(long, default_value_t = MAX_SHANTEN_NUMBER)]
    bound: i32,

    /// Print the analysis as JSON
    #[arg(long)]
    json: bool,

    /// Log level used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn init_tracing(level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn read_hand(args: &Args) -> Result<String> {
    if let Some(hand) = &args.hand {
        return Ok(hand.clone());
    }
    eprint!("Enter tiles (e.g., '1m 1m 1m 1m 2m 3m 4m 4m 4m 4m 1p 1p 1p 1p'): ");
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read hand from stdin")?;
    Ok(line)
}

fn format_vector(v: &TileCounts) -> String {
    let items: Vec<String> = v.iter().map(|c| c.to_string()).collect();
    format!("[{}]", items.join(" "))
}

fn print_analysis(
    w: &mut impl Write,
    hand: &TileCounts,
    analysis: &ShantenAnalysis,
) -> io::Result<()> {
    writeln!(w, "hand: {}", counts_to_string(hand))?;
    writeln!(w, "shanten number: {}", analysis.shanten)?;
    writeln!(w, "number of nearest winning hands: {}", analysis.goals.len())?;
    writeln!(w, "nearest winning hands: [")?;
    for goal in &analysis.goals {
        writeln!(w, "  [")?;
        writeln!(w, "    shanten number: {},", goal.shanten)?;
        writeln!(w, "    blocks: [")?;
        for block in &goal.blocks {
            writeln!(w, "      {},", block)?;
        }
        writeln!(w, "    ],")?;
        writeln!(w, "    winning hand tiles count: {},", format_vector(&goal.count_vector))?;
        writeln!(w, "    necessary tiles count:    {},", format_vector(&goal.required_vector))?;
        writeln!(w, "    unnecessary tiles count:  {},", format_vector(&goal.throwable_vector))?;
        writeln!(w, "  ],")?;
    }
    writeln!(w, "]")
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level);

    let text = read_hand(&args)?;
    let hand =
        parse_hand(&text).with_context(|| format!("failed to parse hand {:?}", text.trim()))?;
    let options = ShantenOptions::default()
        .with_slack(args.slack)
        .with_bound(args.bound);
    debug!(?options, "running analysis");

    let analysis = analyze_shanten_with(&hand, &options)?;

    let stdout = io::stdout();
    let mut w = BufWriter::new(stdout.lock());
    if args.json {
        serde_json::to_writer_pretty(&mut w, &analysis)?;
        writeln!(w)?;
    } else {
        print_analysis(&mut w, &hand, &analysis)?;
    }
    w.flush()?;
    Ok(())
}
