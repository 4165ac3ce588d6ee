use clap::{Parser, Subcommand, ValueEnum};

use crate::core::{constants::CHART_HEIGHT, timeframe::Timeframe};

/// Top-level CLI structure.
#[derive(Parser)]
#[command(
    name = "trends",
    about = "Interest-over-time charts in the terminal using braille"
)]
pub struct Cli {
    /// Emit debug logs on stderr (overridden by `RUST_LOG`)
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Chart one or more series from a CSV file
    Plot(PlotArgs),
    /// Show available color names / hex syntax
    Colors,
    /// Print example invocations
    Examples,
}

/// How `plot` writes its result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Chart on a terminal, JSON when piped
    #[default]
    Auto,
    Chart,
    Json,
}

/// `trends plot …`
#[derive(Parser, Debug)]
pub struct PlotArgs {
    /// CSV path (use `-` for stdin); header `date,<query>[,<query>…]`
    #[arg(value_name = "FILE", default_value = "-")]
    pub file: String,

    /// Time window the data covers
    #[arg(short, long, value_enum, default_value_t = Timeframe::FiveYears)]
    pub timeframe: Timeframe,

    /// Country code, e.g. US, GB (empty = worldwide)
    #[arg(short, long, default_value = "US")]
    pub geo: String,

    /// Override the generated title
    #[arg(long)]
    pub title: Option<String>,

    /// Series colors, comma separated (name or `#RRGGBB`)
    #[arg(long = "color", value_delimiter = ',')]
    pub colors: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Auto)]
    pub format: OutputFormat,

    /// Chart body width in characters (default: fit the terminal)
    #[arg(long)]
    pub width: Option<usize>,

    /// Chart body height in characters
    #[arg(long, default_value_t = CHART_HEIGHT)]
    pub height: usize,

    /// Plain text, no ANSI styling
    #[arg(long)]
    pub no_color: bool,
}
