use std::{
    io::{self, IsTerminal, Write},
    time::Instant,
};

use serde::Serialize;
use tracing::{debug, warn};

use crate::{
    core::{
        bounds::{chart_width, terminal_width},
        color::{AnsiCode, DEFAULT_PALETTE, Palette, colorize},
        config::ChartConfig,
        constants::MAX_SERIES,
        data::{DataPoint, Series, SeriesSummary, read_csv_from_path},
        error::GraphError,
        format::today,
        timeframe::Timeframe,
    },
    render::Compositor,
};

use super::parse::{OutputFormat, PlotArgs};

/// One entry of the JSON output.
#[derive(Serialize)]
struct SeriesReport<'a> {
    query: &'a str,
    timeframe: &'static str,
    geo: &'a str,
    #[serde(flatten)]
    summary: Option<SeriesSummary>,
    series: &'a [DataPoint],
}

pub fn plot(a: PlotArgs) -> Result<(), GraphError> {
    let t_ingest = Instant::now();
    let mut series = read_csv_from_path(&a.file)?;
    debug!(
        series = series.len(),
        points = series.iter().map(Series::len).sum::<usize>(),
        elapsed_us = t_ingest.elapsed().as_micros(),
        "csv ingest"
    );

    cap_series(&mut series);

    if wants_json(a.format, io::stdout().is_terminal()) {
        return write_json(&mut io::stdout().lock(), &series, a.timeframe, &a.geo);
    }

    let palette = if a.colors.is_empty() {
        Palette::default()
    } else {
        Palette::from_names(&a.colors)?
    };
    let width = a.width.unwrap_or_else(|| chart_width(terminal_width()));

    let mut b = ChartConfig::builder(width)
        .height(a.height)
        .timeframe(a.timeframe)
        .geo(&a.geo)
        .palette(palette)
        .styled(!a.no_color);
    if let Some(title) = a.title {
        b = b.title(title);
    }
    let cfg = b.build()?;

    let t_render = Instant::now();
    let frame = Compositor::new(&cfg).compose(&series)?;
    debug!(
        elapsed_us = t_render.elapsed().as_micros(),
        rows = frame.body.len(),
        "render"
    );
    frame.write_to(&mut io::stdout().lock())?;
    Ok(())
}

/// Keep at most `MAX_SERIES` columns, warning about the rest.
fn cap_series(series: &mut Vec<Series>) {
    if series.len() > MAX_SERIES {
        warn!(
            got = series.len(),
            kept = MAX_SERIES,
            "too many series, using the first {MAX_SERIES}"
        );
        series.truncate(MAX_SERIES);
    }
}

/// `auto` picks JSON whenever stdout is not a terminal.
fn wants_json(format: OutputFormat, stdout_is_tty: bool) -> bool {
    match format {
        OutputFormat::Json => true,
        OutputFormat::Chart => false,
        OutputFormat::Auto => !stdout_is_tty,
    }
}

fn write_json<W: Write>(
    out: &mut W,
    series: &[Series],
    timeframe: Timeframe,
    geo: &str,
) -> Result<(), GraphError> {
    let reports: Vec<SeriesReport<'_>> = series
        .iter()
        .map(|s| SeriesReport {
            query: &s.label,
            timeframe: timeframe.tag(),
            geo,
            summary: s.summary(),
            series: &s.points,
        })
        .collect();

    serde_json::to_writer_pretty(&mut *out, &reports)?;
    writeln!(out)?;
    Ok(())
}

/// Pretty-print available color names + an example hex code.
pub fn colors() {
    println!("\nPossible colors:");
    println!("{}", colorize(&AnsiCode::black(), "black"));
    println!("{}", colorize(&AnsiCode::red(), "red"));
    println!("{}", colorize(&AnsiCode::green(), "green"));
    println!("{}", colorize(&AnsiCode::yellow(), "yellow"));
    println!("{}", colorize(&AnsiCode::blue(), "blue"));
    println!("{}", colorize(&AnsiCode::magenta(), "magenta"));
    println!("{}", colorize(&AnsiCode::cyan(), "cyan"));
    println!("{}", colorize(&AnsiCode::white(), "white"));
    println!(
        "{}  (#505050 or any other #RRGGBB)",
        colorize(&AnsiCode::rgb(0x50, 0x50, 0x50), "#505050")
    );
    println!("\nDefault series order: {}\n", DEFAULT_PALETTE.join(", "));
}

/// Print handy invocations for new users.
pub fn examples() {
    let bin = "trends";
    let stamp = today().format("%Y-%m-%d");
    println!(
        "
Example invocations
-------------------
• Single query      : {bin} plot rust.csv
• Compare queries   : {bin} plot rust_vs_go.csv --timeframe 1y
• Worldwide         : {bin} plot rust.csv --geo ''
• Custom colors     : {bin} plot rust_vs_go.csv --color magenta,#6048c1
• Fixed size        : {bin} plot rust.csv --width 80 --height 12
• JSON summary      : {bin} plot rust.csv --format json
• From stdin        : printf 'date,rust\\n{stamp},42\\n' | {bin} plot - --format chart
• Debug logging     : {bin} --debug plot rust.csv
"
    );
}
