// File: crates/demo/src/main.rs
// Summary: Demo loads line series from CSV and prints the derived chart layout (domain, ticks, spacing, positions).

use anyhow::{Context, Result};
use chart_maths::{ContainerSize, DataValue, LayoutOptions, LineChartLayout, Series, DEFAULT_GRID_LINES, MAX_GRID_LINES};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "chart-maths-demo")]
#[command(author, version, about = "Print the layout values of a line chart built from a CSV file")]
struct Cli {
    /// CSV file with a header row; one column per series, one row per category
    path: PathBuf,

    /// Drawing surface width in pixels
    #[arg(long, default_value_t = 1024.0)]
    width: f64,

    /// Drawing surface height in pixels
    #[arg(long, default_value_t = 640.0)]
    height: f64,

    /// Number of horizontal gridlines
    #[arg(
        long,
        default_value_t = DEFAULT_GRID_LINES,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..=MAX_GRID_LINES as u64)
    )]
    grid_lines: usize,

    /// Clamp the domain at 0 (area charts)
    #[arg(long)]
    no_negative: bool,

    /// Increase log verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = match cli.verbose {
        0 => "warn",
        1 => "chart_maths=debug,chart_maths_demo=debug",
        _ => "chart_maths=trace,chart_maths_demo=trace",
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let series = load_series_csv(&cli.path)
        .with_context(|| format!("failed to load CSV '{}'", cli.path.display()))?;
    info!(series = series.len(), "loaded series");
    if series.is_empty() {
        anyhow::bail!("no series loaded, check the header row.");
    }

    let container = ContainerSize::new(cli.width, cli.height);
    let opts = LayoutOptions { grid_lines: cli.grid_lines, accept_negative_values: !cli.no_negative };
    let layout = LineChartLayout::compute(&series, &container, &opts);

    println!("Using input file: {}", cli.path.display());
    println!(
        "Domain: [{:.4}, {:.4}] across {} categories",
        layout.min_max.min_value, layout.min_max.max_value, layout.series_length
    );
    println!("Axis labels: {}", format_values(&layout.axis_labels));
    println!("Side spacing: {}px", layout.side_spacing);
    println!("Category width: {:.2}px", layout.category_width(&container));
    for (s, pct) in series.iter().zip(&layout.percentages) {
        let cells = pct
            .iter()
            .map(|p| p.map_or_else(|| "-".to_string(), |v| format!("{:.1}%", v * 100.0)))
            .collect::<Vec<_>>()
            .join(", ");
        println!("  {}: {}", s.label, cells);
    }

    Ok(())
}

/// Load one series per CSV column. Cells that are not finite numbers become gaps.
fn load_series_csv(path: &Path) -> Result<Vec<Series>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let labels = rdr.headers()?.iter().map(|h| h.trim().to_string()).collect::<Vec<_>>();
    debug!(?labels, "headers");

    let mut columns: Vec<Vec<DataValue>> = vec![Vec::new(); labels.len()];
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec.with_context(|| format!("reading row {}", row + 1))?;
        if rec.len() > labels.len() {
            warn!(row = row + 1, cells = rec.len(), "extra cells ignored");
        }
        for (i, column) in columns.iter_mut().enumerate() {
            column.push(rec.get(i).map_or(DataValue::Missing, DataValue::parse));
        }
    }

    Ok(labels
        .into_iter()
        .zip(columns)
        .map(|(label, mut values)| {
            // trailing gaps do not count as categories
            while values.last().is_some_and(|v| v.as_plottable().is_none()) {
                values.pop();
            }
            Series::from_values(label, values)
        })
        .collect())
}

fn format_values(values: &[f64]) -> String {
    values.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(", ")
}
