//! AffordLab CLI — dataset inspection and navigation commands.
//!
//! Commands:
//! - `points` — print the dataset table, optionally as JSON
//! - `segments` — print the deposit and likelihood band segments
//! - `summary` — print the borrowing headline and one point's card
//! - `geometry` — print where the points land for a given plot size
//! - `walk` — step the selection cursor and print each change

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use affordlab_core::dataset::Dataset;
use affordlab_core::format::{format_gbp, format_gbp_compact};
use affordlab_core::navigator::Navigator;
use affordlab_core::point::{DataPoint, LikelihoodBand};
use affordlab_core::scale::ChartProjection;
use affordlab_core::segment::{band_segment, deposit_segment, interior_points};
use affordlab_core::summary;

#[derive(Parser)]
#[command(
    name = "affordlab",
    about = "AffordLab CLI — mortgage affordability curve explorer"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the dataset points as a table or as JSON.
    Points {
        /// Path to a dataset JSON file. Defaults to the built-in sample.
        #[arg(long)]
        data: Option<PathBuf>,

        /// Emit JSON instead of the table.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print the deposit and likelihood band segments.
    Segments {
        /// Path to a dataset JSON file. Defaults to the built-in sample.
        #[arg(long)]
        data: Option<PathBuf>,
    },
    /// Print the borrowing headline and one point's summary card.
    Summary {
        /// Path to a dataset JSON file. Defaults to the built-in sample.
        #[arg(long)]
        data: Option<PathBuf>,

        /// Loan amount of the point to summarize. Defaults to the sweet spot.
        #[arg(long)]
        loan: Option<u64>,

        /// Emit JSON instead of the card.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print where the interactive points land for a given plot size.
    Geometry {
        /// Path to a dataset JSON file. Defaults to the built-in sample.
        #[arg(long)]
        data: Option<PathBuf>,

        /// Plot width in cells.
        #[arg(long, default_value_t = 61)]
        width: u16,

        /// Plot height in cells.
        #[arg(long, default_value_t = 21)]
        height: u16,
    },
    /// Step the selection cursor and print each change.
    Walk {
        /// Path to a dataset JSON file. Defaults to the built-in sample.
        #[arg(long)]
        data: Option<PathBuf>,

        /// Number of steps to take.
        #[arg(long, default_value_t = 8)]
        steps: u32,

        /// Start from the deposit instead of the sweet spot.
        #[arg(long, default_value_t = false)]
        from_deposit: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Points { data, json } => run_points(data, json),
        Commands::Segments { data } => run_segments(data),
        Commands::Summary { data, loan, json } => run_summary(data, loan, json),
        Commands::Geometry {
            data,
            width,
            height,
        } => run_geometry(data, width, height),
        Commands::Walk {
            data,
            steps,
            from_deposit,
        } => run_walk(data, steps, from_deposit),
    }
}

fn run_points(data: Option<PathBuf>, json: bool) -> Result<()> {
    let dataset = load_dataset(data.as_deref())?;

    if json {
        println!("{}", serde_json::to_string_pretty(dataset.points())?);
        return Ok(());
    }

    let interactive = dataset.interactive_indices().len();
    println!("Points: {} ({interactive} interactive)", dataset.len());
    println!();
    println!(
        "{:<6} {:<12} {:>8} {:>8}  {}",
        "Index", "Loan", "Lenders", "Rate", "Marker"
    );
    println!("{}", "-".repeat(48));

    for (index, point) in dataset.points().iter().enumerate() {
        let rate = point
            .interest_rate
            .map_or_else(|| "-".to_string(), |rate| format!("{rate}%"));
        let marker = if point.deposit {
            "deposit".to_string()
        } else if let Some(band) = point.likelihood {
            band.to_string()
        } else {
            "-".to_string()
        };
        println!(
            "{:<6} {:<12} {:>8} {:>8}  {}",
            index,
            format_gbp(point.loan),
            point.lenders,
            rate,
            marker
        );
    }

    Ok(())
}

fn run_segments(data: Option<PathBuf>) -> Result<()> {
    let dataset = load_dataset(data.as_deref())?;

    let deposit = deposit_segment(&dataset)?;
    print_segment("deposit", deposit);

    for band in LikelihoodBand::ALL {
        let segment = band_segment(&dataset, band)?;
        print_segment(band.label(), segment);
    }

    let interior = interior_points(&dataset);
    println!();
    println!(
        "Interior points: {} of {} (the final point only closes the curve)",
        interior.len(),
        dataset.len()
    );

    Ok(())
}

fn print_segment(label: &str, segment: &[DataPoint]) {
    let first = segment.first().map_or(0, |point| point.loan);
    let last = segment.last().map_or(0, |point| point.loan);
    println!(
        "{:<10} {} to {} ({} points)",
        label,
        format_gbp(first),
        format_gbp(last),
        segment.len()
    );
}

fn run_summary(data: Option<PathBuf>, loan: Option<u64>, json: bool) -> Result<()> {
    let dataset = load_dataset(data.as_deref())?;

    let index = match loan {
        Some(loan) => match dataset.index_of_loan(loan) {
            Some(index) => index,
            None => bail!("no dataset point with loan {}", format_gbp(loan)),
        },
        None => match dataset.markers().high {
            Some(index) => index,
            None => bail!("dataset has no high likelihood marker"),
        },
    };

    let headline = summary::headline(&dataset)?;
    let view = summary::project(&dataset, index)?;

    if json {
        let payload = serde_json::json!({
            "headline": headline,
            "card": view,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    let rate = if view.interest_rate == "-" {
        "-".to_string()
    } else {
        format!("{}%", view.interest_rate)
    };

    println!("=== Affordability Summary ===");
    println!("Comfortable:    {}", format_gbp(headline.comfortable));
    println!("Maximum:        {}", format_gbp(headline.maximum));
    println!();
    println!(
        "Selected:       {} ({} likelihood)",
        format_gbp(view.loan),
        view.band
    );
    println!("Borrowing:      {}", view.borrowing);
    println!("Lenders:        {}", view.lenders);
    println!("Rate:           {rate}");
    println!("Avg payment:    {}", view.average_payment);

    Ok(())
}

fn run_geometry(data: Option<PathBuf>, width: u16, height: u16) -> Result<()> {
    let dataset = load_dataset(data.as_deref())?;
    let projection = ChartProjection::new(&dataset, width, height);

    println!(
        "Projection {width}x{height} for a {} max loan",
        format_gbp(dataset.max_loan())
    );
    println!("Rounded max:  {}", format_gbp(projection.rounded_max_loan()));

    let ticks: Vec<String> = projection
        .x_ticks()
        .iter()
        .map(|tick| format_gbp_compact(*tick))
        .collect();
    println!("Ticks:        {}", ticks.join(" "));
    println!();

    println!("{:<6} {:<12} {:>4} {:>4}", "Index", "Loan", "Col", "Row");
    println!("{}", "-".repeat(30));
    for index in dataset.interactive_indices() {
        let Some(point) = dataset.point(index) else {
            continue;
        };
        println!(
            "{:<6} {:<12} {:>4} {:>4}",
            index,
            format_gbp(point.loan),
            projection.x_cell(point.loan),
            projection.y_cell(f64::from(point.lenders)),
        );
    }

    Ok(())
}

fn run_walk(data: Option<PathBuf>, steps: u32, from_deposit: bool) -> Result<()> {
    let dataset = load_dataset(data.as_deref())?;
    let mut navigator = Navigator::new(dataset)?;

    if from_deposit {
        navigator.select_deposit();
    }

    let view = navigator.view();
    println!("Start: {} ({} likelihood)", view.borrowing, view.band);

    navigator.subscribe(|view| {
        println!("  -> {} ({} likelihood)", view.borrowing, view.band);
    });

    for _ in 0..steps {
        navigator.next()?;
    }

    let view = navigator.view();
    println!("End:   {} ({} likelihood)", view.borrowing, view.band);

    Ok(())
}

/// Load the dataset from a JSON file, or fall back to the built-in sample.
fn load_dataset(path: Option<&Path>) -> Result<Dataset> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading dataset from {}", path.display()))?;
            let points: Vec<DataPoint> = serde_json::from_str(&raw)
                .with_context(|| format!("parsing dataset from {}", path.display()))?;
            Dataset::new(points).context("validating dataset")
        }
        None => Ok(Dataset::sample()),
    }
}
