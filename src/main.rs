use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use histograma::{extract, histogram, takeout};
use itertools::Itertools;
use log::info;

/// Generate an hour-of-day histogram from a YouTube takeout history.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The takeout history file, a JSON array of activity records.
    #[arg(long)]
    input: PathBuf,

    /// The histogram file.  The extension picks the image format.
    #[arg(long, default_value = "histograma.png")]
    output: PathBuf,

    /// The histogram title.
    #[arg(long, default_value = "Ocurrencias por hora")]
    title: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let records = takeout::read_records(&args.input)?;
    info!(
        "read {} activity records from {}",
        records.len(),
        args.input.display()
    );

    let hours = extract::local_hours(&records)?;
    info!(
        "kept {} {} records, hours of day in {}",
        hours.len(),
        extract::SOURCE_HEADER,
        extract::TARGET_TZ
    );
    if let Some((hour, count)) = hours.iter().counts().into_iter().max_by_key(|entry| entry.1) {
        info!("busiest hour is {:02}:00 with {} occurrences", hour, count);
    }

    histogram::render(&hours, &args.title, &args.output)?;
    info!("wrote histogram to {}", args.output.display());

    Ok(())
}
