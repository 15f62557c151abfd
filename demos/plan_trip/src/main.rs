//! plan_trip — plan one truck trip and write its duty logs.
//!
//! Routes start → pickup → dropoff with the offline straight-line provider,
//! simulates the Hours-of-Service duty cycle, writes the log to CSV (or
//! SQLite with the `sqlite` feature) and prints the full plan as JSON.
//!
//! ```text
//! plan_trip --start 34.05,-118.24 --pickup 36.17,-115.14 --dropoff 40.76,-111.89
//! plan_trip --request trip.json --output output/trip --plan-out plan.json
//! ```

mod plan;
mod request;

#[cfg(test)]
mod tests;

use std::fs;
use std::io::{BufWriter, Write, stdout};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use log::info;

use eld_output::{CsvWriter, OutputWriter, TripOutputObserver};
use eld_route::{RouteProvider, StraightLineProvider};

use plan::TripPlan;
use request::TripRequest;

#[derive(Debug, Parser)]
#[command(name = "plan_trip", version)]
#[command(about = "Plan a truck trip and generate Hours-of-Service duty logs")]
struct Args {
    /// JSON trip request; overrides the location flags
    #[arg(long)]
    request: Option<PathBuf>,

    /// Start location as "lat,lon"
    #[arg(long, allow_hyphen_values = true)]
    start: Option<String>,

    /// Pickup location as "lat,lon"
    #[arg(long, allow_hyphen_values = true)]
    pickup: Option<String>,

    /// Dropoff location as "lat,lon"
    #[arg(long, allow_hyphen_values = true)]
    dropoff: Option<String>,

    /// Hours already used in the current cycle
    #[arg(long, default_value_t = 0.0)]
    cycle_used: f64,

    /// Directory for the duty-log files
    #[arg(long, default_value = "output/plan_trip")]
    output: PathBuf,

    /// Output backend for the duty-log files
    #[arg(long, default_value = "csv")]
    #[arg(value_parser = ["csv", "sqlite"])]
    backend: String,

    /// Write the JSON plan here instead of stdout
    #[arg(long)]
    plan_out: Option<PathBuf>,

    /// Pretty-print the JSON plan
    #[arg(long)]
    pretty: bool,
}

impl Args {
    fn trip_request(&self) -> Result<TripRequest> {
        if let Some(path) = &self.request {
            return TripRequest::from_path(path);
        }
        let (Some(start), Some(pickup), Some(dropoff)) = (&self.start, &self.pickup, &self.dropoff)
        else {
            bail!("either --request or all of --start, --pickup and --dropoff are required");
        };
        Ok(TripRequest {
            start:              start.clone(),
            pickup:             pickup.clone(),
            dropoff:            dropoff.clone(),
            current_cycle_used: self.cycle_used,
            leg_miles:          None,
            total_miles:        None,
            rules:              None,
        })
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let request = args.trip_request()?;
    let provider = StraightLineProvider::default();

    fs::create_dir_all(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    let plan = match args.backend.as_str() {
        "sqlite" => plan_sqlite(&request, &provider, &args.output)?,
        _ => plan_with(&request, &provider, CsvWriter::new(&args.output)?)?,
    };
    info!("duty logs written to {}", args.output.display());

    match &args.plan_out {
        Some(path) => {
            let file = fs::File::create(path)
                .with_context(|| format!("creating {}", path.display()))?;
            write_plan(BufWriter::new(file), &plan, args.pretty)?;
            info!("plan written to {}", path.display());
        }
        None => write_plan(stdout().lock(), &plan, args.pretty)?,
    }
    Ok(())
}

/// Plan `request`, streaming its log into `writer`.
fn plan_with<P, W>(request: &TripRequest, provider: &P, writer: W) -> Result<TripPlan>
where
    P: RouteProvider,
    W: OutputWriter,
{
    let mut obs = TripOutputObserver::new(writer);
    let plan = plan::plan(request, provider, &mut obs)?;
    if let Some(e) = obs.take_error() {
        return Err(e).context("writing duty logs");
    }
    Ok(plan)
}

#[cfg(feature = "sqlite")]
fn plan_sqlite<P: RouteProvider>(request: &TripRequest, provider: &P, dir: &Path) -> Result<TripPlan> {
    plan_with(request, provider, eld_output::SqliteWriter::new(dir)?)
}

#[cfg(not(feature = "sqlite"))]
fn plan_sqlite<P: RouteProvider>(_request: &TripRequest, _provider: &P, _dir: &Path) -> Result<TripPlan> {
    bail!("plan_trip was built without the `sqlite` feature")
}

fn write_plan<W: Write>(mut out: W, plan: &TripPlan, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut out, plan)?;
    } else {
        serde_json::to_writer(&mut out, plan)?;
    }
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
