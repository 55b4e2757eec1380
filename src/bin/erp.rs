use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use fingers_erp::{calc_mean_erp, plot_erp, EpochConfig, ErpSummary, PlotOptions};

#[derive(Parser, Debug)]
#[command(name = "erp", about = "Per-finger event-related potentials from an ECoG channel")]
struct Args {
    /// Event table CSV (starting_point, peak_point, finger)
    #[arg(long, default_value = "events_file_ordered.csv")]
    events: PathBuf,

    /// Single-channel signal CSV, no header
    #[arg(long, default_value = "brain_data_channel_one.csv")]
    signal: PathBuf,

    /// Output PNG for the ERP plot
    #[arg(long, default_value = "erp_plot.png")]
    plot: PathBuf,

    /// Skip rendering the plot
    #[arg(long)]
    no_plot: bool,

    /// Print the summary as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let cfg = EpochConfig::default();

    let res = calc_mean_erp(&args.events, &args.signal, &cfg)?;

    let summary = ErpSummary::new(&res, cfg.erp_shape());
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{summary}");
    }

    // Summary is already on stdout; a failed render still sets the exit code.
    if !args.no_plot {
        plot_erp(&res.erp, &cfg, &PlotOptions::default(), &args.plot)?;
    }

    Ok(())
}
