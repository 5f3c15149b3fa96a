use clap::{ArgAction, Parser, ValueEnum};
use failure::Error;
use median::{filter, imgio, FilterOptions, Statistic};
use std::{path::PathBuf, process};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Neighborhood filter for single-channel grayscale PNG images.
#[derive(Parser)]
#[command(name = "median", version)]
struct Args {
    /// Input image (grayscale PNG)
    infile: PathBuf,

    /// Neighborhood size, odd and at most the image height
    n1: usize,

    /// Accepted for compatibility, has no effect on the output
    #[arg(allow_negative_numbers = true)]
    n2: i32,

    /// Output image path
    outfile: PathBuf,

    /// Aggregate computed over each neighborhood
    #[arg(long, value_enum, default_value_t = StatisticArg::Mean)]
    statistic: StatisticArg,

    /// Compute the columns of each row in parallel
    #[arg(short, long)]
    parallel: bool,

    /// Number of threads for --parallel (0 = auto)
    #[arg(short = 'j', long, default_value = "0")]
    threads: usize,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum StatisticArg {
    /// Truncated integer mean
    Mean,
    /// True median
    Median,
}

impl From<StatisticArg> for Statistic {
    fn from(arg: StatisticArg) -> Self {
        match arg {
            StatisticArg::Mean => Statistic::Mean,
            StatisticArg::Median => Statistic::Median,
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn go(args: Args) -> Result<(), Error> {
    if args.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(args.threads)
            .build_global()?;
    }
    debug!(n2 = args.n2, "n2 is ignored");
    info!("Reading {}", args.infile.display());
    let input = imgio::load(&args.infile)?;
    let options = FilterOptions {
        size: args.n1,
        statistic: args.statistic.into(),
        parallel: args.parallel,
    };
    info!(
        "Filtering {}x{} with a {}x{} neighborhood",
        input.width(),
        input.height(),
        options.size,
        options.size
    );
    let output = filter::median(&input, &options)?;
    info!("Saving {}", args.outfile.display());
    imgio::save(&args.outfile, &output)
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);
    if let Err(err) = go(args) {
        eprintln!("median: {}", err);
        process::exit(1);
    }
}
