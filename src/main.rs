use std::error::Error;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use greedy_order::experiment::{Experiment, GeometricRange, OutputFormat, ReportWriter, SweepConfig};
use greedy_order::validation::validate_config;

/// Compare shortest-first and longest-first greedy job ordering.
#[derive(Parser, Debug)]
#[command(name = "greedy-order", version, about)]
struct Args {
    /// JSON sweep configuration; flags below override its fields.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Processor counts as START:END:FACTOR (or a single N).
    #[arg(short, long)]
    processors: Option<GeometricRange>,

    /// Job counts as START:END:FACTOR (or a single N).
    #[arg(short, long)]
    jobs: Option<GeometricRange>,

    /// Max job durations as START:END:FACTOR (or a single N).
    #[arg(short = 'd', long)]
    max_delay: Option<GeometricRange>,

    /// Trials averaged per configuration.
    #[arg(short, long)]
    trials: Option<usize>,

    /// Master seed; omit for OS entropy.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Skip configurations with no more jobs than processors.
    #[arg(long)]
    skip_unqueued: bool,

    /// Report format: text, tsv or json.
    #[arg(short, long, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Write the report here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl Args {
    fn sweep_config(&self) -> Result<SweepConfig, Box<dyn Error>> {
        let mut config = match &self.config {
            Some(path) => SweepConfig::from_json_file(path)?,
            None => SweepConfig::default(),
        };
        if let Some(range) = self.processors {
            config = config.with_processors(range);
        }
        if let Some(range) = self.jobs {
            config = config.with_jobs(range);
        }
        if let Some(range) = self.max_delay {
            config = config.with_max_delays(range);
        }
        if let Some(trials) = self.trials {
            config = config.with_trials(trials);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if self.skip_unqueued {
            config = config.with_skip_unqueued(true);
        }
        Ok(config)
    }
}

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(Some(env_logger::fmt::TimestampPrecision::Millis))
        .init();
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let config = args.sweep_config()?;
    if let Err(errors) = validate_config(&config) {
        for e in &errors {
            error!("{e}");
        }
        return Err(format!("invalid sweep configuration ({} problems)", errors.len()).into());
    }

    let sink: Box<dyn Write> = match &args.output {
        Some(path) => {
            info!("writing {} report to {}", args.format, path.display());
            Box::new(BufWriter::new(File::create(path)?))
        }
        None => Box::new(io::stdout().lock()),
    };
    let mut report = ReportWriter::new(sink, args.format);

    let mut write_error: Option<io::Error> = None;
    let summary = Experiment::new(config).run_with(|result| {
        if write_error.is_none() {
            write_error = report.write(result).err();
        }
    });
    if let Some(e) = write_error {
        return Err(e.into());
    }
    report.finish()?;

    if !summary.skipped.is_empty() {
        return Err(format!("{} configurations skipped", summary.skipped.len()).into());
    }
    Ok(())
}

fn main() -> ExitCode {
    init_logging();
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
