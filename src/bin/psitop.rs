//! psitop - live Linux pressure stall information dashboard.
//!
//! Usage:
//!   psitop                          # read /proc/pressure
//!   psitop --proc-path /mnt/proc    # read another procfs mount
//!   psitop --log-file /tmp/psitop.log -v

use std::error::Error;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Mutex;

use clap::Parser;
use tracing::{Level, info, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::Directive;

use psitop::collector::{Collector, RealFs};
use psitop::tui::App;
use psitop::view::CpuThresholds;

/// Live terminal dashboard for Linux PSI (CPU, memory and IO pressure).
#[derive(Parser)]
#[command(name = "psitop", about = "Live Linux pressure stall dashboard", version)]
struct Args {
    /// Path to /proc filesystem (for testing/mocking).
    #[arg(long, default_value = "/proc")]
    proc_path: PathBuf,

    /// Write logs to this file. Without it nothing is logged, since the
    /// terminal belongs to the dashboard.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Increase logging verbosity (-v for debug, -vv for trace). Default is info level.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode - only log errors.
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let args = Args::parse();

    if let Some(path) = &args.log_file
        && let Err(e) = init_logging(path, args.verbose, args.quiet)
    {
        eprintln!("psitop: cannot open log file {}: {}", path.display(), e);
        process::exit(1);
    }

    let collector = Collector::new(RealFs::new(), &args.proc_path);
    if !collector.is_supported() {
        warn!(
            path = %collector.pressure_dir().display(),
            "pressure directory not found; kernel may lack PSI support"
        );
    }

    let thresholds = CpuThresholds::detect();
    info!(
        proc_path = %args.proc_path.display(),
        logical_cpus = thresholds.logical_cpus(),
        "starting psitop"
    );

    if let Err(e) = App::new(collector, thresholds).run() {
        eprintln!("psitop: {}", e);
        process::exit(1);
    }
}

fn init_logging(path: &Path, verbose: u8, quiet: bool) -> Result<(), Box<dyn Error>> {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let filter =
        EnvFilter::from_default_env().add_directive(format!("psitop={}", level).parse::<Directive>()?);

    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();

    Ok(())
}
