//! ctgrid - interactive container dashboard.
//!
//! Usage:
//!   ctgrid                    # 8 demo containers, sorted by CPU
//!   ctgrid -s name -r         # sorted by name, reversed
//!   ctgrid -n 30 --churn 10   # 30 containers, a short-lived one every 10 polls
//!   ctgrid --log-file ctgrid.log -v

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;
use tikv_jemallocator::Jemalloc;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use ctgrid::config::Config;
use ctgrid::tui::App;

#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

/// Interactive container dashboard.
#[derive(Parser)]
#[command(name = "ctgrid", about = "Container metrics dashboard", version)]
struct Args {
    /// Refresh interval in seconds for container metrics.
    #[arg(short, long, default_value = "1", env = "CTGRID_INTERVAL")]
    interval: u64,

    /// Redraw tick in milliseconds when no input arrives.
    #[arg(long, default_value = "1000", env = "CTGRID_TICK_MS")]
    tick_ms: u64,

    /// Initial sort field: cpu, mem, net, name or id.
    #[arg(short, long, default_value = "cpu", env = "CTGRID_SORT")]
    sort: String,

    /// Reverse the initial sort order.
    #[arg(short, long, env = "CTGRID_REVERSE")]
    reverse: bool,

    /// Number of demo containers.
    #[arg(short = 'n', long, default_value = "8", env = "CTGRID_CONTAINERS")]
    containers: usize,

    /// Start a short-lived demo container every N refreshes (0 = never).
    #[arg(long, default_value = "0", env = "CTGRID_CHURN")]
    churn: u64,

    /// Append logs to this file. The terminal belongs to the UI, so without
    /// it nothing is logged.
    #[arg(long, value_name = "PATH", env = "CTGRID_LOG_FILE")]
    log_file: Option<String>,

    /// Increase logging verbosity (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode - only log errors.
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    fn config(&self) -> Config {
        Config {
            tick_rate: Duration::from_millis(self.tick_ms),
            refresh: Duration::from_secs(self.interval),
            sort_field: self.sort.clone(),
            reverse: self.reverse,
            demo_containers: self.containers,
            churn: self.churn,
        }
    }
}

/// Initializes the tracing subscriber writing to `path`.
/// Default level is INFO. Use -q for errors only.
fn init_logging(path: &Path, verbose: u8, quiet: bool) -> std::io::Result<()> {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = format!("ctgrid={}", level).parse() {
        filter = filter.add_directive(directive);
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn main() {
    let args = Args::parse();

    if let Some(ref path) = args.log_file {
        if let Err(e) = init_logging(Path::new(path), args.verbose, args.quiet) {
            eprintln!("Error: cannot open log file '{}': {}", path, e);
            std::process::exit(1);
        }
    }

    let config = args.config();
    let grid = match config.build_grid() {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("ctgrid {} starting", env!("CARGO_PKG_VERSION"));

    let source = Box::new(config.build_source());
    let app = App::new(grid);

    if let Err(e) = app.run(source, config.tick_rate, config.refresh) {
        tracing::error!(error = %e, "terminal error");
        eprintln!("Error running TUI: {}", e);
        std::process::exit(1);
    }
}
