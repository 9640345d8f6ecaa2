use std::path::PathBuf;

use clap::Parser;
use genview::{Command, Session, default_config_path, init_logging, load_config, run};
use genview_core::range::current_year;

#[derive(Parser, Debug)]
#[command(name = "genview")]
#[command(about = "Projected renewable energy generation over a range of years")]
struct Args {
    /// Path to the data directory (default: ~/.genview/)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info", global = true)]
    log_level: String,

    /// Config file (default: <data-dir>/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".genview")
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);

    init_logging(&data_dir, &args.log_level)?;

    let config_path = args
        .config
        .unwrap_or_else(|| default_config_path(&data_dir));
    let config = load_config(&config_path)?;
    let session = Session::new(config, current_year())?;

    let output = run(&session, &args.command)?;
    print!("{output}");

    tracing::info!("genview finished");
    Ok(())
}
