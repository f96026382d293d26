//! SSA IR Compiler Driver
//! 
//! Command-line entry point: lowers JSON compilation units to IR text.

use clap::{Parser, Subcommand};
use log::LevelFilter;
use sirc_driver::{check_file, lower_file};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sirc")]
#[command(about = "SSA IR Compiler")]
#[command(version = "0.1.0")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lower a compilation unit to IR text
    Lower {
        /// Input unit description (JSON)
        input: PathBuf,

        /// Output IR file; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Lower functions one after another instead of on worker threads
        #[arg(long)]
        sequential: bool,
    },

    /// Lower a compilation unit and report errors only
    Check {
        /// Input unit description (JSON)
        input: PathBuf,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Lower { input, output, sequential } => {
            match lower_file(&input, output.as_deref(), !sequential) {
                Ok(Some(ir)) => print!("{ir}"),
                Ok(None) => {}
                Err(e) => {
                    eprintln!("Error lowering {}: {}", input.display(), e);
                    std::process::exit(1);
                }
            }
        }
        Commands::Check { input } => match check_file(&input) {
            Ok(lines) => println!("{}: ok ({} lines)", input.display(), lines),
            Err(e) => {
                eprintln!("Error checking {}: {}", input.display(), e);
                std::process::exit(1);
            }
        },
    }
}
