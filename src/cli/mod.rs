use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod config;
mod demo;

/// dsindex - Content-addressed dataset index writer
#[derive(Parser)]
#[command(name = "dsindex")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert the built-in sample datasets
    Demo {
        /// Directory the dataset directories are written into
        #[arg(value_name = "OUTPUT", default_value = "dsindex-samples")]
        output: PathBuf,

        /// Load settings from a TOML config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Write blobs without gzip compression
        #[arg(long)]
        uncompressed: bool,

        /// Gzip compression level (0-9, default: 6)
        #[arg(short = 'c', long, value_parser = clap::value_parser!(u32).range(0..=9))]
        compression_level: Option<u32>,

        /// Prefix prepended to every dataset name
        #[arg(long, default_value = "")]
        name_prefix: String,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Demo {
            output,
            config,
            uncompressed,
            compression_level,
            name_prefix,
        } => {
            let file_config = match config {
                Some(path) => config::Config::from_file(&path)?,
                None => config::Config::default(),
            };
            let converter_config = file_config
                .conversion
                .resolve(uncompressed, compression_level);
            demo::run(output, converter_config, &name_prefix)
        }
    }
}
