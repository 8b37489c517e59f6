use std::{
    env,
    io::{self, BufWriter, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use log::LevelFilter;

use instgen::{code_generator, config::Config, list_compiler};

/// Print an instruction enum body followed by its name table
#[derive(Parser, Debug)]
#[command(name = "instgen", version, about)]
struct Cli {
    /// Instruction list to read, one name per line [default: ./class_inst_list]
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// TOML config file (defaults to ./instgen.toml when present)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(level_for(cli.verbose))
        .parse_default_env()
        .init();

    let working_dir = env::current_dir().context("failed to determine working directory")?;
    let config = Config::resolve(cli.config.as_deref(), cli.input, &working_dir)?;

    // Everything is loaded before the first byte goes to stdout
    let names = list_compiler::load(&config.input)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    code_generator::write_blocks(&names, &mut out)?;
    out.flush().context("failed to flush stdout")?;

    Ok(())
}
