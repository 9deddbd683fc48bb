// Thu Oct 15 2026 - Alex

use anyhow::Context;
use clap::error::ErrorKind;
use clap::Parser;
use coff_view::{config::Config, output, parse_file, OutputFormat, SourceMode};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::process;

const EXIT_USAGE: i32 = 1;
const EXIT_NOT_A_FILE: i32 = 2;
const EXIT_MALFORMED: i32 = 3;

#[derive(Parser, Debug)]
#[command(name = "coff-view")]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Lists the symbol table of a COFF object file", long_about = None)]
struct Args {
    file: PathBuf,

    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long)]
    mapped: bool,

    #[arg(short, long)]
    log_level: Option<String>,

    #[arg(long)]
    no_color: bool,

    #[arg(long)]
    compact: bool,
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            eprint!("{}", e);
            println!("Usage: coff-view <FILE>");
            process::exit(EXIT_USAGE);
        }
    };

    let config = match resolve_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{:#}", e);
            process::exit(EXIT_USAGE);
        }
    };

    setup_logging(&config);

    if !config.output.color {
        colored::control::set_override(false);
    }

    if !is_readable_file(&args.file) {
        println!("File {} does not exist as a plain file.", args.file.display());
        process::exit(EXIT_NOT_A_FILE);
    }

    let report = match parse_file(&args.file, config.source.mode) {
        Ok(report) => report,
        Err(e) => {
            log::error!("{}: {}", args.file.display(), e);
            println!("Oooops... Something went wrong.");
            println!("The file has been damaged or has invalid format.");
            process::exit(EXIT_MALFORMED);
        }
    };

    match output::render(&report, &config.output) {
        Ok(text) => print!("{}", text),
        Err(e) => {
            eprintln!("Failed to render output: {}", e);
            process::exit(EXIT_USAGE);
        }
    }
}

fn resolve_config(args: &Args) -> anyhow::Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::default(),
    };

    if let Some(format) = args.format {
        config = config.with_format(format);
    }
    if let Some(level) = &args.log_level {
        config = config.with_log_level(level);
    }
    if args.mapped {
        config = config.with_source_mode(SourceMode::Mapped);
    }
    if args.no_color {
        config.output.color = false;
    }
    if args.compact {
        config.output.pretty = false;
    }

    Ok(config)
}

fn setup_logging(config: &Config) {
    env_logger::Builder::new()
        .filter_level(config.level_filter())
        .format_timestamp(None)
        .init();
}

fn is_readable_file(path: &Path) -> bool {
    path.is_file() && File::open(path).is_ok()
}
