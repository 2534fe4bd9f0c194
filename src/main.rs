//! sheetgrid - Resolve A1 notation against a sheet from the command line

mod config;
mod error;
mod report;

use std::env;
use std::path::PathBuf;

use anyhow::Context;
use sheetgrid_core::{Sheet, SheetConfig};
use sheetgrid_notation::notation::to_coordinates;

use crate::error::CliError;

fn print_usage() {
    eprintln!("Usage: sheetgrid [OPTIONS] <NOTATION>...");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  <NOTATION>...             A1 references to resolve (e.g. A1:B5, C:C, 3:3)");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -r, --rows <N>            Number of rows in the sheet");
    eprintln!("  -c, --columns <N>         Number of columns in the sheet");
    eprintln!("  --config <FILE>           Load sheet settings from a TOML file");
    eprintln!("  --no-config               Ignore the default config file");
    eprintln!("  --coordinates             Print parsed coordinates instead of ranges");
    eprintln!("  -v, --verbose             Log debug output to stderr");
    eprintln!("  -h, --help                Print help");
}

#[derive(Debug, Default)]
struct Options {
    notations: Vec<String>,
    rows: Option<u32>,
    columns: Option<u32>,
    config_file: Option<PathBuf>,
    no_config: bool,
    coordinates: bool,
    verbose: bool,
}

fn parse_dimension(flag: &str, value: Option<&String>) -> Result<u32, CliError> {
    value
        .and_then(|v| v.parse::<u32>().ok())
        .filter(|&n| n > 0)
        .ok_or_else(|| CliError::Usage(format!("{} requires a positive number", flag)))
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(options: &Options) -> anyhow::Result<()> {
    if options.coordinates {
        for notation in &options.notations {
            let areas = to_coordinates(notation)
                .with_context(|| format!("could not parse '{}'", notation))?;
            for area in &areas {
                println!("{}", report::describe_area(area));
            }
        }
        return Ok(());
    }

    let mut sheet_config = if options.no_config && options.config_file.is_none() {
        SheetConfig::default()
    } else {
        config::load_config(options.config_file.as_deref())?
    };
    if let Some(rows) = options.rows {
        sheet_config.num_rows = rows;
    }
    if let Some(columns) = options.columns {
        sheet_config.num_columns = columns;
    }

    let mut sheet = Sheet::new(sheet_config)?;
    for notation in &options.notations {
        let ranges = sheet
            .get_ranges(notation)
            .with_context(|| format!("could not resolve '{}'", notation))?;
        for range in &ranges {
            println!("{}", report::describe_range(range)?);
        }
    }
    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let mut options = Options::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_usage();
                return;
            }
            flag @ ("-r" | "--rows" | "-c" | "--columns") => {
                i += 1;
                let n = match parse_dimension(flag, args.get(i)) {
                    Ok(n) => n,
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        std::process::exit(1);
                    }
                };
                if flag == "-r" || flag == "--rows" {
                    options.rows = Some(n);
                } else {
                    options.columns = Some(n);
                }
            }
            "--config" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --config requires a file path");
                    std::process::exit(1);
                }
                options.config_file = Some(PathBuf::from(&args[i]));
            }
            "--no-config" => options.no_config = true,
            "--coordinates" => options.coordinates = true,
            "-v" | "--verbose" => options.verbose = true,
            arg if arg.starts_with('-') && arg.len() > 1 => {
                eprintln!("Error: Unknown option: {}", arg);
                print_usage();
                std::process::exit(1);
            }
            _ => options.notations.push(args[i].clone()),
        }
        i += 1;
    }

    if options.notations.is_empty() {
        eprintln!("Error: at least one A1 notation is required");
        print_usage();
        std::process::exit(1);
    }

    init_logging(options.verbose);

    if let Err(e) = run(&options) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
