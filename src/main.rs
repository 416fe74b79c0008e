//! rainbow-end - print a source file with its block keywords colored by depth

use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use rainbow_end::config::{parse_palette, Config};
use rainbow_end::error::{RainbowError, Result};
use rainbow_end::render::{write_colored, write_ranges};
use rainbow_end::syntax::ProfileRegistry;
use rainbow_end::Highlighter;

/// Parsed command line
#[derive(Debug, Default)]
struct Options {
    file: Option<PathBuf>,
    language: Option<String>,
    profiles: Option<PathBuf>,
    colors: Option<String>,
    ranges: bool,
    list: bool,
}

fn main() {
    init_logging();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("RAINBOW_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    // Handle --help and --version
    if let Some(first) = args.first() {
        match first.as_str() {
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            "--version" | "-V" => {
                println!("rainbow-end {}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            _ => {}
        }
    }

    let options = parse_args(&args)?;
    let mut config = Config::load();
    if let Some(colors) = &options.colors {
        config.palette = parse_palette(colors)?;
    }

    let mut registry = ProfileRegistry::with_builtin();
    for path in config.profiles.iter().chain(options.profiles.iter()) {
        registry.load_file(path)?;
    }

    if options.list {
        for language in registry.languages() {
            println!("{}", language);
        }
        return Ok(());
    }

    let Some(file) = options.file else {
        print_usage();
        return Ok(());
    };
    let language = match options.language {
        Some(language) => language,
        None => registry
            .detect_language(&file)
            .map(str::to_string)
            .ok_or_else(|| RainbowError::UnknownLanguage(file.display().to_string()))?,
    };

    let text = fs::read_to_string(&file)?;
    let highlighter = Highlighter::new(Arc::new(registry), config.palette);
    let mut stdout = io::stdout().lock();

    if options.ranges {
        let buckets = highlighter.highlight(&text, &language)?;
        write_ranges(&mut stdout, &buckets)
    } else {
        let assignments = highlighter.assignments(&text, &language)?;
        write_colored(&mut stdout, &text, &assignments, highlighter.palette())
    }
}

fn parse_args(args: &[String]) -> Result<Options> {
    let mut options = Options::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--lang" | "-l" => options.language = Some(value(&mut iter, arg)?),
            "--profiles" | "-p" => options.profiles = Some(PathBuf::from(value(&mut iter, arg)?)),
            "--colors" | "-c" => options.colors = Some(value(&mut iter, arg)?),
            "--ranges" | "-r" => options.ranges = true,
            "--list" => options.list = true,
            _ if arg.starts_with('-') => {
                return Err(usage_error(format!("unknown option: {}", arg)));
            }
            _ => options.file = Some(PathBuf::from(arg)),
        }
    }

    Ok(options)
}

fn value<'a>(iter: &mut impl Iterator<Item = &'a String>, flag: &str) -> Result<String> {
    iter.next()
        .cloned()
        .ok_or_else(|| usage_error(format!("{} requires a value", flag)))
}

fn usage_error(message: String) -> RainbowError {
    RainbowError::Message(message)
}

fn print_usage() {
    println!("rainbow-end {} - color block keywords by nesting depth", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: rainbow-end [OPTIONS] FILE");
    println!();
    println!("Options:");
    println!("  -l, --lang ID         Language id (default: detected from extension)");
    println!("  -p, --profiles PATH   Load extra language profiles from a TOML file");
    println!("  -c, --colors LIST     Comma-separated palette, e.g. red,green,blue");
    println!("  -r, --ranges          Print line:col ranges per color bucket");
    println!("      --list            List available languages");
    println!("  -h, --help            Show this help message");
    println!("  -V, --version         Show version information");
    println!();
    println!("Set RAINBOW_LOG=debug for diagnostics.");
}
