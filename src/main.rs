//! doctex - document tree to LaTeX translator

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;

use doctex::{Exporter, LatexConfig, LatexExporter};

#[derive(Parser)]
#[command(name = "doctex")]
#[command(version, about = "Translate document trees to LaTeX", long_about = None)]
#[command(after_help = "EXAMPLES:
    doctex tree.json -o manual.tex           Write a manual
    doctex tree.json --docclass howto        Print a howto to stdout
    doctex tree.json --config latex.json     Read settings from a file")]
struct Cli {
    /// Input document tree (JSON)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output file; stdout when omitted
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// JSON settings file; flags below override it
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Document class (manual or howto)
    #[arg(long)]
    docclass: Option<String>,

    #[arg(long)]
    title: Option<String>,

    #[arg(long)]
    author: Option<String>,

    #[arg(long)]
    release: Option<String>,

    #[arg(long)]
    date: Option<String>,

    /// Paper size without the `paper` suffix, e.g. a4
    #[arg(long)]
    paper: Option<String>,

    /// Base font size, e.g. 11pt
    #[arg(long)]
    pointsize: Option<String>,

    /// Default language for literal blocks
    #[arg(long)]
    language: Option<String>,

    /// Omit the module index
    #[arg(long)]
    no_modindex: bool,

    /// Only report errors
    #[arg(short, long)]
    quiet: bool,

    /// More log output (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(quiet: bool, verbose: u8) {
    let level = match (quiet, verbose) {
        (true, _) => LevelFilter::Error,
        (false, 0) => LevelFilter::Warn,
        (false, 1) => LevelFilter::Info,
        (false, 2) => LevelFilter::Debug,
        (false, _) => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .parse_default_env()
        .init();
}

fn load_config(cli: &Cli) -> doctex::Result<LatexConfig> {
    let mut config = match &cli.config {
        Some(path) => serde_json::from_reader(File::open(path)?)?,
        None => LatexConfig::default(),
    };

    let overrides = [
        (&cli.docclass, &mut config.docclass),
        (&cli.title, &mut config.title),
        (&cli.author, &mut config.author),
        (&cli.release, &mut config.release),
        (&cli.date, &mut config.date),
        (&cli.paper, &mut config.paper_size),
        (&cli.pointsize, &mut config.point_size),
        (&cli.language, &mut config.highlight_language),
    ];
    for (flag, field) in overrides {
        if let Some(value) = flag {
            *field = value.clone();
        }
    }
    if cli.no_modindex {
        config.modindex = false;
    }
    Ok(config)
}

fn run(cli: &Cli) -> doctex::Result<()> {
    let config = load_config(cli)?;
    let root = doctex::import::read_document(&cli.input)?;
    let exporter = LatexExporter::with_config(config);

    let warnings = match &cli.output {
        Some(path) => {
            let mut out = BufWriter::new(File::create(path)?);
            let warnings = exporter.export(&root, &mut out)?;
            out.flush()?;
            warnings
        }
        None => {
            let mut out = io::stdout().lock();
            exporter.export(&root, &mut out)?
        }
    };

    if !warnings.is_empty() {
        log::info!("{} warnings", warnings.len());
    }
    if let Some(path) = &cli.output {
        log::info!("wrote {}", path.display());
    }
    Ok(())
}
