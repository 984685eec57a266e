//! pdflayers - list layer visibility metadata from PDF and Illustrator files.
//!
//! Scans each input for an Optional Content configuration (or, failing
//! that, an Illustrator private-data block) and prints the layer list as
//! JSON or tab-separated text.

use anyhow::Context;
use clap::{ArgAction, Parser, ValueEnum};
use matisse_core::{
    ExtractionResult, extract_illustrator_layers, extract_layers, extract_optional_content,
    is_encrypted,
};
use memmap2::Mmap;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Output format for the layer listing.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputType {
    /// JSON object per input file (default)
    #[default]
    Json,
    /// One name<TAB>visibility line per layer
    Text,
}

/// Which extraction path to run.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum Mode {
    /// Optional content first, Illustrator private data as fallback
    #[default]
    Auto,
    /// Optional content groups only
    Ocg,
    /// Illustrator private data only
    Illustrator,
}

/// List layer visibility metadata from PDF and Illustrator files.
#[derive(Parser, Debug)]
#[command(name = "pdflayers")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// One or more paths to PDF files
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Path to file where output is written, or "-" for stdout
    #[arg(short = 'o', long, default_value = "-")]
    outfile: String,

    /// Type of output to generate
    #[arg(short = 't', long = "output-type", value_enum, default_value = "json")]
    output_type: OutputType,

    /// Which extraction path to run
    #[arg(short = 'm', long, value_enum, default_value = "auto")]
    mode: Mode,

    /// Restrict the listing to visible layers
    #[arg(long = "visible-only", action = ArgAction::SetTrue)]
    visible_only: bool,
}

#[derive(Serialize)]
struct LayerEntry<'a> {
    name: &'a str,
    visible: bool,
}

#[derive(Serialize)]
struct LayersReport<'a> {
    total: usize,
    visible: Vec<&'a str>,
    layers: Vec<LayerEntry<'a>>,
}

fn report<'a>(result: &'a ExtractionResult, visible_only: bool) -> LayersReport<'a> {
    let layers: Vec<LayerEntry<'a>> = result
        .layers()
        .iter()
        .filter(|layer| !visible_only || layer.visible)
        .map(|layer| LayerEntry {
            name: &layer.name,
            visible: layer.visible,
        })
        .collect();
    LayersReport {
        total: result.total(),
        visible: result.visible_names(),
        layers,
    }
}

fn write_report<W: Write>(
    out: &mut W,
    result: &ExtractionResult,
    args: &Args,
) -> anyhow::Result<()> {
    let report = report(result, args.visible_only);
    match args.output_type {
        OutputType::Json => {
            serde_json::to_writer(&mut *out, &report)?;
            writeln!(out)?;
        }
        OutputType::Text => {
            for layer in &report.layers {
                let state = if layer.visible { "visible" } else { "hidden" };
                writeln!(out, "{}\t{}", layer.name, state)?;
            }
        }
    }
    Ok(())
}

fn process_file<W: Write>(path: &PathBuf, out: &mut W, args: &Args) -> anyhow::Result<()> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let mmap = unsafe { Mmap::map(&file) }.with_context(|| format!("mapping {}", path.display()))?;
    let data = &mmap[..];

    if !data.starts_with(b"%PDF-") {
        eprintln!(
            "Warning: {} does not start with a PDF header; scanning anyway",
            path.display()
        );
    }
    if is_encrypted(data) {
        eprintln!(
            "Warning: {} is encrypted; results may be partial",
            path.display()
        );
    }

    let result = match args.mode {
        Mode::Auto => Some(extract_layers(data)),
        Mode::Ocg => Some(extract_optional_content(data)),
        Mode::Illustrator => extract_illustrator_layers(data),
    };

    match result {
        Some(result) => write_report(out, &result, args)?,
        None => eprintln!("{}: no Illustrator private data found", path.display()),
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Open output file or use stdout
    let mut output: Box<dyn Write> = if args.outfile == "-" {
        Box::new(BufWriter::new(io::stdout()))
    } else {
        let file = File::create(&args.outfile)
            .with_context(|| format!("creating output file {}", args.outfile))?;
        Box::new(BufWriter::new(file))
    };

    for path in &args.files {
        if !path.exists() {
            eprintln!("Error: File not found: {}", path.display());
            std::process::exit(1);
        }

        process_file(path, &mut output, &args)?;
    }

    output.flush()?;
    Ok(())
}
