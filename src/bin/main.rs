//! ripmesh CLI
//!
//! Convert NinjaRipper RIP captures to Wavefront OBJ.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use ripmesh::{convert, find_rip_files, ConversionReport, ConversionRequest, ExportFormat};

#[derive(Parser)]
#[command(name = "ripmesh")]
#[command(author, version, about = "Convert NinjaRipper RIP captures to Wavefront OBJ", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a list of RIP files into one merged export
    Files {
        /// Source .rip files, merged in the given order
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory
        #[arg(short, long)]
        output: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "obj")]
        format: OutputFormat,
    },

    /// Convert every RIP file found in a directory
    Dir {
        /// Directory to scan (non-recursive)
        input: PathBuf,

        /// Output directory
        #[arg(short, long)]
        output: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "obj")]
        format: OutputFormat,
    },

    /// Show a RIP file's header and vertex attribute table
    Info {
        /// RIP file to inspect
        input: PathBuf,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Wavefront OBJ format
    Obj,
}

impl From<OutputFormat> for ExportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Obj => ExportFormat::Obj,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Files {
            inputs,
            output,
            format,
        } => {
            let report = convert(ConversionRequest::new(inputs, output, format.into()))?;
            print_report(&report)?;
        }
        Commands::Dir {
            input,
            output,
            format,
        } => {
            println!("Scanning {:?} for .rip files...", input);
            let inputs = find_rip_files(&input)?;
            println!("  Found {} file(s)", inputs.len());

            let report = convert(ConversionRequest::new(inputs, output, format.into()))?;
            print_report(&report)?;
        }
        Commands::Info { input } => {
            show_info(&input)?;
        }
    }

    Ok(())
}

fn print_report(report: &ConversionReport) -> Result<(), Box<dyn std::error::Error>> {
    println!("Converted {} file(s)", report.converted.len());
    for output in &report.outputs {
        println!("  Wrote {:?}", output);
    }
    for (source, error) in &report.failed {
        println!("  Failed {:?}: {}", source, error);
    }

    if report.is_complete() {
        Ok(())
    } else {
        Err(format!("{} file(s) failed to convert", report.failed.len()).into())
    }
}

fn show_info(path: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::open(path)?;
    let mut reader = ripmesh::StreamReader::new(BufReader::new(file));

    let header = ripmesh::layout::read_header(&mut reader)?;
    let (layout, attributes) = ripmesh::layout::read_layout(&mut reader, header.attribute_count)?;

    println!("RIP file {:?}", path);
    println!("  Version: {}", header.version);
    println!("  Faces: {}", header.face_count);
    println!(
        "  Vertices: {} ({} bytes each)",
        header.vertex_count, header.vertex_size
    );
    println!("  Textures: {}", header.texture_file_count);
    println!("  Shaders: {}", header.shader_file_count);
    println!("  Vertex fields: {}", layout.field_types.len());

    println!("\nAttributes:");
    for attr in &attributes {
        println!(
            "  {} [{}] offset {} ({} x {} bytes)",
            attr.semantic, attr.semantic_index, attr.byte_offset, attr.element_count, attr.element_size
        );
    }

    Ok(())
}
