//! gRPC Handler Generator CLI
//!
//! Command-line interface for generating handler stubs from `.proto` files.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use grpc_handler_generator_common::ServiceDescriptor;
use grpc_handler_generator_generator::{HandlerGenerator, DEFAULT_EXTENSION};
use grpc_handler_generator_parser::ProtoParser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "grpc-handler-generator")]
#[command(
    version,
    about = "Generate gRPC handler and test stubs from a .proto file",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a .proto file and display the extracted service
    #[command(after_help = "EXAMPLES:\n  \
        # Show the service and RPCs\n  \
        grpc-handler-generator parse -i proto/sample.proto\n\n  \
        # Print as JSON\n  \
        grpc-handler-generator parse -i proto/sample.proto --json")]
    Parse {
        /// Path to the .proto file
        #[arg(short, long)]
        input: PathBuf,

        /// Print the extracted service as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate one handler and one test stub per RPC
    #[command(after_help = "EXAMPLES:\n  \
        # Generate handlers into ./internal/handler\n  \
        grpc-handler-generator generate \\\n    \
        -i proto/sample.proto \\\n    \
        -o internal/handler\n\n  \
        # List the files without writing them\n  \
        grpc-handler-generator generate -i proto/sample.proto -o out --dry-run")]
    Generate {
        /// Path to the .proto file
        #[arg(short, long)]
        input: PathBuf,

        /// Output directory
        #[arg(short, long)]
        output: PathBuf,

        /// Extension of generated files
        #[arg(long, default_value = DEFAULT_EXTENSION)]
        ext: String,

        /// Print target file names without writing anything
        #[arg(long)]
        dry_run: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        println!("{} Verbose mode enabled", "→".cyan());
    }

    match cli.command {
        Commands::Parse { input, json } => {
            parse_command(input.as_path(), json, cli.verbose)?;
        }
        Commands::Generate {
            input,
            output,
            ext,
            dry_run,
        } => {
            generate_command(GenerateConfig {
                input: input.as_path(),
                output: output.as_path(),
                extension: &ext,
                dry_run,
                verbose: cli.verbose,
            })?;
        }
    }

    Ok(())
}

/// Read and extract the descriptor at `path`
fn load_descriptor(path: &Path) -> Result<ServiceDescriptor> {
    let parser = ProtoParser::from_file(path)
        .with_context(|| format!("Failed to read proto file: {}", path.display()))?;
    parser
        .parse()
        .with_context(|| format!("Failed to parse proto file: {}", path.display()))
}

fn parse_command(input: &Path, json: bool, verbose: bool) -> Result<()> {
    let descriptor = load_descriptor(input)?;

    if json {
        let rendered =
            serde_json::to_string_pretty(&descriptor).context("Failed to serialize service")?;
        println!("{rendered}");
        return Ok(());
    }

    println!("{} Parsing proto file: {}", "→".cyan(), input.display());
    println!("\n{}", "✓ Parse successful!".green().bold());
    println!("\n{}", "Service:".bold());
    println!("  Name: {}", descriptor.service_name.yellow());
    println!("  Go package: {}", descriptor.go_package.yellow());
    println!("  RPCs: {}", descriptor.rpc_names.len());

    if verbose {
        println!("\n{}", "RPCs:".bold());
        for rpc in &descriptor.rpc_names {
            println!("  • {}", rpc.cyan());
        }
    }

    Ok(())
}

/// Configuration for handler generation
struct GenerateConfig<'a> {
    input: &'a Path,
    output: &'a Path,
    extension: &'a str,
    dry_run: bool,
    verbose: bool,
}

fn generate_command(config: GenerateConfig) -> Result<()> {
    println!(
        "{} Generating handlers from: {}",
        "→".cyan(),
        config.input.display()
    );

    let descriptor = load_descriptor(config.input)?;
    println!(
        "{} Parsed service {} with {} RPCs",
        "✓".green(),
        descriptor.service_name.yellow(),
        descriptor.rpc_names.len()
    );

    if config.verbose {
        println!("  Go package: {}", descriptor.go_package);
        println!("  Output: {}", config.output.display());
        println!("  Extension: {}", config.extension);
    }

    let generator = HandlerGenerator::new(descriptor)
        .context("Failed to create generator")?
        .with_extension(config.extension);

    if config.dry_run {
        println!("\n{}", "Would generate:".bold());
        for name in generator.file_names() {
            println!("  📄 {}", config.output.join(name).display());
        }
        return Ok(());
    }

    let written = generator
        .generate_to_directory(config.output)
        .with_context(|| format!("Failed to write handlers to {}", config.output.display()))?;

    println!("\n{}", "✓ Generation complete!".green().bold());
    println!("\n{}", "Generated files:".bold());
    for name in &written {
        println!("  📄 {}", config.output.join(name).display());
    }

    Ok(())
}
