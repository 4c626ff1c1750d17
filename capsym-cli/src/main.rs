//! Capsym CLI - gEDA capacitor symbol generation from the command line.

use capsym::{
    CapacitorConfig, CapsymCore, CapsymError, GenerateOptions, GenerateResult, SymbolStatus,
    DEFAULT_CONFIG_FILE,
};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "capsym")]
#[command(about = "gEDA capacitor symbol generator", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate horizontal and vertical symbols from a config file
    Generate {
        /// Path to the capacitor config file
        #[arg(value_name = "CONFIG", default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,

        /// Directory the .sym files are written to
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,

        /// Horizontal symbol template
        #[arg(long, default_value = "capsym_h.tpl")]
        horizontal_template: PathBuf,

        /// Vertical symbol template
        #[arg(long, default_value = "capsym_v.tpl")]
        vertical_template: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,
    },

    /// Print the derived symbol base name and value label without writing files
    Name {
        /// Path to the capacitor config file
        #[arg(value_name = "CONFIG", default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,
    },
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output for scripting
    Json,
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Generate {
            config,
            output_dir,
            horizontal_template,
            vertical_template,
            format,
        } => handle_generate(
            &config,
            output_dir,
            horizontal_template,
            vertical_template,
            format,
        ),
        Commands::Name { config } => handle_name(&config),
    };

    process::exit(exit_code);
}

fn handle_generate(
    config: &Path,
    output_dir: PathBuf,
    horizontal_template: PathBuf,
    vertical_template: PathBuf,
    format: OutputFormat,
) -> i32 {
    let options = GenerateOptions {
        output_dir,
        horizontal_template,
        vertical_template,
    };

    match CapsymCore::generate(config, &options) {
        Ok(result) => {
            output_result(&result, &format);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn handle_name(config_path: &Path) -> i32 {
    match derive_name(config_path) {
        Ok((base_name, value_label)) => {
            println!("{}", base_name);
            println!("value: {}", value_label);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn derive_name(config_path: &Path) -> Result<(String, String), CapsymError> {
    let config = CapacitorConfig::from_path(config_path)?;
    let base_name = config.symbol_base_name()?;
    let value_label = config.capacitance().display(config.precision)?;
    Ok((base_name, value_label))
}

fn output_result(result: &GenerateResult, format: &OutputFormat) {
    match format {
        OutputFormat::Human => output_human(result),
        OutputFormat::Json => output_json(result),
    }
}

fn output_human(result: &GenerateResult) {
    println!("Symbol: {} (value {})", result.base_name, result.value_label);
    for symbol in &result.symbols {
        match symbol.status {
            SymbolStatus::Created => {
                println!("  creating {}", symbol.file.display())
            }
            SymbolStatus::SkippedExists => {
                println!("  {} already exists, skipping", symbol.file.display())
            }
        }
    }
    println!("  {} created, {} skipped", result.created(), result.skipped());
}

fn output_json(result: &GenerateResult) {
    let output = serde_json::json!({
        "result": result,
        "summary": {
            "created": result.created(),
            "skipped": result.skipped(),
        }
    });
    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}
