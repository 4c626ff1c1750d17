//! Generate both capacitor symbols from a config file and print the outcome.

use capsym::prelude::*;
use std::path::Path;

fn main() -> Result<(), CapsymError> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "capsym.conf".to_string());
    let path = Path::new(&path);

    if !path.exists() {
        eprintln!("Config not found: {}", path.display());
        eprintln!("Usage: cargo run --example generate_symbols [path/to/capsym.conf]");
        std::process::exit(1);
    }

    let options = GenerateOptions::default();
    let result = CapsymCore::generate(path, &options)?;

    println!("Symbol base name: {}", result.base_name);
    println!("Value label: {}", result.value_label);
    for symbol in &result.symbols {
        match symbol.status {
            SymbolStatus::Created => println!("  created {}", symbol.file.display()),
            SymbolStatus::SkippedExists => {
                println!("  kept existing {}", symbol.file.display())
            }
        }
    }

    Ok(())
}
