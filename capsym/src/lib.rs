//! Capsym - gEDA capacitor symbol generation library
//!
//! This library generates gschem capacitor symbols from a flat
//! key=value description of a single part: engineering-notation value
//! formatting across the micro/nano/pico tiers, a filename token and a
//! schematic label per value, and template-based emission of a
//! horizontal and a vertical symbol.
//!
//! # Quick Start
//!
//! ```no_run
//! use capsym::{CapsymCore, GenerateOptions};
//! use std::path::Path;
//!
//! let options = GenerateOptions::default();
//! let result = CapsymCore::generate(
//!     Path::new("capsym.conf"),
//!     &options,
//! ).unwrap();
//!
//! for symbol in &result.symbols {
//!     println!("{:?}: {}", symbol.status, symbol.file.display());
//! }
//! ```
//!
//! # Features
//!
//! - **Value formatting**: `1u0` / `1.0u` style strings at a configured
//!   significant-figure count
//! - **Symbol emission**: byte-for-byte template copy plus appended
//!   gEDA text attributes, never overwriting an existing symbol
//! - **Config parsing**: line-oriented key=value capacitor descriptions

pub mod config;
pub mod core;
pub mod symbol;
pub mod value;

// Re-export main types
pub use crate::config::{
    CapacitorConfig, ConfigError, Dielectric, Footprint, DEFAULT_CONFIG_FILE,
};
pub use crate::core::{CapsymCore, CapsymError, GenerateOptions, GenerateResult, SymbolReport};
pub use crate::symbol::{Annotation, Orientation, SymbolStatus, TextAttribute};
pub use crate::value::{parse_capacitance, Capacitance, Tier, ValueError};

/// Parse a capacitor config file (convenience wrapper).
pub fn parse_config(path: &std::path::Path) -> Result<CapacitorConfig, CapsymError> {
    CapacitorConfig::from_path(path).map_err(CapsymError::Config)
}

/// Format a capacitance in farads as a schematic label (convenience wrapper).
pub fn format_value(farads: f64, precision: usize) -> Result<String, CapsymError> {
    Capacitance::from_farads(farads)
        .display(precision)
        .map_err(CapsymError::Format)
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        CapacitorConfig, CapsymCore, CapsymError, GenerateOptions, GenerateResult, Orientation,
        SymbolReport, SymbolStatus,
    };
}
