//! Core generation logic shared by library callers and the CLI.
//! No CLI or output-format dependencies.

use std::path::{Path, PathBuf};

use crate::config::{CapacitorConfig, ConfigError};
use crate::symbol::{self, Orientation, SymbolStatus};
use crate::value::ValueError;

#[derive(Debug, thiserror::Error)]
pub enum CapsymError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Format error: {0}")]
    Format(#[from] ValueError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Options for a generation run (CLI or library callers).
#[derive(Clone, Debug)]
pub struct GenerateOptions {
    pub output_dir: PathBuf,
    pub horizontal_template: PathBuf,
    pub vertical_template: PathBuf,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            horizontal_template: PathBuf::from(Orientation::Horizontal.default_template()),
            vertical_template: PathBuf::from(Orientation::Vertical.default_template()),
        }
    }
}

impl GenerateOptions {
    pub fn template_for(&self, orientation: Orientation) -> &Path {
        match orientation {
            Orientation::Horizontal => &self.horizontal_template,
            Orientation::Vertical => &self.vertical_template,
        }
    }
}

/// Emission outcome for one orientation.
#[derive(Debug, Clone, serde::Serialize)]
pub struct SymbolReport {
    pub orientation: Orientation,
    pub file: PathBuf,
    pub status: SymbolStatus,
}

/// Result of one generation run: derived names plus per-orientation
/// reports.
#[derive(Debug, Clone, serde::Serialize)]
pub struct GenerateResult {
    pub base_name: String,
    pub value_label: String,
    pub symbols: Vec<SymbolReport>,
}

impl GenerateResult {
    pub fn created(&self) -> usize {
        self.symbols
            .iter()
            .filter(|s| s.status == SymbolStatus::Created)
            .count()
    }

    pub fn skipped(&self) -> usize {
        self.symbols
            .iter()
            .filter(|s| s.status == SymbolStatus::SkippedExists)
            .count()
    }
}

/// Core generation API used by both the CLI and library callers.
pub struct CapsymCore;

impl CapsymCore {
    /// Generate both symbol orientations from a config file.
    pub fn generate(
        config_path: &Path,
        options: &GenerateOptions,
    ) -> Result<GenerateResult, CapsymError> {
        let config = CapacitorConfig::from_path(config_path)?;
        Self::generate_from_config(&config, options)
    }

    /// Generate both symbol orientations from an already-parsed config.
    pub fn generate_from_config(
        config: &CapacitorConfig,
        options: &GenerateOptions,
    ) -> Result<GenerateResult, CapsymError> {
        let base_name = config.symbol_base_name()?;
        let value_label = config.capacitance().display(config.precision)?;

        let mut symbols = Vec::new();
        for orientation in Orientation::ALL {
            let file = options
                .output_dir
                .join(format!("{}_{}.sym", base_name, orientation.file_suffix()));
            let annotations = symbol::annotations(orientation, config, &value_label);
            let status =
                symbol::write_symbol(options.template_for(orientation), &file, &annotations)?;
            symbols.push(SymbolReport {
                orientation,
                file,
                status,
            });
        }

        Ok(GenerateResult {
            base_name,
            value_label,
            symbols,
        })
    }
}
