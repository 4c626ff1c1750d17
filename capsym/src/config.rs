//! Line-oriented key=value configuration describing a single capacitor.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use thiserror::Error;

use crate::value::{Capacitance, ValueError};

/// Config file looked up when the caller does not name one.
pub const DEFAULT_CONFIG_FILE: &str = "capsym.conf";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not find the configuration file {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing required key: {0}")]
    MissingKey(&'static str),
    #[error("invalid number for {key}: {value}")]
    InvalidNumber { key: &'static str, value: String },
    #[error("unknown dielectric: {0}")]
    UnknownDielectric(String),
    #[error("unknown footprint: {0}")]
    UnknownFootprint(String),
}

/// Capacitor dielectric classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dielectric {
    X7r,
    X5r,
    Np0,
    C0g,
}

impl Dielectric {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dielectric::X7r => "x7r",
            Dielectric::X5r => "x5r",
            Dielectric::Np0 => "np0",
            Dielectric::C0g => "c0g",
        }
    }
}

impl FromStr for Dielectric {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "x7r" => Ok(Dielectric::X7r),
            "x5r" => Ok(Dielectric::X5r),
            "np0" => Ok(Dielectric::Np0),
            "c0g" => Ok(Dielectric::C0g),
            other => Err(ConfigError::UnknownDielectric(other.to_string())),
        }
    }
}

impl fmt::Display for Dielectric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Physical package outline reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Footprint {
    C1206,
    C0603,
}

impl Footprint {
    /// Footprint file tag as written in the config and in the symbol's
    /// `footprint=` attribute.
    pub fn file_tag(&self) -> &'static str {
        match self {
            Footprint::C1206 => "1206_capacitor.fp",
            Footprint::C0603 => "0603_capacitor.fp",
        }
    }

    /// Short package name used in symbol file names.
    pub fn short_name(&self) -> &'static str {
        match self {
            Footprint::C1206 => "1206",
            Footprint::C0603 => "0603",
        }
    }
}

impl FromStr for Footprint {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1206_capacitor.fp" => Ok(Footprint::C1206),
            "0603_capacitor.fp" => Ok(Footprint::C0603),
            other => Err(ConfigError::UnknownFootprint(other.to_string())),
        }
    }
}

/// Parsed capacitor description. Parsed once, used once.
#[derive(Debug, Clone)]
pub struct CapacitorConfig {
    /// Capacitance in farads.
    pub value: f64,
    pub dielectric: Dielectric,
    /// Rated voltage, carried verbatim and rendered with a `v` suffix.
    pub voltage: String,
    /// Total token length minus one; see [`Capacitance::name_token`].
    pub precision: usize,
    /// Manufacturer part number.
    pub part: String,
    pub footprint: Footprint,
}

impl CapacitorConfig {
    /// Read and parse a config file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let raw = std::fs::read_to_string(path)?;
        raw.parse()
    }

    pub fn capacitance(&self) -> Capacitance {
        Capacitance::from_farads(self.value)
    }

    /// Derive the symbol base name, e.g. `1u0_x7r_50v_1206`.
    pub fn symbol_base_name(&self) -> Result<String, ValueError> {
        let token = self.capacitance().name_token(self.precision)?;
        Ok(format!(
            "{}_{}_{}v_{}",
            token,
            self.dielectric.as_str(),
            self.voltage,
            self.footprint.short_name()
        ))
    }
}

impl FromStr for CapacitorConfig {
    type Err = ConfigError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let mut value = None;
        let mut dielectric = None;
        let mut voltage = None;
        let mut precision = None;
        let mut part = None;
        let mut footprint = None;

        for line in raw.lines() {
            let (key, val) = match line.split_once('=') {
                Some(kv) => kv,
                None => continue,
            };
            let val = val.trim();
            match key.trim() {
                "value" => {
                    value = Some(val.parse::<f64>().map_err(|_| {
                        ConfigError::InvalidNumber {
                            key: "value",
                            value: val.to_string(),
                        }
                    })?)
                }
                "dielectric" => dielectric = Some(val.parse()?),
                "voltage" => voltage = Some(val.to_string()),
                "precision" => {
                    precision = Some(val.parse::<usize>().map_err(|_| {
                        ConfigError::InvalidNumber {
                            key: "precision",
                            value: val.to_string(),
                        }
                    })?)
                }
                "part" => part = Some(val.to_string()),
                "footprint" => footprint = Some(val.parse()?),
                _ => {}
            }
        }

        Ok(CapacitorConfig {
            value: value.ok_or(ConfigError::MissingKey("value"))?,
            dielectric: dielectric.ok_or(ConfigError::MissingKey("dielectric"))?,
            voltage: voltage.ok_or(ConfigError::MissingKey("voltage"))?,
            precision: precision.ok_or(ConfigError::MissingKey("precision"))?,
            part: part.ok_or(ConfigError::MissingKey("part"))?,
            footprint: footprint.ok_or(ConfigError::MissingKey("footprint"))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
value = 1.0e-6
dielectric = x7r
voltage = 50
precision = 2
part = GRM188R61E105KA12D
footprint = 1206_capacitor.fp
";

    #[test]
    fn test_parse_sample_config() {
        let config: CapacitorConfig = SAMPLE.parse().unwrap();
        assert_eq!(config.value, 1.0e-6);
        assert_eq!(config.dielectric, Dielectric::X7r);
        assert_eq!(config.voltage, "50");
        assert_eq!(config.precision, 2);
        assert_eq!(config.part, "GRM188R61E105KA12D");
        assert_eq!(config.footprint, Footprint::C1206);
    }

    #[test]
    fn test_symbol_base_name() {
        let config: CapacitorConfig = SAMPLE.parse().unwrap();
        assert_eq!(config.symbol_base_name().unwrap(), "1u0_x7r_50v_1206");
    }

    #[test]
    fn test_unknown_lines_are_ignored() {
        let raw = format!("# generated\ncolor = beige\n{}", SAMPLE);
        let config: CapacitorConfig = raw.parse().unwrap();
        assert_eq!(config.precision, 2);
    }

    #[test]
    fn test_missing_key() {
        let raw = SAMPLE.replace("part = GRM188R61E105KA12D\n", "");
        let err = raw.parse::<CapacitorConfig>().unwrap_err();
        assert!(matches!(err, ConfigError::MissingKey("part")));
    }

    #[test]
    fn test_invalid_value_number() {
        let raw = SAMPLE.replace("1.0e-6", "one microfarad");
        let err = raw.parse::<CapacitorConfig>().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidNumber { key: "value", .. }));
    }

    #[test]
    fn test_unknown_dielectric() {
        let raw = SAMPLE.replace("x7r", "y5v");
        let err = raw.parse::<CapacitorConfig>().unwrap_err();
        assert!(matches!(err, ConfigError::UnknownDielectric(_)));
    }

    #[test]
    fn test_unknown_footprint() {
        let raw = SAMPLE.replace("1206_capacitor.fp", "0402_capacitor.fp");
        let err = raw.parse::<CapacitorConfig>().unwrap_err();
        assert!(matches!(err, ConfigError::UnknownFootprint(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = CapacitorConfig::from_path(Path::new("no_such_dir/capsym.conf")).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }
}
