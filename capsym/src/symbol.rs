//! Symbol emission: template copy plus appended gEDA text attributes.
//!
//! A symbol is the orientation's template file copied byte-for-byte,
//! followed by three `T` text records carrying the footprint, part
//! number and formatted value attributes at fixed anchor coordinates.

use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::config::CapacitorConfig;

const ATTRIBUTE_COLOR: u8 = 8;
const ATTRIBUTE_SIZE: u8 = 10;

/// Symbol orientations emitted for every capacitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub const ALL: [Orientation; 2] = [Orientation::Horizontal, Orientation::Vertical];

    /// Suffix in the emitted file name (`<base>_<suffix>.sym`).
    pub fn file_suffix(&self) -> &'static str {
        match self {
            Orientation::Horizontal => "horz",
            Orientation::Vertical => "vert",
        }
    }

    /// Default template file for this orientation.
    pub fn default_template(&self) -> &'static str {
        match self {
            Orientation::Horizontal => "capsym_h.tpl",
            Orientation::Vertical => "capsym_v.tpl",
        }
    }

    /// Anchor coordinates for the footprint, part and value attributes
    /// in this orientation's template.
    fn anchors(&self) -> [(i64, i64); 3] {
        match self {
            Orientation::Horizontal => [(0, 1400), (0, 1195), (1200, 0)],
            Orientation::Vertical => [(100, 1400), (100, 1200), (500, 400)],
        }
    }
}

/// Emission outcome for one output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolStatus {
    Created,
    SkippedExists,
}

/// A gschem `T` record: position and rendering flags for one text item.
///
/// Field order in the rendered line is `T x y color size visibility
/// show_name_value angle alignment num_lines`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextAttribute {
    pub x: i64,
    pub y: i64,
    pub color: u8,
    pub size: u8,
    pub visibility: u8,
    pub show_name_value: u8,
    pub angle: u16,
    pub alignment: u8,
    pub num_lines: u8,
}

impl TextAttribute {
    /// Hidden attribute anchor (footprint, part number).
    pub fn hidden(x: i64, y: i64) -> Self {
        TextAttribute {
            x,
            y,
            color: ATTRIBUTE_COLOR,
            size: ATTRIBUTE_SIZE,
            visibility: 0,
            show_name_value: 0,
            angle: 0,
            alignment: 0,
            num_lines: 1,
        }
    }

    /// Visible attribute anchor showing the value only (value label).
    pub fn visible(x: i64, y: i64) -> Self {
        TextAttribute {
            visibility: 1,
            show_name_value: 1,
            ..Self::hidden(x, y)
        }
    }
}

impl fmt::Display for TextAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "T {} {} {} {} {} {} {} {} {}",
            self.x,
            self.y,
            self.color,
            self.size,
            self.visibility,
            self.show_name_value,
            self.angle,
            self.alignment,
            self.num_lines
        )
    }
}

/// One `attribute=value` pair anchored by a `T` record.
#[derive(Debug, Clone)]
pub struct Annotation {
    pub anchor: TextAttribute,
    pub name: &'static str,
    pub value: String,
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}={}", self.anchor, self.name, self.value)
    }
}

/// Build the three annotations appended to a symbol of the given
/// orientation: footprint, part number, formatted value.
pub fn annotations(
    orientation: Orientation,
    config: &CapacitorConfig,
    value_label: &str,
) -> Vec<Annotation> {
    let [foot, part, value] = orientation.anchors();
    vec![
        Annotation {
            anchor: TextAttribute::hidden(foot.0, foot.1),
            name: "footprint",
            value: config.footprint.file_tag().to_string(),
        },
        Annotation {
            anchor: TextAttribute::hidden(part.0, part.1),
            name: "part",
            value: config.part.clone(),
        },
        Annotation {
            anchor: TextAttribute::visible(value.0, value.1),
            name: "value",
            value: value_label.to_string(),
        },
    ]
}

/// Copy `template` to `output` and append the annotations.
///
/// Returns [`SymbolStatus::SkippedExists`] without touching the file
/// when `output` is already present.
pub fn write_symbol(
    template: &Path,
    output: &Path,
    annotations: &[Annotation],
) -> Result<SymbolStatus, std::io::Error> {
    if output.exists() {
        tracing::warn!("{} already exists, skipping", output.display());
        return Ok(SymbolStatus::SkippedExists);
    }

    fs::copy(template, output)?;
    let mut out = OpenOptions::new().append(true).open(output)?;
    for annotation in annotations {
        writeln!(out, "{}", annotation)?;
    }

    tracing::info!("created {}", output.display());
    Ok(SymbolStatus::Created)
}
