//! Capacitance value formatting for symbol names and schematic labels.
//!
//! A value is rendered in one of three magnitude tiers (micro, nano,
//! pico). Each (value, precision) pair produces two related strings: a
//! filename-safe token with the tier letter in place of the decimal
//! point (`1u0`, `2n2`) and a display label with the decimal point
//! retained and the tier letter appended (`1.0u`, `2.2n`).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValueError {
    #[error("capacitance {0} F is below the 1 pF formatting floor")]
    BelowPicoFloor(f64),
    #[error("invalid capacitance literal: {0}")]
    InvalidLiteral(String),
}

/// Magnitude tier used when rendering a capacitance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Micro,
    Nano,
    Pico,
}

impl Tier {
    /// Single-letter suffix used in tokens and labels.
    pub fn suffix(&self) -> char {
        match self {
            Tier::Micro => 'u',
            Tier::Nano => 'n',
            Tier::Pico => 'p',
        }
    }
}

/// A capacitance in farads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Capacitance(f64);

impl Capacitance {
    pub fn from_farads(farads: f64) -> Self {
        Capacitance(farads)
    }

    pub fn farads(&self) -> f64 {
        self.0
    }

    /// Tier the value falls in. Values below 1 pF have no tier.
    pub fn tier(&self) -> Result<Tier, ValueError> {
        let v = self.0;
        if v * 1e6 >= 1.0 {
            Ok(Tier::Micro)
        } else if v * 1e9 >= 1.0 {
            Ok(Tier::Nano)
        } else if v * 1e12 >= 1.0 {
            Ok(Tier::Pico)
        } else {
            Err(ValueError::BelowPicoFloor(v))
        }
    }

    /// Integer digits at the tier magnitude plus the remainder at the
    /// next tier down. The micro tier truncates the remainder, the nano
    /// tier rounds it, and the pico tier has none.
    fn digits(&self) -> Result<(Tier, i64, Option<i64>), ValueError> {
        let v = self.0;
        match self.tier()? {
            Tier::Micro => {
                let whole = (v * 1e6).floor() as i64;
                let frac = ((v - whole as f64 / 1e6) * 1e9) as i64;
                Ok((Tier::Micro, whole, Some(frac)))
            }
            Tier::Nano => {
                let whole = (v * 1e9).floor() as i64;
                let frac = ((v - whole as f64 / 1e9) * 1e12).round() as i64;
                Ok((Tier::Nano, whole, Some(frac)))
            }
            Tier::Pico => {
                let whole = (v * 1e12).floor() as i64;
                Ok((Tier::Pico, whole, None))
            }
        }
    }

    /// Filename-safe token, e.g. `1u0` for 1.0 uF at precision 2.
    ///
    /// Padded with trailing zeros up to `precision + 1` characters and
    /// truncated from the right while longer, never past the tier
    /// letter.
    pub fn name_token(&self, precision: usize) -> Result<String, ValueError> {
        let (tier, whole, frac) = self.digits()?;
        let mut token = match frac {
            Some(frac) => format!("{}{}{}", whole, tier.suffix(), frac),
            None => format!("{}{}", whole, tier.suffix()),
        };
        while token.len() < precision + 1 {
            token.push('0');
        }
        while token.len() > precision + 1 {
            if token.ends_with(['u', 'n', 'p']) {
                break;
            }
            token.pop();
        }
        Ok(token)
    }

    /// Schematic label, e.g. `1.0u` for 1.0 uF at precision 2.
    pub fn display(&self, precision: usize) -> Result<String, ValueError> {
        let (tier, whole, frac) = self.digits()?;
        let mut label = match frac {
            Some(frac) => format!("{}.{}", whole, frac),
            None => format!("{}.", whole),
        };
        while label.len() < precision + 1 {
            label.push('0');
        }
        while label.len() > precision + 1 {
            label.pop();
        }
        if label.ends_with('.') {
            label.pop();
        }
        label.push(tier.suffix());
        Ok(label)
    }
}

/// Parse a capacitance label (`100n`, `4.7uF`, `22pF`) back to farads.
pub fn parse_capacitance(label: &str) -> Result<Capacitance, ValueError> {
    let lowered = label.trim().to_lowercase();

    let mut num = String::new();
    let mut unit = String::new();
    let mut found_digit = false;

    for ch in lowered.chars() {
        if ch.is_ascii_digit() || ch == '.' || ch == '-' {
            num.push(ch);
            found_digit = true;
        } else if found_digit {
            unit.push(ch);
        }
    }

    let num = num
        .parse::<f64>()
        .map_err(|_| ValueError::InvalidLiteral(label.to_string()))?;

    let multiplier = match unit.trim() {
        "pf" | "p" => 1e-12,
        "nf" | "n" => 1e-9,
        "uf" | "u" | "µf" | "µ" => 1e-6,
        "f" => 1.0,
        _ => return Err(ValueError::InvalidLiteral(label.to_string())),
    };

    Ok(Capacitance::from_farads(num * multiplier))
}
