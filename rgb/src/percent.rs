use crate::{Error, Result};
use std::{fmt, str::FromStr};

/// A relative brightness change. `0` keeps a color, `-100` turns it black, positive values
/// brighten it.
#[derive(Default, Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Percent(pub f64);

impl Percent {
    pub const ZERO: Percent = Percent(0.0);

    /// The multiplier applied to every channel.
    pub fn factor(self) -> f64 {
        1.0 + self.0 / 100.0
    }
}

impl FromStr for Percent {
    type Err = Error;

    /// Accepts any finite decimal number, optionally followed by `%`.
    fn from_str(s: &str) -> Result<Self> {
        let number = s.strip_suffix('%').unwrap_or(s);

        match number.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Percent(value)),
            _ => Err(Error::InvalidPercent(s.to_string())),
        }
    }
}

/// Renders as a signed label: `+25%`, `-25%`, or `  0%` so zero lines up with two-digit
/// values in a column.
impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = if self.0 == 0.0 {
            String::from("  0%")
        } else if self.0 > 0.0 {
            format!("+{}%", self.0)
        } else {
            format!("{}%", self.0)
        };

        f.pad(&label)
    }
}
