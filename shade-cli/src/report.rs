use crate::config::{Config, Mode};
use rgb::{Adjustment, Percent, Rgb};
use std::io::{self, Write};

const BOX_WIDTH: usize = 76;
const TABLE_WIDTH: usize = 37;

/// Everything that gets printed, computed up front so that no output is written when the
/// input turns out to be invalid.
#[derive(Debug, PartialEq)]
pub enum Report {
    Single {
        hex: String,
        original: Rgb,
        percent: Percent,
        adjusted: Rgb,
    },
    Range {
        hex: String,
        original: Rgb,
        adjustments: Vec<Adjustment>,
    },
}

impl Report {
    pub fn build(config: &Config) -> rgb::Result<Self> {
        let original = config.color;
        let hex = config.hex.clone();

        Ok(match config.mode {
            Mode::Single(percent) => Report::Single {
                hex,
                original,
                percent,
                adjusted: original.adjusted(percent),
            },
            Mode::Range { start, end, step } => Report::Range {
                hex,
                original,
                adjustments: original.sweep(start, end, step)?,
            },
        })
    }

    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self {
            Report::Single {
                hex,
                original,
                percent,
                adjusted,
            } => {
                writeln!(out)?;
                writeln!(out, "Original: {} → RGB{}", hex, triple(*original))?;
                writeln!(out, "Adjusted: {} → RGB{}", adjusted, triple(*adjusted))?;
                writeln!(out, "Change:   {}", percent)?;
                writeln!(out)?;
                writeln!(
                    out,
                    "For lipgloss: Background(lipgloss.Color(\"{}\"))",
                    adjusted
                )?;
            }
            Report::Range {
                hex,
                original,
                adjustments,
            } => {
                writeln!(out)?;
                writeln!(out, "┌{}┐", "─".repeat(BOX_WIDTH))?;
                writeln!(
                    out,
                    "│  Intensity Variations for {} (RGB: {}, {}, {})",
                    hex,
                    original.red(),
                    original.green(),
                    original.blue()
                )?;
                writeln!(out, "└{}┘", "─".repeat(BOX_WIDTH))?;
                writeln!(out)?;

                writeln!(out, "Percent    Hex        RGB")?;
                writeln!(out, "{}", "─".repeat(TABLE_WIDTH))?;
                for Adjustment { percent, color } in adjustments {
                    writeln!(out, "{:<8} {:<10} {}", percent, color, triple(*color))?;
                }

                writeln!(out)?;
                writeln!(out, "For lipgloss (Go):")?;
                for Adjustment { percent, color } in adjustments {
                    writeln!(
                        out,
                        "  {}: lipgloss.Color(\"{}\")",
                        percent.to_string().trim(),
                        color
                    )?;
                }
            }
        }

        Ok(())
    }
}

fn triple(color: Rgb) -> String {
    format!("({}, {}, {})", color.red(), color.green(), color.blue())
}
