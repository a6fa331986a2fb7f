use crate::error::{CliError, CliResult};
use clap::{clap_app, App, ArgMatches};
use rgb::{Percent, Rgb};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Mode {
    Single(Percent),
    Range {
        start: Percent,
        end: Percent,
        step: Percent,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// The color exactly as it was typed, used as the heading of the report.
    pub hex: String,
    pub color: Rgb,
    pub mode: Mode,
    pub verbosity: u64,
}

pub fn app() -> App<'static, 'static> {
    clap_app!(shade =>
        (version: env!("CARGO_PKG_VERSION"))
        (about: "Brightens or darkens a hex color by a percentage, or by every step of a percentage range")
        (@setting AllowLeadingHyphen)
        (@arg VERBOSE: -v --verbose +multiple "Logs what is being computed to stderr. Repeat for more detail")
        (@arg HEX: +required "The color to adjust, e.g. #FF0000 or FF0000")
        (@arg PERCENT: +required +multiple "Either <percent> or <start> <end> <step>, e.g. -10 or -50 50 10")
    )
    .after_help(
        "EXAMPLES:\n    \
         shade #FF0000 -10          Single adjustment\n    \
         shade #FF0000 -50 50 10    Range from -50% to +50% in 10% steps\n    \
         shade 2E0000 -5            Hex without # also works",
    )
}

impl Config {
    pub fn from_matches(matches: &ArgMatches) -> CliResult<Self> {
        let hex = matches.value_of("HEX").unwrap_or_default().to_string();
        let percents = matches
            .values_of("PERCENT")
            .map(|values| values.collect::<Vec<_>>())
            .unwrap_or_default();

        let mode = match percents.as_slice() {
            [percent] => Mode::Single(percent.parse()?),
            [start, end, step] => Mode::Range {
                start: start.parse()?,
                end: end.parse()?,
                step: step.parse()?,
            },
            other => return Err(CliError::InvalidArgumentCount(other.len() + 1)),
        };

        Ok(Self {
            color: hex.parse()?,
            hex,
            mode,
            verbosity: matches.occurrences_of("VERBOSE"),
        })
    }
}
