use config::{app, Config, Mode};
use error::CliResult;
use log::{debug, info};
use report::Report;
use std::io::{self, Write};

mod config;
mod error;
mod logging;
mod report;

fn run() -> CliResult {
    let matches = app().get_matches();
    let config = Config::from_matches(&matches)?;

    logging::init(config.verbosity)?;
    debug!("{:?}", config);

    match config.mode {
        Mode::Single(percent) => info!("Adjusting {} by {}", config.color, percent),
        Mode::Range { start, end, step } => info!(
            "Sweeping {} from {} to {} in steps of {}",
            config.color,
            start.to_string().trim(),
            end.to_string().trim(),
            step.to_string().trim()
        ),
    }

    let report = Report::build(&config)?;
    if let Report::Range { adjustments, .. } = &report {
        debug!("Sweep produced {} adjustments", adjustments.len());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report.render(&mut out)?;
    out.flush()?;

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
