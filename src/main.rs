//! `navcanvas <script.json>`: replay an interaction script and print every host
//! call as one JSON object per line.

use std::path::PathBuf;
use std::process::ExitCode;

use navcanvas::config::ModeConfig;
use navcanvas::replay::{ReplayError, Script};
use tracing::{error, info};

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let Some(path) = std::env::args_os().nth(1).map(PathBuf::from) else {
        error!("usage: navcanvas <script.json>");
        return ExitCode::from(2);
    };

    match run(&path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(path = %path.display(), error = %e, "replay failed");
            ExitCode::FAILURE
        }
    }
}

fn run(path: &std::path::Path) -> Result<(), ReplayError> {
    let mut script = Script::load(path)?;
    script.config.get_or_insert_with(ModeConfig::from_env);
    info!(path = %path.display(), steps = script.steps.len(), "replaying script");

    let host = script.run()?;
    for call in &host.calls {
        println!("{}", serde_json::to_string(call)?);
    }
    Ok(())
}
