//! Command-line parsing.

use std::path::PathBuf;

/// Options for a game session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Seed for the spawn RNG (None = from entropy).
    pub seed: Option<u64>,
    /// Tuning file; None = ~/.gopher-jump/tuning.json if present.
    pub tuning_path: Option<PathBuf>,
    /// Log file; logging is disabled without one.
    pub log_path: Option<PathBuf>,
    /// Show the position readout in the info panel.
    pub debug: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(RunOptions),
    Help,
    Version,
}

/// Parse arguments, excluding the program name.
pub fn parse_args<I, S>(args: I) -> Result<Command, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut options = RunOptions::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_ref() {
            "--help" | "-h" => return Ok(Command::Help),
            "--version" | "-v" => return Ok(Command::Version),
            "--debug" => options.debug = true,
            "--seed" => {
                let value = args.next().ok_or("--seed requires a number")?;
                let seed = value
                    .as_ref()
                    .parse()
                    .map_err(|_| format!("--seed requires a number, got '{}'", value.as_ref()))?;
                options.seed = Some(seed);
            }
            "--tuning" => {
                let value = args.next().ok_or("--tuning requires a file path")?;
                options.tuning_path = Some(PathBuf::from(value.as_ref()));
            }
            "--log" => {
                let value = args.next().ok_or("--log requires a file path")?;
                options.log_path = Some(PathBuf::from(value.as_ref()));
            }
            other => return Err(format!("Unknown argument: {}", other)),
        }
    }

    Ok(Command::Run(options))
}

pub fn usage() -> &'static str {
    "Gopher Jump - jump over the ebifry\n\
     \n\
     Usage: gopher-jump [OPTIONS]\n\
     \n\
     Options:\n\
     \x20 --seed N        Seed the obstacle spawner for a repeatable run\n\
     \x20 --tuning FILE   Load physics/spawn tuning from JSON\n\
     \x20                 (default: ~/.gopher-jump/tuning.json if present)\n\
     \x20 --log FILE      Write logs to FILE (level from RUST_LOG, default info)\n\
     \x20 --debug         Show positions in the info panel\n\
     \x20 --version, -v   Show version information\n\
     \x20 --help, -h      Show this help\n\
     \n\
     Controls: Space/Up/Enter to start and jump, Esc or q to quit."
}
