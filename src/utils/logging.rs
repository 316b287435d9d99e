//! File-backed logging.
//!
//! The terminal belongs to the TUI while the game runs, so log output goes to
//! a file and is only enabled when one is requested.

use super::persistence::create_with_parents;
use env_logger::{Env, Target};
use std::io;
use std::path::Path;

/// Install `env_logger` writing to `path`. Level comes from `RUST_LOG`,
/// defaulting to `info`.
pub fn init_file_logger(path: &Path) -> io::Result<()> {
    let file = create_with_parents(path)?;
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
}
