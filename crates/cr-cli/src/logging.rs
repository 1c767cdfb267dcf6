//! Logger setup. `RUST_LOG` overrides the default levels.

use std::fs::File;
use std::path::Path;

use env_logger::{Builder, Env, Target};

/// Log warnings and errors to stderr.
pub fn init_stderr() {
    Builder::from_env(Env::default().default_filter_or("warn")).init();
}

/// Log to `path` at info level, or not at all when no path is given.
///
/// The interactive game owns the terminal, so it never logs to stderr.
pub fn init_to_file(path: Option<&Path>) -> Result<(), String> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .map_err(|e| format!("cannot open log file {}: {e}", path.display()))?;
    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}
