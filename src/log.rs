use std::fs::{File, OpenOptions};
use std::path::Path;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::JsonFields;
use tracing_subscriber::prelude::*;

use crate::config;

/// Initializes tracing with a JSON layer appending to `path`, or to the
/// default location under the data directory. Logs never touch stdout,
/// which carries the protocol stream.
pub fn init(path: Option<&Path>) -> anyhow::Result<()> {
    let log_path = match path {
        Some(path) => path.to_path_buf(),
        None => config::log_path(),
    };

    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent).inspect_err(|e| {
            eprintln!("Failed to create log directory: {}", e);
        })?;
    }

    let log_file = open_log_file(&log_path).inspect_err(|e| {
        eprintln!("Failed to open log file {:?}: {}", log_path, e);
    })?;

    let json_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_writer(log_file)
        .fmt_fields(JsonFields::default());

    // Use RUST_LOG if set, otherwise default to INFO
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .init();

    Ok(())
}

fn open_log_file(path: &Path) -> std::io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}
