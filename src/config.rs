use std::{
    path::{Path, PathBuf},
    str::FromStr,
    sync::Arc,
};

use eyre::{bail, eyre, WrapErr};

pub const USAGE: &str = "usage: tcp-blast <target-address> <connection-count> <file-path>";

/// Startup inputs, taken as positional arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub target: String,
    pub connections: usize,
    pub file: PathBuf,
}

impl Config {
    pub fn from_args(mut args: impl Iterator<Item = String>) -> eyre::Result<Self> {
        let target = args
            .next()
            .ok_or_else(|| eyre!("missing target address\n{USAGE}"))?;

        let connections = args
            .next()
            .ok_or_else(|| eyre!("missing connection count\n{USAGE}"))?;
        let connections = usize::from_str(&connections).wrap_err_with(|| {
            format!("connection count should be a valid number, got {connections:?}")
        })?;
        if connections == 0 {
            bail!("connection count should be at least 1");
        }

        let file = args
            .next()
            .ok_or_else(|| eyre!("missing payload file path\n{USAGE}"))?;

        Ok(Self {
            target,
            connections,
            file: PathBuf::from(file),
        })
    }
}

/// Reads the payload file once; every worker shares the same immutable bytes.
pub fn load_payload(path: &Path) -> eyre::Result<Arc<[u8]>> {
    let bytes = std::fs::read(path)
        .wrap_err_with(|| format!("unable to read payload file {}", path.display()))?;
    Ok(Arc::from(bytes.into_boxed_slice()))
}
