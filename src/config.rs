// src/config.rs
use std::path::PathBuf;

use crate::errors::{Result, SolveError};
use crate::runner::SolverKind;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_SOLVER_BIN_DIR: &str = "./bin";
const DEFAULT_SCRATCH_DIR: &str = "./tmp";

/// High-level application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port the HTTP server binds to (`PORT`).
    pub port: u16,
    /// Directory holding the solver executables (`SOLVER_BIN_DIR`).
    pub solver_bin_dir: PathBuf,
    /// Directory for per-request scratch files (`SCRATCH_DIR`).
    pub scratch_dir: PathBuf,
}

impl AppConfig {
    /// Load configuration from environment variables, with defaults for
    /// everything so a bare `cargo run` works out of the box.
    pub fn from_env() -> Result<Self> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| SolveError::Config(format!("invalid PORT value: {}", raw)))?,
            Err(_) => DEFAULT_PORT,
        };

        let solver_bin_dir = std::env::var("SOLVER_BIN_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_SOLVER_BIN_DIR));

        let scratch_dir = std::env::var("SCRATCH_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_SCRATCH_DIR));

        Ok(AppConfig {
            port,
            solver_bin_dir,
            scratch_dir,
        })
    }

    /// Full path of the executable for a solver kind.
    pub fn solver_path(&self, kind: SolverKind) -> PathBuf {
        self.solver_bin_dir.join(kind.executable_name())
    }

    /// Create the scratch directory before the first request needs it.
    pub fn ensure_scratch_dir(&self) -> Result<()> {
        std::fs::create_dir_all(&self.scratch_dir)?;
        Ok(())
    }
}
