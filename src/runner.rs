// src/runner.rs
//! Solver invocation: scratch-file handling, argument building, and the
//! bounded subprocess run.
//!
//! Each call owns exactly one scratch file for its lifetime. The file is
//! written immediately before the spawn, read only by the solver, and removed
//! best-effort on every path out of the run.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::{Duration, Instant};

use tokio::process::Command;
use tokio::time::timeout;
use uuid::Uuid;

use crate::config::AppConfig;
use crate::errors::{Result, SolveError};
use crate::params::{GaRequest, SaRequest};

/// Extra wall-clock allowance on top of the requested `maxTime` before the
/// watchdog gives up on a solver that failed to self-terminate.
pub const WATCHDOG_MARGIN_SECS: u64 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverKind {
    Genetic,
    Annealing,
}

impl SolverKind {
    pub fn executable_name(self) -> &'static str {
        match self {
            SolverKind::Genetic => "GeneticAlgorithm",
            SolverKind::Annealing => "SimulatedAnnealing",
        }
    }
}

/// Runs the genetic-algorithm solver and returns its raw stdout.
pub async fn run_genetic(config: &AppConfig, request: &GaRequest) -> Result<String> {
    let scratch = scratch_path(config);
    let args = ga_args(request, &scratch);
    run_bounded(
        config,
        SolverKind::Genetic,
        &scratch,
        &request.file_content,
        request.max_time,
        args,
    )
    .await
}

/// Runs the simulated-annealing solver and returns its raw stdout.
pub async fn run_annealing(config: &AppConfig, request: &SaRequest) -> Result<String> {
    let scratch = scratch_path(config);
    let args = sa_args(request, &scratch);
    run_bounded(
        config,
        SolverKind::Annealing,
        &scratch,
        &request.file_content,
        request.max_time,
        args,
    )
    .await
}

/// Strictly ordered positional argv for the GA executable.
fn ga_args(request: &GaRequest, scratch: &Path) -> Vec<String> {
    vec![
        request.h.to_string(),
        request.k.to_string(),
        scratch.display().to_string(),
        request.max_label.to_string(),
        request.populations_count.to_string(),
        request.population_size.to_string(),
        request.mutation_chance.to_string(),
        request.elites_count.to_string(),
        request.max_generations.to_string(),
        request.max_time.to_string(),
    ]
}

/// Strictly ordered positional argv for the SA executable.
fn sa_args(request: &SaRequest, scratch: &Path) -> Vec<String> {
    vec![
        request.h.to_string(),
        request.k.to_string(),
        scratch.display().to_string(),
        request.max_label.to_string(),
        request.temperature.to_string(),
        request.cooling_factor.to_string(),
        request.max_iterations.to_string(),
        request.max_time.to_string(),
    ]
}

fn scratch_path(config: &AppConfig) -> PathBuf {
    config.scratch_dir.join(format!("{}.in", Uuid::new_v4()))
}

/// Writes the graph text, runs the solver, and removes the scratch file no
/// matter how the run ends.
async fn run_bounded(
    config: &AppConfig,
    kind: SolverKind,
    scratch: &Path,
    file_content: &str,
    max_time: i64,
    args: Vec<String>,
) -> Result<String> {
    tokio::fs::write(scratch, file_content).await?;

    let outcome = capture_output(config, kind, max_time, args).await;

    if let Err(e) = tokio::fs::remove_file(scratch).await {
        log::debug!(
            "could not remove scratch file {}: {}",
            scratch.display(),
            e
        );
    }

    outcome
}

async fn capture_output(
    config: &AppConfig,
    kind: SolverKind,
    max_time: i64,
    args: Vec<String>,
) -> Result<String> {
    let executable = config.solver_path(kind);
    let started = Instant::now();

    let child = Command::new(&executable)
        .args(&args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|source| SolveError::Spawn {
            solver: kind.executable_name().to_string(),
            source,
        })?;

    // the solver is expected to self-terminate within maxTime; the watchdog
    // bound only exists so a hung solver cannot hang the request
    let bound = Duration::from_secs(max_time as u64 + WATCHDOG_MARGIN_SECS);
    let output = match timeout(bound, child.wait_with_output()).await {
        Ok(waited) => waited?,
        Err(_) => {
            log::warn!(
                "{} exceeded its {}s bound, killing it",
                kind.executable_name(),
                bound.as_secs()
            );
            return Err(SolveError::Timeout);
        }
    };

    if !output.status.success() {
        return Err(SolveError::NonZeroExit {
            status: output.status,
        });
    }

    if !output.stderr.is_empty() {
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        return Err(SolveError::SolverStderr(stderr));
    }

    log::info!(
        "{} finished in {:.2?}",
        kind.executable_name(),
        started.elapsed()
    );

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
