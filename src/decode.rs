// src/decode.rs
//! Decoding of solver standard output into typed responses.
//!
//! Both solvers print a fixed sequence of newline-separated fields. Decoding
//! is positional and strict: a missing line or an unreadable numeric field is
//! a fatal decode error, never a silent default.

use crate::errors::{Result, SolveError};
use crate::models::{GaResponse, SaResponse};

/// GA stdout: time, iterations, solution, isCorrect, conflicting vertexes,
/// chromatic number, fitness, history.
pub fn decode_ga(stdout: &str) -> Result<GaResponse> {
    let cleaned = stdout.replace('\r', "");
    let lines: Vec<&str> = cleaned.split('\n').collect();

    Ok(GaResponse {
        time: float_field(&lines, 0, "time")?,
        iterations: int_field(&lines, 1, "iterations")?,
        solution: line_at(&lines, 2)?.trim().to_string(),
        is_correct: line_at(&lines, 3)? == "1",
        conflicting_vertexes: int_field(&lines, 4, "conflictingVertexes")?,
        chromatic_number: int_field(&lines, 5, "chromaticNumber")?,
        fitness: float_field(&lines, 6, "fitness")?,
        history: line_at(&lines, 7)?.to_string(),
        error_msg: None,
    })
}

/// SA stdout: time, iterations, temperature, solution, isCorrect,
/// conflicting vertexes, chromatic number, fitness.
pub fn decode_sa(stdout: &str) -> Result<SaResponse> {
    let cleaned = stdout.replace('\r', "");
    let lines: Vec<&str> = cleaned.split('\n').collect();

    Ok(SaResponse {
        time: float_field(&lines, 0, "time")?,
        iterations: int_field(&lines, 1, "iterations")?,
        temperature: float_field(&lines, 2, "temperature")?,
        solution: line_at(&lines, 3)?.trim().to_string(),
        is_correct: line_at(&lines, 4)? == "1",
        conflicting_vertexes: int_field(&lines, 5, "conflictingVertexes")?,
        chromatic_number: int_field(&lines, 6, "chromaticNumber")?,
        fitness: float_field(&lines, 7, "fitness")?,
        error_msg: None,
    })
}

fn line_at<'a>(lines: &[&'a str], index: usize) -> Result<&'a str> {
    lines
        .get(index)
        .copied()
        .ok_or(SolveError::TruncatedOutput { line: index + 1 })
}

fn float_field(lines: &[&str], index: usize, field: &'static str) -> Result<f64> {
    let raw = line_at(lines, index)?;
    raw.trim()
        .parse::<f64>()
        .map_err(|_| SolveError::MalformedField {
            field,
            value: raw.to_string(),
        })
}

fn int_field(lines: &[&str], index: usize, field: &'static str) -> Result<i64> {
    let raw = line_at(lines, index)?;
    raw.trim()
        .parse::<i64>()
        .map_err(|_| SolveError::MalformedField {
            field,
            value: raw.to_string(),
        })
}
