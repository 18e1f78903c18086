// src/params.rs
//! Request validation: raw JSON bodies in, fully-typed solver requests out.
//!
//! Validation is ordered and short-circuiting: presence, then types, then
//! ranges, then the embedded graph text. The typed request variants only
//! exist once every check has passed, so nothing downstream ever sees a
//! half-validated field.

use serde::Deserialize;
use serde_json::Value;

use crate::errors::{Result, SolveError};
use crate::graph;

/// Upper bound on the requested solver running time (seconds).
pub const MAX_RUNNING_TIME: i64 = 60;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawGaRequest {
    pub h: Option<Value>,
    pub k: Option<Value>,
    pub file_content: Option<Value>,
    pub max_label: Option<Value>,
    pub populations_count: Option<Value>,
    pub population_size: Option<Value>,
    pub mutation_chance: Option<Value>,
    pub elites_count: Option<Value>,
    pub max_generations: Option<Value>,
    pub max_time: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSaRequest {
    pub h: Option<Value>,
    pub k: Option<Value>,
    pub file_content: Option<Value>,
    pub max_label: Option<Value>,
    pub temperature: Option<Value>,
    pub cooling_factor: Option<Value>,
    pub max_iterations: Option<Value>,
    pub max_time: Option<Value>,
}

/// A fully validated genetic-algorithm request.
#[derive(Debug, Clone, PartialEq)]
pub struct GaRequest {
    pub h: i64,
    pub k: i64,
    pub file_content: String,
    pub max_label: i64,
    pub populations_count: i64,
    pub population_size: i64,
    pub mutation_chance: f64,
    pub elites_count: i64,
    pub max_generations: i64,
    pub max_time: i64,
}

/// A fully validated simulated-annealing request.
#[derive(Debug, Clone, PartialEq)]
pub struct SaRequest {
    pub h: i64,
    pub k: i64,
    pub file_content: String,
    pub max_label: i64,
    pub temperature: f64,
    pub cooling_factor: f64,
    pub max_iterations: i64,
    pub max_time: i64,
}

pub fn validate_ga(raw: &RawGaRequest) -> Result<GaRequest> {
    let (
        Some(h),
        Some(k),
        Some(file_content),
        Some(max_label),
        Some(populations_count),
        Some(population_size),
        Some(mutation_chance),
        Some(elites_count),
        Some(max_generations),
        Some(max_time),
    ) = (
        present(&raw.h),
        present(&raw.k),
        present(&raw.file_content),
        present(&raw.max_label),
        present(&raw.populations_count),
        present(&raw.population_size),
        present(&raw.mutation_chance),
        present(&raw.elites_count),
        present(&raw.max_generations),
        present(&raw.max_time),
    )
    else {
        return Err(SolveError::MissingParameters);
    };

    let file_content = file_content.as_str().ok_or(SolveError::InvalidTypes)?;
    let (
        Some(h),
        Some(k),
        Some(max_label),
        Some(populations_count),
        Some(population_size),
        Some(mutation_chance),
        Some(elites_count),
        Some(max_generations),
        Some(max_time),
    ) = (
        coerce_int(h),
        coerce_int(k),
        coerce_int(max_label),
        coerce_int(populations_count),
        coerce_int(population_size),
        coerce_float(mutation_chance),
        coerce_int(elites_count),
        coerce_int(max_generations),
        coerce_int(max_time),
    )
    else {
        return Err(SolveError::InvalidTypes);
    };

    let values_ok = h >= 0
        && k >= 0
        && max_label >= 1
        && populations_count >= 1
        && population_size >= 1
        && (0.0..=1.0).contains(&mutation_chance)
        && (0..=population_size).contains(&elites_count)
        && max_generations >= 1
        && (1..=MAX_RUNNING_TIME).contains(&max_time);
    if !values_ok {
        return Err(SolveError::InvalidValues);
    }

    graph::parse(file_content, max_label)
        .map_err(|e| SolveError::BadInputFile { line: e.line })?;

    Ok(GaRequest {
        h,
        k,
        file_content: file_content.to_string(),
        max_label,
        populations_count,
        population_size,
        mutation_chance,
        elites_count,
        max_generations,
        max_time,
    })
}

pub fn validate_sa(raw: &RawSaRequest) -> Result<SaRequest> {
    let (
        Some(h),
        Some(k),
        Some(file_content),
        Some(max_label),
        Some(temperature),
        Some(cooling_factor),
        Some(max_iterations),
        Some(max_time),
    ) = (
        present(&raw.h),
        present(&raw.k),
        present(&raw.file_content),
        present(&raw.max_label),
        present(&raw.temperature),
        present(&raw.cooling_factor),
        present(&raw.max_iterations),
        present(&raw.max_time),
    )
    else {
        return Err(SolveError::MissingParameters);
    };

    let file_content = file_content.as_str().ok_or(SolveError::InvalidTypes)?;
    let (
        Some(h),
        Some(k),
        Some(max_label),
        Some(temperature),
        Some(cooling_factor),
        Some(max_iterations),
        Some(max_time),
    ) = (
        coerce_int(h),
        coerce_int(k),
        coerce_int(max_label),
        coerce_float(temperature),
        coerce_float(cooling_factor),
        coerce_int(max_iterations),
        coerce_int(max_time),
    )
    else {
        return Err(SolveError::InvalidTypes);
    };

    // temperature must be positive and the cooling factor strictly inside (0, 1)
    let values_ok = h >= 0
        && k >= 0
        && max_label >= 1
        && temperature > 0.0
        && cooling_factor > 0.0
        && cooling_factor < 1.0
        && max_iterations >= 1
        && (1..=MAX_RUNNING_TIME).contains(&max_time);
    if !values_ok {
        return Err(SolveError::InvalidValues);
    }

    graph::parse(file_content, max_label)
        .map_err(|e| SolveError::BadInputFile { line: e.line })?;

    Ok(SaRequest {
        h,
        k,
        file_content: file_content.to_string(),
        max_label,
        temperature,
        cooling_factor,
        max_iterations,
        max_time,
    })
}

/// A field counts as present when it was sent and is not JSON `null`.
fn present(field: &Option<Value>) -> Option<&Value> {
    match field {
        Some(Value::Null) | None => None,
        Some(value) => Some(value),
    }
}

/// Reads a JSON number or numeric string as a finite float.
fn coerce_float(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    if number.is_nan() {
        return None;
    }
    Some(number)
}

/// Reads a JSON number or numeric string holding an integral value, so
/// `"3"` and `3.0` coerce while `"3.5"` is a type failure.
fn coerce_int(value: &Value) -> Option<i64> {
    let number = coerce_float(value)?;
    if number.is_finite() && number.fract() == 0.0 {
        Some(number as i64)
    } else {
        None
    }
}
