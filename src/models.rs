// src/models.rs
use serde::Serialize;

/// Successful genetic-algorithm response, field names per the wire contract.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GaResponse {
    pub time: f64,
    pub iterations: i64,
    pub solution: String,
    pub is_correct: bool,
    pub conflicting_vertexes: i64,
    pub chromatic_number: i64,
    pub fitness: f64,
    pub history: String,
    /// Always `null` on the success path; kept in the payload so clients can
    /// branch on a single field.
    pub error_msg: Option<String>,
}

/// Successful simulated-annealing response.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SaResponse {
    pub time: f64,
    pub iterations: i64,
    pub temperature: f64,
    pub solution: String,
    pub is_correct: bool,
    pub conflicting_vertexes: i64,
    pub chromatic_number: i64,
    pub fitness: f64,
    pub error_msg: Option<String>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error_msg: String,
}
