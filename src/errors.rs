// src/errors.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SolveError {
    #[error("missing request parameters")]
    MissingParameters,

    #[error("request parameters have invalid types")]
    InvalidTypes,

    #[error("request parameters have out-of-range values")]
    InvalidValues,

    #[error("invalid input file format at line {line}")]
    BadInputFile { line: usize },

    #[error("solver i/o failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to spawn solver '{solver}': {source}")]
    Spawn {
        solver: String,
        source: std::io::Error,
    },

    #[error("solver did not finish within its time bound")]
    Timeout,

    #[error("solver exited with {status}")]
    NonZeroExit { status: std::process::ExitStatus },

    #[error("solver wrote to its error stream: {0}")]
    SolverStderr(String),

    #[error("solver output ended before line {line}")]
    TruncatedOutput { line: usize },

    #[error("unreadable '{field}' field in solver output: {value:?}")]
    MalformedField { field: &'static str, value: String },

    #[error("configuration error: {0}")]
    Config(String),
}

impl SolveError {
    /// Message shown to the API caller. Validation failures carry detail;
    /// process and decode failures are masked so internal paths and solver
    /// diagnostics never reach the client.
    pub fn user_message(&self) -> String {
        match self {
            SolveError::MissingParameters => "Please provide all parameters!".to_string(),
            SolveError::InvalidTypes => "Please verify parameter types!".to_string(),
            SolveError::InvalidValues => "Please double check parameter values!".to_string(),
            SolveError::BadInputFile { line } => {
                format!("Invalid input file format! (Line: {})", line)
            }
            _ => "Something went wrong!".to_string(),
        }
    }

    /// True for failures whose detail is masked in the HTTP response and
    /// should therefore be logged server-side.
    pub fn is_internal(&self) -> bool {
        !matches!(
            self,
            SolveError::MissingParameters
                | SolveError::InvalidTypes
                | SolveError::InvalidValues
                | SolveError::BadInputFile { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, SolveError>;
