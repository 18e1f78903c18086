// src/api/handlers/solve.rs
//! The two solver endpoints. Each request runs the same pipeline:
//! validate the body, invoke the solver, decode its stdout, respond.
//! Any failing stage short-circuits straight to the response; there are
//! no retries.

use actix_web::{web, HttpResponse, Result};

use crate::api::AppState;
use crate::decode;
use crate::errors::SolveError;
use crate::models::ErrorResponse;
use crate::params::{self, RawGaRequest, RawSaRequest};
use crate::runner;

pub async fn solve_genetic(
    state: web::Data<AppState>,
    body: web::Json<RawGaRequest>,
) -> Result<HttpResponse> {
    let request = match params::validate_ga(&body) {
        Ok(request) => request,
        Err(e) => return Ok(reject(e)),
    };

    let stdout = match runner::run_genetic(&state.config, &request).await {
        Ok(stdout) => stdout,
        Err(e) => return Ok(reject(e)),
    };

    match decode::decode_ga(&stdout) {
        Ok(response) => Ok(HttpResponse::Ok().json(response)),
        Err(e) => Ok(reject(e)),
    }
}

pub async fn solve_annealing(
    state: web::Data<AppState>,
    body: web::Json<RawSaRequest>,
) -> Result<HttpResponse> {
    let request = match params::validate_sa(&body) {
        Ok(request) => request,
        Err(e) => return Ok(reject(e)),
    };

    let stdout = match runner::run_annealing(&state.config, &request).await {
        Ok(stdout) => stdout,
        Err(e) => return Ok(reject(e)),
    };

    match decode::decode_sa(&stdout) {
        Ok(response) => Ok(HttpResponse::Ok().json(response)),
        Err(e) => Ok(reject(e)),
    }
}

fn reject(error: SolveError) -> HttpResponse {
    if error.is_internal() {
        log::error!("solver request failed: {}", error);
    }
    HttpResponse::Ok().json(ErrorResponse {
        error_msg: error.user_message(),
    })
}
