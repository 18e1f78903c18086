// tests/integration_tests.rs
use lhk_server::decode;
use lhk_server::errors::SolveError;
use lhk_server::graph;
use lhk_server::params::{self, RawGaRequest, RawSaRequest};
use serde_json::json;

fn ga_raw(body: serde_json::Value) -> RawGaRequest {
    serde_json::from_value(body).unwrap()
}

#[test]
fn a_complete_ga_body_validates_into_a_typed_request() {
    let body = json!({
        "h": 0,
        "k": 0,
        "fileContent": "3 2 0\n1 2\n2 3\n",
        "maxLabel": 3,
        "populationsCount": 10,
        "populationSize": 20,
        "mutationChance": 0.1,
        "elitesCount": 2,
        "maxGenerations": 100,
        "maxTime": 5
    });

    let request = params::validate_ga(&ga_raw(body)).unwrap();
    assert_eq!(request.h, 0);
    assert_eq!(request.max_generations, 100);

    // the embedded graph text is already known to satisfy the grammar
    let instance = graph::parse(&request.file_content, request.max_label).unwrap();
    assert_eq!(instance.vertex_count, 3);
    assert_eq!(instance.edges, vec![(1, 2), (2, 3)]);
    assert!(instance.fixed_labels.is_empty());
}

#[test]
fn an_incomplete_sa_body_is_rejected_before_anything_else() {
    let body = json!({
        "h": 1,
        "fileContent": "2 1 0\n1 2\n",
        "maxLabel": 3,
        "temperature": 100.0,
        "coolingFactor": 0.95,
        "maxIterations": 1000,
        "maxTime": 5
    });

    let raw: RawSaRequest = serde_json::from_value(body).unwrap();
    let error = params::validate_sa(&raw).unwrap_err();
    assert!(matches!(error, SolveError::MissingParameters));
    assert_eq!(error.user_message(), "Please provide all parameters!");
}

#[test]
fn solver_output_decodes_into_the_wire_payload() {
    let stdout = "0.31\n250\n1 3 1 \n1\n0\n3\n0\n3 3 3\n";
    let response = decode::decode_ga(stdout).unwrap();

    let wire = serde_json::to_value(&response).unwrap();
    assert_eq!(wire["time"], 0.31);
    assert_eq!(wire["iterations"], 250);
    assert_eq!(wire["solution"], "1 3 1");
    assert_eq!(wire["isCorrect"], true);
    assert_eq!(wire["history"], "3 3 3");
    assert!(wire["errorMsg"].is_null());
}

#[test]
fn grammar_failures_surface_with_their_line_number() {
    let body = json!({
        "h": 0,
        "k": 0,
        "fileContent": "3 2 0\n1 2\n",
        "maxLabel": 3,
        "populationsCount": 1,
        "populationSize": 5,
        "mutationChance": 0.5,
        "elitesCount": 0,
        "maxGenerations": 10,
        "maxTime": 5
    });

    let error = params::validate_ga(&ga_raw(body)).unwrap_err();
    assert_eq!(error.user_message(), "Invalid input file format! (Line: 3)");
}
