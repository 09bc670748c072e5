//! Verify build/parse and full submissions against `test-vectors/submit.json`.
//!
//! Each vector describes an input product, the expected request, a simulated
//! response, and either the expected decoded product or the expected error
//! kind. Comparing parsed JSON (not raw strings) avoids false negatives from
//! field-ordering differences.

use product_core::{BoxError, HttpRequest, HttpResponse, Product, ProductSubmitter, SubmitError};

fn load_vectors() -> serde_json::Value {
    let raw = include_str!("../../test-vectors/submit.json");
    serde_json::from_str(raw).unwrap()
}

fn no_network(_: &HttpRequest) -> Result<HttpResponse, BoxError> {
    panic!("build/parse vectors must not touch the transport");
}

fn simulated_response(case: &serde_json::Value) -> HttpResponse {
    let sim = &case["simulated_response"];
    HttpResponse {
        status: sim["status"].as_u64().unwrap() as u16,
        body: sim["body"].as_str().unwrap().as_bytes().to_vec(),
    }
}

/// Check `result` against the case's `expected_result` or `expected_error`.
fn check_outcome(name: &str, case: &serde_json::Value, result: Result<Product, SubmitError>) {
    if let Some(expected_error) = case.get("expected_error") {
        let err = result.unwrap_err();
        match expected_error.as_str().unwrap() {
            "UnexpectedStatus" => {
                let status = case["simulated_response"]["status"].as_u64().unwrap() as u16;
                assert_eq!(err.status(), Some(status), "{name}: expected UnexpectedStatus");
                assert!(err.to_string().contains(&status.to_string()), "{name}: message");
            }
            "Decode" => assert!(matches!(err, SubmitError::Decode(_)), "{name}: expected Decode"),
            other => panic!("{name}: unknown expected_error: {other}"),
        }
    } else {
        let product = result.unwrap();
        let expected: Product = serde_json::from_value(case["expected_result"].clone()).unwrap();
        assert_eq!(product, expected, "{name}: parsed result");
    }
}

#[test]
fn build_and_parse_vectors() {
    let vectors = load_vectors();
    let endpoint = vectors["endpoint"].as_str().unwrap();
    let submitter = ProductSubmitter::new(endpoint, no_network);

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let input: Product = serde_json::from_value(case["input"].clone()).unwrap();
        let expected_req = &case["expected_request"];

        // Verify build
        let req = submitter.build_submit(&input).unwrap();
        assert_eq!(req.url, endpoint, "{name}: url");

        let expected_headers: Vec<(String, String)> = expected_req["headers"]
            .as_array()
            .unwrap()
            .iter()
            .map(|h| {
                let arr = h.as_array().unwrap();
                (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
            })
            .collect();
        assert_eq!(req.headers, expected_headers, "{name}: headers");

        let req_body: serde_json::Value = serde_json::from_slice(&req.body).unwrap();
        assert_eq!(req_body, expected_req["body"], "{name}: body");

        // Verify parse
        let result = submitter.parse_submit(simulated_response(case));
        check_outcome(name, case, result);
    }
}

#[test]
fn submit_vectors_through_transport() {
    let vectors = load_vectors();
    let endpoint = vectors["endpoint"].as_str().unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let input: Product = serde_json::from_value(case["input"].clone()).unwrap();
        let response = simulated_response(case);

        let transport = |req: &HttpRequest| -> Result<HttpResponse, BoxError> {
            assert_eq!(req.url, endpoint, "{name}: url");
            Ok(response.clone())
        };
        let submitter = ProductSubmitter::new(endpoint, transport);

        check_outcome(name, case, submitter.submit(input));
    }
}
