//! Golden dataset tests for causeway-unify.
//!
//! Loads each unify golden file, runs the engine on its inputs, and checks
//! the projected columns, edges and gate counts against the recorded result.

use std::collections::BTreeSet;

use causeway_core::{AdjacencyResult, GateKind};
use causeway_unify::unify;
use serde_json::Value;
use test_fixtures::load_fixture_value;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn parse_inputs(fixture: &Value) -> Vec<AdjacencyResult> {
    serde_json::from_value(fixture["inputs"].clone()).expect("inputs should deserialize")
}

fn expected_edges(fixture: &Value) -> BTreeSet<(String, String)> {
    fixture["expected"]["edges"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| {
            (
                e[0].as_str().unwrap().to_string(),
                e[1].as_str().unwrap().to_string(),
            )
        })
        .collect()
}

fn expected_columns(fixture: &Value) -> Vec<String> {
    serde_json::from_value(fixture["expected"]["columns"].clone()).unwrap()
}

fn actual_edges(result: &AdjacencyResult) -> BTreeSet<(String, String)> {
    result
        .edges()
        .into_iter()
        .map(|(from, to, weight)| {
            assert_eq!(weight, 1.0, "projected edges carry unit weight");
            (from.to_string(), to.to_string())
        })
        .collect()
}

fn gate_count(result: &AdjacencyResult, kind: GateKind) -> u64 {
    result
        .columns
        .iter()
        .filter(|c| GateKind::parse_label(c).is_some_and(|(k, _)| k == kind))
        .count() as u64
}

fn run_golden(name: &str) {
    let fixture = load_fixture_value(&format!("golden/unify/{name}.json"));
    let strength = fixture["strength"].as_f64().unwrap();
    let result = unify(&parse_inputs(&fixture), strength)
        .unwrap_or_else(|e| panic!("{name}: unification failed: {e}"));

    assert_eq!(result.columns, expected_columns(&fixture), "{name}: columns");
    assert_eq!(actual_edges(&result), expected_edges(&fixture), "{name}: edges");
    for kind in GateKind::ALL {
        let expected = fixture["expected"]["gates"][kind.as_str()].as_u64().unwrap();
        assert_eq!(gate_count(&result, kind), expected, "{name}: {kind} gates");
    }
    result.validate().expect("projected result should be well formed");
}

// ---------------------------------------------------------------------------
// Golden files
// ---------------------------------------------------------------------------

#[test]
fn golden_single_variant() {
    run_golden("single_variant");
}

#[test]
fn golden_xor_split() {
    run_golden("xor_split");
}

#[test]
fn golden_or_fallback() {
    run_golden("or_fallback");
}

#[test]
fn golden_eor_powerset() {
    run_golden("eor_powerset");
}

#[test]
fn golden_and_absorption() {
    run_golden("and_absorption");
}
