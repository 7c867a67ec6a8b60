use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("offnav-cli");
    cmd.env_remove("OFFNAV_NETWORK")
        .env("NO_COLOR", "1")
        .env("RUST_LOG", "error");
    cmd
}

#[test]
fn route_prints_steps_and_total() {
    cli()
        .args(["route", "--from", "red fort", "--to", "rohini"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Route: Red Fort -> Rohini East (2 steps)",
        ))
        .stdout(predicate::str::contains("1. Go to Kashmiri Gate (3.0 km)"))
        .stdout(predicate::str::contains("Arrived at Rohini East"))
        .stdout(predicate::str::contains("Total distance: 15.0 km"));
}

#[test]
fn unknown_start_exits_with_hints() {
    cli()
        .args(["route", "--from", "Atlantis", "--to", "India Gate"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Start location 'Atlantis' not found."))
        .stdout(predicate::str::contains("Try: Akshardham"));
}

#[test]
fn hint_count_is_configurable() {
    cli()
        .args(["--hints", "1", "route", "--from", "Atlantis", "--to", "India Gate"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Try: Akshardham..."));
}

#[test]
fn unknown_end_suggests_close_names() {
    cli()
        .args(["route", "--from", "india gate", "--to", "hauz kaas"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("End location 'hauz kaas' not found."))
        .stdout(predicate::str::contains("Did you mean: Hauz Khas"));
}

#[test]
fn query_accepts_combined_start_and_end() {
    cli()
        .args(["query", "Red Fort, Airport"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Go to IGI Airport"))
        .stdout(predicate::str::contains("Total distance: 22.2 km"));
}

#[test]
fn malformed_query_is_an_error() {
    cli()
        .args(["query", "Red Fort"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Start, End"));
}

#[test]
fn json_format_emits_structured_result() {
    let output = cli()
        .args(["--format", "json", "route", "--from", "india gate", "--to", "india gate"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).expect("valid json");
    assert_eq!(value["status"], "found");
    assert_eq!(value["header"]["total_distance_km"], 0.0);
    assert_eq!(value["steps"].as_array().map(Vec::len), Some(0));
    assert_eq!(value["arrival"]["destination"], "India Gate");
}

#[test]
fn rich_format_uses_markdown() {
    cli()
        .args(["--format", "rich", "route", "--from", "red fort", "--to", "rohini"])
        .assert()
        .success()
        .stdout(predicate::str::contains("**Route:** _Red Fort → Rohini East_"));
}

#[test]
fn locations_lists_every_landmark() {
    cli()
        .arg("locations")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Akshardham\n"))
        .stdout(predicate::str::contains("Mandi House\n"))
        .stdout(predicate::str::contains("Rohini East\n"));
}

#[test]
fn custom_network_file_is_used() {
    let temp_dir = tempdir().expect("create temp dir");
    let path = temp_dir.path().join("village.json");
    fs::write(
        &path,
        r#"{
            "nodes": ["Home", "Village Square", "Mandi Market", "Hospital"],
            "roads": [
                {"from": "Home", "to": "Village Square", "distance_km": 0.5},
                {"from": "Village Square", "to": "Mandi Market", "distance_km": 1.5}
            ]
        }"#,
    )
    .expect("write network");

    cli()
        .arg("--network")
        .arg(&path)
        .args(["route", "--from", "home", "--to", "mandi"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total distance: 2.0 km"));

    cli()
        .arg("--network")
        .arg(&path)
        .args(["route", "--from", "home", "--to", "hospital"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains(
            "No road connection found between Home and Hospital.",
        ));
}

#[test]
fn network_env_var_is_honoured() {
    let temp_dir = tempdir().expect("create temp dir");
    let path = temp_dir.path().join("tiny.json");
    fs::write(
        &path,
        r#"{"nodes": ["Well", "Temple"], "roads": [{"from": "Well", "to": "Temple", "distance_km": 0.8}]}"#,
    )
    .expect("write network");

    cli()
        .env("OFFNAV_NETWORK", &path)
        .arg("locations")
        .assert()
        .success()
        .stdout("Temple\nWell\n");
}

#[test]
fn corrupt_network_fails_at_startup() {
    let temp_dir = tempdir().expect("create temp dir");
    let path = temp_dir.path().join("corrupt.json");
    fs::write(
        &path,
        r#"{"nodes": ["A", "B"], "roads": [{"from": "A", "to": "B", "distance_km": -1.0}]}"#,
    )
    .expect("write network");

    cli()
        .arg("--network")
        .arg(&path)
        .arg("locations")
        .assert()
        .failure()
        .stderr(predicate::str::contains("road network failed validation"));
}
