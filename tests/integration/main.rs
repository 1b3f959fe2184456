//! Integration tests for the cartwise CLI
//!
//! These tests drive the binary through real workflows: a hand-written
//! snapshot file, an engine config written by `config init`, then detail and
//! compare runs read back as JSON.

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Helper function to create a cartwise command
fn cartwise() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("cartwise"))
}

/// Three markets south of the user:
/// - `a` about 0.1 km away, full coverage, total 17
/// - `b` about 5.6 km away, full coverage, total 14
/// - `c` about 0.2 km away, rice only
const SNAPSHOT: &str = r#"{
  "lists": {
    "weekly": [
      { "id": "1", "product_id": "rice", "product_name": "Rice", "quantity": 2 },
      { "id": "2", "product_id": "milk", "product_name": "Milk", "product_brand": "BrandA", "quantity": 1 }
    ],
    "empty": []
  },
  "markets": [
    { "id": "a", "name": "Corner Store", "address": "Rua A, 1", "latitude": -23.551, "longitude": -46.63 },
    { "id": "b", "name": "Hypermarket", "latitude": -23.60, "longitude": -46.63 },
    { "id": "c", "name": "Rice Shop", "latitude": -23.552, "longitude": -46.63 }
  ],
  "catalogs": {
    "a": [
      { "product_id": "rice", "product_name": "Rice", "price": 6.0, "last_updated_at": "2026-04-01T10:00:00Z" },
      { "product_id": "milk-a", "product_name": "Milk 1L", "product_brand": "BrandA", "price": 5.0, "last_updated_at": "2026-04-01T12:00:00Z" }
    ],
    "b": [
      { "product_id": "rice", "product_name": "Rice", "price": 5.0, "last_updated_at": "2026-03-30T08:00:00Z" },
      { "product_id": "milk", "product_name": "Milk", "product_brand": "BrandA", "price": 4.0, "last_updated_at": "2026-03-30T08:00:00Z" }
    ],
    "c": [
      { "product_id": "rice", "product_name": "Rice", "price": 1.0, "last_updated_at": "2026-04-01T09:00:00Z" }
    ]
  }
}"#;

fn setup() -> (TempDir, PathBuf, PathBuf) {
    let temp = TempDir::new().unwrap();
    let snapshot = temp.path().join("snapshot.json");
    fs::write(&snapshot, SNAPSHOT).unwrap();

    let config = temp.path().join("engine.toml");
    cartwise()
        .args(["config", "init", "--path"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));

    (temp, snapshot, config)
}

fn compare_json(snapshot: &Path, config: &Path, radius: &str) -> serde_json::Value {
    let output = cartwise()
        .arg("--json")
        .arg("--config")
        .arg(config)
        .arg("compare")
        .arg("--snapshot")
        .arg(snapshot)
        .args(["--list", "weekly", "--lat", "-23.55", "--lng", "-46.63", "--radius", radius])
        .output()
        .unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).unwrap()
}

fn market_ids(report: &serde_json::Value) -> Vec<String> {
    report["offers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["market_id"].as_str().unwrap().to_string())
        .collect()
}

// =============================================================================
// END-TO-END WORKFLOW TESTS
// =============================================================================

/// Full coverage first, then travel-inclusive cost
#[test]
fn test_e2e_compare_ranking() {
    let (_temp, snapshot, config) = setup();

    let report = compare_json(&snapshot, &config, "10");
    assert_eq!(report["mode"], "compare");
    assert_eq!(market_ids(&report), vec!["a", "b", "c"]);

    let offers = report["offers"].as_array().unwrap();
    assert_eq!(offers[0]["is_recommended"], true);
    assert_eq!(offers[1]["is_recommended"], false);
    assert_eq!(offers[2]["is_recommended"], false);

    let a = &offers[0];
    assert_eq!(a["matches"][1]["match_type"], "brand_variant");
    assert_eq!(a["matches"][1]["is_substitution"], false);
    assert_eq!(a["last_update"], "2026-04-01T12:00:00Z");
    assert!((a["total_price"].as_f64().unwrap() - 17.0).abs() < 1e-9);

    let b = &offers[1];
    assert_eq!(b["matches"][1]["match_type"], "exact");
    assert!(b["real_cost"].as_f64().unwrap() > a["real_cost"].as_f64().unwrap());

    let c = &offers[2];
    assert_eq!(c["missing_items_count"], 1);
    assert_eq!(c["coverage_percent"], 50);
    assert_eq!(c["missing_item_ids"][0], "2");
}

/// Radius narrows the candidates before ranking
#[test]
fn test_e2e_radius_narrows() {
    let (_temp, snapshot, config) = setup();

    let report = compare_json(&snapshot, &config, "1");
    assert_eq!(market_ids(&report), vec!["a", "c"]);
}

/// Free travel lets the cheaper far market win
#[test]
fn test_e2e_custom_config_changes_winner() {
    let (_temp, snapshot, config) = setup();
    fs::write(&config, "travel_rate_per_km = 0.0\n").unwrap();

    let report = compare_json(&snapshot, &config, "10");
    assert_eq!(market_ids(&report), vec!["b", "a", "c"]);

    let b = &report["offers"][0];
    assert!((b["real_cost"].as_f64().unwrap() - 14.0).abs() < 1e-9);
}

/// Detail mode reports a partial market without filtering it
#[test]
fn test_e2e_detail_partial_market() {
    let (_temp, snapshot, config) = setup();

    let output = cartwise()
        .arg("--json")
        .arg("--config")
        .arg(&config)
        .arg("detail")
        .arg("--snapshot")
        .arg(&snapshot)
        .args(["--list", "weekly", "--market", "c", "--lat", "-23.55", "--lng", "-46.63"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["mode"], "detail");
    let offer = &report["offers"][0];
    assert_eq!(offer["market_id"], "c");
    assert_eq!(offer["is_recommended"], false);
    assert_eq!(offer["coverage_percent"], 50);
    assert!((offer["total_price"].as_f64().unwrap() - 2.0).abs() < 1e-9);
    assert!(offer["distance_km"].as_f64().unwrap() > 0.2);
}

/// Human output for the same comparison
#[test]
fn test_e2e_human_output() {
    let (_temp, snapshot, config) = setup();

    cartwise()
        .arg("--config")
        .arg(&config)
        .arg("compare")
        .arg("-s")
        .arg(&snapshot)
        .args(["-l", "weekly", "--lat", "-23.55", "--lng", "-46.63", "-r", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Compared 3 market(s) for list weekly"))
        .stdout(predicate::str::contains("Corner Store (Rua A, 1)"))
        .stdout(predicate::str::contains("[brand_variant]"))
        .stdout(predicate::str::contains("missing: 2"));
}

// =============================================================================
// ERROR HANDLING TESTS
// =============================================================================

#[test]
fn test_empty_list_fails() {
    let (_temp, snapshot, config) = setup();

    cartwise()
        .arg("--config")
        .arg(&config)
        .arg("compare")
        .arg("-s")
        .arg(&snapshot)
        .args(["-l", "empty", "--lat", "-23.55", "--lng", "-46.63"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("shopping list is empty"));
}

#[test]
fn test_negative_radius_fails() {
    let (_temp, snapshot, config) = setup();

    cartwise()
        .arg("--config")
        .arg(&config)
        .arg("compare")
        .arg("-s")
        .arg(&snapshot)
        .args(["-l", "weekly", "--lat", "-23.55", "--lng", "-46.63", "-r", "-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("search radius"));
}

#[test]
fn test_missing_snapshot_fails() {
    let temp = TempDir::new().unwrap();

    cartwise()
        .arg("compare")
        .arg("-s")
        .arg(temp.path().join("absent.json"))
        .args(["-l", "weekly", "--lat", "1", "--lng", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read snapshot"));
}
