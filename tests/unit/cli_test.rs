//! Integration tests for the cartwise CLI

use std::path::{Path, PathBuf};

use assert_cmd::cargo;
use cartwise::adapters::snapshot::{Snapshot, save_snapshot};
use predicates::prelude::*;
use tempfile::TempDir;

use crate::common::{EntryBuilder, ItemBuilder, market_north};

fn cartwise() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("cartwise"))
}

/// Snapshot with one list and two markets 2 and 4 km north of the origin
fn write_snapshot(dir: &Path) -> PathBuf {
    let mut snapshot = Snapshot::default();
    snapshot.lists.insert(
        "weekly".to_string(),
        vec![ItemBuilder::new("1", "coffee").qty(2).build()],
    );
    snapshot.lists.insert(
        "rare".to_string(),
        vec![ItemBuilder::new("1", "saffron").build()],
    );
    snapshot.markets = vec![market_north("x", 2.0), market_north("y", 4.0)];
    snapshot
        .catalogs
        .insert("x".to_string(), vec![EntryBuilder::new("coffee", 10.0).build()]);
    snapshot
        .catalogs
        .insert("y".to_string(), vec![EntryBuilder::new("coffee", 9.0).build()]);

    let path = dir.join("snapshot.json");
    save_snapshot(&path, &snapshot).unwrap();
    path
}

/// Default engine config written to disk so the user's own file is never read
fn write_config(dir: &Path) -> PathBuf {
    let path = dir.join("engine.toml");
    std::fs::write(&path, "parallel = false\n").unwrap();
    path
}

#[test]
fn test_version() {
    cartwise()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("cartwise"));
}

#[test]
fn test_version_command() {
    cartwise()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(concat!("cartwise v", env!("CARGO_PKG_VERSION"))));
}

#[test]
fn test_help() {
    cartwise()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rank nearby markets for a shopping list"));
}

#[test]
fn test_short_help() {
    cartwise()
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("Compare markets for a shopping list"));
}

#[test]
fn test_no_args_shows_info() {
    cartwise().assert().success().stdout(predicate::str::contains("cartwise"));
}

#[test]
fn test_compare_ranks_markets() {
    let temp = TempDir::new().unwrap();
    let snapshot = write_snapshot(temp.path());
    let config = write_config(temp.path());

    cartwise()
        .arg("compare")
        .arg("-s")
        .arg(&snapshot)
        .args(["-l", "weekly", "--lat", "-23.55", "--lng", "-46.63", "-r", "10"])
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Compared 2 market(s) for list weekly"))
        .stdout(predicate::str::contains("[recommended]"))
        .stdout(predicate::str::contains("real cost 26.00"))
        .stdout(predicate::str::contains("real cost 30.00"));
}

#[test]
fn test_compare_json() {
    let temp = TempDir::new().unwrap();
    let snapshot = write_snapshot(temp.path());
    let config = write_config(temp.path());

    let output = cartwise()
        .arg("--json")
        .arg("compare")
        .arg("--snapshot")
        .arg(&snapshot)
        .args(["--list", "weekly", "--lat", "-23.55", "--lng", "-46.63", "--radius", "3"])
        .arg("--config")
        .arg(&config)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["mode"], "compare");
    let offers = json["offers"].as_array().unwrap();
    assert_eq!(offers.len(), 1);
    assert_eq!(offers[0]["market_id"], "x");
    assert_eq!(offers[0]["is_recommended"], true);
}

#[test]
fn test_compare_nothing_found() {
    let temp = TempDir::new().unwrap();
    let snapshot = write_snapshot(temp.path());
    let config = write_config(temp.path());

    cartwise()
        .arg("compare")
        .arg("-s")
        .arg(&snapshot)
        .args(["-l", "rare", "--lat", "-23.55", "--lng", "-46.63"])
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("No market nearby can fulfil list rare."));
}

#[test]
fn test_compare_without_location_fails() {
    let temp = TempDir::new().unwrap();
    let snapshot = write_snapshot(temp.path());
    let config = write_config(temp.path());

    cartwise()
        .arg("compare")
        .arg("-s")
        .arg(&snapshot)
        .args(["-l", "weekly"])
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("comparison mode requires a user location"));
}

#[test]
fn test_unknown_list_fails() {
    let temp = TempDir::new().unwrap();
    let snapshot = write_snapshot(temp.path());
    let config = write_config(temp.path());

    cartwise()
        .arg("compare")
        .arg("-s")
        .arg(&snapshot)
        .args(["-l", "nope", "--lat", "1", "--lng", "1"])
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("shopping list not found: nope"));
}

#[test]
fn test_detail_single_market() {
    let temp = TempDir::new().unwrap();
    let snapshot = write_snapshot(temp.path());
    let config = write_config(temp.path());

    cartwise()
        .arg("detail")
        .arg("-s")
        .arg(&snapshot)
        .args(["-l", "weekly", "-m", "y"])
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Market y"))
        .stdout(predicate::str::contains("total 18.00"))
        .stdout(predicate::str::contains("[recommended]").not());
}

#[test]
fn test_detail_unknown_market_fails() {
    let temp = TempDir::new().unwrap();
    let snapshot = write_snapshot(temp.path());
    let config = write_config(temp.path());

    cartwise()
        .arg("detail")
        .arg("-s")
        .arg(&snapshot)
        .args(["-l", "weekly", "-m", "ghost"])
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("market not found: ghost"));
}

#[test]
fn test_invalid_config_fails() {
    let temp = TempDir::new().unwrap();
    let snapshot = write_snapshot(temp.path());
    let config = temp.path().join("bad.toml");
    std::fs::write(&config, "similarity_threshold = 7.0").unwrap();

    cartwise()
        .arg("detail")
        .arg("-s")
        .arg(&snapshot)
        .args(["-l", "weekly", "-m", "x"])
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("similarity_threshold"));
}

#[test]
fn test_config_init_and_show() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("conf").join("engine.toml");

    cartwise()
        .args(["config", "init", "--path"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));
    assert!(path.exists());

    cartwise()
        .args(["config", "init", "--path"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    cartwise()
        .arg("--config")
        .arg(&path)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("similarity_threshold = 0.4"));
}
