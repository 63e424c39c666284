//! Command-line tests for the text-only and config paths.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const FRONT: &str = "John Smith DOB:10/10/1990 Male Government of India 1234 5678 9012";
const BACK: &str = "Address: 123 Main Street Kochi\nPincode 682001 Kerala India";

fn idscan(config_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("idscan").unwrap();
    cmd.env("IDSCAN_CONFIG", config_dir.join("config.json"));
    cmd
}

fn write_pair(dir: &TempDir, front: &str, back: &str) -> (PathBuf, PathBuf) {
    let front_path = dir.path().join("front.txt");
    let back_path = dir.path().join("back.txt");
    fs::write(&front_path, front).unwrap();
    fs::write(&back_path, back).unwrap();
    (front_path, back_path)
}

#[test]
fn parse_prints_record_json() {
    let dir = TempDir::new().unwrap();
    let (front, back) = write_pair(&dir, FRONT, BACK);

    let output = idscan(dir.path())
        .arg("parse")
        .arg(&front)
        .arg(&back)
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "name": "John Smith",
            "dateOfBirth": "10/10/1990",
            "gender": "Male",
            "idNumber": "1234 5678 9012",
            "address": "123 Main Street Kochi",
            "postalCode": "682001",
        })
    );
}

#[test]
fn parse_rejects_swapped_sides() {
    let dir = TempDir::new().unwrap();
    let (front, back) = write_pair(&dir, "Address: X Pincode 600001", "DOB:01/01/1990 Female");

    idscan(dir.path())
        .arg("parse")
        .arg(&front)
        .arg(&back)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("appear to be swapped"));
}

#[test]
fn parse_rejects_non_document() {
    let dir = TempDir::new().unwrap();
    let (front, back) = write_pair(&dir, "", "");

    idscan(dir.path())
        .arg("parse")
        .arg(&front)
        .arg(&back)
        .assert()
        .failure()
        .stderr(predicate::str::contains("do not appear to contain Aadhaar content"));
}

#[test]
fn parse_empty_record_policy() {
    let dir = TempDir::new().unwrap();
    let (front, back) = write_pair(&dir, "Government", "India");

    idscan(dir.path())
        .arg("parse")
        .arg(&front)
        .arg(&back)
        .assert()
        .failure()
        .stderr(predicate::str::contains("clearer images"));

    idscan(dir.path())
        .arg("parse")
        .arg(&front)
        .arg(&back)
        .arg("--allow-empty")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\":\"\""));
}

#[test]
fn parse_writes_csv_to_file() {
    let dir = TempDir::new().unwrap();
    let (front, back) = write_pair(&dir, FRONT, BACK);
    let out = dir.path().join("card.csv");

    idscan(dir.path())
        .arg("parse")
        .arg(&front)
        .arg(&back)
        .args(["--format", "csv", "--output"])
        .arg(&out)
        .assert()
        .success();

    let csv = fs::read_to_string(&out).unwrap();
    assert!(csv.starts_with("name,dateOfBirth,gender,idNumber,address,postalCode\n"));
    assert!(csv.contains("John Smith,10/10/1990,Male,1234 5678 9012,123 Main Street Kochi,682001"));
}

#[test]
fn parse_show_warnings() {
    let dir = TempDir::new().unwrap();
    let (front, back) = write_pair(&dir, "Government DOB 01/01/1990", "India");

    idscan(dir.path())
        .arg("parse")
        .arg(&front)
        .arg(&back)
        .arg("--show-warnings")
        .assert()
        .success()
        .stderr(predicate::str::contains("Could not extract postalCode"));
}

#[test]
fn parse_missing_file() {
    let dir = TempDir::new().unwrap();

    idscan(dir.path())
        .arg("parse")
        .arg(dir.path().join("nope.txt"))
        .arg(dir.path().join("nope2.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read front text"));
}

#[test]
fn scan_requires_both_images() {
    let dir = TempDir::new().unwrap();
    let front = dir.path().join("front.png");
    fs::write(&front, b"").unwrap();

    idscan(dir.path())
        .arg("scan")
        .arg(&front)
        .arg(dir.path().join("back.png"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("back image not found"));
}

#[test]
fn config_set_and_get() {
    let dir = TempDir::new().unwrap();

    idscan(dir.path())
        .args(["config", "set", "extraction.validate_id_checksum", "true"])
        .assert()
        .success();

    idscan(dir.path())
        .args(["config", "get", "extraction.validate_id_checksum"])
        .assert()
        .success()
        .stdout(predicate::str::contains("true"));

    idscan(dir.path())
        .args(["config", "set", "extraction.no_such_key", "1"])
        .assert()
        .failure();
}

#[test]
fn config_checksum_setting_applies_to_parse() {
    let dir = TempDir::new().unwrap();
    let (front, back) = write_pair(&dir, FRONT, BACK);

    idscan(dir.path())
        .args(["config", "set", "extraction.validate_id_checksum", "true"])
        .assert()
        .success();

    idscan(dir.path())
        .arg("parse")
        .arg(&front)
        .arg(&back)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"idNumber\":\"\""));
}

#[test]
fn config_flag_selects_file_for_config_and_parse() {
    let dir = TempDir::new().unwrap();
    let (front, back) = write_pair(&dir, FRONT, BACK);
    let custom = dir.path().join("strict.json");

    idscan(dir.path())
        .arg("-c")
        .arg(&custom)
        .args(["config", "set", "extraction.validate_id_checksum", "true"])
        .assert()
        .success();

    assert!(custom.exists());
    assert!(!dir.path().join("config.json").exists());

    idscan(dir.path())
        .arg("-c")
        .arg(&custom)
        .args(["config", "get", "extraction.validate_id_checksum"])
        .assert()
        .success()
        .stdout(predicate::str::contains("true"));

    idscan(dir.path())
        .arg("-c")
        .arg(&custom)
        .arg("parse")
        .arg(&front)
        .arg(&back)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"idNumber\":\"\""));

    // Default file is untouched, so the lenient rule still applies there
    idscan(dir.path())
        .arg("parse")
        .arg(&front)
        .arg(&back)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"idNumber\":\"1234 5678 9012\""));
}
