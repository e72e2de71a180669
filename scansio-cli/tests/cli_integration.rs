//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const CATILINE: &str = "quō usque tandem abūtēre, Catilīna, patientiā nostrā aetatis. \
                        quam diū etiam furor iste tuus nōs ēlūdet.";

fn scansio() -> Command {
    Command::cargo_bin("scansio").expect("binary builds")
}

fn write_sample(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("catiline.txt");
    fs::write(&path, CATILINE).unwrap();
    path
}

#[test]
fn scan_prints_one_line_per_sentence() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir);

    scansio()
        .args(["scan", "-q", "-i"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::eq("-u-u--uuu-uuu-u---uu\n-u-u-uu-uu----u\n"));
}

#[test]
fn scan_with_custom_glyphs() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir);

    scansio()
        .args(["scan", "-q", "--long-glyph", "L", "--short-glyph", "s", "-i"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("LsLsLLsssLsssLsLLLss"));
}

#[test]
fn scan_json_output() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir);

    let assert = scansio()
        .args(["scan", "-q", "-f", "json", "-i"])
        .arg(&path)
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let sentences = parsed.as_array().unwrap();
    assert_eq!(sentences.len(), 2);
    assert_eq!(sentences[0]["scansion"], "-u-u--uuu-uuu-u---uu");
    assert_eq!(sentences[0]["syllables"][0], "quōu");
}

#[test]
fn scan_writes_output_file() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir);
    let out_path = dir.path().join("scansion.txt");

    scansio()
        .args(["scan", "-q", "-i"])
        .arg(&path)
        .arg("-o")
        .arg(&out_path)
        .assert()
        .success();

    let content = fs::read_to_string(&out_path).unwrap();
    assert_eq!(content.lines().count(), 2);
}

#[test]
fn scan_respects_config_file() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir);
    let config_path = dir.path().join("scansio.toml");
    fs::write(
        &config_path,
        "[output]\ndefault_format = \"text\"\nlong_glyph = \"L\"\nshort_glyph = \"s\"\npretty_json = true\n",
    )
    .unwrap();

    scansio()
        .args(["scan", "-q", "-c"])
        .arg(&config_path)
        .arg("-i")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("LsLsLL"));
}

#[test]
fn scan_missing_input_fails() {
    scansio()
        .args(["scan", "-q", "-i", "/nonexistent/*.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No files found"));
}

#[test]
fn scan_sequential_flag_matches_parallel() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir);

    let parallel = scansio()
        .args(["scan", "-q", "-i"])
        .arg(&path)
        .assert()
        .success();
    let sequential = scansio()
        .args(["scan", "-q", "--sequential", "-i"])
        .arg(&path)
        .assert()
        .success();

    assert_eq!(
        parallel.get_output().stdout,
        sequential.get_output().stdout
    );
}

#[test]
fn generate_config_prints_valid_toml() {
    scansio()
        .arg("generate-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("[output]"))
        .stdout(predicate::str::contains("long_glyph"));
}

#[test]
fn help_lists_commands() {
    scansio()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("scan"))
        .stdout(predicate::str::contains("generate-config"));
}
