#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn drafts_cmd(data: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("drafts"));
    cmd.env_remove("DRAFTS_DATA")
        .env_remove("DRAFTS_STORAGE_KEY")
        .env_remove("DRAFTS_FEATURED_COUNT")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .arg("--data")
        .arg(data.path());
    cmd
}

fn slot(data: &TempDir) -> serde_json::Value {
    let raw = fs::read_to_string(data.path().join("drafts_posts_v1.json")).unwrap();
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn test_empty_home() {
    let data = TempDir::new().unwrap();
    drafts_cmd(&data)
        .assert()
        .success()
        .stdout(predicate::str::contains("0 drafts"))
        .stdout(predicate::str::contains("No drafts yet."));
}

#[test]
fn test_post_then_list() {
    let data = TempDir::new().unwrap();

    drafts_cmd(&data)
        .args(["post", "I", "miss", "our", "talks", "--thought", "sometimes I wonder", "--tag", "closure"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Posted."));

    drafts_cmd(&data)
        .args(["list", "--search", "MISS"])
        .assert()
        .success()
        .stdout(predicate::str::contains("I miss our talks"))
        .stdout(predicate::str::contains("closure"));

    drafts_cmd(&data)
        .args(["list", "--tag", "regret"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No matching drafts yet."));

    drafts_cmd(&data)
        .args(["list", "--tag", "anger"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No matching drafts yet."));

    let value = slot(&data);
    assert_eq!(value.as_array().unwrap().len(), 1);
    assert_eq!(value[0]["thought"], "sometimes I wonder");
    assert_eq!(value[0]["relates"], 0);
}

#[test]
fn test_post_rejections_are_printed_verbatim() {
    let data = TempDir::new().unwrap();

    drafts_cmd(&data)
        .args(["post", "check out https://x.com"])
        .assert()
        .failure()
        .stderr(predicate::eq("Please remove links (no URLs).\n"));

    drafts_cmd(&data)
        .args(["post", "hi @john"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("@usernames/handles"));

    drafts_cmd(&data)
        .args(["post", "call me 5551234567"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("phone-number-like"));

    drafts_cmd(&data)
        .args(["post", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please write an unsent message first."));

    assert!(!data.path().join("drafts_posts_v1.json").exists());
}

#[test]
fn test_seed_and_relate() {
    let data = TempDir::new().unwrap();

    drafts_cmd(&data)
        .arg("seed")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sample drafts added."));

    let value = slot(&data);
    let records = value.as_array().unwrap();
    assert_eq!(records.len(), 4);
    let id = records[1]["id"].as_str().unwrap().to_string();

    drafts_cmd(&data)
        .args(["relate", &id[..8]])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 total"));

    drafts_cmd(&data)
        .args(["relate", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 total"));

    assert_eq!(slot(&data)[1]["relates"], 2);

    drafts_cmd(&data)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("4 drafts"))
        .stdout(predicate::str::contains("2 relates"));

    drafts_cmd(&data)
        .args(["list", "--sort", "relate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("♥ 2"));
}

#[test]
fn test_relate_unknown_id_changes_nothing() {
    let data = TempDir::new().unwrap();
    drafts_cmd(&data).arg("seed").assert().success();
    let before = fs::read_to_string(data.path().join("drafts_posts_v1.json")).unwrap();

    drafts_cmd(&data)
        .args(["relate", "does-not-exist"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No draft found"));

    let after = fs::read_to_string(data.path().join("drafts_posts_v1.json")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_corrupt_slot_reads_as_empty() {
    let data = TempDir::new().unwrap();
    fs::write(data.path().join("drafts_posts_v1.json"), "not json at all").unwrap();

    drafts_cmd(&data)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 drafts"));
}

#[test]
fn test_config_file_changes_slot() {
    let data = TempDir::new().unwrap();
    fs::write(
        data.path().join("drafts.toml"),
        "storage_key = \"custom_slot\"\n",
    )
    .unwrap();

    drafts_cmd(&data)
        .args(["config", "storage_key"])
        .assert()
        .success()
        .stdout(predicate::str::contains("custom_slot"));

    drafts_cmd(&data).args(["post", "hello"]).assert().success();
    assert!(data.path().join("custom_slot.json").exists());
}
