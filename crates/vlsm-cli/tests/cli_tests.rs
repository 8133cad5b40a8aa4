//! Integration tests for the vlsm CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn vlsm() -> Command {
    let mut cmd = Command::cargo_bin("vlsm").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_help() {
    vlsm()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Variable-length subnet mask"))
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_version() {
    vlsm()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("vlsm"));
}

#[test]
fn test_plan_text() {
    vlsm()
        .args(["plan", "10.0.0.0/24", "5,50,20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total subnets allocated: 3"))
        .stdout(predicate::str::contains("Subnet 1: 10.0.0.0/26"))
        .stdout(predicate::str::contains("Subnet 2: 10.0.0.64/27"))
        .stdout(predicate::str::contains("Subnet 3: 10.0.0.96/29"))
        .stdout(predicate::str::contains("Range: 10.0.0.97 - 10.0.0.102"))
        .stdout(predicate::str::contains(
            "Subnet Mask (binary): 11111111.11111111.11111111.11111000",
        ));
}

#[test]
fn test_plan_json() {
    let output = vlsm()
        .args(["plan", "192.168.10.0/24", "100,60", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["base"], "192.168.10.0/24");
    assert_eq!(report["total_subnets"], 2);
    assert_eq!(report["subnets"][0]["cidr"], "192.168.10.0/25");
    assert_eq!(report["subnets"][1]["cidr"], "192.168.10.128/26");
    assert_eq!(report["subnets"][1]["usable_hosts"], 62);
}

#[test]
fn test_plan_json_with_tree_graph_keeps_stdout_parseable() {
    let output = vlsm()
        .args(["plan", "10.0.0.0/24", "50,20", "--format", "json", "--graph", "tree"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["subnets"][1]["cidr"], "10.0.0.64/27");

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("└── 10.0.0.64/27"));
}

#[test]
fn test_config_defaults_json_and_dot_keep_stdout_parseable() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(
        &config_path,
        "default_format = \"json\"\ndefault_graph = \"dot\"\n",
    )
    .unwrap();

    let output = vlsm()
        .arg("--config")
        .arg(&config_path)
        .args(["plan", "10.0.0.0/24", "50"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["total_subnets"], 1);
    assert!(String::from_utf8(output.stderr)
        .unwrap()
        .contains("digraph vlsm {"));
}

#[test]
fn test_plan_table() {
    vlsm()
        .args(["plan", "10.0.0.0/24", "50,20,5", "--format", "table"])
        .assert()
        .success()
        .stdout(predicate::str::contains("10.0.0.64/27"))
        .stdout(predicate::str::contains("Remaining addresses: 152"));
}

#[test]
fn test_plan_out_of_range() {
    vlsm()
        .args(["plan", "10.0.0.0/30", "50"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("out of base network range 10.0.0.0/30"));
}

#[test]
fn test_plan_invalid_base() {
    vlsm()
        .args(["plan", "10.0.0/24", "50"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid base network"));
}

#[test]
fn test_plan_no_valid_hosts() {
    vlsm()
        .args(["plan", "10.0.0.0/24", "abc,0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No valid host counts entered"));
}

#[test]
fn test_plan_dot_graph_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let dot_path = temp_dir.path().join("topology.dot");

    vlsm()
        .args(["plan", "10.0.0.0/24", "50,20,5", "--graph", "dot", "--graph-out"])
        .arg(&dot_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Topology written to"));

    let dot = fs::read_to_string(&dot_path).unwrap();
    assert!(dot.contains("Subnet Allocation Topology"));
    assert!(dot.contains("base -> subnet_3;"));
}

#[test]
fn test_plan_tree_graph() {
    vlsm()
        .args(["plan", "10.0.0.0/24", "50,20", "--graph", "tree"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Base: 10.0.0.0/24"))
        .stdout(predicate::str::contains("└── 10.0.0.64/27"));
}

#[test]
fn test_plan_in_order_warns_on_misalignment() {
    vlsm()
        .args(["plan", "10.0.0.0/24", "5,50", "--in-order"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Subnet 2: 10.0.0.8/26"))
        .stderr(predicate::str::contains("does not start on a /26 boundary"));
}

#[test]
fn test_prefix_command() {
    vlsm()
        .args(["prefix", "1", "50", "254"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/30"))
        .stdout(predicate::str::contains("/26"))
        .stdout(predicate::str::contains("255.255.255.0"));
}

#[test]
fn test_prefix_unsatisfiable() {
    vlsm()
        .args(["prefix", "4294967295"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No prefix between /1 and /31"));
}

#[test]
fn test_config_file_sets_default_format() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "default_format = \"yaml\"\ncolor = false\n").unwrap();

    vlsm()
        .arg("--config")
        .arg(&config_path)
        .args(["plan", "10.0.0.0/24", "50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cidr: 10.0.0.0/26"));
}

#[test]
fn test_config_init_and_show() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("vlsm").join("config.toml");

    vlsm()
        .arg("--config")
        .arg(&config_path)
        .args(["config", "init"])
        .assert()
        .success();
    assert!(config_path.exists());

    vlsm()
        .arg("--config")
        .arg(&config_path)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    vlsm()
        .arg("--config")
        .arg(&config_path)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default_format = \"text\""));
}

#[test]
fn test_missing_config_file() {
    vlsm()
        .args(["--config", "/nonexistent/vlsm.toml", "plan", "10.0.0.0/24", "50"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn test_invalid_command() {
    vlsm()
        .arg("invalid-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}
