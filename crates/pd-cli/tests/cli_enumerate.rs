use std::path::PathBuf;
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

fn bin_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_primedigit"))
}

fn tmp_path(name: &str) -> PathBuf {
    let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_nanos();
    let mut p = std::env::temp_dir();
    p.push(format!("primedigit_cli_{}_{}_{}", std::process::id(), nanos, name));
    p
}

fn run(args: &[&str]) -> Output {
    Command::new(bin_path())
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to run {:?} {:?}: {}", bin_path(), args, e))
}

const PRIMES_TO_30: [u64; 10] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29];

#[test]
fn enumerate_prints_json_artifact() {
    let out = run(&["enumerate", "--max-n", "30"]);
    assert!(out.status.success(), "stderr={}", String::from_utf8_lossy(&out.stderr));
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["max_n"], 30);
    assert_eq!(v["n_primes"], 10);
    let primes: Vec<u64> =
        v["primes"].as_array().unwrap().iter().map(|p| p.as_u64().unwrap()).collect();
    assert_eq!(primes, PRIMES_TO_30);
}

#[test]
fn enumerate_writes_primes_file_usable_as_transitions_input() {
    let primes_file = tmp_path("primes_30.csv");
    let out = run(&["enumerate", "--max-n", "30", "--output", primes_file.to_string_lossy().as_ref()]);
    assert!(out.status.success(), "stderr={}", String::from_utf8_lossy(&out.stderr));

    let text = std::fs::read_to_string(&primes_file).unwrap();
    let lines: Vec<u64> = text.lines().map(|l| l.parse().unwrap()).collect();
    assert_eq!(lines, PRIMES_TO_30);

    let out = run(&["transitions", "--input", primes_file.to_string_lossy().as_ref()]);
    assert!(out.status.success(), "stderr={}", String::from_utf8_lossy(&out.stderr));
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert!((v["probabilities"][3].as_f64().unwrap() - 1.0).abs() < 1e-9);

    std::fs::remove_file(&primes_file).unwrap();
}

#[test]
fn enumerate_parallel_matches_sequential() {
    let seq = run(&["enumerate", "--max-n", "2000", "--threads", "1"]);
    let par = run(&["enumerate", "--max-n", "2000", "--threads", "0"]);
    assert!(seq.status.success() && par.status.success());
    let seq: serde_json::Value = serde_json::from_slice(&seq.stdout).unwrap();
    let par: serde_json::Value = serde_json::from_slice(&par.stdout).unwrap();
    assert_eq!(seq["primes"], par["primes"]);
}

#[test]
fn enumerate_small_bound_with_progress() {
    // progress step derives from max_n; bounds below 100 must not crash
    let out = run(&["enumerate", "--max-n", "10", "--progress", "--log-level", "info"]);
    assert!(out.status.success(), "stderr={}", String::from_utf8_lossy(&out.stderr));
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["n_primes"], 4);
}
