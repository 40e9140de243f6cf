use std::path::PathBuf;
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

fn bin_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_bayesgen"))
}

fn repo_root() -> PathBuf {
    // crates/bg-cli -> repo root
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../..").canonicalize().unwrap()
}

fn fixture_path(name: &str) -> PathBuf {
    repo_root().join("tests/fixtures").join(name)
}

fn tmp_path(filename: &str) -> PathBuf {
    let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_nanos();
    let mut p = std::env::temp_dir();
    p.push(format!("bayesgen_cli_{}_{}_{}", std::process::id(), nanos, filename));
    p
}

fn run(args: &[&str]) -> Output {
    Command::new(bin_path())
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to run {:?} {:?}: {}", bin_path(), args, e))
}

fn run_json(args: &[&str]) -> serde_json::Value {
    let out = run(args);
    assert!(
        out.status.success(),
        "{:?} should succeed, stderr={}",
        args,
        String::from_utf8_lossy(&out.stderr)
    );
    serde_json::from_slice(&out.stdout).expect("stdout should be valid JSON")
}

#[test]
fn sweep_two_population_contract() {
    let input = fixture_path("two_population_heights.yaml");
    assert!(input.exists(), "missing fixture: {}", input.display());

    let v = run_json(&["sweep", "--config", input.to_string_lossy().as_ref(), "--n-draws", "300"]);
    assert_eq!(v["model"], "two_population_height");
    assert_eq!(v["n_draws"], 300);
    assert_eq!(v["seed"], 42);

    let names: Vec<&str> =
        v["parameter_names"].as_array().unwrap().iter().map(|n| n.as_str().unwrap()).collect();
    assert_eq!(names, ["mean_a", "scale_a", "mean_b", "scale_b"]);

    let points = v["points"].as_array().expect("points should be array");
    assert_eq!(points.len(), 300);
    for p in points {
        assert_eq!(p["params"].as_array().unwrap().len(), 4);
        assert!(p["score"].as_f64().unwrap().is_finite());
    }
    assert_eq!(v["n_finite"], 300);
    assert!(v["best"]["score"].as_f64().is_some());
}

#[test]
fn sweep_output_independent_of_threads() {
    let input = fixture_path("two_population_heights.yaml");
    let cfg = input.to_string_lossy();
    let one = run_json(&["sweep", "--config", cfg.as_ref(), "--n-draws", "200", "--threads", "1"]);
    let four = run_json(&["sweep", "--config", cfg.as_ref(), "--n-draws", "200", "--threads", "4"]);
    assert_eq!(one["points"], four["points"]);

    let other_seed =
        run_json(&["sweep", "--config", cfg.as_ref(), "--n-draws", "200", "--seed", "43"]);
    assert_ne!(one["points"], other_seed["points"]);
}

#[test]
fn sweep_keeps_out_of_support_points_as_null() {
    let input = fixture_path("coin_flips.json");
    let v = run_json(&["sweep", "--config", input.to_string_lossy().as_ref()]);
    let points = v["points"].as_array().unwrap();
    assert_eq!(points.len(), 500);

    let n_null = points.iter().filter(|p| p["score"].is_null()).count();
    assert!(n_null > 0, "some draws of p fall outside [0, 1]");
    assert_eq!(v["n_finite"].as_u64().unwrap() as usize, points.len() - n_null);
    for p in points {
        let x = p["params"][0].as_f64().unwrap();
        assert!((-0.5..1.5).contains(&x));
        assert_eq!(p["score"].is_null(), !(0.0..=1.0).contains(&x));
    }

    // The emitted document loads back into the library result type.
    let result: bg_core::SweepResult = serde_json::from_value(v.clone()).unwrap();
    assert_eq!(result.points.len(), 500);
    assert_eq!(result.n_finite(), points.len() - n_null);
    assert!(result.scores().iter().any(|&s| s == f64::NEG_INFINITY));
}

#[test]
fn sweep_writes_output_file() {
    let input = fixture_path("crash_counts.yaml");
    let out_path = tmp_path("sweep.json");
    let out = run(&[
        "sweep",
        "--config",
        input.to_string_lossy().as_ref(),
        "--output",
        out_path.to_string_lossy().as_ref(),
    ]);
    assert!(out.status.success(), "stderr={}", String::from_utf8_lossy(&out.stderr));

    let v: serde_json::Value = serde_json::from_slice(&std::fs::read(&out_path).unwrap()).unwrap();
    assert_eq!(v["points"].as_array().unwrap().len(), 1000);
    let best_rate = v["best"]["params"][0].as_f64().unwrap();
    // Posterior mode sits near the sample mean (11/7) shrunk slightly by the prior.
    assert!(best_rate > 0.9 && best_rate < 2.2, "best_rate={}", best_rate);
    let _ = std::fs::remove_file(&out_path);
}

#[test]
fn sweep_rejects_mismatched_bounds() {
    let cfg_path = tmp_path("bad_bounds.yaml");
    std::fs::write(
        &cfg_path,
        concat!(
            "model:\n  kind: height\n",
            "data:\n  measurements: [170.0, 171.5]\n",
            "bounds:\n  - { name: mean, low: 150.0, high: 190.0 }\n",
        ),
    )
    .unwrap();
    let out = run(&["sweep", "--config", cfg_path.to_string_lossy().as_ref()]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Validation error"));
    let _ = std::fs::remove_file(&cfg_path);
}

#[test]
fn loglike_contract() {
    let input = fixture_path("coin_flips.json");
    let cfg = input.to_string_lossy();

    let v = run_json(&["loglike", "--config", cfg.as_ref(), "--params", "0.3"]);
    assert_eq!(v["parameter_names"][0], "p");
    let ll = v["loglike"].as_f64().unwrap();
    assert!(ll.is_finite() && ll < 0.0);

    let v = run_json(&["loglike", "--config", cfg.as_ref(), "--params", "-0.2"]);
    assert!(v["loglike"].is_null());

    let out = run(&["loglike", "--config", cfg.as_ref(), "--params", "0.3,0.4"]);
    assert!(!out.status.success());
}

#[test]
fn scan_contract() {
    let input = fixture_path("two_population_heights.yaml");
    let v = run_json(&[
        "scan",
        "--config",
        input.to_string_lossy().as_ref(),
        "--param",
        "mean_a",
        "--start",
        "160",
        "--stop",
        "200",
        "--points",
        "41",
        "--at",
        "180,3,165,3",
    ]);
    assert_eq!(v["param"], "mean_a");
    let points = v["points"].as_array().unwrap();
    assert_eq!(points.len(), 41);
    assert_eq!(points[0]["value"].as_f64().unwrap(), 160.0);
    assert_eq!(points[40]["value"].as_f64().unwrap(), 200.0);

    let best = points
        .iter()
        .max_by(|a, b| a["score"].as_f64().unwrap().total_cmp(&b["score"].as_f64().unwrap()))
        .unwrap();
    let best_mean = best["value"].as_f64().unwrap();
    assert!((best_mean - 179.9).abs() <= 1.5, "best_mean={}", best_mean);
}

#[test]
fn scan_rejects_unknown_param() {
    let input = fixture_path("crash_counts.yaml");
    let out = run(&[
        "scan",
        "--config",
        input.to_string_lossy().as_ref(),
        "--param",
        "lambda",
        "--start",
        "0",
        "--stop",
        "5",
        "--at",
        "1",
    ]);
    assert!(!out.status.success());
}

#[test]
fn scan_rejects_single_point_grid() {
    let input = fixture_path("crash_counts.yaml");
    let out = run(&[
        "scan",
        "--config",
        input.to_string_lossy().as_ref(),
        "--param",
        "rate",
        "--start",
        "0",
        "--stop",
        "5",
        "--points",
        "1",
        "--at",
        "1",
    ]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Validation error: scan needs at least 2 points"), "stderr={}", stderr);
}
