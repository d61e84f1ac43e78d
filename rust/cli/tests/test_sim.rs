use liarsdice_cli::run;
use serde_json::Value;

fn run_cli(args: &[&str]) -> (i32, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(args.iter().copied(), &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn sim_prints_a_text_summary() {
    let (code, out, err) = run_cli(&[
        "liarsdice", "sim", "--games", "2", "--players", "2", "--dice", "2", "--seed", "4",
    ]);
    assert_eq!(code, 0, "stderr={err}");
    assert!(out.starts_with("sim: games=2 players=2 dice=2 wild=false seed=4"));
    assert!(out.contains("win rate="));
    assert!(out.contains("Average rounds per game:"));
}

#[test]
fn sim_json_is_reproducible() {
    let args = [
        "liarsdice", "sim", "--games", "3", "--players", "3", "--dice", "2", "--wild", "--seed",
        "17", "--json",
    ];
    let (code, first, _) = run_cli(&args);
    assert_eq!(code, 0);
    let (_, second, _) = run_cli(&args);
    assert_eq!(first, second);

    let v: Value = serde_json::from_str(&first).unwrap();
    assert_eq!(v["games"].as_u64(), Some(3));
    assert_eq!(v["table"]["wild_ones"].as_bool(), Some(true));
    let profiles = v["profiles"].as_object().unwrap();
    let wins: u64 = profiles.values().map(|p| p["wins"].as_u64().unwrap()).sum();
    assert_eq!(wins, 3);
    assert!(v["avg_rounds"].as_f64().unwrap() >= 3.0);
}

#[test]
fn sim_rejects_zero_games() {
    let (code, out, err) = run_cli(&["liarsdice", "sim", "--games", "0"]);
    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert!(err.contains("Error: Invalid input: games must be >= 1"));
}

#[test]
fn sim_rejects_oversized_table() {
    let (code, _, err) = run_cli(&["liarsdice", "sim", "--players", "7", "--games", "1"]);
    assert_eq!(code, 2);
    assert!(err.contains("Configuration error"));
}
