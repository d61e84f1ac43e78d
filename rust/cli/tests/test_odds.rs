use liarsdice_cli::run;

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

fn probability(out: &str) -> f64 {
    out.lines()
        .next()
        .and_then(|l| l.rsplit("= ").next())
        .and_then(|v| v.trim().parse().ok())
        .expect("probability on first line")
}

#[test]
fn certain_bid_from_own_hand() {
    let (code, out, _) = run_cli(&[
        "liarsdice", "odds", "--hand", "5,5,2", "--total", "9", "--count", "2", "--face", "5",
    ]);
    assert_eq!(code, 0);
    assert_eq!(probability(&out), 1.0);
}

#[test]
fn wild_ones_raise_the_odds() {
    let base = [
        "liarsdice", "odds", "--hand", "1,1,3", "--total", "10", "--count", "4", "--face", "3",
        "--seed", "5", "--trials", "4000",
    ];
    let (_, plain, _) = run_cli(&base);
    let mut wild = base.to_vec();
    wild.push("--wild");
    let (code, boosted, _) = run_cli(&wild);
    assert_eq!(code, 0);
    assert!(probability(&boosted) > probability(&plain));
}

#[test]
fn bad_hand_is_a_usage_error() {
    let (code, out, err) = run_cli(&[
        "liarsdice", "odds", "--hand", "1,9", "--total", "5", "--count", "1", "--face", "2",
    ]);
    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert!(err.contains("'9' is not a die face"));
}

#[test]
fn missing_arguments_list_commands() {
    let (code, _, err) = run_cli(&["liarsdice", "odds"]);
    assert_eq!(code, 2);
    assert!(err.contains("Usage: liarsdice <command> [options]"));
}
