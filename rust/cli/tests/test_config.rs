use liarsdice_cli::run;
use serde_json::Value;
use serial_test::serial;
use std::fs;

const VARS: &[&str] = &[
    "LIARSDICE_CONFIG",
    "LIARSDICE_SEED",
    "LIARSDICE_PLAYERS",
    "LIARSDICE_DICE",
    "LIARSDICE_WILD",
    "LIARSDICE_PROFILES",
];

fn clear_env() {
    for v in VARS {
        unsafe {
            std::env::remove_var(v);
        }
    }
}

fn cfg_json() -> (i32, Value, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(["liarsdice", "cfg"], &mut out, &mut err);
    let json = serde_json::from_slice(&out).unwrap_or(Value::Null);
    (code, json, String::from_utf8(err).unwrap())
}

#[test]
#[serial]
fn defaults_are_reported_as_default() {
    clear_env();
    let (code, json, _) = cfg_json();
    assert_eq!(code, 0);
    assert_eq!(json["players"]["value"].as_u64(), Some(3));
    assert_eq!(json["players"]["source"].as_str(), Some("default"));
    assert_eq!(json["dice_per_player"]["value"].as_u64(), Some(5));
    assert_eq!(json["wild_ones"]["value"].as_bool(), Some(false));
    assert!(json["seed"]["value"].is_null());
    assert_eq!(json["ai_profiles"]["value"][2].as_str(), Some("skeptic"));
}

#[test]
#[serial]
fn env_overrides_file() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("liarsdice.toml");
    fs::write(
        &path,
        "players = 4\ndice_per_player = 3\nseed = 456\nai_profiles = [\"random\"]\n",
    )
    .unwrap();
    unsafe {
        std::env::set_var("LIARSDICE_CONFIG", &path);
        std::env::set_var("LIARSDICE_SEED", "789");
        std::env::set_var("LIARSDICE_WILD", "yes");
    }

    let (code, json, err) = cfg_json();
    clear_env();
    assert_eq!(code, 0, "stderr={err}");
    assert_eq!(json["players"]["value"].as_u64(), Some(4));
    assert_eq!(json["players"]["source"].as_str(), Some("file"));
    assert_eq!(json["dice_per_player"]["source"].as_str(), Some("file"));
    assert_eq!(json["seed"]["value"].as_u64(), Some(789));
    assert_eq!(json["seed"]["source"].as_str(), Some("env"));
    assert_eq!(json["wild_ones"]["value"].as_bool(), Some(true));
    assert_eq!(json["wild_ones"]["source"].as_str(), Some("env"));
    assert_eq!(json["ai_profiles"]["value"][0].as_str(), Some("random"));
    assert_eq!(json["ai_profiles"]["source"].as_str(), Some("file"));
}

#[test]
#[serial]
fn flags_override_env() {
    clear_env();
    unsafe {
        std::env::set_var("LIARSDICE_PLAYERS", "5");
        std::env::set_var("LIARSDICE_SEED", "11");
    }
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(
        [
            "liarsdice", "sim", "--games", "1", "--dice", "2", "--players", "2", "--json",
        ],
        &mut out,
        &mut err,
    );
    clear_env();
    assert_eq!(code, 0, "stderr={}", String::from_utf8_lossy(&err));
    let json: Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(json["table"]["players"].as_u64(), Some(2));
    assert_eq!(json["seed"].as_u64(), Some(11));
}

#[test]
#[serial]
fn invalid_values_fail_with_exit_code_2() {
    clear_env();
    unsafe {
        std::env::set_var("LIARSDICE_DICE", "9");
    }
    let (code, _, err) = cfg_json();
    clear_env();
    assert_eq!(code, 2);
    assert!(err.contains("dice_per_player must be within 2..=5"), "{err}");

    unsafe {
        std::env::set_var("LIARSDICE_PROFILES", "gambler,oracle");
    }
    let (code, _, err) = cfg_json();
    clear_env();
    assert_eq!(code, 2);
    assert!(err.contains("unknown AI profile 'oracle'"));
}

#[test]
#[serial]
fn unreadable_config_file_is_reported() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "players = \"many\"\n").unwrap();
    unsafe {
        std::env::set_var("LIARSDICE_CONFIG", &path);
    }
    let (code, _, err) = cfg_json();
    clear_env();
    assert_eq!(code, 2);
    assert!(err.contains("cannot parse config file"));
}
