use handeval_cli::run;
use serde_json::Value;
use serial_test::serial;
use std::io::Write;

fn clear_env() {
    unsafe {
        std::env::remove_var("HANDEVAL_CONFIG");
        std::env::remove_var("HANDEVAL_FORMAT");
        std::env::remove_var("HANDEVAL_PROMPT");
    }
}

fn cfg() -> (i32, String, String) {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(["handeval", "cfg"], &mut out, &mut err);
    (
        code,
        String::from_utf8_lossy(&out).into_owned(),
        String::from_utf8_lossy(&err).into_owned(),
    )
}

#[test]
#[serial]
fn cfg_shows_defaults() {
    clear_env();
    let (code, out, _) = cfg();
    assert_eq!(code, 0);
    let json: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["format"]["value"], "text");
    assert_eq!(json["format"]["source"], "default");
    assert_eq!(json["prompt"]["value"], true);
    assert_eq!(json["prompt"]["source"], "default");
}

#[test]
#[serial]
fn env_overrides_file() {
    clear_env();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "format = \"json\"\nprompt = false").unwrap();

    unsafe {
        std::env::set_var("HANDEVAL_CONFIG", file.path());
        std::env::set_var("HANDEVAL_PROMPT", "yes");
    }
    let (code, out, _) = cfg();
    clear_env();

    assert_eq!(code, 0);
    let json: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["format"]["value"], "json");
    assert_eq!(json["format"]["source"], "file");
    assert_eq!(json["prompt"]["value"], true);
    assert_eq!(json["prompt"]["source"], "env");
}

#[test]
#[serial]
fn unreadable_config_file_fails() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.toml");
    unsafe {
        std::env::set_var("HANDEVAL_CONFIG", &missing);
    }
    let (code, out, err) = cfg();
    clear_env();

    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert!(err.contains("Invalid configuration: cannot read config file"));
}

#[test]
#[serial]
fn malformed_config_file_fails() {
    clear_env();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "format = \"xml\"").unwrap();
    unsafe {
        std::env::set_var("HANDEVAL_CONFIG", file.path());
    }
    let (code, _, err) = cfg();
    clear_env();

    assert_eq!(code, 2);
    assert!(err.contains("cannot parse config file"));
}
