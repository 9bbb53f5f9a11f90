//! Tests for the main phase (`secrets-to-env run`).

use crate::support::*;

#[test]
fn test_single_secret_written_and_exported() {
    let t = Test::new();

    let output = t.run(&[("secrets", r#"{"FOO":"bar"}"#)]);
    assert_success(&output);

    assert_eq!(t.read(".env"), "FOO='bar'\n");
    assert_eq!(t.exported(), vec![("FOO".to_string(), "bar".to_string())]);
    assert_stdout_contains(&output, "Exported secret FOO");
    assert_stdout_contains(&output, "Writing to file: .env");
}

#[test]
fn test_github_token_excluded_by_default() {
    let t = Test::new();

    let output = t.run(&[("secrets", STANDARD_SECRETS)]);
    assert_success(&output);

    let content = t.read(".env");
    assert!(!content.contains("github_token"));
    assert_eq!(
        content,
        "DATABASE_URL='postgres://localhost/mydb'\nAPI_KEY='sk-test-12345'\nnpm_token='npm_abc'\n"
    );
    assert!(t.exported().iter().all(|(k, _)| k != "github_token"));
}

#[test]
fn test_include_and_exclude() {
    let t = Test::new();

    let output = t.run(&[
        ("secrets", STANDARD_SECRETS),
        ("include", "_URL$, ^API_, token"),
        ("exclude", "^npm_"),
    ]);
    assert_success(&output);

    assert_eq!(
        t.read(".env"),
        "DATABASE_URL='postgres://localhost/mydb'\nAPI_KEY='sk-test-12345'\n"
    );
}

#[test]
fn test_prefix_and_convert() {
    let t = Test::new();

    let output = t.run(&[
        ("secrets", MIXED_CASE_SECRETS),
        ("prefix", "ci_"),
        ("convert", "constant"),
    ]);
    assert_success(&output);

    assert_eq!(
        t.read(".env"),
        "CI_API_KEY='k1'\nCI_DB_URL='u1'\nCI_JWT_SECRET='j1'\n"
    );
}

#[test]
fn test_convert_prefix_false_keeps_prefix() {
    let t = Test::new();

    let output = t.run(&[
        ("secrets", r#"{"apiKey":"v"}"#),
        ("prefix", "MY_"),
        ("convert", "upper"),
        ("convert_prefix", "false"),
    ]);
    assert_success(&output);

    assert_eq!(t.read(".env"), "MY_APIKEY='v'\n");
    assert_eq!(t.exported(), vec![("MY_APIKEY".to_string(), "v".to_string())]);
}

#[test]
fn test_unknown_convert_leaves_names() {
    let t = Test::new();

    let output = t.run(&[("secrets", r#"{"apiKey":"v"}"#), ("convert", "kebab")]);
    assert_success(&output);

    assert_eq!(t.read(".env"), "apiKey='v'\n");
}

#[test]
fn test_override_false_skips_existing_variable() {
    let t = Test::new();

    let output = t
        .step(&[("secrets", r#"{"TOKEN":"y"}"#), ("override", "false")])
        .env("TOKEN", "x")
        .arg("run")
        .output()
        .unwrap();
    assert_success(&output);

    assert_stdout_contains(&output, "Skip overwriting secret TOKEN");
    assert!(t.exported().is_empty());
    assert_eq!(t.read(".env"), "TOKEN='y'\n");
}

#[test]
fn test_override_warns_before_rewriting() {
    let t = Test::new();

    let output = t
        .step(&[("secrets", r#"{"TOKEN":"y"}"#)])
        .env("TOKEN", "x")
        .arg("run")
        .output()
        .unwrap();
    assert_success(&output);

    assert_stdout_contains(
        &output,
        "::warning::Will re-write \"TOKEN\" environment variable.",
    );
    assert_eq!(t.exported(), vec![("TOKEN".to_string(), "y".to_string())]);
}

#[test]
fn test_no_env_only_writes_file() {
    let t = Test::new();

    let output = t.run(&[("secrets", r#"{"A":"1"}"#), ("no_env", "true")]);
    assert_success(&output);

    assert!(t.exported().is_empty());
    assert_stdout_excludes(&output, "Exported secret");
    assert_eq!(t.read(".env"), "A='1'\n");
}

#[test]
fn test_custom_file_replaces_existing() {
    let t = Test::new();
    std::fs::create_dir(t.path("config")).unwrap();
    std::fs::write(t.path("config/ci.env"), "STALE='old'\n").unwrap();

    let output = t.run(&[("secrets", r#"{"A":"1"}"#), ("file", "config/ci.env")]);
    assert_success(&output);

    assert_eq!(t.read("config/ci.env"), "A='1'\n");
    assert!(!t.path(".env").exists());
}

#[test]
fn test_multiline_value_exported_intact() {
    let t = Test::new();

    let output = t.run(&[("secrets", r#"{"KEY":"line1\nline2"}"#)]);
    assert_success(&output);

    assert_eq!(
        t.exported(),
        vec![("KEY".to_string(), "line1\nline2".to_string())]
    );
    assert_eq!(t.read(".env"), "KEY='line1\nline2'\n");
}

#[test]
fn test_flags_work_without_input_variables() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["run", "--secrets", r#"{"A":"1"}"#, "--prefix", "X_"])
        .output()
        .unwrap();
    assert_success(&output);

    assert_eq!(t.read(".env"), "X_A='1'\n");
}

#[test]
fn test_run_saves_state_for_post() {
    let t = Test::new();

    let output = t.run(&[
        ("secrets", r#"{"A":"1"}"#),
        ("file", "out.env"),
        ("clean", "false"),
    ]);
    assert_success(&output);

    let state = t.state();
    assert_eq!(state.get("isPost").map(String::as_str), Some("true"));
    assert_eq!(state.get("file").map(String::as_str), Some("out.env"));
    assert_eq!(state.get("clean").map(String::as_str), Some("false"));
}

#[test]
fn test_name_with_equals_sign_does_not_abort() {
    let t = Test::new();

    let output = t.run(&[("secrets", r#"{"A=B":"x"}"#)]);
    assert_success(&output);

    assert_eq!(t.read(".env"), "A=B='x'\n");
    assert_eq!(t.exported(), vec![("A=B".to_string(), "x".to_string())]);
    assert_stdout_contains(&output, "::warning::");
}

#[test]
fn test_empty_name_does_not_stop_later_secrets() {
    let t = Test::new();

    let output = t.run(&[("secrets", r#"{"":"x","B":"y"}"#)]);
    assert_success(&output);

    assert_eq!(t.read(".env"), "='x'\nB='y'\n");
    assert_eq!(
        t.exported(),
        vec![
            (String::new(), "x".to_string()),
            ("B".to_string(), "y".to_string())
        ]
    );
    assert_stdout_contains(&output, "Exported secret B");
}

#[test]
fn test_null_value_exported_empty() {
    let t = Test::new();

    let output = t.run(&[("secrets", r#"{"OPT":null}"#)]);
    assert_success(&output);

    assert_eq!(t.read(".env"), "OPT='null'\n");
    assert_eq!(t.exported(), vec![("OPT".to_string(), String::new())]);
}
