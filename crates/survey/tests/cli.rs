use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

const QUESTIONS: &str = r#"
survey_questions:
  - prompt: "Favorite color?"
    name: "color"
    kind: "select"
    options: ["Red", "Blue", "Green"]
  - prompt: "How old are you?"
    name: "age"
    kind: "ask"
    type: "int"
    minLength: 1
    maxLength: 2
  - prompt: "Project id?"
    name: "project"
    kind: "function"
    default_function: "concat"
    default_params:
      parts: ["svc", 42]
      separator: "-"
  - prompt: "Newsletter?"
    name: "newsletter"
    kind: "ask"
    type: "boolean"
    default: "Yes"
"#;

fn survey() -> Command {
    let mut cmd = Command::cargo_bin("survey").expect("survey binary should build");
    cmd.env_remove("SURVEY_SEED");
    cmd
}

fn write_questions(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("questions.yaml");
    fs::write(&path, QUESTIONS).expect("write questions");
    path
}

#[test]
fn random_run_prints_typed_json() {
    let dir = tempfile::tempdir().expect("temp dir");
    let file = write_questions(dir.path());

    let output = survey()
        .args(["run", "--random", "--seed", "3"])
        .arg(&file)
        .output()
        .expect("run survey");
    assert!(output.status.success());

    let answers: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    let color = answers["color"].as_str().expect("color string");
    assert!(["Red", "Blue", "Green"].contains(&color));
    let age = answers["age"].as_i64().expect("age int");
    assert!((1..=99).contains(&age));
    assert_eq!(answers["project"], "svc-42");
    assert_eq!(answers["newsletter"], true);
}

#[test]
fn same_seed_gives_same_answers() {
    let dir = tempfile::tempdir().expect("temp dir");
    let file = write_questions(dir.path());

    let first = survey()
        .args(["run", "--random"])
        .arg(&file)
        .env("SURVEY_SEED", "11")
        .output()
        .expect("first run");
    let second = survey()
        .args(["run", "--random"])
        .arg(&file)
        .env("SURVEY_SEED", "11")
        .output()
        .expect("second run");
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn non_terminal_stdin_runs_headless_and_writes_yaml() {
    let dir = tempfile::tempdir().expect("temp dir");
    let file = write_questions(dir.path());
    let out = dir.path().join("out/answers.yaml");

    survey()
        .args(["run", "--format", "yaml", "--out"])
        .arg(&out)
        .arg(&file)
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("answers written to"));

    let written = fs::read_to_string(&out).expect("answers file");
    assert!(written.contains("project: svc-42"));
    assert!(written.contains("newsletter: true"));
}

#[test]
fn empty_file_yields_empty_answers() {
    let dir = tempfile::tempdir().expect("temp dir");
    let file = dir.path().join("empty.yaml");
    fs::write(&file, "").expect("write empty file");

    let output = survey()
        .args(["run", "--random"])
        .arg(&file)
        .output()
        .expect("run survey");
    assert!(output.status.success());
    let answers: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(answers, serde_json::json!({}));
}

#[test]
fn unknown_key_fails() {
    let dir = tempfile::tempdir().expect("temp dir");
    let file = write_questions(dir.path());

    survey()
        .args(["run", "--random", "--key", "missing"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("key 'missing' not found"));
}

#[test]
fn unknown_function_fails() {
    let dir = tempfile::tempdir().expect("temp dir");
    let file = dir.path().join("broken.yaml");
    fs::write(
        &file,
        "- prompt: \"Id?\"\n  name: id\n  kind: function\n  default_function: nope\n",
    )
    .expect("write questions");

    survey()
        .args(["run", "--random"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("default function 'nope' not found"));
}

#[test]
fn check_reports_question_count() {
    let dir = tempfile::tempdir().expect("temp dir");
    let file = write_questions(dir.path());

    survey()
        .arg("check")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("4 question(s) under key 'survey_questions'"));
}

#[test]
fn check_json_lists_questions() {
    let dir = tempfile::tempdir().expect("temp dir");
    let file = write_questions(dir.path());

    let output = survey()
        .args(["check", "--json"])
        .arg(&file)
        .output()
        .expect("run check");
    assert!(output.status.success());
    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(report["questions"][1]["name"], "age");
    assert_eq!(report["questions"][1]["kind"], "ask");
    assert_eq!(report["questions"][1]["type"], "int");
}

#[test]
fn check_rejects_select_without_options() {
    let dir = tempfile::tempdir().expect("temp dir");
    let file = dir.path().join("bad.yaml");
    fs::write(&file, "- prompt: \"Pick\"\n  name: pick\n  kind: select\n").expect("write");

    survey()
        .arg("check")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("without options"));
}

#[test]
fn list_edits_entries_from_stdin() {
    let dir = tempfile::tempdir().expect("temp dir");
    let file = dir.path().join("entries.txt");
    fs::write(&file, "alpha\nbeta\n").expect("write entries");
    let out = dir.path().join("edited.txt");

    survey()
        .arg("list")
        .arg(&file)
        .arg("--out")
        .arg(&out)
        .write_stdin("j\n\ngamma\nn\ndelta\nq\n")
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&out).expect("edited entries"),
        "alpha\ngamma\ndelta\n"
    );
}

#[test]
fn list_prints_entries_when_input_ends() {
    survey()
        .arg("list")
        .write_stdin("n\nonly\n")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("only\n"));
}
