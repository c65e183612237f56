use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn worksum(workdir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("worksum").unwrap();
    // keep a stray worksum.toml in the test runner's cwd from leaking in
    cmd.current_dir(workdir)
        .env_remove("RUST_LOG")
        .env_remove("WORKSUM_WORKDIR")
        .arg("--workdir")
        .arg(workdir);
    cmd
}

fn listed(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_to_string(dir.join("list.txt"))
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect();
    names.sort();
    names
}

#[test]
fn empty_workdir_reports_zeroes() {
    let temp_dir = TempDir::new().unwrap();

    worksum(temp_dir.path())
        .assert()
        .success()
        .stdout("Workspace summary completed\n");

    assert_eq!(
        fs::read_to_string(temp_dir.path().join("result.txt")).unwrap(),
        "CSV lines: 0\nJSON bytes: 0\ndone\n"
    );
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("list.txt")).unwrap(),
        "result.txt\n"
    );
}

#[test]
fn csv_lines_are_counted_without_parsing() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("a.csv"),
        "name;quote\n\"x\";\"unterminated\nrandom text, no delimiters\n",
    )
    .unwrap();

    worksum(temp_dir.path()).assert().success();

    assert_eq!(
        fs::read_to_string(temp_dir.path().join("result.txt")).unwrap(),
        "CSV lines: 3\nJSON bytes: 0\ndone\n"
    );
}

#[test]
fn json_bytes_are_measured_without_parsing() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("b.json"), "{}").unwrap();

    worksum(temp_dir.path()).assert().success();

    assert_eq!(
        fs::read_to_string(temp_dir.path().join("result.txt")).unwrap(),
        "CSV lines: 0\nJSON bytes: 2\ndone\n"
    );
}

#[test]
fn second_run_keeps_result_and_lists_list_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("a.csv"), "a\nb\n").unwrap();
    fs::write(temp_dir.path().join("b.json"), "not json at all").unwrap();

    worksum(temp_dir.path()).assert().success();
    let first = fs::read_to_string(temp_dir.path().join("result.txt")).unwrap();
    assert_eq!(listed(temp_dir.path()), vec!["a.csv", "b.json", "result.txt"]);

    worksum(temp_dir.path()).assert().success();
    let second = fs::read_to_string(temp_dir.path().join("result.txt")).unwrap();

    assert_eq!(first, "CSV lines: 2\nJSON bytes: 15\ndone\n");
    assert_eq!(first, second);
    assert_eq!(
        listed(temp_dir.path()),
        vec!["a.csv", "b.json", "list.txt", "result.txt"]
    );
}

#[test]
fn logs_never_reach_stdout() {
    let temp_dir = TempDir::new().unwrap();

    worksum(temp_dir.path())
        .arg("-vvv")
        .assert()
        .success()
        .stdout("Workspace summary completed\n")
        .stderr(predicate::str::contains("result.txt"));
}

#[test]
fn rust_log_overrides_configured_level() {
    let temp_dir = TempDir::new().unwrap();

    worksum(temp_dir.path())
        .env("RUST_LOG", "debug")
        .assert()
        .success()
        .stdout("Workspace summary completed\n")
        .stderr(predicate::str::contains("Listed 1 entries"));
}

#[test]
fn default_level_keeps_stderr_quiet() {
    let temp_dir = TempDir::new().unwrap();

    worksum(temp_dir.path())
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn missing_workdir_fails_without_completion_message() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing");

    Command::cargo_bin("worksum")
        .unwrap()
        .current_dir(temp_dir.path())
        .env_remove("WORKSUM_WORKDIR")
        .arg("--workdir")
        .arg(&missing)
        .assert()
        .code(3)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("missing"));
}

#[test]
fn unreadable_csv_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("a.csv")).unwrap();

    worksum(temp_dir.path())
        .assert()
        .code(4)
        .stdout(predicate::str::is_empty());

    assert!(!temp_dir.path().join("result.txt").exists());
}

#[test]
fn json_output_mode() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("a.csv"), "1\n2\n3\n").unwrap();

    let output = worksum(temp_dir.path())
        .args(["--output-format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let line = String::from_utf8(output).unwrap();
    assert_eq!(line.lines().count(), 1);

    let value: serde_json::Value = serde_json::from_str(line.trim()).unwrap();
    assert_eq!(value["type"], "completed");
    assert_eq!(value["csv_lines"], 3);
    assert_eq!(value["json_bytes"], 0);
    assert_eq!(value["entries"], 2);
}

#[test]
fn dry_run_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("b.json"), "{\"a\":1}").unwrap();

    worksum(temp_dir.path())
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("JSON bytes: 7"))
        .stdout(predicate::str::contains("result.txt"));

    assert!(!temp_dir.path().join("result.txt").exists());
    assert!(!temp_dir.path().join("list.txt").exists());
}

#[test]
fn workdir_from_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let job_dir = temp_dir.path().join("job");
    fs::create_dir(&job_dir).unwrap();
    fs::write(job_dir.join("a.csv"), "only line\n").unwrap();

    let config_path = temp_dir.path().join("worksum.toml");
    fs::write(
        &config_path,
        format!("[workspace]\ndirectory = {:?}\n", job_dir.to_str().unwrap()),
    )
    .unwrap();

    Command::cargo_bin("worksum")
        .unwrap()
        .current_dir(temp_dir.path())
        .env_remove("WORKSUM_WORKDIR")
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(job_dir.join("result.txt")).unwrap(),
        "CSV lines: 1\nJSON bytes: 0\ndone\n"
    );
}

#[test]
fn invalid_config_exits_with_config_error() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("bad.toml");
    fs::write(&config_path, "[logging]\nlevel = \"chatty\"\n").unwrap();

    worksum(temp_dir.path())
        .arg("--config")
        .arg(&config_path)
        .assert()
        .code(2);

    assert!(!temp_dir.path().join("result.txt").exists());
}
