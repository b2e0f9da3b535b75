//! CLI contract tests
//!
//! Runs the built binary in isolated temp directories and checks what
//! reaches stdout and the batch files.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

fn tweetmood_bin() -> &'static str {
    env!("CARGO_BIN_EXE_tweetmood")
}

/// Temp dir with config and tiny lexicons written by hand
fn setup_workspace() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let resources = dir.path().join("resources");
    std::fs::create_dir_all(&resources).unwrap();
    std::fs::write(resources.join("stop-words.dat"), "i\nthis\nand\nthe\n").unwrap();
    std::fs::write(resources.join("pos-words.dat"), "love\ngreat\nwonderful\ngood\n").unwrap();
    std::fs::write(resources.join("neg-words.dat"), "bad\nawful\n").unwrap();
    std::fs::write(
        dir.path().join("tweetmood.toml"),
        "execution-mode = \"local[2]\"\nbatch-interval-secs = 30\n\n[output]\ndir = \"out\"\n",
    )
    .unwrap();
    dir
}

fn run_with_stdin(dir: &Path, args: &[&str], stdin: &str) -> (i32, String, String) {
    let mut child = Command::new(tweetmood_bin())
        .arg("--dir")
        .arg(dir)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to run tweetmood");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();
    (
        output.status.code().unwrap_or(-1),
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
    )
}

const TWEETS: &str = r#"{"text": "I love this great and wonderful day", "lang": "en"}
{"text": "J'adore, great", "lang": "fr"}
{"text": "this and the", "lang": "en"}
{"text": "good and bad", "lang": "en"}
{"text": "awful awful service", "lang": "en"}
"#;

#[test]
fn test_run_prints_non_neutral_english_only() {
    let dir = setup_workspace();
    let (code, stdout, stderr) = run_with_stdin(dir.path(), &["run", "--no-color"], TWEETS);
    assert_eq!(code, 0, "stderr: {stderr}");

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2, "stdout: {stdout}");
    assert!(lines[0].starts_with("[ 3][73, 32, 108, 111, 118, 101"));
    assert!(lines[0].ends_with("]..."));
    assert!(lines[1].starts_with("[-2]["));
}

#[test]
fn test_run_colors_scores_by_default() {
    let dir = setup_workspace();
    let (_, stdout, _) = run_with_stdin(dir.path(), &["run", "--no-save"], TWEETS);
    assert!(stdout.contains("[\x1b[32m 3\x1b[0m]"));
    assert!(stdout.contains("[\x1b[31m-2\x1b[0m]"));
}

#[test]
fn test_run_saves_batch_files() {
    let dir = setup_workspace();
    let (code, _, _) = run_with_stdin(dir.path(), &["run"], TWEETS);
    assert_eq!(code, 0);

    let out_dir = dir.path().join("out");
    let files: Vec<_> = std::fs::read_dir(&out_dir)
        .expect("output dir created")
        .map(|e| e.unwrap().path())
        .collect();
    assert_eq!(files.len(), 1);

    let name = files[0].file_name().unwrap().to_string_lossy().to_string();
    assert!(name.starts_with("tweets-") && name.ends_with(".json"), "{name}");

    let content = std::fs::read_to_string(&files[0]).unwrap();
    let records: Vec<serde_json::Value> = content
        .lines()
        .map(|l| serde_json::from_str(l).expect("valid JSON line"))
        .collect();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["text"], "I love this great and wonderful day");
    assert_eq!(records[0]["score"], 3);
    assert_eq!(records[1]["score"], -2);
}

#[test]
fn test_run_json_format_no_save() {
    let dir = setup_workspace();
    let (code, stdout, _) =
        run_with_stdin(dir.path(), &["run", "--format", "json", "--no-save"], TWEETS);
    assert_eq!(code, 0);

    let scores: Vec<i64> = stdout
        .lines()
        .map(|l| serde_json::from_str::<serde_json::Value>(l).unwrap()["score"]
            .as_i64()
            .unwrap())
        .collect();
    assert_eq!(scores, vec![3, -2]);
    assert!(!dir.path().join("out").exists());
}

#[test]
fn test_run_plain_input_from_file() {
    let dir = setup_workspace();
    let input = dir.path().join("tweets.txt");
    std::fs::write(&input, "great great\nnothing to see\nbad\n").unwrap();

    let (code, stdout, _) = run_with_stdin(
        dir.path(),
        &["run", input.to_str().unwrap(), "--plain", "--no-save", "--no-color"],
        "",
    );
    assert_eq!(code, 0);
    assert_eq!(stdout, "[ 2][103, 114, 101, 97, 116, 32, 103, 114, 101, 97, 116]...\n[-1][98, 97, 100]...\n");
}

#[test]
fn test_missing_lexicon_is_fatal() {
    let dir = setup_workspace();
    std::fs::remove_file(dir.path().join("resources/pos-words.dat")).unwrap();

    let (code, stdout, stderr) = run_with_stdin(dir.path(), &["run", "--no-save"], TWEETS);
    assert_ne!(code, 0);
    assert!(stdout.is_empty());
    assert!(stderr.contains("pos-words.dat"), "stderr: {stderr}");
}

#[test]
fn test_score_command_shows_stages() {
    let dir = setup_workspace();
    let (code, stdout, _) = run_with_stdin(
        dir.path(),
        &["score", "I love this great and wonderful day", "--no-color"],
        "",
    );
    assert_eq!(code, 0);
    assert!(stdout.contains("tokens:     i love this great and wonderful day"));
    assert!(stdout.contains("meaningful: love great wonderful day"));
    assert!(stdout.contains("score:      3 (positive)"));
    assert!(stdout.contains("[ 3][73, 32"));
}

#[test]
fn test_score_command_reports_drop() {
    let dir = setup_workspace();
    let (code, stdout, _) = run_with_stdin(dir.path(), &["score", "good but bad"], "");
    assert_eq!(code, 0);
    assert!(stdout.contains("dropped: neutral score"));
}

#[test]
fn test_init_then_run_with_builtin_lexicons() {
    let dir = tempfile::tempdir().unwrap();
    let (code, _, _) = run_with_stdin(dir.path(), &["init"], "");
    assert_eq!(code, 0);
    assert!(dir.path().join("tweetmood.toml").exists());
    assert!(dir.path().join("resources/pos-words.dat").exists());

    let (code, stdout, stderr) = run_with_stdin(
        dir.path(),
        &["run", "--no-save", "--no-color", "--plain"],
        "I love this great and wonderful day\n",
    );
    assert_eq!(code, 0, "stderr: {stderr}");
    assert!(stdout.starts_with("[ 3]"), "stdout: {stdout}");
}

#[test]
fn test_init_honours_lexicon_dir() {
    let dir = tempfile::tempdir().unwrap();
    let lex = dir.path().join("lex");
    let (code, _, stderr) = run_with_stdin(
        dir.path(),
        &["init", "--lexicon-dir", lex.to_str().unwrap()],
        "",
    );
    assert_eq!(code, 0, "stderr: {stderr}");
    assert!(lex.join("pos-words.dat").exists());
    assert!(!dir.path().join("resources").exists());

    // The generated config points at the custom directory
    let (code, stdout, stderr) = run_with_stdin(
        dir.path(),
        &["run", "--no-save", "--no-color", "--plain"],
        "awful awful service\n",
    );
    assert_eq!(code, 0, "stderr: {stderr}");
    assert!(stdout.starts_with("[-2]"), "stdout: {stdout}");
}

#[test]
fn test_config_command_applies_env_override() {
    let dir = setup_workspace();
    let output = Command::new(tweetmood_bin())
        .arg("--dir")
        .arg(dir.path())
        .arg("config")
        .env("TWEETMOOD_EXECUTION_MODE", "local[7]")
        .env("TWEETMOOD_APP_NAME", "from-env")
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("execution-mode = \"local[7]\""), "{stdout}");
    assert!(stdout.contains("application-name = \"from-env\""));
    assert!(stdout.contains("batch-interval-secs = 30"));
}

#[test]
fn test_invalid_execution_mode_env_is_fatal() {
    let dir = setup_workspace();
    let output = Command::new(tweetmood_bin())
        .arg("--dir")
        .arg(dir.path())
        .arg("config")
        .env("TWEETMOOD_EXECUTION_MODE", "cluster")
        .output()
        .unwrap();
    assert!(!output.status.success());
}
