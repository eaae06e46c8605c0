//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

/// Returns a Command configured to run our binary.
///
/// Note: `cargo_bin` is marked deprecated for edge cases involving custom
/// cargo build directories, but works correctly for standard project layouts.
#[allow(deprecated)]
fn cmd() -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("STUDY_LENS_MIN_READABILITY")
        .env_remove("STUDY_LENS_MIN_ENGAGEMENT");
    cmd
}

const LESSON: &str = "\
Функция принимает аргументы и возвращает значение. Например, функция sum складывает числа.
Почему код стоит разбивать на функции? Так программа читается проще.
";

/// Write `text` into a fresh temp dir and return both.
fn lesson_file(text: &str) -> (TempDir, String) {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("lesson.txt");
    fs::write(&path, text).unwrap();
    let path = path.to_str().unwrap().to_string();
    (tmp, path)
}

fn json_stdout(assert: &assert_cmd::assert::Assert) -> Value {
    serde_json::from_slice(&assert.get_output().stdout).expect("stdout should be valid JSON")
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("Options:"));
}

#[test]
fn long_help_lists_environment() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("STUDY_LENS_LOG_DIR"));
}

#[test]
fn version_flag_shows_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_only_prints_bare_version() {
    cmd()
        .arg("--version-only")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}\n",
            env!("CARGO_PKG_VERSION")
        )));
}

// =============================================================================
// Info Command
// =============================================================================

#[test]
fn info_shows_package_name_and_version() {
    cmd()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_NAME")))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn info_json_outputs_valid_json() {
    let assert = cmd().args(["info", "--json"]).assert().success();
    let json = json_stdout(&assert);

    assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

// =============================================================================
// Global Flags
// =============================================================================

#[test]
fn quiet_flag_accepted() {
    cmd().args(["--quiet", "info"]).assert().success();
}

#[test]
fn verbose_flags_accepted() {
    cmd().args(["-v", "info"]).assert().success();
    cmd().args(["-vv", "info"]).assert().success();
}

#[test]
fn color_choices_accepted() {
    for choice in ["auto", "always", "never"] {
        cmd().args(["--color", choice, "info"]).assert().success();
    }
}

// =============================================================================
// Analyze
// =============================================================================

#[test]
fn analyze_json_reports_subject_and_keywords() {
    let (_tmp, path) = lesson_file(LESSON);
    let assert = cmd().args(["analyze", &path, "--json"]).assert().success();
    let json = json_stdout(&assert);

    assert_eq!(json["subject"], "programming");
    assert_eq!(json["keywords"][0], "функция");
    assert!(json["engagement_score"].as_i64().unwrap() > 50);
    assert_eq!(json["questions"][0], "Почему код стоит разбивать на функции?");
    assert!(json["prerequisites"].as_array().unwrap().len() >= 2);
}

#[test]
fn analyze_text_output_has_sections() {
    let (_tmp, path) = lesson_file(LESSON);
    cmd()
        .args(["--color", "never", "analyze", &path])
        .assert()
        .success()
        .stdout(predicate::str::contains("Subject:"))
        .stdout(predicate::str::contains("Readability:"))
        .stdout(predicate::str::contains("Flashcards:"));
}

#[test]
fn analyze_reads_stdin() {
    let assert = cmd()
        .args(["analyze", "-", "--json"])
        .write_stdin("Клетка и ген. Организм растёт.")
        .assert()
        .success();
    assert_eq!(json_stdout(&assert)["subject"], "biology");
}

#[test]
fn analyze_engagement_gate_fails() {
    let (_tmp, path) = lesson_file("Клетка делится.");
    cmd()
        .args(["analyze", &path, "--min-engagement", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("below minimum 99"));
}

#[test]
fn analyze_gate_from_env() {
    let (_tmp, path) = lesson_file("Клетка делится.");
    cmd()
        .env("STUDY_LENS_MIN_ENGAGEMENT", "80")
        .args(["analyze", &path, "--json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("engagement score 50 is below minimum 80"));
}

// =============================================================================
// Single-signal commands
// =============================================================================

#[test]
fn subject_json_lists_scores() {
    let (_tmp, path) = lesson_file("Сила и энергия. Скорость волны.");
    let assert = cmd().args(["subject", &path, "--json"]).assert().success();
    let json = json_stdout(&assert);

    assert_eq!(json["subject"], "physics");
    assert_eq!(json["scores"][0]["subject"], "physics");
}

#[test]
fn subject_expect_mismatch_fails() {
    let (_tmp, path) = lesson_file("Клетка и ген.");
    cmd()
        .args(["subject", &path, "--expect", "history"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("reads as biology"));
}

#[test]
fn styles_default_ranking_without_signal() {
    let (_tmp, path) = lesson_file("Просто текст.");
    let assert = cmd().args(["styles", &path, "--json"]).assert().success();
    let json = json_stdout(&assert);

    assert_eq!(
        json["learning_styles"],
        serde_json::json!(["practical", "visual", "auditory"])
    );
    assert!(json["scores"].as_array().unwrap().is_empty());
}

#[test]
fn readability_empty_file_is_neutral() {
    let (_tmp, path) = lesson_file("");
    let assert = cmd()
        .args(["readability", &path, "--json"])
        .assert()
        .success();
    let json = json_stdout(&assert);

    assert_eq!(json["score"], 50.0);
    assert_eq!(json["interpretation"]["difficulty"], "medium");
}

#[test]
fn readability_gate_fails() {
    let (_tmp, path) = lesson_file("");
    cmd()
        .args(["readability", &path, "--min", "75"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("readability score 50 is below minimum 75"));
}

#[test]
fn engagement_counts_questions() {
    let (_tmp, path) = lesson_file("Что? Где? Когда? Зачем?");
    let assert = cmd()
        .args(["engagement", &path, "--json"])
        .assert()
        .success();
    let json = json_stdout(&assert);

    assert_eq!(json["score"], 62);
    assert_eq!(json["question_marks"], 4);
}

#[test]
fn keywords_respect_limit() {
    let (_tmp, path) = lesson_file("атом атом молекула молекула реакция");
    cmd()
        .args(["keywords", &path, "--limit", "2"])
        .assert()
        .success()
        .stdout(predicate::str::diff("атом\nмолекула\n"));
}

#[test]
fn keywords_limit_above_ten_rejected() {
    let (_tmp, path) = lesson_file("атом");
    cmd()
        .args(["keywords", &path, "--limit", "11"])
        .assert()
        .failure();
}

#[test]
fn flashcards_json_pairs_keyword_with_sentence() {
    let (_tmp, path) = lesson_file("Молекула состоит из атомов. Молекула устойчива.");
    let assert = cmd()
        .args(["flashcards", &path, "--json"])
        .assert()
        .success();
    let json = json_stdout(&assert);

    assert_eq!(json[0]["front"], "Что такое молекула?");
    assert_eq!(json[0]["back"], "Молекула состоит из атомов");
}

#[test]
fn questions_are_numbered() {
    let (_tmp, path) = lesson_file("Что такое атом? Это частица. Из чего он состоит?");
    cmd()
        .args(["questions", &path])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Что такое атом?"))
        .stdout(predicate::str::contains("2. Из чего он состоит?"));
}

#[test]
fn demo_prints_summary() {
    cmd()
        .args(["--color", "never", "demo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Предмет: программирование"))
        .stdout(predicate::str::contains("Ключевые слова: python"))
        .stdout(predicate::str::contains("programming").not());
}

#[test]
fn schema_is_json() {
    let assert = cmd().arg("schema").assert().success();
    assert_eq!(json_stdout(&assert)["title"], "AnalysisReport");
}

// =============================================================================
// Error Cases
// =============================================================================

#[test]
fn no_subcommand_shows_help() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn invalid_subcommand_shows_error() {
    cmd()
        .arg("not-a-real-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn missing_file_fails() {
    cmd()
        .args(["analyze", "/nonexistent/lesson.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn oversized_input_rejected() {
    let (tmp, path) = lesson_file(LESSON);
    fs::write(tmp.path().join(".study-lens.toml"), "max_input_bytes = 16").unwrap();
    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "analyze", &path])
        .assert()
        .failure()
        .stderr(predicate::str::contains("input too large"));
}

#[test]
fn oversized_stdin_rejected() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".study-lens.toml"), "max_input_bytes = 4").unwrap();
    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "keywords", "-"])
        .write_stdin("атом атом атом")
        .assert()
        .failure()
        .stderr(predicate::str::contains("input too large"));
}

// =============================================================================
// Chdir Flag
// =============================================================================

#[test]
fn chdir_flag_changes_directory() {
    let tmp = TempDir::new().unwrap();
    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .assert()
        .success();
}

#[test]
fn chdir_nonexistent_fails() {
    cmd()
        .args(["-C", "/nonexistent/path/that/does/not/exist", "info"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to change directory"));
}

// =============================================================================
// Logging
// =============================================================================

#[test]
fn log_dir_receives_jsonl() {
    let tmp = TempDir::new().unwrap();
    let logs = tmp.path().join("logs");
    cmd()
        .env("STUDY_LENS_LOG_DIR", &logs)
        .args(["demo", "--json"])
        .assert()
        .success();

    let entries: Vec<_> = fs::read_dir(&logs).unwrap().collect();
    assert!(!entries.is_empty(), "log directory should contain a file");
}
