//! Integration tests for the --line-buffered mode of `sensiword filter`.
//!
//! These verify line-at-a-time filtering of piped input, including line
//! endings and matches that would otherwise span a line break.

use assert_cmd::Command;
use assert_cmd::assert::Assert;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

/// Helper function to create a word list for testing.
fn create_word_list(dir: &tempfile::TempDir) -> PathBuf {
    let path = dir.path().join("sensitive_words.txt");
    fs::write(&path, "tmd\n脑残\nab\n").unwrap();
    path
}

/// Runs `filter --line-buffered` with the given word list and stdin.
fn run_line_buffered(input: &str, words: &PathBuf, extra_args: &[&str]) -> Assert {
    let mut cmd = Command::new(assert_cmd::cargo_bin!("sensiword"));
    cmd.env_remove("RUST_LOG");
    cmd.arg("filter").arg("--line-buffered").arg("--words").arg(words);
    cmd.args(extra_args);
    cmd.write_stdin(input).assert()
}

#[test]
fn test_line_buffered_basic_filtering() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let words = create_word_list(&dir);

    run_line_buffered("真tmd\n脑残了\nclean line\n", &words, &[])
        .success()
        .stdout("真***\n**了\nclean line\n");
    Ok(())
}

#[test]
fn test_line_buffered_does_not_join_lines() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let words = create_word_list(&dir);

    // With '\n' registered as noise, whole-input mode would match "a\nb".
    run_line_buffered("a\nb\n", &words, &["--noise", "\n"])
        .success()
        .stdout("a\nb\n");
    Ok(())
}

#[test]
fn test_line_buffered_keeps_missing_final_newline() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let words = create_word_list(&dir);

    run_line_buffered("x tmd\r\ny tmd", &words, &["-r", "="])
        .success()
        .stdout("x ===\r\ny ===");
    Ok(())
}

#[test]
fn test_line_buffered_to_output_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let words = create_word_list(&dir);
    let out = dir.path().join("filtered.txt");

    run_line_buffered("tmd\n", &words, &["-o", out.to_str().unwrap()])
        .success()
        .stdout("");
    assert_eq!(fs::read_to_string(&out)?, "***\n");
    Ok(())
}
