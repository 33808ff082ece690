mod support;

use std::fs;

use predicates::prelude::*;
use predicates::str::contains;

#[test]
fn explicit_config_controls_truncation_and_markers() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let config_path = dir.path().join("tsk.toml");
    fs::write(
        &config_path,
        "[display]\ntitle_width = 10\ncomplete_marker = \"x\"\npending_marker = \"-\"\n",
    )?;

    let mut cmd = support::repl("add abcdefghijklmnop\ntoggle 1\nlist\nquit\n");
    cmd.arg("--config").arg(&config_path);
    cmd.assert()
        .success()
        .stdout(contains("abcdefg..."))
        .stdout(contains("abcdefghijklmnop").not())
        .stdout(contains("[x]"));

    Ok(())
}

#[test]
fn config_is_picked_up_from_the_working_directory() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    fs::write(
        dir.path().join("tsk.toml"),
        "[display]\npending_marker = \".\"\n",
    )?;

    let mut cmd = support::repl("add t\nlist\nquit\n");
    cmd.current_dir(dir.path());
    cmd.assert().success().stdout(contains("[.]"));

    Ok(())
}

#[test]
fn stored_values_are_never_truncated() -> Result<(), Box<dyn std::error::Error>> {
    // Truncation is display-only: the JSON view of the same session shows
    // the full stored title even under a narrow table config.
    let dir = tempfile::tempdir()?;
    let narrow = dir.path().join("narrow.toml");
    fs::write(&narrow, "[display]\ntitle_width = 10\n")?;

    let long_title = "a".repeat(60);
    let mut cmd = support::tsk_cmd();
    cmd.args(["repl", "--json", "--config"])
        .arg(&narrow)
        .write_stdin(format!("add {long_title}\nlist\nquit\n"));
    cmd.assert().success().stdout(contains(long_title));

    Ok(())
}

#[test]
fn invalid_config_fails_with_user_error() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let config_path = dir.path().join("tsk.toml");
    fs::write(&config_path, "[display]\ntitle_width = 2\n")?;

    let mut cmd = support::tsk_cmd();
    cmd.args(["repl", "--config"])
        .arg(&config_path)
        .write_stdin("quit\n");
    cmd.assert()
        .failure()
        .code(2)
        .stderr(contains("Invalid configuration: display.title_width must be >= 8"));

    Ok(())
}

#[test]
fn missing_explicit_config_is_an_error() {
    let mut cmd = support::tsk_cmd();
    cmd.args(["repl", "--config", "/nonexistent/tsk.toml"])
        .write_stdin("quit\n");
    cmd.assert()
        .failure()
        .code(2)
        .stderr(contains("Config file not found"));
}

#[test]
fn malformed_config_fails_with_parse_error() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let config_path = dir.path().join("tsk.toml");
    fs::write(&config_path, "display = (")?;

    let mut cmd = support::tsk_cmd();
    cmd.args(["repl", "--config"])
        .arg(&config_path)
        .write_stdin("quit\n");
    cmd.assert()
        .failure()
        .code(4)
        .stderr(contains("TOML parse error"));

    Ok(())
}
