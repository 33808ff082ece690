use assert_cmd::Command;

/// Command for the binary under test.
pub fn tsk_cmd() -> Command {
    Command::cargo_bin("tsk").expect("tsk binary should build")
}

/// Quiet repl session fed from a script; one command per line.
pub fn repl(script: &str) -> Command {
    let mut cmd = tsk_cmd();
    cmd.args(["repl", "--quiet"]).write_stdin(script.to_string());
    cmd
}

/// Quiet menu session fed from a script; one prompt answer per line.
pub fn menu(script: &str) -> Command {
    let mut cmd = tsk_cmd();
    cmd.args(["menu", "--quiet"]).write_stdin(script.to_string());
    cmd
}
