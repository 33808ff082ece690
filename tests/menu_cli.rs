mod support;

use predicates::prelude::*;
use predicates::str::contains;

#[test]
fn full_session_with_prompts_and_banner() {
    let mut cmd = support::tsk_cmd();
    cmd.arg("menu")
        .write_stdin("2\nBuy milk\n2%\n1\n7\n");
    cmd.assert()
        .success()
        .stdout(contains("TASK CONSOLE APP"))
        .stdout(contains("Enter choice [1-7]:"))
        .stdout(contains("Task created successfully!"))
        .stdout(contains("ID: 1"))
        .stdout(contains("Title: Buy milk"))
        .stdout(contains("Description: 2%"))
        .stdout(contains("Status: [ ] Pending"))
        .stdout(contains("Goodbye!"));
}

#[test]
fn menu_is_the_default_command() {
    let mut cmd = support::tsk_cmd();
    cmd.arg("--quiet").write_stdin("7\n");
    cmd.assert().success().stdout(contains("Goodbye!"));
}

#[test]
fn empty_and_invalid_choices_are_reported() {
    support::menu("\n9\n7\n")
        .assert()
        .success()
        .stdout(contains("Please enter a valid choice (1-7)"))
        .stdout(contains("Invalid choice '9'. Please enter a number between 1 and 7."));
}

#[test]
fn view_without_tasks_says_so() {
    support::menu("1\n7\n")
        .assert()
        .success()
        .stdout(contains("No tasks found."));
}

#[test]
fn mark_complete_then_pending_round_trip() {
    support::menu("2\nt\n\n5\n1\n6\n1\n7\n")
        .assert()
        .success()
        .stdout(contains("Task 1 marked as complete"))
        .stdout(contains("Task 1 marked as incomplete"));
}

#[test]
fn marking_an_already_complete_task_is_rejected() {
    support::menu("2\nt\n\n5\n1\n5\n1\n7\n")
        .assert()
        .success()
        .stdout(contains("Task 1 is already marked as complete"));
}

#[test]
fn update_flow_changes_the_title() {
    support::menu("2\nOld name\n\n3\n1\nNew name\n\n1\n7\n")
        .assert()
        .success()
        .stdout(contains("Task 1 updated successfully"))
        .stdout(contains("Title: New name"));
}

#[test]
fn update_unknown_id_is_rejected_before_prompting_fields() {
    support::menu("3\n42\n7\n")
        .assert()
        .success()
        .stdout(contains("Task with ID 42 not found"));
}

#[test]
fn delete_flow_reports_service_message() {
    support::menu("2\nt\n\n4\n1\n4\n1\n7\n")
        .assert()
        .success()
        .stdout(contains("Task 1 deleted successfully"))
        .stdout(contains("Task with ID 1 not found"));
}

#[test]
fn eof_ends_the_session_gracefully() {
    support::menu("")
        .assert()
        .success()
        .stdout(contains("Goodbye!"));
}

#[test]
fn json_flag_is_rejected_for_menu_sessions() {
    let mut cmd = support::tsk_cmd();
    cmd.args(["menu", "--json"]).write_stdin("7\n");
    cmd.assert()
        .failure()
        .code(2)
        .stdout(contains("--json is only supported in repl sessions"))
        .stdout(contains("\"code\":2"));
}
