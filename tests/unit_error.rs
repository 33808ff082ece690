use std::path::PathBuf;

use tsk::error::{exit_codes, Error, JsonError};

#[test]
fn exit_codes_map_correctly() {
    let user = Error::InvalidArgument("bad".to_string());
    assert_eq!(user.exit_code(), exit_codes::USER_ERROR);

    let config = Error::InvalidConfig("display.title_width must be >= 8".to_string());
    assert_eq!(config.exit_code(), exit_codes::USER_ERROR);

    let missing = Error::ConfigNotFound(PathBuf::from("/tmp/tsk.toml"));
    assert_eq!(missing.exit_code(), exit_codes::USER_ERROR);

    let op = Error::Io(std::io::Error::other("boom"));
    assert_eq!(op.exit_code(), exit_codes::OPERATION_FAILED);
}

#[test]
fn json_error_includes_code() {
    let err = Error::InvalidArgument("--json is only supported in repl sessions".to_string());
    let json = JsonError::from(&err);
    assert_eq!(json.code, exit_codes::USER_ERROR);
    assert!(json.error.contains("Invalid argument"));
}

#[test]
fn validation_messages_match_user_facing_wording() {
    use tsk::ValidationError;

    assert_eq!(
        ValidationError::InvalidTitle.to_string(),
        "Task title cannot be empty"
    );
    assert_eq!(
        ValidationError::TitleTooLong.to_string(),
        "Task title cannot exceed 500 characters"
    );
    assert_eq!(
        ValidationError::DescriptionTooLong.to_string(),
        "Task description cannot exceed 2000 characters"
    );
    assert_eq!(ValidationError::InvalidId.to_string(), "Task ID must be >= 1");
}
