//! Integration tests for config wiring
//!
//! Verify that `cli::open_session` honours the config file and the
//! `--file` override.

use serial_test::serial;
use spongebob_organiser::cli::open_session;
use spongebob_organiser::config::{save_config, Config};
use std::fs;
use std::path::PathBuf;

fn setup_temp_home() -> tempfile::TempDir {
    let temp = tempfile::TempDir::new().unwrap();
    std::env::set_var("HOME", temp.path());
    temp
}

#[test]
#[serial]
fn test_default_task_file_in_app_dir() {
    let temp = setup_temp_home();

    let (mut session, greeting) = open_session(None).unwrap();
    assert!(greeting.fresh);

    session.respond("todo read book");

    let content = fs::read_to_string(temp.path().join(".sbo").join("tasks.txt")).unwrap();
    assert_eq!(content, "T | 0 | read book\n");
}

#[test]
#[serial]
fn test_configured_data_file_is_used() {
    let temp = setup_temp_home();
    let data_file = temp.path().join("elsewhere.txt");

    let config = Config {
        data_file: Some(data_file.clone()),
        user_name: "Squidward".to_string(),
    };
    save_config(&config).unwrap();

    let (mut session, greeting) = open_session(None).unwrap();
    assert!(greeting.text.contains("Hello Squidward!"));

    session.respond("todo practise clarinet");
    let content = fs::read_to_string(&data_file).unwrap();
    assert_eq!(content, "T | 0 | practise clarinet\n");
}

#[test]
#[serial]
fn test_file_override_beats_config() {
    let temp = setup_temp_home();
    let configured = temp.path().join("configured.txt");
    let override_file = temp.path().join("override.txt");

    save_config(&Config {
        data_file: Some(configured.clone()),
        ..Config::default()
    })
    .unwrap();

    let (mut session, _) = open_session(Some(PathBuf::from(&override_file))).unwrap();
    session.respond("todo read book");

    assert!(override_file.exists());
    assert!(!configured.exists());
}
