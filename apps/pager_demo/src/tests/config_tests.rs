use super::{load_settings_from, Settings};

use std::{
    collections::HashMap,
    env, fs,
    path::Path,
    time::{SystemTime, UNIX_EPOCH},
};

fn no_env(_: &str) -> Option<String> {
    None
}

#[test]
fn missing_file_yields_defaults() {
    let settings = load_settings_from(Path::new("/nonexistent/pager_demo.toml"), no_env);

    assert_eq!(settings, Settings::default());
    assert_eq!(settings.initial_pages, 3);
    assert!(settings.default_animated);
}

#[test]
fn file_values_override_defaults() {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let temp_root = env::temp_dir().join(format!("pager_demo_config_test_{suffix}"));
    fs::create_dir_all(&temp_root).expect("temp root");
    let path = temp_root.join("pager_demo.toml");
    fs::write(
        &path,
        "initial_pages = 5\ndefault_animated = false\nlog_filter = \"debug\"\nunknown = 1\n",
    )
    .expect("write config");

    let settings = load_settings_from(&path, no_env);

    assert_eq!(settings.initial_pages, 5);
    assert!(!settings.default_animated);
    assert_eq!(settings.log_filter, "debug");
    assert!(!settings.print_json);

    fs::remove_dir_all(temp_root).expect("cleanup");
}

#[test]
fn environment_wins_over_file_and_app_prefix_wins_last() {
    let vars: HashMap<&str, &str> = HashMap::from([
        ("PAGER_DEMO_INITIAL_PAGES", "7"),
        ("APP__INITIAL_PAGES", "9"),
        ("PAGER_DEMO_PRINT_JSON", "true"),
        ("APP__COMMAND_QUEUE_CAPACITY", "not-a-number"),
    ]);

    let settings = load_settings_from(Path::new("/nonexistent/pager_demo.toml"), |key| {
        vars.get(key).map(|value| value.to_string())
    });

    assert_eq!(settings.initial_pages, 9);
    assert!(settings.print_json);
    assert_eq!(
        settings.command_queue_capacity,
        Settings::default().command_queue_capacity
    );
}

#[test]
fn zero_queue_capacity_is_raised_to_one() {
    let settings = Settings {
        command_queue_capacity: 0,
        ..Settings::default()
    };

    assert_eq!(settings.options().command_queue_capacity, 1);
}
