use clientdesk_core::{default_log_level, init_logging, logging_status};

// Logging state is process-global, so the whole lifecycle lives in one test.
#[test]
fn init_is_idempotent_for_same_config_and_rejects_conflicts() {
    let dir = tempfile::tempdir().unwrap();
    let dir_str = dir.path().to_str().unwrap().to_string();

    assert!(logging_status().is_none());

    init_logging("info", &dir_str).unwrap();
    init_logging("INFO", &dir_str).unwrap();

    let level_conflict = init_logging("debug", &dir_str).unwrap_err();
    assert!(level_conflict.contains("refusing"));

    let other_dir = tempfile::tempdir().unwrap();
    let dir_conflict =
        init_logging("info", other_dir.path().to_str().unwrap()).unwrap_err();
    assert!(dir_conflict.contains("refusing"));

    let (level, active_dir) = logging_status().unwrap();
    assert_eq!(level, "info");
    assert_eq!(active_dir, dir.path());
}

#[test]
fn default_level_tracks_build_mode() {
    let level = default_log_level();
    assert!(level == "debug" || level == "info");
}
