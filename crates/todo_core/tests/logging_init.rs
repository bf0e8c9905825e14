use todo_core::{
    init_logging, logging_status, LogNotifier, LoggingError, Notifier, TaskNotification,
};

// The logger is process-global, so every file-logging check lives in one test.
#[test]
fn file_logging_rejects_conflicts_and_records_notifications() {
    let log_dir = tempfile::tempdir().expect("create temp log dir");
    let other_dir = tempfile::tempdir().expect("create second temp log dir");
    let log_dir_str = log_dir.path().to_str().expect("utf-8 temp dir").to_string();
    let other_dir_str = other_dir.path().to_str().expect("utf-8 temp dir").to_string();

    init_logging("info", &log_dir_str).expect("first init should succeed");
    init_logging("INFO", &log_dir_str).expect("same config should be idempotent");

    let level_error = init_logging("debug", &log_dir_str).expect_err("level conflict");
    assert!(matches!(level_error, LoggingError::LevelConflict { .. }));
    assert!(level_error.to_string().contains("refusing to switch"));

    let dir_error = init_logging("info", &other_dir_str).expect_err("dir conflict");
    assert!(matches!(dir_error, LoggingError::DirConflict { .. }));

    let (level, dir) = logging_status().expect("logging should be active");
    assert_eq!(level, "info");
    assert_eq!(dir, log_dir.path());

    LogNotifier.notify(&TaskNotification {
        title: "Dodano zadanie".to_string(),
        message: "Kupić mleko".to_string(),
        id: 77,
    });
    log::logger().flush();

    let contents = std::fs::read_dir(log_dir.path())
        .expect("list log dir")
        .map(|entry| entry.expect("log dir entry").path())
        .filter(|path| path.is_file())
        .map(|path| std::fs::read_to_string(path).expect("read log file"))
        .collect::<String>();
    assert!(
        contents.contains("event=notify module=notifier task_id=77"),
        "notify line missing from log: {contents}"
    );
    assert!(!contents.contains("Kupić mleko"));
}
