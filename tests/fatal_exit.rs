use std::process::Command;

#[test]
fn fatal_writes_to_stderr_and_exits_nonzero() {
    let out = Command::new(env!("CARGO_BIN_EXE_levlog_demo"))
        .args(["error", "--fatal"])
        .output()
        .expect("run levlog_demo");

    assert_eq!(out.status.code(), Some(levlog::FATAL_EXIT_CODE));
    let stderr = String::from_utf8_lossy(&out.stderr);
    let last = stderr.lines().last().unwrap_or_default();
    assert!(last.starts_with("[FATAL] "), "{stderr}");
    assert!(last.ends_with(": fatal line"), "{stderr}");
    assert!(out.stdout.is_empty());
}

#[test]
fn fatal_is_written_even_at_the_quietest_threshold() {
    let out = Command::new(env!("CARGO_BIN_EXE_levlog_demo"))
        .args(["0", "--fatal"])
        .output()
        .expect("run levlog_demo");

    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("[FATAL]"));
}

#[test]
fn missing_config_file_is_fatal() {
    let out = Command::new(env!("CARGO_BIN_EXE_levlog_demo"))
        .args(["--config", "/no/such/levlog.ini"])
        .output()
        .expect("run levlog_demo");

    assert_eq!(out.status.code(), Some(levlog::FATAL_EXIT_CODE));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.starts_with("[FATAL]"), "{stderr}");
    assert!(stderr.contains("/no/such/levlog.ini"));
}
