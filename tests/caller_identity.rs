use std::process::{Command, Output};

fn demo(level: &str) -> Output {
    Command::new(env!("CARGO_BIN_EXE_levlog_demo"))
        .arg(level)
        .output()
        .expect("run levlog_demo")
}

fn trace_output() -> String {
    String::from_utf8_lossy(&demo("trace").stdout).into_owned()
}

#[test]
fn macros_name_the_enclosing_function() {
    let stdout = trace_output();
    for expected in [
        "[levlog_demo::macro_footprints] Started.\n",
        "[levlog_demo::macro_footprints] macro footprint\n",
        "[levlog_demo::macro_footprints] Completed.\n",
    ] {
        assert!(stdout.contains(expected), "missing {expected:?} in {stdout}");
    }
}

#[test]
fn runtime_helpers_never_name_themselves() {
    let stdout = trace_output();
    assert!(stdout.contains("] footprint\n"), "{stdout}");
    assert!(stdout.contains("] footprint 2\n"), "{stdout}");
    for helper in ["global::started]", "global::mark]", "global::markf]", "caller::resolve]"] {
        assert!(!stdout.contains(helper), "{helper} in {stdout}");
    }
}

// Optimized builds may fold a caller into its parent, so exact names are
// only checked in debug builds.
#[cfg(all(feature = "caller-backtrace", debug_assertions))]
#[test]
fn runtime_helpers_name_the_calling_function() {
    let stdout = trace_output();
    for expected in [
        "[levlog_demo::run_demo] Started.\n",
        "[levlog_demo::run_demo] footprint\n",
        "[levlog_demo::run_demo] footprint 2\n",
        "[levlog_demo::run_demo] Completed.\n",
    ] {
        assert!(stdout.contains(expected), "missing {expected:?} in {stdout}");
    }
}

#[test]
fn exit_error_logs_without_terminating() {
    let out = demo("error");
    assert!(out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("] Exit error: cleanup failed\n"), "{stderr}");
    assert!(stderr.contains("] Exit error: retry failed\n"), "{stderr}");
}

#[cfg(all(feature = "caller-backtrace", debug_assertions))]
#[test]
fn exit_error_names_the_calling_function() {
    let stderr = String::from_utf8_lossy(&demo("error").stderr).into_owned();
    assert!(
        stderr.contains("[levlog_demo::run_demo] Exit error: cleanup failed\n"),
        "{stderr}"
    );
    assert!(
        stderr.contains("[levlog_demo::run_demo] Exit error: retry failed\n"),
        "{stderr}"
    );
}

#[test]
fn function_name_works_in_integration_code() {
    fn lookup() -> &'static str {
        levlog::function_name!()
    }
    assert!(lookup().ends_with("::lookup"), "{}", lookup());
}
