use std::{env, process};

use levlog::{Config, LogLevel};

fn usage(program: &str) -> ! {
    eprintln!("Usage:");
    eprintln!("  {program} [LEVEL] [--config PATH] [--fatal]");
    eprintln!();
    eprintln!("  LEVEL     trace|debug|info|warn|error|fatal or a number (clamped to 1..=6)");
    eprintln!("  --config  read [Logging] level from an INI file");
    eprintln!("  --fatal   finish with a fatal line (exit status 1)");
    process::exit(2);
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map_or("levlog_demo", String::as_str);

    let mut fatal = false;
    let mut rest = args.iter().skip(1);
    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "--fatal" => fatal = true,
            "--config" => {
                let Some(path) = rest.next() else { usage(program) };
                match Config::load(path) {
                    Ok(cfg) => {
                        levlog::configure_from(&cfg);
                    }
                    Err(e) => levlog::fatalf(format_args!("{e}")),
                }
            }
            level => match level.parse::<i64>() {
                Ok(n) => {
                    levlog::configure(n);
                }
                Err(_) => match level.parse::<LogLevel>() {
                    Ok(l) => {
                        levlog::configure_level(l);
                    }
                    Err(_) => usage(program),
                },
            },
        }
    }

    run_demo();
    macro_footprints();

    if fatal {
        levlog::fatal!("fatal line");
    }
}

// The runtime helpers name the nearest frame the optimizer kept, so the
// functions using them stay out of line.
#[inline(never)]
fn run_demo() {
    levlog::started();
    levlog::trace(&[&"trace line"]);
    levlog::debugf(format_args!("debug line {}", 1));
    levlog::info!("info line");
    levlog::warn(&[&"warn", &"line"]);
    levlog::error!("error line");
    levlog::emit_error(&Ok::<(), String>(()));
    levlog::emit_error(&Err::<(), _>("disk full"));
    levlog::mark(&[&"footprint"]);
    levlog::markf(format_args!("footprint {}", 2));
    levlog::exit_errorf(format_args!("cleanup failed"));
    levlog::exit_error(&[&"retry", &"failed"]);
    levlog::println(&[&"print line"]);
    levlog::completed();
}

// The macros name the enclosing function at compile time, in any build.
fn macro_footprints() {
    levlog::started!();
    levlog::mark!("macro footprint");
    levlog::completed!();
}
