//! Format-string macros over the global logger.
//!
//! `trace!` .. `fatal!` take the same arguments as `format!`. The annotated
//! macros (`started!`, `completed!`, `mark!`, `exit_error!`) name the
//! enclosing function at compile time through
//! [`function_name!`](crate::function_name) instead of walking the stack, so
//! they work in release builds and without the `caller-backtrace` feature.

// ============================================================================
// 1. LEVEL MACROS
// ============================================================================

#[macro_export]
macro_rules! trace {
    ($($arg:tt)+) => { $crate::log::global::tracef(::std::format_args!($($arg)+)) };
}

#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => { $crate::log::global::debugf(::std::format_args!($($arg)+)) };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => { $crate::log::global::infof(::std::format_args!($($arg)+)) };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)+) => { $crate::log::global::warnf(::std::format_args!($($arg)+)) };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => { $crate::log::global::errorf(::std::format_args!($($arg)+)) };
}

/// Writes at Fatal level and exits the process; the expression has type `!`.
#[macro_export]
macro_rules! fatal {
    ($($arg:tt)+) => { $crate::log::global::fatalf(::std::format_args!($($arg)+)) };
}

// ============================================================================
// 2. CALLER-ANNOTATED MACROS
// ============================================================================

#[macro_export]
macro_rules! started {
    () => {
        $crate::log::global::started_as($crate::function_name!())
    };
}

#[macro_export]
macro_rules! completed {
    () => {
        $crate::log::global::completed_as($crate::function_name!())
    };
}

/// Footprint at Trace level: `[<enclosing fn>] <message>`.
#[macro_export]
macro_rules! mark {
    () => {
        $crate::log::global::mark_as($crate::function_name!(), ::std::format_args!(""))
    };
    ($($arg:tt)+) => {
        $crate::log::global::mark_as($crate::function_name!(), ::std::format_args!($($arg)+))
    };
}

/// Error line `[<enclosing fn>] Exit error: <message>`. Does not terminate.
#[macro_export]
macro_rules! exit_error {
    ($($arg:tt)+) => {
        $crate::log::global::exit_error_as(
            $crate::function_name!(),
            ::std::format_args!($($arg)+),
        )
    };
}

#[cfg(test)]
mod tests {
    // Only checks that every macro expands and type-checks against the global
    // logger. Output is asserted in tests/ where real streams are captured.

    #[test]
    fn level_macros_expand() {
        let n = 3;
        crate::trace!("trace {n}");
        crate::debug!("debug {}", n);
        crate::info!("info");
        crate::warn!("warn {n:>4}");
        crate::error!("error {:?}", Some(n));
    }

    #[test]
    fn annotated_macros_expand() {
        crate::started!();
        crate::mark!();
        crate::mark!("step {}", 1);
        crate::exit_error!("gave up after {} tries", 2);
        crate::completed!();
    }

    #[allow(unreachable_code, clippy::diverging_sub_expression)]
    fn _fatal_macro_diverges() -> u32 {
        crate::fatal!("unrecoverable")
    }
}
