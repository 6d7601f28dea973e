//! Identifies the function that invoked a logging operation.
//!
//! Two strategies are offered. [`resolve`] walks the live call stack and is
//! what the free functions (`mark()`, `started()`...) use. The macros use
//! [`function_name!`](crate::function_name) instead, which names the enclosing
//! function at compile time and costs nothing at runtime.

/// Reported when the caller cannot be identified.
pub const UNRESOLVED: &str = "???";

/// Returns the fully qualified name of the function that called the public
/// logging operation which, in turn, called `resolve`.
///
/// Everything up to and including the resolver's own frames is skipped, then
/// exactly one more frame (the logging operation itself). The public
/// operations calling this are `#[inline(never)]` so that frame exists.
/// Yields [`UNRESOLVED`] when the stack is shallower than expected or symbols
/// are unavailable.
///
/// The caller is whatever frame survived optimization. In optimized builds a
/// small function is often inlined into its parent, which is then reported
/// instead; mark such a function `#[inline(never)]` or use the macros, whose
/// [`function_name!`](crate::function_name) is exact in every build.
#[cfg(feature = "caller-backtrace")]
#[inline(never)]
#[must_use]
pub fn resolve() -> String {
    #[cfg(test)]
    tests::count_resolution();
    let trace = std::backtrace::Backtrace::force_capture().to_string();
    pick_caller(&frame_names(&trace))
}

#[cfg(not(feature = "caller-backtrace"))]
#[must_use]
pub fn resolve() -> String {
    #[cfg(test)]
    tests::count_resolution();
    UNRESOLVED.to_owned()
}

/// Extracts one name per symbol from a rendered backtrace.
///
/// Symbol lines look like `  12: app::jobs::run` (inlined symbols repeat
/// without the index); `at <file>:<line>` lines are skipped. std leaves the
/// `Display` form of a backtrace unspecified, so this follows the current
/// rendering; anything it cannot read ends up as [`UNRESOLVED`].
#[cfg_attr(not(feature = "caller-backtrace"), allow(dead_code))]
fn frame_names(trace: &str) -> Vec<String> {
    trace
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with("at "))
        .map(|line| {
            let name = match line.split_once(": ") {
                Some((index, name)) if index.bytes().all(|b| b.is_ascii_digit()) => name,
                _ => line,
            };
            if name.starts_with("<unknown>") {
                UNRESOLVED.to_owned()
            } else {
                name.to_owned()
            }
        })
        .collect()
}

/// Picks the caller out of a list of frame names, innermost first.
#[cfg_attr(not(feature = "caller-backtrace"), allow(dead_code))]
fn pick_caller(frames: &[String]) -> String {
    const RESOLVER: &str = concat!(module_path!(), "::resolve");

    let resolver = frames.iter().rposition(|name| name.starts_with(RESOLVER));

    resolver
        .and_then(|idx| frames.get(idx + 2))
        .filter(|name| name.as_str() != UNRESOLVED)
        .map_or_else(|| UNRESOLVED.to_owned(), |name| trim_closures(name).to_owned())
}

/// Strips the marker item a [`function_name!`](crate::function_name)
/// expansion declares, plus any trailing closure segments.
#[doc(hidden)]
#[must_use]
pub fn strip_marker(type_name: &'static str) -> &'static str {
    let name = type_name
        .strip_suffix("::__levlog_here")
        .unwrap_or(type_name);
    let name = trim_closures(name);
    if name.is_empty() { UNRESOLVED } else { name }
}

fn trim_closures(mut name: &str) -> &str {
    while let Some(outer) = name.strip_suffix("::{{closure}}") {
        name = outer;
    }
    name
}

/// Expands to the fully qualified name of the enclosing function, as a
/// `&'static str`.
///
/// ```
/// fn load() -> &'static str {
///     levlog::function_name!()
/// }
/// assert!(load().ends_with("load"));
/// ```
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __levlog_here() {}
        $crate::log::caller::strip_marker(::std::any::type_name_of_val(&__levlog_here))
    }};
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::Cell;

    thread_local! {
        static RESOLUTIONS: Cell<usize> = const { Cell::new(0) };
    }

    pub(crate) fn count_resolution() {
        RESOLUTIONS.with(|n| n.set(n.get() + 1));
    }

    /// Stack walks performed so far on the current thread.
    pub(crate) fn resolutions() -> usize {
        RESOLUTIONS.with(Cell::get)
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn picks_frame_below_the_operation() {
        let frames = names(&[
            "std::backtrace::Backtrace::force_capture",
            "levlog::log::caller::resolve",
            "levlog::log::global::mark",
            "app::jobs::run",
            "app::main",
        ]);
        assert_eq!(pick_caller(&frames), "app::jobs::run");
    }

    #[test]
    fn shallow_stack_is_unresolved() {
        assert_eq!(pick_caller(&[]), UNRESOLVED);
        let frames = names(&["levlog::log::caller::resolve", "levlog::log::global::mark"]);
        assert_eq!(pick_caller(&frames), UNRESOLVED);
    }

    #[test]
    fn unnamed_caller_frame_is_unresolved() {
        let frames = names(&[
            "levlog::log::caller::resolve",
            "levlog::log::global::mark",
            UNRESOLVED,
        ]);
        assert_eq!(pick_caller(&frames), UNRESOLVED);
    }

    #[test]
    fn missing_resolver_frame_is_unresolved() {
        let frames = names(&["levlog::log::global::mark", "app::main"]);
        assert_eq!(pick_caller(&frames), UNRESOLVED);
    }

    #[test]
    fn caller_closures_are_trimmed() {
        let frames = names(&[
            "levlog::log::caller::resolve",
            "levlog::log::global::mark",
            "app::run::{{closure}}",
        ]);
        assert_eq!(pick_caller(&frames), "app::run");
    }

    #[test]
    fn frame_names_reads_rendered_backtrace() {
        let trace = "\
   0: levlog::log::caller::resolve
             at ./src/log/caller.rs:24:17
   1: levlog::log::global::mark
             at ./src/log/global.rs:110:18
      app::jobs::run
             at ./src/jobs.rs:9:5
   2: <unknown>
";
        assert_eq!(
            frame_names(trace),
            names(&[
                "levlog::log::caller::resolve",
                "levlog::log::global::mark",
                "app::jobs::run",
                UNRESOLVED,
            ])
        );
        assert_eq!(pick_caller(&frame_names(trace)), "app::jobs::run");
    }

    #[test]
    fn function_name_names_the_enclosing_fn() {
        let name = crate::function_name!();
        assert_eq!(
            name,
            "levlog::log::caller::tests::function_name_names_the_enclosing_fn"
        );
    }

    #[test]
    fn function_name_inside_closure_names_the_fn() {
        let name = (|| crate::function_name!())();
        assert!(name.ends_with("::function_name_inside_closure_names_the_fn"), "{name}");
    }

    #[cfg(feature = "caller-backtrace")]
    #[inline(never)]
    fn operation() -> String {
        resolve()
    }

    #[cfg(all(feature = "caller-backtrace", debug_assertions))]
    #[test]
    fn resolve_reports_caller_of_operation() {
        let name = operation();
        assert!(name.ends_with("resolve_reports_caller_of_operation"), "{name}");
    }

    #[cfg(feature = "caller-backtrace")]
    #[test]
    fn resolve_never_reports_itself_or_the_operation() {
        let name = operation();
        assert!(!name.ends_with("::resolve"), "{name}");
        assert!(!name.ends_with("::operation"), "{name}");
    }

    #[test]
    fn resolve_is_counted_per_thread() {
        let before = resolutions();
        let _ = resolve();
        assert_eq!(resolutions(), before + 1);
    }
}
