//! Console routing for the CLI.
//!
//! stdout carries only the API response. Status lines and warnings go to
//! stderr; `--quiet` silences status lines but never warnings or errors.

use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};

static QUIET: AtomicBool = AtomicBool::new(false);
static NO_COLOR: OnceLock<bool> = OnceLock::new();

/// Enables or disables quiet mode. Called once from `main` with `--quiet`.
pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

pub fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Colors are off when `NO_COLOR` is set to a non-empty value (https://no-color.org/).
pub fn is_no_color() -> bool {
    *NO_COLOR.get_or_init(|| std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()))
}

/// Print a status line to stderr unless quiet mode is on.
#[macro_export]
macro_rules! status {
    ($($arg:tt)*) => {
        if !$crate::output::is_quiet() {
            eprintln!($($arg)*);
        }
    };
}

/// Print a warning to stderr, even in quiet mode.
///
/// Expands to a unit expression, so it can stand as a match arm.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        { eprintln!($($arg)*) }
    };
}
