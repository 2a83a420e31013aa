//! Fatal-error reporting.
//!
//! Every handled usage or I/O error ends here: the message is announced
//! aloud where the platform can speak, printed to stderr, and the process
//! exits with a non-zero code.

use std::io;
use std::process::Command;

use crate::ui::Style;

/// Returns the text-to-speech command available on `os`, if any.
pub fn speech_command(os: &str) -> Option<&'static str> {
    (os == "macos").then_some("say")
}

/// Picks the exit code for an error that reached the top level.
///
/// Errors caused by a failed file operation exit with `IOERR`, everything
/// else is a usage error.
pub fn exit_code_for(err: &anyhow::Error) -> exitcode::ExitCode {
    if err.chain().any(|cause| cause.is::<io::Error>()) {
        exitcode::IOERR
    } else {
        exitcode::USAGE
    }
}

/// Speaks `message` if possible. A failed announcement is only a warning.
pub fn announce(message: &str) {
    let Some(program) = speech_command(std::env::consts::OS) else {
        return;
    };

    match Command::new(program).arg(message).status() {
        Ok(status) if status.success() => {}
        Ok(status) => crate::warn!(
            "{} '{program}' exited with {status}",
            Style::warning("Warning:")
        ),
        Err(e) => crate::warn!(
            "{} failed to run '{program}': {e}",
            Style::warning("Warning:")
        ),
    }
}

/// Announces and prints `message`, then terminates with `code`.
pub fn speak_and_exit(message: &str, code: exitcode::ExitCode) -> ! {
    announce(message);
    eprintln!("{} {message}", Style::error("Error:"));
    std::process::exit(code)
}
