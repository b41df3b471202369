//! Child-outcome classification into the terminal verdict.

use std::fmt;
use std::os::unix::process::ExitStatusExt;
use std::process::ExitStatus;

use crate::mode::Expectation;
use crate::protocol::{RESULT_FAIL_LINE, RESULT_PASS_LINE};

/// Exit status the child carries when the kernel rejects its exec.
///
/// The spawn failure propagates the OS error code as the exit status, so a
/// permission-denied exec surfaces as EACCES. This numeric channel is the
/// real signal of the exec-denial scenario, not an accident.
pub const EXEC_DENIED_EXIT: i32 = 13;

/// How the probe terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildOutcome {
    /// Normal exit with the given code.
    Exited(i32),
    /// Killed by the given signal. Never passes any expectation.
    Signaled(i32),
}

impl ChildOutcome {
    /// Exit code used in diagnostics; signal death logs as -1.
    pub fn code_for_log(self) -> i32 {
        match self {
            Self::Exited(code) => code,
            Self::Signaled(_) => -1,
        }
    }
}

impl From<ExitStatus> for ChildOutcome {
    fn from(status: ExitStatus) -> Self {
        match status.code() {
            Some(code) => Self::Exited(code),
            None => Self::Signaled(status.signal().unwrap_or(0)),
        }
    }
}

/// Terminal result of a run. Rendered exactly once, never revised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Fail,
}

impl Verdict {
    /// The line the VM driver greps the serial log for.
    pub fn result_line(self) -> &'static str {
        match self {
            Self::Pass => RESULT_PASS_LINE,
            Self::Fail => RESULT_FAIL_LINE,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pass => "PASS",
            Self::Fail => "FAIL",
        })
    }
}

/// Classify a terminated child against the scenario expectation.
///
/// * `exec_denied`: pass only on a normal exit with [`EXEC_DENIED_EXIT`].
/// * `file_denied`: pass on any normal non-zero exit.
/// * neither: pass only on a normal exit 0.
///
/// Signal death never passes.
pub fn classify(expect: Expectation, outcome: ChildOutcome) -> Verdict {
    let pass = match outcome {
        ChildOutcome::Exited(code) if expect.exec_denied => code == EXEC_DENIED_EXIT,
        ChildOutcome::Exited(code) if expect.file_denied => code != 0,
        ChildOutcome::Exited(code) => code == 0,
        ChildOutcome::Signaled(_) => false,
    };
    if pass { Verdict::Pass } else { Verdict::Fail }
}
