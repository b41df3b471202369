//! Probe execution: spawn with a replaced image, await termination.

use std::path::Path;
use std::process::Command;

use tracing::{info, warn};

use imatest_core::ChildOutcome;

/// Spawn the probe with no arguments and block until it terminates.
///
/// A spawn rejection is not an error here: the kernel refusing the new
/// image is the expected signal of the exec-denial scenario, so the OS
/// error code becomes the child's exit code and flows into classification.
/// Only a failed wait is an error.
pub fn run_probe(path: &Path) -> std::io::Result<ChildOutcome> {
    let mut child = match Command::new(path).spawn() {
        Ok(child) => child,
        Err(e) => {
            let code = e.raw_os_error().unwrap_or(-1);
            warn!("exec {} failed: {} (errno={})", path.display(), e, code);
            return Ok(ChildOutcome::Exited(code));
        }
    };

    let status = child.wait()?;
    let outcome = ChildOutcome::from(status);
    info!("probe terminated, exit={}", outcome.code_for_log());
    Ok(outcome)
}
