//! The scenario state machine: parse, configure policy, mount, execute,
//! classify.

use std::path::Path;

use tracing::{info, warn};

use imatest_core::protocol::{CMDLINE_PATH, PROBE_PATH};
use imatest_core::{ChildOutcome, EXEC_DENIED_EXIT, ScenarioMode, Verdict, classify, cmdline};

use crate::error::InitError;
use crate::{mounts, policy, runner};

/// Drive one scenario from the kernel command line to a verdict.
///
/// `Err` is a fatal run (FAIL verdict, exit code 1). A returned verdict,
/// PASS or FAIL, is a clean run (exit code 0).
pub fn run() -> Result<Verdict, InitError> {
    let mode = parse_mode(Path::new(CMDLINE_PATH))?;
    policy::configure(mode);
    mounts::mount_test_volume()?;
    let outcome = runner::run_probe(Path::new(PROBE_PATH))?;
    Ok(judge(mode, outcome))
}

/// Parse the scenario mode and announce it.
fn parse_mode(cmdline_path: &Path) -> Result<ScenarioMode, InitError> {
    let mode = cmdline::parse(cmdline_path)?;
    info!("ima_test_mode={}", mode);
    Ok(mode)
}

/// Classify the probe outcome against the mode's expectation and log the
/// reasoning the way the serial-log reader expects to see it.
pub fn judge(mode: ScenarioMode, outcome: ChildOutcome) -> Verdict {
    let expect = mode.expectation();
    let verdict = classify(expect, outcome);

    if expect.exec_denied {
        match verdict {
            Verdict::Pass => info!("exec rejected with EACCES as expected"),
            Verdict::Fail => warn!(
                "expected EACCES (exit {}), got exit={}",
                EXEC_DENIED_EXIT,
                outcome.code_for_log()
            ),
        }
    } else if expect.file_denied {
        match verdict {
            Verdict::Pass => info!(
                "file access denied as expected (exit={})",
                outcome.code_for_log()
            ),
            Verdict::Fail => warn!("expected file denial, got exit={}", outcome.code_for_log()),
        }
    } else {
        match verdict {
            Verdict::Pass => info!("probe exited 0"),
            Verdict::Fail => warn!("probe failed, exit={}", outcome.code_for_log()),
        }
    }

    verdict
}
