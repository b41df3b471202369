//! PID 1 of the IMA appraisal test VM.
//!
//! Mounts the base filesystems, runs one scenario to a verdict, prints the
//! terminal result line and powers the machine off. Single-shot: the
//! controller never respawns its child.

use std::process::ExitCode;

use tracing::{error, info};

use imatest_core::Verdict;
use imatest_init::{logging, mounts, power, scenario};

fn main() -> ExitCode {
    if let Err(e) = logging::init() {
        // Only diagnostics are lost; the verdict line is printed directly.
        eprintln!("INIT: {e}");
    }

    mounts::mount_base();
    info!("started");

    let (verdict, code) = match scenario::run() {
        Ok(verdict) => (verdict, ExitCode::SUCCESS),
        Err(e) => {
            error!("{}", e);
            (Verdict::Fail, ExitCode::FAILURE)
        }
    };

    // The one line the outside world actually reads.
    println!("{}", verdict.result_line());

    power::poweroff();
    code
}
