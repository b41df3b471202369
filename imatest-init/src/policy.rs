//! IMA policy configuration via securityfs.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use tracing::{info, warn};

use imatest_core::ScenarioMode;
use imatest_core::protocol::IMA_POLICY_PATH;

/// Install the scenario's appraisal rules.
///
/// Never fatal: a policy interface that cannot be opened degrades the run
/// to a no-policy boot, which classification then judges on its own terms.
/// A rule write that fails is logged and the remaining rules still go in.
pub fn configure(mode: ScenarioMode) {
    write_rules(mode.policy_rules(), Path::new(IMA_POLICY_PATH));
}

/// Write rule lines to the policy interface, one write per rule.
pub fn write_rules(rules: &[&str], interface: &Path) {
    if rules.is_empty() {
        info!("no IMA policy for this scenario");
        return;
    }

    let mut file = match OpenOptions::new().write(true).open(interface) {
        Ok(file) => file,
        Err(e) => {
            warn!("cannot open IMA policy interface: {}", e);
            return;
        }
    };

    let mut loaded = 0usize;
    for rule in rules {
        match file.write_all(rule.as_bytes()) {
            Ok(()) => loaded += 1,
            Err(e) => warn!("write IMA policy rule '{}' failed: {}", rule.trim_end(), e),
        }
    }
    info!("IMA appraise policy loaded ({}/{} rules)", loaded, rules.len());
}
