//! Final power-off.

use nix::sys::reboot::{RebootMode, reboot};
use nix::unistd::sync;
use tracing::error;

/// Flush filesystems and power the machine off.
///
/// Does not return when the reboot call succeeds. If it fails (no
/// privilege, or not actually PID 1 in a VM) the caller falls through to a
/// normal process exit with the code it already chose.
pub fn poweroff() {
    sync();
    if let Err(errno) = reboot(RebootMode::RB_POWER_OFF) {
        error!("poweroff failed: {}", errno);
    }
}
