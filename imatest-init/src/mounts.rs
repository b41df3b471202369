//! Mount plumbing for the harness environment.

use std::io::ErrorKind;

use nix::mount::{MsFlags, mount};
use tracing::{info, warn};

use imatest_core::protocol::{TEST_DISK, TEST_FSTYPE, TEST_MOUNT};

use crate::error::InitError;

/// Virtual filesystems mounted before anything else runs. securityfs must
/// come after sysfs; it lives below /sys.
const BASE_MOUNTS: &[(&str, &str, &str)] = &[
    ("proc", "/proc", "proc"),
    ("sysfs", "/sys", "sysfs"),
    ("devtmpfs", "/dev", "devtmpfs"),
    ("securityfs", "/sys/kernel/security", "securityfs"),
];

/// Mount proc, sysfs, devtmpfs and securityfs.
///
/// Failures are logged and skipped: some of these may already be mounted,
/// and the scenario decides later what is actually fatal.
pub fn mount_base() {
    for &(source, target, fstype) in BASE_MOUNTS {
        if let Err(errno) =
            mount::<str, str, str, str>(Some(source), target, Some(fstype), MsFlags::empty(), None)
        {
            warn!("mount {} on {} failed: {}", fstype, target, errno);
        }
    }
}

/// Mount the read-only test volume.
///
/// Fatal on failure: without the volume there is no probe to run.
pub fn mount_test_volume() -> Result<(), InitError> {
    if let Err(e) = std::fs::create_dir(TEST_MOUNT) {
        if e.kind() != ErrorKind::AlreadyExists {
            warn!("mkdir {} failed: {}", TEST_MOUNT, e);
        }
    }

    mount::<str, str, str, str>(
        Some(TEST_DISK),
        TEST_MOUNT,
        Some(TEST_FSTYPE),
        MsFlags::MS_RDONLY,
        None,
    )
    .map_err(|errno| InitError::Mount {
        device: TEST_DISK,
        target: TEST_MOUNT,
        errno,
    })?;

    info!("mounted {} at {}", TEST_DISK, TEST_MOUNT);
    Ok(())
}
