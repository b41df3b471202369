//! Controller-fatal error type.

use imatest_core::ConfigError;

/// Errors that abort the run with a FAIL verdict and exit code 1.
///
/// Policy-interface failures are deliberately absent: they are logged and
/// the run continues, since a missing policy is itself a tested condition.
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    /// The scenario could not be derived from the kernel command line.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// Mounting the test volume failed; there is nothing to probe.
    #[error("mount {device} on {target} failed: {errno}")]
    Mount {
        /// Source block device.
        device: &'static str,
        /// Mount point.
        target: &'static str,
        /// Kernel error.
        errno: nix::Error,
    },

    /// Waiting for the probe to terminate failed.
    #[error("wait for probe failed: {0}")]
    Wait(#[from] std::io::Error),
}
