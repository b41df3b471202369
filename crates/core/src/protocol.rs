//! Fixed paths, markers, and rule literals shared by controller and probe.
//!
//! These are the externally observed contract of the harness: the VM driver
//! scrapes the serial console for the marker lines, and the disk image build
//! places the probe and its data file at the paths below. Changing any of
//! them breaks every driver-side expectation at once.

/// Kernel command-line source read by the controller.
pub const CMDLINE_PATH: &str = "/proc/cmdline";

/// Upper bound on the command-line bytes examined; anything past it is not read.
pub const CMDLINE_MAX: usize = 512;

/// Key token selecting the scenario.
pub const MODE_KEY: &str = "ima_test_mode=";

/// IMA policy control interface on securityfs.
pub const IMA_POLICY_PATH: &str = "/sys/kernel/security/ima/policy";

/// Appraisal rule checked before exec.
pub const BPRM_RULE: &str = "appraise func=BPRM_CHECK fowner=0\n";

/// Appraisal rule checked before file open.
pub const FILE_RULE: &str = "appraise func=FILE_CHECK fowner=0\n";

/// Block device carrying the test volume.
pub const TEST_DISK: &str = "/dev/vda";

/// Mount point of the test volume.
pub const TEST_MOUNT: &str = "/mnt";

/// Filesystem type of the test volume.
pub const TEST_FSTYPE: &str = "ext4";

/// Probe executable on the test volume.
pub const PROBE_PATH: &str = "/mnt/ima-test";

/// Data file the probe reads.
pub const PROBE_DATA_PATH: &str = "/mnt/test-data.txt";

/// Prefix of every controller diagnostic line.
pub const INIT_LOG_PREFIX: &str = "INIT: ";

/// Printed by the probe as soon as its image runs.
pub const PROBE_START_MARKER: &str = "IMA-TEST-PASS";

/// Printed by the probe when opening the data file is denied.
pub const FILE_DENIED_MARKER: &str = "IMA-FILE-DENIED";

/// Prefix for any other probe-side file error.
pub const FILE_ERROR_PREFIX: &str = "IMA-FILE-ERROR: ";

/// Terminal verdict line for a passing run.
pub const RESULT_PASS_LINE: &str = "IMA-RESULT:PASS";

/// Terminal verdict line for a failing run.
pub const RESULT_FAIL_LINE: &str = "IMA-RESULT:FAIL";
