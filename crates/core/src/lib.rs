//! Scenario model for the IMA appraisal boot-test harness.
//!
//! This crate holds everything about a test run that can be reasoned about
//! without touching the machine: which scenario the kernel command line
//! selects, what the probe is expected to do under it, and how the probe's
//! termination status maps to the final verdict. The privileged plumbing
//! lives in the `imatest-init` binary.

pub mod cmdline;
pub mod error;
pub mod mode;
pub mod protocol;
pub mod verdict;

// --- main type re-exports ---
// Core types of each module, usable directly from the crate root.

pub use cmdline::{mode_token, read_cmdline};
pub use error::ConfigError;
pub use mode::{Expectation, ScenarioMode};
pub use verdict::{ChildOutcome, EXEC_DENIED_EXIT, Verdict, classify};
