//! Scenario modes and what each one expects from the probe.
//!
//! A mode bundles two derived facts: which IMA policy rules to install
//! before the probe runs, and which outcome counts as a pass. Both are
//! total functions of the mode so a run can never mix the policy of one
//! scenario with the expectation of another.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;
use crate::protocol::{BPRM_RULE, FILE_RULE};

/// The five boot scenarios, selected by `ima_test_mode=` on the kernel
/// command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioMode {
    /// Exec appraisal enforced; the probe binary is signed, exec succeeds.
    EnforceSigned,
    /// Exec appraisal enforced; the probe binary is unsigned, exec must be
    /// rejected with permission denied.
    EnforceUnsigned,
    /// Exec and file appraisal enforced; binary and data file both signed.
    FileSigned,
    /// Exec and file appraisal enforced; the data file is unsigned, the
    /// probe's read must be denied.
    FileUnsigned,
    /// No policy loaded; appraisal stays inactive end to end.
    NoIma,
}

impl ScenarioMode {
    /// All modes, in command-line token order.
    pub const ALL: [ScenarioMode; 5] = [
        ScenarioMode::EnforceSigned,
        ScenarioMode::EnforceUnsigned,
        ScenarioMode::FileSigned,
        ScenarioMode::FileUnsigned,
        ScenarioMode::NoIma,
    ];

    /// Command-line token for this mode.
    pub fn token(self) -> &'static str {
        match self {
            Self::EnforceSigned => "enforce_signed",
            Self::EnforceUnsigned => "enforce_unsigned",
            Self::FileSigned => "file_signed",
            Self::FileUnsigned => "file_unsigned",
            Self::NoIma => "noima",
        }
    }

    /// Policy rule lines to install, in install order (BPRM before FILE).
    pub fn policy_rules(self) -> &'static [&'static str] {
        match self {
            Self::EnforceSigned | Self::EnforceUnsigned => &[BPRM_RULE],
            Self::FileSigned | Self::FileUnsigned => &[BPRM_RULE, FILE_RULE],
            Self::NoIma => &[],
        }
    }

    /// What the scenario expects the probe to do.
    pub fn expectation(self) -> Expectation {
        match self {
            Self::EnforceUnsigned => Expectation {
                exec_denied: true,
                file_denied: false,
            },
            Self::FileUnsigned => Expectation {
                exec_denied: false,
                file_denied: true,
            },
            Self::EnforceSigned | Self::FileSigned | Self::NoIma => Expectation::default(),
        }
    }
}

impl FromStr for ScenarioMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "enforce_signed" => Ok(Self::EnforceSigned),
            "enforce_unsigned" => Ok(Self::EnforceUnsigned),
            "file_signed" => Ok(Self::FileSigned),
            "file_unsigned" => Ok(Self::FileUnsigned),
            "noima" => Ok(Self::NoIma),
            other => Err(ConfigError::UnknownMode {
                token: other.to_owned(),
            }),
        }
    }
}

impl fmt::Display for ScenarioMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Which denial, if any, the scenario expects from the probe.
///
/// At most one flag is set; both false means the probe must run to a clean
/// exit 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Expectation {
    /// Probe exec must be rejected with the permission-denied code.
    pub exec_denied: bool,
    /// Probe must fail to read its data file (any non-zero exit).
    pub file_denied: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_round_trip() {
        for mode in ScenarioMode::ALL {
            let parsed: ScenarioMode = mode.token().parse().expect("known token should parse");
            assert_eq!(parsed, mode, "token '{}' should parse to itself", mode);
        }
    }

    #[test]
    fn test_unknown_token_rejected() {
        let err = "enforce"
            .parse::<ScenarioMode>()
            .expect_err("unknown token should be rejected");
        assert!(matches!(err, ConfigError::UnknownMode { token } if token == "enforce"));
    }

    #[test]
    fn test_empty_token_rejected() {
        let err = ""
            .parse::<ScenarioMode>()
            .expect_err("empty token should be rejected");
        assert!(matches!(err, ConfigError::UnknownMode { token } if token.is_empty()));
    }

    #[test]
    fn test_expectation_matrix() {
        assert_eq!(
            ScenarioMode::EnforceUnsigned.expectation(),
            Expectation {
                exec_denied: true,
                file_denied: false
            }
        );
        assert_eq!(
            ScenarioMode::FileUnsigned.expectation(),
            Expectation {
                exec_denied: false,
                file_denied: true
            }
        );
        for mode in [
            ScenarioMode::EnforceSigned,
            ScenarioMode::FileSigned,
            ScenarioMode::NoIma,
        ] {
            assert_eq!(
                mode.expectation(),
                Expectation::default(),
                "{} should expect a clean run",
                mode
            );
        }
    }

    #[test]
    fn test_expectation_flags_mutually_exclusive() {
        for mode in ScenarioMode::ALL {
            let e = mode.expectation();
            assert!(
                !(e.exec_denied && e.file_denied),
                "{} must not expect both denials",
                mode
            );
        }
    }

    #[test]
    fn test_policy_rules_order() {
        assert_eq!(ScenarioMode::EnforceSigned.policy_rules(), &[BPRM_RULE]);
        assert_eq!(ScenarioMode::EnforceUnsigned.policy_rules(), &[BPRM_RULE]);
        assert_eq!(
            ScenarioMode::FileSigned.policy_rules(),
            &[BPRM_RULE, FILE_RULE],
            "BPRM rule should come before FILE rule"
        );
        assert_eq!(
            ScenarioMode::FileUnsigned.policy_rules(),
            &[BPRM_RULE, FILE_RULE]
        );
        assert!(ScenarioMode::NoIma.policy_rules().is_empty());
    }
}
