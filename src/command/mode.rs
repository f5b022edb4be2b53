//! Operator-selected run mode.

use std::fmt;

/// The single intent selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Enumerate devices on the account (`list`).
    List,
    /// Dump every parameter of the configured device (`check`).
    Check,
    /// Switch to the self-powered strategy (`selfpow`).
    SelfPowered,
    /// Switch to the time-of-use strategy (any other token).
    DefaultStrategy,
}

impl Mode {
    /// Token selecting [`Mode::List`].
    pub const LIST: &'static str = "list";
    /// Token selecting [`Mode::Check`].
    pub const CHECK: &'static str = "check";
    /// Token selecting [`Mode::SelfPowered`].
    pub const SELF_POWERED: &'static str = "selfpow";

    /// Maps a command-line token to a mode.
    ///
    /// Matching is exact and case-sensitive. Any token other than the three
    /// literals selects [`Mode::DefaultStrategy`]; unrecognized input is never
    /// an error, so `tou`, `default` or a typo all apply time-of-use.
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        match token {
            Self::LIST => Self::List,
            Self::CHECK => Self::Check,
            Self::SELF_POWERED => Self::SelfPowered,
            _ => Self::DefaultStrategy,
        }
    }

    /// Returns true if this mode needs a device serial number.
    #[must_use]
    pub const fn requires_serial_number(self) -> bool {
        !matches!(self, Self::List)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List => write!(f, "list"),
            Self::Check => write!(f, "check"),
            Self::SelfPowered => write!(f, "self-powered"),
            Self::DefaultStrategy => write!(f, "time-of-use"),
        }
    }
}
