//! The tri-state trust classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Trust classification of a filesystem path at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrustVerdict {
    /// The path is explicitly trusted; it may join the workspace.
    Trusted,
    /// The path is explicitly untrusted; admission rejects it.
    Untrusted,
    /// No decision has been recorded; admission defers to the user.
    Unknown,
}

impl TrustVerdict {
    /// Check if the verdict is trusted.
    #[must_use]
    pub fn is_trusted(&self) -> bool {
        matches!(self, Self::Trusted)
    }

    /// Check if the verdict is untrusted.
    #[must_use]
    pub fn is_untrusted(&self) -> bool {
        matches!(self, Self::Untrusted)
    }

    /// Check if no verdict has been recorded.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

impl fmt::Display for TrustVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Trusted => "trusted",
            Self::Untrusted => "untrusted",
            Self::Unknown => "unknown",
        };
        write!(f, "{label}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_predicates() {
        assert!(TrustVerdict::Trusted.is_trusted());
        assert!(!TrustVerdict::Trusted.is_untrusted());
        assert!(TrustVerdict::Untrusted.is_untrusted());
        assert!(TrustVerdict::Unknown.is_unknown());
        assert!(!TrustVerdict::Unknown.is_trusted());
    }

    #[test]
    fn verdict_display() {
        assert_eq!(TrustVerdict::Trusted.to_string(), "trusted");
        assert_eq!(TrustVerdict::Untrusted.to_string(), "untrusted");
        assert_eq!(TrustVerdict::Unknown.to_string(), "unknown");
    }
}
