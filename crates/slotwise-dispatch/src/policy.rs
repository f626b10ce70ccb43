use std::fmt;
use std::str::FromStr;

use crate::error::DispatchError;

/// What the [`Worker`](crate::Worker) does once it walks past the last element without stopping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum OnNoMatch {
    /// invoke the [`TerminalOperator`](crate::TerminalOperator) with the sequence length
    ReturnSentinel,

    /// invoke the [`PositionOperator`](crate::PositionOperator) bound at the last element
    ///
    /// An empty sequence has no last element: the terminal operator is invoked instead.
    ClampToLast,
}

impl OnNoMatch {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ReturnSentinel => "return-sentinel",
            Self::ClampToLast => "clamp-to-last",
        }
    }
}

impl fmt::Display for OnNoMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OnNoMatch {
    type Err = DispatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "return-sentinel" => Ok(Self::ReturnSentinel),
            "clamp-to-last" => Ok(Self::ClampToLast),
            unknown => Err(DispatchError::UnknownPolicy(unknown.to_owned())),
        }
    }
}

pub(crate) mod defaults {
    use super::OnNoMatch;

    pub(crate) const WORKER_ON_NO_MATCH: OnNoMatch = OnNoMatch::ClampToLast;
    pub(crate) const INDEX_ON_NO_MATCH: OnNoMatch = OnNoMatch::ClampToLast;
    pub(crate) const FIND_IF_ON_NO_MATCH: OnNoMatch = OnNoMatch::ReturnSentinel;
    pub(crate) const FIND_IF_ACTION_ON_NO_MATCH: OnNoMatch = OnNoMatch::ClampToLast;
    pub(crate) const FOR_EACH_ON_NO_MATCH: OnNoMatch = OnNoMatch::ReturnSentinel;
}
