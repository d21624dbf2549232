//! Request sequencing for overlapping fetches.
//!
//! Every fetch is issued a [`RequestId`] from a per-kind [`RequestSequence`].
//! When a result comes back, the [`FencingPolicy`] decides whether it may
//! still be applied.

use std::fmt;
use std::str::FromStr;

/// Monotonically increasing id of one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(u64);

impl RequestId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Issues request ids for one kind of request.
#[derive(Debug, Clone, Default)]
pub struct RequestSequence {
    issued: u64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next id.
    pub fn issue(&mut self) -> RequestId {
        self.issued += 1;
        RequestId(self.issued)
    }

    /// The most recently issued id, if any.
    pub fn latest(&self) -> Option<RequestId> {
        (self.issued > 0).then_some(RequestId(self.issued))
    }

    /// Whether `id` is the most recently issued id.
    pub fn is_latest(&self, id: RequestId) -> bool {
        id.0 == self.issued
    }
}

/// What to do with a result whose request has since been superseded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FencingPolicy {
    /// Only the most recently issued request may apply its result; older
    /// results are dropped.
    #[default]
    LatestIssued,
    /// No fencing: every result is applied as it arrives, so the request that
    /// resolves last wins.
    LastResolved,
}

impl FencingPolicy {
    /// Whether a result for `id` may be applied given the requests issued so far.
    pub fn admits(&self, sequence: &RequestSequence, id: RequestId) -> bool {
        match self {
            FencingPolicy::LatestIssued => sequence.is_latest(id),
            FencingPolicy::LastResolved => true,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FencingPolicy::LatestIssued => "latest",
            FencingPolicy::LastResolved => "last-resolved",
        }
    }
}

impl fmt::Display for FencingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FencingPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "latest" | "latest-issued" => Ok(FencingPolicy::LatestIssued),
            "last-resolved" | "none" | "off" => Ok(FencingPolicy::LastResolved),
            other => Err(format!(
                "expected 'latest' or 'last-resolved', got '{}'",
                other
            )),
        }
    }
}
