//! Transition outcomes
//!
//! Watching a field `x` for a significant value `v`, each observation is
//! either `x == v` or `x != v`. A pair of observations (earlier, later)
//! is therefore exactly one of four transitions:
//!
//! | earlier == v | later == v | outcome |
//! |---|---|---|
//! | yes | yes | [`Transition::BothMatch`] |
//! | no | yes | [`Transition::NowMatches`] |
//! | yes | no | [`Transition::StoppedMatching`] |
//! | no | no | [`Transition::NeitherMatch`] |

use serde::{Deserialize, Serialize};

/// How a field's match against a reference value changed between two
/// snapshots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transition {
    /// Matched before and after, no change
    BothMatch,
    /// Matched neither before nor after, no change
    NeitherMatch,
    /// Did not match before, matches now
    NowMatches,
    /// Matched before, no longer matches
    StoppedMatching,
}

impl Transition {
    /// All four outcomes
    pub const ALL: [Transition; 4] = [
        Transition::BothMatch,
        Transition::NeitherMatch,
        Transition::NowMatches,
        Transition::StoppedMatching,
    ];

    /// Classify a pair of match results
    pub fn from_matches(earlier_matches: bool, later_matches: bool) -> Self {
        match (earlier_matches, later_matches) {
            (true, true) => Transition::BothMatch,
            (false, true) => Transition::NowMatches,
            (true, false) => Transition::StoppedMatching,
            (false, false) => Transition::NeitherMatch,
        }
    }

    /// True iff the match state actually flipped
    pub fn is_change(&self) -> bool {
        match self {
            Transition::NowMatches | Transition::StoppedMatching => true,
            Transition::BothMatch | Transition::NeitherMatch => false,
        }
    }

    /// Whether the earlier snapshot matched
    pub fn earlier_matched(&self) -> bool {
        matches!(self, Transition::BothMatch | Transition::StoppedMatching)
    }

    /// Whether the later snapshot matches
    pub fn later_matches(&self) -> bool {
        matches!(self, Transition::BothMatch | Transition::NowMatches)
    }

    /// Canonical snake_case name
    pub fn as_str(&self) -> &'static str {
        match self {
            Transition::BothMatch => "both_match",
            Transition::NeitherMatch => "neither_match",
            Transition::NowMatches => "now_matches",
            Transition::StoppedMatching => "stopped_matching",
        }
    }
}

impl std::fmt::Display for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
