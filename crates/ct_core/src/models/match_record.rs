//! Completed-match and fixture wire types.
//!
//! These structures are the SOURCE of the data pipeline: every engine
//! operation consumes completed matches or fixtures and derives from them.
//! Field names serialize in camelCase to match the scoreboard feeds that
//! produce them.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::engine::overs;
use crate::error::Result;

// ============================================
// Overs notation
// ============================================

/// Overs in cricket notation, as scoreboards report them.
///
/// `"18.3"` means 18 overs and 3 balls (18.5 decimal overs), not a decimal
/// fraction. Feeds send either a JSON number or a string, so both are
/// accepted; [`Overs::to_decimal`] normalizes to true decimal overs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum Overs {
    Number(f64),
    Text(String),
}

impl Overs {
    /// Convert to decimal overs (`whole + balls/6`).
    ///
    /// Numbers are read through their shortest display form, so `18.3`
    /// means 18 overs 3 balls exactly as the string `"18.3"` does.
    pub fn to_decimal(&self) -> Result<f64> {
        match self {
            Overs::Number(n) => overs::overs_to_decimal(&n.to_string()),
            Overs::Text(s) => overs::overs_to_decimal(s),
        }
    }
}

impl From<f64> for Overs {
    fn from(n: f64) -> Self {
        Overs::Number(n)
    }
}

impl From<&str> for Overs {
    fn from(s: &str) -> Self {
        Overs::Text(s.to_string())
    }
}

// ============================================
// Match records
// ============================================

/// Outcome of a completed match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchOutcome {
    AWin,
    BWin,
    Tie,
    NoResult,
}

/// Side identifier within a single match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum TeamSide {
    A,
    B,
}

/// One completed league match as reported by the scorer.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompletedMatch {
    pub team_a_id: String,
    pub team_b_id: String,
    pub team_a_runs: u32,
    /// Overs actually faced by team A, in cricket notation.
    pub team_a_overs: Overs,
    pub team_a_all_out: bool,
    pub team_b_runs: u32,
    pub team_b_overs: Overs,
    pub team_b_all_out: bool,
    pub result: MatchOutcome,
    /// Super-over verdict after a tie. A super-over win counts as a full
    /// win, never as a tie. Coherence with `result` (only meaningful when
    /// `result` is `TIE`) is the reporter's contract; it is not validated
    /// here.
    #[serde(rename = "isSuperOverWin", skip_serializing_if = "Option::is_none", default)]
    pub super_over_winner: Option<TeamSide>,
    /// Scheduled quota for this match in decimal overs. Already rain-revised
    /// when the match was shortened, so it is used as-is without notation
    /// conversion.
    pub match_overs_limit: f64,
    /// Informational flag from the feed; no engine logic reads it.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub is_rain_affected: Option<bool>,
}

impl CompletedMatch {
    /// Overs charged against team A for run-rate purposes: the full quota
    /// when the side was bowled out, otherwise the overs actually faced.
    pub fn effective_overs_faced_a(&self) -> Result<f64> {
        if self.team_a_all_out {
            Ok(self.match_overs_limit)
        } else {
            self.team_a_overs.to_decimal()
        }
    }

    /// Overs charged against team B. See [`Self::effective_overs_faced_a`].
    pub fn effective_overs_faced_b(&self) -> Result<f64> {
        if self.team_b_all_out {
            Ok(self.match_overs_limit)
        } else {
            self.team_b_overs.to_decimal()
        }
    }
}

/// A scheduled, not yet played pairing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Fixture {
    pub team_a_id: String,
    pub team_b_id: String,
}

impl Fixture {
    pub fn new(team_a_id: impl Into<String>, team_b_id: impl Into<String>) -> Self {
        Self {
            team_a_id: team_a_id.into(),
            team_b_id: team_b_id.into(),
        }
    }
}
