//! League table rows.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One row of the league table.
///
/// `overs_faced` and `overs_bowled` are decimal overs already corrected for
/// all-out innings (a bowled-out side is charged the full match quota), so
/// `net_run_rate` can be recomputed from the row alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamStanding {
    pub team_id: String,
    pub played: u32,
    pub won: u32,
    pub lost: u32,
    pub tied: u32,
    pub no_result: u32,
    /// 2 for a win, 1 each for a tie or no-result.
    pub points: u32,
    pub runs_for: u32,
    pub runs_against: u32,
    pub overs_faced: f64,
    pub overs_bowled: f64,
    /// Rounded to 6 decimal places.
    pub net_run_rate: f64,
}

impl TeamStanding {
    pub fn new(team_id: impl Into<String>) -> Self {
        Self {
            team_id: team_id.into(),
            played: 0,
            won: 0,
            lost: 0,
            tied: 0,
            no_result: 0,
            points: 0,
            runs_for: 0,
            runs_against: 0,
            overs_faced: 0.0,
            overs_bowled: 0.0,
            net_run_rate: 0.0,
        }
    }
}
