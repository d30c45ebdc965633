//! Full-tournament simulation plan and result.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::bracket::{BracketFormat, PlayoffMatchResult};
use super::match_record::{CompletedMatch, Fixture};
use super::standings::TeamStanding;

/// A team entered into a simulated tournament.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TournamentTeam {
    pub team_id: String,
    pub name: String,
}

impl TournamentTeam {
    pub fn new(team_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            team_id: team_id.into(),
            name: name.into(),
        }
    }
}

/// Everything needed to run one tournament simulation.
///
/// The seed travels with the plan so the same plan always produces the same
/// tournament; the orchestrator owns no randomness of its own.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TournamentPlan {
    pub format: BracketFormat,
    pub teams: Vec<TournamentTeam>,
    pub fixtures: Vec<Fixture>,
    pub seed: u64,
}

/// Output of a full tournament run: league phase, table, playoffs, champion.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    pub league_matches: Vec<CompletedMatch>,
    pub league_table: Vec<TeamStanding>,
    pub playoff_results: Vec<PlayoffMatchResult>,
    pub champion_id: String,
}
