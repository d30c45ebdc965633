//! Qualification projection configuration and output.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Tuning for the scenario enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionConfig {
    /// Table positions that qualify for the playoffs.
    pub qualification_spots: usize,
    /// Hard cap on remaining fixtures; the scenario space is 2^n.
    pub max_fixtures_allowed: usize,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            qualification_spots: 4,
            max_fixtures_allowed: 6,
        }
    }
}

/// Exhaustive qualification odds for one team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct QualificationResult {
    pub team_id: String,
    pub qualified_scenarios: u64,
    pub total_scenarios: u64,
    /// Exact fraction `qualified / total`; 0 when no scenarios exist.
    pub qualification_probability: f64,
    /// Qualifies in every enumerated scenario (and at least one exists).
    pub guaranteed_qualified: bool,
    /// Qualifies in no scenario.
    pub guaranteed_eliminated: bool,
}
