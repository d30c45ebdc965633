//! Knockout bracket structure.
//!
//! A bracket is a small dependency graph: each match either names its
//! participants directly (seeded from the league table) or points at the
//! outcome of an earlier match through a [`SlotSource`]. Resolution is a
//! separate, pure step; the structures here never carry partial state.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::TournamentError;

/// Supported knockout formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BracketFormat {
    /// Two semi-finals (1v4, 2v3) and a final.
    StandardTop4,
    /// IPL page playoff: Qualifier 1, Eliminator, Qualifier 2, Final.
    /// The Qualifier 1 loser gets a second life in Qualifier 2.
    IplTop4,
}

impl FromStr for BracketFormat {
    type Err = TournamentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "STANDARD_TOP4" => Ok(BracketFormat::StandardTop4),
            "IPL_TOP4" => Ok(BracketFormat::IplTop4),
            _ => Err(TournamentError::UnsupportedFormat { raw: s.to_string() }),
        }
    }
}

impl fmt::Display for BracketFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BracketFormat::StandardTop4 => write!(f, "STANDARD_TOP4"),
            BracketFormat::IplTop4 => write!(f, "IPL_TOP4"),
        }
    }
}

/// Which outcome of the source match fills the slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SlotOutcome {
    Winner,
    Loser,
}

/// Where a team slot gets its occupant from once the source match has a
/// result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SlotSource {
    pub source_match_id: String,
    pub outcome: SlotOutcome,
}

impl SlotSource {
    pub fn winner_of(match_id: impl Into<String>) -> Self {
        Self {
            source_match_id: match_id.into(),
            outcome: SlotOutcome::Winner,
        }
    }

    pub fn loser_of(match_id: impl Into<String>) -> Self {
        Self {
            source_match_id: match_id.into(),
            outcome: SlotOutcome::Loser,
        }
    }
}

/// One knockout match. Slots are `None` until resolution fills them from
/// their sources; seeded slots are populated at construction and carry no
/// source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BracketMatch {
    pub match_id: String,
    /// Display label, e.g. "Qualifier 1".
    pub stage: String,
    pub team_a_id: Option<String>,
    pub team_b_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub team_a_source: Option<SlotSource>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub team_b_source: Option<SlotSource>,
}

impl BracketMatch {
    /// A match whose participants are known up front.
    pub fn seeded(
        match_id: impl Into<String>,
        stage: impl Into<String>,
        team_a_id: impl Into<String>,
        team_b_id: impl Into<String>,
    ) -> Self {
        Self {
            match_id: match_id.into(),
            stage: stage.into(),
            team_a_id: Some(team_a_id.into()),
            team_b_id: Some(team_b_id.into()),
            team_a_source: None,
            team_b_source: None,
        }
    }

    /// A match whose participants depend on earlier results.
    pub fn from_sources(
        match_id: impl Into<String>,
        stage: impl Into<String>,
        team_a_source: SlotSource,
        team_b_source: SlotSource,
    ) -> Self {
        Self {
            match_id: match_id.into(),
            stage: stage.into(),
            team_a_id: None,
            team_b_id: None,
            team_a_source: Some(team_a_source),
            team_b_source: Some(team_b_source),
        }
    }

    /// Both slots occupied.
    pub fn is_ready(&self) -> bool {
        self.team_a_id.is_some() && self.team_b_id.is_some()
    }
}

/// The full knockout graph for one tournament.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TournamentBracket {
    pub format: BracketFormat,
    pub matches: Vec<BracketMatch>,
}

impl TournamentBracket {
    pub fn match_by_id(&self, match_id: &str) -> Option<&BracketMatch> {
        self.matches.iter().find(|m| m.match_id == match_id)
    }
}

/// Decided outcome of one knockout match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayoffMatchResult {
    pub match_id: String,
    pub winner_team_id: String,
    pub loser_team_id: String,
}
