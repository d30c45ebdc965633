//! # ct_core - Deterministic Cricket Tournament Engine
//!
//! This library derives cricket tournament state from raw match results:
//! league standings with net run rate, knockout brackets, playoff
//! progression, and exhaustive qualification odds. A seeded end-to-end
//! simulator ties the pieces together for replayable test fixtures.
//!
//! ## Features
//! - Pure derivation: same inputs always produce the same outputs
//! - Correct cricket overs arithmetic ("18.3" means 18 overs 3 balls)
//! - Exact 2^n qualification probabilities, enumerated rather than sampled
//! - 100% deterministic simulation (same seed = same tournament)
//! - JSON API for easy integration with UI hosts

pub mod api;
pub mod engine;
pub mod error;
pub mod models;

// Re-export main API functions
pub use api::{
    derive_knockout_bracket_json, derive_league_table_json,
    derive_qualification_scenarios_json, resolve_bracket_progression_json,
    simulate_tournament_json, BracketRequest, LeagueTableRequest, ProgressionRequest,
    ProjectionRequest, SimulationRequest,
};
pub use engine::{
    derive_knockout_bracket, derive_league_table, derive_qualification_scenarios,
    double_round_robin_fixtures, overs_to_decimal, resolve_bracket_progression,
    simulate_tournament,
};
pub use error::{Result, TournamentError};
pub use models::{
    BracketFormat, BracketMatch, CompletedMatch, Fixture, MatchOutcome, Overs,
    PlayoffMatchResult, ProjectionConfig, QualificationResult, SimulationResult, SlotOutcome,
    SlotSource, TeamSide, TeamStanding, TournamentBracket, TournamentPlan, TournamentTeam,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
