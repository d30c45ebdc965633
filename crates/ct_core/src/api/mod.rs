pub mod json;

pub use json::{
    derive_knockout_bracket_json, derive_league_table_json, derive_qualification_scenarios_json,
    resolve_bracket_progression_json, simulate_tournament_json, BracketRequest,
    LeagueTableRequest, ProgressionRequest, ProjectionRequest, SimulationRequest,
};
