pub mod bracket;
pub mod league_table;
pub mod overs;
pub mod progression;
pub mod projection;
pub mod simulation;

pub use bracket::{derive_knockout_bracket, FINAL_MATCH_ID};
pub use league_table::derive_league_table;
pub use overs::overs_to_decimal;
pub use progression::resolve_bracket_progression;
pub use projection::derive_qualification_scenarios;
pub use simulation::{double_round_robin_fixtures, simulate_tournament};
