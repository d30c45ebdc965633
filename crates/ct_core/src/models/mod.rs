pub mod bracket;
pub mod match_record;
pub mod projection;
pub mod simulation;
pub mod standings;

pub use bracket::{
    BracketFormat, BracketMatch, PlayoffMatchResult, SlotOutcome, SlotSource, TournamentBracket,
};
pub use match_record::{CompletedMatch, Fixture, MatchOutcome, Overs, TeamSide};
pub use projection::{ProjectionConfig, QualificationResult};
pub use simulation::{SimulationResult, TournamentPlan, TournamentTeam};
pub use standings::TeamStanding;
