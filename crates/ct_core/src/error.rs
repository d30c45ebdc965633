use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TournamentError {
    #[error("Invalid overs format: {raw}")]
    InvalidOversFormat { raw: String },

    #[error("Knockout bracket requires at least 4 teams, found {found}")]
    InsufficientTeams { found: usize },

    #[error("Unsupported bracket format: {raw}")]
    UnsupportedFormat { raw: String },

    #[error("Projection space too large: {fixtures} remaining fixtures exceeds limit of {limit}")]
    ProjectionTooLarge { fixtures: usize, limit: usize },

    #[error("Simulation stalled: no playable match while {stage} is unresolved")]
    SimulationStalled { stage: String },

    #[error("Simulation exceeded safeguard after {iterations} iterations")]
    ExceededSafeguard { iterations: u32 },
}

impl TournamentError {
    /// True when the error comes from caller-supplied data rather than a
    /// malformed bracket graph.
    pub fn is_input_error(&self) -> bool {
        match self {
            TournamentError::InvalidOversFormat { .. } => true,
            TournamentError::InsufficientTeams { .. } => true,
            TournamentError::UnsupportedFormat { .. } => true,
            TournamentError::ProjectionTooLarge { .. } => true,
            TournamentError::SimulationStalled { .. } => false,
            TournamentError::ExceededSafeguard { .. } => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, TournamentError>;
