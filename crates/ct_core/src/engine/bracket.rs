//! Knockout bracket generation.
//!
//! Maps final league standings onto a static dependency graph. The output
//! is purely structural: it never looks at playoff results, and slots fed
//! by earlier matches stay empty until [`resolve_bracket_progression`]
//! fills them.
//!
//! [`resolve_bracket_progression`]: crate::engine::progression::resolve_bracket_progression

use tracing::debug;

use crate::error::{Result, TournamentError};
use crate::models::{BracketFormat, BracketMatch, SlotSource, TeamStanding, TournamentBracket};

/// Match id of the title decider in every supported format.
pub const FINAL_MATCH_ID: &str = "FINAL";

const MIN_PLAYOFF_TEAMS: usize = 4;

/// Build the knockout bracket for the top four of `sorted_standings`.
///
/// The slice must already be sorted points, then net run rate, then runs
/// scored; the first four rows are taken positionally as seeds 1 to 4.
/// This function never re-sorts.
pub fn derive_knockout_bracket(
    sorted_standings: &[TeamStanding],
    format: BracketFormat,
) -> Result<TournamentBracket> {
    if sorted_standings.len() < MIN_PLAYOFF_TEAMS {
        return Err(TournamentError::InsufficientTeams {
            found: sorted_standings.len(),
        });
    }

    debug!("Deriving {} knockout bracket", format);

    let seed1 = sorted_standings[0].team_id.as_str();
    let seed2 = sorted_standings[1].team_id.as_str();
    let seed3 = sorted_standings[2].team_id.as_str();
    let seed4 = sorted_standings[3].team_id.as_str();

    let matches = match format {
        BracketFormat::StandardTop4 => vec![
            BracketMatch::seeded("SF1", "Semi Final 1", seed1, seed4),
            BracketMatch::seeded("SF2", "Semi Final 2", seed2, seed3),
            BracketMatch::from_sources(
                FINAL_MATCH_ID,
                "Final",
                SlotSource::winner_of("SF1"),
                SlotSource::winner_of("SF2"),
            ),
        ],
        BracketFormat::IplTop4 => vec![
            BracketMatch::seeded("Q1", "Qualifier 1", seed1, seed2),
            BracketMatch::seeded("ELIM", "Eliminator", seed3, seed4),
            // The Q1 loser drops into Qualifier 2 against the Eliminator
            // winner; the Q1 winner goes straight to the final.
            BracketMatch::from_sources(
                "Q2",
                "Qualifier 2",
                SlotSource::loser_of("Q1"),
                SlotSource::winner_of("ELIM"),
            ),
            BracketMatch::from_sources(
                FINAL_MATCH_ID,
                "Final",
                SlotSource::winner_of("Q1"),
                SlotSource::winner_of("Q2"),
            ),
        ],
    };

    Ok(TournamentBracket { format, matches })
}
