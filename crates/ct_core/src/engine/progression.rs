//! Bracket progression resolution.
//!
//! Results of playoff matches arrive one at a time over days. Rather than
//! patching the bracket incrementally, the whole graph is recomputed from
//! the blueprint plus the accumulated result list on every call, which
//! makes resolution idempotent and trivially re-runnable.

use std::collections::HashMap;

use tracing::debug;

use crate::models::{PlayoffMatchResult, SlotOutcome, SlotSource, TournamentBracket};

/// Fill bracket slots from recorded playoff results.
///
/// Returns a fresh bracket; the input is never mutated. A slot with a
/// source whose match has no recorded result stays empty. When `results`
/// carries more than one entry for a match id, the last one wins.
pub fn resolve_bracket_progression(
    bracket: &TournamentBracket,
    results: &[PlayoffMatchResult],
) -> TournamentBracket {
    debug!("Resolving bracket progression from {} recorded results", results.len());

    let mut result_map: HashMap<&str, &PlayoffMatchResult> = HashMap::new();
    for result in results {
        result_map.insert(result.match_id.as_str(), result);
    }

    let matches = bracket
        .matches
        .iter()
        .map(|m| {
            let mut resolved = m.clone();
            if let Some(team) = slot_occupant(&resolved.team_a_source, &result_map) {
                resolved.team_a_id = Some(team);
            }
            if let Some(team) = slot_occupant(&resolved.team_b_source, &result_map) {
                resolved.team_b_id = Some(team);
            }
            resolved
        })
        .collect();

    TournamentBracket {
        format: bracket.format,
        matches,
    }
}

/// Team advancing into a sourced slot, if its source match has a result.
fn slot_occupant(
    source: &Option<SlotSource>,
    results: &HashMap<&str, &PlayoffMatchResult>,
) -> Option<String> {
    let source = source.as_ref()?;
    let result = results.get(source.source_match_id.as_str())?;
    let team = match source.outcome {
        SlotOutcome::Winner => &result.winner_team_id,
        SlotOutcome::Loser => &result.loser_team_id,
    };
    Some(team.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::bracket::derive_knockout_bracket;
    use crate::models::{BracketFormat, TeamStanding};

    fn top4_standings() -> Vec<TeamStanding> {
        ["S1", "S2", "S3", "S4"]
            .iter()
            .map(|id| TeamStanding::new(*id))
            .collect()
    }

    fn result(match_id: &str, winner: &str, loser: &str) -> PlayoffMatchResult {
        PlayoffMatchResult {
            match_id: match_id.to_string(),
            winner_team_id: winner.to_string(),
            loser_team_id: loser.to_string(),
        }
    }

    #[test]
    fn ipl_bracket_resolves_step_by_step() {
        let bracket =
            derive_knockout_bracket(&top4_standings(), BracketFormat::IplTop4).unwrap();

        // Qualifier 1 decided: its winner reaches the final, its loser
        // drops into Qualifier 2.
        let after_q1 = resolve_bracket_progression(&bracket, &[result("Q1", "S1", "S2")]);
        let q2 = after_q1.match_by_id("Q2").unwrap();
        assert_eq!(q2.team_a_id.as_deref(), Some("S2"));
        assert_eq!(q2.team_b_id, None);
        let final_match = after_q1.match_by_id("FINAL").unwrap();
        assert_eq!(final_match.team_a_id.as_deref(), Some("S1"));
        assert_eq!(final_match.team_b_id, None);

        let all_results = vec![
            result("Q1", "S1", "S2"),
            result("ELIM", "S3", "S4"),
            result("Q2", "S3", "S2"),
        ];
        let resolved = resolve_bracket_progression(&bracket, &all_results);
        let q2 = resolved.match_by_id("Q2").unwrap();
        assert_eq!(q2.team_a_id.as_deref(), Some("S2"));
        assert_eq!(q2.team_b_id.as_deref(), Some("S3"));
        let final_match = resolved.match_by_id("FINAL").unwrap();
        assert_eq!(final_match.team_a_id.as_deref(), Some("S1"));
        assert_eq!(final_match.team_b_id.as_deref(), Some("S3"));
    }

    #[test]
    fn standard_final_fills_from_both_semis() {
        let bracket =
            derive_knockout_bracket(&top4_standings(), BracketFormat::StandardTop4).unwrap();
        let results = vec![result("SF1", "S4", "S1"), result("SF2", "S2", "S3")];

        let resolved = resolve_bracket_progression(&bracket, &results);

        let final_match = resolved.match_by_id("FINAL").unwrap();
        assert_eq!(final_match.team_a_id.as_deref(), Some("S4"));
        assert_eq!(final_match.team_b_id.as_deref(), Some("S2"));
    }

    #[test]
    fn input_bracket_is_untouched() {
        let bracket =
            derive_knockout_bracket(&top4_standings(), BracketFormat::StandardTop4).unwrap();
        let before = bracket.clone();

        let _ = resolve_bracket_progression(&bracket, &[result("SF1", "S1", "S4")]);

        assert_eq!(bracket, before);
    }

    #[test]
    fn resolution_is_idempotent() {
        let bracket =
            derive_knockout_bracket(&top4_standings(), BracketFormat::IplTop4).unwrap();
        let results = vec![result("Q1", "S2", "S1"), result("ELIM", "S4", "S3")];

        let once = resolve_bracket_progression(&bracket, &results);
        let twice = resolve_bracket_progression(&bracket, &results);

        assert_eq!(once, twice);
    }

    #[test]
    fn seeded_matches_and_unknown_results_are_left_alone() {
        let bracket =
            derive_knockout_bracket(&top4_standings(), BracketFormat::IplTop4).unwrap();

        let resolved =
            resolve_bracket_progression(&bracket, &[result("NOT_A_MATCH", "S1", "S2")]);

        assert_eq!(resolved, bracket);
    }

    #[test]
    fn later_duplicate_result_wins() {
        let bracket =
            derive_knockout_bracket(&top4_standings(), BracketFormat::StandardTop4).unwrap();
        let results = vec![result("SF1", "S1", "S4"), result("SF1", "S4", "S1")];

        let resolved = resolve_bracket_progression(&bracket, &results);

        let final_match = resolved.match_by_id("FINAL").unwrap();
        assert_eq!(final_match.team_a_id.as_deref(), Some("S4"));
    }
}
