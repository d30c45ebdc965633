//! Qualification projection by exhaustive scenario enumeration.
//!
//! With n fixtures left there are exactly 2^n ways the league phase can
//! finish, ignoring ties and washouts. Enumerating all of them gives exact
//! qualification fractions per team, with no sampling error. The
//! `max_fixtures_allowed` guard keeps the space small (64 scenarios at the
//! default limit of 6).

use std::collections::HashSet;

use tracing::debug;

use crate::engine::league_table::derive_league_table;
use crate::error::{Result, TournamentError};
use crate::models::{
    CompletedMatch, Fixture, MatchOutcome, Overs, ProjectionConfig, QualificationResult,
};

/// Enumerate every remaining win/loss combination and tally, per team, how
/// many end with that team inside the qualification spots.
///
/// Bit i of the scenario mask decides fixture i: 0 means the home side of
/// the pairing wins, 1 means the away side. Each simulated match carries a
/// fixed synthetic score, enough to point the win the right way and move
/// net run rate off zero without claiming realism.
///
/// Teams qualifying exactly at the cutoff rank are taken positionally from
/// the sorted table; ties at the cutoff get no special reconciliation.
pub fn derive_qualification_scenarios(
    completed: &[CompletedMatch],
    remaining: &[Fixture],
    config: &ProjectionConfig,
) -> Result<Vec<QualificationResult>> {
    let num_fixtures = remaining.len();
    if num_fixtures > config.max_fixtures_allowed {
        return Err(TournamentError::ProjectionTooLarge {
            fixtures: num_fixtures,
            limit: config.max_fixtures_allowed,
        });
    }

    debug!(
        "Projecting qualification over {} remaining fixtures ({} scenarios)",
        num_fixtures,
        1u64 << num_fixtures
    );

    // Every team seen in either input, in first-appearance order. Each of
    // them plays in every scenario, so each appears in every scenario table.
    let mut team_ids: Vec<String> = Vec::new();
    {
        let mut seen: HashSet<String> = HashSet::new();
        let mut add = |id: &str| {
            if seen.insert(id.to_string()) {
                team_ids.push(id.to_string());
            }
        };
        for m in completed {
            add(&m.team_a_id);
            add(&m.team_b_id);
        }
        for f in remaining {
            add(&f.team_a_id);
            add(&f.team_b_id);
        }
    }

    let mut qualified_counts = vec![0u64; team_ids.len()];
    let mut total_counts = vec![0u64; team_ids.len()];

    let total_scenarios = 1u64 << num_fixtures;
    for mask in 0..total_scenarios {
        let mut scenario_matches = completed.to_vec();
        for (i, fixture) in remaining.iter().enumerate() {
            let b_wins = mask & (1 << i) != 0;
            scenario_matches.push(simulated_outcome(fixture, b_wins));
        }

        let standings = derive_league_table(&scenario_matches)?;
        let top_ids: Vec<&str> = standings
            .iter()
            .take(config.qualification_spots)
            .map(|r| r.team_id.as_str())
            .collect();

        for (i, team_id) in team_ids.iter().enumerate() {
            total_counts[i] += 1;
            if top_ids.contains(&team_id.as_str()) {
                qualified_counts[i] += 1;
            }
        }
    }

    let results = team_ids
        .into_iter()
        .enumerate()
        .map(|(i, team_id)| {
            let qualified = qualified_counts[i];
            let total = total_counts[i];
            let probability = if total == 0 {
                0.0
            } else {
                qualified as f64 / total as f64
            };
            QualificationResult {
                team_id,
                qualified_scenarios: qualified,
                total_scenarios: total,
                qualification_probability: probability,
                guaranteed_qualified: qualified == total && total > 0,
                guaranteed_eliminated: qualified == 0,
            }
        })
        .collect();

    Ok(results)
}

/// Minimal completed match for one enumerated outcome. Winner 2/1 over,
/// loser 1/1 over, nobody all out: the right side wins and the run-rate
/// delta is nonzero.
fn simulated_outcome(fixture: &Fixture, b_wins: bool) -> CompletedMatch {
    CompletedMatch {
        team_a_id: fixture.team_a_id.clone(),
        team_b_id: fixture.team_b_id.clone(),
        team_a_runs: if b_wins { 1 } else { 2 },
        team_a_overs: Overs::Number(1.0),
        team_a_all_out: false,
        team_b_runs: if b_wins { 2 } else { 1 },
        team_b_overs: Overs::Number(1.0),
        team_b_all_out: false,
        result: if b_wins {
            MatchOutcome::BWin
        } else {
            MatchOutcome::AWin
        },
        super_over_winner: None,
        match_overs_limit: 1.0,
        is_rain_affected: None,
    }
}
