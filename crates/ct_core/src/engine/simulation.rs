//! End-to-end tournament simulation.
//!
//! Drives the whole pipeline with synthetic results: league fixtures are
//! played out with a seeded PRNG, the table and bracket are derived, and
//! playoff rounds are resolved until a champion falls out of the final.
//! The seed lives in the plan, so a plan is a complete, replayable
//! description of one tournament.
//!
//! The generated scores are tuned to exercise the scoring engine (early
//! chases leave the winner short of the quota, everyone else bats out the
//! full 20 overs or is bowled out), not to model real cricket.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::engine::bracket::{derive_knockout_bracket, FINAL_MATCH_ID};
use crate::engine::league_table::derive_league_table;
use crate::engine::progression::resolve_bracket_progression;
use crate::error::{Result, TournamentError};
use crate::models::{
    CompletedMatch, Fixture, MatchOutcome, Overs, PlayoffMatchResult, SimulationResult,
    TournamentBracket, TournamentPlan, TournamentTeam,
};

/// Standard T20 innings quota.
const T20_OVERS: f64 = 20.0;
/// Upper bound on playoff resolution rounds before the graph is declared
/// malformed. Every supported bracket resolves in 2 or 3 rounds.
const MAX_PLAYOFF_ROUNDS: u32 = 20;

/// Run one complete tournament from a plan.
///
/// The same plan always produces byte-identical output: one
/// `ChaCha8Rng` is seeded from `plan.seed` and threaded through every
/// simulated match in fixture order, then through the playoff rounds.
pub fn simulate_tournament(plan: &TournamentPlan) -> Result<SimulationResult> {
    info!(
        "Simulating {} tournament: {} teams, {} fixtures, seed {}",
        plan.format,
        plan.teams.len(),
        plan.fixtures.len(),
        plan.seed
    );

    let mut rng = ChaCha8Rng::seed_from_u64(plan.seed);

    let league_matches: Vec<CompletedMatch> = plan
        .fixtures
        .iter()
        .map(|fixture| simulate_league_match(fixture, &mut rng))
        .collect();

    let league_table = derive_league_table(&league_matches)?;
    let bracket = derive_knockout_bracket(&league_table, plan.format)?;
    let (playoff_results, champion_id) = resolve_playoffs(bracket, &mut rng)?;

    debug!("Champion: {}", champion_id);

    Ok(SimulationResult {
        league_matches,
        league_table,
        playoff_results,
        champion_id,
    })
}

/// Double round-robin schedule: every pair of teams meets twice, once in
/// each orientation, in team-list order.
pub fn double_round_robin_fixtures(teams: &[TournamentTeam]) -> Vec<Fixture> {
    let mut fixtures = Vec::new();
    for i in 0..teams.len() {
        for j in (i + 1)..teams.len() {
            fixtures.push(Fixture::new(teams[i].team_id.as_str(), teams[j].team_id.as_str()));
            fixtures.push(Fixture::new(teams[j].team_id.as_str(), teams[i].team_id.as_str()));
        }
    }
    fixtures
}

/// Play out the knockout phase round by round.
///
/// Each round simulates every match whose slots are both known and which
/// has no recorded result, then feeds the accumulated results back through
/// progression to unlock the next round. Stops when the final produces a
/// champion. A round with nothing playable, or hitting the round cap
/// without a champion, means the bracket graph is malformed.
fn resolve_playoffs(
    bracket: TournamentBracket,
    rng: &mut impl Rng,
) -> Result<(Vec<PlayoffMatchResult>, String)> {
    let mut current = bracket;
    let mut results: Vec<PlayoffMatchResult> = Vec::new();
    let mut champion: Option<String> = None;
    let mut iterations = 0u32;

    while champion.is_none() && iterations < MAX_PLAYOFF_ROUNDS {
        iterations += 1;

        let playable: Vec<(String, String, String)> = current
            .matches
            .iter()
            .filter(|m| !results.iter().any(|r| r.match_id == m.match_id))
            .filter_map(|m| match (&m.team_a_id, &m.team_b_id) {
                (Some(a), Some(b)) => Some((m.match_id.clone(), a.clone(), b.clone())),
                _ => None,
            })
            .collect();

        if playable.is_empty() {
            let stage = current
                .matches
                .iter()
                .find(|m| !results.iter().any(|r| r.match_id == m.match_id))
                .map(|m| m.stage.clone())
                .unwrap_or_else(|| current.format.to_string());
            return Err(TournamentError::SimulationStalled { stage });
        }

        for (match_id, team_a, team_b) in playable {
            let result = simulate_playoff_match(&match_id, &team_a, &team_b, rng);
            if match_id == FINAL_MATCH_ID {
                champion = Some(result.winner_team_id.clone());
            }
            results.push(result);
        }

        current = resolve_bracket_progression(&current, &results);
    }

    match champion {
        Some(champion_id) => Ok((results, champion_id)),
        None => Err(TournamentError::ExceededSafeguard { iterations }),
    }
}

/// One synthetic league match. Scores land in a plausible T20 band
/// (120-219, won by 1-30 runs); one match in five is an early chase that
/// leaves the winner short of the full quota, so tables built from these
/// always exercise the all-out overs correction.
fn simulate_league_match(fixture: &Fixture, rng: &mut impl Rng) -> CompletedMatch {
    let a_wins = rng.gen::<f64>() > 0.5;
    let winning_score: u32 = rng.gen_range(120..220);
    let losing_score = winning_score - rng.gen_range(1..=30);
    let early_chase = rng.gen::<f64>() > 0.8;
    let winner_overs = if early_chase {
        rng.gen_range(15u32..19) as f64
    } else {
        T20_OVERS
    };

    let (a_runs, b_runs) = if a_wins {
        (winning_score, losing_score)
    } else {
        (losing_score, winning_score)
    };
    let (a_overs, a_all_out) = if a_wins {
        (winner_overs, !early_chase)
    } else {
        (T20_OVERS, true)
    };
    let (b_overs, b_all_out) = if a_wins {
        (T20_OVERS, true)
    } else {
        (winner_overs, !early_chase)
    };

    CompletedMatch {
        team_a_id: fixture.team_a_id.clone(),
        team_b_id: fixture.team_b_id.clone(),
        team_a_runs: a_runs,
        team_a_overs: Overs::Number(a_overs),
        team_a_all_out: a_all_out,
        team_b_runs: b_runs,
        team_b_overs: Overs::Number(b_overs),
        team_b_all_out: b_all_out,
        result: if a_wins {
            MatchOutcome::AWin
        } else {
            MatchOutcome::BWin
        },
        super_over_winner: None,
        match_overs_limit: T20_OVERS,
        is_rain_affected: None,
    }
}

/// Playoff matches only need a direction, not a scorecard.
fn simulate_playoff_match(
    match_id: &str,
    team_a_id: &str,
    team_b_id: &str,
    rng: &mut impl Rng,
) -> PlayoffMatchResult {
    let a_wins = rng.gen::<f64>() > 0.5;
    let (winner, loser) = if a_wins {
        (team_a_id, team_b_id)
    } else {
        (team_b_id, team_a_id)
    };
    PlayoffMatchResult {
        match_id: match_id.to_string(),
        winner_team_id: winner.to_string(),
        loser_team_id: loser.to_string(),
    }
}
