//! League table derivation.
//!
//! The standings table is a pure fold over completed matches: points and
//! win/loss tallies first, then net run rate from the accumulated run and
//! over totals. Nothing is cached; callers re-derive from the full match
//! list whenever it changes.

use std::collections::HashMap;

use tracing::debug;

use crate::error::Result;
use crate::models::{CompletedMatch, MatchOutcome, TeamSide, TeamStanding};

/// Points for winning a match (super-over wins included).
const WIN_POINTS: u32 = 2;
/// Points each side takes from a tie or a washout.
const SHARED_POINTS: u32 = 1;

/// Standings rows in first-encounter order, addressable by team id.
///
/// Keeping rows in a `Vec` with a side index makes the pre-sort order a
/// deterministic function of the match list, so fully tied teams always
/// come out in the order they first appeared.
struct StandingsLedger {
    rows: Vec<TeamStanding>,
    index: HashMap<String, usize>,
}

impl StandingsLedger {
    fn new() -> Self {
        Self {
            rows: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Row for `team_id`, created zeroed on first sight.
    fn row_mut(&mut self, team_id: &str) -> &mut TeamStanding {
        let idx = match self.index.get(team_id) {
            Some(&idx) => idx,
            None => {
                let idx = self.rows.len();
                self.rows.push(TeamStanding::new(team_id));
                self.index.insert(team_id.to_string(), idx);
                idx
            }
        };
        &mut self.rows[idx]
    }

    fn into_rows(self) -> Vec<TeamStanding> {
        self.rows
    }
}

/// Derive the full league table from completed matches.
///
/// Win credit order: an outright win or a super-over verdict is a full win
/// (2 points); a tie without a super over and a washout are worth 1 point
/// each. Every match counts as played for both sides, washouts included.
///
/// Net run rate uses all-out-corrected overs (see
/// [`CompletedMatch::effective_overs_faced_a`]) and skips washed-out
/// matches entirely. The table sorts by points, then net run rate, then
/// runs scored, all descending.
pub fn derive_league_table(matches: &[CompletedMatch]) -> Result<Vec<TeamStanding>> {
    debug!("Deriving league table from {} completed matches", matches.len());

    let mut ledger = StandingsLedger::new();

    for m in matches {
        ledger.row_mut(&m.team_a_id).played += 1;
        ledger.row_mut(&m.team_b_id).played += 1;

        if m.result == MatchOutcome::AWin || m.super_over_winner == Some(TeamSide::A) {
            let a = ledger.row_mut(&m.team_a_id);
            a.won += 1;
            a.points += WIN_POINTS;
            ledger.row_mut(&m.team_b_id).lost += 1;
        } else if m.result == MatchOutcome::BWin || m.super_over_winner == Some(TeamSide::B) {
            let b = ledger.row_mut(&m.team_b_id);
            b.won += 1;
            b.points += WIN_POINTS;
            ledger.row_mut(&m.team_a_id).lost += 1;
        } else if m.result == MatchOutcome::Tie {
            let a = ledger.row_mut(&m.team_a_id);
            a.tied += 1;
            a.points += SHARED_POINTS;
            let b = ledger.row_mut(&m.team_b_id);
            b.tied += 1;
            b.points += SHARED_POINTS;
        } else {
            let a = ledger.row_mut(&m.team_a_id);
            a.no_result += 1;
            a.points += SHARED_POINTS;
            let b = ledger.row_mut(&m.team_b_id);
            b.no_result += 1;
            b.points += SHARED_POINTS;
        }

        // A washout carries no run-rate information; its overs fields may
        // even be absent upstream, so they are never parsed.
        if m.result != MatchOutcome::NoResult {
            let a_faced = m.effective_overs_faced_a()?;
            let b_faced = m.effective_overs_faced_b()?;

            let a = ledger.row_mut(&m.team_a_id);
            a.runs_for += m.team_a_runs;
            a.runs_against += m.team_b_runs;
            a.overs_faced += a_faced;
            a.overs_bowled += b_faced;

            let b = ledger.row_mut(&m.team_b_id);
            b.runs_for += m.team_b_runs;
            b.runs_against += m.team_a_runs;
            b.overs_faced += b_faced;
            b.overs_bowled += a_faced;
        }
    }

    let mut rows = ledger.into_rows();
    for row in &mut rows {
        let scored = run_rate(row.runs_for, row.overs_faced);
        let conceded = run_rate(row.runs_against, row.overs_bowled);
        row.net_run_rate = round6(scored - conceded);
    }

    // Stable sort: rows tied on every key keep first-encounter order.
    rows.sort_by(|x, y| {
        y.points
            .cmp(&x.points)
            .then_with(|| y.net_run_rate.total_cmp(&x.net_run_rate))
            .then_with(|| y.runs_for.cmp(&x.runs_for))
    });

    Ok(rows)
}

fn run_rate(runs: u32, overs: f64) -> f64 {
    if overs > 0.0 {
        runs as f64 / overs
    } else {
        0.0
    }
}

fn round6(x: f64) -> f64 {
    (x * 1_000_000.0).round() / 1_000_000.0
}
