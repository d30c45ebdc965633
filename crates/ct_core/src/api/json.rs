//! JSON string API.
//!
//! String-in/string-out entry points for embedding hosts that cannot link
//! against the typed API. Every request carries a `schema_version` field
//! checked against [`crate::SCHEMA_VERSION`]; responses are the plain
//! serialized engine outputs. Errors come back as human-readable strings.

use serde::Deserialize;
use tracing::{error, info, warn};

use crate::engine::bracket::derive_knockout_bracket;
use crate::engine::league_table::derive_league_table;
use crate::engine::progression::resolve_bracket_progression;
use crate::engine::projection::derive_qualification_scenarios;
use crate::engine::simulation::simulate_tournament;
use crate::error::TournamentError;
use crate::models::{
    BracketFormat, CompletedMatch, Fixture, PlayoffMatchResult, ProjectionConfig, TeamStanding,
    TournamentBracket, TournamentPlan, TournamentTeam,
};

#[derive(Debug, Deserialize)]
pub struct LeagueTableRequest {
    pub schema_version: u8,
    pub matches: Vec<CompletedMatch>,
}

#[derive(Debug, Deserialize)]
pub struct BracketRequest {
    pub schema_version: u8,
    /// Wire name of the format, e.g. "STANDARD_TOP4".
    pub format: String,
    /// Must already be sorted points, NRR, runs-for.
    pub standings: Vec<TeamStanding>,
}

#[derive(Debug, Deserialize)]
pub struct ProgressionRequest {
    pub schema_version: u8,
    pub bracket: TournamentBracket,
    pub results: Vec<PlayoffMatchResult>,
}

#[derive(Debug, Deserialize)]
pub struct ProjectionRequest {
    pub schema_version: u8,
    pub completed_matches: Vec<CompletedMatch>,
    pub remaining_fixtures: Vec<Fixture>,
    /// Omit for the default 4 spots / 6 fixture cap.
    #[serde(default)]
    pub config: Option<ProjectionConfig>,
}

#[derive(Debug, Deserialize)]
pub struct SimulationRequest {
    pub schema_version: u8,
    pub seed: u64,
    pub format: String,
    pub teams: Vec<TournamentTeam>,
    pub fixtures: Vec<Fixture>,
}

/// Derive the sorted league table from completed matches.
pub fn derive_league_table_json(request_json: &str) -> Result<String, String> {
    let request: LeagueTableRequest = parse_request(request_json)?;
    ensure_schema_version(request.schema_version)?;

    info!("Processing league table request ({} matches)", request.matches.len());

    let table = derive_league_table(&request.matches).map_err(to_api_error)?;
    to_response(&table)
}

/// Build the knockout bracket for sorted standings and a format name.
pub fn derive_knockout_bracket_json(request_json: &str) -> Result<String, String> {
    let request: BracketRequest = parse_request(request_json)?;
    ensure_schema_version(request.schema_version)?;

    info!("Processing bracket request (format {})", request.format);

    let format: BracketFormat = request.format.parse().map_err(to_api_error)?;
    let bracket = derive_knockout_bracket(&request.standings, format).map_err(to_api_error)?;
    to_response(&bracket)
}

/// Fill bracket slots from recorded playoff results.
pub fn resolve_bracket_progression_json(request_json: &str) -> Result<String, String> {
    let request: ProgressionRequest = parse_request(request_json)?;
    ensure_schema_version(request.schema_version)?;

    info!("Processing progression request ({} results)", request.results.len());

    let resolved = resolve_bracket_progression(&request.bracket, &request.results);
    to_response(&resolved)
}

/// Enumerate remaining-fixture scenarios into qualification odds.
pub fn derive_qualification_scenarios_json(request_json: &str) -> Result<String, String> {
    let request: ProjectionRequest = parse_request(request_json)?;
    ensure_schema_version(request.schema_version)?;

    info!(
        "Processing projection request ({} completed, {} remaining)",
        request.completed_matches.len(),
        request.remaining_fixtures.len()
    );

    let config = request.config.unwrap_or_default();
    let results = derive_qualification_scenarios(
        &request.completed_matches,
        &request.remaining_fixtures,
        &config,
    )
    .map_err(to_api_error)?;
    to_response(&results)
}

/// Run a full seeded tournament simulation.
pub fn simulate_tournament_json(request_json: &str) -> Result<String, String> {
    let request: SimulationRequest = parse_request(request_json)?;
    ensure_schema_version(request.schema_version)?;

    info!(
        "Processing simulation request (format {}, seed {})",
        request.format, request.seed
    );

    let format: BracketFormat = request.format.parse().map_err(to_api_error)?;
    let plan = TournamentPlan {
        format,
        teams: request.teams,
        fixtures: request.fixtures,
        seed: request.seed,
    };
    let result = simulate_tournament(&plan).map_err(to_api_error)?;
    to_response(&result)
}

fn parse_request<T: serde::de::DeserializeOwned>(request_json: &str) -> Result<T, String> {
    serde_json::from_str(request_json).map_err(|e| format!("Invalid JSON request: {}", e))
}

fn ensure_schema_version(version: u8) -> Result<(), String> {
    if version != crate::SCHEMA_VERSION {
        return Err(format!("Unsupported schema version: {}", version));
    }
    Ok(())
}

fn to_response<T: serde::Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Failed to serialize result: {}", e))
}

fn to_api_error(error: TournamentError) -> String {
    if error.is_input_error() {
        warn!("Request rejected: {}", error);
    } else {
        error!("Engine failure: {}", error);
    }
    error.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn league_table_round_trip_over_the_wire() {
        let request = r#"{
            "schema_version": 1,
            "matches": [
                {
                    "teamAId": "T1", "teamBId": "T2",
                    "teamARuns": 150, "teamAOvers": 20, "teamAAllOut": false,
                    "teamBRuns": 150, "teamBOvers": "19.5", "teamBAllOut": false,
                    "result": "TIE", "isSuperOverWin": "A",
                    "matchOversLimit": 20
                }
            ]
        }"#;

        let response = derive_league_table_json(request).unwrap();
        let table: Value = serde_json::from_str(&response).unwrap();

        assert_eq!(table[0]["teamId"], "T1");
        assert_eq!(table[0]["points"], 2);
        assert_eq!(table[0]["won"], 1);
        assert_eq!(table[1]["teamId"], "T2");
        assert_eq!(table[1]["lost"], 1);
        assert!(table[0].get("netRunRate").is_some());
    }

    #[test]
    fn schema_version_is_enforced() {
        let request = json!({ "schema_version": 2, "matches": [] }).to_string();

        let err = derive_league_table_json(&request).unwrap_err();

        assert!(err.contains("Unsupported schema version: 2"), "got: {}", err);
    }

    #[test]
    fn malformed_json_is_rejected() {
        let err = derive_league_table_json("{not json").unwrap_err();
        assert!(err.contains("Invalid JSON request"), "got: {}", err);
    }

    #[test]
    fn unknown_format_name_is_rejected() {
        let standings: Vec<TeamStanding> = ["S1", "S2", "S3", "S4"]
            .iter()
            .map(|id| TeamStanding::new(*id))
            .collect();
        let request = json!({
            "schema_version": 1,
            "format": "BEST_OF_9",
            "standings": standings,
        })
        .to_string();

        let err = derive_knockout_bracket_json(&request).unwrap_err();

        assert!(err.contains("Unsupported bracket format: BEST_OF_9"), "got: {}", err);
    }

    #[test]
    fn bracket_and_progression_chain_over_the_wire() {
        let standings: Vec<TeamStanding> = ["S1", "S2", "S3", "S4"]
            .iter()
            .map(|id| TeamStanding::new(*id))
            .collect();
        let bracket_request = json!({
            "schema_version": 1,
            "format": "IPL_TOP4",
            "standings": standings,
        })
        .to_string();

        let bracket_json = derive_knockout_bracket_json(&bracket_request).unwrap();
        let bracket: Value = serde_json::from_str(&bracket_json).unwrap();
        assert_eq!(bracket["format"], "IPL_TOP4");
        assert_eq!(bracket["matches"][0]["matchId"], "Q1");

        let progression_request = json!({
            "schema_version": 1,
            "bracket": bracket,
            "results": [
                { "matchId": "Q1", "winnerTeamId": "S1", "loserTeamId": "S2" }
            ],
        })
        .to_string();

        let resolved_json = resolve_bracket_progression_json(&progression_request).unwrap();
        let resolved: Value = serde_json::from_str(&resolved_json).unwrap();

        let q2 = resolved["matches"]
            .as_array()
            .unwrap()
            .iter()
            .find(|m| m["matchId"] == "Q2")
            .unwrap();
        assert_eq!(q2["teamAId"], "S2");
        assert_eq!(q2["teamBId"], Value::Null);
    }

    #[test]
    fn projection_defaults_apply_when_config_is_omitted() {
        let request = json!({
            "schema_version": 1,
            "completed_matches": [],
            "remaining_fixtures": [
                { "teamAId": "T1", "teamBId": "T2" }
            ],
        })
        .to_string();

        let response = derive_qualification_scenarios_json(&request).unwrap();
        let results: Value = serde_json::from_str(&response).unwrap();

        // Default 4 spots comfortably fit both teams of the lone fixture.
        assert_eq!(results[0]["totalScenarios"], 2);
        assert_eq!(results[0]["guaranteedQualified"], true);
    }

    #[test]
    fn oversized_projection_is_rejected() {
        let fixtures: Vec<Fixture> = (0..7)
            .map(|i| Fixture::new(format!("A{}", i), format!("B{}", i)))
            .collect();
        let request = json!({
            "schema_version": 1,
            "completed_matches": [],
            "remaining_fixtures": fixtures,
        })
        .to_string();

        let err = derive_qualification_scenarios_json(&request).unwrap_err();

        assert!(err.contains("Projection space too large"), "got: {}", err);
    }

    #[test]
    fn simulation_runs_deterministically_over_the_wire() {
        let teams: Vec<TournamentTeam> = ["T1", "T2", "T3", "T4"]
            .iter()
            .map(|id| TournamentTeam::new(*id, *id))
            .collect();
        let fixtures = crate::engine::simulation::double_round_robin_fixtures(&teams);
        let request = json!({
            "schema_version": 1,
            "seed": 2024,
            "format": "STANDARD_TOP4",
            "teams": teams,
            "fixtures": fixtures,
        })
        .to_string();

        let first = simulate_tournament_json(&request).unwrap();
        let second = simulate_tournament_json(&request).unwrap();
        assert_eq!(first, second);

        let result: Value = serde_json::from_str(&first).unwrap();
        assert_eq!(result["playoffResults"].as_array().unwrap().len(), 3);
        let champion = result["championId"].as_str().unwrap();
        assert!(["T1", "T2", "T3", "T4"].contains(&champion));
    }
}
