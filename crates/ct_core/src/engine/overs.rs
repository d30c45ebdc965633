//! Cricket overs notation.
//!
//! `"18.3"` on a scoreboard means 18 overs and 3 legal balls. The digit
//! after the dot is a ball count in `0..=5`, not a decimal fraction, so the
//! decimal value is `18 + 3/6 = 18.5`. All run-rate math in this crate runs
//! on the converted decimal form.

use crate::error::{Result, TournamentError};

const BALLS_PER_OVER: f64 = 6.0;

/// Parse overs notation into decimal overs.
///
/// Accepts `"20"` (whole overs) or `"18.3"` (overs and balls). Rejects
/// anything with more than one dot, a non-numeric or negative whole part,
/// or a ball count outside `0..=5`.
pub fn overs_to_decimal(raw: &str) -> Result<f64> {
    let invalid = || TournamentError::InvalidOversFormat { raw: raw.to_string() };

    let parts: Vec<&str> = raw.split('.').collect();
    if parts.len() > 2 {
        return Err(invalid());
    }

    let whole: u32 = parts[0].parse().map_err(|_| invalid())?;
    if parts.len() == 1 {
        return Ok(whole as f64);
    }

    let balls: u32 = parts[1].parse().map_err(|_| invalid())?;
    if balls > 5 {
        return Err(invalid());
    }

    Ok(whole as f64 + balls as f64 / BALLS_PER_OVER)
}
