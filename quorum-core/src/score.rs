//! The additive governance-score heuristic.
//!
//! The score is a deterministic pure function of a [`Leadership`] record:
//!
//! - +20 when a CEO is identified,
//! - +30 when the board has at least five named members,
//! - +50 for CEO/chairman role separation,
//! - clamped to 100.
//!
//! "Identified" tests only for presence of the field, not plausibility of the
//! name. The separation bonus is withheld only when both roles are known and
//! held by the same name; when either role is unknown the roles are treated as
//! separated. In particular a record with no known officers at all still earns
//! the separation bonus and scores 50 — long-standing observed behavior that
//! downstream consumers rely on, kept as-is.

use quorum_types::{EsgBreakdown, Leadership};

/// Points awarded when the CEO is identified.
pub const CEO_KNOWN_POINTS: u8 = 20;
/// Points awarded for a board of at least [`STRONG_BOARD_SIZE`] members.
pub const STRONG_BOARD_POINTS: u8 = 30;
/// Points awarded for CEO/chairman role separation.
pub const ROLE_SEPARATION_POINTS: u8 = 50;
/// Board size threshold for the strong-board bonus.
pub const STRONG_BOARD_SIZE: usize = 5;

/// Compute the governance score for a leadership record.
///
/// Always returns a value in `[0, 100]`.
#[must_use]
pub fn governance_score(leadership: &Leadership) -> u8 {
    let mut score: u16 = 0;

    if leadership.ceo.is_some() {
        score += u16::from(CEO_KNOWN_POINTS);
    }
    if leadership.board.len() >= STRONG_BOARD_SIZE {
        score += u16::from(STRONG_BOARD_POINTS);
    }

    let separated = match (&leadership.ceo, &leadership.chairman) {
        (Some(ceo), Some(chairman)) => ceo != chairman,
        // Either role unknown: treated as separated, so an all-missing record
        // still earns the bonus.
        _ => true,
    };
    if separated {
        score += u16::from(ROLE_SEPARATION_POINTS);
    }

    u8::try_from(score.min(100)).unwrap_or(100)
}

/// Coerce the governance sub-score of an ESG breakdown into a `[0, 100]`
/// gauge value.
///
/// Missing or non-finite values become `0.0`; out-of-range values clamp.
#[must_use]
pub fn gauge_value(esg: &EsgBreakdown) -> f64 {
    match esg.governance {
        Some(v) if v.is_finite() => v.clamp(0.0, 100.0),
        _ => 0.0,
    }
}
