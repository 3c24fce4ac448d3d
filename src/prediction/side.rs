//! Blue-versus-red winrate over a match roster
//!
//! Adapts the roster table shape handed out by the rating store into the
//! two-team shape the estimator works on.

use crate::prediction::estimator::WinProbabilityEstimator;
use crate::types::{MatchRoster, Side};
use tracing::debug;

/// Estimate the probability that the blue side wins the rostered match
///
/// Partitions the roster into the blue-side and red-side ratings (matched to
/// each slot's role) and delegates to the estimator. Slots with any other
/// side label never contribute. A roster missing one side entirely produces
/// a degenerate one-team estimate; missing both sides is an invalid-input
/// error. Either indicates malformed match data upstream, not a 50/50 game.
pub fn blue_side_winrate(
    estimator: &WinProbabilityEstimator,
    roster: &MatchRoster,
) -> crate::error::Result<f64> {
    let blue = roster.side_ratings(&Side::Blue);
    let red = roster.side_ratings(&Side::Red);

    if blue.is_empty() || red.is_empty() {
        debug!(
            "Roster is missing a side (blue: {}, red: {} of {} slots)",
            blue.len(),
            red.len(),
            roster.len()
        );
    }

    estimator.win_probability(&blue, &red)
}
