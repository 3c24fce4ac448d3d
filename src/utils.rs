//! Utility functions for the win-prediction service

/// Format a win probability as a display percentage
pub fn format_winrate(probability: f64) -> String {
    format!("{:.1}%", probability * 100.0)
}

/// Calculate the absolute difference between two mean skill values
pub fn rating_difference(rating1: f64, rating2: f64) -> f64 {
    (rating1 - rating2).abs()
}
