//! Integration tests for the rift-room prediction service
//!
//! These tests validate the full path from serialized roster data to a
//! blue-side winrate, including:
//! - Roster parsing from the JSON wire shape
//! - Side partitioning and permissive filtering
//! - Win-probability estimation over full five-versus-five matches

use rift_room::config::AppConfig;
use rift_room::prediction::{blue_side_winrate, WinProbabilityEstimator};
use rift_room::types::{MatchRoster, Player, Role, RosterSlot, Side, SkillRating};

const ROLES: [Role; 5] = [Role::Top, Role::Jungle, Role::Mid, Role::Bot, Role::Support];

fn default_estimator() -> WinProbabilityEstimator {
    let config = AppConfig::default();
    WinProbabilityEstimator::new(config.prediction.into()).unwrap()
}

/// Build a full five-versus-five roster with uniform per-side mean skill
fn full_roster(blue_mu: f64, red_mu: f64) -> MatchRoster {
    let mut roster = MatchRoster::new();
    for (i, role) in ROLES.iter().enumerate() {
        roster.insert(
            RosterSlot::new(Side::Blue, *role),
            Player::with_rating(
                format!("blue{}", i),
                *role,
                SkillRating {
                    mu: blue_mu,
                    sigma: 8.33,
                },
            ),
        );
        roster.insert(
            RosterSlot::new(Side::Red, *role),
            Player::with_rating(
                format!("red{}", i),
                *role,
                SkillRating {
                    mu: red_mu,
                    sigma: 8.33,
                },
            ),
        );
    }
    roster
}

#[test]
fn test_even_five_versus_five_is_a_coin_flip() {
    let estimator = default_estimator();
    let roster = full_roster(25.0, 25.0);

    let winrate = blue_side_winrate(&estimator, &roster).unwrap();
    assert!((winrate - 0.5).abs() < 1e-12);
}

#[test]
fn test_stacked_blue_side_is_heavily_favored() {
    let estimator = default_estimator();
    let roster = full_roster(30.0, 22.0);

    let winrate = blue_side_winrate(&estimator, &roster).unwrap();
    assert!(winrate > 0.8);
    assert!(winrate < 1.0);

    println!("✅ Stacked blue side predicted at {:.3}", winrate);
}

#[test]
fn test_roster_parses_from_json_wire_shape() {
    let json = r#"[
        {
            "side": "blue",
            "role": "top",
            "player": {
                "id": "captain",
                "ratings": { "top": { "mu": 28.0, "sigma": 4.0 } }
            }
        },
        {
            "side": "red",
            "role": "top",
            "player": {
                "id": "challenger",
                "ratings": { "top": { "mu": 24.0, "sigma": 6.0 } }
            }
        },
        {
            "side": "spectator",
            "role": "mid",
            "player": {
                "id": "caster",
                "ratings": { "mid": { "mu": 40.0, "sigma": 1.0 } }
            }
        }
    ]"#;

    let roster: MatchRoster = serde_json::from_str(json).unwrap();
    assert_eq!(roster.len(), 3);

    let estimator = default_estimator();
    let winrate = blue_side_winrate(&estimator, &roster).unwrap();

    // Only the two top laners play; the spectator entry is excluded
    assert!(winrate > 0.5);
    assert_eq!(roster.side_ratings(&Side::Blue).len(), 1);
    assert_eq!(roster.side_ratings(&Side::Red).len(), 1);
}

#[test]
fn test_roster_survives_a_serialization_round_trip() {
    let estimator = default_estimator();
    let roster = full_roster(27.0, 24.0);
    let expected = blue_side_winrate(&estimator, &roster).unwrap();

    let json = serde_json::to_string_pretty(&roster).unwrap();
    let parsed: MatchRoster = serde_json::from_str(&json).unwrap();
    let winrate = blue_side_winrate(&estimator, &parsed).unwrap();

    assert!((winrate - expected).abs() < 1e-12);
}

#[test]
fn test_unknown_sides_never_affect_the_estimate() {
    let estimator = default_estimator();

    let mut roster = full_roster(26.0, 24.0);
    let baseline = blue_side_winrate(&estimator, &roster).unwrap();

    for (i, label) in ["spectator", "caster", "sub"].iter().enumerate() {
        roster.insert(
            RosterSlot::new(Side::Other(label.to_string()), ROLES[i]),
            Player::with_rating(
                format!("extra{}", i),
                ROLES[i],
                SkillRating {
                    mu: 45.0,
                    sigma: 1.0,
                },
            ),
        );
    }

    let with_extras = blue_side_winrate(&estimator, &roster).unwrap();
    assert!((with_extras - baseline).abs() < 1e-12);
}

#[test]
fn test_unrated_role_leaves_the_side_short() {
    let estimator = default_estimator();

    let mut roster = full_roster(25.0, 25.0);
    // Replace blue mid with a player who has no mid rating at all
    roster.insert(
        RosterSlot::new(Side::Blue, Role::Mid),
        Player::with_rating("offrole", Role::Support, SkillRating::default()),
    );

    assert_eq!(roster.side_ratings(&Side::Blue).len(), 4);

    // Four equal players against five tilts the estimate to red
    let winrate = blue_side_winrate(&estimator, &roster).unwrap();
    assert!(winrate < 0.5);
}

#[test]
fn test_empty_roster_is_rejected() {
    let estimator = default_estimator();
    let roster = MatchRoster::new();

    assert!(blue_side_winrate(&estimator, &roster).is_err());
}
