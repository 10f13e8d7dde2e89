use crate::entities::{DetectedHazard, TrafficLevel, VariantKind};

const FASTEST_BASE_SCORE: i32 = 95;
const SEVERE_HAZARD_PENALTY: i32 = 10;
const CHILL_SCORE: i32 = 98;
const AVOID_OBSTACLES_SCORE: i32 = 75;
const AVOID_OBSTACLES_WARNED_SCORE: i32 = 65;

/// Heuristic safety rating in [0, 100].
///
/// Only high and critical hazards cost points, and only on the fastest
/// variant; lower severities are reported to the rider but do not move the
/// score.
pub fn safety_score(kind: VariantKind, hazards: &[DetectedHazard], has_warnings: bool) -> u8 {
    let score = match kind {
        VariantKind::Fastest => {
            let severe = hazards.iter().filter(|h| h.severity.is_severe()).count() as i32;
            FASTEST_BASE_SCORE.saturating_sub(severe.saturating_mul(SEVERE_HAZARD_PENALTY))
        }
        VariantKind::Chill => CHILL_SCORE,
        VariantKind::AvoidObstacles if has_warnings => AVOID_OBSTACLES_WARNED_SCORE,
        VariantKind::AvoidObstacles => AVOID_OBSTACLES_SCORE,
    };

    score.clamp(0, 100) as u8
}

pub fn traffic_level(base_seconds: f64, traffic_seconds: Option<f64>) -> TrafficLevel {
    let traffic_seconds = match traffic_seconds {
        Some(seconds) if base_seconds > 0.0 && seconds.is_finite() => seconds,
        _ => return TrafficLevel::Light,
    };

    let ratio = traffic_seconds / base_seconds;

    if ratio < 1.1 {
        TrafficLevel::VeryLight
    } else if ratio < 1.2 {
        TrafficLevel::Light
    } else if ratio < 1.5 {
        TrafficLevel::Moderate
    } else {
        TrafficLevel::Heavy
    }
}
