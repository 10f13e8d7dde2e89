use serde::{Deserialize, Serialize};

use crate::entities::{BoundingBox, Coordinate, DetectedHazard};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    Fastest,
    AvoidObstacles,
    Chill,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrafficLevel {
    VeryLight,
    Light,
    Moderate,
    Heavy,
}

impl Kind {
    pub fn label(&self) -> String {
        match self {
            Self::Fastest => "Fastest".into(),
            Self::AvoidObstacles => "Avoid obstacles".into(),
            Self::Chill => "Chill ride".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteVariant {
    pub kind: Kind,
    pub summary: String,
    pub path: Vec<Coordinate>,
    pub bounds: BoundingBox,
    pub distance_meters: f64,
    /// Traffic-adjusted when the upstream reported it.
    pub duration_seconds: f64,
    pub safety_score: u8,
    pub traffic_level: TrafficLevel,
    pub hazards: Vec<DetectedHazard>,
    pub warnings: Vec<String>,
}
