use serde::{Deserialize, Serialize};

use crate::entities::Coordinate;

pub const MAX_DESCRIPTION_CHARS: usize = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    RoadSurfaceDamage,
    Flooding,
    CollisionRisk,
    Construction,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Moderate,
    High,
    Critical,
}

impl Category {
    pub fn severity(&self) -> Severity {
        match self {
            Self::RoadSurfaceDamage => Severity::Low,
            Self::Construction => Severity::Moderate,
            Self::Flooding | Self::CollisionRisk => Severity::High,
        }
    }
}

impl Severity {
    pub fn is_severe(&self) -> bool {
        *self >= Severity::High
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetectedHazard {
    pub location: Coordinate,
    pub category: Category,
    pub severity: Severity,
    pub description: String,
}

impl DetectedHazard {
    /// Severity follows the category; the description is cut to
    /// `MAX_DESCRIPTION_CHARS` characters.
    pub fn new(location: Coordinate, category: Category, description: &str) -> Self {
        Self {
            location,
            category,
            severity: category.severity(),
            description: description.trim().chars().take(MAX_DESCRIPTION_CHARS).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_is_ordered() {
        assert!(Severity::Low < Severity::Moderate);
        assert!(Severity::Moderate < Severity::High);
        assert!(Severity::High < Severity::Critical);
        assert!(Severity::Critical.is_severe());
        assert!(!Severity::Moderate.is_severe());
    }

    #[test]
    fn description_is_truncated_on_char_boundary() {
        let long = "ñ".repeat(MAX_DESCRIPTION_CHARS + 20);
        let hazard = DetectedHazard::new(Coordinate::new(0.0, 0.0), Category::Flooding, &long);

        assert_eq!(hazard.description.chars().count(), MAX_DESCRIPTION_CHARS);
        assert_eq!(hazard.severity, Severity::High);
    }

    #[test]
    fn serializes_snake_case() {
        let json = serde_json::to_value(Category::RoadSurfaceDamage).unwrap();
        assert_eq!(json, serde_json::json!("road_surface_damage"));
    }
}
