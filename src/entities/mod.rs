mod hazard;
mod location;
mod plan;
mod route;

pub use hazard::{Category as HazardCategory, DetectedHazard, Severity, MAX_DESCRIPTION_CHARS};
pub use location::{BoundingBox, Coordinate};
pub use plan::RoutePlan;
pub use route::{Kind as VariantKind, RouteVariant, TrafficLevel};
