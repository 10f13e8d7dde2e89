use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{Coordinate, RouteVariant};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoutePlan {
    pub token: Uuid,
    pub origin: Coordinate,
    pub destination: Coordinate,
    /// Name of the route source that produced the variants.
    pub source: String,
    pub generated_at: DateTime<Utc>,
    pub variants: Vec<RouteVariant>,
}

impl RoutePlan {
    pub fn new(
        origin: Coordinate,
        destination: Coordinate,
        source: String,
        variants: Vec<RouteVariant>,
    ) -> Self {
        RoutePlan {
            token: Uuid::new_v4(),
            origin,
            destination,
            source,
            generated_at: Utc::now(),
            variants,
        }
    }
}
