mod directions;
mod simulated;

use async_trait::async_trait;

use crate::{
    entities::Coordinate, error::Error, external::google_maps::DirectionsResponse,
    synthesis::VariantPolicy,
};

pub use directions::DirectionsSource;
pub use simulated::SimulatedSource;

pub type PolicyResponses = Vec<(VariantPolicy, DirectionsResponse)>;

/// Anything that can answer a directions request for every variant policy.
/// The engine walks its sources in priority order and keeps the first one
/// whose responses synthesize into at least one variant.
#[async_trait]
pub trait RouteSource {
    fn name(&self) -> String;

    async fn fetch(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<PolicyResponses, Error>;
}

pub type DynRouteSource = Box<dyn RouteSource + Send + Sync>;
