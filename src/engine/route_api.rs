use super::Engine;

use async_trait::async_trait;

use crate::{
    api::RouteAPI,
    entities::{Coordinate, RoutePlan},
    error::{invalid_input_error, no_route_error, Error},
};

#[async_trait]
impl RouteAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn plan_routes(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<RoutePlan, Error> {
        if !origin.is_valid() || !destination.is_valid() {
            return Err(invalid_input_error());
        }

        for source in self.sources.iter() {
            let name = source.name();

            let responses = match source.fetch(origin, destination).await {
                Ok(responses) => responses,
                Err(err) => {
                    tracing::warn!("route source {} failed: {}", name, err);
                    continue;
                }
            };

            let variants = self.synthesizer.synthesize(&responses);

            if variants.is_empty() {
                tracing::info!("route source {} produced no variants", name);
                continue;
            }

            tracing::info!("route source {} produced {} variant(s)", name, variants.len());

            return Ok(RoutePlan::new(origin, destination, name, variants));
        }

        Err(no_route_error())
    }
}
