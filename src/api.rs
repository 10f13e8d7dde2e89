use async_trait::async_trait;

use crate::entities::{Coordinate, RoutePlan};
use crate::error::Error;

#[async_trait]
pub trait RouteAPI {
    /// Synthesizes route variants from the first route source that can
    /// provide any.
    async fn plan_routes(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<RoutePlan, Error>;
}

pub trait API: RouteAPI {}
