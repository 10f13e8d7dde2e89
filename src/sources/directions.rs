use async_trait::async_trait;

use super::{PolicyResponses, RouteSource};
use crate::{
    entities::Coordinate,
    error::Error,
    external::google_maps::{DirectionsResponse, GoogleMapsClient, TravelMode},
    synthesis::VariantPolicy,
};

/// Live directions for a single travel mode.
pub struct DirectionsSource {
    client: GoogleMapsClient,
    mode: TravelMode,
}

impl DirectionsSource {
    pub fn new(client: GoogleMapsClient, mode: TravelMode) -> Self {
        Self { client, mode }
    }
}

#[async_trait]
impl RouteSource for DirectionsSource {
    fn name(&self) -> String {
        format!("google_directions:{}", self.mode.name())
    }

    #[tracing::instrument(skip(self), fields(mode = self.mode.name()))]
    async fn fetch(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<PolicyResponses, Error> {
        let requests = VariantPolicy::ALL.into_iter().map(|policy| async move {
            let result = self
                .client
                .directions(origin, destination, self.mode, policy)
                .await;
            (policy, result)
        });

        aggregate(futures::future::join_all(requests).await)
    }
}

/// Drops failed policies. Fails only when every policy failed.
fn aggregate(
    results: Vec<(VariantPolicy, Result<DirectionsResponse, Error>)>,
) -> Result<PolicyResponses, Error> {
    let mut responses = vec![];
    let mut last_error = None;

    for (policy, result) in results {
        match result {
            Ok(response) => responses.push((policy, response)),
            Err(err) => {
                tracing::warn!("directions for {:?} failed: {}", policy, err);
                last_error = Some(err);
            }
        }
    }

    match (responses.is_empty(), last_error) {
        (true, Some(err)) => Err(err),
        _ => Ok(responses),
    }
}
