mod route_api;

use crate::{
    api::API,
    config::Config,
    external::google_maps::{GoogleMapsClient, TravelMode},
    sources::{DirectionsSource, DynRouteSource, SimulatedSource},
    synthesis::RouteSynthesizer,
};

/// Fallback order for live directions. The simulated source always comes last.
pub const LIVE_MODES: [TravelMode; 2] = [TravelMode::Bicycling, TravelMode::Walking];

pub struct Engine {
    sources: Vec<DynRouteSource>,
    synthesizer: RouteSynthesizer,
}

impl Engine {
    pub fn new(sources: Vec<DynRouteSource>, synthesizer: RouteSynthesizer) -> Self {
        Self {
            sources,
            synthesizer,
        }
    }

    /// Live sources (when an API key is configured) followed by the simulated
    /// generator.
    #[tracing::instrument(name = "Engine::from_config", skip_all)]
    pub fn from_config(config: &Config) -> Self {
        let mut sources: Vec<DynRouteSource> = vec![];

        match GoogleMapsClient::from_config(config) {
            Some(client) => {
                for mode in LIVE_MODES {
                    sources.push(Box::new(DirectionsSource::new(client.clone(), mode)));
                }
            }
            None => tracing::warn!("GOOGLE_MAPS_API_KEY not set, using simulated routes only"),
        }

        sources.push(Box::new(SimulatedSource::new(config.simulation_seed)));

        tracing::info!(
            "route sources: {:?}",
            sources.iter().map(|s| s.name()).collect::<Vec<_>>()
        );

        Self::new(sources, RouteSynthesizer::default())
    }

    pub fn source_names(&self) -> Vec<String> {
        self.sources.iter().map(|s| s.name()).collect()
    }
}

impl API for Engine {}
