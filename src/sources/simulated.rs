use async_trait::async_trait;
use rand::{rngs::StdRng, Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

use super::{PolicyResponses, RouteSource};
use crate::{
    entities::Coordinate,
    error::{unexpected_error, Error},
    external::google_maps::{
        DirectionsResponse, DirectionsRoute, DirectionsStatus, LatLng, Leg, Step, TextValue,
    },
    synthesis::VariantPolicy,
};

/// Average riding pace, m/s.
const RIDING_SPEED: f64 = 4.5;
const MIN_SPAN_DEGREES: f64 = 1e-4;

const TURN_PHRASES: [&str; 10] = [
    "Continue straight",
    "Turn <b>left</b>",
    "Turn <b>right</b>",
    "Keep <b>left</b>",
    "Keep <b>right</b>",
    "Slight <b>left</b>",
    "Slight <b>right</b>",
    "Continue straight, construction ahead",
    "Caution: uneven pavement",
    "Road may be flooded after heavy rain",
];

/// Offline generator used when no live directions are available. Output is
/// reproducible when a seed is given.
pub struct SimulatedSource {
    seed: Option<u64>,
}

impl SimulatedSource {
    pub fn new(seed: Option<u64>) -> Self {
        Self { seed }
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    fn jitter_factor(policy: VariantPolicy) -> f64 {
        match policy {
            VariantPolicy::None => 0.02,
            VariantPolicy::AvoidHighways => 0.05,
            VariantPolicy::AvoidHighwaysAndTolls => 0.1,
        }
    }

    fn detour_factor(policy: VariantPolicy) -> f64 {
        match policy {
            VariantPolicy::None => 1.0,
            VariantPolicy::AvoidHighways => 1.1,
            VariantPolicy::AvoidHighwaysAndTolls => 1.25,
        }
    }

    fn waypoints(
        rng: &mut StdRng,
        policy: VariantPolicy,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<Vec<Coordinate>, Error> {
        let span = (destination.latitude - origin.latitude)
            .abs()
            .max((destination.longitude - origin.longitude).abs())
            .max(MIN_SPAN_DEGREES);

        let jitter = Normal::new(0.0, span * Self::jitter_factor(policy))
            .map_err(|_| unexpected_error())?;

        let count: usize = rng.gen_range(4..=8);
        let mut waypoints = Vec::with_capacity(count);

        waypoints.push(origin);
        for i in 1..count - 1 {
            let base = origin.lerp(&destination, i as f64 / (count - 1) as f64);
            waypoints.push(Coordinate::new(
                (base.latitude + jitter.sample(rng)).clamp(-90.0, 90.0),
                (base.longitude + jitter.sample(rng)).clamp(-180.0, 180.0),
            ));
        }
        waypoints.push(destination);

        Ok(waypoints)
    }

    fn response(
        rng: &mut StdRng,
        policy: VariantPolicy,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<DirectionsResponse, Error> {
        let waypoints = Self::waypoints(rng, policy, origin, destination)?;
        let last = waypoints.len() - 2;

        let steps: Vec<Step> = waypoints
            .windows(2)
            .enumerate()
            .map(|(i, pair)| {
                let meters = pair[0].haversine_distance(&pair[1]);
                let seconds = meters / RIDING_SPEED * Self::detour_factor(policy);

                let instruction = match i {
                    0 => "Head toward your destination".to_string(),
                    i if i == last => "Arrive at your destination".to_string(),
                    _ => TURN_PHRASES[rng.gen_range(0..TURN_PHRASES.len())].to_string(),
                };

                Step {
                    distance: distance_text(meters),
                    duration: duration_text(seconds),
                    start_location: pair[0].into(),
                    end_location: pair[1].into(),
                    html_instructions: instruction,
                }
            })
            .collect();

        let meters: f64 = steps.iter().map(|s| s.distance.value).sum();
        let seconds: f64 = steps.iter().map(|s| s.duration.value).sum();
        let traffic = seconds * rng.gen_range(1.0..1.6);

        Ok(DirectionsResponse {
            status: DirectionsStatus::Ok,
            routes: vec![DirectionsRoute {
                summary: format!("Simulated {}", policy.kind().label().to_lowercase()),
                legs: vec![Leg {
                    distance: distance_text(meters),
                    duration: duration_text(seconds),
                    duration_in_traffic: Some(duration_text(traffic)),
                    start_location: LatLng::from(origin),
                    end_location: LatLng::from(destination),
                    steps,
                }],
                overview_polyline: None,
                warnings: vec![],
            }],
            error_message: None,
        })
    }
}

fn distance_text(meters: f64) -> TextValue {
    TextValue {
        text: format!("{:.1} km", meters / 1000.0),
        value: meters.round(),
    }
}

fn duration_text(seconds: f64) -> TextValue {
    TextValue {
        text: format!("{} mins", (seconds / 60.0).ceil()),
        value: seconds.round(),
    }
}

#[async_trait]
impl RouteSource for SimulatedSource {
    fn name(&self) -> String {
        "simulated".into()
    }

    #[tracing::instrument(skip(self))]
    async fn fetch(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<PolicyResponses, Error> {
        let mut rng = self.rng();

        VariantPolicy::ALL
            .into_iter()
            .map(|policy| {
                Self::response(&mut rng, policy, origin, destination).map(|r| (policy, r))
            })
            .collect()
    }
}
