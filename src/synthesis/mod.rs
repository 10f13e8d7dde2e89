//! Turns raw directions responses into labeled, scored route variants.
//!
//! Synthesis is a pure transformation: it performs no I/O and never fails.
//! Anything unusable upstream (a zero-result status, a route without
//! geometry) simply produces fewer variants, and an empty result tells the
//! caller to try its next route source.

mod classifier;
mod projection;
mod scoring;

use serde::{Deserialize, Serialize};

use crate::{
    entities::{BoundingBox, Coordinate, DetectedHazard, HazardCategory, RouteVariant, VariantKind},
    external::{
        google_maps::{DirectionsResponse, DirectionsRoute},
        polyline,
    },
};

pub use classifier::{strip_markup, HazardClassifier, KeywordClassifier};
pub use projection::{Canvas, CanvasPoint, Projection, MIN_SPAN_DEGREES};
pub use scoring::{safety_score, traffic_level};

pub const MAX_VARIANTS: usize = 3;

/// Routes with more steps than this get a simulated road-surface report.
pub const SYNTHETIC_HAZARD_STEP_THRESHOLD: usize = 5;

const SYNTHETIC_HAZARD_DESCRIPTION: &str = "Possible rough road surface reported along this route";

/// The avoidance filter a directions request was made with. Each filter yields
/// one kind of variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariantPolicy {
    None,
    AvoidHighways,
    AvoidHighwaysAndTolls,
}

impl VariantPolicy {
    pub const ALL: [VariantPolicy; 3] = [
        VariantPolicy::None,
        VariantPolicy::AvoidHighways,
        VariantPolicy::AvoidHighwaysAndTolls,
    ];

    pub fn kind(&self) -> VariantKind {
        match self {
            Self::None => VariantKind::Fastest,
            Self::AvoidHighways => VariantKind::AvoidObstacles,
            Self::AvoidHighwaysAndTolls => VariantKind::Chill,
        }
    }

    /// Value of the directions `avoid` parameter.
    pub fn avoid(&self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::AvoidHighways => Some("highways"),
            Self::AvoidHighwaysAndTolls => Some("highways|tolls"),
        }
    }
}

pub struct RouteSynthesizer {
    classifier: Box<dyn HazardClassifier + Send + Sync>,
}

impl Default for RouteSynthesizer {
    fn default() -> Self {
        Self::new(Box::new(KeywordClassifier::default()))
    }
}

impl RouteSynthesizer {
    pub fn new(classifier: Box<dyn HazardClassifier + Send + Sync>) -> Self {
        Self { classifier }
    }

    #[tracing::instrument(name = "RouteSynthesizer::synthesize", skip_all)]
    pub fn synthesize(
        &self,
        responses: &[(VariantPolicy, DirectionsResponse)],
    ) -> Vec<RouteVariant> {
        let mut variants: Vec<RouteVariant> = responses
            .iter()
            .filter_map(|(policy, response)| {
                let route = match response.first_route() {
                    Some(route) => route,
                    None => {
                        tracing::debug!("no route for {:?}: {:?}", policy, response.status);
                        return None;
                    }
                };

                self.build_variant(*policy, route)
            })
            .collect();

        if variants.len() >= 2 {
            variants.truncate(MAX_VARIANTS);
        }

        tracing::debug!("synthesized {} variant(s)", variants.len());

        variants
    }

    fn build_variant(
        &self,
        policy: VariantPolicy,
        route: &DirectionsRoute,
    ) -> Option<RouteVariant> {
        let steps: Vec<_> = route.legs.iter().flat_map(|leg| leg.steps.iter()).collect();

        let distance_meters: f64 = route.legs.iter().map(|leg| leg.distance.value).sum();
        let base_seconds: f64 = route.legs.iter().map(|leg| leg.duration.value).sum();
        let traffic_seconds: Option<f64> = match route.legs.is_empty() {
            true => None,
            false => route
                .legs
                .iter()
                .map(|leg| leg.duration_in_traffic.as_ref().map(|t| t.value))
                .sum(),
        };

        let step_endpoints: Vec<Coordinate> = steps
            .iter()
            .flat_map(|step| {
                [
                    Coordinate::from(step.start_location),
                    Coordinate::from(step.end_location),
                ]
            })
            .collect();

        let path = Self::path(route, &step_endpoints);
        if path.is_empty() {
            tracing::warn!("route for {:?} has no geometry, skipping", policy);
            return None;
        }

        let bounds = match step_endpoints.is_empty() {
            true => BoundingBox::around(&path)?,
            false => BoundingBox::around(&step_endpoints)?,
        };

        let midpoint = path[path.len() / 2];
        let mut hazards = vec![];

        for step in steps.iter() {
            let text = strip_markup(&step.html_instructions);

            for category in self.classifier.classify(&text) {
                hazards.push(DetectedHazard::new(step.start_location.into(), category, &text));
            }
        }

        for warning in route.warnings.iter() {
            if self
                .classifier
                .classify(warning)
                .contains(&HazardCategory::Construction)
            {
                hazards.push(DetectedHazard::new(
                    midpoint,
                    HazardCategory::Construction,
                    warning,
                ));
            }
        }

        if steps.len() > SYNTHETIC_HAZARD_STEP_THRESHOLD {
            hazards.push(DetectedHazard::new(
                midpoint,
                HazardCategory::RoadSurfaceDamage,
                SYNTHETIC_HAZARD_DESCRIPTION,
            ));
        }

        let kind = policy.kind();

        Some(RouteVariant {
            kind,
            summary: route.summary.clone(),
            safety_score: safety_score(kind, &hazards, !route.warnings.is_empty()),
            traffic_level: traffic_level(base_seconds, traffic_seconds),
            path,
            bounds,
            distance_meters,
            duration_seconds: traffic_seconds.unwrap_or(base_seconds),
            hazards,
            warnings: route.warnings.clone(),
        })
    }

    // Overview polyline first, then step endpoints, then leg endpoints.
    fn path(route: &DirectionsRoute, step_endpoints: &[Coordinate]) -> Vec<Coordinate> {
        let decoded = route
            .overview_polyline
            .as_ref()
            .and_then(|overview| polyline::decode(&overview.points))
            .filter(|points| !points.is_empty());

        if let Some(points) = decoded {
            return points;
        }

        if !step_endpoints.is_empty() {
            // start of the first step, then the end of every step
            return step_endpoints
                .iter()
                .enumerate()
                .filter(|(i, _)| *i == 0 || i % 2 == 1)
                .map(|(_, c)| *c)
                .collect();
        }

        let mut path: Vec<Coordinate> = route
            .legs
            .first()
            .map(|leg| Coordinate::from(leg.start_location))
            .into_iter()
            .collect();
        path.extend(route.legs.iter().map(|leg| Coordinate::from(leg.end_location)));

        path
    }
}
