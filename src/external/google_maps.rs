use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    entities::Coordinate,
    error::{invalid_input_error, upstream_error, Error},
    synthesis::VariantPolicy,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelMode {
    Driving,
    Walking,
    Bicycling,
}

impl TravelMode {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Driving => "driving",
            Self::Walking => "walking",
            Self::Bicycling => "bicycling",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DirectionsStatus {
    Ok,
    ZeroResults,
    NotFound,
    MaxWaypointsExceeded,
    MaxRouteLengthExceeded,
    InvalidRequest,
    OverDailyLimit,
    OverQueryLimit,
    RequestDenied,
    UnknownError,
    #[serde(other)]
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl From<LatLng> for Coordinate {
    fn from(location: LatLng) -> Self {
        Coordinate::new(location.lat, location.lng)
    }
}

impl From<Coordinate> for LatLng {
    fn from(coordinate: Coordinate) -> Self {
        LatLng {
            lat: coordinate.latitude,
            lng: coordinate.longitude,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextValue {
    #[serde(default)]
    pub text: String,
    pub value: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub distance: TextValue,
    pub duration: TextValue,
    pub start_location: LatLng,
    pub end_location: LatLng,
    #[serde(default)]
    pub html_instructions: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Leg {
    pub distance: TextValue,
    pub duration: TextValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_in_traffic: Option<TextValue>,
    pub start_location: LatLng,
    pub end_location: LatLng,
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    pub points: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DirectionsRoute {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub legs: Vec<Leg>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview_polyline: Option<Polyline>,
    #[serde(default)]
    pub warnings: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DirectionsResponse {
    pub status: DirectionsStatus,
    #[serde(default)]
    pub routes: Vec<DirectionsRoute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl DirectionsResponse {
    pub fn zero_results() -> Self {
        Self {
            status: DirectionsStatus::ZeroResults,
            routes: vec![],
            error_message: None,
        }
    }

    pub fn first_route(&self) -> Option<&DirectionsRoute> {
        match self.status {
            DirectionsStatus::Ok => self.routes.first(),
            _ => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct GoogleMapsClient {
    http: reqwest::Client,
    api_base: String,
    api_key: String,
}

impl GoogleMapsClient {
    pub fn new(api_base: String, api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base,
            api_key,
        }
    }

    /// `None` when no API key is configured.
    pub fn from_config(config: &Config) -> Option<Self> {
        let key = config.google_maps_api_key.clone()?;
        Some(Self::new(config.google_maps_api_base.clone(), key))
    }

    #[tracing::instrument(skip(self))]
    pub async fn directions(
        &self,
        origin: Coordinate,
        destination: Coordinate,
        mode: TravelMode,
        policy: VariantPolicy,
    ) -> Result<DirectionsResponse, Error> {
        let url = format!("https://{}/maps/api/directions/json", self.api_base);
        let origin: String = origin.into();
        let destination: String = destination.into();

        let mut request = self
            .http
            .get(url)
            .query(&[("origin", origin)])
            .query(&[("destination", destination)])
            .query(&[("mode", mode.name())])
            .query(&[("departure_time", "now")]);

        if let Some(avoid) = policy.avoid() {
            request = request.query(&[("avoid", avoid)]);
        }

        let res = request.query(&[("key", &self.api_key)]).send().await?;

        let status_code = res.status().as_u16();

        if (400..500).contains(&status_code) {
            return Err(invalid_input_error());
        } else if status_code != 200 {
            return Err(upstream_error());
        }

        let data: DirectionsResponse = res.json().await?;

        accept(data)
    }
}

/// Passes OK and ZERO_RESULTS payloads through; every other status is an
/// upstream failure.
pub fn accept(data: DirectionsResponse) -> Result<DirectionsResponse, Error> {
    match data.status {
        DirectionsStatus::Ok | DirectionsStatus::ZeroResults => Ok(data),
        _ => {
            tracing::warn!(
                "directions request failed with status {:?}: {:?}",
                data.status,
                data.error_message
            );
            Err(upstream_error())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_directions_payload() {
        let payload = serde_json::json!({
            "status": "OK",
            "routes": [{
                "summary": "EDSA",
                "legs": [{
                    "distance": { "text": "2.1 km", "value": 2100 },
                    "duration": { "text": "8 mins", "value": 480 },
                    "duration_in_traffic": { "text": "10 mins", "value": 600 },
                    "start_location": { "lat": 14.60, "lng": 120.98 },
                    "end_location": { "lat": 14.61, "lng": 121.00 },
                    "steps": [{
                        "distance": { "text": "1 km", "value": 1000 },
                        "duration": { "text": "4 mins", "value": 240 },
                        "start_location": { "lat": 14.60, "lng": 120.98 },
                        "end_location": { "lat": 14.605, "lng": 120.99 },
                        "html_instructions": "Head <b>north</b>",
                        "travel_mode": "BICYCLING"
                    }]
                }],
                "overview_polyline": { "points": "_p~iF~ps|U" },
                "warnings": ["Bicycling directions are in beta."]
            }]
        });

        let response: DirectionsResponse = serde_json::from_value(payload).unwrap();
        let route = response.first_route().unwrap();

        assert_eq!(route.legs[0].duration_in_traffic.as_ref().unwrap().value, 600.0);
        assert_eq!(route.legs[0].steps[0].html_instructions, "Head <b>north</b>");
        assert_eq!(route.warnings.len(), 1);
    }

    #[test]
    fn unknown_status_maps_to_other() {
        let response: DirectionsResponse =
            serde_json::from_value(serde_json::json!({ "status": "SOMETHING_NEW" })).unwrap();

        assert_eq!(response.status, DirectionsStatus::Other);
        assert!(response.first_route().is_none());
    }

    #[test]
    fn zero_results_has_no_route() {
        let response: DirectionsResponse =
            serde_json::from_value(serde_json::json!({ "status": "ZERO_RESULTS", "routes": [] }))
                .unwrap();

        assert_eq!(response, DirectionsResponse::zero_results());
        assert!(response.first_route().is_none());
    }

    fn with_status(status: DirectionsStatus) -> DirectionsResponse {
        DirectionsResponse {
            status,
            routes: vec![],
            error_message: None,
        }
    }

    #[test]
    fn accepts_ok_and_zero_results() {
        assert!(accept(with_status(DirectionsStatus::Ok)).is_ok());
        assert_eq!(
            accept(DirectionsResponse::zero_results()),
            Ok(DirectionsResponse::zero_results())
        );
    }

    #[test]
    fn other_statuses_are_upstream_errors() {
        for status in [
            DirectionsStatus::RequestDenied,
            DirectionsStatus::OverQueryLimit,
            DirectionsStatus::Other,
        ] {
            assert_eq!(accept(with_status(status)), Err(upstream_error()));
        }
    }
}
