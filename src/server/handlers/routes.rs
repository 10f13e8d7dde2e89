use axum::extract::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::entities::{Coordinate, RoutePlan};
use crate::error::{invalid_input_error, Error};
use crate::server::DynAPI;
use crate::synthesis::{Canvas, CanvasPoint, Projection};

#[derive(Serialize, Deserialize)]
pub struct CreateParams {
    origin: Coordinate,
    destination: Coordinate,
    /// When set, each variant's path is also returned projected onto this
    /// canvas for offline rendering.
    #[serde(default)]
    canvas: Option<Canvas>,
}

#[derive(Serialize, Deserialize)]
pub struct PlanResponse {
    #[serde(flatten)]
    pub plan: RoutePlan,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canvas_paths: Option<Vec<Vec<CanvasPoint>>>,
}

pub async fn create(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<CreateParams>,
) -> Result<Json<PlanResponse>, Error> {
    if let Some(canvas) = params.canvas {
        if !canvas.is_valid() {
            return Err(invalid_input_error());
        }
    }

    let plan = api.plan_routes(params.origin, params.destination).await?;

    let canvas_paths = params.canvas.map(|canvas| {
        plan.variants
            .iter()
            .map(|variant| Projection::new(variant.bounds, canvas).project_path(&variant.path))
            .collect()
    });

    Ok(PlanResponse { plan, canvas_paths }.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::engine::Engine;
    use crate::sources::SimulatedSource;
    use crate::synthesis::RouteSynthesizer;

    fn api() -> DynAPI {
        Arc::new(Engine::new(
            vec![Box::new(SimulatedSource::new(Some(11)))],
            RouteSynthesizer::default(),
        ))
    }

    fn params(canvas: Option<Canvas>) -> CreateParams {
        CreateParams {
            origin: Coordinate::new(14.60, 120.98),
            destination: Coordinate::new(14.61, 121.00),
            canvas,
        }
    }

    #[test]
    fn plans_without_canvas() {
        let Json(response) =
            tokio_test::block_on(create(Extension(api()), Json(params(None)))).unwrap();

        assert_eq!(response.plan.source, "simulated");
        assert_eq!(response.plan.variants.len(), 3);
        assert!(response.canvas_paths.is_none());
    }

    #[test]
    fn projects_paths_onto_canvas() {
        let canvas = Canvas {
            width: 320.0,
            height: 240.0,
        };
        let Json(response) =
            tokio_test::block_on(create(Extension(api()), Json(params(Some(canvas))))).unwrap();

        let paths = response.canvas_paths.unwrap();
        assert_eq!(paths.len(), response.plan.variants.len());

        for (path, variant) in paths.iter().zip(response.plan.variants.iter()) {
            assert_eq!(path.len(), variant.path.len());
            assert!(path
                .iter()
                .all(|p| (0.0..=320.0).contains(&p.x) && (0.0..=240.0).contains(&p.y)));
        }
    }

    #[test]
    fn rejects_degenerate_canvas() {
        let canvas = Canvas {
            width: -1.0,
            height: 240.0,
        };
        let result = tokio_test::block_on(create(Extension(api()), Json(params(Some(canvas)))));

        assert_eq!(result.err(), Some(invalid_input_error()));
    }

    #[test]
    fn rejects_invalid_coordinates() {
        let mut params = params(None);
        params.origin = Coordinate::new(120.0, 14.6);

        let result = tokio_test::block_on(create(Extension(api()), Json(params)));

        assert_eq!(result.err(), Some(invalid_input_error()));
    }
}
