use serde::{Deserialize, Serialize};

use crate::entities::{BoundingBox, Coordinate};

/// Smallest span, in degrees, used when normalizing. Keeps single-point and
/// perfectly straight routes finite.
pub const MIN_SPAN_DEGREES: f64 = 1e-6;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 1000.0,
        }
    }
}

impl Canvas {
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CanvasPoint {
    pub x: f64,
    pub y: f64,
}

/// Maps geographic coordinates into canvas space, north up.
#[derive(Clone, Copy, Debug)]
pub struct Projection {
    bounds: BoundingBox,
    canvas: Canvas,
    latitude_span: f64,
    longitude_span: f64,
}

impl Projection {
    pub fn new(bounds: BoundingBox, canvas: Canvas) -> Self {
        Self {
            bounds,
            canvas,
            latitude_span: bounds.latitude_span().max(MIN_SPAN_DEGREES),
            longitude_span: bounds.longitude_span().max(MIN_SPAN_DEGREES),
        }
    }

    pub fn project(&self, coordinate: &Coordinate) -> CanvasPoint {
        let x = (coordinate.longitude - self.bounds.south_west.longitude) / self.longitude_span;
        let y = (coordinate.latitude - self.bounds.south_west.latitude) / self.latitude_span;

        CanvasPoint {
            x: x * self.canvas.width,
            y: (1.0 - y) * self.canvas.height,
        }
    }

    pub fn project_path(&self, path: &[Coordinate]) -> Vec<CanvasPoint> {
        path.iter().map(|c| self.project(c)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_map_to_canvas_corners() {
        let path = vec![Coordinate::new(14.60, 120.98), Coordinate::new(14.61, 121.00)];
        let bounds = BoundingBox::around(&path).unwrap();
        let projection = Projection::new(bounds, Canvas::default());

        let points = projection.project_path(&path);

        assert!((points[0].x - 0.0).abs() < 1e-6);
        assert!((points[0].y - 1000.0).abs() < 1e-6);
        assert!((points[1].x - 1000.0).abs() < 1e-6);
        assert!((points[1].y - 0.0).abs() < 1e-6);
    }

    #[test]
    fn single_point_is_finite() {
        let path = vec![Coordinate::new(14.6, 120.98); 3];
        let bounds = BoundingBox::around(&path).unwrap();
        let projection = Projection::new(bounds, Canvas::default());

        for point in projection.project_path(&path) {
            assert!(point.x.is_finite());
            assert!(point.y.is_finite());
        }
    }

    #[test]
    fn rejects_empty_canvas() {
        assert!(Canvas::default().is_valid());
        assert!(!Canvas {
            width: 0.0,
            height: 10.0
        }
        .is_valid());
    }
}
