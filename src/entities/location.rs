use serde::{Deserialize, Serialize};

const EARTH_RADIUS_METERS: f64 = 6_371_008.8;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Great-circle distance in meters.
    pub fn haversine_distance(&self, other: &Coordinate) -> f64 {
        let (lat1, lat2) = (self.latitude.to_radians(), other.latitude.to_radians());
        let d_lat = lat2 - lat1;
        let d_lng = (other.longitude - self.longitude).to_radians();

        let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);

        2.0 * EARTH_RADIUS_METERS * a.sqrt().asin()
    }

    /// Linear interpolation between two coordinates, `t` in [0, 1].
    pub fn lerp(&self, other: &Coordinate, t: f64) -> Coordinate {
        Coordinate {
            latitude: self.latitude + (other.latitude - self.latitude) * t,
            longitude: self.longitude + (other.longitude - self.longitude) * t,
        }
    }
}

// "lat,lng" as accepted by the Google APIs
impl From<Coordinate> for String {
    fn from(coordinate: Coordinate) -> Self {
        format!("{},{}", coordinate.latitude, coordinate.longitude)
    }
}

impl From<Coordinate> for geo_types::Coord<f64> {
    fn from(coordinate: Coordinate) -> Self {
        geo_types::coord! { x: coordinate.longitude, y: coordinate.latitude }
    }
}

impl From<Coordinate> for geo_types::Point<f64> {
    fn from(coordinate: Coordinate) -> Self {
        geo_types::Point::from(geo_types::Coord::from(coordinate))
    }
}

impl From<geo_types::Coord<f64>> for Coordinate {
    fn from(coord: geo_types::Coord<f64>) -> Self {
        Coordinate::new(coord.y, coord.x)
    }
}

/// Axis-aligned extent of a set of coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub south_west: Coordinate,
    pub north_east: Coordinate,
}

impl BoundingBox {
    pub fn around<'a, I>(coordinates: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Coordinate>,
    {
        let mut iter = coordinates.into_iter();
        let first = *iter.next()?;

        let rect = iter.fold(
            geo_types::Rect::new(geo_types::Coord::from(first), geo_types::Coord::from(first)),
            |rect, c| {
                let min = rect.min();
                let max = rect.max();
                geo_types::Rect::new(
                    geo_types::coord! { x: min.x.min(c.longitude), y: min.y.min(c.latitude) },
                    geo_types::coord! { x: max.x.max(c.longitude), y: max.y.max(c.latitude) },
                )
            },
        );

        Some(Self {
            south_west: rect.min().into(),
            north_east: rect.max().into(),
        })
    }

    pub fn latitude_span(&self) -> f64 {
        self.north_east.latitude - self.south_west.latitude
    }

    pub fn longitude_span(&self) -> f64 {
        self.north_east.longitude - self.south_west.longitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_ranges() {
        assert!(Coordinate::new(14.6, 120.98).is_valid());
        assert!(!Coordinate::new(91.0, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, -180.5).is_valid());
        assert!(!Coordinate::new(f64::NAN, 0.0).is_valid());
    }

    #[test]
    fn haversine_one_degree_latitude() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(1.0, 0.0);

        let d = a.haversine_distance(&b);
        assert!((d - 111_195.0).abs() < 10.0, "distance was {}", d);
        assert_eq!(a.haversine_distance(&a), 0.0);
    }

    #[test]
    fn bounding_box_spans_points() {
        let points = vec![
            Coordinate::new(14.61, 120.98),
            Coordinate::new(14.60, 121.00),
            Coordinate::new(14.65, 120.99),
        ];

        let bounds = BoundingBox::around(&points).unwrap();
        assert_eq!(bounds.south_west, Coordinate::new(14.60, 120.98));
        assert_eq!(bounds.north_east, Coordinate::new(14.65, 121.00));
        assert!(BoundingBox::around(&Vec::<Coordinate>::new()).is_none());
    }

    #[test]
    fn formats_for_query() {
        let s: String = Coordinate::new(14.6, 120.98).into();
        assert_eq!(s, "14.6,120.98");
    }
}
