use crate::entities::Coordinate;

const PRECISION: f64 = 1e5;

/// Decodes a Google encoded polyline. Returns `None` for truncated,
/// out-of-alphabet or overflowing input, and for points outside valid
/// latitude/longitude ranges.
pub fn decode(encoded: &str) -> Option<Vec<Coordinate>> {
    let bytes = encoded.as_bytes();
    let mut index = 0;
    let mut latitude: i64 = 0;
    let mut longitude: i64 = 0;
    let mut coordinates = vec![];

    while index < bytes.len() {
        latitude = latitude.checked_add(next_value(bytes, &mut index)?)?;
        longitude = longitude.checked_add(next_value(bytes, &mut index)?)?;

        let coordinate = Coordinate::new(
            latitude as f64 / PRECISION,
            longitude as f64 / PRECISION,
        );
        if !coordinate.is_valid() {
            return None;
        }

        coordinates.push(coordinate);
    }

    Some(coordinates)
}

fn next_value(bytes: &[u8], index: &mut usize) -> Option<i64> {
    let mut result: u64 = 0;
    let mut shift = 0;

    loop {
        let byte = *bytes.get(*index)?;
        *index += 1;

        if !(63..=126).contains(&byte) {
            return None;
        }

        let chunk = (byte - 63) as u64;
        let bits = chunk & 0x1f;

        // 13 chunks carry 65 bits; the last one may only use its low 4
        if shift > 60 || (shift == 60 && bits > 0x0f) {
            return None;
        }

        result |= bits << shift;
        shift += 5;

        if chunk < 0x20 {
            break;
        }
    }

    let magnitude = (result >> 1) as i64;

    if result & 1 == 1 {
        Some(!magnitude)
    } else {
        Some(magnitude)
    }
}
