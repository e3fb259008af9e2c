//! Projects geographic coordinates into a bounded pixel viewport.

use tc_core::GeoPoint;

const EPSILON: f64 = 1e-6;

fn is_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

/// Uniform-scale projection from `(lat, lon)` into `(x, y)` pixels, fit to a
/// `width x height` viewport with `padding` on every side.
pub struct SphereProjector {
    padding: f64,
    min_lon: f64,
    max_lat: f64,
    zoom: f64,
}

impl SphereProjector {
    /// Build a projector from the bounding box of `points`. Degenerate axes
    /// (all points share a longitude, or all share a latitude) are dropped
    /// from the zoom computation rather than causing a division by zero; if
    /// both axes are degenerate, zoom is `0.0` and every point maps to the
    /// padding corner.
    pub fn new(points: impl IntoIterator<Item = GeoPoint>, width: f64, height: f64, padding: f64) -> Self {
        let points: Vec<GeoPoint> = points.into_iter().collect();
        if points.is_empty() {
            return Self { padding, min_lon: 0.0, max_lat: 0.0, zoom: 0.0 };
        }

        let min_lon = points.iter().map(|p| p.lon).fold(f64::INFINITY, f64::min);
        let max_lon = points.iter().map(|p| p.lon).fold(f64::NEG_INFINITY, f64::max);
        let min_lat = points.iter().map(|p| p.lat).fold(f64::INFINITY, f64::min);
        let max_lat = points.iter().map(|p| p.lat).fold(f64::NEG_INFINITY, f64::max);

        let width_zoom = if !is_zero(max_lon - min_lon) {
            Some((width - 2.0 * padding) / (max_lon - min_lon))
        } else {
            None
        };
        let height_zoom = if !is_zero(max_lat - min_lat) {
            Some((height - 2.0 * padding) / (max_lat - min_lat))
        } else {
            None
        };

        let zoom = match (width_zoom, height_zoom) {
            (Some(w), Some(h)) => w.min(h),
            (Some(w), None) => w,
            (None, Some(h)) => h,
            (None, None) => 0.0,
        };

        Self { padding, min_lon, max_lat, zoom }
    }

    /// Project a single coordinate into `(x, y)` pixels.
    pub fn project(&self, p: GeoPoint) -> (f64, f64) {
        let x = (p.lon - self.min_lon) * self.zoom + self.padding;
        let y = (self.max_lat - p.lat) * self.zoom + self.padding;
        (x, y)
    }
}
