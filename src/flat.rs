use flat_projection::{FlatPoint, FlatProjection};
use ord_subset::OrdSubsetIterExt;

use crate::parallel::*;
use crate::point::{latitude, longitude, Coordinates};

/// Projects all geographic points onto a flat surface for faster geodesic calculation
///
/// Coordinates are longitude/latitude degrees; the projected plane is in
/// kilometers. An empty slice projects to an empty vector.
pub fn to_flat_points<C: Coordinates + Sync>(points: &[C]) -> Vec<FlatPoint<f64>> {
    let center_lon = points.center_lon().unwrap_or(0.);
    let center_lat = points.center_lat().unwrap_or(0.);
    let proj = FlatProjection::new(center_lon, center_lat);

    opt_par_iter(points)
        .map(|fix| proj.project(longitude(fix), latitude(fix)))
        .collect()
}

trait CenterLatitude {
    fn center_lat(self: &Self) -> Option<f64>;
}

impl<C: Coordinates> CenterLatitude for [C] {
    fn center_lat(self: &Self) -> Option<f64> {
        let lat_min = self.iter().map(latitude).ord_subset_min()?;
        let lat_max = self.iter().map(latitude).ord_subset_max()?;

        Some((lat_min + lat_max) / 2.)
    }
}

trait CenterLongitude {
    fn center_lon(self: &Self) -> Option<f64>;
}

impl<C: Coordinates> CenterLongitude for [C] {
    fn center_lon(self: &Self) -> Option<f64> {
        let lon_min = self.iter().map(longitude).ord_subset_min()?;
        let lon_max = self.iter().map(longitude).ord_subset_max()?;

        Some((lon_min + lon_max) / 2.)
    }
}
