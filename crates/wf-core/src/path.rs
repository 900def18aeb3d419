//! Polyline length and midpoint over coordinate sequences.
//!
//! The midpoint is the point at exactly 50 % of cumulative path length,
//! found by walking segments and linearly interpolating inside the one
//! where the running total crosses half.  Linear interpolation is not a
//! geodesic split, but at the sub-kilometre scale these routes cover the
//! difference is far below label-placement precision.

use crate::{CoreError, CoreResult, GeoPoint};

/// Total length of `coords` in metres — the sum of consecutive-pair
/// great-circle distances.  A single point (or empty slice) has length 0.
pub fn path_length_m(coords: &[GeoPoint]) -> CoreResult<f64> {
    let mut total = 0.0;
    for pair in coords.windows(2) {
        total += pair[0].distance_m(pair[1])?;
    }
    Ok(total)
}

/// The point at 50 % of the cumulative length of `coords`.
///
/// Walks the cumulative segment lengths; once the running total reaches or
/// exceeds half the total, interpolates within that segment by the
/// fractional remainder.  Single-point and zero-length paths return the
/// first point.
///
/// # Errors
///
/// [`CoreError::EmptyPath`] for an empty slice, plus any coordinate error
/// surfaced by the distance computation.
pub fn path_midpoint(coords: &[GeoPoint]) -> CoreResult<GeoPoint> {
    let first = *coords.first().ok_or(CoreError::EmptyPath)?;

    let total = path_length_m(coords)?;
    if total <= 0.0 {
        return Ok(first);
    }

    let half = total / 2.0;
    let mut accumulated = 0.0;
    for pair in coords.windows(2) {
        let segment = pair[0].distance_m(pair[1])?;
        if accumulated + segment >= half {
            // A zero-length segment cannot be interpolated into; its start
            // already sits at the crossing.
            if segment <= 0.0 {
                return Ok(pair[0]);
            }
            let ratio = (half - accumulated) / segment;
            return Ok(GeoPoint::new(
                pair[0].lon + (pair[1].lon - pair[0].lon) * ratio,
                pair[0].lat + (pair[1].lat - pair[0].lat) * ratio,
            ));
        }
        accumulated += segment;
    }

    // Rounding in the accumulation can leave `half` fractionally beyond the
    // final segment; the path end is the crossing then.
    Ok(*coords.last().unwrap_or(&first))
}
