/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/


//! Conversions between WGS-84 (satellite), GCJ-02 (the shifted system the
//! service uses) and BD-09.
//!
//! Every function here is pure and total over finite inputs. Points outside
//! the obfuscation region are passed through untouched in both directions.

use crate::common::types::Coordinate;
use std::f64::consts::PI;

const X_PI: f64 = PI * 3000.0 / 180.0;
/// Semi-major axis of the Krasovsky ellipsoid.
const SEMI_MAJOR_AXIS: f64 = 6378245.0;
const ECCENTRICITY_SQUARED: f64 = 0.00669342162296594323;

const MIN_LNG: f64 = 72.004;
const MAX_LNG: f64 = 137.8347;
const MIN_LAT: f64 = 0.8293;
const MAX_LAT: f64 = 55.8271;

/// Number of refinement steps after the seed evaluation in [`gcj02_to_wgs84`].
pub const INVERSE_REFINEMENTS: usize = 3;

/// Whether the point lies outside the region where the shift is applied.
pub fn out_of_region(coordinate: &Coordinate) -> bool {
    !(MIN_LNG..=MAX_LNG).contains(&coordinate.lng) || !(MIN_LAT..=MAX_LAT).contains(&coordinate.lat)
}

fn transform_lat(x: f64, y: f64) -> f64 {
    let mut ret = -100.0 + 2.0 * x + 3.0 * y + 0.2 * y * y + 0.1 * x * y + 0.2 * x.abs().sqrt();
    ret += (20.0 * (6.0 * x * PI).sin() + 20.0 * (2.0 * x * PI).sin()) * 2.0 / 3.0;
    ret += (20.0 * (y * PI).sin() + 40.0 * (y / 3.0 * PI).sin()) * 2.0 / 3.0;
    ret += (160.0 * (y / 12.0 * PI).sin() + 320.0 * (y * PI / 30.0).sin()) * 2.0 / 3.0;
    ret
}

fn transform_lng(x: f64, y: f64) -> f64 {
    let mut ret = 300.0 + x + 2.0 * y + 0.1 * x * x + 0.1 * x * y + 0.1 * x.abs().sqrt();
    ret += (20.0 * (6.0 * x * PI).sin() + 20.0 * (2.0 * x * PI).sin()) * 2.0 / 3.0;
    ret += (20.0 * (x * PI).sin() + 40.0 * (x / 3.0 * PI).sin()) * 2.0 / 3.0;
    ret += (150.0 * (x / 12.0 * PI).sin() + 300.0 * (x / 30.0 * PI).sin()) * 2.0 / 3.0;
    ret
}

/// WGS-84 to GCJ-02.
pub fn wgs84_to_gcj02(wgs: Coordinate) -> Coordinate {
    if out_of_region(&wgs) {
        return wgs;
    }

    let d_lat = transform_lat(wgs.lng - 105.0, wgs.lat - 35.0);
    let d_lng = transform_lng(wgs.lng - 105.0, wgs.lat - 35.0);

    let rad_lat = wgs.lat / 180.0 * PI;
    let magic = 1.0 - ECCENTRICITY_SQUARED * rad_lat.sin() * rad_lat.sin();
    let sqrt_magic = magic.sqrt();

    let d_lat = (d_lat * 180.0)
        / ((SEMI_MAJOR_AXIS * (1.0 - ECCENTRICITY_SQUARED)) / (magic * sqrt_magic) * PI);
    let d_lng = (d_lng * 180.0) / (SEMI_MAJOR_AXIS / sqrt_magic * rad_lat.cos() * PI);

    Coordinate::new(wgs.lng + d_lng, wgs.lat + d_lat)
}

/// GCJ-02 to WGS-84 by fixed-point iteration.
///
/// There is no closed-form inverse. The guess is seeded at a fixed offset and
/// refined exactly [`INVERSE_REFINEMENTS`] times with no convergence check, so
/// the output stays bit-compatible with other clients using the same scheme.
/// Inside the region this lands well under a meter from the true point.
pub fn gcj02_to_wgs84(gcj: Coordinate) -> Coordinate {
    if out_of_region(&gcj) {
        return gcj;
    }

    let mut wgs = Coordinate::new(gcj.lng - 0.0065, gcj.lat - 0.006);
    let (mut d_lng, mut d_lat) = residual(wgs, gcj);

    for _ in 0..INVERSE_REFINEMENTS {
        wgs.lng -= d_lng;
        wgs.lat -= d_lat;
        (d_lng, d_lat) = residual(wgs, gcj);
    }

    wgs
}

fn residual(guess: Coordinate, target: Coordinate) -> (f64, f64) {
    let shifted = wgs84_to_gcj02(guess);
    (shifted.lng - target.lng, shifted.lat - target.lat)
}

/// GCJ-02 to BD-09.
pub fn gcj02_to_bd09(gcj: Coordinate) -> Coordinate {
    let (x, y) = (gcj.lng, gcj.lat);
    let z = (x * x + y * y).sqrt() + 0.00002 * (y * X_PI).sin();
    let theta = y.atan2(x) + 0.000003 * (x * X_PI).cos();
    Coordinate::new(z * theta.cos() + 0.0065, z * theta.sin() + 0.006)
}

/// BD-09 to GCJ-02.
pub fn bd09_to_gcj02(bd: Coordinate) -> Coordinate {
    let (x, y) = (bd.lng - 0.0065, bd.lat - 0.006);
    let z = (x * x + y * y).sqrt() - 0.00002 * (y * X_PI).sin();
    let theta = y.atan2(x) - 0.000003 * (x * X_PI).cos();
    Coordinate::new(z * theta.cos(), z * theta.sin())
}

pub fn wgs84_to_bd09(wgs: Coordinate) -> Coordinate {
    gcj02_to_bd09(wgs84_to_gcj02(wgs))
}

pub fn bd09_to_wgs84(bd: Coordinate) -> Coordinate {
    gcj02_to_wgs84(bd09_to_gcj02(bd))
}
