// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Unit conversions, shared tolerances and the snap grid.
//!
//! Every tolerance used by the pipeline is a named constant here so the
//! relationships between them (dedup finer than junction bucketing, both
//! coarser than float noise) stay visible in one place.

/// The layout coordinate grid: every plan coordinate snaps to 0.5 ft.
pub const SNAP_GRID_FT: f64 = 0.5;

/// Two wall records whose endpoints match within this describe the same
/// physical wall.
pub const WALL_DEDUP_TOL_FT: f64 = 0.5;

/// Endpoint bucketing tolerance for junction resolution. Deliberately
/// coarser than [`WALL_DEDUP_TOL_FT`] to absorb upstream coordinate
/// imprecision.
pub const JUNCTION_SNAP_FT: f64 = 1.0;

/// Float-noise epsilon for orientation and coincidence tests, in feet.
pub const EPS_FT: f64 = 1e-6;

pub fn inches_to_feet(inches: f64) -> f64 {
    inches / 12.0
}

/// Round a coordinate to the nearest grid step.
pub fn snap(value: f64) -> f64 {
    (value / SNAP_GRID_FT).round() * SNAP_GRID_FT
}

/// Format a length in decimal feet as a feet-inches dimension label.
///
/// `12.5 → 12'-6"`. Inches that round up to 12 carry into the feet:
/// `12.99 → 13'-0"`.
pub fn format_feet_inches(value_ft: f64) -> String {
    let mut whole_feet = value_ft.floor() as i64;
    let mut inches = ((value_ft - value_ft.floor()) * 12.0).round() as i64;
    if inches == 12 {
        whole_feet += 1;
        inches = 0;
    }
    format!("{}'-{}\"", whole_feet, inches)
}
