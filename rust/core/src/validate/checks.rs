// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The individual structural checks.
//!
//! Each check is a standalone function appending to the shared issue list;
//! none of them inspects another's findings. Only room overlap is blocking.

use super::{CheckCode, ValidationIssue};
use crate::model::{FloorPlan, FloorPlanLayout, RoomRecord, RoomType};
use crate::units::EPS_FT;

/// Rectangles may brush each other by this much before counting as overlap.
const OVERLAP_TOL_FT: f64 = 0.25;

/// A room may poke this far outside the envelope before warning.
const ENVELOPE_TOL_FT: f64 = 0.5;

/// Slack added to every per-type aspect ceiling.
const ASPECT_SLACK: f64 = 0.1;

/// Forbidden neighbors must share at least this much collinear edge.
const EDGE_SHARE_MIN_FT: f64 = 0.5;

/// How closely two room edges must line up to count as the same wall line.
const EDGE_COINCIDE_TOL_FT: f64 = 0.25;

/// Total room area may exceed usable envelope area by this factor.
const AREA_BUDGET_FACTOR: f64 = 1.15;

/// Door-presence search inflates the room rectangle by this much.
const DOOR_SEARCH_INFLATE_FT: f64 = 0.5;

/// An entry/foyer larger than this is wasted circulation.
const ENTRY_MAX_SQFT: f64 = 80.0;

/// Hallways above this fraction of total room area are excessive.
const HALLWAY_MAX_FRACTION: f64 = 0.10;

fn axis_overlap(a_min: f64, a_max: f64, b_min: f64, b_max: f64) -> f64 {
    a_max.min(b_max) - a_min.max(b_min)
}

/// Two rooms overlap when their rectangles intrude on each other in both
/// axes by more than the brush tolerance. The only blocking check.
pub fn check_room_overlap(floor: &FloorPlan, issues: &mut Vec<ValidationIssue>) {
    for (i, a) in floor.rooms.iter().enumerate() {
        for b in floor.rooms.iter().skip(i + 1) {
            let ox = axis_overlap(a.x, a.max_x(), b.x, b.max_x());
            let oy = axis_overlap(a.y, a.max_y(), b.y, b.max_y());
            if ox > OVERLAP_TOL_FT && oy > OVERLAP_TOL_FT {
                issues.push(ValidationIssue::blocking(
                    CheckCode::RoomOverlap,
                    format!(
                        "Rooms '{}' and '{}' overlap by {:.1} x {:.1} ft; move them apart.",
                        a.name, b.name, ox, oy
                    ),
                ));
            }
        }
    }
}

pub fn check_envelope(
    layout: &FloorPlanLayout,
    floor: &FloorPlan,
    issues: &mut Vec<ValidationIssue>,
) {
    for room in &floor.rooms {
        let out = (-room.x)
            .max(-room.y)
            .max(room.max_x() - layout.width_ft)
            .max(room.max_y() - layout.depth_ft);
        if out > ENVELOPE_TOL_FT {
            issues.push(ValidationIssue::warning(
                CheckCode::EnvelopeOverflow,
                format!(
                    "Room '{}' extends {:.1} ft outside the building envelope.",
                    room.name, out
                ),
            ));
        }
    }
}

pub fn check_aspect_ratio(floor: &FloorPlan, issues: &mut Vec<ValidationIssue>) {
    for room in &floor.rooms {
        let Some(ceiling) = room.room_type.aspect_ceiling() else {
            continue;
        };
        let short = room.width.min(room.depth);
        let long = room.width.max(room.depth);
        if short < EPS_FT {
            continue; // degenerate room, overlap/envelope checks will speak up
        }
        let ratio = long / short;
        if ratio > ceiling + ASPECT_SLACK {
            issues.push(ValidationIssue::warning(
                CheckCode::AspectRatio,
                format!(
                    "Room '{}' has aspect ratio {:.2}, above the {:.1} limit for its type.",
                    room.name, ratio, ceiling
                ),
            ));
        }
    }
}

/// True when the rooms share a collinear vertical or horizontal edge with
/// enough overlapping extent to count as a common wall.
fn shares_edge(a: &RoomRecord, b: &RoomRecord) -> bool {
    // Vertical edges: a's right against b's left, or the reverse.
    let vertical_touch = (a.max_x() - b.x).abs() <= EDGE_COINCIDE_TOL_FT
        || (b.max_x() - a.x).abs() <= EDGE_COINCIDE_TOL_FT;
    if vertical_touch && axis_overlap(a.y, a.max_y(), b.y, b.max_y()) > EDGE_SHARE_MIN_FT {
        return true;
    }
    let horizontal_touch = (a.max_y() - b.y).abs() <= EDGE_COINCIDE_TOL_FT
        || (b.max_y() - a.y).abs() <= EDGE_COINCIDE_TOL_FT;
    horizontal_touch && axis_overlap(a.x, a.max_x(), b.x, b.max_x()) > EDGE_SHARE_MIN_FT
}

pub fn check_adjacency(floor: &FloorPlan, issues: &mut Vec<ValidationIssue>) {
    for (i, a) in floor.rooms.iter().enumerate() {
        for b in floor.rooms.iter().skip(i + 1) {
            if a.room_type.forbids_adjacent(&b.room_type) && shares_edge(a, b) {
                issues.push(ValidationIssue::warning(
                    CheckCode::AdjacencyViolation,
                    format!(
                        "'{}' and '{}' share a wall; these room types should not be adjacent.",
                        a.name, b.name
                    ),
                ));
            }
        }
    }
}

pub fn check_area_budget(
    layout: &FloorPlanLayout,
    floor: &FloorPlan,
    issues: &mut Vec<ValidationIssue>,
) {
    let garage_area: f64 = floor
        .rooms
        .iter()
        .filter(|r| r.room_type == RoomType::Garage)
        .map(RoomRecord::area)
        .sum();
    let room_area: f64 = floor
        .rooms
        .iter()
        .filter(|r| r.room_type != RoomType::Garage)
        .map(RoomRecord::area)
        .sum();
    let usable = layout.envelope_area() - garage_area;
    if usable > EPS_FT && room_area > AREA_BUDGET_FACTOR * usable {
        issues.push(ValidationIssue::warning(
            CheckCode::AreaBudget,
            format!(
                "Total room area {:.0} sq ft exceeds the envelope budget of {:.0} sq ft.",
                room_area,
                AREA_BUDGET_FACTOR * usable
            ),
        ));
    }
}

/// Approximate door-reachability: does the room's (inflated) bounding box
/// contain any wall that hosts a door? This is a bounding-box heuristic,
/// not polygon-edge adjacency.
pub fn check_door_presence(floor: &FloorPlan, issues: &mut Vec<ValidationIssue>) {
    for room in &floor.rooms {
        if room.room_type.door_exempt() {
            continue;
        }
        let rx0 = room.x - DOOR_SEARCH_INFLATE_FT;
        let ry0 = room.y - DOOR_SEARCH_INFLATE_FT;
        let rx1 = room.max_x() + DOOR_SEARCH_INFLATE_FT;
        let ry1 = room.max_y() + DOOR_SEARCH_INFLATE_FT;

        let has_door_wall = floor.walls.iter().any(|wall| {
            let hosts_door = floor.doors.iter().any(|d| d.wall_id == wall.id);
            if !hosts_door {
                return false;
            }
            let wx0 = wall.start.x.min(wall.end.x);
            let wy0 = wall.start.y.min(wall.end.y);
            let wx1 = wall.start.x.max(wall.end.x);
            let wy1 = wall.start.y.max(wall.end.y);
            axis_overlap(rx0, rx1, wx0, wx1) >= 0.0 && axis_overlap(ry0, ry1, wy0, wy1) >= 0.0
        });

        if !has_door_wall {
            issues.push(ValidationIssue::warning(
                CheckCode::MissingDoor,
                format!("Room '{}' appears to have no door.", room.name),
            ));
        }
    }
}

pub fn check_entry_size(floor: &FloorPlan, issues: &mut Vec<ValidationIssue>) {
    for room in &floor.rooms {
        if room.room_type == RoomType::Entry && room.area() > ENTRY_MAX_SQFT {
            issues.push(ValidationIssue::warning(
                CheckCode::EntryOversize,
                format!(
                    "Entry '{}' is {:.0} sq ft; entries above {:.0} sq ft waste floor area.",
                    room.name,
                    room.area(),
                    ENTRY_MAX_SQFT
                ),
            ));
        }
    }
}

pub fn check_hallway_ratio(floor: &FloorPlan, issues: &mut Vec<ValidationIssue>) {
    let total: f64 = floor.rooms.iter().map(RoomRecord::area).sum();
    if total < EPS_FT {
        return;
    }
    let hallway: f64 = floor
        .rooms
        .iter()
        .filter(|r| r.room_type == RoomType::Hallway)
        .map(RoomRecord::area)
        .sum();
    if hallway > HALLWAY_MAX_FRACTION * total {
        issues.push(ValidationIssue::warning(
            CheckCode::HallwayRatio,
            format!(
                "Hallways take {:.0}% of floor area; keep them under {:.0}%.",
                100.0 * hallway / total,
                100.0 * HALLWAY_MAX_FRACTION
            ),
        ));
    }
}
