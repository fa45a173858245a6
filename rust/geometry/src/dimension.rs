// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Dimension chains: nested measurement annotations per building side.
//!
//! Each of the four sides carries three levels along its axis: detail
//! (every unique room-boundary coordinate), room (detail coordinates merged
//! until gaps accumulate past a crowding threshold), and overall (the full
//! envelope extent). Values here are in feet; the renderer converts spans
//! into extension lines, ticks and labels at the level's outward offset.

use plandraft_core::model::{FloorPlan, Point2D};
use plandraft_core::units::format_feet_inches;
use serde::{Deserialize, Serialize};

/// Building side a chain annotates
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    North,
    South,
    East,
    West,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::North, Side::South, Side::East, Side::West];

    /// North and south chains measure along x, east and west along y.
    pub fn measures_x(&self) -> bool {
        matches!(self, Side::North | Side::South)
    }
}

/// Nesting level of a chain
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DimLevel {
    Detail,
    Room,
    Overall,
}

impl DimLevel {
    /// Distance of the dimension line outside the envelope, in feet.
    /// Detail sits closest to the building.
    pub fn offset_ft(&self) -> f64 {
        match self {
            DimLevel::Detail => 1.5,
            DimLevel::Room => 3.0,
            DimLevel::Overall => 4.5,
        }
    }
}

/// Consecutive runs of gaps totalling less than this merge at room level.
const MERGE_THRESHOLD_FT: f64 = 3.0;

/// Interior room dimensions sit this far inside the room boundary.
const ROOM_DIM_INSET_FT: f64 = 0.8;

/// One measured span along a chain's axis, in feet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DimSpan {
    pub start_ft: f64,
    pub end_ft: f64,
    pub label: String,
}

impl DimSpan {
    fn between(start_ft: f64, end_ft: f64) -> Self {
        Self {
            start_ft,
            end_ft,
            label: format_feet_inches(end_ft - start_ft),
        }
    }

    pub fn length_ft(&self) -> f64 {
        self.end_ft - self.start_ft
    }
}

/// One level of annotation along one building side
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DimensionChain {
    pub side: Side,
    pub level: DimLevel,
    pub spans: Vec<DimSpan>,
}

/// An interior width or depth annotation for a single room, in feet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomDimension {
    pub room_id: String,
    pub start: Point2D,
    pub end: Point2D,
    pub label: String,
}

/// Sorted unique boundary coordinates on one axis, envelope bounds included
fn boundary_coords(floor: &FloorPlan, extent_ft: f64, x_axis: bool) -> Vec<f64> {
    let mut coords = vec![0.0, extent_ft];
    for room in &floor.rooms {
        if x_axis {
            coords.push(room.x);
            coords.push(room.max_x());
        } else {
            coords.push(room.y);
            coords.push(room.max_y());
        }
    }
    coords.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    coords.dedup_by(|a, b| (*a - *b).abs() < 1e-6);
    coords
}

/// Collapse coordinates whose accumulated gap run stays under the
/// threshold. First and last coordinates always survive.
fn merge_coords(coords: &[f64], threshold: f64) -> Vec<f64> {
    let Some((&first, rest)) = coords.split_first() else {
        return Vec::new();
    };
    let mut kept = vec![first];
    for &c in rest {
        if c - kept[kept.len() - 1] >= threshold {
            kept.push(c);
        }
    }
    let last = coords[coords.len() - 1];
    if (kept[kept.len() - 1] - last).abs() > 1e-9 {
        if kept.len() > 1 {
            // fold the trailing short run into the final span
            let n = kept.len();
            kept[n - 1] = last;
        } else {
            kept.push(last);
        }
    }
    kept
}

fn spans_between(coords: &[f64]) -> Vec<DimSpan> {
    coords
        .windows(2)
        .filter(|w| w[1] - w[0] > 1e-9)
        .map(|w| DimSpan::between(w[0], w[1]))
        .collect()
}

/// Compute the three nested chains for every building side.
pub fn side_chains(floor: &FloorPlan, width_ft: f64, depth_ft: f64) -> Vec<DimensionChain> {
    let mut chains = Vec::with_capacity(12);
    for side in Side::ALL {
        let extent = if side.measures_x() { width_ft } else { depth_ft };
        let detail = boundary_coords(floor, extent, side.measures_x());
        let room = merge_coords(&detail, MERGE_THRESHOLD_FT);

        chains.push(DimensionChain {
            side,
            level: DimLevel::Detail,
            spans: spans_between(&detail),
        });
        chains.push(DimensionChain {
            side,
            level: DimLevel::Room,
            spans: spans_between(&room),
        });
        chains.push(DimensionChain {
            side,
            level: DimLevel::Overall,
            spans: vec![DimSpan::between(0.0, extent)],
        });
    }
    chains
}

/// Interior width/depth dimensions, one pair per room.
pub fn room_dimensions(floor: &FloorPlan) -> Vec<RoomDimension> {
    let mut dims = Vec::with_capacity(floor.rooms.len() * 2);
    for room in &floor.rooms {
        let y = room.y + ROOM_DIM_INSET_FT;
        dims.push(RoomDimension {
            room_id: room.id.clone(),
            start: Point2D::new(room.x, y),
            end: Point2D::new(room.max_x(), y),
            label: format_feet_inches(room.width),
        });
        let x = room.x + ROOM_DIM_INSET_FT;
        dims.push(RoomDimension {
            room_id: room.id.clone(),
            start: Point2D::new(x, room.y),
            end: Point2D::new(x, room.max_y()),
            label: format_feet_inches(room.depth),
        });
    }
    dims
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use plandraft_core::model::{RoomRecord, RoomType};

    fn room(id: &str, x: f64, y: f64, w: f64, d: f64) -> RoomRecord {
        RoomRecord {
            id: id.into(),
            name: id.into(),
            room_type: RoomType::Living,
            x,
            y,
            width: w,
            depth: d,
        }
    }

    fn floor_with(rooms: Vec<RoomRecord>) -> FloorPlan {
        FloorPlan {
            level: 0,
            rooms,
            walls: vec![],
            doors: vec![],
            windows: vec![],
            stairs: vec![],
        }
    }

    #[test]
    fn single_room_produces_three_levels_per_side() {
        let floor = floor_with(vec![room("r", 0.0, 0.0, 20.0, 15.0)]);
        let chains = side_chains(&floor, 20.0, 15.0);
        assert_eq!(chains.len(), 12);

        for side in Side::ALL {
            let overall = chains
                .iter()
                .find(|c| c.side == side && c.level == DimLevel::Overall)
                .unwrap();
            assert_eq!(overall.spans.len(), 1);
            let expect = if side.measures_x() { 20.0 } else { 15.0 };
            assert_relative_eq!(overall.spans[0].length_ft(), expect);
        }
    }

    #[test]
    fn room_level_merges_narrow_gaps() {
        // boundaries at 0, 10, 12, 22: the 2 ft gap merges away
        let floor = floor_with(vec![
            room("a", 0.0, 0.0, 10.0, 22.0),
            room("b", 10.0, 0.0, 2.0, 22.0),
            room("c", 12.0, 0.0, 10.0, 22.0),
        ]);
        let chains = side_chains(&floor, 22.0, 22.0);
        let detail = chains
            .iter()
            .find(|c| c.side == Side::South && c.level == DimLevel::Detail)
            .unwrap();
        assert_eq!(detail.spans.len(), 3);

        let room_level = chains
            .iter()
            .find(|c| c.side == Side::South && c.level == DimLevel::Room)
            .unwrap();
        assert_eq!(room_level.spans.len(), 2);
        assert_relative_eq!(room_level.spans[0].length_ft(), 10.0);
        assert_relative_eq!(room_level.spans[1].length_ft(), 12.0);
    }

    #[test]
    fn span_labels_use_feet_inches() {
        let floor = floor_with(vec![room("a", 0.0, 0.0, 12.5, 9.0)]);
        let chains = side_chains(&floor, 12.5, 9.0);
        let overall = chains
            .iter()
            .find(|c| c.side == Side::North && c.level == DimLevel::Overall)
            .unwrap();
        assert_eq!(overall.spans[0].label, "12'-6\"");
    }

    #[test]
    fn detail_offset_is_closest_to_building() {
        assert!(DimLevel::Detail.offset_ft() < DimLevel::Room.offset_ft());
        assert!(DimLevel::Room.offset_ft() < DimLevel::Overall.offset_ft());
    }

    #[test]
    fn room_dimensions_sit_inside_the_room() {
        let floor = floor_with(vec![room("a", 2.0, 3.0, 10.0, 8.0)]);
        let dims = room_dimensions(&floor);
        assert_eq!(dims.len(), 2);
        assert_relative_eq!(dims[0].start.y, 3.8);
        assert_relative_eq!(dims[0].end.x, 12.0);
        assert_eq!(dims[0].label, "10'-0\"");
        assert_relative_eq!(dims[1].start.x, 2.8);
        assert_eq!(dims[1].label, "8'-0\"");
    }
}
