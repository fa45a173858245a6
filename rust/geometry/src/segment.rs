// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wall segment construction: layout records to drawing-space rectangles.
//!
//! Each wall record becomes a [`WallSegment`], a rectangle of four corner
//! points placed symmetrically about the centerline. Segments live in a
//! [`SegmentArena`] addressed by the wall's record id; the arena is rebuilt
//! on every pipeline run and never persisted.

use crate::arena::SegmentArena;
use plandraft_core::model::{DoorSwing, FloorPlan, Point2D, WallClass, WallRecord};
use plandraft_core::units::{inches_to_feet, EPS_FT, WALL_DEDUP_TOL_FT};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Axis a wall segment runs along. Walls that are not exactly axis-aligned
/// are classified by their dominant axis.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Which centerline endpoint of a segment, in record order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallEnd {
    Start,
    End,
}

/// What kind of gap an opening span cuts
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum OpeningKind {
    Door { swing: DoorSwing },
    Window { height_in: f64, sill_in: f64 },
}

/// One opening projected onto its host wall's running axis,
/// as an absolute drawing-unit interval `[lo, hi]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpeningSpan {
    pub id: String,
    pub kind: OpeningKind,
    pub lo: f64,
    pub hi: f64,
}

impl OpeningSpan {
    pub fn width(&self) -> f64 {
        self.hi - self.lo
    }

    pub fn center(&self) -> f64 {
        (self.lo + self.hi) / 2.0
    }
}

/// Drawing-space geometry of one wall.
///
/// Corner indexing is fixed: corners 0 and 3 sit at the `Start` end of the
/// centerline, corners 1 and 2 at the `End`; 0/1 are on the low cross-axis
/// side, 3/2 on the high side. Junction resolution relies on this layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WallSegment {
    pub id: String,
    pub class: WallClass,
    pub orientation: Orientation,
    /// Centerline start in drawing units
    pub start: Point2D,
    /// Centerline end in drawing units
    pub end: Point2D,
    /// Half the wall thickness in drawing units
    pub half_thickness: f64,
    pub corners: [Point2D; 4],
    /// Openings sorted by `lo` along the running axis
    pub openings: SmallVec<[OpeningSpan; 2]>,
}

impl WallSegment {
    /// Running-axis coordinate of a point on this segment's axis
    pub fn running(&self, p: &Point2D) -> f64 {
        match self.orientation {
            Orientation::Horizontal => p.x,
            Orientation::Vertical => p.y,
        }
    }

    /// Cross-axis coordinate of the centerline
    pub fn cross_center(&self) -> f64 {
        match self.orientation {
            Orientation::Horizontal => self.start.y,
            Orientation::Vertical => self.start.x,
        }
    }

    pub fn endpoint(&self, end: WallEnd) -> Point2D {
        match end {
            WallEnd::Start => self.start,
            WallEnd::End => self.end,
        }
    }

    pub fn opposite_endpoint(&self, end: WallEnd) -> Point2D {
        match end {
            WallEnd::Start => self.end,
            WallEnd::End => self.start,
        }
    }

    /// Move the face at `end` to the given running-axis coordinate.
    /// Both corners of that end move together, so the segment stays a
    /// rectangle.
    pub fn set_end_face(&mut self, end: WallEnd, coord: f64) {
        let idx: [usize; 2] = match end {
            WallEnd::Start => [0, 3],
            WallEnd::End => [1, 2],
        };
        for i in idx {
            match self.orientation {
                Orientation::Horizontal => self.corners[i].x = coord,
                Orientation::Vertical => self.corners[i].y = coord,
            }
        }
    }

    /// Running-axis coordinate of the face at `end`
    pub fn end_face(&self, end: WallEnd) -> f64 {
        let i = match end {
            WallEnd::Start => 0,
            WallEnd::End => 1,
        };
        self.running(&self.corners[i])
    }

    /// Running-axis extent of the body, from the corner coordinates
    /// (faces may extend past the centerline after junction resolution)
    pub fn running_extent(&self) -> (f64, f64) {
        let coords = self.corners.map(|c| self.running(&c));
        let lo = coords.iter().cloned().fold(f64::MAX, f64::min);
        let hi = coords.iter().cloned().fold(f64::MIN, f64::max);
        (lo, hi)
    }

    /// Cross-axis extent of the body
    pub fn cross_extent(&self) -> (f64, f64) {
        let c = self.cross_center();
        (c - self.half_thickness, c + self.half_thickness)
    }
}

fn orientation_of(wall: &WallRecord) -> Orientation {
    let dx = (wall.end.x - wall.start.x).abs();
    let dy = (wall.end.y - wall.start.y).abs();
    if dy < EPS_FT {
        Orientation::Horizontal
    } else if dx < EPS_FT {
        Orientation::Vertical
    } else if dx >= dy {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    }
}

/// Two records describe the same physical wall when their endpoints match
/// within the dedup tolerance, in either direction.
fn same_wall(a: &WallRecord, b: &WallRecord) -> bool {
    let tol = WALL_DEDUP_TOL_FT;
    let forward =
        a.start.distance_to(&b.start) <= tol && a.end.distance_to(&b.end) <= tol;
    let reversed =
        a.start.distance_to(&b.end) <= tol && a.end.distance_to(&b.start) <= tol;
    forward || reversed
}

fn segment_from_record(wall: &WallRecord, scale: f64) -> WallSegment {
    let orientation = orientation_of(wall);
    let half = inches_to_feet(wall.thickness_in) * scale / 2.0;
    let start = Point2D::new(wall.start.x * scale, wall.start.y * scale);
    let end = Point2D::new(wall.end.x * scale, wall.end.y * scale);

    let corners = match orientation {
        Orientation::Horizontal => {
            let cy = start.y;
            [
                Point2D::new(start.x, cy - half),
                Point2D::new(end.x, cy - half),
                Point2D::new(end.x, cy + half),
                Point2D::new(start.x, cy + half),
            ]
        }
        Orientation::Vertical => {
            let cx = start.x;
            [
                Point2D::new(cx - half, start.y),
                Point2D::new(cx - half, end.y),
                Point2D::new(cx + half, end.y),
                Point2D::new(cx + half, start.y),
            ]
        }
    };

    WallSegment {
        id: wall.id.clone(),
        class: wall.class,
        orientation,
        start,
        end,
        half_thickness: half,
        corners,
        openings: SmallVec::new(),
    }
}

/// Project an opening onto its host wall's running axis.
///
/// The record offset is measured along the wall from its start, so the
/// interval direction follows the wall's own direction.
fn opening_interval(segment: &WallSegment, offset_ft: f64, width_in: f64, scale: f64) -> (f64, f64) {
    let from = segment.running(&segment.start);
    let to = segment.running(&segment.end);
    let dir = if to >= from { 1.0 } else { -1.0 };
    let a = from + dir * offset_ft * scale;
    let b = a + dir * inches_to_feet(width_in) * scale;
    (a.min(b), a.max(b))
}

/// Build the segment arena for one floor.
///
/// Duplicate wall records (same endpoints within tolerance) are dropped,
/// first occurrence wins; openings hosted by a dropped duplicate re-home to
/// the surviving record. An opening whose wall id matches nothing is dropped
/// with a log entry, never an error.
pub fn build_segments(floor: &FloorPlan, scale: f64) -> SegmentArena {
    let mut kept: Vec<&WallRecord> = Vec::with_capacity(floor.walls.len());
    // dropped duplicate id -> surviving id
    let mut alias: FxHashMap<&str, &str> = FxHashMap::default();

    for wall in &floor.walls {
        if wall.thickness_in <= 0.0 {
            tracing::warn!(wall = %wall.id, "wall has non-positive thickness, skipped");
            continue;
        }
        if wall.length_ft() < EPS_FT {
            tracing::warn!(wall = %wall.id, "degenerate zero-length wall, skipped");
            continue;
        }
        if let Some(existing) = kept.iter().find(|k| same_wall(k, wall)) {
            tracing::debug!(wall = %wall.id, kept = %existing.id, "duplicate wall record merged");
            alias.insert(&wall.id, &existing.id);
            continue;
        }
        kept.push(wall);
    }

    let mut arena = SegmentArena::new();
    for wall in kept {
        arena.insert(segment_from_record(wall, scale));
    }

    for door in &floor.doors {
        let host = alias
            .get(door.wall_id.as_str())
            .copied()
            .unwrap_or(door.wall_id.as_str())
            .to_string();
        if let Some(segment) = arena.get_mut(&host) {
            let (lo, hi) = opening_interval(segment, door.offset_ft, door.width_in, scale);
            segment.openings.push(OpeningSpan {
                id: door.id.clone(),
                kind: OpeningKind::Door { swing: door.swing },
                lo,
                hi,
            });
        } else {
            tracing::warn!(door = %door.id, wall = %door.wall_id, "door references unknown wall, dropped");
        }
    }

    for window in &floor.windows {
        let host = alias
            .get(window.wall_id.as_str())
            .copied()
            .unwrap_or(window.wall_id.as_str())
            .to_string();
        if let Some(segment) = arena.get_mut(&host) {
            let (lo, hi) = opening_interval(segment, window.offset_ft, window.width_in, scale);
            segment.openings.push(OpeningSpan {
                id: window.id.clone(),
                kind: OpeningKind::Window {
                    height_in: window.height_in,
                    sill_in: window.sill_in,
                },
                lo,
                hi,
            });
        } else {
            tracing::warn!(window = %window.id, wall = %window.wall_id, "window references unknown wall, dropped");
        }
    }

    for id in arena.ids().to_vec() {
        if let Some(segment) = arena.get_mut(&id) {
            segment
                .openings
                .sort_by(|a, b| a.lo.partial_cmp(&b.lo).unwrap_or(std::cmp::Ordering::Equal));
        }
    }

    arena
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use plandraft_core::model::{DoorRecord, WindowRecord};

    fn wall(id: &str, x1: f64, y1: f64, x2: f64, y2: f64, thick_in: f64) -> WallRecord {
        WallRecord {
            id: id.into(),
            start: Point2D::new(x1, y1),
            end: Point2D::new(x2, y2),
            thickness_in: thick_in,
            class: WallClass::Exterior,
            insulated: true,
        }
    }

    fn floor_with(walls: Vec<WallRecord>, doors: Vec<DoorRecord>, windows: Vec<WindowRecord>) -> FloorPlan {
        FloorPlan {
            level: 0,
            rooms: vec![],
            walls,
            doors,
            windows,
            stairs: vec![],
        }
    }

    #[test]
    fn horizontal_wall_corners_straddle_centerline() {
        let floor = floor_with(vec![wall("w1", 0.0, 5.0, 20.0, 5.0, 6.0)], vec![], vec![]);
        let arena = build_segments(&floor, 1.0);
        let seg = arena.get("w1").unwrap();
        assert_eq!(seg.orientation, Orientation::Horizontal);
        assert_relative_eq!(seg.half_thickness, 0.25);
        assert_relative_eq!(seg.corners[0].y, 4.75);
        assert_relative_eq!(seg.corners[3].y, 5.25);
        assert_relative_eq!(seg.corners[0].x, 0.0);
        assert_relative_eq!(seg.corners[1].x, 20.0);
    }

    #[test]
    fn duplicate_walls_merge_first_wins() {
        let floor = floor_with(
            vec![
                wall("w1", 0.0, 0.0, 10.0, 0.0, 6.0),
                wall("w2", 10.1, 0.2, -0.1, 0.0, 4.0), // same wall, reversed
            ],
            vec![DoorRecord {
                id: "d1".into(),
                wall_id: "w2".into(),
                offset_ft: 2.0,
                width_in: 36.0,
                swing: DoorSwing::Left,
            }],
            vec![],
        );
        let arena = build_segments(&floor, 1.0);
        assert_eq!(arena.len(), 1);
        let seg = arena.get("w1").unwrap();
        // door re-homed to the surviving record
        assert_eq!(seg.openings.len(), 1);
        assert_relative_eq!(seg.half_thickness, 0.25);
    }

    #[test]
    fn opening_span_follows_wall_direction() {
        // wall runs right-to-left; a door 2 ft from the start sits near x=8
        let floor = floor_with(
            vec![wall("w1", 10.0, 0.0, 0.0, 0.0, 6.0)],
            vec![DoorRecord {
                id: "d1".into(),
                wall_id: "w1".into(),
                offset_ft: 2.0,
                width_in: 36.0,
                swing: DoorSwing::Right,
            }],
            vec![],
        );
        let arena = build_segments(&floor, 1.0);
        let span = &arena.get("w1").unwrap().openings[0];
        assert_relative_eq!(span.lo, 5.0);
        assert_relative_eq!(span.hi, 8.0);
    }

    #[test]
    fn dangling_opening_reference_is_dropped() {
        let floor = floor_with(
            vec![wall("w1", 0.0, 0.0, 10.0, 0.0, 6.0)],
            vec![],
            vec![WindowRecord {
                id: "win1".into(),
                wall_id: "nope".into(),
                offset_ft: 2.0,
                width_in: 48.0,
                height_in: 48.0,
                sill_in: 30.0,
            }],
        );
        let arena = build_segments(&floor, 1.0);
        assert!(arena.get("w1").unwrap().openings.is_empty());
    }

    #[test]
    fn scale_applies_to_coordinates_and_thickness() {
        let floor = floor_with(vec![wall("w1", 0.0, 0.0, 10.0, 0.0, 6.0)], vec![], vec![]);
        let arena = build_segments(&floor, 10.0);
        let seg = arena.get("w1").unwrap();
        assert_relative_eq!(seg.end.x, 100.0);
        assert_relative_eq!(seg.half_thickness, 2.5);
    }
}
