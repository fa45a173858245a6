// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Opening cuts: wall segments to hatched fill rectangles.
//!
//! A wall with no openings fills as a single rectangle over its (possibly
//! junction-adjusted) corners. With openings, the body is walked along the
//! running axis and a fill rectangle is emitted for every gap between
//! consecutive opening spans, plus the leading and trailing pieces.

use crate::arena::SegmentArena;
use crate::segment::{Orientation, WallSegment};
use plandraft_core::model::{Point2D, WallClass};
use serde::{Deserialize, Serialize};

/// Fill pattern keyed by wall class
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HatchKind {
    /// Exterior walls: cross-hatch
    Cross,
    /// Interior and partition walls: single diagonal
    Diagonal,
}

impl HatchKind {
    pub fn for_class(class: WallClass) -> Self {
        if class.is_exterior() {
            HatchKind::Cross
        } else {
            HatchKind::Diagonal
        }
    }
}

/// One solid piece of wall between openings, in drawing units
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FillPolygon {
    pub wall_id: String,
    /// Counter-clockwise rectangle
    pub points: Vec<Point2D>,
    pub hatch: HatchKind,
}

/// Gaps narrower than this are collapsed (an opening flush with a wall end
/// produces a zero-width piece that must not be emitted).
const MIN_FILL_DU: f64 = 1e-9;

fn fill_rect(segment: &WallSegment, run_lo: f64, run_hi: f64) -> FillPolygon {
    let (cross_lo, cross_hi) = segment.cross_extent();
    let points = match segment.orientation {
        Orientation::Horizontal => vec![
            Point2D::new(run_lo, cross_lo),
            Point2D::new(run_hi, cross_lo),
            Point2D::new(run_hi, cross_hi),
            Point2D::new(run_lo, cross_hi),
        ],
        Orientation::Vertical => vec![
            Point2D::new(cross_lo, run_lo),
            Point2D::new(cross_hi, run_lo),
            Point2D::new(cross_hi, run_hi),
            Point2D::new(cross_lo, run_hi),
        ],
    };
    FillPolygon {
        wall_id: segment.id.clone(),
        points,
        hatch: HatchKind::for_class(segment.class),
    }
}

/// Cut one segment's openings out of its body.
pub fn cut_segment(segment: &WallSegment) -> Vec<FillPolygon> {
    let (body_lo, body_hi) = segment.running_extent();

    if segment.openings.is_empty() {
        return vec![FillPolygon {
            wall_id: segment.id.clone(),
            points: segment.corners.to_vec(),
            hatch: HatchKind::for_class(segment.class),
        }];
    }

    // spans arrive sorted by `lo` from the builder
    let mut fills = Vec::with_capacity(segment.openings.len() + 1);
    let mut cursor = body_lo;
    for span in &segment.openings {
        let gap_hi = span.lo.min(body_hi);
        if gap_hi - cursor > MIN_FILL_DU {
            fills.push(fill_rect(segment, cursor, gap_hi));
        }
        cursor = cursor.max(span.hi);
    }
    if body_hi - cursor > MIN_FILL_DU {
        fills.push(fill_rect(segment, cursor, body_hi));
    }
    fills
}

/// Cut every segment in the arena, in arena order.
pub fn cut_all(arena: &SegmentArena) -> Vec<FillPolygon> {
    arena.iter().flat_map(cut_segment).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::build_segments;
    use approx::assert_relative_eq;
    use plandraft_core::model::{DoorRecord, DoorSwing, FloorPlan, WallRecord, WindowRecord};

    fn floor_with(
        walls: Vec<WallRecord>,
        doors: Vec<DoorRecord>,
        windows: Vec<WindowRecord>,
    ) -> FloorPlan {
        FloorPlan {
            level: 0,
            rooms: vec![],
            walls,
            doors,
            windows,
            stairs: vec![],
        }
    }

    fn ten_foot_wall() -> WallRecord {
        WallRecord {
            id: "w1".into(),
            start: Point2D::new(0.0, 0.0),
            end: Point2D::new(10.0, 0.0),
            thickness_in: 6.0,
            class: WallClass::Exterior,
            insulated: true,
        }
    }

    fn door(offset_ft: f64, width_in: f64) -> DoorRecord {
        DoorRecord {
            id: "d1".into(),
            wall_id: "w1".into(),
            offset_ft,
            width_in,
            swing: DoorSwing::Left,
        }
    }

    #[test]
    fn wall_without_openings_fills_whole_body() {
        let arena = build_segments(&floor_with(vec![ten_foot_wall()], vec![], vec![]), 1.0);
        let fills = cut_segment(arena.get("w1").unwrap());
        assert_eq!(fills.len(), 1);
        assert_eq!(fills[0].hatch, HatchKind::Cross);
        assert_eq!(fills[0].points.len(), 4);
    }

    #[test]
    fn single_door_cuts_two_fills() {
        // 10 ft wall, 3 ft door at offset 4 -> fills over [0,4] and [7,10]
        let arena = build_segments(
            &floor_with(vec![ten_foot_wall()], vec![door(4.0, 36.0)], vec![]),
            1.0,
        );
        let fills = cut_segment(arena.get("w1").unwrap());
        assert_eq!(fills.len(), 2);
        assert_relative_eq!(fills[0].points[0].x, 0.0);
        assert_relative_eq!(fills[0].points[1].x, 4.0);
        assert_relative_eq!(fills[1].points[0].x, 7.0);
        assert_relative_eq!(fills[1].points[1].x, 10.0);
    }

    #[test]
    fn opening_flush_with_wall_end_skips_empty_gap() {
        // 3 ft door starting exactly at the wall start: no leading fill
        let arena = build_segments(
            &floor_with(vec![ten_foot_wall()], vec![door(0.0, 36.0)], vec![]),
            1.0,
        );
        let fills = cut_segment(arena.get("w1").unwrap());
        assert_eq!(fills.len(), 1);
        assert_relative_eq!(fills[0].points[0].x, 3.0);
        assert_relative_eq!(fills[0].points[1].x, 10.0);
    }

    #[test]
    fn two_openings_cut_three_fills_in_order() {
        let mut d2 = door(6.0, 24.0);
        d2.id = "d2".into();
        let arena = build_segments(
            &floor_with(
                vec![ten_foot_wall()],
                vec![d2, door(1.0, 24.0)], // out of order on purpose
                vec![],
            ),
            1.0,
        );
        let fills = cut_segment(arena.get("w1").unwrap());
        assert_eq!(fills.len(), 3);
        assert_relative_eq!(fills[0].points[1].x, 1.0);
        assert_relative_eq!(fills[1].points[0].x, 3.0);
        assert_relative_eq!(fills[1].points[1].x, 6.0);
        assert_relative_eq!(fills[2].points[0].x, 8.0);
    }

    #[test]
    fn interior_wall_gets_diagonal_hatch() {
        let mut wall = ten_foot_wall();
        wall.class = WallClass::Partition;
        let arena = build_segments(&floor_with(vec![wall], vec![], vec![]), 1.0);
        let fills = cut_segment(arena.get("w1").unwrap());
        assert_eq!(fills[0].hatch, HatchKind::Diagonal);
    }
}
