// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Junction resolution: reshaping wall corners where endpoints meet.
//!
//! Endpoints are grouped into snap buckets (a named tolerance step, coarser
//! than wall deduplication, absorbing upstream coordinate imprecision) and
//! each bucket is classified:
//!
//! - two walls of differing orientation form an L-corner,
//! - two collinear walls plus one perpendicular form a T-junction,
//! - anything else (lone ends, 4-way crossings, collinear-only meetings)
//!   is left unresolved by design.
//!
//! Resolution only moves the corners nearest the junction, so buckets can
//! be processed in any order with identical results.

use crate::arena::SegmentArena;
use crate::segment::{Orientation, WallEnd, WallSegment};
use plandraft_core::model::Point2D;
use plandraft_core::units::JUNCTION_SNAP_FT;
use rustc_hash::FxHashMap;

/// One wall end present in a snap bucket
#[derive(Debug, Clone)]
struct JunctionEnd {
    id: String,
    end: WallEnd,
    orientation: Orientation,
    /// Running-axis direction from the junction into the wall body:
    /// +1.0 when the body lies toward increasing coordinates.
    inward: f64,
    cross_center: f64,
    half_thickness: f64,
}

/// A pending corner move: set `id`'s face at `end` to `coord`
struct FaceMove {
    id: String,
    end: WallEnd,
    coord: f64,
}

fn bucket_key(p: &Point2D, bucket: f64) -> (i64, i64) {
    ((p.x / bucket).round() as i64, (p.y / bucket).round() as i64)
}

fn junction_end(segment: &WallSegment, end: WallEnd) -> Option<JunctionEnd> {
    let here = segment.running(&segment.endpoint(end));
    let there = segment.running(&segment.opposite_endpoint(end));
    let delta = there - here;
    if delta == 0.0 {
        return None; // degenerate, builder already warned
    }
    Some(JunctionEnd {
        id: segment.id.clone(),
        end,
        orientation: segment.orientation,
        inward: delta.signum(),
        cross_center: segment.cross_center(),
        half_thickness: segment.half_thickness,
    })
}

/// L-corner: the horizontal wall's end face extends through the joint to
/// the vertical wall's far face, and the vertical wall's end face pulls
/// back to the horizontal wall's near face. The two rectangles then tile
/// the corner exactly, and the facing corners coincide.
fn resolve_l(h: &JunctionEnd, v: &JunctionEnd, moves: &mut Vec<FaceMove>) {
    moves.push(FaceMove {
        id: h.id.clone(),
        end: h.end,
        coord: v.cross_center - h.inward * v.half_thickness,
    });
    moves.push(FaceMove {
        id: v.id.clone(),
        end: v.end,
        coord: h.cross_center + v.inward * h.half_thickness,
    });
}

/// T-junction: the through pair stays untouched; the butting wall's end
/// face trims flush to the near face of the through wall, the near face
/// chosen from the butting wall's approach direction.
fn resolve_t(through: &JunctionEnd, butting: &JunctionEnd, moves: &mut Vec<FaceMove>) {
    moves.push(FaceMove {
        id: butting.id.clone(),
        end: butting.end,
        coord: through.cross_center + butting.inward * through.half_thickness,
    });
}

fn classify_bucket(ends: &[JunctionEnd], collinear_tol: f64, moves: &mut Vec<FaceMove>) {
    match ends.len() {
        2 => {
            let (a, b) = (&ends[0], &ends[1]);
            if a.orientation == b.orientation {
                return; // collinear continuation, nothing to reshape
            }
            let (h, v) = if a.orientation == Orientation::Horizontal {
                (a, b)
            } else {
                (b, a)
            };
            resolve_l(h, v, moves);
        }
        3 => {
            let horizontals: Vec<&JunctionEnd> = ends
                .iter()
                .filter(|e| e.orientation == Orientation::Horizontal)
                .collect();
            let verticals: Vec<&JunctionEnd> = ends
                .iter()
                .filter(|e| e.orientation == Orientation::Vertical)
                .collect();
            let (through_pair, butting) = match (horizontals.len(), verticals.len()) {
                (2, 1) => (horizontals, verticals[0]),
                (1, 2) => (verticals, horizontals[0]),
                _ => return, // all same orientation, unresolved by design
            };
            // the pair must actually be collinear, not just coincident ends
            if (through_pair[0].cross_center - through_pair[1].cross_center).abs() > collinear_tol {
                return;
            }
            resolve_t(through_pair[0], butting, moves);
        }
        // lone ends and 4-way crossings stay unresolved by design
        _ => {}
    }
}

/// Resolve every junction in the arena, mutating corner coordinates in
/// place. `scale` is the drawing-units-per-foot factor the segments were
/// built with.
pub fn resolve_junctions(arena: &mut SegmentArena, scale: f64) {
    let bucket = JUNCTION_SNAP_FT * scale;

    let mut index: FxHashMap<(i64, i64), Vec<JunctionEnd>> = FxHashMap::default();
    for segment in arena.iter() {
        for end in [WallEnd::Start, WallEnd::End] {
            if let Some(je) = junction_end(segment, end) {
                index
                    .entry(bucket_key(&segment.endpoint(end), bucket))
                    .or_default()
                    .push(je);
            }
        }
    }

    let mut moves = Vec::new();
    for ends in index.values() {
        classify_bucket(ends, bucket, &mut moves);
    }

    tracing::debug!(
        junctions = index.len(),
        corner_moves = moves.len(),
        "junction resolution"
    );

    for mv in moves {
        if let Some(segment) = arena.get_mut(&mv.id) {
            segment.set_end_face(mv.end, mv.coord);
        }
    }
}
