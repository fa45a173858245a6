// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Grid snapping: the only mutation-shaped step in validation.
//!
//! Produces a new layout with every plan coordinate rounded to the 0.5 ft
//! grid. Inch-denominated sizes (wall thickness, opening widths, sills) are
//! member dimensions, not plan coordinates, and pass through untouched.

use crate::model::{FloorPlan, FloorPlanLayout, Point2D};
use crate::units::snap;

fn snap_point(p: &Point2D) -> Point2D {
    Point2D::new(snap(p.x), snap(p.y))
}

fn snap_floor(floor: &FloorPlan) -> FloorPlan {
    let mut out = floor.clone();
    for room in &mut out.rooms {
        room.x = snap(room.x);
        room.y = snap(room.y);
        room.width = snap(room.width);
        room.depth = snap(room.depth);
    }
    for wall in &mut out.walls {
        wall.start = snap_point(&wall.start);
        wall.end = snap_point(&wall.end);
    }
    for door in &mut out.doors {
        door.offset_ft = snap(door.offset_ft);
    }
    for window in &mut out.windows {
        window.offset_ft = snap(window.offset_ft);
    }
    for stair in &mut out.stairs {
        stair.x = snap(stair.x);
        stair.y = snap(stair.y);
        stair.width = snap(stair.width);
        stair.depth = snap(stair.depth);
    }
    out
}

/// Return a fully snapped copy of the layout.
pub fn snap_layout(layout: &FloorPlanLayout) -> FloorPlanLayout {
    FloorPlanLayout {
        width_ft: snap(layout.width_ft),
        depth_ft: snap(layout.depth_ft),
        storeys: layout.storeys,
        style: layout.style.clone(),
        floors: layout.floors.iter().map(snap_floor).collect(),
        roof: layout.roof.clone(),
    }
}
