// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The layout-to-drawing pipeline.
//!
//! Single-threaded and synchronous: validate, then per floor build wall
//! segments, resolve junctions, cut openings, compute dimension chains,
//! and assemble the drawing tree. Every stage is a pure function over its
//! input, so independent layouts can be processed concurrently with no
//! locking; the engine itself performs no I/O.

use crate::error::{Error, Result};
use plandraft_core::model::{FloorPlan, FloorPlanLayout};
use plandraft_core::validate::{validate, ValidationReport};
use plandraft_geometry::{
    build_segments, cut_all, resolve_junctions, room_dimensions, side_chains, DimensionChain,
    FillPolygon, RoomDimension,
};
use plandraft_render::{
    dimension_nodes, opening_nodes, reference_nodes, room_label_nodes, stair_nodes, to_svg,
    wall_fill_nodes, DrawNode, ViewBox,
};
use serde::{Deserialize, Serialize};

/// Default drawing scale, drawing units per foot
pub const DEFAULT_SCALE: f64 = 10.0;

/// One floor's assembled drawing plus the geometry it was built from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloorDrawing {
    pub level: u32,
    pub fills: Vec<FillPolygon>,
    pub chains: Vec<DimensionChain>,
    pub room_dims: Vec<RoomDimension>,
    pub tree: DrawNode,
}

/// Complete drawing output for a layout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloorPlanDrawing {
    pub report: ValidationReport,
    pub floors: Vec<FloorDrawing>,
    pub scale: f64,
}

impl FloorPlanDrawing {
    /// SVG for one floor, directly displayable and exportable
    pub fn floor_svg(&self, level: usize) -> Option<String> {
        let floor = self.floors.get(level)?;
        let view = ViewBox::around_envelope(
            self.report.layout.width_ft,
            self.report.layout.depth_ft,
            self.scale,
        );
        Some(to_svg(&floor.tree, view))
    }
}

fn draw_floor(floor: &FloorPlan, layout: &FloorPlanLayout, scale: f64) -> FloorDrawing {
    // Step 1: records to drawing-space rectangles
    let mut arena = build_segments(floor, scale);

    // Step 2: reshape corners at L and T junctions
    resolve_junctions(&mut arena, scale);

    // Step 3: subtract opening gaps into hatched fills
    let fills = cut_all(&arena);

    // Step 4: measurement annotations
    let chains = side_chains(floor, layout.width_ft, layout.depth_ft);
    let room_dims = room_dimensions(floor);

    tracing::info!(
        level = floor.level,
        walls = arena.len(),
        fills = fills.len(),
        chains = chains.len(),
        "floor geometry assembled"
    );

    // Step 5: assemble the drawing tree
    let tree = DrawNode::group(
        &format!("floor-{}", floor.level),
        vec![
            reference_nodes(layout.width_ft, layout.depth_ft, scale),
            wall_fill_nodes(&fills, scale),
            opening_nodes(&arena, scale),
            stair_nodes(&floor.stairs, scale),
            room_label_nodes(&floor.rooms, scale),
            dimension_nodes(&chains, &room_dims, layout.width_ft, layout.depth_ft, scale),
        ],
    );

    FloorDrawing {
        level: floor.level,
        fills,
        chains,
        room_dims,
        tree,
    }
}

/// Validate a layout and build its complete drawing.
///
/// Never refuses a layout that has floors: validation findings ride along
/// in the report and the drawing is best-effort.
pub fn process_layout(layout: &FloorPlanLayout, scale: f64) -> Result<FloorPlanDrawing> {
    if layout.floors.is_empty() {
        return Err(Error::MissingLayout);
    }

    let report = validate(layout);
    tracing::info!(
        errors = report.errors.len(),
        warnings = report.warnings.len(),
        "layout validated"
    );

    let floors = report
        .layout
        .floors
        .iter()
        .map(|floor| draw_floor(floor, &report.layout, scale))
        .collect();

    Ok(FloorPlanDrawing {
        report,
        floors,
        scale,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use plandraft_core::model::*;

    fn empty_layout() -> FloorPlanLayout {
        FloorPlanLayout {
            width_ft: 20.0,
            depth_ft: 15.0,
            storeys: 1,
            style: "test".into(),
            floors: vec![],
            roof: RoofDescriptor {
                style: RoofStyle::Flat,
                pitch: 0.0,
            },
        }
    }

    #[test]
    fn refuses_only_a_floorless_layout() {
        let err = process_layout(&empty_layout(), DEFAULT_SCALE).unwrap_err();
        assert!(matches!(err, Error::MissingLayout));
    }

    #[test]
    fn draws_even_a_layout_with_blocking_errors() {
        let mut layout = empty_layout();
        layout.floors.push(FloorPlan {
            level: 0,
            rooms: vec![
                RoomRecord {
                    id: "a".into(),
                    name: "A".into(),
                    room_type: RoomType::Living,
                    x: 0.0,
                    y: 0.0,
                    width: 10.0,
                    depth: 10.0,
                },
                RoomRecord {
                    id: "b".into(),
                    name: "B".into(),
                    room_type: RoomType::Dining,
                    x: 5.0,
                    y: 5.0,
                    width: 10.0,
                    depth: 10.0,
                },
            ],
            walls: vec![],
            doors: vec![],
            windows: vec![],
            stairs: vec![],
        });
        let drawing = process_layout(&layout, DEFAULT_SCALE).unwrap();
        assert!(drawing.report.has_blocking());
        assert_eq!(drawing.floors.len(), 1);
        assert!(drawing.floor_svg(0).is_some());
    }
}
