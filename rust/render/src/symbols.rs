// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Architectural symbols and annotation drawing.
//!
//! Pure glyph construction: door swing arcs, window double-lines, stair
//! treads, room labels, dimension chains and the fixed sheet furniture
//! (north arrow, grid bubbles, section markers, border). All inputs arrive
//! pre-computed from the geometry crate; nothing here does algorithmic
//! work beyond placing strokes.

use crate::hatch;
use crate::tree::{DrawNode, Style, TextAnchor};
use plandraft_core::model::{
    DoorSwing, Point2D, RoomRecord, StairDirection, StairRecord,
};
use plandraft_core::units::format_feet_inches;
use plandraft_geometry::{
    DimLevel, DimensionChain, FillPolygon, OpeningKind, OpeningSpan, Orientation, RoomDimension,
    SegmentArena, Side, WallSegment,
};

const WALL_STROKE: &str = "#222";
const SYMBOL_STROKE: &str = "#333";
const DIM_STROKE: &str = "#555";
const LABEL_COLOR: &str = "#222";

/// 45-degree tick half-length at dimension line ends, feet
const TICK_HALF_FT: f64 = 0.25;
/// Extension lines overshoot the dimension line by this much, feet
const EXT_OVERSHOOT_FT: f64 = 0.4;
/// Label clearance above a dimension line, feet
const LABEL_LIFT_FT: f64 = 0.35;
/// Tread spacing for stair runs, feet
const TREAD_SPACING_FT: f64 = 0.85;

fn thin(color: &str, scale: f64) -> Style {
    Style::stroked(color, 0.03 * scale)
}

fn label_style(scale: f64, size_ft: f64) -> Style {
    Style::filled(LABEL_COLOR).with_font_size(size_ft * scale)
}

/// Hatched wall fill polygons
pub fn wall_fill_nodes(fills: &[FillPolygon], scale: f64) -> DrawNode {
    let children = fills
        .iter()
        .map(|fill| DrawNode::Polygon {
            points: fill.points.clone(),
            style: Style::stroked(WALL_STROKE, 0.05 * scale).with_fill(hatch::fill_ref(fill.hatch)),
        })
        .collect();
    DrawNode::group("walls", children)
}

/// Door and window symbols for every opening in the arena
pub fn opening_nodes(arena: &SegmentArena, scale: f64) -> DrawNode {
    let mut children = Vec::new();
    for segment in arena.iter() {
        for span in &segment.openings {
            match span.kind {
                OpeningKind::Door { swing } => {
                    children.push(door_node(segment, span, swing, scale));
                }
                OpeningKind::Window { .. } => {
                    children.push(window_node(segment, span, scale));
                }
            }
        }
    }
    DrawNode::group("openings", children)
}

/// Point on the wall centerline at a running-axis coordinate
fn on_centerline(segment: &WallSegment, run: f64) -> Point2D {
    match segment.orientation {
        Orientation::Horizontal => Point2D::new(run, segment.cross_center()),
        Orientation::Vertical => Point2D::new(segment.cross_center(), run),
    }
}

/// Point offset perpendicular from the centerline
fn off_centerline(segment: &WallSegment, run: f64, cross_delta: f64) -> Point2D {
    match segment.orientation {
        Orientation::Horizontal => Point2D::new(run, segment.cross_center() + cross_delta),
        Orientation::Vertical => Point2D::new(segment.cross_center() + cross_delta, run),
    }
}

fn quarter_arc_path(from: Point2D, to: Point2D, radius: f64, sweep: u8) -> String {
    format!(
        "M {:.3} {:.3} A {:.3} {:.3} 0 0 {} {:.3} {:.3}",
        from.x, from.y, radius, radius, sweep, to.x, to.y
    )
}

fn door_node(segment: &WallSegment, span: &OpeningSpan, swing: DoorSwing, scale: f64) -> DrawNode {
    let width = span.width();
    let style = thin(SYMBOL_STROKE, scale);
    let mut parts = Vec::new();

    match swing {
        DoorSwing::Left | DoorSwing::Right => {
            let (hinge_run, jamb_run, sweep) = if swing == DoorSwing::Left {
                (span.lo, span.hi, 1)
            } else {
                (span.hi, span.lo, 0)
            };
            let hinge = on_centerline(segment, hinge_run);
            let leaf_tip = off_centerline(segment, hinge_run, width);
            let jamb = on_centerline(segment, jamb_run);
            parts.push(DrawNode::line(hinge, leaf_tip, style.clone()));
            parts.push(DrawNode::Path {
                d: quarter_arc_path(leaf_tip, jamb, width, sweep),
                style: style.clone().with_dash("2,1.2"),
            });
        }
        DoorSwing::Double => {
            let half = width / 2.0;
            let center = span.center();
            for (hinge_run, sweep) in [(span.lo, 1u8), (span.hi, 0u8)] {
                let hinge = on_centerline(segment, hinge_run);
                let leaf_tip = off_centerline(segment, hinge_run, half);
                let meet = on_centerline(segment, center);
                parts.push(DrawNode::line(hinge, leaf_tip, style.clone()));
                parts.push(DrawNode::Path {
                    d: quarter_arc_path(leaf_tip, meet, half, sweep),
                    style: style.clone().with_dash("2,1.2"),
                });
            }
        }
        DoorSwing::Sliding => {
            // two overlapping panels on either face
            let quarter = segment.half_thickness / 2.0;
            let mid = span.center();
            parts.push(DrawNode::line(
                off_centerline(segment, span.lo, -quarter),
                off_centerline(segment, mid + width * 0.1, -quarter),
                style.clone(),
            ));
            parts.push(DrawNode::line(
                off_centerline(segment, mid - width * 0.1, quarter),
                off_centerline(segment, span.hi, quarter),
                style,
            ));
        }
    }
    DrawNode::group(&format!("door-{}", span.id), parts)
}

fn window_node(segment: &WallSegment, span: &OpeningSpan, scale: f64) -> DrawNode {
    let style = thin(SYMBOL_STROKE, scale);
    let offset = segment.half_thickness / 3.0;
    let mut parts = vec![
        DrawNode::line(
            off_centerline(segment, span.lo, -offset),
            off_centerline(segment, span.hi, -offset),
            style.clone(),
        ),
        DrawNode::line(
            off_centerline(segment, span.lo, offset),
            off_centerline(segment, span.hi, offset),
            style.clone(),
        ),
    ];
    // jamb caps across the full wall thickness
    for run in [span.lo, span.hi] {
        parts.push(DrawNode::line(
            off_centerline(segment, run, -segment.half_thickness),
            off_centerline(segment, run, segment.half_thickness),
            style.clone(),
        ));
    }
    DrawNode::group(&format!("window-{}", span.id), parts)
}

/// Stair treads with a run-direction arrow
pub fn stair_nodes(stairs: &[StairRecord], scale: f64) -> DrawNode {
    let mut children = Vec::new();
    for stair in stairs {
        let style = thin(SYMBOL_STROKE, scale);
        let x0 = stair.x * scale;
        let y0 = stair.y * scale;
        let x1 = (stair.x + stair.width) * scale;
        let y1 = (stair.y + stair.depth) * scale;
        let mut parts = vec![DrawNode::Polygon {
            points: vec![
                Point2D::new(x0, y0),
                Point2D::new(x1, y0),
                Point2D::new(x1, y1),
                Point2D::new(x0, y1),
            ],
            style: style.clone(),
        }];

        // treads run across the narrow axis
        let along_x = stair.width >= stair.depth;
        let run_ft = if along_x { stair.width } else { stair.depth };
        let treads = (run_ft / TREAD_SPACING_FT).floor() as usize;
        for i in 1..treads {
            let t = i as f64 * TREAD_SPACING_FT * scale;
            let (from, to) = if along_x {
                (Point2D::new(x0 + t, y0), Point2D::new(x0 + t, y1))
            } else {
                (Point2D::new(x0, y0 + t), Point2D::new(x1, y0 + t))
            };
            parts.push(DrawNode::line(from, to, style.clone()));
        }

        let (mid_from, mid_to) = if along_x {
            (
                Point2D::new(x0 + 0.5 * scale, (y0 + y1) / 2.0),
                Point2D::new(x1 - 0.5 * scale, (y0 + y1) / 2.0),
            )
        } else {
            (
                Point2D::new((x0 + x1) / 2.0, y0 + 0.5 * scale),
                Point2D::new((x0 + x1) / 2.0, y1 - 0.5 * scale),
            )
        };
        parts.push(DrawNode::line(mid_from, mid_to, style));
        let tag = match stair.direction {
            StairDirection::Up => "UP",
            StairDirection::Down => "DN",
        };
        parts.push(DrawNode::text(
            Point2D::new((x0 + x1) / 2.0, (y0 + y1) / 2.0 - 0.3 * scale),
            tag,
            TextAnchor::Middle,
            label_style(scale, 0.7),
        ));
        children.push(DrawNode::group(&format!("stair-{}", stair.id), parts));
    }
    DrawNode::group("stairs", children)
}

/// Room name, dimension text and area, centered in the room
pub fn room_label_nodes(rooms: &[RoomRecord], scale: f64) -> DrawNode {
    let children = rooms
        .iter()
        .map(|room| {
            let cx = (room.x + room.width / 2.0) * scale;
            let cy = (room.y + room.depth / 2.0) * scale;
            let dims = format!(
                "{} x {}",
                format_feet_inches(room.width),
                format_feet_inches(room.depth)
            );
            let area = format!("{:.0} sq ft", room.area());
            DrawNode::group(
                &format!("room-label-{}", room.id),
                vec![
                    DrawNode::text(
                        Point2D::new(cx, cy - 0.6 * scale),
                        room.name.to_uppercase(),
                        TextAnchor::Middle,
                        label_style(scale, 0.9),
                    ),
                    DrawNode::text(
                        Point2D::new(cx, cy + 0.4 * scale),
                        dims,
                        TextAnchor::Middle,
                        label_style(scale, 0.6),
                    ),
                    DrawNode::text(
                        Point2D::new(cx, cy + 1.2 * scale),
                        area,
                        TextAnchor::Middle,
                        label_style(scale, 0.55),
                    ),
                ],
            )
        })
        .collect();
    DrawNode::group("room-labels", children)
}

/// Dimension line position for a chain, in drawing units.
/// Drawing space is y-down: north is the top edge.
fn chain_line_coord(side: Side, level: DimLevel, width_ft: f64, depth_ft: f64, scale: f64) -> f64 {
    let offset = level.offset_ft();
    match side {
        Side::North => -offset * scale,
        Side::South => (depth_ft + offset) * scale,
        Side::West => -offset * scale,
        Side::East => (width_ft + offset) * scale,
    }
}

/// Building edge coordinate the extension lines start from
fn building_edge(side: Side, width_ft: f64, depth_ft: f64, scale: f64) -> f64 {
    match side {
        Side::North | Side::West => 0.0,
        Side::South => depth_ft * scale,
        Side::East => width_ft * scale,
    }
}

fn tick(at: Point2D, scale: f64) -> DrawNode {
    let t = TICK_HALF_FT * scale;
    DrawNode::line(
        Point2D::new(at.x - t, at.y + t),
        Point2D::new(at.x + t, at.y - t),
        Style::stroked(DIM_STROKE, 0.04 * scale),
    )
}

fn chain_nodes(
    chain: &DimensionChain,
    width_ft: f64,
    depth_ft: f64,
    scale: f64,
) -> Vec<DrawNode> {
    let style = thin(DIM_STROKE, scale);
    let line_c = chain_line_coord(chain.side, chain.level, width_ft, depth_ft, scale);
    let edge_c = building_edge(chain.side, width_ft, depth_ft, scale);
    let overshoot = EXT_OVERSHOOT_FT * scale * (line_c - edge_c).signum();
    let horizontal = chain.side.measures_x();

    let mut nodes = Vec::new();
    for span in &chain.spans {
        let a = span.start_ft * scale;
        let b = span.end_ft * scale;
        for run in [a, b] {
            let (from, to) = if horizontal {
                (
                    Point2D::new(run, edge_c),
                    Point2D::new(run, line_c + overshoot),
                )
            } else {
                (
                    Point2D::new(edge_c, run),
                    Point2D::new(line_c + overshoot, run),
                )
            };
            nodes.push(DrawNode::line(from, to, style.clone()));
        }

        let (from, to, tick_a, tick_b, label_at) = if horizontal {
            (
                Point2D::new(a, line_c),
                Point2D::new(b, line_c),
                Point2D::new(a, line_c),
                Point2D::new(b, line_c),
                Point2D::new((a + b) / 2.0, line_c - LABEL_LIFT_FT * scale),
            )
        } else {
            (
                Point2D::new(line_c, a),
                Point2D::new(line_c, b),
                Point2D::new(line_c, a),
                Point2D::new(line_c, b),
                Point2D::new(line_c - LABEL_LIFT_FT * scale, (a + b) / 2.0),
            )
        };
        nodes.push(DrawNode::line(from, to, style.clone()));
        nodes.push(tick(tick_a, scale));
        nodes.push(tick(tick_b, scale));
        nodes.push(DrawNode::Text {
            at: label_at,
            content: span.label.clone(),
            anchor: TextAnchor::Middle,
            rotate: if horizontal { None } else { Some(-90.0) },
            style: label_style(scale, 0.55),
        });
    }
    nodes
}

/// All exterior chains plus interior per-room dimensions
pub fn dimension_nodes(
    chains: &[DimensionChain],
    room_dims: &[RoomDimension],
    width_ft: f64,
    depth_ft: f64,
    scale: f64,
) -> DrawNode {
    let mut children = Vec::new();
    for chain in chains {
        children.extend(chain_nodes(chain, width_ft, depth_ft, scale));
    }

    let style = thin(DIM_STROKE, scale);
    for dim in room_dims {
        let from = Point2D::new(dim.start.x * scale, dim.start.y * scale);
        let to = Point2D::new(dim.end.x * scale, dim.end.y * scale);
        let horizontal = (from.y - to.y).abs() < f64::EPSILON;
        nodes_for_room_dim(&mut children, from, to, &dim.label, horizontal, style.clone(), scale);
    }
    DrawNode::group("dimensions", children)
}

fn nodes_for_room_dim(
    out: &mut Vec<DrawNode>,
    from: Point2D,
    to: Point2D,
    label: &str,
    horizontal: bool,
    style: Style,
    scale: f64,
) {
    out.push(DrawNode::line(from, to, style));
    out.push(tick(from, scale));
    out.push(tick(to, scale));
    let mid = Point2D::new((from.x + to.x) / 2.0, (from.y + to.y) / 2.0);
    let at = if horizontal {
        Point2D::new(mid.x, mid.y - LABEL_LIFT_FT * scale * 0.6)
    } else {
        Point2D::new(mid.x - LABEL_LIFT_FT * scale * 0.6, mid.y)
    };
    out.push(DrawNode::Text {
        at,
        content: label.to_string(),
        anchor: TextAnchor::Middle,
        rotate: if horizontal { None } else { Some(-90.0) },
        style: Style::filled(DIM_STROKE).with_font_size(0.45 * scale),
    });
}

/// Fixed sheet furniture: border, north arrow, grid bubbles, section markers
pub fn reference_nodes(width_ft: f64, depth_ft: f64, scale: f64) -> DrawNode {
    let mut children = Vec::new();
    let margin = 8.0 * scale;
    let w = width_ft * scale;
    let d = depth_ft * scale;

    // sheet border
    children.push(DrawNode::Polygon {
        points: vec![
            Point2D::new(-margin, -margin),
            Point2D::new(w + margin, -margin),
            Point2D::new(w + margin, d + margin),
            Point2D::new(-margin, d + margin),
        ],
        style: Style::stroked("#000", 0.08 * scale),
    });

    // north arrow, top-right corner
    let na = Point2D::new(w + margin * 0.75, -margin * 0.6);
    let r = 1.2 * scale;
    children.push(DrawNode::Circle {
        center: na,
        radius: r,
        style: Style::stroked(SYMBOL_STROKE, 0.05 * scale),
    });
    children.push(DrawNode::Path {
        d: format!(
            "M {:.3} {:.3} L {:.3} {:.3} L {:.3} {:.3} Z",
            na.x,
            na.y - r * 0.8,
            na.x - r * 0.35,
            na.y + r * 0.5,
            na.x + r * 0.35,
            na.y + r * 0.5,
        ),
        style: Style::filled(SYMBOL_STROKE),
    });
    children.push(DrawNode::text(
        Point2D::new(na.x, na.y - r * 1.3),
        "N",
        TextAnchor::Middle,
        label_style(scale, 0.7),
    ));

    // grid bubbles: letters along the top, numbers down the left
    let bubble_r = 0.9 * scale;
    for (i, x) in [0.0, w].iter().enumerate() {
        let at = Point2D::new(*x, -6.5 * scale);
        children.push(DrawNode::Circle {
            center: at,
            radius: bubble_r,
            style: Style::stroked(SYMBOL_STROKE, 0.04 * scale),
        });
        children.push(DrawNode::text(
            Point2D::new(at.x, at.y + 0.25 * scale),
            char::from(b'A' + i as u8).to_string(),
            TextAnchor::Middle,
            label_style(scale, 0.6),
        ));
    }
    for (i, y) in [0.0, d].iter().enumerate() {
        let at = Point2D::new(-6.5 * scale, *y);
        children.push(DrawNode::Circle {
            center: at,
            radius: bubble_r,
            style: Style::stroked(SYMBOL_STROKE, 0.04 * scale),
        });
        children.push(DrawNode::text(
            Point2D::new(at.x, at.y + 0.25 * scale),
            (i + 1).to_string(),
            TextAnchor::Middle,
            label_style(scale, 0.6),
        ));
    }

    // section cut A-A through the building's vertical midline
    let sx = w / 2.0;
    children.push(DrawNode::line(
        Point2D::new(sx, -1.5 * scale),
        Point2D::new(sx, d + 1.5 * scale),
        Style::stroked(SYMBOL_STROKE, 0.04 * scale).with_dash("3,1.5"),
    ));
    for y in [-1.5 * scale, d + 1.5 * scale] {
        children.push(DrawNode::text(
            Point2D::new(sx + 0.4 * scale, y),
            "A",
            TextAnchor::Start,
            label_style(scale, 0.6),
        ));
    }

    DrawNode::group("reference", children)
}

#[cfg(test)]
mod tests {
    use super::*;
    use plandraft_core::model::{
        DoorRecord, FloorPlan, RoomType, WallClass, WallRecord,
    };
    use plandraft_geometry::build_segments;

    fn door_floor(swing: DoorSwing) -> FloorPlan {
        FloorPlan {
            level: 0,
            rooms: vec![],
            walls: vec![WallRecord {
                id: "w1".into(),
                start: Point2D::new(0.0, 0.0),
                end: Point2D::new(10.0, 0.0),
                thickness_in: 6.0,
                class: WallClass::Interior,
                insulated: false,
            }],
            doors: vec![DoorRecord {
                id: "d1".into(),
                wall_id: "w1".into(),
                offset_ft: 4.0,
                width_in: 36.0,
                swing,
            }],
            windows: vec![],
            stairs: vec![],
        }
    }

    #[test]
    fn hinged_door_draws_leaf_and_arc() {
        let arena = build_segments(&door_floor(DoorSwing::Left), 1.0);
        let node = opening_nodes(&arena, 1.0);
        // one leaf line plus one arc path
        assert_eq!(node.leaf_count(), 2);
    }

    #[test]
    fn double_door_draws_two_leaves_and_two_arcs() {
        let arena = build_segments(&door_floor(DoorSwing::Double), 1.0);
        let node = opening_nodes(&arena, 1.0);
        assert_eq!(node.leaf_count(), 4);
    }

    #[test]
    fn room_label_contains_formatted_dimensions() {
        let rooms = vec![RoomRecord {
            id: "r1".into(),
            name: "Kitchen".into(),
            room_type: RoomType::Kitchen,
            x: 0.0,
            y: 0.0,
            width: 12.5,
            depth: 10.0,
        }];
        let node = room_label_nodes(&rooms, 10.0);
        let json = serde_json::to_string(&node).unwrap();
        assert!(json.contains("12'-6\\\" x 10'-0\\\""));
        assert!(json.contains("125 sq ft"));
        assert!(json.contains("KITCHEN"));
    }
}
