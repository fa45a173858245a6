// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Drawing tree to SVG serialization.
//!
//! Straight string building: every node maps to one SVG element, hatch
//! patterns are emitted once into `<defs>`, and text content is escaped.
//! The output is a standalone vector file, directly displayable.

use crate::hatch;
use crate::tree::{DrawNode, Style, TextAnchor};
use std::fmt::Write;

/// Visible area of the drawing, in drawing units
#[derive(Debug, Clone, Copy)]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    /// View box around a building envelope with room for dimension chains
    /// and sheet furniture.
    pub fn around_envelope(width_ft: f64, depth_ft: f64, scale: f64) -> Self {
        let margin = 9.0 * scale;
        Self {
            min_x: -margin,
            min_y: -margin,
            width: width_ft * scale + 2.0 * margin,
            height: depth_ft * scale + 2.0 * margin,
        }
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn style_attrs(style: &Style) -> String {
    let mut s = String::new();
    if let Some(stroke) = &style.stroke {
        let _ = write!(s, " stroke=\"{}\"", stroke);
    }
    if let Some(width) = style.stroke_width {
        let _ = write!(s, " stroke-width=\"{:.3}\"", width);
    }
    if let Some(fill) = &style.fill {
        let _ = write!(s, " fill=\"{}\"", fill);
    }
    if let Some(dash) = &style.dash {
        let _ = write!(s, " stroke-dasharray=\"{}\"", dash);
    }
    if let Some(size) = style.font_size {
        let _ = write!(s, " font-size=\"{:.2}\"", size);
    }
    s
}

fn points_attr(points: &[plandraft_core::model::Point2D]) -> String {
    points
        .iter()
        .map(|p| format!("{:.3},{:.3}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

fn write_node(out: &mut String, node: &DrawNode) {
    match node {
        DrawNode::Group { id, children } => {
            let _ = writeln!(out, "<g id=\"{}\">", escape(id));
            for child in children {
                write_node(out, child);
            }
            let _ = writeln!(out, "</g>");
        }
        DrawNode::Polygon { points, style } => {
            let _ = writeln!(
                out,
                "<polygon points=\"{}\"{}/>",
                points_attr(points),
                style_attrs(style)
            );
        }
        DrawNode::Polyline { points, style } => {
            let _ = writeln!(
                out,
                "<polyline points=\"{}\" fill=\"none\"{}/>",
                points_attr(points),
                style_attrs(style)
            );
        }
        DrawNode::Line { from, to, style } => {
            let _ = writeln!(
                out,
                "<line x1=\"{:.3}\" y1=\"{:.3}\" x2=\"{:.3}\" y2=\"{:.3}\"{}/>",
                from.x,
                from.y,
                to.x,
                to.y,
                style_attrs(style)
            );
        }
        DrawNode::Path { d, style } => {
            let _ = writeln!(out, "<path d=\"{}\"{}/>", d, style_attrs(style));
        }
        DrawNode::Circle {
            center,
            radius,
            style,
        } => {
            let _ = writeln!(
                out,
                "<circle cx=\"{:.3}\" cy=\"{:.3}\" r=\"{:.3}\"{}/>",
                center.x,
                center.y,
                radius,
                style_attrs(style)
            );
        }
        DrawNode::Text {
            at,
            content,
            anchor,
            rotate,
            style,
        } => {
            let anchor = match anchor {
                TextAnchor::Start => "start",
                TextAnchor::Middle => "middle",
                TextAnchor::End => "end",
            };
            let transform = rotate
                .map(|deg| format!(" transform=\"rotate({:.1} {:.3} {:.3})\"", deg, at.x, at.y))
                .unwrap_or_default();
            let _ = writeln!(
                out,
                "<text x=\"{:.3}\" y=\"{:.3}\" text-anchor=\"{}\"{}{}>{}</text>",
                at.x,
                at.y,
                anchor,
                transform,
                style_attrs(style),
                escape(content)
            );
        }
    }
}

/// Serialize a drawing tree into a standalone SVG document.
pub fn to_svg(root: &DrawNode, view: ViewBox) -> String {
    let mut out = String::with_capacity(16 * 1024);
    let _ = writeln!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{:.3} {:.3} {:.3} {:.3}\" \
         font-family=\"sans-serif\" stroke-linecap=\"round\">",
        view.min_x, view.min_y, view.width, view.height
    );
    out.push_str(&hatch::pattern_defs());
    write_node(&mut out, root);
    out.push_str("</svg>\n");
    out
}
