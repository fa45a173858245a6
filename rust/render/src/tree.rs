// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The vector drawing tree handed to the viewer/exporter.
//!
//! Drawing space follows the layout's screen-like convention (y grows
//! downward, matching image-space floor plans), so the tree serializes to
//! SVG without a flip transform.

use plandraft_core::model::Point2D;
use serde::{Deserialize, Serialize};

/// Stroke/fill styling for one node. `fill` is either a color or a
/// `url(#...)` reference to a hatch pattern def.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Style {
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
    pub fill: Option<String>,
    pub dash: Option<String>,
    pub font_size: Option<f64>,
}

impl Style {
    pub fn stroked(color: &str, width: f64) -> Self {
        Self {
            stroke: Some(color.into()),
            stroke_width: Some(width),
            fill: Some("none".into()),
            ..Self::default()
        }
    }

    pub fn filled(fill: &str) -> Self {
        Self {
            fill: Some(fill.into()),
            ..Self::default()
        }
    }

    pub fn with_fill(mut self, fill: &str) -> Self {
        self.fill = Some(fill.into());
        self
    }

    pub fn with_dash(mut self, dash: &str) -> Self {
        self.dash = Some(dash.into());
        self
    }

    pub fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = Some(size);
        self
    }
}

/// Horizontal anchoring of a text node
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// One node of the drawing tree
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawNode {
    Group {
        id: String,
        children: Vec<DrawNode>,
    },
    Polygon {
        points: Vec<Point2D>,
        style: Style,
    },
    Polyline {
        points: Vec<Point2D>,
        style: Style,
    },
    Line {
        from: Point2D,
        to: Point2D,
        style: Style,
    },
    /// Raw SVG path data, used for arcs
    Path {
        d: String,
        style: Style,
    },
    Circle {
        center: Point2D,
        radius: f64,
        style: Style,
    },
    Text {
        at: Point2D,
        content: String,
        anchor: TextAnchor,
        /// Rotation around the anchor point, degrees clockwise
        rotate: Option<f64>,
        style: Style,
    },
}

impl DrawNode {
    pub fn group(id: &str, children: Vec<DrawNode>) -> Self {
        DrawNode::Group {
            id: id.into(),
            children,
        }
    }

    pub fn line(from: Point2D, to: Point2D, style: Style) -> Self {
        DrawNode::Line { from, to, style }
    }

    pub fn text(at: Point2D, content: impl Into<String>, anchor: TextAnchor, style: Style) -> Self {
        DrawNode::Text {
            at,
            content: content.into(),
            anchor,
            rotate: None,
            style,
        }
    }

    /// Count leaf nodes (everything except groups)
    pub fn leaf_count(&self) -> usize {
        match self {
            DrawNode::Group { children, .. } => children.iter().map(DrawNode::leaf_count).sum(),
            _ => 1,
        }
    }
}
