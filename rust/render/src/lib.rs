// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Plandraft render: drawing tree, symbols and SVG export
//!
//! Takes the geometry crate's outputs (fill polygons, opening spans,
//! dimension chains) and produces a vector drawing tree plus its SVG
//! serialization. Pure glyph placement, no algorithmic geometry.

pub mod hatch;
pub mod svg;
pub mod symbols;
pub mod tree;

pub use svg::{to_svg, ViewBox};
pub use symbols::{
    dimension_nodes, opening_nodes, reference_nodes, room_label_nodes, stair_nodes,
    wall_fill_nodes,
};
pub use tree::{DrawNode, Style, TextAnchor};
