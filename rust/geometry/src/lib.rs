// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Plandraft geometry: the drawing-space half of the pipeline
//!
//! Wall records become corner rectangles in a segment arena, junctions
//! reshape those corners for clean L and T meetings, openings cut the
//! bodies into hatched fill polygons, and dimension chains annotate the
//! result. Every stage is a pure function over its input; the only in-place
//! mutation is junction resolution, which operates on the arena under a
//! documented corners-only contract.

pub mod arena;
pub mod dimension;
pub mod junction;
pub mod opening;
pub mod segment;

pub use arena::SegmentArena;
pub use dimension::{room_dimensions, side_chains, DimLevel, DimSpan, DimensionChain, RoomDimension, Side};
pub use junction::resolve_junctions;
pub use opening::{cut_all, cut_segment, FillPolygon, HatchKind};
pub use segment::{build_segments, OpeningKind, OpeningSpan, Orientation, WallEnd, WallSegment};
