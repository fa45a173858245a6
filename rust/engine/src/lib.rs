// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Plandraft engine: backend-neutral facade over the drawing pipeline
//!
//! Exposes the full layout-to-drawing flow (validate, build segments,
//! resolve junctions, cut openings, dimension, assemble) plus the
//! generation-collaborator seam with its single-retry regeneration
//! protocol. Layout JSON parsing lives here because layouts enter the
//! system through this boundary.

pub mod error;
pub mod generator;
pub mod pipeline;

pub use error::{Error, GenerateError, Result};
pub use generator::{generate_plan, refine_plan, GeneratedPlan, LayoutGenerator};
pub use pipeline::{process_layout, FloorDrawing, FloorPlanDrawing, DEFAULT_SCALE};

use plandraft_core::model::FloorPlanLayout;

/// Parse a layout from the generator's JSON wire form.
///
/// A blank response is distinguished from a malformed one so callers can
/// tell "the backend sent nothing" apart from "the backend sent garbage".
pub fn layout_from_json(json: &str) -> Result<FloorPlanLayout> {
    if json.trim().is_empty() {
        return Err(GenerateError::EmptyResponse.into());
    }
    let layout: FloorPlanLayout =
        serde_json::from_str(json).map_err(GenerateError::InvalidLayout)?;
    Ok(layout)
}
