// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Plandraft core: layout model, units and structural validation
//!
//! This crate owns the records the generation collaborator produces
//! (rooms, walls, doors, windows, stairs), the unit and tolerance
//! constants shared by the whole pipeline, and the layout validator
//! (grid snapping plus independent structural-sanity checks).

pub mod error;
pub mod model;
pub mod units;
pub mod validate;

pub use error::{Error, Result};
pub use model::{
    DoorRecord, DoorSwing, FloorPlan, FloorPlanLayout, Point2D, RoofDescriptor, RoofStyle,
    RoomRecord, RoomType, StairDirection, StairRecord, WallClass, WallRecord, WindowRecord,
};
pub use units::{format_feet_inches, inches_to_feet, snap, SNAP_GRID_FT};
pub use validate::{validate, CheckCode, Severity, ValidationIssue, ValidationReport};
