// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Layout model: the records the generation collaborator produces.
//!
//! All plan coordinates are in feet; member sizes (wall thickness, opening
//! widths, sills) are in inches, matching architectural convention. A
//! [`FloorPlanLayout`] is an immutable value: refinement replaces it
//! wholesale, it is never patched in place.

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// A 2D point (simplified for serialization)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn to_nalgebra(&self) -> Point2<f64> {
        Point2::new(self.x, self.y)
    }

    pub fn distance_to(&self, other: &Point2D) -> f64 {
        nalgebra::distance(&self.to_nalgebra(), &other.to_nalgebra())
    }
}

/// Wall classification, drives thickness defaults and hatch style
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WallClass {
    Exterior,
    Interior,
    Partition,
}

impl WallClass {
    /// Exterior walls get a cross-hatch fill, everything else a single
    /// diagonal hatch.
    pub fn is_exterior(&self) -> bool {
        matches!(self, WallClass::Exterior)
    }
}

/// Door swing direction as drawn on the plan
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DoorSwing {
    Left,
    Right,
    Double,
    Sliding,
}

/// Room classification.
///
/// Unknown tags from the generator deserialize as `Other` rather than
/// failing the whole layout.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RoomType {
    Bedroom,
    Bathroom,
    Kitchen,
    Living,
    Dining,
    Garage,
    Closet,
    Pantry,
    Hallway,
    Stairwell,
    Entry,
    Laundry,
    Office,
    Utility,
    #[serde(other)]
    Other,
}

impl RoomType {
    /// Maximum allowed longer/shorter side ratio, before the shared slack.
    /// `None` means unconstrained (circulation spaces are naturally long).
    pub fn aspect_ceiling(&self) -> Option<f64> {
        match self {
            RoomType::Bedroom => Some(1.3),
            RoomType::Bathroom => Some(1.8),
            RoomType::Garage => Some(2.0),
            RoomType::Closet => Some(4.0),
            RoomType::Hallway | RoomType::Stairwell => None,
            RoomType::Kitchen
            | RoomType::Living
            | RoomType::Dining
            | RoomType::Pantry
            | RoomType::Entry
            | RoomType::Laundry
            | RoomType::Office
            | RoomType::Utility
            | RoomType::Other => Some(2.0),
        }
    }

    /// Rooms that are not expected to host a door-bearing wall.
    pub fn door_exempt(&self) -> bool {
        matches!(self, RoomType::Closet | RoomType::Pantry)
    }

    /// Room pairs that must not share a wall. Symmetric.
    pub fn forbids_adjacent(&self, other: &RoomType) -> bool {
        use RoomType::*;
        matches!(
            (self, other),
            (Bathroom, Kitchen)
                | (Kitchen, Bathroom)
                | (Garage, Bedroom)
                | (Bedroom, Garage)
                | (Garage, Living)
                | (Living, Garage)
                | (Kitchen, Bedroom)
                | (Bedroom, Kitchen)
        )
    }
}

/// One physical wall, described by its centerline in feet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WallRecord {
    pub id: String,
    pub start: Point2D,
    pub end: Point2D,
    /// Wall thickness in inches
    pub thickness_in: f64,
    pub class: WallClass,
    #[serde(default)]
    pub insulated: bool,
}

impl WallRecord {
    pub fn length_ft(&self) -> f64 {
        self.start.distance_to(&self.end)
    }
}

/// A door opening hosted by a wall
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoorRecord {
    pub id: String,
    /// Host wall id; a dangling reference drops the door, never the layout
    pub wall_id: String,
    /// Distance from the wall start to the opening start, in feet
    pub offset_ft: f64,
    /// Opening width in inches
    pub width_in: f64,
    pub swing: DoorSwing,
}

/// A window opening hosted by a wall
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowRecord {
    pub id: String,
    pub wall_id: String,
    pub offset_ft: f64,
    pub width_in: f64,
    /// Glazing height in inches
    pub height_in: f64,
    /// Sill height above floor in inches
    pub sill_in: f64,
}

/// Axis-aligned room rectangle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomRecord {
    pub id: String,
    pub name: String,
    pub room_type: RoomType,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub depth: f64,
}

impl RoomRecord {
    pub fn area(&self) -> f64 {
        self.width * self.depth
    }

    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f64 {
        self.y + self.depth
    }
}

/// Stair run direction relative to this floor
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StairDirection {
    Up,
    Down,
}

/// A straight stair run footprint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StairRecord {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub depth: f64,
    pub direction: StairDirection,
}

/// Roof shape carried on the layout for the elevation collaborator;
/// the plan pipeline passes it through untouched.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RoofStyle {
    Gable,
    Hip,
    Flat,
    Shed,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoofDescriptor {
    pub style: RoofStyle,
    /// Rise over 12 inches of run
    #[serde(default)]
    pub pitch: f64,
}

/// All records for one storey
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloorPlan {
    /// Storey index, 0 = ground
    pub level: u32,
    pub rooms: Vec<RoomRecord>,
    pub walls: Vec<WallRecord>,
    #[serde(default)]
    pub doors: Vec<DoorRecord>,
    #[serde(default)]
    pub windows: Vec<WindowRecord>,
    #[serde(default)]
    pub stairs: Vec<StairRecord>,
}

/// Complete building layout as produced by the generation collaborator.
///
/// Replaced wholesale on every generation or refinement call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloorPlanLayout {
    /// Envelope width in feet
    pub width_ft: f64,
    /// Envelope depth in feet
    pub depth_ft: f64,
    pub storeys: u32,
    /// Style tag, free-form (e.g. "modern farmhouse")
    pub style: String,
    pub floors: Vec<FloorPlan>,
    pub roof: RoofDescriptor,
}

impl FloorPlanLayout {
    pub fn envelope_area(&self) -> f64 {
        self.width_ft * self.depth_ft
    }

    pub fn floor(&self, level: usize) -> crate::Result<&FloorPlan> {
        self.floors
            .get(level)
            .ok_or(crate::Error::UnknownFloor(level))
    }
}
