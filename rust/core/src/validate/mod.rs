// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Structural sanity validation of a generated layout.
//!
//! A pure transform: raw layout in, `{errors, warnings, snapped layout}` out.
//! Grid snapping runs unconditionally first; every check then runs
//! independently on the snapped copy (no short-circuiting), so a report
//! always reflects the full set of problems. The validator never fails —
//! the worst layout still comes back renderable.

mod checks;
mod snap;

pub use snap::snap_layout;

use crate::model::FloorPlanLayout;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier for each validation rule
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CheckCode {
    RoomOverlap,
    EnvelopeOverflow,
    AspectRatio,
    AdjacencyViolation,
    AreaBudget,
    MissingDoor,
    EntryOversize,
    HallwayRatio,
}

impl fmt::Display for CheckCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CheckCode::RoomOverlap => "ROOM_OVERLAP",
            CheckCode::EnvelopeOverflow => "ENVELOPE_OVERFLOW",
            CheckCode::AspectRatio => "ASPECT_RATIO",
            CheckCode::AdjacencyViolation => "ADJACENCY_VIOLATION",
            CheckCode::AreaBudget => "AREA_BUDGET",
            CheckCode::MissingDoor => "MISSING_DOOR",
            CheckCode::EntryOversize => "ENTRY_OVERSIZE",
            CheckCode::HallwayRatio => "HALLWAY_RATIO",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Severity {
    /// Triggers the single automatic regeneration attempt
    Blocking,
    /// Surfaced to the user, never blocks rendering
    Warning,
}

/// One finding from one check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub code: CheckCode,
    pub severity: Severity,
    pub message: String,
}

impl ValidationIssue {
    fn blocking(code: CheckCode, message: String) -> Self {
        Self {
            code,
            severity: Severity::Blocking,
            message,
        }
    }

    fn warning(code: CheckCode, message: String) -> Self {
        Self {
            code,
            severity: Severity::Warning,
            message,
        }
    }
}

/// Validation result: the snapped layout plus everything found wrong with it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
    pub layout: FloorPlanLayout,
}

impl ValidationReport {
    pub fn has_blocking(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Natural-language summary of the blocking errors, used to seed the
    /// automatic regeneration instruction.
    pub fn blocking_summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Snap a layout to the grid and run every structural check on it.
pub fn validate(layout: &FloorPlanLayout) -> ValidationReport {
    let snapped = snap_layout(layout);

    let mut issues = Vec::new();
    for floor in &snapped.floors {
        checks::check_room_overlap(floor, &mut issues);
        checks::check_envelope(&snapped, floor, &mut issues);
        checks::check_aspect_ratio(floor, &mut issues);
        checks::check_adjacency(floor, &mut issues);
        checks::check_area_budget(&snapped, floor, &mut issues);
        checks::check_door_presence(floor, &mut issues);
        checks::check_entry_size(floor, &mut issues);
        checks::check_hallway_ratio(floor, &mut issues);
    }

    let (errors, warnings): (Vec<_>, Vec<_>) = issues
        .into_iter()
        .partition(|i| i.severity == Severity::Blocking);

    for w in &warnings {
        tracing::warn!(code = %w.code, "{}", w.message);
    }

    ValidationReport {
        errors,
        warnings,
        layout: snapped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::*;

    fn room(id: &str, rt: RoomType, x: f64, y: f64, w: f64, d: f64) -> RoomRecord {
        RoomRecord {
            id: id.into(),
            name: id.into(),
            room_type: rt,
            x,
            y,
            width: w,
            depth: d,
        }
    }

    fn wall(id: &str, x1: f64, y1: f64, x2: f64, y2: f64) -> WallRecord {
        WallRecord {
            id: id.into(),
            start: Point2D::new(x1, y1),
            end: Point2D::new(x2, y2),
            thickness_in: 6.0,
            class: WallClass::Exterior,
            insulated: true,
        }
    }

    fn layout_with(rooms: Vec<RoomRecord>, walls: Vec<WallRecord>, doors: Vec<DoorRecord>) -> FloorPlanLayout {
        FloorPlanLayout {
            width_ft: 40.0,
            depth_ft: 30.0,
            storeys: 1,
            style: "test".into(),
            floors: vec![FloorPlan {
                level: 0,
                rooms,
                walls,
                doors,
                windows: vec![],
                stairs: vec![],
            }],
            roof: RoofDescriptor {
                style: RoofStyle::Flat,
                pitch: 0.0,
            },
        }
    }

    #[test]
    fn overlapping_rooms_block() {
        let layout = layout_with(
            vec![
                room("a", RoomType::Bedroom, 0.0, 0.0, 10.0, 10.0),
                room("b", RoomType::Office, 5.0, 5.0, 10.0, 10.0),
            ],
            vec![],
            vec![],
        );
        let report = validate(&layout);
        assert!(report.has_blocking());
        assert_eq!(report.errors[0].code, CheckCode::RoomOverlap);
    }

    #[test]
    fn edge_adjacent_rooms_do_not_overlap() {
        let layout = layout_with(
            vec![
                room("a", RoomType::Bedroom, 0.0, 0.0, 10.0, 10.0),
                room("b", RoomType::Office, 10.0, 0.0, 10.0, 10.0),
            ],
            vec![],
            vec![],
        );
        let report = validate(&layout);
        assert!(!report.has_blocking());
    }

    #[test]
    fn kitchen_next_to_bathroom_warns() {
        let layout = layout_with(
            vec![
                room("k", RoomType::Kitchen, 0.0, 0.0, 10.0, 10.0),
                room("b", RoomType::Bathroom, 10.0, 0.0, 6.0, 10.0),
            ],
            vec![],
            vec![],
        );
        let report = validate(&layout);
        assert!(report
            .warnings
            .iter()
            .any(|w| w.code == CheckCode::AdjacencyViolation));
    }

    #[test]
    fn separated_kitchen_and_bathroom_do_not_warn() {
        let layout = layout_with(
            vec![
                room("k", RoomType::Kitchen, 0.0, 0.0, 10.0, 10.0),
                room("b", RoomType::Bathroom, 11.0, 0.0, 6.0, 10.0),
            ],
            vec![],
            vec![],
        );
        let report = validate(&layout);
        assert!(!report
            .warnings
            .iter()
            .any(|w| w.code == CheckCode::AdjacencyViolation));
    }

    #[test]
    fn validation_is_idempotent() {
        let layout = layout_with(
            vec![room("a", RoomType::Living, 0.1, 0.2, 19.9, 14.8)],
            vec![
                wall("w1", 0.0, 0.0, 20.0, 0.0),
                wall("w2", 20.0, 0.0, 20.0, 15.0),
            ],
            vec![DoorRecord {
                id: "d1".into(),
                wall_id: "w1".into(),
                offset_ft: 4.0,
                width_in: 36.0,
                swing: DoorSwing::Left,
            }],
        );
        let first = validate(&layout);
        let second = validate(&first.layout);
        assert_eq!(first.errors.len(), second.errors.len());
        assert_eq!(first.warnings.len(), second.warnings.len());
        let a = serde_json::to_string(&first.layout).unwrap();
        let b = serde_json::to_string(&second.layout).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn every_snapped_coordinate_is_on_the_grid() {
        let layout = layout_with(
            vec![room("a", RoomType::Living, 0.13, 0.27, 19.91, 14.77)],
            vec![wall("w1", 0.02, 0.0, 19.98, 0.04)],
            vec![],
        );
        let report = validate(&layout);
        let floor = &report.layout.floors[0];
        let coords = [
            floor.rooms[0].x,
            floor.rooms[0].y,
            floor.rooms[0].width,
            floor.rooms[0].depth,
            floor.walls[0].start.x,
            floor.walls[0].start.y,
            floor.walls[0].end.x,
            floor.walls[0].end.y,
            report.layout.width_ft,
            report.layout.depth_ft,
        ];
        for c in coords {
            let doubled = c * 2.0;
            assert!(
                (doubled - doubled.round()).abs() < 1e-9,
                "coordinate {} not on 0.5 ft grid",
                c
            );
        }
    }

    #[test]
    fn room_outside_envelope_warns() {
        // 5 ft past the 40 ft envelope
        let layout = layout_with(
            vec![room("o", RoomType::Office, 35.0, 0.0, 10.0, 10.0)],
            vec![],
            vec![],
        );
        let report = validate(&layout);
        assert!(report
            .warnings
            .iter()
            .any(|w| w.code == CheckCode::EnvelopeOverflow));

        // exactly at the 0.5 ft tolerance stays quiet
        let layout = layout_with(
            vec![room("o", RoomType::Office, 30.5, 0.0, 10.0, 10.0)],
            vec![],
            vec![],
        );
        let report = validate(&layout);
        assert!(!report
            .warnings
            .iter()
            .any(|w| w.code == CheckCode::EnvelopeOverflow));
    }

    #[test]
    fn bedroom_aspect_ratio_warns_above_the_slack() {
        let aspect_warns = |rooms| {
            validate(&layout_with(rooms, vec![], vec![]))
                .warnings
                .iter()
                .any(|w| w.code == CheckCode::AspectRatio)
        };

        // 1.5 is past the bedroom ceiling of 1.3 plus 0.1 slack
        assert!(aspect_warns(vec![room(
            "b",
            RoomType::Bedroom,
            0.0,
            0.0,
            15.0,
            10.0
        )]));
        // 1.4 sits exactly on ceiling plus slack
        assert!(!aspect_warns(vec![room(
            "b",
            RoomType::Bedroom,
            0.0,
            0.0,
            14.0,
            10.0
        )]));
        // circulation spaces are unconstrained
        assert!(!aspect_warns(vec![room(
            "h",
            RoomType::Hallway,
            0.0,
            0.0,
            30.0,
            4.0
        )]));
    }

    #[test]
    fn garage_is_excluded_from_the_area_budget() {
        // 900 sq ft garage leaves 300 sq ft usable, budget 345
        let garage = room("g", RoomType::Garage, 0.0, 0.0, 30.0, 30.0);
        let office = room("o", RoomType::Office, 30.0, 0.0, 10.0, 30.0);

        let report = validate(&layout_with(vec![garage.clone(), office.clone()], vec![], vec![]));
        assert!(!report
            .warnings
            .iter()
            .any(|w| w.code == CheckCode::AreaBudget));

        // 60 more sq ft of non-garage rooms breaks the shrunken budget,
        // even though the grand total is well under 1.15x the envelope
        let laundry = room("l", RoomType::Laundry, 0.0, 30.0, 10.0, 6.0);
        let report = validate(&layout_with(vec![garage, office, laundry], vec![], vec![]));
        assert!(report
            .warnings
            .iter()
            .any(|w| w.code == CheckCode::AreaBudget));
    }

    #[test]
    fn oversized_hallway_share_warns() {
        // 120 of 320 sq ft is hallway
        let layout = layout_with(
            vec![
                room("a", RoomType::Living, 0.0, 0.0, 20.0, 10.0),
                room("h", RoomType::Hallway, 0.0, 10.0, 30.0, 4.0),
            ],
            vec![],
            vec![],
        );
        let report = validate(&layout);
        assert!(report
            .warnings
            .iter()
            .any(|w| w.code == CheckCode::HallwayRatio));

        // exactly 10% of total floor area stays quiet
        let layout = layout_with(
            vec![
                room("a", RoomType::Living, 0.0, 0.0, 18.0, 10.0),
                room("h", RoomType::Hallway, 0.0, 10.0, 20.0, 1.0),
            ],
            vec![],
            vec![],
        );
        let report = validate(&layout);
        assert!(!report
            .warnings
            .iter()
            .any(|w| w.code == CheckCode::HallwayRatio));
    }

    #[test]
    fn oversized_entry_warns() {
        let layout = layout_with(
            vec![room("e", RoomType::Entry, 0.0, 0.0, 10.0, 9.0)],
            vec![],
            vec![],
        );
        let report = validate(&layout);
        assert!(report
            .warnings
            .iter()
            .any(|w| w.code == CheckCode::EntryOversize));
    }

    #[test]
    fn room_without_door_wall_warns() {
        let layout = layout_with(
            vec![room("a", RoomType::Bedroom, 0.0, 0.0, 10.0, 10.0)],
            vec![wall("w1", 0.0, 0.0, 10.0, 0.0)],
            vec![], // wall exists but hosts no door
        );
        let report = validate(&layout);
        assert!(report
            .warnings
            .iter()
            .any(|w| w.code == CheckCode::MissingDoor));
    }
}
