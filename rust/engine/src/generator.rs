// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The generation collaborator seam and the single-retry protocol.
//!
//! The external generator produces whole replacement layouts, never diffs.
//! Blocking validation errors seed exactly one automatic refinement whose
//! instruction concatenates the error messages; whatever that retry
//! returns (re-snapped and re-validated) is used, fixed or not. The system
//! never loops beyond one retry.

use crate::error::GenerateError;
use plandraft_core::model::FloorPlanLayout;
use plandraft_core::validate::{validate, ValidationReport};

/// The external AI collaborator that produces layouts.
///
/// Cancellation of an in-flight call is the caller's concern; this seam is
/// synchronous from the engine's point of view.
pub trait LayoutGenerator {
    /// Produce a fresh layout from a natural-language brief.
    fn generate(&mut self, brief: &str) -> Result<FloorPlanLayout, GenerateError>;

    /// Produce a complete replacement layout from an instruction and the
    /// previous layout.
    fn refine(
        &mut self,
        instruction: &str,
        previous: &FloorPlanLayout,
    ) -> Result<FloorPlanLayout, GenerateError>;
}

/// A validated layout ready for the drawing pipeline
#[derive(Debug, Clone)]
pub struct GeneratedPlan {
    pub report: ValidationReport,
    /// Whether the automatic regeneration attempt ran
    pub retried: bool,
}

impl GeneratedPlan {
    pub fn layout(&self) -> &FloorPlanLayout {
        &self.report.layout
    }
}

/// Validate a layout, spending the single allowed regeneration attempt on
/// blocking errors.
fn validate_with_retry(
    generator: &mut dyn LayoutGenerator,
    layout: FloorPlanLayout,
) -> GeneratedPlan {
    let report = validate(&layout);
    if !report.has_blocking() {
        return GeneratedPlan {
            report,
            retried: false,
        };
    }

    let instruction = format!(
        "Regenerate the floor plan and fix these problems: {}",
        report.blocking_summary()
    );
    tracing::info!(errors = report.errors.len(), "requesting automatic regeneration");

    match generator.refine(&instruction, &report.layout) {
        Ok(replacement) => {
            let report = validate(&replacement);
            if report.has_blocking() {
                tracing::warn!(
                    errors = report.errors.len(),
                    "regeneration left blocking errors, using layout anyway"
                );
            }
            GeneratedPlan {
                report,
                retried: true,
            }
        }
        Err(err) => {
            // failed regeneration: keep the original layout, warnings and all
            tracing::warn!(error = %err, "automatic regeneration failed, keeping original layout");
            GeneratedPlan {
                report,
                retried: true,
            }
        }
    }
}

/// Generate a layout from a brief and validate it, with the one automatic
/// regeneration on blocking errors.
pub fn generate_plan(
    generator: &mut dyn LayoutGenerator,
    brief: &str,
) -> Result<GeneratedPlan, GenerateError> {
    let layout = generator.generate(brief)?;
    Ok(validate_with_retry(generator, layout))
}

/// Refine an existing layout with a user instruction.
///
/// On a failed refinement the error propagates so the caller keeps the
/// previously displayed layout unchanged.
pub fn refine_plan(
    generator: &mut dyn LayoutGenerator,
    instruction: &str,
    previous: &FloorPlanLayout,
) -> Result<GeneratedPlan, GenerateError> {
    let layout = generator.refine(instruction, previous)?;
    Ok(validate_with_retry(generator, layout))
}
