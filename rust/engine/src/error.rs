// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Failures of the external generation collaborator
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Generation backend error: {0}")]
    Backend(String),

    #[error("Generator returned no layout")]
    EmptyResponse,

    #[error("Generator returned an unparseable layout: {0}")]
    InvalidLayout(#[from] serde_json::Error),
}

/// Errors that can escape the engine boundary.
///
/// The geometry/validation pipeline itself never fails: any layout comes
/// back as a best-effort drawing. Total refusal is reserved for the
/// complete absence of layout data or a failed external call.
#[derive(Error, Debug)]
pub enum Error {
    #[error("No layout to draw")]
    MissingLayout,

    #[error(transparent)]
    Generation(#[from] GenerateError),
}
