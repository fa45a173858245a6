// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Hatch pattern definitions for wall fills.
//!
//! Exterior walls cross-hatch, interior and partition walls get a single
//! diagonal, per drafting convention. Patterns are emitted once into the
//! SVG `<defs>` block and referenced by fill url.

use plandraft_geometry::HatchKind;

pub const CROSS_PATTERN_ID: &str = "hatch-cross";
pub const DIAGONAL_PATTERN_ID: &str = "hatch-diagonal";

/// Fill attribute value for a hatch kind
pub fn fill_ref(kind: HatchKind) -> &'static str {
    match kind {
        HatchKind::Cross => "url(#hatch-cross)",
        HatchKind::Diagonal => "url(#hatch-diagonal)",
    }
}

/// The `<defs>` block shared by every drawing
pub fn pattern_defs() -> String {
    format!(
        concat!(
            "<defs>\n",
            "<pattern id=\"{cross}\" width=\"4\" height=\"4\" patternUnits=\"userSpaceOnUse\">\n",
            "<path d=\"M0 0 L4 4 M4 0 L0 4\" stroke=\"#444\" stroke-width=\"0.4\"/>\n",
            "</pattern>\n",
            "<pattern id=\"{diag}\" width=\"4\" height=\"4\" patternUnits=\"userSpaceOnUse\">\n",
            "<path d=\"M0 4 L4 0\" stroke=\"#666\" stroke-width=\"0.4\"/>\n",
            "</pattern>\n",
            "</defs>\n"
        ),
        cross = CROSS_PATTERN_ID,
        diag = DIAGONAL_PATTERN_ID,
    )
}
