// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Arena of wall segments addressed by stable record ids.
//!
//! Junction resolution mutates segments in place through this arena
//! (documented contract: only corner coordinates move, ids and ordering
//! never change). Iteration follows insertion order so output is
//! deterministic.

use crate::segment::WallSegment;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SegmentArena {
    segments: FxHashMap<String, WallSegment>,
    order: Vec<String>,
}

impl SegmentArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, segment: WallSegment) {
        if !self.segments.contains_key(&segment.id) {
            self.order.push(segment.id.clone());
        }
        self.segments.insert(segment.id.clone(), segment);
    }

    pub fn get(&self, id: &str) -> Option<&WallSegment> {
        self.segments.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut WallSegment> {
        self.segments.get_mut(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.segments.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Segment ids in insertion order
    pub fn ids(&self) -> &[String] {
        &self.order
    }

    /// Segments in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &WallSegment> {
        self.order.iter().filter_map(|id| self.segments.get(id))
    }
}
