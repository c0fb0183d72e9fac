//! Clamping of genomic regions to the exons they overlap.
//!
//! Constraint tracks draw per-region glyphs only over coding sequence; a
//! region crossing an intron is split into one fragment per overlapped exon,
//! with the original extent kept around so a tooltip can still report the
//! full region.

use serde::{Deserialize, Serialize};

use crate::transcript::Exon;

/// A closed genomic interval with a caller-defined payload.
///
/// `start <= stop` is a precondition, not checked here (see
/// [`crate::validator`]).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Region<P> {
    /// 1-based inclusive genomic start.
    pub start: i32,
    /// 1-based inclusive genomic stop.
    pub stop: i32,
    /// Carried through clamping verbatim.
    pub payload: P,
}

/// A region clamped to a single exon overlap.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ClampedRegion<P> {
    /// Start of the overlap with the exon.
    pub start: i32,
    /// Stop of the overlap with the exon.
    pub stop: i32,
    /// Start of the original, unclamped region.
    pub unclamped_start: i32,
    /// Stop of the original, unclamped region.
    pub unclamped_stop: i32,
    /// The original region's payload.
    pub payload: P,
}

/// Intersect `regions` with `exons`, clamping each region to the exon
/// boundaries it overlaps.
///
/// A region spanning several exons yields one fragment per overlapped exon,
/// each carrying the same unclamped extent; regions lying entirely outside
/// exon coverage yield nothing.  A shared boundary coordinate does not count
/// as overlap (zero-length fragments are never emitted).
///
/// Both inputs may come in any order; sorting operates on copies and neither
/// slice is mutated.  Output order is deterministic: by sorted region, then
/// by sorted exon, with input order preserved on equal starts.
pub fn regions_in_exons<P>(regions: &[Region<P>], exons: &[Exon]) -> Vec<ClampedRegion<P>>
where
    P: Clone,
{
    let mut sorted_regions: Vec<&Region<P>> = regions.iter().collect();
    sorted_regions.sort_by_key(|region| region.start);
    let mut sorted_exons: Vec<&Exon> = exons.iter().collect();
    sorted_exons.sort_by_key(|exon| exon.start);

    let mut clamped = Vec::new();
    let mut region_index = 0;
    let mut exon_index = 0;
    while region_index < sorted_regions.len() && exon_index < sorted_exons.len() {
        let region = sorted_regions[region_index];
        let exon = sorted_exons[exon_index];

        let max_start = region.start.max(exon.start);
        let min_stop = region.stop.min(exon.stop);
        if max_start < min_stop {
            clamped.push(ClampedRegion {
                start: max_start,
                stop: min_stop,
                unclamped_start: region.start,
                unclamped_stop: region.stop,
                payload: region.payload.clone(),
            });
        }

        // Whichever interval ends at the overlap boundary is exhausted; on a
        // shared stop both cursors move in the same step.
        if region.stop == min_stop {
            region_index += 1;
        }
        if exon.stop == min_stop {
            exon_index += 1;
        }
    }
    clamped
}


// <LICENSE>
// Copyright 2025 exon-coords Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
// </LICENSE>
