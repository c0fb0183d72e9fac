//! Genomic coordinates of frameshift variant effects.
//!
//! A frameshift description `p.<Ref><Pos><Alt...>fsTer<N|?>` locates its
//! effect in protein space: codon `Pos` is the first changed amino acid and
//! the shifted frame reaches a new stop codon `N` codons later (or never, for
//! `?`).  To place the effect on a genome plot both protein positions must be
//! projected onto genomic coordinates, walking the transcript's exons as if
//! they were one contiguous coding sequence:
//!
//! ```text
//!             CDS          CDS            CDS        3' UTR
//!          |=======|----|=======|------|=======|...|———————|
//! offset    1...100      101...200      201...
//! ```
//!
//! The walk consumes nucleotide offsets 5'->3', skipping intron gaps and
//! counting against genomic coordinates in the direction given by the strand.

use crate::parser::{Frameshift, TerminationSite};
use crate::transcript::{Exon, Strand, Transcript, Variant};

/// Advance `distance` nucleotides across `intervals` and return the genomic
/// coordinate of the final nucleotide.
///
/// `intervals` must be disjoint, in 5'->3' order, and represent contiguous
/// transcript sequence (introns already excluded); `start <= stop` on each is
/// a precondition, not checked here (see [`crate::validator`]).
///
/// The second return value is what is left of `intervals` after the walk:
/// the tail of the list, with a partially consumed first interval truncated
/// to the residual on the 3' side of the returned coordinate.  A walk past
/// the end of the list yields `(None, vec![])`; callers substitute the
/// transcript end.
pub fn advance_over_intervals(
    intervals: &[Exon],
    distance: i32,
    strand: Strand,
) -> (Option<i32>, Vec<Exon>) {
    let mut distance = distance;
    for (index, interval) in intervals.iter().enumerate() {
        let size = interval.size();
        if size < distance {
            distance -= size;
            continue;
        }
        if size == distance {
            // Lands exactly on the interval's 3'-most base.
            return (
                Some(interval.three_prime_end(strand)),
                intervals[index + 1..].to_vec(),
            );
        }
        let (coordinate, residual) = match strand {
            Strand::Plus => {
                let coordinate = interval.start + distance - 1;
                (
                    coordinate,
                    Exon {
                        start: coordinate + 1,
                        ..interval.clone()
                    },
                )
            }
            Strand::Minus => {
                let coordinate = interval.stop - distance + 1;
                (
                    coordinate,
                    Exon {
                        stop: coordinate - 1,
                        ..interval.clone()
                    },
                )
            }
        };
        let mut remaining = Vec::with_capacity(intervals.len() - index);
        remaining.push(residual);
        remaining.extend_from_slice(&intervals[index + 1..]);
        return (Some(coordinate), remaining);
    }
    (None, Vec::new())
}

/// Compute the two genomic endpoints spanned by a frameshift variant.
///
/// The first element is the genomic position of the first base of the first
/// changed codon, the second the position of the last base of the new
/// termination codon.  The pair is not ordered in genomic terms: the
/// termination side is the higher coordinate on `+` and the lower one on `-`;
/// callers take min/max for drawing.
///
/// Structural fallbacks instead of errors:
///
/// * missing transcript, missing `hgvsp`, or an `hgvsp` that is not a
///   frameshift description yield the degenerate `(variant.pos, variant.pos)`;
/// * an unknown termination site (`fsTer?`) extends to the transcript's
///   3' end;
/// * a walk overrunning the known exons clamps to the transcript's 3' end.
pub fn global_frameshift_coordinates(
    variant: &Variant,
    transcript: Option<&Transcript>,
) -> (i32, i32) {
    let fallback = (variant.pos, variant.pos);
    let Some(transcript) = transcript else {
        return fallback;
    };
    let Some(hgvsp) = variant.hgvsp.as_deref() else {
        return fallback;
    };
    let Ok(frameshift) = hgvsp.parse::<Frameshift>() else {
        return fallback;
    };

    let coding = transcript.coding_and_downstream();
    let Some(last) = coding.last() else {
        return fallback;
    };
    let transcript_end = last.three_prime_end(transcript.strand);

    // 1-based offset into the CDS of the first base of the affected codon.
    // Codon numbers large enough to overflow the offset arithmetic cannot
    // be located at all.
    let Some(start_offset) = frameshift
        .position
        .checked_mul(3)
        .and_then(|n| n.checked_sub(2))
    else {
        return fallback;
    };
    let (start, remaining) = advance_over_intervals(&coding, start_offset, transcript.strand);

    match frameshift.termination {
        TerminationSite::Unknown => (start.unwrap_or(transcript_end), transcript_end),
        TerminationSite::Known(termination) => {
            // Distance to the last base of the new stop codon, counted from
            // the start coordinate inclusive; the +2 reaches the 3rd base of
            // the stop codon.  A count that overflows lies past the known
            // exons no matter what, so it clamps like any other overrun.
            let length = (termination - 1)
                .checked_mul(3)
                .and_then(|n| n.checked_add(2));
            let Some(length) = length else {
                return (start.unwrap_or(transcript_end), transcript_end);
            };
            let (end, _) = advance_over_intervals(&remaining, length, transcript.strand);
            (
                start.unwrap_or(transcript_end),
                end.unwrap_or(transcript_end),
            )
        }
    }
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
