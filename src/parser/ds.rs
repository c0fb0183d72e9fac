//! Data structures for representing frameshift notation.

/// Position of the new termination codon in the shifted reading frame.
///
/// `Unknown` corresponds to `fsTer?`, i.e. the shifted frame was not observed
/// to reach a stop codon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TerminationSite {
    /// 1-based codon count from the first changed amino acid to the new stop.
    Known(i32),
    /// `?` -- no stop codon in the shifted frame.
    Unknown,
}

/// A parsed HGVS.p frameshift description, e.g. `p.Tyr30SerfsTer50`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frameshift {
    /// Reference amino acid as written (three-letter code).
    pub reference: String,
    /// 1-based codon index of the first changed amino acid.
    pub position: i32,
    /// Amino acids written between the position and the `fsTer` marker.
    pub alternative: String,
    /// New termination codon position, or unknown.
    pub termination: TerminationSite,
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
