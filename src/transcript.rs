//! Transcript structure value objects as consumed by the coordinate mappers.
//!
//! The types here mirror the shape of the upstream annotation data: exons are
//! plain `{featureType, start, stop}` records in arbitrary order, transcripts
//! carry a strand and an exon list, variants carry a genomic anchor position
//! and an optional HGVS.p description.  All coordinates are 1-based and
//! inclusive.

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for transcript data handling.
#[derive(Error, Debug)]
pub enum Error {
    /// Problem deserializing upstream annotation data.
    #[error("problem deserializing transcript data")]
    Deserialize(#[from] serde_json::Error),
    /// Invalid strand value.
    #[error("{0} is not a valid strand")]
    InvalidStrand(String),
}

/// Direction of transcription.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strand {
    /// Forward strand.
    #[serde(rename = "+")]
    Plus,
    /// Reverse strand.
    #[serde(rename = "-")]
    Minus,
}

impl Display for Strand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strand::Plus => write!(f, "+"),
            Strand::Minus => write!(f, "-"),
        }
    }
}

impl FromStr for Strand {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Strand::Plus),
            "-" => Ok(Strand::Minus),
            _ => Err(Error::InvalidStrand(s.to_owned())),
        }
    }
}

/// Kind of an annotated transcript feature.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureType {
    /// Coding sequence.
    #[serde(rename = "CDS")]
    Cds,
    /// Untranslated region.
    #[serde(rename = "UTR")]
    Utr,
    /// Plain exon.
    #[serde(rename = "exon")]
    Exon,
    /// Other values are tolerated but not interpreted.
    Other,
}

impl<'de> Deserialize<'de> for FeatureType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(match value.as_str() {
            "CDS" => FeatureType::Cds,
            "UTR" => FeatureType::Utr,
            "exon" => FeatureType::Exon,
            _ => FeatureType::Other,
        })
    }
}

/// One annotated feature of a transcript.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Exon {
    pub feature_type: FeatureType,
    /// 1-based inclusive genomic start, `start <= stop`.
    pub start: i32,
    /// 1-based inclusive genomic stop.
    pub stop: i32,
}

impl Exon {
    /// Number of nucleotides covered (coordinates are inclusive).
    pub fn size(&self) -> i32 {
        self.stop - self.start + 1
    }

    /// The 3'-most genomic coordinate with respect to `strand`.
    pub fn three_prime_end(&self, strand: Strand) -> i32 {
        match strand {
            Strand::Plus => self.stop,
            Strand::Minus => self.start,
        }
    }
}

/// A transcript as consumed by the coordinate mappers.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    pub strand: Strand,
    /// Exons in any order; consumers sort before processing.
    pub exons: Vec<Exon>,
}

impl Transcript {
    /// Deserialize a transcript from upstream annotation JSON.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        serde_json::from_str(json).map_err(Error::from)
    }

    /// Return the exons sorted into 5'->3' transcript order, i.e. by genomic
    /// start ascending on `+` and descending on `-`.
    ///
    /// Sorting operates on a copy; the transcript is never mutated.
    pub fn exons_in_transcript_order(&self) -> Vec<Exon> {
        let mut exons = self.exons.clone();
        match self.strand {
            Strand::Plus => exons.sort_by_key(|exon| exon.start),
            Strand::Minus => exons.sort_by_key(|exon| std::cmp::Reverse(exon.start)),
        }
        exons
    }

    /// Return the exons from the first CDS exon (in 5'->3' order) through the
    /// last exon, i.e. the coding sequence plus any trailing UTR.
    ///
    /// Empty when the transcript has no CDS exon at all.
    pub fn coding_and_downstream(&self) -> Vec<Exon> {
        let exons = self.exons_in_transcript_order();
        match exons
            .iter()
            .position(|exon| exon.feature_type == FeatureType::Cds)
        {
            Some(first_cds) => exons[first_cds..].to_vec(),
            None => Vec::new(),
        }
    }
}

/// A variant as consumed by the frameshift resolver.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    /// Genomic anchor position, used as fallback.
    pub pos: i32,
    /// HGVS protein-level description, when available.
    pub hgvsp: Option<String>,
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    fn exon(feature_type: FeatureType, start: i32, stop: i32) -> Exon {
        Exon {
            feature_type,
            start,
            stop,
        }
    }

    #[test]
    fn strand_round_trip() -> anyhow::Result<()> {
        assert_eq!("+".parse::<Strand>()?, Strand::Plus);
        assert_eq!("-".parse::<Strand>()?, Strand::Minus);
        assert_eq!(format!("{}", Strand::Plus), "+");
        assert_eq!(format!("{}", Strand::Minus), "-");
        assert!("*".parse::<Strand>().is_err());
        Ok(())
    }

    #[test]
    fn from_json_upstream_spelling() -> anyhow::Result<()> {
        let transcript = Transcript::from_json(
            r#"{
                "strand": "+",
                "exons": [
                    {"featureType": "UTR", "start": 123, "stop": 222},
                    {"featureType": "CDS", "start": 223, "stop": 322},
                    {"featureType": "five_prime_thing", "start": 1, "stop": 2}
                ]
            }"#,
        )?;
        assert_eq!(transcript.strand, Strand::Plus);
        assert_eq!(transcript.exons[0].feature_type, FeatureType::Utr);
        assert_eq!(transcript.exons[1].feature_type, FeatureType::Cds);
        // Unknown feature types are tolerated.
        assert_eq!(transcript.exons[2].feature_type, FeatureType::Other);
        Ok(())
    }

    #[test]
    fn transcript_order_forward() {
        let transcript = Transcript {
            strand: Strand::Plus,
            exons: vec![
                exon(FeatureType::Cds, 423, 522),
                exon(FeatureType::Utr, 123, 222),
                exon(FeatureType::Cds, 223, 322),
            ],
        };
        let starts: Vec<i32> = transcript
            .exons_in_transcript_order()
            .iter()
            .map(|exon| exon.start)
            .collect();
        assert_eq!(starts, vec![123, 223, 423]);
    }

    #[test]
    fn transcript_order_reverse() {
        let transcript = Transcript {
            strand: Strand::Minus,
            exons: vec![
                exon(FeatureType::Cds, 423, 522),
                exon(FeatureType::Utr, 123, 222),
                exon(FeatureType::Cds, 223, 322),
            ],
        };
        let starts: Vec<i32> = transcript
            .exons_in_transcript_order()
            .iter()
            .map(|exon| exon.start)
            .collect();
        assert_eq!(starts, vec![423, 223, 123]);
    }

    #[test]
    fn coding_and_downstream_drops_leading_utr() {
        let transcript = Transcript {
            strand: Strand::Plus,
            exons: vec![
                exon(FeatureType::Utr, 123, 222),
                exon(FeatureType::Cds, 223, 322),
                exon(FeatureType::Utr, 723, 822),
                exon(FeatureType::Cds, 423, 522),
            ],
        };
        let coding = transcript.coding_and_downstream();
        assert_eq!(
            coding,
            vec![
                exon(FeatureType::Cds, 223, 322),
                exon(FeatureType::Cds, 423, 522),
                exon(FeatureType::Utr, 723, 822),
            ]
        );
        // The trailing UTR's 3' end is the transcript end fallback.
        assert_eq!(coding.last().unwrap().three_prime_end(Strand::Plus), 822);
    }

    #[test]
    fn coding_and_downstream_keeps_five_prime_utr_on_reverse_strand() {
        let transcript = Transcript {
            strand: Strand::Minus,
            exons: vec![
                exon(FeatureType::Utr, 123, 222),
                exon(FeatureType::Cds, 223, 322),
                exon(FeatureType::Utr, 723, 822),
            ],
        };
        // On `-` the genomically first UTR is the 3' trailing one.
        let coding = transcript.coding_and_downstream();
        assert_eq!(
            coding,
            vec![
                exon(FeatureType::Cds, 223, 322),
                exon(FeatureType::Utr, 123, 222),
            ]
        );
        assert_eq!(coding.last().unwrap().three_prime_end(Strand::Minus), 123);
    }

    #[test]
    fn coding_and_downstream_empty_without_cds() {
        let transcript = Transcript {
            strand: Strand::Plus,
            exons: vec![exon(FeatureType::Utr, 123, 222)],
        };
        assert_eq!(transcript.coding_and_downstream(), Vec::new());
    }

    #[test]
    fn exon_size_and_three_prime_end() {
        let e = exon(FeatureType::Cds, 223, 322);
        assert_eq!(e.size(), 100);
        assert_eq!(e.three_prime_end(Strand::Plus), 322);
        assert_eq!(e.three_prime_end(Strand::Minus), 223);
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
