//! Implementation of parser functions.

/// Code for parsing amino acid residues.
pub mod protein {
    /// Three letters in either case.
    ///
    /// Frameshift notation is matched case-insensitively and untyped residue
    /// values are tolerated, so no triplet table lookup happens here.
    pub fn aa3_any(input: &str) -> Result<(&str, &str), nom::Err<nom::error::Error<&str>>> {
        let bytes = input.as_bytes();
        if bytes.len() >= 3 && bytes[..3].iter().all(u8::is_ascii_alphabetic) {
            Ok((&input[3..], &input[..3]))
        } else {
            Err(nom::Err::Error(nom::error::Error::new(
                input,
                nom::error::ErrorKind::Fail,
            )))
        }
    }
}

/// Code for parsing the frameshift tail, `<Alt...>fsTer<N|?>`.
pub mod frameshift {
    use nom::branch::alt;
    use nom::bytes::complete::tag;
    use nom::character::complete::digit1;
    use nom::combinator::{map, map_res};
    use nom::{IResult, Parser};

    use crate::parser::ds::TerminationSite;

    /// Marker between the new amino acids and the termination position.
    const MARKER: &[u8; 5] = b"fsTer";

    /// Consume the new amino acids up to and including the `fsTer` marker,
    /// returning the amino acids.
    ///
    /// The amino acids and the marker together form one run of letters; the
    /// marker must be the last five characters of that run (whatever follows
    /// it is a number or `?`) and must be preceded by at least three letters.
    pub fn alternative_then_marker(input: &str) -> IResult<&str, &str> {
        let bytes = input.as_bytes();
        let run = bytes
            .iter()
            .take_while(|c| c.is_ascii_alphabetic())
            .count();
        if run >= 3 + MARKER.len() && bytes[run - MARKER.len()..run].eq_ignore_ascii_case(MARKER) {
            Ok((&input[run..], &input[..run - MARKER.len()]))
        } else {
            Err(nom::Err::Error(nom::error::Error::new(
                input,
                nom::error::ErrorKind::TakeUntil,
            )))
        }
    }

    /// Parse the termination site, a codon count or `?`.
    pub fn termination(input: &str) -> IResult<&str, TerminationSite> {
        alt((
            map_res(digit1, |count: &str| {
                count.parse::<i32>().map(TerminationSite::Known)
            }),
            map(tag("?"), |_| TerminationSite::Unknown),
        ))
        .parse(input)
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
