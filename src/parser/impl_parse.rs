//! Provide implementation of parsing to data structures.

use std::str::FromStr;

use nom::bytes::complete::tag_no_case;
use nom::character::complete::digit1;
use nom::combinator::{all_consuming, map_res};
use nom::{IResult, Parser};

use crate::parser::ds::*;
use crate::parser::error::Error;
use crate::parser::parse_funcs::{frameshift, protein};

impl Frameshift {
    pub fn parse(input: &str) -> IResult<&str, Self> {
        let (rest, _) = tag_no_case("p.").parse(input)?;
        let (rest, reference) = protein::aa3_any(rest)?;
        let (rest, position) = map_res(digit1, str::parse::<i32>).parse(rest)?;
        let (rest, alternative) = frameshift::alternative_then_marker(rest)?;
        let (rest, termination) = frameshift::termination(rest)?;
        Ok((
            rest,
            Frameshift {
                reference: reference.to_owned(),
                position,
                alternative: alternative.to_owned(),
                termination,
            },
        ))
    }
}

impl FromStr for Frameshift {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        all_consuming(Frameshift::parse)
            .parse(s)
            .map(|(_rest, frameshift)| frameshift)
            .map_err(|_| Error::InvalidFrameshift(s.to_owned()))
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
