//! Parsing of HGVS.p frameshift descriptions.
//!
//! Only the frameshift subset of the protein-level nomenclature is covered,
//! i.e. descriptions of the shape `p.<Ref><Pos><Alt...>fsTer<N|?>`.  Anything
//! else fails to parse; callers treat that as "not a frameshift" rather than
//! as a hard error.

mod ds;
mod error;
mod impl_parse;
pub(crate) mod parse_funcs;

pub use crate::parser::ds::*;
pub use crate::parser::error::Error;

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
