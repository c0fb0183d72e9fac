//! Error type definition.

use thiserror::Error;

/// Error type for parsing of frameshift notation.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid frameshift description.
    #[error("{0} is not a valid frameshift description")]
    InvalidFrameshift(String),
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
