//! Implementation of validation.
//!
//! The coordinate mappers themselves never reject their inputs; `start <=
//! stop` on every interval is a documented precondition.  Callers that want
//! that precondition checked run their inputs through this module first.

mod error;

use std::fmt::Debug;

use log::{error, warn};

pub use crate::validator::error::Error;
use crate::mapper::regions::Region;
use crate::transcript::{Exon, FeatureType, Transcript};

/// Trait for validating intervals, transcripts etc.
pub trait Validateable {
    fn validate(&self) -> Result<(), Error>;
}

impl Validateable for Exon {
    fn validate(&self) -> Result<(), Error> {
        if self.start > self.stop {
            Err(Error::InvertedInterval {
                start: self.start,
                stop: self.stop,
            })
        } else {
            Ok(())
        }
    }
}

impl<P> Validateable for Region<P> {
    fn validate(&self) -> Result<(), Error> {
        if self.start > self.stop {
            Err(Error::InvertedInterval {
                start: self.start,
                stop: self.stop,
            })
        } else {
            Ok(())
        }
    }
}

impl Validateable for Transcript {
    fn validate(&self) -> Result<(), Error> {
        for exon in &self.exons {
            exon.validate()?;
        }
        if !self
            .exons
            .iter()
            .any(|exon| exon.feature_type == FeatureType::Cds)
        {
            return Err(Error::NoCodingExons);
        }
        Ok(())
    }
}

/// A validator that only inspects the values themselves.
///
/// Validation is strict if errors cause `Err` results rather than just
/// logging a warning.
pub struct IntrinsicValidator {
    strict: bool,
}

impl IntrinsicValidator {
    pub fn new(strict: bool) -> Self {
        Self { strict }
    }

    /// Return whether validation is strict.
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Validate the given value.
    ///
    /// Depending on the configuration, an `Err` will be returned or only a
    /// warning will be logged.
    pub fn validate<V>(&self, value: &V) -> Result<(), Error>
    where
        V: Validateable + Debug,
    {
        let res = value.validate();
        match (&res, self.is_strict()) {
            (Ok(_), _) => Ok(()),
            (Err(_), false) => {
                warn!("Validation of {:?} failed: {:?}", value, res);
                Ok(())
            }
            (Err(_), true) => {
                error!("Validation of {:?} failed: {:?}", value, res);
                res
            }
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
