// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
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

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Validation;

lazy_static! {
    static ref MAG_VAR: Regex =
        Regex::new(r"(?i)^([0-9]{1,3}(?:\.[0-9]+)?)°?\s*([EW])$").unwrap();
}

/// Magnetic variation as published in the AIP.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MagneticVariation {
    East(f64),
    West(f64),
}

impl MagneticVariation {
    /// Returns the absolute variation in degrees.
    pub fn degrees(&self) -> f64 {
        match self {
            Self::East(v) | Self::West(v) => *v,
        }
    }

    /// Returns the variation in degrees where east is positive.
    pub fn signed(&self) -> f64 {
        match self {
            Self::East(v) => *v,
            Self::West(v) => -v,
        }
    }
}

impl fmt::Display for MagneticVariation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::East(v) => write!(f, "{v}°E"),
            Self::West(v) => write!(f, "{v}°W"),
        }
    }
}

/// Validates a magnetic variation like `3°E` or `1.5 W`.
///
/// Variations above 30° are valid but get a warning since they occur only
/// close to the magnetic poles.
pub fn validate_magnetic_variation(s: &str) -> Validation<MagneticVariation> {
    let Some(caps) = MAG_VAR.captures(s.trim()) else {
        return Validation::invalid(
            "Invalid magnetic variation format. Expected: degrees followed by E or W",
        );
    };

    let Ok(degrees) = caps[1].parse::<f64>() else {
        return Validation::invalid("Invalid numeric value for magnetic variation");
    };
    if degrees > 180.0 {
        return Validation::invalid("Magnetic variation cannot exceed 180 degrees");
    }

    let variation = if caps[2].eq_ignore_ascii_case("E") {
        MagneticVariation::East(degrees)
    } else {
        MagneticVariation::West(degrees)
    };

    let mut result = Validation::valid(variation);
    if degrees > 30.0 {
        result.warn("Magnetic variation greater than 30° is unusual");
    }

    result
}
