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
    static ref ELEVATION: Regex =
        Regex::new(r"(?i)^([+-]?[0-9]+(?:\.[0-9]+)?)\s*(m|ft|meter|metre|feet?)$").unwrap();
}

const FEET_IN_METER: f64 = 0.3048;

/// Elevations below or above are unusual in aviation.
const TYPICAL_RANGE_M: (f64, f64) = (-1000.0, 30000.0);

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ElevationUnit {
    Meters,
    Feet,
}

/// An elevation in the unit it was published in.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Elevation {
    pub value: f64,
    pub unit: ElevationUnit,
}

impl Elevation {
    /// Returns the elevation in meters.
    pub fn meters(&self) -> f64 {
        match self.unit {
            ElevationUnit::Meters => self.value,
            ElevationUnit::Feet => self.value * FEET_IN_METER,
        }
    }
}

impl fmt::Display for Elevation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            ElevationUnit::Meters => write!(f, "{} m", self.value),
            ElevationUnit::Feet => write!(f, "{} ft", self.value),
        }
    }
}

/// Validates an elevation like `53 ft` or `16.2 m`.
///
/// The unit is case insensitive and can be one of `m`, `meter`, `metre`,
/// `ft` or `feet`.
pub fn validate_elevation(s: &str) -> Validation<Elevation> {
    let Some(caps) = ELEVATION.captures(s.trim()) else {
        return Validation::invalid(
            "Invalid elevation format. Expected: number followed by unit (m, ft, meter, feet)",
        );
    };

    let Ok(value) = caps[1].parse::<f64>() else {
        return Validation::invalid("Invalid numeric value for elevation");
    };

    let unit = if caps[2].to_lowercase().starts_with('f') {
        ElevationUnit::Feet
    } else {
        ElevationUnit::Meters
    };

    let elevation = Elevation { value, unit };
    let meters = elevation.meters();

    let mut result = Validation::valid(elevation);
    if meters < TYPICAL_RANGE_M.0 || meters > TYPICAL_RANGE_M.1 {
        result.warn("Elevation value outside typical aviation range (-1000m to 30000m)");
    }

    result
}
